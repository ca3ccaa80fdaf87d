use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::fileformat::{open_fastq, ClusterSet};
use crate::runtime::Error;

/// Outcome of filtering one FASTQ file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilterResult {
    pub path_out: String,
    pub kept: usize,
    pub total: usize,
}

impl fmt::Display for FilterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "file {} has {} clusters, filtered down from {}",
            self.path_out, self.kept, self.total
        )
    }
}

/// Output file name for one group. Plain concatenation, so `path_out_dir`
/// must end in a separator.
pub fn filtered_fastq_path(path_out_dir: &str, output_prefix: &str, key: &str) -> String {
    format!("{}{}_{}.fastq", path_out_dir, output_prefix, key)
}

/// Keep the records of one FASTQ file whose read name is in `cluster_set`
/// and write them, in input order, to `<path_out_dir><output_prefix>_<key>.fastq`.
///
/// Records are taken four lines at a time and never validated, so a file
/// that is not aligned on record boundaries gives wrong matches rather than
/// an error. A trailing partial record is neither counted nor kept. Kept
/// records are held in memory until the whole input has been read.
pub fn filter_fastq(
    cluster_set: &ClusterSet,
    path_fastq: &Path,
    key: &str,
    output_prefix: &str,
    path_out_dir: &str,
) -> Result<FilterResult, Error> {
    let mut reader = open_fastq(path_fastq)?;

    let mut kept_records = Vec::new();
    let mut total = 0;
    while let Some(record) = reader
        .next_record()
        .map_err(|e| Error::file_access(path_fastq, e))?
    {
        total += 1;
        if cluster_set.contains_bytes(record.read_id()) {
            kept_records.push(record);
        }
    }

    let path_out = filtered_fastq_path(path_out_dir, output_prefix, key);
    let file_out = File::create(&path_out).map_err(|e| Error::file_access(&path_out, e))?;
    let mut bufwriter_out = BufWriter::new(file_out);
    for record in &kept_records {
        record
            .write_to(&mut bufwriter_out)
            .map_err(|e| Error::file_access(&path_out, e))?;
    }
    bufwriter_out
        .flush()
        .map_err(|e| Error::file_access(&path_out, e))?;

    debug!(
        "Filtered {}: kept {} of {} records",
        path_fastq.display(),
        kept_records.len(),
        total
    );
    Ok(FilterResult {
        path_out,
        kept: kept_records.len(),
        total,
    })
}
