use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;
use rustc_hash::FxHashSet;

use crate::runtime::Error;

/// Read names to keep, one per line of a cluster list file.
///
/// Lines are trimmed of surrounding whitespace. A blank line is kept as the
/// empty name. Duplicate lines collapse.
#[derive(Debug, Default, Clone)]
pub struct ClusterSet {
    ids: FxHashSet<String>,
}

impl ClusterSet {
    pub fn from_path(path: &Path) -> Result<ClusterSet, Error> {
        let file = File::open(path).map_err(|e| Error::file_access(path, e))?;
        let (set, num_lines) =
            Self::from_reader(BufReader::new(file)).map_err(|e| Error::file_access(path, e))?;

        info!(
            "Read {} clusters to keep from {} ({} duplicate lines)",
            set.len(),
            path.display(),
            num_lines - set.len()
        );
        Ok(set)
    }

    /// Returns the set and the number of lines it was built from.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<(ClusterSet, usize)> {
        let mut ids = FxHashSet::default();
        let mut num_lines = 0;
        for line in reader.lines() {
            ids.insert(line?.trim().to_string());
            num_lines += 1;
        }
        Ok((ClusterSet { ids }, num_lines))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Names that are not valid UTF-8 never match.
    pub fn contains_bytes(&self, id: &[u8]) -> bool {
        std::str::from_utf8(id).map_or(false, |id| self.contains(id))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ClusterSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        ClusterSet {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
