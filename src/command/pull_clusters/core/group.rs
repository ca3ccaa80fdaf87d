use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::warn;

/// FASTQ files keyed by the lane/read part of their name.
pub type FastqGroup = BTreeMap<String, PathBuf>;

/// Key for one FASTQ file: the file name without extension, minus its first
/// underscore-separated field. `sample1_L001_R1.fastq` gives `L001_R1`.
///
/// Names that do not follow `<sample>_<rest>.<ext>` give degenerate keys;
/// a name without any underscore gives the empty key.
pub fn fastq_key(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    stem.split('_').skip(1).join("_")
}

/// Group files by key. When two files give the same key the later one
/// replaces the earlier, and their outputs would otherwise clash.
///
/// Scanning the output directory of an earlier run picks up its outputs
/// too. An old `<prefix>_<key>.fastq` shares its key with the input it came
/// from, so a rerun filters whichever of the two sorts last.
pub fn make_fastq_groups(list_fastq: &[PathBuf]) -> FastqGroup {
    let mut groups = FastqGroup::new();
    for path in list_fastq {
        let key = fastq_key(path);
        if let Some(previous) = groups.insert(key.clone(), path.clone()) {
            warn!(
                "Files {} and {} both map to key '{}'; only {} will be filtered",
                previous.display(),
                path.display(),
                key,
                path.display()
            );
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fastq_key() {
        assert_eq!(fastq_key(Path::new("sample1_L001_R1.fastq")), "L001_R1");
        assert_eq!(fastq_key(Path::new("/runs/run_7/sample1_L001_R1.fastq")), "L001_R1");
        assert_eq!(fastq_key(Path::new("sample1_L001.fastq")), "L001");
        assert_eq!(fastq_key(Path::new("sample1.fastq")), "");
        assert_eq!(fastq_key(Path::new("sample1__R1.fastq")), "_R1");
        assert_eq!(fastq_key(Path::new("s_L001_R1.trimmed.fastq")), "L001_R1.trimmed");
    }

    #[test]
    fn test_make_fastq_groups() {
        let files = vec![
            PathBuf::from("/d/tileA_L001_R1.fastq"),
            PathBuf::from("/d/tileA_L001_R2.fastq"),
        ];
        let groups = make_fastq_groups(&files);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["L001_R1"], files[0]);
        assert_eq!(groups["L001_R2"], files[1]);
    }

    #[test]
    fn test_collision_last_wins() {
        let files = vec![
            PathBuf::from("/d/tileA_L001_R1.fastq"),
            PathBuf::from("/d/tileB_L001_R1.fastq"),
        ];
        let groups = make_fastq_groups(&files);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups["L001_R1"], files[1]);
    }
}
