use std::path::{Path, PathBuf};

use log::{info, warn};
use walkdir::WalkDir;

use crate::runtime::Error;

/// Files directly inside `dir` whose name ends with one of `extensions` and
/// with none of `excluded`, compared case-insensitively. Subdirectories are
/// not descended into and contents are never inspected.
///
/// An empty directory is not an error; the result is then empty.
pub fn find_files_in_directory(
    dir: &Path,
    extensions: Option<&[String]>,
    excluded: Option<&[String]>,
) -> Result<Vec<PathBuf>, Error> {
    let mut list_files = Vec::new();
    let mut num_entries = 0;
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| Error::file_access(dir, e.into()))?;
        num_entries += 1;
        if !entry.path().is_file() {
            continue;
        }
        let fname = entry.file_name().to_string_lossy();
        if extension_match(&fname, extensions) && !extension_match(&fname, excluded) {
            info!("found:\t\t{}", entry.path().display());
            list_files.push(entry.into_path());
        }
    }

    if let Some(msg) = empty_scan_message(dir, num_entries, list_files.len()) {
        warn!("{}", msg);
    }
    Ok(list_files)
}

fn empty_scan_message(dir: &Path, num_entries: usize, num_found: usize) -> Option<String> {
    match (num_entries, num_found) {
        (0, _) => Some(format!("\tNONE FOUND in {}", dir.display())),
        (_, 0) => Some(format!(
            "\tno matching files among {} entries in {}",
            num_entries,
            dir.display()
        )),
        _ => None,
    }
}

fn extension_match(fname: &str, extensions: Option<&[String]>) -> bool {
    let fname = fname.to_lowercase();
    extensions.map_or(false, |extensions| {
        extensions
            .iter()
            .any(|ext| fname.ends_with(&ext.to_lowercase()))
    })
}
