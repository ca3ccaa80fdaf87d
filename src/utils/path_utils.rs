use std::path::{Path, MAIN_SEPARATOR};

/// Directory as a string that always ends in a separator, so file names can
/// be appended by plain concatenation.
pub fn dir_with_separator<P: AsRef<Path>>(dir: P) -> String {
    let mut s = dir.as_ref().to_string_lossy().into_owned();
    if !s.ends_with(MAIN_SEPARATOR) && !s.ends_with('/') {
        s.push(MAIN_SEPARATOR);
    }
    s
}

/// File name without its final extension, e.g. `clusters.txt` -> `clusters`.
pub fn file_stem_string<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
