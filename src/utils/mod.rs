mod find_files;
mod path_utils;

pub use find_files::find_files_in_directory;

pub use path_utils::dir_with_separator;
pub use path_utils::file_stem_string;
