use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid {} directory selection: {:?} is not a directory.", role, path)]
    InvalidPath { path: PathBuf, role: &'static str },

    #[error("Failed to access file at {:?}", path)]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}", msg)]
    Usage { msg: String },

    #[error("Filtering task failed{}", Error::format_msg_as_detail(msg))]
    Task { msg: Option<String> },
}

impl Error {
    #[cold]
    pub fn invalid_path<P: AsRef<std::path::Path>>(path: P, role: &'static str) -> Self {
        Error::InvalidPath {
            path: path.as_ref().to_path_buf(),
            role,
        }
    }

    #[cold]
    pub fn file_access<P: AsRef<std::path::Path>>(path: P, source: std::io::Error) -> Self {
        Error::FileAccess {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    #[cold]
    pub fn usage<M: Into<String>>(msg: M) -> Self {
        Error::Usage { msg: msg.into() }
    }

    #[cold]
    pub fn task<M: Into<String>>(msg: Option<M>) -> Self {
        Error::Task {
            msg: msg.map(|m| m.into()),
        }
    }

    pub fn format_msg_as_detail(msg: &Option<String>) -> String {
        match msg {
            Some(m) => format!(" ({})", m),
            None => String::new(),
        }
    }
}
