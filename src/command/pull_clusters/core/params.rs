#[derive(Debug, Clone)]
pub struct IO {
    pub path_cluster_list: std::path::PathBuf,
    pub path_fastq_dir: std::path::PathBuf,
    /// Always ends in a path separator; output names are appended to it.
    pub path_out_dir: String,
    pub output_prefix: String,
}

#[derive(Debug, Clone)]
pub struct Runtime {
    pub extensions: Vec<String>,
    pub excluded_extensions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Threading {
    pub threads_work: usize,
}
