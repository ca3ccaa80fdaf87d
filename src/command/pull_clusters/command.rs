use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use super::core::{params, ClusterPuller};
use crate::runtime::Error;
use crate::utils::{dir_with_separator, file_stem_string};

pub const DEFAULT_NUM_CORES: usize = 1;
pub const DEFAULT_EXTENSION: &str = ".fastq";

/// Commandline option: isolate specific clusters from a directory of fastq files
#[derive(Args)]
pub struct PullClustersCMD {
    /// File containing list of clusters to select
    #[arg(long = "cluster_list", visible_alias = "cl", value_parser)]
    pub path_cluster_list: PathBuf,

    /// Directory containing fastq files
    #[arg(long = "fastq_directory", visible_alias = "fd", value_parser)]
    pub path_fastq_dir: PathBuf,

    /// Output directory for filtered fastq files (default is the fastq directory)
    #[arg(long = "output_directory", visible_alias = "od", value_parser)]
    pub path_out_dir: Option<PathBuf>,

    /// Output prefix for filtered fastq files (default is the cluster list file name)
    #[arg(long = "output_prefix", visible_alias = "op")]
    pub output_prefix: Option<String>,

    /// Number of fastq files to filter at once
    #[arg(short = 'n', long = "num_cores", default_value_t = DEFAULT_NUM_CORES)]
    pub num_cores: usize,

    /// File extensions to pick up, comma separated
    #[arg(long = "extension", value_delimiter = ',', default_value = DEFAULT_EXTENSION)]
    pub extensions: Vec<String>,

    /// File extensions to skip, comma separated
    #[arg(long = "exclude-extension", value_delimiter = ',')]
    pub excluded_extensions: Vec<String>,
}

impl PullClustersCMD {
    /// Run the commandline option
    pub fn try_execute(&mut self) -> Result<()> {
        let (params_io, params_runtime, params_threading) = self.to_params()?;

        let results = ClusterPuller::run(
            &Arc::new(params_io),
            &Arc::new(params_runtime),
            &Arc::new(params_threading),
        )?;

        for result in &results {
            println!("{}", result);
        }

        log::info!("Pull-clusters has finished successfully");
        Ok(())
    }

    /// Check the directories and fill in defaults. Nothing is read or
    /// written if this fails.
    pub fn to_params(&self) -> Result<(params::IO, params::Runtime, params::Threading), Error> {
        if !self.path_fastq_dir.is_dir() {
            return Err(Error::invalid_path(&self.path_fastq_dir, "fastq"));
        }

        let path_out_dir = self
            .path_out_dir
            .clone()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| self.path_fastq_dir.clone());
        if !path_out_dir.is_dir() {
            return Err(Error::invalid_path(&path_out_dir, "output"));
        }

        let output_prefix = self
            .output_prefix
            .clone()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| file_stem_string(&self.path_cluster_list));

        let params_io = params::IO {
            path_cluster_list: self.path_cluster_list.clone(),
            path_fastq_dir: self.path_fastq_dir.clone(),
            path_out_dir: dir_with_separator(&path_out_dir),
            output_prefix,
        };
        let params_runtime = params::Runtime {
            extensions: self.extensions.clone(),
            excluded_extensions: self.excluded_extensions.clone(),
        };
        let params_threading = params::Threading {
            threads_work: self.num_cores,
        };
        Ok((params_io, params_runtime, params_threading))
    }
}
