use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, error, info, warn};

use super::filter::{filter_fastq, filtered_fastq_path, FilterResult};
use super::group::{make_fastq_groups, FastqGroup};
use super::params;
use crate::fileformat::ClusterSet;
use crate::runtime::Error;
use crate::utils::find_files_in_directory;

/// One unit of work: filter a single FASTQ file.
#[derive(Debug, Clone)]
pub struct FilterTask {
    pub key: String,
    pub path_fastq: PathBuf,
}

impl FilterTask {
    pub fn run(
        &self,
        cluster_set: &ClusterSet,
        params_io: &params::IO,
    ) -> Result<FilterResult, Error> {
        filter_fastq(
            cluster_set,
            &self.path_fastq,
            &self.key,
            &params_io.output_prefix,
            &params_io.path_out_dir,
        )
    }
}

pub struct ClusterPuller {}

impl ClusterPuller {
    /// Scan the input directory, load the cluster list and filter every
    /// FASTQ file found.
    pub fn run(
        params_io: &Arc<params::IO>,
        params_runtime: &Arc<params::Runtime>,
        params_threading: &Arc<params::Threading>,
    ) -> Result<Vec<FilterResult>, Error> {
        let list_fastq = find_files_in_directory(
            &params_io.path_fastq_dir,
            Some(params_runtime.extensions.as_slice()),
            Some(params_runtime.excluded_extensions.as_slice()),
        )?;
        let cluster_set = Arc::new(ClusterSet::from_path(&params_io.path_cluster_list)?);
        let groups = make_fastq_groups(&list_fastq);
        for path in Self::outputs_among_inputs(&groups, &list_fastq, params_io) {
            warn!(
                "Output {} is also one of the scanned input files and will be overwritten",
                path.display()
            );
        }

        Self::filter_all(&groups, &cluster_set, params_io, params_threading.threads_work)
    }

    /// Scanned files that some group would write its output to. Happens
    /// when the output directory is the input directory and either a
    /// previous run's outputs are picked up again, or the prefix equals the
    /// sample field of an input name.
    pub fn outputs_among_inputs(
        groups: &FastqGroup,
        list_fastq: &[PathBuf],
        params_io: &params::IO,
    ) -> Vec<PathBuf> {
        groups
            .keys()
            .map(|key| {
                PathBuf::from(filtered_fastq_path(
                    &params_io.path_out_dir,
                    &params_io.output_prefix,
                    key,
                ))
            })
            .filter(|path_out| list_fastq.iter().any(|p| same_path(p, path_out)))
            .collect()
    }

    /// Filter every file of `groups`, one result per entry. With one worker
    /// (or none requested) files are done in turn and the first failure stops
    /// the batch. Otherwise up to `threads_work` files are filtered at once;
    /// results come back in no particular order once all tasks are done.
    pub fn filter_all(
        groups: &FastqGroup,
        cluster_set: &Arc<ClusterSet>,
        params_io: &Arc<params::IO>,
        threads_work: usize,
    ) -> Result<Vec<FilterResult>, Error> {
        let tasks: Vec<FilterTask> = groups
            .iter()
            .map(|(key, path)| FilterTask {
                key: key.clone(),
                path_fastq: path.clone(),
            })
            .collect();

        if threads_work <= 1 {
            tasks
                .iter()
                .map(|task| task.run(cluster_set, params_io))
                .collect()
        } else {
            Self::filter_parallel(tasks, cluster_set, params_io, threads_work)
        }
    }

    fn filter_parallel(
        tasks: Vec<FilterTask>,
        cluster_set: &Arc<ClusterSet>,
        params_io: &Arc<params::IO>,
        threads_work: usize,
    ) -> Result<Vec<FilterResult>, Error> {
        let num_tasks = tasks.len();
        info!("Filtering {} files using {} workers", num_tasks, threads_work);

        let thread_pool = threadpool::ThreadPool::new(threads_work);
        let (tx_result, rx_result) =
            crossbeam::channel::unbounded::<Result<FilterResult, Error>>();

        for task in tasks {
            let cluster_set = Arc::clone(cluster_set);
            let params_io = Arc::clone(params_io);
            let tx_result = tx_result.clone();

            thread_pool.execute(move || {
                debug!("Worker started on {}", task.path_fastq.display());
                let result = task.run(&cluster_set, &params_io);
                let _ = tx_result.send(result);
            });
        }
        drop(tx_result);
        thread_pool.join();

        let mut list_results = Vec::with_capacity(num_tasks);
        let mut first_error = None;
        let mut num_failed = 0;
        for result in rx_result.iter() {
            match result {
                Ok(r) => list_results.push(r),
                Err(e) => {
                    error!("{}", e);
                    num_failed += 1;
                    first_error.get_or_insert(e);
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        let num_missing = num_tasks - list_results.len() - num_failed;
        if num_missing > 0 {
            return Err(Error::task(Some(format!(
                "{} of {} tasks did not report a result",
                num_missing, num_tasks
            ))));
        }
        Ok(list_results)
    }
}

fn same_path(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
