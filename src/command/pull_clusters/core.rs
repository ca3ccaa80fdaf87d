pub mod fanout;
pub mod filter;
pub mod group;
pub mod params;

pub use fanout::{ClusterPuller, FilterTask};
pub use filter::{filter_fastq, filtered_fastq_path, FilterResult};
pub use group::{fastq_key, make_fastq_groups, FastqGroup};
