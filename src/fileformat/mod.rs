pub mod cluster_list;
pub mod fastq;

pub use cluster_list::ClusterSet;

pub use fastq::open_fastq;
pub use fastq::FastqChunkReader;
pub use fastq::RawFastqRecord;
