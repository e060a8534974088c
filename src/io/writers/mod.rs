pub mod yaml;

pub use yaml::{METADATA_FILENAME, WriterError, write_dataset_yaml};
