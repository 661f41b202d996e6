pub mod catalog;
pub mod file_store;

pub use catalog::{DatasetError, InMemoryCatalog};
pub use file_store::DiskFileStore;
