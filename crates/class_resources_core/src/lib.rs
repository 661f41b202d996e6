pub mod domain;
pub mod files;
pub mod ports;
pub mod service;

pub use domain::{
    Bookmark, BookmarkedResource, Class, ClassSummary, Dataset, Enrollment, Resource, User,
};
pub use ports::{
    ByteStream, CatalogRepository, PortError, PortResult, ResourceFileStore, StoredFile,
};
pub use service::ResourceFile;
