//! crates/class_resources_core/src/service.rs
//!
//! The read operations offered to a student, written against the ports.
//!
//! References that do not resolve (an enrollment for an unknown class, a
//! bookmark for an unknown resource) are dropped from the result instead of
//! failing the whole request.

use crate::domain::{BookmarkedResource, ClassSummary, Resource};
use crate::files::{content_type_for, validate_filename};
use crate::ports::{ByteStream, CatalogRepository, PortError, PortResult, ResourceFileStore};

/// A resource file ready to be sent to the client.
pub struct ResourceFile {
    pub content_type: &'static str,
    pub size: u64,
    pub body: ByteStream,
}

/// Lists the classes `user_id` is enrolled in, in enrollment order.
///
/// Duplicate enrollments produce duplicate entries.
pub async fn list_classes_for_user(
    catalog: &dyn CatalogRepository,
    user_id: &str,
) -> PortResult<Vec<ClassSummary>> {
    let enrollments = catalog.get_enrollments_for_user(user_id).await?;
    let mut summaries = Vec::with_capacity(enrollments.len());

    for enrollment in enrollments {
        let class = match catalog.get_class_by_code(&enrollment.class_code).await {
            Ok(class) => class,
            Err(PortError::NotFound(_)) => continue,
            Err(e) => return Err(e),
        };
        let item_count = catalog
            .count_resources_for_class(&enrollment.class_code)
            .await?;

        summaries.push(ClassSummary {
            code: class.code,
            name: class.name,
            item_count,
        });
    }

    Ok(summaries)
}

/// Lists every resource of `class_code`, provided `user_id` is enrolled in it.
pub async fn list_class_resources(
    catalog: &dyn CatalogRepository,
    user_id: &str,
    class_code: &str,
) -> PortResult<Vec<Resource>> {
    if !catalog.is_enrolled(user_id, class_code).await? {
        return Err(PortError::Unauthorized);
    }
    catalog.get_resources_for_class(class_code).await
}

/// Lists the resources `user_id` bookmarked, each stamped with its bookmark time.
pub async fn list_bookmarks_for_user(
    catalog: &dyn CatalogRepository,
    user_id: &str,
) -> PortResult<Vec<BookmarkedResource>> {
    let bookmarks = catalog.get_bookmarks_for_user(user_id).await?;
    let mut entries = Vec::with_capacity(bookmarks.len());

    for bookmark in bookmarks {
        match catalog.get_resource_by_id(&bookmark.resource_id).await {
            Ok(resource) => entries.push(BookmarkedResource::new(resource, bookmark.created_at)),
            Err(PortError::NotFound(_)) => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(entries)
}

/// Opens a resource file after checking its name, and picks its content type.
pub async fn open_resource_file(
    files: &dyn ResourceFileStore,
    filename: &str,
) -> PortResult<ResourceFile> {
    validate_filename(filename)?;
    let stored = files.open(filename).await?;

    Ok(ResourceFile {
        content_type: content_type_for(filename),
        size: stored.size,
        body: stored.body,
    })
}
