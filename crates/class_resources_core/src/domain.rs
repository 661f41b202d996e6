//! crates/class_resources_core/src/domain.rs
//!
//! Defines the core data structures of the class resources catalog.
//!
//! Entities mirror the rows of the JSON dataset. Fields the service does not
//! interpret are kept in a flattened map so that they round-trip to clients
//! untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A registered user. Only `id` is interpreted; the rest is profile data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

/// A class, identified by its course code.
///
/// `name` is passed through as whatever JSON the dataset holds (`null` when absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub code: String,
    #[serde(default)]
    pub name: Value,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// A learning resource attached to exactly one class.
///
/// The `id` is kept as a raw JSON value because datasets use both numeric and
/// string identifiers, and bookmarks must match it exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: Value,
    pub class_code: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Join row between a user and a class they are registered in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub user_id: String,
    pub class_code: String,
}

/// Join row between a user and a resource they saved.
///
/// The timestamp is opaque: it is copied to clients exactly as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub user_id: String,
    pub resource_id: Value,
    #[serde(rename = "createdAt", default)]
    pub created_at: Value,
}

/// The whole dataset document as loaded from disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub users: Vec<User>,
    pub classes: Vec<Class>,
    pub resources: Vec<Resource>,
    pub enrollments: Vec<Enrollment>,
    pub bookmarks: Vec<Bookmark>,
}

/// A class the user is enrolled in, with the number of resources attached to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassSummary {
    pub code: String,
    pub name: Value,
    pub item_count: usize,
}

/// A resource as seen from the bookmarks list: every resource field plus the
/// time it was bookmarked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookmarkedResource {
    #[serde(flatten)]
    pub resource: Resource,
    pub bookmarked_at: Value,
}

impl BookmarkedResource {
    pub fn new(mut resource: Resource, bookmarked_at: Value) -> Self {
        // A stale `bookmarked_at` in the dataset would otherwise be emitted twice.
        resource.fields.remove("bookmarked_at");
        Self {
            resource,
            bookmarked_at,
        }
    }
}
