//! Folder types

use serde::{Deserialize, Serialize};

pub type FolderId = i64;

/// A filesystem folder tracked by the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub parent_id: Option<FolderId>,
    pub title: String,
    pub path: String,
}
