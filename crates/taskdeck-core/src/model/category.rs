use serde::{Deserialize, Serialize};

/// Category - a named grouping of tasks
///
/// A Category owns zero or more Tasks through the `category_id` foreign key
/// on the task rows; it holds no in-memory collection of them. Two categories
/// are equal when both `id` and `name` match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Row id assigned by the store on first save (0 while unsaved)
    pub id: i64,

    /// Human-readable name, set at construction and never changed
    pub name: String,
}

impl Category {
    /// Create a new unsaved Category with the given name
    ///
    /// The id stays 0 until the repository saves the row and writes the
    /// store-generated key back.
    pub fn new(name: String) -> Self {
        Self { id: 0, name }
    }

    /// Check whether this Category has been persisted
    pub fn is_saved(&self) -> bool {
        self.id > 0
    }
}
