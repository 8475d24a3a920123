use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task - a single to-do entry
///
/// Each Task:
/// - Belongs to exactly one Category (via `category_id`, fixed at construction)
/// - Starts incomplete, with its creation time captured at construction
/// - Acquires its `id` from the store on first save
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Row id assigned by the store on first save (0 while unsaved)
    pub id: i64,

    /// What needs doing, set at construction and never changed
    pub description: String,

    /// Completion flag, false at construction
    pub completed: bool,

    /// Timestamp captured when the Task was constructed
    pub created_at: DateTime<Utc>,

    /// The Category that owns this Task; no re-parenting operation exists
    pub category_id: i64,
}

impl Task {
    /// Create a new unsaved Task with the given description and owning category
    pub fn new(description: String, category_id: i64) -> Self {
        Self {
            id: 0,
            description,
            completed: false,
            created_at: Utc::now(),
            category_id,
        }
    }

    /// Check whether this Task has been persisted
    pub fn is_saved(&self) -> bool {
        self.id > 0
    }
}

/// Task identity is (description, id, category_id); `completed` and
/// `created_at` do not participate.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
            && self.id == other.id
            && self.category_id == other.category_id
    }
}

impl Eq for Task {}
