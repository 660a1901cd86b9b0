use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ordered section of a multi-part (guide) edition
///
/// Each part belongs to exactly one edition and has a slug of its own,
/// distinct from the content item's slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub body: String,
    /// Position within the edition (ascending)
    pub order: u32,
}

impl Part {
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        body: impl Into<String>,
        order: u32,
    ) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            title: title.into(),
            slug: slug.into(),
            body: body.into(),
            order,
        }
    }

    /// A copy of this part with a fresh identity, for a new edition
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            ..self.clone()
        }
    }
}
