use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The content type of a [`ContentItem`]
///
/// Every edition of an item carries details of the matching variant
/// (see [`EditionDetails`](super::EditionDetails)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentKind {
    Answer,
    Guide,
    Transaction,
    /// A transaction carried out with a local council, linked to the
    /// services councils offer through its LGSL code
    LocalTransaction { lgsl_code: u32 },
}

impl ContentKind {
    /// Stable snake_case name, as used in logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            ContentKind::Answer => "answer",
            ContentKind::Guide => "guide",
            ContentKind::Transaction => "transaction",
            ContentKind::LocalTransaction { .. } => "local_transaction",
        }
    }

    /// Whether editions of this kind are split into ordered parts
    pub fn is_multi_part(&self) -> bool {
        matches!(self, ContentKind::Guide)
    }

    pub fn lgsl_code(&self) -> Option<u32> {
        match self {
            ContentKind::LocalTransaction { lgsl_code } => Some(*lgsl_code),
            _ => None,
        }
    }
}

/// A published artefact, identified by its slug, owning a history of editions
///
/// Identity metadata (slug, panopticon id, department, section) lives here
/// and is never copied onto editions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// URL slug, unique across the store
    pub slug: String,

    /// Display name used in listings
    pub name: String,

    /// External identifier from the panopticon registry.
    /// Editions of an item without one are invalid.
    pub panopticon_id: Option<String>,

    pub department: Option<String>,

    pub section: Option<String>,

    pub kind: ContentKind,

    /// Edition ids in the order they were persisted (append-only)
    pub edition_ids: Vec<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl ContentItem {
    /// Create an item with no editions and no identity metadata beyond the slug
    pub fn new(id: String, slug: String, kind: ContentKind) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: slug.clone(),
            slug,
            panopticon_id: None,
            department: None,
            section: None,
            kind,
            edition_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// A blank or whitespace-only panopticon id counts as missing
    pub fn has_panopticon_id(&self) -> bool {
        self.panopticon_id
            .as_deref()
            .map(|id| !id.trim().is_empty())
            .unwrap_or(false)
    }

    pub fn has_editions(&self) -> bool {
        !self.edition_ids.is_empty()
    }

    /// Append an edition id to the history
    pub(crate) fn push_edition_id(&mut self, edition_id: String) {
        if !self.edition_ids.contains(&edition_id) {
            self.edition_ids.push(edition_id);
            self.updated_at = Utc::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_content_item() {
        let item = ContentItem::new(
            "item-1".to_string(),
            "get-a-crb-check".to_string(),
            ContentKind::Answer,
        );

        assert_eq!(item.slug, "get-a-crb-check");
        assert_eq!(item.name, "get-a-crb-check");
        assert!(!item.has_panopticon_id());
        assert!(!item.has_editions());
    }

    #[test]
    fn test_blank_panopticon_id_is_missing() {
        let mut item = ContentItem::new("i".to_string(), "s".to_string(), ContentKind::Guide);

        item.panopticon_id = Some("   ".to_string());
        assert!(!item.has_panopticon_id());

        item.panopticon_id = Some("123".to_string());
        assert!(item.has_panopticon_id());
    }

    #[test]
    fn test_push_edition_id_ignores_duplicates() {
        let mut item = ContentItem::new("i".to_string(), "s".to_string(), ContentKind::Answer);

        item.push_edition_id("e1".to_string());
        item.push_edition_id("e2".to_string());
        item.push_edition_id("e1".to_string());

        assert_eq!(item.edition_ids, vec!["e1", "e2"]);
    }

    #[test]
    fn test_kind_names_and_lgsl() {
        assert_eq!(ContentKind::Answer.name(), "answer");
        assert!(ContentKind::Guide.is_multi_part());
        assert!(!ContentKind::Transaction.is_multi_part());

        let local = ContentKind::LocalTransaction { lgsl_code: 1 };
        assert_eq!(local.name(), "local_transaction");
        assert_eq!(local.lgsl_code(), Some(1));
        assert_eq!(ContentKind::Answer.lgsl_code(), None);
    }
}
