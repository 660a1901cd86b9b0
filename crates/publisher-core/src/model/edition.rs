use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::action::{Action, ActionTrail};
use super::content_item::ContentKind;
use super::part::Part;

/// Position of an edition in the editorial workflow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    #[default]
    Draft,
    InReview,
    AmendsNeeded,
    FactCheck,
    Ready,
    Scheduled,
    Published,
    Archived,
}

impl WorkflowState {
    pub fn is_published(&self) -> bool {
        matches!(self, WorkflowState::Published)
    }
}

/// Answer editions carry nothing beyond the common fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerDetails {}

/// A multi-part guide
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideDetails {
    /// Parts sorted by `order`
    #[serde(deserialize_with = "deserialize_sorted_parts")]
    pub parts: Vec<Part>,
}

fn deserialize_sorted_parts<'de, D>(deserializer: D) -> Result<Vec<Part>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut parts = Vec::<Part>::deserialize(deserializer)?;
    parts.sort_by_key(|p| p.order);
    Ok(parts)
}

impl GuideDetails {
    /// Insert a part, keeping the list sorted by `order`
    ///
    /// Parts with equal order keep their insertion order.
    pub fn add_part(&mut self, part: Part) {
        let at = self.parts.partition_point(|p| p.order <= part.order);
        self.parts.insert(at, part);
    }

    /// Restore `order` sorting after the list was filled directly
    ///
    /// Stable: parts with equal order keep their relative position.
    pub fn sort_parts(&mut self) {
        self.parts.sort_by_key(|p| p.order);
    }

    pub fn part_by_slug(&self, slug: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.slug == slug)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDetails {
    pub introduction: String,
    pub will_continue_on: String,
    pub link: String,
    pub more_information: String,
    pub alternate_method: String,
    /// References to user-need expectations, kept in the order given
    pub expectation_ids: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalTransactionDetails {
    /// LGSL service code; falls back to the item's code when absent
    pub lgsl_code: Option<u32>,
    pub introduction: String,
    pub more_information: String,
}

/// Type-specific part of an edition; the variant is the edition's concrete type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "fields", rename_all = "snake_case")]
pub enum EditionDetails {
    Answer(AnswerDetails),
    Guide(GuideDetails),
    Transaction(TransactionDetails),
    LocalTransaction(LocalTransactionDetails),
}

impl EditionDetails {
    /// Empty details of the variant matching `kind`
    pub fn empty_for(kind: &ContentKind) -> Self {
        match kind {
            ContentKind::Answer => EditionDetails::Answer(AnswerDetails::default()),
            ContentKind::Guide => EditionDetails::Guide(GuideDetails::default()),
            ContentKind::Transaction => {
                EditionDetails::Transaction(TransactionDetails::default())
            }
            ContentKind::LocalTransaction { lgsl_code } => {
                EditionDetails::LocalTransaction(LocalTransactionDetails {
                    lgsl_code: Some(*lgsl_code),
                    ..LocalTransactionDetails::default()
                })
            }
        }
    }

    /// Same naming as [`ContentKind::name`]
    pub fn kind_name(&self) -> &'static str {
        match self {
            EditionDetails::Answer(_) => "answer",
            EditionDetails::Guide(_) => "guide",
            EditionDetails::Transaction(_) => "transaction",
            EditionDetails::LocalTransaction(_) => "local_transaction",
        }
    }

    pub fn matches_kind(&self, kind: &ContentKind) -> bool {
        matches!(
            (self, kind),
            (EditionDetails::Answer(_), ContentKind::Answer)
                | (EditionDetails::Guide(_), ContentKind::Guide)
                | (EditionDetails::Transaction(_), ContentKind::Transaction)
                | (
                    EditionDetails::LocalTransaction(_),
                    ContentKind::LocalTransaction { .. }
                )
        )
    }
}

/// A versioned snapshot of a content item's content
///
/// Editions are append-only: once a newer edition of the same item is
/// persisted, this one is superseded and no longer changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edition {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Owning content item
    pub content_item_id: String,

    /// Strictly increasing per content item, assigned by the workflow
    pub version_number: u32,

    pub state: WorkflowState,

    pub title: String,

    pub body: String,

    pub overview: String,

    pub alternative_title: String,

    pub change_note: String,

    pub browse_pages: Vec<String>,

    pub primary_topic: Option<String>,

    pub additional_topics: Vec<String>,

    /// Whether publishing this edition is a major change for readers
    pub major_change: bool,

    /// Editor currently responsible for the edition
    pub assigned_to: Option<String>,

    /// Audit trail, shared with the edition this one was derived from
    pub actions: ActionTrail,

    pub details: EditionDetails,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Edition {
    /// Create a draft edition with empty common fields
    pub fn new(
        id: String,
        content_item_id: String,
        version_number: u32,
        title: String,
        details: EditionDetails,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            content_item_id,
            version_number,
            state: WorkflowState::Draft,
            title,
            body: String::new(),
            overview: String::new(),
            alternative_title: String::new(),
            change_note: String::new(),
            browse_pages: Vec::new(),
            primary_topic: None,
            additional_topics: Vec::new(),
            major_change: false,
            assigned_to: None,
            actions: ActionTrail::new(),
            details,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        self.details.kind_name()
    }

    /// Guide parts in order; empty for every other type
    pub fn parts(&self) -> &[Part] {
        match &self.details {
            EditionDetails::Guide(guide) => &guide.parts,
            _ => &[],
        }
    }

    pub fn guide_mut(&mut self) -> Option<&mut GuideDetails> {
        match &mut self.details {
            EditionDetails::Guide(guide) => Some(guide),
            _ => None,
        }
    }

    pub fn transaction(&self) -> Option<&TransactionDetails> {
        match &self.details {
            EditionDetails::Transaction(t) => Some(t),
            _ => None,
        }
    }

    pub fn transaction_mut(&mut self) -> Option<&mut TransactionDetails> {
        match &mut self.details {
            EditionDetails::Transaction(t) => Some(t),
            _ => None,
        }
    }

    pub fn local_transaction(&self) -> Option<&LocalTransactionDetails> {
        match &self.details {
            EditionDetails::LocalTransaction(lt) => Some(lt),
            _ => None,
        }
    }

    pub fn lgsl_code(&self) -> Option<u32> {
        self.local_transaction().and_then(|lt| lt.lgsl_code)
    }

    /// Append an audit entry; the trail detaches from any shared history
    pub fn record(&mut self, action: Action) {
        self.actions.push(action);
        self.updated_at = Utc::now();
    }
}
