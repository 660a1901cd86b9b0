//! Edition translation: building the next working edition of a content item
//!
//! [`translate`] takes a content item and one of its editions (normally the
//! latest) and returns a new, unsaved edition of the same concrete type:
//!
//! - common fields (title, body, overview, alternative title, change note,
//!   tags, major change flag) are copied verbatim
//! - `assigned_to`, `version_number` and `state` are copied verbatim; the
//!   workflow layer assigns the next version and state
//! - the action trail is shared with the source, not re-created
//! - type-specific fields are carried forward through [`CarryForward`]:
//!   guide parts are duplicated into an independent list, transaction and
//!   local transaction fields are copied
//!
//! Slug, panopticon id, department and section stay on the item and are
//! read through the returned [`DraftEdition`]. Translation never fails and
//! never touches the store; whether the result may be saved is answered by
//! [`DraftEdition::validate`].

use std::ops::{Deref, DerefMut};
use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::errors::{PublisherError, Result};
use crate::model::{
    AnswerDetails, ContentItem, Edition, EditionDetails, GuideDetails, LocalTransactionDetails,
    Part, TransactionDetails,
};
use crate::rules::validation;
use crate::{log_op_end, log_op_start};

/// Per-type hook: produce the type-specific fields of the next edition
pub trait CarryForward {
    fn carry_forward(&self, item: &ContentItem) -> Self;
}

impl CarryForward for AnswerDetails {
    fn carry_forward(&self, _item: &ContentItem) -> Self {
        AnswerDetails {}
    }
}

impl CarryForward for GuideDetails {
    /// Parts get fresh ids so the new edition owns an independent list
    fn carry_forward(&self, _item: &ContentItem) -> Self {
        let mut guide = GuideDetails {
            parts: self.parts.iter().map(Part::duplicate).collect(),
        };
        guide.sort_parts();
        guide
    }
}

impl CarryForward for TransactionDetails {
    fn carry_forward(&self, _item: &ContentItem) -> Self {
        TransactionDetails {
            introduction: self.introduction.clone(),
            will_continue_on: self.will_continue_on.clone(),
            link: self.link.clone(),
            more_information: self.more_information.clone(),
            alternate_method: self.alternate_method.clone(),
            expectation_ids: self.expectation_ids.clone(),
        }
    }
}

impl CarryForward for LocalTransactionDetails {
    fn carry_forward(&self, item: &ContentItem) -> Self {
        LocalTransactionDetails {
            lgsl_code: self.lgsl_code.or_else(|| item.kind.lgsl_code()),
            introduction: self.introduction.clone(),
            more_information: self.more_information.clone(),
        }
    }
}

impl CarryForward for EditionDetails {
    fn carry_forward(&self, item: &ContentItem) -> Self {
        match self {
            EditionDetails::Answer(d) => EditionDetails::Answer(d.carry_forward(item)),
            EditionDetails::Guide(d) => EditionDetails::Guide(d.carry_forward(item)),
            EditionDetails::Transaction(d) => EditionDetails::Transaction(d.carry_forward(item)),
            EditionDetails::LocalTransaction(d) => {
                EditionDetails::LocalTransaction(d.carry_forward(item))
            }
        }
    }
}

/// An unsaved edition bound to the content item it will belong to
///
/// Derefs to the [`Edition`] for field access and editing. Item-level
/// identity is delegated to the item rather than stored on the edition.
#[derive(Debug, Clone)]
pub struct DraftEdition<'a> {
    item: &'a ContentItem,
    edition: Edition,
}

impl<'a> DraftEdition<'a> {
    pub fn new(item: &'a ContentItem, edition: Edition) -> Self {
        Self { item, edition }
    }

    pub fn item(&self) -> &'a ContentItem {
        self.item
    }

    pub fn slug(&self) -> &'a str {
        &self.item.slug
    }

    pub fn panopticon_id(&self) -> Option<&'a str> {
        self.item.panopticon_id.as_deref()
    }

    pub fn department(&self) -> Option<&'a str> {
        self.item.department.as_deref()
    }

    pub fn section(&self) -> Option<&'a str> {
        self.item.section.as_deref()
    }

    /// # Errors
    ///
    /// Returns the first rule the edition breaks, see [`validation::validate_edition`].
    pub fn validate(&self) -> Result<()> {
        validation::validate_edition(self.item, &self.edition)
    }

    pub fn is_valid(&self) -> bool {
        validation::is_valid(self.item, &self.edition)
    }

    pub fn violations(&self) -> Vec<PublisherError> {
        validation::find_violations(self.item, &self.edition)
    }

    /// Release the edition, e.g. to hand it to persistence
    pub fn into_edition(self) -> Edition {
        self.edition
    }
}

impl Deref for DraftEdition<'_> {
    type Target = Edition;

    fn deref(&self) -> &Edition {
        &self.edition
    }
}

impl DerefMut for DraftEdition<'_> {
    fn deref_mut(&mut self) -> &mut Edition {
        &mut self.edition
    }
}

/// Build the next working edition of `item` from `source`
///
/// `source` is expected to belong to `item`; this is not checked here (the
/// validation rule reports a mismatch). The source edition and the item are
/// left untouched.
pub fn translate<'a>(item: &'a ContentItem, source: &Edition) -> DraftEdition<'a> {
    let started = Instant::now();
    log_op_start!(
        "translate_edition",
        content_item_id = item.id.as_str(),
        edition_id = source.id.as_str(),
        kind = source.kind_name()
    );

    let now = Utc::now();
    let edition = Edition {
        id: Uuid::now_v7().to_string(),
        content_item_id: item.id.clone(),
        version_number: source.version_number,
        state: source.state,
        title: source.title.clone(),
        body: source.body.clone(),
        overview: source.overview.clone(),
        alternative_title: source.alternative_title.clone(),
        change_note: source.change_note.clone(),
        browse_pages: source.browse_pages.clone(),
        primary_topic: source.primary_topic.clone(),
        additional_topics: source.additional_topics.clone(),
        major_change: source.major_change,
        assigned_to: source.assigned_to.clone(),
        actions: source.actions.clone(),
        details: source.details.carry_forward(item),
        created_at: now,
        updated_at: now,
    };

    log_op_end!(
        "translate_edition",
        duration_ms = started.elapsed().as_millis() as u64,
        content_item_id = item.id.as_str(),
        part_count = edition.parts().len() as u64,
        action_count = edition.actions.len() as u64
    );

    DraftEdition::new(item, edition)
}
