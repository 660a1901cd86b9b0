//! Validity of an edition in the context of its owning content item
//!
//! Validity depends on both objects: an edition with perfect fields is still
//! invalid while its item lacks a panopticon id. The rules, in the order
//! they are reported:
//!
//! 1. the item has a panopticon id
//! 2. the edition title is not blank
//! 3. the edition belongs to the item
//! 4. the edition's concrete type matches the item's kind
//! 5. guide parts have a title and slug, and slugs are unique

use std::collections::HashSet;

use crate::errors::{PublisherError, Result};
use crate::model::{ContentItem, Edition};

/// Check every rule and return the first violation
///
/// # Errors
/// `MissingPanopticonId`, `InvalidTitle`, `EditionItemMismatch`,
/// `DetailsKindMismatch`, `InvalidPart` or `DuplicatePartSlug`.
pub fn validate_edition(item: &ContentItem, edition: &Edition) -> Result<()> {
    match find_violations(item, edition).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

pub fn is_valid(item: &ContentItem, edition: &Edition) -> bool {
    find_violations(item, edition).is_empty()
}

/// Every rule the edition breaks, in rule order
pub fn find_violations(item: &ContentItem, edition: &Edition) -> Vec<PublisherError> {
    let mut violations = Vec::new();

    if !item.has_panopticon_id() {
        violations.push(PublisherError::MissingPanopticonId {
            slug: item.slug.clone(),
        });
    }

    if edition.title.trim().is_empty() {
        violations.push(PublisherError::InvalidTitle {
            reason: "Title cannot be empty or whitespace-only".to_string(),
        });
    }

    if edition.content_item_id != item.id {
        violations.push(PublisherError::EditionItemMismatch {
            edition_id: edition.id.clone(),
            edition_item_id: edition.content_item_id.clone(),
            content_item_id: item.id.clone(),
        });
    }

    if !edition.details.matches_kind(&item.kind) {
        violations.push(PublisherError::DetailsKindMismatch {
            edition_id: edition.id.clone(),
            edition_kind: edition.kind_name().to_string(),
            item_kind: item.kind.name().to_string(),
        });
    }

    violations.extend(find_part_violations(edition));

    violations
}

fn find_part_violations(edition: &Edition) -> Vec<PublisherError> {
    let mut violations = Vec::new();
    let mut seen = HashSet::new();

    for part in edition.parts() {
        if part.title.trim().is_empty() {
            violations.push(PublisherError::InvalidPart {
                edition_id: edition.id.clone(),
                part_id: part.id.clone(),
                reason: "title is blank".to_string(),
            });
        }

        if part.slug.trim().is_empty() {
            violations.push(PublisherError::InvalidPart {
                edition_id: edition.id.clone(),
                part_id: part.id.clone(),
                reason: "slug is blank".to_string(),
            });
        } else if !seen.insert(part.slug.as_str()) {
            violations.push(PublisherError::DuplicatePartSlug {
                edition_id: edition.id.clone(),
                slug: part.slug.clone(),
            });
        }
    }

    violations
}
