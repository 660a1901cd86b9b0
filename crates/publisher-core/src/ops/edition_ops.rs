//! Version assignment and persistence of editions
//!
//! The translator copies an edition; this module decides what the copy
//! becomes. `build_next_edition` numbers it `latest + 1` and resets it to
//! draft, `save_edition` validates it against its item and appends it to the
//! item's history in one step.

use chrono::Utc;

use super::projection::latest_edition;
use super::store::Store;
use crate::errors::{PublisherError, Result};
use crate::model::{Action, ActionKind, Edition, WorkflowState};
use crate::rules::validation::validate_edition;
use crate::translator::translate;
use crate::{log_op_end, log_op_error, log_op_start};

/// Changes to the common fields of the live edition; `None` leaves a field as is
///
/// The optional fields take `Some(None)` to clear them.
#[derive(Debug, Clone, Default)]
pub struct EditionUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
    pub overview: Option<String>,
    pub alternative_title: Option<String>,
    pub change_note: Option<String>,
    pub browse_pages: Option<Vec<String>>,
    pub primary_topic: Option<Option<String>>,
    pub additional_topics: Option<Vec<String>>,
    pub major_change: Option<bool>,
    pub assigned_to: Option<Option<String>>,
}

/// Build, but do not persist, the next edition of an item
///
/// Translates the latest edition, then numbers the copy one past it, puts it
/// back in `Draft` and records a `NewVersion` action on its own trail (the
/// latest edition's trail is left as it was).
///
/// # Errors
/// * `ContentItemNotFound` - If the item doesn't exist
/// * `NoEditions` - If the item has no edition to start from
/// * `UserNotFound` - If the requester is unknown
/// * `Internal` - If the version number would overflow
pub fn build_next_edition(
    store: &Store,
    content_item_id: &str,
    requester_id: Option<&str>,
) -> Result<Edition> {
    log_op_start!("build_next_edition", content_item_id = content_item_id);
    let start = std::time::Instant::now();

    let edition = build_next_edition_impl(store, content_item_id, requester_id).map_err(|e| {
        log_op_error!(
            "build_next_edition",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "build_next_edition",
        duration_ms = start.elapsed().as_millis() as u64,
        content_item_id = content_item_id,
        version_number = edition.version_number
    );

    Ok(edition)
}

fn build_next_edition_impl(
    store: &Store,
    content_item_id: &str,
    requester_id: Option<&str>,
) -> Result<Edition> {
    let item = store.get_content_item(content_item_id)?;
    if let Some(user_id) = requester_id {
        store.get_user(user_id)?;
    }
    let latest = latest_edition(store, item)?;

    let next_version = latest
        .version_number
        .checked_add(1)
        .ok_or_else(|| PublisherError::Internal {
            message: format!("version overflow on content item {}", item.id),
        })?;

    let mut edition = translate(item, latest).into_edition();
    edition.version_number = next_version;
    edition.state = WorkflowState::Draft;
    edition.record(Action::new(
        requester_id.map(str::to_string),
        None,
        ActionKind::NewVersion,
        WorkflowState::Draft,
    ));

    Ok(edition)
}

/// Persist a new edition and append it to its item's history
///
/// All checks run before the first write, so on error the store is
/// unchanged.
///
/// # Returns
/// The ID of the saved edition
///
/// # Errors
/// * `ContentItemNotFound` - If the owning item doesn't exist
/// * `AlreadyExists` - If an edition with this id was already saved
/// * any validation error from [`validate_edition`]
/// * `VersionNotMonotonic` - If the version is not above the current latest
pub fn save_edition(store: &mut Store, edition: Edition) -> Result<String> {
    log_op_start!(
        "save_edition",
        content_item_id = edition.content_item_id.as_str(),
        version_number = edition.version_number
    );
    let start = std::time::Instant::now();

    let edition_id = save_edition_impl(store, edition).map_err(|e| {
        log_op_error!(
            "save_edition",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "save_edition",
        duration_ms = start.elapsed().as_millis() as u64,
        edition_id = edition_id.as_str()
    );

    Ok(edition_id)
}

fn save_edition_impl(store: &mut Store, mut edition: Edition) -> Result<String> {
    let item = store.get_content_item(&edition.content_item_id)?;

    if store.edition_exists(&edition.id) {
        return Err(PublisherError::AlreadyExists {
            entity_id: edition.id,
        });
    }

    validate_edition(item, &edition)?;

    let latest_version = if item.has_editions() {
        latest_edition(store, item)?.version_number
    } else {
        0
    };
    if edition.version_number <= latest_version {
        return Err(PublisherError::VersionNotMonotonic {
            content_item_id: item.id.clone(),
            version_number: edition.version_number,
            latest_version,
        });
    }

    if let Some(guide) = edition.guide_mut() {
        guide.sort_parts();
    }

    let edition_id = edition.id.clone();
    let item_id = edition.content_item_id.clone();

    store.insert_edition(edition);
    store
        .get_content_item_mut(&item_id)?
        .push_edition_id(edition_id.clone());

    Ok(edition_id)
}

/// Build the next edition of an item and save it
///
/// # Errors
/// Anything [`build_next_edition`] or [`save_edition`] reports; notably
/// `MissingPanopticonId` when the item has no external id.
pub fn create_next_edition(
    store: &mut Store,
    content_item_id: &str,
    requester_id: Option<&str>,
) -> Result<String> {
    let edition = build_next_edition(store, content_item_id, requester_id)?;
    save_edition(store, edition)
}

/// # Errors
/// * `EditionNotFound` - If no edition has this id
pub fn read_edition<'a>(store: &'a Store, id: &str) -> Result<&'a Edition> {
    store.get_edition(id)
}

/// Change common fields of an item's latest edition
///
/// # Errors
/// * `EditionNotFound` - If the edition doesn't exist
/// * `EditionSuperseded` - If a newer edition of the item exists
/// * `UserNotFound` - If the new assignee is unknown
/// * `InvalidTitle` - If the new title is blank
pub fn update_edition(store: &mut Store, edition_id: &str, update: EditionUpdate) -> Result<()> {
    log_op_start!("update_edition", edition_id = edition_id);
    let start = std::time::Instant::now();

    update_edition_impl(store, edition_id, update).map_err(|e| {
        log_op_error!(
            "update_edition",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "update_edition",
        duration_ms = start.elapsed().as_millis() as u64
    );

    Ok(())
}

fn update_edition_impl(store: &mut Store, edition_id: &str, update: EditionUpdate) -> Result<()> {
    ensure_live(store, edition_id)?;

    if let Some(ref title) = update.title {
        if title.trim().is_empty() {
            return Err(PublisherError::InvalidTitle {
                reason: "Title cannot be empty or whitespace-only".to_string(),
            });
        }
    }

    if let Some(Some(ref user_id)) = update.assigned_to {
        store.get_user(user_id)?;
    }

    let edition = store.get_edition_mut(edition_id)?;

    if let Some(title) = update.title {
        edition.title = title;
    }
    if let Some(body) = update.body {
        edition.body = body;
    }
    if let Some(overview) = update.overview {
        edition.overview = overview;
    }
    if let Some(alternative_title) = update.alternative_title {
        edition.alternative_title = alternative_title;
    }
    if let Some(change_note) = update.change_note {
        edition.change_note = change_note;
    }
    if let Some(browse_pages) = update.browse_pages {
        edition.browse_pages = browse_pages;
    }
    if let Some(primary_topic) = update.primary_topic {
        edition.primary_topic = primary_topic;
    }
    if let Some(additional_topics) = update.additional_topics {
        edition.additional_topics = additional_topics;
    }
    if let Some(major_change) = update.major_change {
        edition.major_change = major_change;
    }
    if let Some(assigned_to) = update.assigned_to {
        edition.assigned_to = assigned_to;
    }

    edition.updated_at = Utc::now();

    Ok(())
}

/// Record a workflow action on an item's latest edition
///
/// The edition moves to the state the action implies (see
/// [`ActionKind::resulting_state`]); the action records that state.
///
/// # Errors
/// * `EditionNotFound` - If the edition doesn't exist
/// * `EditionSuperseded` - If a newer edition of the item exists
/// * `UserNotFound` - If the requester is unknown
pub fn record_action(
    store: &mut Store,
    edition_id: &str,
    requester_id: Option<&str>,
    kind: ActionKind,
    comment: Option<String>,
) -> Result<()> {
    log_op_start!("record_action", edition_id = edition_id, request_type = ?kind);
    let start = std::time::Instant::now();

    record_action_impl(store, edition_id, requester_id, kind, comment).map_err(|e| {
        log_op_error!(
            "record_action",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "record_action",
        duration_ms = start.elapsed().as_millis() as u64
    );

    Ok(())
}

fn record_action_impl(
    store: &mut Store,
    edition_id: &str,
    requester_id: Option<&str>,
    kind: ActionKind,
    comment: Option<String>,
) -> Result<()> {
    ensure_live(store, edition_id)?;
    if let Some(user_id) = requester_id {
        store.get_user(user_id)?;
    }

    let edition = store.get_edition_mut(edition_id)?;
    let state = kind.resulting_state(edition.state);
    edition.record(Action::new(
        requester_id.map(str::to_string),
        comment,
        kind,
        state,
    ));
    edition.state = state;

    Ok(())
}

/// Superseded editions are frozen; only the latest may change
fn ensure_live(store: &Store, edition_id: &str) -> Result<()> {
    let edition = store.get_edition(edition_id)?;
    let item = store.get_content_item(&edition.content_item_id)?;
    let latest = latest_edition(store, item)?;

    if latest.id != edition.id {
        return Err(PublisherError::EditionSuperseded {
            edition_id: edition.id.clone(),
            latest_version: latest.version_number,
        });
    }

    Ok(())
}
