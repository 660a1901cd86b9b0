use uuid::Uuid;

use super::store::Store;
use crate::errors::{PublisherError, Result};
use crate::model::{
    Action, ActionKind, ContentItem, ContentKind, Edition, EditionDetails, WorkflowState,
};
use crate::{log_op_end, log_op_error, log_op_start};

/// Attributes of a content item to create
#[derive(Debug, Clone)]
pub struct NewContentItem {
    pub slug: String,
    /// Defaults to the slug
    pub name: Option<String>,
    pub kind: ContentKind,
    pub panopticon_id: Option<String>,
    pub department: Option<String>,
    pub section: Option<String>,
}

impl NewContentItem {
    pub fn new(slug: impl Into<String>, kind: ContentKind) -> Self {
        Self {
            slug: slug.into(),
            name: None,
            kind,
            panopticon_id: None,
            department: None,
            section: None,
        }
    }

    pub fn with_panopticon_id(mut self, id: impl Into<String>) -> Self {
        self.panopticon_id = Some(id.into());
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Create a content item together with its first (version 1) draft edition
///
/// The edition gets empty details of the item's kind, is assigned to the
/// requester, and opens its audit trail with a `Create` action. A missing
/// panopticon id is accepted here; it only makes the editions invalid.
///
/// # Returns
/// The ID of the new content item; its edition is `edition_ids[0]`
///
/// # Errors
/// * `InvalidSlug` - If the slug is blank
/// * `SlugAlreadyExists` - If another item uses the slug
/// * `InvalidTitle` - If the title is blank
/// * `UserNotFound` - If the requester is unknown
pub fn create_content_item(
    store: &mut Store,
    new_item: NewContentItem,
    title: String,
    requester_id: Option<&str>,
) -> Result<String> {
    log_op_start!("create_content_item", slug = new_item.slug.as_str());
    let start = std::time::Instant::now();

    let item_id = create_content_item_impl(store, new_item, title, requester_id).map_err(|e| {
        log_op_error!(
            "create_content_item",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "create_content_item",
        duration_ms = start.elapsed().as_millis() as u64,
        content_item_id = item_id.as_str()
    );

    Ok(item_id)
}

fn create_content_item_impl(
    store: &mut Store,
    new_item: NewContentItem,
    title: String,
    requester_id: Option<&str>,
) -> Result<String> {
    if new_item.slug.trim().is_empty() {
        return Err(PublisherError::InvalidSlug {
            reason: "Slug cannot be empty or whitespace-only".to_string(),
        });
    }

    if store.slug_in_use(&new_item.slug) {
        return Err(PublisherError::SlugAlreadyExists {
            slug: new_item.slug,
        });
    }

    if title.trim().is_empty() {
        return Err(PublisherError::InvalidTitle {
            reason: "Title cannot be empty or whitespace-only".to_string(),
        });
    }

    if let Some(user_id) = requester_id {
        store.get_user(user_id)?;
    }

    let item_id = Uuid::now_v7().to_string();
    let edition_id = Uuid::now_v7().to_string();

    let mut item = ContentItem::new(item_id.clone(), new_item.slug, new_item.kind);
    if let Some(name) = new_item.name {
        item.name = name;
    }
    item.panopticon_id = new_item.panopticon_id;
    item.department = new_item.department;
    item.section = new_item.section;

    let mut edition = Edition::new(
        edition_id.clone(),
        item_id.clone(),
        1,
        title,
        EditionDetails::empty_for(&item.kind),
    );
    edition.assigned_to = requester_id.map(str::to_string);
    edition.record(Action::new(
        requester_id.map(str::to_string),
        None,
        ActionKind::Create,
        WorkflowState::Draft,
    ));

    item.push_edition_id(edition_id);
    store.insert_edition(edition);
    store.insert_content_item(item);

    Ok(item_id)
}

/// # Errors
/// * `ContentItemNotFound` - If no item has this id
pub fn read_content_item<'a>(store: &'a Store, id: &str) -> Result<&'a ContentItem> {
    store.get_content_item(id)
}

/// # Errors
/// * `SlugNotFound` - If no item uses this slug
pub fn find_by_slug<'a>(store: &'a Store, slug: &str) -> Result<&'a ContentItem> {
    store.content_item_by_slug(slug)
}
