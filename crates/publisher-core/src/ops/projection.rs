use crate::errors::{PublisherError, Result};
use crate::model::{ContentItem, Edition};
use crate::ops::Store;

/// The item's editions sorted by version number, oldest first
///
/// Checks membership both ways while collecting: every listed id must exist
/// and must point back at `item`.
///
/// # Errors
/// - `EditionListContainsUnknownId` - `item.edition_ids` lists an id not in the store
/// - `MembershipInconsistent` - a listed edition belongs to another item
pub fn editions_in_order<'a>(store: &'a Store, item: &ContentItem) -> Result<Vec<&'a Edition>> {
    let mut editions = Vec::with_capacity(item.edition_ids.len());

    for edition_id in &item.edition_ids {
        let edition = store.editions.get(edition_id).ok_or_else(|| {
            PublisherError::EditionListContainsUnknownId {
                content_item_id: item.id.clone(),
                edition_id: edition_id.clone(),
            }
        })?;

        if edition.content_item_id != item.id {
            return Err(PublisherError::MembershipInconsistent {
                edition_id: edition_id.clone(),
                edition_item_id: edition.content_item_id.clone(),
                owner_item_id: item.id.clone(),
            });
        }

        editions.push(edition);
    }

    // Stable: equal versions keep persistence order
    editions.sort_by_key(|e| e.version_number);

    Ok(editions)
}

/// The edition with the highest version number
///
/// # Errors
/// - `NoEditions` - the item has no history yet
/// - anything [`editions_in_order`] reports
pub fn latest_edition<'a>(store: &'a Store, item: &ContentItem) -> Result<&'a Edition> {
    editions_in_order(store, item)?
        .pop()
        .ok_or_else(|| PublisherError::NoEditions {
            content_item_id: item.id.clone(),
        })
}
