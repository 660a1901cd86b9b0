use std::collections::HashMap;

use crate::errors::{PublisherError, Result};
use crate::model::{ContentItem, Edition, LocalAuthority, LocalService, User};

/// In-memory persistence boundary
///
/// Supplies content items and editions with their nested parts and actions
/// already loaded. Single-threaded; callers that share a store across
/// threads must bring their own synchronization. All storage access goes
/// through here.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) items: HashMap<String, ContentItem>,
    pub(crate) editions: HashMap<String, Edition>,
    pub(crate) users: HashMap<String, User>,
    /// Keyed by SNAC code
    pub(crate) authorities: HashMap<String, LocalAuthority>,
    /// Keyed by LGSL code
    pub(crate) services: HashMap<u32, LocalService>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns `ContentItemNotFound` if no item has this id.
    pub fn get_content_item(&self, id: &str) -> Result<&ContentItem> {
        self.items
            .get(id)
            .ok_or_else(|| PublisherError::ContentItemNotFound {
                content_item_id: id.to_string(),
            })
    }

    /// Mutable access for ops and test setup
    ///
    /// # Errors
    ///
    /// Returns `ContentItemNotFound` if no item has this id.
    pub fn get_content_item_mut(&mut self, id: &str) -> Result<&mut ContentItem> {
        self.items
            .get_mut(id)
            .ok_or_else(|| PublisherError::ContentItemNotFound {
                content_item_id: id.to_string(),
            })
    }

    /// # Errors
    ///
    /// Returns `SlugNotFound` if no item uses this slug.
    pub fn content_item_by_slug(&self, slug: &str) -> Result<&ContentItem> {
        self.items
            .values()
            .find(|item| item.slug == slug)
            .ok_or_else(|| PublisherError::SlugNotFound {
                slug: slug.to_string(),
            })
    }

    /// # Errors
    ///
    /// Returns `EditionNotFound` if no edition has this id.
    pub fn get_edition(&self, id: &str) -> Result<&Edition> {
        self.editions
            .get(id)
            .ok_or_else(|| PublisherError::EditionNotFound {
                edition_id: id.to_string(),
            })
    }

    /// # Errors
    ///
    /// Returns `EditionNotFound` if no edition has this id.
    pub fn get_edition_mut(&mut self, id: &str) -> Result<&mut Edition> {
        self.editions
            .get_mut(id)
            .ok_or_else(|| PublisherError::EditionNotFound {
                edition_id: id.to_string(),
            })
    }

    /// # Errors
    ///
    /// Returns `UserNotFound` if no user has this id.
    pub fn get_user(&self, id: &str) -> Result<&User> {
        self.users.get(id).ok_or_else(|| PublisherError::UserNotFound {
            user_id: id.to_string(),
        })
    }

    /// # Errors
    ///
    /// Returns `LocalAuthorityNotFound` if no authority has this SNAC code.
    pub fn authority_by_snac(&self, snac: &str) -> Result<&LocalAuthority> {
        self.authorities
            .get(snac)
            .ok_or_else(|| PublisherError::LocalAuthorityNotFound {
                snac: snac.to_string(),
            })
    }

    /// # Errors
    ///
    /// Returns `LocalServiceNotFound` if the LGSL code is unknown.
    pub fn local_service(&self, lgsl_code: u32) -> Result<&LocalService> {
        self.services
            .get(&lgsl_code)
            .ok_or(PublisherError::LocalServiceNotFound { lgsl_code })
    }

    pub fn list_content_items(&self) -> Vec<&ContentItem> {
        self.items.values().collect()
    }

    pub fn list_authorities(&self) -> Vec<&LocalAuthority> {
        self.authorities.values().collect()
    }

    pub fn insert_content_item(&mut self, item: ContentItem) {
        self.items.insert(item.id.clone(), item);
    }

    /// Insert an edition as-is, without touching its item's history
    ///
    /// Used by the workflow ops and by test helpers that build corrupt or
    /// partial histories on purpose.
    pub fn insert_edition(&mut self, edition: Edition) {
        self.editions.insert(edition.id.clone(), edition);
    }

    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    pub fn insert_authority(&mut self, authority: LocalAuthority) {
        self.authorities.insert(authority.snac.clone(), authority);
    }

    pub fn insert_service(&mut self, service: LocalService) {
        self.services.insert(service.lgsl_code, service);
    }

    pub(crate) fn edition_exists(&self, id: &str) -> bool {
        self.editions.contains_key(id)
    }

    pub(crate) fn slug_in_use(&self, slug: &str) -> bool {
        self.items.values().any(|item| item.slug == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AuthorityTier, ContentKind};

    #[test]
    fn test_new_store_is_empty() {
        let store = Store::new();
        assert!(store.list_content_items().is_empty());
        assert!(store.list_authorities().is_empty());
    }

    #[test]
    fn test_insert_and_get_content_item() {
        let mut store = Store::new();
        store.insert_content_item(ContentItem::new(
            "item-1".to_string(),
            "vat-rates".to_string(),
            ContentKind::Answer,
        ));

        assert_eq!(store.get_content_item("item-1").unwrap().slug, "vat-rates");
        assert_eq!(store.content_item_by_slug("vat-rates").unwrap().id, "item-1");
        assert!(store.slug_in_use("vat-rates"));
    }

    #[test]
    fn test_lookup_errors() {
        let store = Store::new();

        assert!(matches!(
            store.get_content_item("missing"),
            Err(PublisherError::ContentItemNotFound { .. })
        ));
        assert!(matches!(
            store.get_edition("missing"),
            Err(PublisherError::EditionNotFound { .. })
        ));
        assert!(matches!(
            store.local_service(99),
            Err(PublisherError::LocalServiceNotFound { lgsl_code: 99 })
        ));
        assert!(matches!(
            store.content_item_by_slug("nope"),
            Err(PublisherError::SlugNotFound { .. })
        ));
    }

    #[test]
    fn test_authorities_are_keyed_by_snac() {
        let mut store = Store::new();
        store.insert_authority(LocalAuthority::new(
            "la-1".to_string(),
            "Cumbria".to_string(),
            "00BC".to_string(),
            AuthorityTier::County,
        ));

        assert_eq!(store.authority_by_snac("00BC").unwrap().name, "Cumbria");
        assert!(store.authority_by_snac("00XX").is_err());
    }
}
