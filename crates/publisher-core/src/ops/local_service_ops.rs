use std::collections::BTreeSet;

use uuid::Uuid;

use super::store::Store;
use crate::errors::{PublisherError, Result};
use crate::model::{AuthorityTier, Edition, LocalAuthority, LocalService};

/// Register a local authority offering the given LGSL codes
///
/// # Returns
/// The ID of the new authority
///
/// # Errors
/// * `AlreadyExists` - If an authority with this SNAC code exists
pub fn create_local_authority(
    store: &mut Store,
    name: String,
    snac: String,
    tier: AuthorityTier,
    lgsl_codes: impl IntoIterator<Item = u32>,
) -> Result<String> {
    if store.authorities.contains_key(&snac) {
        return Err(PublisherError::AlreadyExists { entity_id: snac });
    }

    let id = Uuid::now_v7().to_string();
    let mut authority = LocalAuthority::new(id.clone(), name, snac, tier);
    authority.lgsl_codes.extend(lgsl_codes);
    store.insert_authority(authority);

    Ok(id)
}

/// Register a service and the tiers of authority that provide it
///
/// # Errors
/// * `AlreadyExists` - If a service with this LGSL code exists
pub fn create_local_service(
    store: &mut Store,
    lgsl_code: u32,
    description: String,
    providing_tiers: impl IntoIterator<Item = AuthorityTier>,
) -> Result<()> {
    if store.services.contains_key(&lgsl_code) {
        return Err(PublisherError::AlreadyExists {
            entity_id: lgsl_code.to_string(),
        });
    }

    let tiers: BTreeSet<_> = providing_tiers.into_iter().collect();
    store.insert_service(LocalService::new(lgsl_code, description, tiers));

    Ok(())
}

/// Authorities that provide the service with this LGSL code, sorted by SNAC
///
/// # Errors
/// * `LocalServiceNotFound` - If the LGSL code is unknown
pub fn providing_authorities(store: &Store, lgsl_code: u32) -> Result<Vec<&LocalAuthority>> {
    let service = store.local_service(lgsl_code)?;
    Ok(service.provided_by(store.authorities.values()))
}

/// The service a local transaction edition links to
///
/// `Ok(None)` for editions of other types or without an LGSL code.
///
/// # Errors
/// * `LocalServiceNotFound` - If the edition's LGSL code is unknown
pub fn service_for_edition<'a>(
    store: &'a Store,
    edition: &Edition,
) -> Result<Option<&'a LocalService>> {
    edition
        .lgsl_code()
        .map(|code| store.local_service(code))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_snac_rejected() {
        let mut store = Store::new();
        create_local_authority(
            &mut store,
            "Cumbria".to_string(),
            "00BC".to_string(),
            AuthorityTier::County,
            [1],
        )
        .unwrap();

        let result = create_local_authority(
            &mut store,
            "Cumbria again".to_string(),
            "00BC".to_string(),
            AuthorityTier::County,
            [],
        );
        assert!(matches!(result, Err(PublisherError::AlreadyExists { .. })));
    }

    #[test]
    fn test_unknown_service() {
        let store = Store::new();
        assert!(matches!(
            providing_authorities(&store, 404),
            Err(PublisherError::LocalServiceNotFound { lgsl_code: 404 })
        ));
    }
}
