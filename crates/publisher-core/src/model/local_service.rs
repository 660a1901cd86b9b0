use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Level of local government an authority sits at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorityTier {
    County,
    District,
    Unitary,
}

/// A council, identified by its SNAC code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalAuthority {
    pub id: String,
    pub name: String,
    /// SNAC code, unique per authority (e.g. "00BC")
    pub snac: String,
    pub tier: AuthorityTier,
    /// LGSL codes of the services this authority offers online
    pub lgsl_codes: BTreeSet<u32>,
}

impl LocalAuthority {
    pub fn new(id: String, name: String, snac: String, tier: AuthorityTier) -> Self {
        Self {
            id,
            name,
            snac,
            tier,
            lgsl_codes: BTreeSet::new(),
        }
    }

    pub fn provides_service(&self, lgsl_code: u32) -> bool {
        self.lgsl_codes.contains(&lgsl_code)
    }
}

/// A service from the Local Government Service List
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalService {
    pub lgsl_code: u32,
    pub description: String,
    /// Tiers of authority responsible for delivering the service
    pub providing_tiers: BTreeSet<AuthorityTier>,
}

impl LocalService {
    pub fn new(
        lgsl_code: u32,
        description: String,
        providing_tiers: BTreeSet<AuthorityTier>,
    ) -> Self {
        Self {
            lgsl_code,
            description,
            providing_tiers,
        }
    }

    /// Whether `authority` delivers this service
    ///
    /// The authority must sit at one of the providing tiers and offer the
    /// service's LGSL code.
    pub fn is_provided_by(&self, authority: &LocalAuthority) -> bool {
        self.providing_tiers.contains(&authority.tier)
            && authority.provides_service(self.lgsl_code)
    }

    /// Authorities among `candidates` that provide this service, sorted by SNAC
    pub fn provided_by<'a, I>(&self, candidates: I) -> Vec<&'a LocalAuthority>
    where
        I: IntoIterator<Item = &'a LocalAuthority>,
    {
        let mut providers: Vec<_> = candidates
            .into_iter()
            .filter(|authority| self.is_provided_by(authority))
            .collect();
        providers.sort_by(|a, b| a.snac.cmp(&b.snac));
        providers
    }
}
