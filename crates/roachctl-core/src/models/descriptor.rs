//! Database descriptor populated from the catalog.

use serde::{Deserialize, Serialize};

use crate::sql::stored_role_name;

/// Point-in-time view of one database as listed by `SHOW DATABASES`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseDescriptor {
    /// Database name, exactly as stored in the catalog
    pub name: String,

    /// Whether the catalog lists a database with this name
    pub exists: bool,

    /// Current owner role
    pub owner: Option<String>,

    /// Primary region of a multi-region database
    pub primary_region: Option<String>,

    /// All regions the database is configured for
    #[serde(default)]
    pub regions: Vec<String>,

    /// Multi-region survival goal (`zone` or `region`)
    pub survival_goal: Option<String>,
}

impl DatabaseDescriptor {
    /// Descriptor for a database the catalog does not list.
    pub fn absent(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exists: false,
            owner: None,
            primary_region: None,
            regions: Vec::new(),
            survival_goal: None,
        }
    }

    /// Picks the entry matching `name` (exact, case-sensitive) out of a
    /// catalog listing, or an absent descriptor when there is none.
    pub fn locate(listing: Vec<DatabaseDescriptor>, name: &str) -> Self {
        listing
            .into_iter()
            .find(|entry| entry.exists && entry.name == name)
            .unwrap_or_else(|| Self::absent(name))
    }

    /// True when `owner` is requested and differs from the current owner.
    ///
    /// `owner` is compared in the form the server stores it, so `Alice`
    /// matches a database owned by `alice`.
    pub fn owner_differs(&self, owner: Option<&str>) -> bool {
        match owner {
            Some(wanted) => self.owner.as_deref() != Some(stored_role_name(wanted).as_str()),
            None => false,
        }
    }
}
