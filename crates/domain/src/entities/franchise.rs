//! Franchise entity - the root of the hierarchy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::FranchiseId;

/// A franchise as persisted by the storage layer.
///
/// `name` is unique across all franchises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Franchise {
    pub id: FranchiseId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A franchise draft awaiting its storage-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFranchise {
    pub name: String,
}

impl NewFranchise {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_carries_the_requested_name() {
        let draft = NewFranchise::new("Acme");
        assert_eq!(draft.name, "Acme");
    }

    #[test]
    fn franchise_serializes_with_plain_field_names() {
        let franchise = Franchise {
            id: FranchiseId::new(),
            name: "Acme".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&franchise).expect("serializable");
        assert_eq!(json["name"], "Acme");
        assert!(json["id"].is_string());
    }
}
