//! Branch entity - a franchise location.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{BranchId, FranchiseId};

/// A branch belonging to exactly one franchise.
///
/// `name` is unique across all branches, not scoped to the franchise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: BranchId,
    pub franchise_id: FranchiseId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A branch draft awaiting its storage-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBranch {
    pub franchise_id: FranchiseId,
    pub name: String,
}

impl NewBranch {
    pub fn new(franchise_id: FranchiseId, name: impl Into<String>) -> Self {
        Self {
            franchise_id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_binds_to_the_given_franchise() {
        let franchise_id = FranchiseId::new();
        let draft = NewBranch::new(franchise_id, "Downtown");
        assert_eq!(draft.franchise_id, franchise_id);
        assert_eq!(draft.name, "Downtown");
    }
}
