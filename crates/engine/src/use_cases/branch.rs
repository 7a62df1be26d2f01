//! Branch use cases.

use std::sync::Arc;

use franchise_domain::{Branch, BranchId, DomainError, FranchiseId, NewBranch};
use tracing::{debug, info};

use crate::infrastructure::ports::{BranchRepo, FranchiseRepo};

/// Container for branch use cases.
pub struct BranchUseCases {
    pub create: CreateBranch,
    pub rename: UpdateBranchName,
    pub list_by_franchise: GetBranchesByFranchise,
}

impl BranchUseCases {
    pub fn new(branches: Arc<dyn BranchRepo>, franchises: Arc<dyn FranchiseRepo>) -> Self {
        Self {
            create: CreateBranch::new(branches.clone(), franchises.clone()),
            rename: UpdateBranchName::new(branches.clone()),
            list_by_franchise: GetBranchesByFranchise::new(branches, franchises),
        }
    }
}

/// Create a branch under an existing franchise.
///
/// Branch names are unique across all branches, not per franchise.
pub struct CreateBranch {
    branches: Arc<dyn BranchRepo>,
    franchises: Arc<dyn FranchiseRepo>,
}

impl CreateBranch {
    pub fn new(branches: Arc<dyn BranchRepo>, franchises: Arc<dyn FranchiseRepo>) -> Self {
        Self {
            branches,
            franchises,
        }
    }

    pub async fn execute(
        &self,
        franchise_id: FranchiseId,
        name: &str,
    ) -> Result<Branch, DomainError> {
        self.franchises
            .find_by_id(franchise_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!("franchise not found: {franchise_id}"))
            })?;

        if self.branches.find_by_name(name).await?.is_some() {
            return Err(DomainError::conflict(format!(
                "branch name '{name}' already exists"
            )));
        }

        let branch = self
            .branches
            .save(&NewBranch::new(franchise_id, name))
            .await?;
        info!(branch_id = %branch.id, franchise_id = %franchise_id, "Created branch: {}", branch.name);
        Ok(branch)
    }
}

/// Rename a branch, with the same three-way policy as franchises.
pub struct UpdateBranchName {
    branches: Arc<dyn BranchRepo>,
}

impl UpdateBranchName {
    pub fn new(branches: Arc<dyn BranchRepo>) -> Self {
        Self { branches }
    }

    pub async fn execute(&self, id: BranchId, new_name: &str) -> Result<Branch, DomainError> {
        self.branches
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("branch not found: {id}")))?;

        if let Some(holder) = self.branches.find_by_name(new_name).await? {
            if holder.id != id {
                return Err(DomainError::conflict(format!(
                    "branch name '{new_name}' is already in use"
                )));
            }
            return Err(DomainError::conflict(format!(
                "branch name '{new_name}' is already assigned to this branch"
            )));
        }

        let renamed = self
            .branches
            .update_name(id, new_name)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("branch not found: {id}")))?;
        info!(branch_id = %id, "Renamed branch to: {new_name}");
        Ok(renamed)
    }
}

/// List the branches of one franchise (possibly empty), gated on the
/// franchise existing.
pub struct GetBranchesByFranchise {
    branches: Arc<dyn BranchRepo>,
    franchises: Arc<dyn FranchiseRepo>,
}

impl GetBranchesByFranchise {
    pub fn new(branches: Arc<dyn BranchRepo>, franchises: Arc<dyn FranchiseRepo>) -> Self {
        Self {
            branches,
            franchises,
        }
    }

    pub async fn execute(&self, franchise_id: FranchiseId) -> Result<Vec<Branch>, DomainError> {
        self.franchises
            .find_by_id(franchise_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!("franchise not found: {franchise_id}"))
            })?;

        debug!(franchise_id = %franchise_id, "Listing branches");
        Ok(self.branches.find_by_franchise(franchise_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockBranchRepo, MockFranchiseRepo};
    use chrono::Utc;
    use franchise_domain::Franchise;
    use mockall::predicate::*;

    fn stored_franchise(id: FranchiseId) -> Franchise {
        Franchise {
            id,
            name: "Acme".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn stored_branch(id: BranchId, franchise_id: FranchiseId, name: &str) -> Branch {
        Branch {
            id,
            franchise_id,
            name: name.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_under_missing_franchise_fails_before_any_write() {
        let branches = MockBranchRepo::new();
        let mut franchises = MockFranchiseRepo::new();
        let franchise_id = FranchiseId::new();

        franchises
            .expect_find_by_id()
            .with(eq(franchise_id))
            .returning(|_| Ok(None));
        // Neither the duplicate check nor save may run.

        let err = CreateBranch::new(Arc::new(branches), Arc::new(franchises))
            .execute(franchise_id, "Downtown")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn create_rejects_name_taken_by_branch_of_another_franchise() {
        let mut branches = MockBranchRepo::new();
        let mut franchises = MockFranchiseRepo::new();
        let franchise_id = FranchiseId::new();

        franchises
            .expect_find_by_id()
            .with(eq(franchise_id))
            .returning(move |id| Ok(Some(stored_franchise(id))));
        branches.expect_find_by_name().returning(|name| {
            Ok(Some(stored_branch(
                BranchId::new(),
                FranchiseId::new(),
                name,
            )))
        });

        let err = CreateBranch::new(Arc::new(branches), Arc::new(franchises))
            .execute(franchise_id, "Downtown")
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn create_binds_branch_to_the_franchise() {
        let mut branches = MockBranchRepo::new();
        let mut franchises = MockFranchiseRepo::new();
        let franchise_id = FranchiseId::new();

        franchises
            .expect_find_by_id()
            .with(eq(franchise_id))
            .returning(move |id| Ok(Some(stored_franchise(id))));
        branches.expect_find_by_name().returning(|_| Ok(None));
        branches
            .expect_save()
            .withf(move |draft| draft.franchise_id == franchise_id && draft.name == "Downtown")
            .returning(|draft| {
                Ok(stored_branch(
                    BranchId::new(),
                    draft.franchise_id,
                    &draft.name,
                ))
            });

        let branch = CreateBranch::new(Arc::new(branches), Arc::new(franchises))
            .execute(franchise_id, "Downtown")
            .await
            .expect("create succeeds");
        assert_eq!(branch.franchise_id, franchise_id);
    }

    #[tokio::test]
    async fn rename_to_own_current_name_is_conflict() {
        let mut branches = MockBranchRepo::new();
        let id = BranchId::new();
        let franchise_id = FranchiseId::new();

        branches
            .expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(stored_branch(id, franchise_id, "Same"))));
        branches
            .expect_find_by_name()
            .withf(|name| name == "Same")
            .returning(move |_| Ok(Some(stored_branch(id, franchise_id, "Same"))));

        let err = UpdateBranchName::new(Arc::new(branches))
            .execute(id, "Same")
            .await
            .unwrap_err();
        assert!(err.is_conflict());
        assert!(err.to_string().contains("already assigned"));
    }

    #[tokio::test]
    async fn list_for_missing_franchise_is_not_found() {
        let branches = MockBranchRepo::new();
        let mut franchises = MockFranchiseRepo::new();
        let franchise_id = FranchiseId::new();

        franchises
            .expect_find_by_id()
            .with(eq(franchise_id))
            .returning(|_| Ok(None));

        let err = GetBranchesByFranchise::new(Arc::new(branches), Arc::new(franchises))
            .execute(franchise_id)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn list_for_franchise_without_branches_is_empty() {
        let mut branches = MockBranchRepo::new();
        let mut franchises = MockFranchiseRepo::new();
        let franchise_id = FranchiseId::new();

        franchises
            .expect_find_by_id()
            .with(eq(franchise_id))
            .returning(move |id| Ok(Some(stored_franchise(id))));
        branches
            .expect_find_by_franchise()
            .with(eq(franchise_id))
            .returning(|_| Ok(Vec::new()));

        let listed = GetBranchesByFranchise::new(Arc::new(branches), Arc::new(franchises))
            .execute(franchise_id)
            .await
            .expect("list succeeds");
        assert!(listed.is_empty());
    }
}
