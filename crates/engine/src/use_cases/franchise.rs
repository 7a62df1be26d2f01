//! Franchise use cases.

use std::sync::Arc;

use franchise_domain::{DomainError, Franchise, FranchiseId, NewFranchise};
use tracing::{debug, info};

use crate::infrastructure::ports::FranchiseRepo;

/// Container for franchise use cases.
pub struct FranchiseUseCases {
    pub create: CreateFranchise,
    pub rename: UpdateFranchiseName,
    pub list: GetAllFranchises,
}

impl FranchiseUseCases {
    pub fn new(franchises: Arc<dyn FranchiseRepo>) -> Self {
        Self {
            create: CreateFranchise::new(franchises.clone()),
            rename: UpdateFranchiseName::new(franchises.clone()),
            list: GetAllFranchises::new(franchises),
        }
    }
}

/// Create a franchise with a globally unique name.
pub struct CreateFranchise {
    franchises: Arc<dyn FranchiseRepo>,
}

impl CreateFranchise {
    pub fn new(franchises: Arc<dyn FranchiseRepo>) -> Self {
        Self { franchises }
    }

    pub async fn execute(&self, name: &str) -> Result<Franchise, DomainError> {
        if self.franchises.find_by_name(name).await?.is_some() {
            return Err(DomainError::conflict(format!(
                "franchise name '{name}' already exists"
            )));
        }

        let franchise = self.franchises.save(&NewFranchise::new(name)).await?;
        info!(franchise_id = %franchise.id, "Created franchise: {}", franchise.name);
        Ok(franchise)
    }
}

/// Rename a franchise.
///
/// Renaming to a name held by another franchise, or to the franchise's
/// own current name, is rejected - the latter is an explicit conflict,
/// never a silent success.
pub struct UpdateFranchiseName {
    franchises: Arc<dyn FranchiseRepo>,
}

impl UpdateFranchiseName {
    pub fn new(franchises: Arc<dyn FranchiseRepo>) -> Self {
        Self { franchises }
    }

    pub async fn execute(&self, id: FranchiseId, new_name: &str) -> Result<Franchise, DomainError> {
        self.franchises
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("franchise not found: {id}")))?;

        if let Some(holder) = self.franchises.find_by_name(new_name).await? {
            if holder.id != id {
                return Err(DomainError::conflict(format!(
                    "franchise name '{new_name}' is already in use"
                )));
            }
            return Err(DomainError::conflict(format!(
                "franchise name '{new_name}' is already assigned to this franchise"
            )));
        }

        let renamed = self
            .franchises
            .update_name(id, new_name)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("franchise not found: {id}")))?;
        info!(franchise_id = %id, "Renamed franchise to: {new_name}");
        Ok(renamed)
    }
}

/// Return every franchise, unfiltered and unordered.
pub struct GetAllFranchises {
    franchises: Arc<dyn FranchiseRepo>,
}

impl GetAllFranchises {
    pub fn new(franchises: Arc<dyn FranchiseRepo>) -> Self {
        Self { franchises }
    }

    pub async fn execute(&self) -> Result<Vec<Franchise>, DomainError> {
        debug!("Listing all franchises");
        Ok(self.franchises.find_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockFranchiseRepo;
    use chrono::Utc;
    use mockall::predicate::*;

    fn stored(id: FranchiseId, name: &str) -> Franchise {
        Franchise {
            id,
            name: name.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_persists_when_name_is_free() {
        let mut repo = MockFranchiseRepo::new();
        let id = FranchiseId::new();

        repo.expect_find_by_name()
            .withf(|name| name == "Acme")
            .returning(|_| Ok(None));
        repo.expect_save()
            .withf(|draft| draft.name == "Acme")
            .returning(move |draft| Ok(stored(id, &draft.name)));

        let created = CreateFranchise::new(Arc::new(repo))
            .execute("Acme")
            .await
            .expect("create succeeds");
        assert_eq!(created.id, id);
        assert_eq!(created.name, "Acme");
    }

    #[tokio::test]
    async fn create_rejects_duplicate_name_without_writing() {
        let mut repo = MockFranchiseRepo::new();
        repo.expect_find_by_name()
            .withf(|name| name == "Acme")
            .returning(|_| Ok(Some(stored(FranchiseId::new(), "Acme"))));
        // No expect_save: a write attempt would panic the mock.

        let err = CreateFranchise::new(Arc::new(repo))
            .execute("Acme")
            .await
            .unwrap_err();
        assert!(err.is_conflict());
        assert!(err.to_string().contains("Acme"));
    }

    #[tokio::test]
    async fn rename_missing_franchise_is_not_found() {
        let mut repo = MockFranchiseRepo::new();
        let id = FranchiseId::new();
        repo.expect_find_by_id().with(eq(id)).returning(|_| Ok(None));

        let err = UpdateFranchiseName::new(Arc::new(repo))
            .execute(id, "Acme")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn rename_to_name_held_by_other_franchise_is_conflict() {
        let mut repo = MockFranchiseRepo::new();
        let id = FranchiseId::new();
        let other = FranchiseId::new();

        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(stored(id, "Old"))));
        repo.expect_find_by_name()
            .withf(|name| name == "Taken")
            .returning(move |_| Ok(Some(stored(other, "Taken"))));

        let err = UpdateFranchiseName::new(Arc::new(repo))
            .execute(id, "Taken")
            .await
            .unwrap_err();
        assert!(err.is_conflict());
        assert!(err.to_string().contains("already in use"));
    }

    #[tokio::test]
    async fn rename_to_own_current_name_is_conflict_not_noop() {
        let mut repo = MockFranchiseRepo::new();
        let id = FranchiseId::new();

        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(stored(id, "Same"))));
        repo.expect_find_by_name()
            .withf(|name| name == "Same")
            .returning(move |_| Ok(Some(stored(id, "Same"))));

        let err = UpdateFranchiseName::new(Arc::new(repo))
            .execute(id, "Same")
            .await
            .unwrap_err();
        assert!(err.is_conflict());
        assert!(err.to_string().contains("already assigned"));
    }

    #[tokio::test]
    async fn rename_with_free_name_updates() {
        let mut repo = MockFranchiseRepo::new();
        let id = FranchiseId::new();

        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(stored(id, "Old"))));
        repo.expect_find_by_name()
            .withf(|name| name == "Fresh")
            .returning(|_| Ok(None));
        repo.expect_update_name()
            .withf(move |got, name| *got == id && name == "Fresh")
            .returning(move |_, name| Ok(Some(stored(id, name))));

        let renamed = UpdateFranchiseName::new(Arc::new(repo))
            .execute(id, "Fresh")
            .await
            .expect("rename succeeds");
        assert_eq!(renamed.name, "Fresh");
    }

    #[tokio::test]
    async fn list_on_empty_store_returns_empty_not_error() {
        let mut repo = MockFranchiseRepo::new();
        repo.expect_find_all().returning(|| Ok(Vec::new()));

        let all = GetAllFranchises::new(Arc::new(repo))
            .execute()
            .await
            .expect("list succeeds");
        assert!(all.is_empty());
    }
}
