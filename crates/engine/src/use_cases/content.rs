//! Content management use case.
//!
//! Every write runs the entity through the persistence sanitizer, then the
//! entity validator, and only then reaches the repository. In cloud mode a
//! write also needs a signed-in user, who becomes the owner.

use std::sync::Arc;

use tomeforge_domain::{Content, ContentId, UserId, ValidationResult};

use crate::infrastructure::ports::{AuthPort, ContentRepo, RepoError, Stored};

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Validation failed: {}", .0.errors.join("; "))]
    Validation(ValidationResult),
    #[error("Sign in to save content")]
    Unauthenticated,
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Create, update, list and delete one kind of content.
pub struct ManageContent<T: Content> {
    repo: Arc<dyn ContentRepo<T>>,
    auth: Arc<dyn AuthPort>,
}

impl<T: Content> Clone for ManageContent<T> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            auth: self.auth.clone(),
        }
    }
}

impl<T: Content> ManageContent<T> {
    pub fn new(repo: Arc<dyn ContentRepo<T>>, auth: Arc<dyn AuthPort>) -> Self {
        Self { repo, auth }
    }

    /// Sanitizes and validates without saving, for live previews.
    pub fn prepare(&self, entity: &T) -> (T, ValidationResult) {
        let clean = entity.sanitized();
        let result = clean.validate();
        (clean, result)
    }

    /// Saves a new entity and returns its ID.
    pub async fn create(&self, entity: &T) -> Result<ContentId, ContentError> {
        let clean = self.checked(entity)?;
        let owner = self.owner().await?;
        let id = self.repo.save(owner.clone(), &clean).await?;

        tracing::info!(
            kind = %T::KIND,
            content_id = %id,
            owner = owner.as_ref().map(UserId::as_str),
            name = clean.display_name(),
            "Content created"
        );
        Ok(id)
    }

    /// Replaces an existing entity and returns the stored (sanitized) form.
    pub async fn update(&self, id: ContentId, entity: &T) -> Result<T, ContentError> {
        let clean = self.checked(entity)?;
        self.owner().await?;
        self.repo.update(id, &clean).await?;

        tracing::info!(kind = %T::KIND, content_id = %id, "Content updated");
        Ok(clean)
    }

    pub async fn get(&self, id: ContentId) -> Result<Stored<T>, ContentError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| RepoError::not_found(T::KIND.as_str(), id).into())
    }

    /// Content visible to the current user (or all free-mode content).
    pub async fn list(&self) -> Result<Vec<Stored<T>>, ContentError> {
        let owner = self.owner().await?;
        Ok(self.repo.list(owner).await?)
    }

    pub async fn delete(&self, id: ContentId) -> Result<(), ContentError> {
        self.owner().await?;
        self.repo.delete(id).await?;
        tracing::info!(kind = %T::KIND, content_id = %id, "Content deleted");
        Ok(())
    }

    fn checked(&self, entity: &T) -> Result<T, ContentError> {
        let (clean, result) = self.prepare(entity);
        if !result.is_valid {
            tracing::warn!(
                kind = %T::KIND,
                error_count = result.errors.len(),
                "Rejected invalid content"
            );
            return Err(ContentError::Validation(result));
        }
        Ok(clean)
    }

    /// Owner for writes: the signed-in user in cloud mode, nobody in free mode.
    async fn owner(&self) -> Result<Option<UserId>, ContentError> {
        if !self.auth.is_configured() {
            return Ok(None);
        }
        match self.auth.current_user().await {
            Some(user) => Ok(Some(user.id)),
            None => {
                tracing::warn!(kind = %T::KIND, "Rejected cloud operation without a signed-in user");
                Err(ContentError::Unauthenticated)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use tomeforge_domain::{Item, Shop};

    use super::*;
    use crate::infrastructure::in_memory::FreeModeAuth;
    use crate::infrastructure::ports::{MockAuthPort, MockContentRepo, User};

    fn signed_in(user: &'static str) -> Arc<dyn AuthPort> {
        let mut auth = MockAuthPort::new();
        auth.expect_is_configured().return_const(true);
        auth.expect_current_user()
            .returning(move || Some(User::new(user)));
        Arc::new(auth)
    }

    fn signed_out() -> Arc<dyn AuthPort> {
        let mut auth = MockAuthPort::new();
        auth.expect_is_configured().return_const(true);
        auth.expect_current_user().returning(|| None);
        Arc::new(auth)
    }

    #[tokio::test]
    async fn test_create_sanitizes_before_saving() {
        let mut repo = MockContentRepo::<Shop>::new();
        let id = ContentId::new();
        repo.expect_save()
            .withf(|owner, shop| owner.is_none() && shop.title == "Bazaar")
            .times(1)
            .returning(move |_, _| Ok(id));

        let use_case = ManageContent::new(Arc::new(repo), Arc::new(FreeModeAuth));
        let created = use_case.create(&Shop::new(" <b>Bazaar</b> ")).await.unwrap();
        assert_eq!(created, id);
    }

    #[tokio::test]
    async fn test_invalid_content_never_reaches_repo() {
        let mut repo = MockContentRepo::<Shop>::new();
        repo.expect_save().never();

        let mut shop = Shop::new("Bazaar");
        shop.add_item(Item::new("Lamp", "Gear", -1.0));

        let use_case = ManageContent::new(Arc::new(repo), Arc::new(FreeModeAuth));
        match use_case.create(&shop).await {
            Err(ContentError::Validation(result)) => {
                assert_eq!(result.errors, vec!["Item #1: Item price must be at least 0"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_cloud_write_requires_user() {
        let mut repo = MockContentRepo::<Shop>::new();
        repo.expect_save().never();

        let use_case = ManageContent::new(Arc::new(repo), signed_out());
        let err = use_case.create(&Shop::new("Bazaar")).await.unwrap_err();
        assert!(matches!(err, ContentError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_cloud_write_records_owner() {
        let mut repo = MockContentRepo::<Shop>::new();
        repo.expect_save()
            .withf(|owner, _| owner.as_ref().map(UserId::as_str) == Some("gm-7"))
            .times(1)
            .returning(|_, _| Ok(ContentId::new()));

        let use_case = ManageContent::new(Arc::new(repo), signed_in("gm-7"));
        assert!(use_case.create(&Shop::new("Bazaar")).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_scoped_to_user() {
        let mut repo = MockContentRepo::<Shop>::new();
        repo.expect_list()
            .withf(|owner| owner.as_ref().map(UserId::as_str) == Some("gm-7"))
            .returning(|owner| {
                Ok(vec![Stored {
                    id: ContentId::new(),
                    owner,
                    data: Shop::new("Bazaar"),
                    updated_at: Utc::now(),
                }])
            });

        let use_case = ManageContent::new(Arc::new(repo), signed_in("gm-7"));
        let listed = use_case.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].data.title, "Bazaar");
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let mut repo = MockContentRepo::<Shop>::new();
        repo.expect_get().returning(|_| Ok(None));

        let use_case = ManageContent::new(Arc::new(repo), Arc::new(FreeModeAuth));
        match use_case.get(ContentId::new()).await {
            Err(ContentError::Repo(err)) => assert!(err.is_not_found()),
            other => panic!("expected not found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_returns_sanitized_entity() {
        let mut repo = MockContentRepo::<Shop>::new();
        repo.expect_update().times(1).returning(|_, _| Ok(()));

        let use_case = ManageContent::new(Arc::new(repo), Arc::new(FreeModeAuth));
        let updated = use_case
            .update(ContentId::new(), &Shop::new("Bazaar "))
            .await
            .unwrap();
        assert_eq!(updated.title, "Bazaar");
    }
}
