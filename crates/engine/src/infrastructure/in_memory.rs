//! Free-mode adapters.
//!
//! Used when no cloud backend is configured. Content lives only as long as
//! the process.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tomeforge_domain::{Content, ContentId, UserId};

use crate::infrastructure::ports::{AuthPort, ClockPort, ContentRepo, RepoError, Stored, User};

/// Ephemeral store for one content kind, in insertion order.
pub struct InMemoryContentRepo<T> {
    entries: RwLock<Vec<Stored<T>>>,
    clock: Arc<dyn ClockPort>,
    _kind: PhantomData<fn() -> T>,
}

impl<T: Content> InMemoryContentRepo<T> {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            clock,
            _kind: PhantomData,
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl<T: Content> ContentRepo<T> for InMemoryContentRepo<T> {
    async fn save(&self, owner: Option<UserId>, entity: &T) -> Result<ContentId, RepoError> {
        let id = ContentId::new();
        self.entries.write().await.push(Stored {
            id,
            owner,
            data: entity.clone(),
            updated_at: self.clock.now(),
        });
        Ok(id)
    }

    async fn update(&self, id: ContentId, entity: &T) -> Result<(), RepoError> {
        let mut entries = self.entries.write().await;
        let entry = entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| RepoError::not_found(T::KIND.as_str(), id))?;
        entry.data = entity.clone();
        entry.updated_at = self.clock.now();
        Ok(())
    }

    async fn get(&self, id: ContentId) -> Result<Option<Stored<T>>, RepoError> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .find(|entry| entry.id == id)
            .cloned())
    }

    async fn list(&self, owner: Option<UserId>) -> Result<Vec<Stored<T>>, RepoError> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|entry| entry.owner == owner)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: ContentId) -> Result<(), RepoError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            return Err(RepoError::not_found(T::KIND.as_str(), id));
        }
        Ok(())
    }
}

/// Identity for free mode: nothing configured, nobody signed in.
#[derive(Debug, Default, Clone, Copy)]
pub struct FreeModeAuth;

#[async_trait]
impl AuthPort for FreeModeAuth {
    fn is_configured(&self) -> bool {
        false
    }

    async fn current_user(&self) -> Option<User> {
        None
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use tomeforge_domain::Shop;

    use super::*;
    use crate::infrastructure::clock::FixedClock;

    fn repo() -> InMemoryContentRepo<Shop> {
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap());
        InMemoryContentRepo::new(Arc::new(clock))
    }

    #[tokio::test]
    async fn test_save_get_update_delete() {
        let repo = repo();
        let id = repo.save(None, &Shop::new("Bazaar")).await.unwrap();

        let stored = repo.get(id).await.unwrap().unwrap();
        assert_eq!(stored.data.title, "Bazaar");
        assert_eq!(stored.owner, None);

        repo.update(id, &Shop::new("Grand Bazaar")).await.unwrap();
        assert_eq!(repo.get(id).await.unwrap().unwrap().data.title, "Grand Bazaar");

        repo.delete(id).await.unwrap();
        assert!(repo.get(id).await.unwrap().is_none());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let repo = repo();
        let id = ContentId::new();
        assert!(repo.update(id, &Shop::new("x")).await.unwrap_err().is_not_found());
        assert!(repo.delete(id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_list_filters_by_owner_in_insertion_order() {
        let repo = repo();
        let alice = UserId::new("alice");
        repo.save(Some(alice.clone()), &Shop::new("First")).await.unwrap();
        repo.save(None, &Shop::new("Anonymous")).await.unwrap();
        repo.save(Some(alice.clone()), &Shop::new("Second")).await.unwrap();

        let titles: Vec<String> = repo
            .list(Some(alice))
            .await
            .unwrap()
            .into_iter()
            .map(|stored| stored.data.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);
        assert_eq!(repo.list(None).await.unwrap().len(), 1);
        assert_eq!(repo.len().await, 3);
    }

    #[tokio::test]
    async fn test_free_mode_auth() {
        assert!(!FreeModeAuth.is_configured());
        assert!(FreeModeAuth.current_user().await.is_none());
    }
}
