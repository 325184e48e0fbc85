//! Repository port traits for content persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tomeforge_domain::{Content, ContentId, UserId};

use super::error::RepoError;

/// A persisted entity together with its storage metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stored<T> {
    pub id: ContentId,
    /// `None` for content created in free mode
    pub owner: Option<UserId>,
    pub data: T,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Database Ports (one instance per content kind)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepo<T: Content>: Send + Sync {
    async fn save(&self, owner: Option<UserId>, entity: &T) -> Result<ContentId, RepoError>;
    async fn update(&self, id: ContentId, entity: &T) -> Result<(), RepoError>;
    async fn get(&self, id: ContentId) -> Result<Option<Stored<T>>, RepoError>;
    /// Content belonging to `owner`; `None` lists ownerless (free mode) content.
    async fn list(&self, owner: Option<UserId>) -> Result<Vec<Stored<T>>, RepoError>;
    async fn delete(&self, id: ContentId) -> Result<(), RepoError>;
}
