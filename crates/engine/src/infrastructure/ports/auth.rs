//! Identity port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tomeforge_domain::UserId;

/// A signed-in account as reported by the auth backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: UserId::new(id),
            email: None,
            display_name: None,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Whether a real identity backend is wired in.
    fn is_configured(&self) -> bool;
    async fn current_user(&self) -> Option<User>;
}
