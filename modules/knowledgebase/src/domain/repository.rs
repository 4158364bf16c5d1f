//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::Article;
use anyhow::Result;
use async_trait::async_trait;

/// Key/value options store
///
/// Values are arbitrary JSON documents keyed by string. Reading an absent
/// key yields `None`; deleting an absent key is a no-op.
#[async_trait]
pub trait OptionsRepository: Send + Sync {
    /// Read the value stored under a key
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>>;

    /// Store a value under a key, replacing any previous value
    async fn set(&self, key: &str, value: serde_json::Value) -> Result<()>;

    /// Remove a key
    async fn delete(&self, key: &str) -> Result<()>;
}

/// Repository for help articles
#[async_trait]
pub trait ArticlesRepository: Send + Sync {
    /// Find an article by id
    async fn find_by_id(&self, article_id: i64) -> Result<Option<Article>>;

    /// All articles of a content type, ordered by menu_order then title
    async fn list_by_type(&self, post_type: &str) -> Result<Vec<Article>>;

    /// Bulk rename: move every article from one content type to another
    ///
    /// Single best-effort write, no retry. Returns the number of rows
    /// affected; zero is a valid outcome when no articles exist yet.
    async fn rename_type(&self, old_type: &str, new_type: &str) -> Result<u64>;
}
