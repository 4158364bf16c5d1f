//! Native client trait for in-process communication
//!
//! This trait defines the API that other modules use to interact with the
//! knowledgebase service. NO HTTP - direct function calls for performance.

use super::{
    error::KnowledgebaseError,
    model::{
        Article, Breadcrumb, RawSettingsForm, RedirectTarget, Settings, SettingsStatus, TocEntry,
    },
};
use async_trait::async_trait;

/// Knowledgebase service API for in-process communication
#[async_trait]
pub trait KnowledgebaseApi: Send + Sync {
    // ===== Settings Operations =====

    /// Get the current settings (defaults if never saved)
    async fn get_settings(&self) -> Result<Settings, KnowledgebaseError>;

    /// Run a raw form submission through the save pipeline
    ///
    /// Always completes: field failures keep the previous values and surface
    /// as messages in the returned status, which is also written to the
    /// caller's mailbox.
    async fn save_settings(
        &self,
        user_id: i64,
        form: RawSettingsForm,
    ) -> Result<(Settings, SettingsStatus), KnowledgebaseError>;

    /// Take the pending status for a user, clearing it (read-once)
    async fn take_user_status(
        &self,
        user_id: i64,
    ) -> Result<Option<SettingsStatus>, KnowledgebaseError>;

    /// Consume the pending-migration marker, if any, yielding a redirect
    /// target on the current content-type slug
    async fn check_pending_redirect(
        &self,
    ) -> Result<Option<RedirectTarget>, KnowledgebaseError>;

    // ===== Article Operations =====

    /// Table of contents: all articles of the current content type
    async fn list_articles(&self) -> Result<Vec<TocEntry>, KnowledgebaseError>;

    /// Get a single article by id
    async fn get_article(&self, article_id: i64) -> Result<Article, KnowledgebaseError>;

    /// Ancestor chain for an article, root first, ending at the article
    async fn breadcrumbs(&self, article_id: i64) -> Result<Vec<Breadcrumb>, KnowledgebaseError>;
}
