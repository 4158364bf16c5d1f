//! Domain service - settings pipeline and article queries

use super::repository::{ArticlesRepository, OptionsRepository};
use super::validation;
use crate::contract::{
    Article, Breadcrumb, KnowledgebaseError, RawSettingsForm, RedirectTarget, Settings,
    SettingsStatus, TocEntry,
};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;

/// Options key holding the settings record
pub const SETTINGS_KEY: &str = "knowledgebase.settings";

/// Options key holding the previous slug between a change and the next load
pub const PENDING_POST_TYPE_KEY: &str = "knowledgebase.pending_post_type";

/// Ancestor chains longer than this are treated as corrupt
const MAX_BREADCRUMB_DEPTH: usize = 64;

/// Per-user mailbox key
fn status_key(user_id: i64) -> String {
    format!("knowledgebase.status.{}", user_id)
}

/// Domain service for the knowledgebase module
pub struct Service {
    options: Arc<dyn OptionsRepository>,
    articles: Arc<dyn ArticlesRepository>,
    /// Path of the admin settings page, used for redirect targets
    admin_path: String,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        options: Arc<dyn OptionsRepository>,
        articles: Arc<dyn ArticlesRepository>,
        admin_path: impl Into<String>,
    ) -> Self {
        Self {
            options,
            articles,
            admin_path: admin_path.into(),
        }
    }

    /// Settings page URL carrying the settings-updated flag, the target of
    /// the post/redirect/get hop after a form submission
    pub fn settings_page_url(&self) -> String {
        format!("{}?settings-updated=true", self.admin_path)
    }

    // ===== Settings Operations =====

    /// Seed default settings if none are stored yet (idempotent)
    pub async fn install(&self) -> Result<(), KnowledgebaseError> {
        let existing = self
            .options
            .get(SETTINGS_KEY)
            .await
            .map_err(|_| KnowledgebaseError::Internal)?;

        if existing.is_none() {
            let defaults = Settings::default();
            self.options
                .set(SETTINGS_KEY, settings_to_value(&defaults))
                .await
                .map_err(|_| KnowledgebaseError::Internal)?;
            tracing::info!(post_type = %defaults.post_type, "seeded default settings");
        }
        Ok(())
    }

    /// Current settings, defaults when nothing has been saved yet
    pub async fn settings(&self) -> Result<Settings, KnowledgebaseError> {
        let value = self
            .options
            .get(SETTINGS_KEY)
            .await
            .map_err(|_| KnowledgebaseError::Internal)?;

        Ok(value
            .as_ref()
            .map(settings_from_value)
            .unwrap_or_default())
    }

    /// Run a raw form submission through the save pipeline
    ///
    /// validate -> (on slug change) marker + bulk rename -> mailbox write ->
    /// persist record. Field failures never abort: the failed fields keep
    /// their previous values and the messages travel via the mailbox.
    pub async fn save_settings(
        &self,
        user_id: i64,
        form: RawSettingsForm,
    ) -> Result<(Settings, SettingsStatus), KnowledgebaseError> {
        let prev = self.settings().await?;
        let (record, mut status) = validation::validate(&form, &prev);

        // A slug-change event: the validated slug differs from the stored one
        if record.post_type != prev.post_type {
            self.options
                .set(PENDING_POST_TYPE_KEY, json!(prev.post_type))
                .await
                .map_err(|_| KnowledgebaseError::Internal)?;

            match self
                .articles
                .rename_type(&prev.post_type, &record.post_type)
                .await
            {
                Ok(rows) => {
                    tracing::info!(
                        old = %prev.post_type,
                        new = %record.post_type,
                        rows,
                        "moved articles to new post type"
                    );
                }
                Err(error) => {
                    // Surfaced through the mailbox rather than swallowed
                    tracing::error!(
                        old = %prev.post_type,
                        new = %record.post_type,
                        %error,
                        "bulk article rename failed"
                    );
                    status.status = false;
                    // The error banner must not open with the success sentence
                    status
                        .messages
                        .retain(|m| m != validation::SUCCESS_MESSAGE);
                    status.messages.push(
                        "Existing articles could not be moved to the new post type".to_string(),
                    );
                }
            }
        }

        // Mailbox write happens after the migration step so a rename failure
        // is visible on the next page load
        self.options
            .set(&status_key(user_id), status_to_value(&status))
            .await
            .map_err(|_| KnowledgebaseError::Internal)?;

        self.options
            .set(SETTINGS_KEY, settings_to_value(&record))
            .await
            .map_err(|_| KnowledgebaseError::Internal)?;

        Ok((record, status))
    }

    /// Take the pending status for a user, clearing it (read-once)
    pub async fn take_user_status(
        &self,
        user_id: i64,
    ) -> Result<Option<SettingsStatus>, KnowledgebaseError> {
        let key = status_key(user_id);
        let value = self
            .options
            .get(&key)
            .await
            .map_err(|_| KnowledgebaseError::Internal)?;

        let Some(value) = value else {
            return Ok(None);
        };

        self.options
            .delete(&key)
            .await
            .map_err(|_| KnowledgebaseError::Internal)?;

        Ok(Some(status_from_value(&value)))
    }

    /// Consume the pending-migration marker, yielding a one-time redirect
    ///
    /// The marker's presence is the sole trigger; its value (the old slug)
    /// is only logged. The target embeds the current slug so the admin
    /// screens reload against the new content-type registration.
    pub async fn check_pending_redirect(
        &self,
    ) -> Result<Option<RedirectTarget>, KnowledgebaseError> {
        let marker = self
            .options
            .get(PENDING_POST_TYPE_KEY)
            .await
            .map_err(|_| KnowledgebaseError::Internal)?;

        let Some(marker) = marker else {
            return Ok(None);
        };

        self.options
            .delete(PENDING_POST_TYPE_KEY)
            .await
            .map_err(|_| KnowledgebaseError::Internal)?;

        let current = self.settings().await?;
        tracing::info!(
            old = %marker.as_str().unwrap_or_default(),
            new = %current.post_type,
            "redirecting to settings page after post type change"
        );

        Ok(Some(RedirectTarget {
            location: format!(
                "{}?post_type={}&settings-updated=true",
                self.admin_path, current.post_type
            ),
        }))
    }

    // ===== Article Operations =====

    /// Table of contents: all articles of the current content type
    pub async fn list_articles(&self) -> Result<Vec<TocEntry>, KnowledgebaseError> {
        let settings = self.settings().await?;
        let articles = self
            .articles
            .list_by_type(&settings.post_type)
            .await
            .map_err(|_| KnowledgebaseError::Internal)?;

        Ok(articles
            .into_iter()
            .map(|a| TocEntry {
                id: a.id,
                parent_id: a.parent_id,
                title: a.title,
                excerpt: a.excerpt,
                menu_order: a.menu_order,
            })
            .collect())
    }

    /// Get a single article of the current content type
    pub async fn get_article(&self, article_id: i64) -> Result<Article, KnowledgebaseError> {
        let settings = self.settings().await?;
        let article = self
            .articles
            .find_by_id(article_id)
            .await
            .map_err(|_| KnowledgebaseError::Internal)?;

        match article {
            Some(a) if a.post_type == settings.post_type => Ok(a),
            _ => Err(KnowledgebaseError::NotFound {
                resource: "article".to_string(),
                id: article_id.to_string(),
            }),
        }
    }

    /// Ancestor chain for an article, root first, ending at the article
    pub async fn breadcrumbs(
        &self,
        article_id: i64,
    ) -> Result<Vec<Breadcrumb>, KnowledgebaseError> {
        let article = self.get_article(article_id).await?;

        let mut chain = vec![Breadcrumb {
            id: article.id,
            title: article.title.clone(),
        }];
        let mut seen: HashSet<i64> = HashSet::from([article.id]);
        let mut parent = article.parent_id;

        while let Some(parent_id) = parent {
            if !seen.insert(parent_id) || chain.len() >= MAX_BREADCRUMB_DEPTH {
                tracing::warn!(article_id, parent_id, "cyclic or overlong ancestor chain");
                break;
            }
            let Some(ancestor) = self
                .articles
                .find_by_id(parent_id)
                .await
                .map_err(|_| KnowledgebaseError::Internal)?
            else {
                // Dangling parent reference: stop at the last known ancestor
                break;
            };
            parent = ancestor.parent_id;
            chain.push(Breadcrumb {
                id: ancestor.id,
                title: ancestor.title,
            });
        }

        chain.reverse();
        Ok(chain)
    }
}

// ===== Options value mapping =====
//
// Contract models carry no serde derives; options values are mapped by hand.
// Readers are tolerant of missing fields so a partially written blob
// degrades to defaults instead of failing the request.

fn settings_to_value(settings: &Settings) -> Value {
    json!({
        "menu_page_title": settings.menu_page_title,
        "menu_position": settings.menu_position,
        "hide_menu": settings.hide_menu,
        "post_type": settings.post_type,
    })
}

fn settings_from_value(value: &Value) -> Settings {
    let defaults = Settings::default();
    Settings {
        menu_page_title: value
            .get("menu_page_title")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or(defaults.menu_page_title),
        menu_position: value
            .get("menu_position")
            .and_then(Value::as_i64)
            .unwrap_or(defaults.menu_position),
        hide_menu: value
            .get("hide_menu")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.hide_menu),
        post_type: value
            .get("post_type")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or(defaults.post_type),
    }
}

fn status_to_value(status: &SettingsStatus) -> Value {
    json!({
        "status": status.status,
        "messages": status.messages,
    })
}

fn status_from_value(value: &Value) -> SettingsStatus {
    SettingsStatus {
        status: value.get("status").and_then(Value::as_bool).unwrap_or(false),
        messages: value
            .get("messages")
            .and_then(Value::as_array)
            .map(|msgs| {
                msgs.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
    }
}
