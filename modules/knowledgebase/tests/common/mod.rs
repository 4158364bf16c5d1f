//! Shared test fixtures: in-memory repository implementations

use async_trait::async_trait;
use chrono::Utc;
use knowledgebase::domain::repository::{ArticlesRepository, OptionsRepository};
use knowledgebase::Article;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// In-memory options store
#[derive(Clone, Default)]
pub struct MockOptionsRepo {
    data: Arc<RwLock<HashMap<String, serde_json::Value>>>,
}

impl MockOptionsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw access to a stored value, bypassing the repository trait
    pub fn raw(&self, key: &str) -> Option<serde_json::Value> {
        self.data.read().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.data.read().contains_key(key)
    }
}

#[async_trait]
impl OptionsRepository for MockOptionsRepo {
    async fn get(&self, key: &str) -> anyhow::Result<Option<serde_json::Value>> {
        Ok(self.data.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: serde_json::Value) -> anyhow::Result<()> {
        self.data.write().insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> anyhow::Result<()> {
        self.data.write().remove(key);
        Ok(())
    }
}

/// In-memory articles store that records bulk rename calls
#[derive(Clone, Default)]
pub struct MockArticlesRepo {
    data: Arc<RwLock<HashMap<i64, Article>>>,
    rename_calls: Arc<RwLock<Vec<(String, String)>>>,
    fail_rename: Arc<AtomicBool>,
}

impl MockArticlesRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, article: Article) {
        self.data.write().insert(article.id, article);
    }

    /// Every (old, new) pair `rename_type` was called with
    pub fn rename_calls(&self) -> Vec<(String, String)> {
        self.rename_calls.read().clone()
    }

    /// Make the next rename calls fail with a store error
    pub fn fail_next_rename(&self) {
        self.fail_rename.store(true, Ordering::SeqCst);
    }

    pub fn count_by_type(&self, post_type: &str) -> usize {
        self.data
            .read()
            .values()
            .filter(|a| a.post_type == post_type)
            .count()
    }
}

#[async_trait]
impl ArticlesRepository for MockArticlesRepo {
    async fn find_by_id(&self, article_id: i64) -> anyhow::Result<Option<Article>> {
        Ok(self.data.read().get(&article_id).cloned())
    }

    async fn list_by_type(&self, post_type: &str) -> anyhow::Result<Vec<Article>> {
        let mut articles: Vec<Article> = self
            .data
            .read()
            .values()
            .filter(|a| a.post_type == post_type)
            .cloned()
            .collect();
        articles.sort_by(|a, b| {
            a.menu_order
                .cmp(&b.menu_order)
                .then_with(|| a.title.cmp(&b.title))
        });
        Ok(articles)
    }

    async fn rename_type(&self, old_type: &str, new_type: &str) -> anyhow::Result<u64> {
        self.rename_calls
            .write()
            .push((old_type.to_string(), new_type.to_string()));

        if self.fail_rename.load(Ordering::SeqCst) {
            anyhow::bail!("simulated store failure");
        }

        let mut rows = 0;
        for article in self.data.write().values_mut() {
            if article.post_type == old_type {
                article.post_type = new_type.to_string();
                rows += 1;
            }
        }
        Ok(rows)
    }
}

/// Build an article with sensible defaults
pub fn article(id: i64, parent_id: Option<i64>, post_type: &str, title: &str) -> Article {
    Article {
        id,
        parent_id,
        post_type: post_type.to_string(),
        title: title.to_string(),
        excerpt: format!("{} excerpt", title),
        body: format!("{} body", title),
        menu_order: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
