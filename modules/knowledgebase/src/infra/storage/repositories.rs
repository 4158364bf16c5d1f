//! SeaORM repository implementations

use crate::contract::Article;
use crate::domain::repository::{ArticlesRepository, OptionsRepository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    prelude::Expr, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;

use super::entity;

// ===== Options Repository =====

pub struct SeaOrmOptionsRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmOptionsRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OptionsRepository for SeaOrmOptionsRepository {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>> {
        let result = entity::options::Entity::find_by_id(key).one(&*self.db).await?;

        Ok(result.map(|e| e.value))
    }

    async fn set(&self, key: &str, value: serde_json::Value) -> Result<()> {
        use sea_orm::ActiveValue::Set;

        let existing = entity::options::Entity::find_by_id(key).one(&*self.db).await?;

        let active = entity::options::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value),
            updated_at: Set(chrono::Utc::now()),
        };

        if existing.is_some() {
            entity::options::Entity::update(active).exec(&*self.db).await?;
        } else {
            entity::options::Entity::insert(active).exec(&*self.db).await?;
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        entity::options::Entity::delete_by_id(key).exec(&*self.db).await?;

        Ok(())
    }
}

// ===== Articles Repository =====

pub struct SeaOrmArticlesRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmArticlesRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ArticlesRepository for SeaOrmArticlesRepository {
    async fn find_by_id(&self, article_id: i64) -> Result<Option<Article>> {
        let result = entity::Entity::find_by_id(article_id).one(&*self.db).await?;

        Ok(result.map(|e| e.into()))
    }

    async fn list_by_type(&self, post_type: &str) -> Result<Vec<Article>> {
        let results = entity::Entity::find()
            .filter(entity::Column::PostType.eq(post_type))
            .order_by_asc(entity::Column::MenuOrder)
            .order_by_asc(entity::Column::Title)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn rename_type(&self, old_type: &str, new_type: &str) -> Result<u64> {
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::PostType, Expr::value(new_type))
            .filter(entity::Column::PostType.eq(old_type))
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
