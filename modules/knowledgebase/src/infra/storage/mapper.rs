//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::Article;

impl From<entity::Model> for Article {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            parent_id: entity.parent_id,
            post_type: entity.post_type,
            title: entity.title,
            excerpt: entity.excerpt,
            body: entity.body,
            menu_order: entity.menu_order,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<&Article> for entity::ActiveModel {
    fn from(model: &Article) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(model.id),
            parent_id: Set(model.parent_id),
            post_type: Set(model.post_type.clone()),
            title: Set(model.title.clone()),
            excerpt: Set(model.excerpt.clone()),
            body: Set(model.body.clone()),
            menu_order: Set(model.menu_order),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}
