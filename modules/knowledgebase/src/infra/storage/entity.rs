//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Articles table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    /// Article id
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Parent article id, null for top-level articles
    pub parent_id: Option<i64>,

    /// Content-type slug the article belongs to
    pub post_type: String,

    /// Article title
    pub title: String,

    /// Short excerpt shown in listings
    pub excerpt: String,

    /// Full article body
    pub body: String,

    /// Manual sort order
    pub menu_order: i64,

    /// Creation timestamp
    pub created_at: DateTimeUtc,

    /// Last update timestamp
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Options key/value store module
pub mod options {
    use sea_orm::entity::prelude::*;

    /// Options table entity: string keys, JSON values
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "options")]
    pub struct Model {
        /// Option key (primary key)
        #[sea_orm(primary_key, auto_increment = false)]
        pub key: String,

        /// Option value as JSON
        pub value: Json,

        /// Last update timestamp
        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
