use sea_orm::entity::prelude::*;

/// A user-submitted term definition. Never hard-deleted: removal sets
/// `status_definition_id` to the deleted status and stamps `deleted_at`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "definitions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub term: String,
    #[sea_orm(column_type = "Text")]
    pub definition: String,
    pub user_id: i32,
    pub category_id: i32,
    pub status_definition_id: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub deleted_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::status_definitions::Entity",
        from = "Column::StatusDefinitionId",
        to = "super::status_definitions::Column::Id"
    )]
    StatusDefinition,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::status_definitions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StatusDefinition.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
