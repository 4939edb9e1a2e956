use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::category_book::Entity")]
    CategoryBook,
}

impl Related<super::category_book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CategoryBook.def()
    }
}

/// Books linked to a category through `category_books`.
impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        super::category_book::Relation::Book.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::category_book::Relation::Category.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
