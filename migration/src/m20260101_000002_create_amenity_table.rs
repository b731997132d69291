use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Amenity::Table)
                    .if_not_exists()
                    .col(pk_auto(Amenity::Id))
                    .col(string(Amenity::Name))
                    .col(double(Amenity::Price))
                    .col(string_null(Amenity::Image))
                    .col(text_null(Amenity::Description))
                    .col(integer_null(Amenity::Capacity))
                    .col(string_null(Amenity::Category))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Amenity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Amenity {
    #[sea_orm(iden = "amenities")]
    Table,
    Id,
    Name,
    Price,
    Image,
    Description,
    Capacity,
    Category,
}
