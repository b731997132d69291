use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000003_create_transaction_table::Transaction;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::TransactionId))
                    .col(string(Reservation::AmenityName))
                    .col(integer(Reservation::Quantity).default(1))
                    .col(double(Reservation::Price))
                    .col(date(Reservation::CheckInDate))
                    .col(date(Reservation::CheckOutDate))
                    .col(string(Reservation::Status).default("Pending"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_transaction_id")
                            .from(Reservation::Table, Reservation::TransactionId)
                            .to(Transaction::Table, Transaction::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    #[sea_orm(iden = "reservations")]
    Table,
    Id,
    TransactionId,
    AmenityName,
    Quantity,
    Price,
    CheckInDate,
    CheckOutDate,
    Status,
}
