use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transaction::Table)
                    .if_not_exists()
                    .col(pk_auto(Transaction::Id))
                    .col(string_uniq(Transaction::TransactionRef))
                    .col(string(Transaction::CustomerName))
                    .col(string(Transaction::ContactNumber))
                    .col(string_null(Transaction::CustomerAddress))
                    .col(double(Transaction::TotalAmount).default(0.0))
                    .col(double(Transaction::Downpayment).default(0.0))
                    .col(double(Transaction::Balance).default(0.0))
                    .col(string(Transaction::PaymentStatus).default("Partial"))
                    .col(string(Transaction::BookingType).default("Online"))
                    .col(string(Transaction::BookingStatus).default("Pending"))
                    .col(string_null(Transaction::ProofOfPayment))
                    .col(integer_null(Transaction::UserId))
                    .col(json_null(Transaction::ExtensionHistory))
                    .col(integer(Transaction::Version).default(0))
                    .col(
                        timestamp_with_time_zone(Transaction::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transactions_user_id")
                            .from(Transaction::Table, Transaction::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_created_at")
                    .table(Transaction::Table)
                    .col(Transaction::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_customer")
                    .table(Transaction::Table)
                    .col(Transaction::CustomerName)
                    .col(Transaction::ContactNumber)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Transaction {
    #[sea_orm(iden = "transactions")]
    Table,
    Id,
    TransactionRef,
    CustomerName,
    ContactNumber,
    CustomerAddress,
    TotalAmount,
    Downpayment,
    Balance,
    PaymentStatus,
    BookingType,
    BookingStatus,
    ProofOfPayment,
    UserId,
    ExtensionHistory,
    Version,
    CreatedAt,
}
