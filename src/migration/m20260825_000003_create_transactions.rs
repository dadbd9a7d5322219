use sea_orm_migration::prelude::*;

use super::m20260825_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Transactions::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Transactions::Id).string().not_null().primary_key(),
          )
          .col(ColumnDef::new(Transactions::UserId).string().not_null())
          .col(ColumnDef::new(Transactions::PlanId).string().not_null())
          .col(ColumnDef::new(Transactions::Amount).double().not_null())
          .col(ColumnDef::new(Transactions::Currency).string().not_null())
          .col(ColumnDef::new(Transactions::Status).text().not_null())
          .col(ColumnDef::new(Transactions::Timestamp).date_time().not_null())
          .col(ColumnDef::new(Transactions::PaymentMethod).text().not_null())
          .foreign_key(
            ForeignKey::create()
              .name("fk_transactions_user")
              .from(Transactions::Table, Transactions::UserId)
              .to(Users::Table, Users::UserId)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_transactions_user_id")
          .table(Transactions::Table)
          .col(Transactions::UserId)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(Transactions::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum Transactions {
  Table,
  Id,
  UserId,
  PlanId,
  Amount,
  Currency,
  Status,
  Timestamp,
  PaymentMethod,
}
