use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Users::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Users::UserId).string().not_null().primary_key(),
          )
          .col(ColumnDef::new(Users::Email).string().not_null())
          .col(ColumnDef::new(Users::Name).string().null())
          .col(ColumnDef::new(Users::RegDate).date_time().not_null())
          .col(ColumnDef::new(Users::TrialEndsAt).date_time().not_null())
          .col(
            ColumnDef::new(Users::IsPaid).boolean().not_null().default(false),
          )
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager.drop_table(Table::drop().table(Users::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum Users {
  Table,
  UserId,
  Email,
  Name,
  RegDate,
  TrialEndsAt,
  IsPaid,
}
