use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Videos::Table)
          .if_not_exists()
          .col(ColumnDef::new(Videos::Id).string().not_null().primary_key())
          .col(ColumnDef::new(Videos::Title).string().not_null())
          .col(ColumnDef::new(Videos::Description).text().not_null())
          .col(ColumnDef::new(Videos::Duration).big_integer().not_null())
          .col(ColumnDef::new(Videos::Thumbnail).string().null())
          .col(ColumnDef::new(Videos::Source).text().not_null())
          .col(ColumnDef::new(Videos::SourceId).string().not_null())
          .col(ColumnDef::new(Videos::Level).text().not_null())
          .col(ColumnDef::new(Videos::Topic).string().not_null())
          .col(ColumnDef::new(Videos::Transcript).text().null())
          .col(ColumnDef::new(Videos::Captions).json().null())
          .col(ColumnDef::new(Videos::UploadedAt).date_time().not_null())
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_videos_level")
          .table(Videos::Table)
          .col(Videos::Level)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager.drop_table(Table::drop().table(Videos::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum Videos {
  Table,
  Id,
  Title,
  Description,
  Duration,
  Thumbnail,
  Source,
  SourceId,
  Level,
  Topic,
  Transcript,
  Captions,
  UploadedAt,
}
