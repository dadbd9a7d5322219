//! Database migrations using SeaORM

use sea_orm_migration::prelude::*;

mod m20260825_000001_create_users;
mod m20260825_000002_create_subscriptions;
mod m20260825_000003_create_transactions;
mod m20260825_000004_create_videos;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
  fn migrations() -> Vec<Box<dyn MigrationTrait>> {
    vec![
      Box::new(m20260825_000001_create_users::Migration),
      Box::new(m20260825_000002_create_subscriptions::Migration),
      Box::new(m20260825_000003_create_transactions::Migration),
      Box::new(m20260825_000004_create_videos::Migration),
    ]
  }
}
