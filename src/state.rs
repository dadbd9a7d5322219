use crate::{migration::Migrator, prelude::*, sv};

pub struct Services<'a> {
  pub user: sv::User<'a>,
  pub payment: sv::Payment<'a>,
  pub video: sv::Video<'a>,
}

pub struct AppState {
  pub db: DatabaseConnection,
}

impl AppState {
  pub async fn new(db_url: &str) -> anyhow::Result<Self> {
    info!("Connecting to database...");
    let db = Database::connect(db_url)
      .await
      .context("Failed to connect to database")?;

    info!("Running migrations...");
    Migrator::up(&db, None).await.context("Failed to run migrations")?;

    Ok(Self { db })
  }

  pub fn sv(&self) -> Services<'_> {
    Services {
      user: sv::User::new(&self.db),
      payment: sv::Payment::new(&self.db),
      video: sv::Video::new(&self.db),
    }
  }
}
