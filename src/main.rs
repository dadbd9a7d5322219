//! Gargaar Academy Server - subscriptions, trials, and the lesson catalogue
//!
//! Architecture:
//! - SeaORM for database access (SQLite)
//! - Axum for HTTP API with rate limiting
//! - Tokio for async runtime

mod course;
mod entity;
mod error;
mod handlers;
mod migration;
mod plans;
mod prelude;
mod state;
mod sv;
mod utils;

use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder};
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::prelude::*;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
      "gargaar=debug,tower_http=debug,axum=trace,sea_orm=warn".into()
    }))
    .with(tracing_subscriber::fmt::layer())
    .init();

  let db_url =
    env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:gargaar.db?mode=rwc".into());

  info!("Starting Gargaar Academy Server v{}", env!("CARGO_PKG_VERSION"));

  let app = Arc::new(AppState::new(&db_url).await?);

  let seeded = app.sv().video.seed_samples().await?;
  if seeded > 0 {
    info!("Seeded {} sample videos", seeded);
  }

  // Rate limiting (100 burst, refill 1 per 2 seconds, per IP)
  let governor_conf = Arc::new(
    GovernorConfigBuilder::default()
      .per_second(2)
      .burst_size(100)
      .finish()
      .context("Failed to build rate limiter config")?,
  );

  let limiter = governor_conf.limiter().clone();
  tokio::spawn(async move {
    loop {
      tokio::time::sleep(Duration::from_secs(60)).await;
      limiter.retain_recent();
    }
  });

  let router = Router::new()
    .route("/health", get(handlers::health))
    .route("/api/plans", get(handlers::list_plans))
    .route("/api/plans/{id}", get(handlers::get_plan))
    .route("/api/register", post(handlers::register))
    .route("/api/users/{id}", get(handlers::get_user))
    .route("/api/users/{id}/payments", get(handlers::user_transactions))
    .route("/api/payments", post(handlers::process_payment))
    .route("/api/payments/{id}", get(handlers::get_transaction))
    .route("/api/payments/{id}/verify", get(handlers::verify_payment))
    .route(
      "/api/videos",
      post(handlers::create_video).get(handlers::list_videos),
    )
    .route("/api/videos/{id}", get(handlers::get_video))
    .route("/api/course", post(handlers::generate_course))
    .layer(
      ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(GovernorLayer::new(governor_conf))
        .layer(
          CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        ),
    )
    .with_state(app)
    .into_make_service_with_connect_info::<SocketAddr>();

  let port: u16 =
    env::var("PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(3000);
  let addr = SocketAddr::from(([0, 0, 0, 0], port));

  let listener =
    tokio::net::TcpListener::bind(addr).await.context("Failed to bind")?;
  info!("HTTP server listening on {}", addr);

  axum::serve(listener, router).await.context("Axum server error")
}
