use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use warden_api::app::{self, AppServices};
use warden_api::config::AppConfig;
use warden_auth::TokenCodec;
use warden_infra::{PostgresIdentityRepository, RedisRevocationStore};

#[tokio::main]
async fn main() {
    warden_observability::init();

    let config = AppConfig::from_env();

    let codec = TokenCodec::new(config.jwt_secret.as_bytes());

    let revocation = RedisRevocationStore::connect(&config.redis_url)
        .await
        .expect("failed to connect to revocation store");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(&config.database_url)
        .expect("invalid DATABASE_URL");
    let identity = PostgresIdentityRepository::new(pool);

    let services = Arc::new(AppServices::new(
        codec,
        Arc::new(revocation),
        Arc::new(identity),
    ));

    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("failed to bind listener");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
