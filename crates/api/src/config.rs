//! Process configuration, read from the environment once at startup.

/// Runtime configuration for the API process.
///
/// Everything here is injected into the services at construction; nothing
/// reads the environment after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Symmetric signing secret for both token kinds.
    pub jwt_secret: String,
    pub redis_url: String,
    pub database_url: String,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        let redis_url = std::env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/warden".to_string());

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Self {
            jwt_secret,
            redis_url,
            database_url,
            bind_addr,
        }
    }
}
