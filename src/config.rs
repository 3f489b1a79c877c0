//! Environment configuration, read once at startup.

pub struct AppConfig {
    pub database_url: String,
    pub upload_dir: String,
    pub bind_addr: String,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to local defaults.
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://agriworld.db".into()),
            upload_dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "disease_images".into()),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into()),
        }
    }
}
