/// Media API configuration loaded from environment variables.
#[derive(Debug)]
pub struct MediaApiConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3000). Env var: `MEDIA_API_PORT`.
    pub media_api_port: u16,
    /// Upper bound of the connection pool (default 10). Env var: `DATABASE_MAX_CONNECTIONS`.
    pub database_max_connections: u32,
}

impl MediaApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// # Panics
    ///
    /// Panics if `DATABASE_URL` is missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_url: lookup("DATABASE_URL").expect("DATABASE_URL"),
            media_api_port: lookup("MEDIA_API_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}
