use serde::Deserialize;

/// Built-in placeholder used when DEFAULT_PASSWORD is unset. Flagged at
/// startup; must be overridden before any real deployment.
const PLACEHOLDER_PASSWORD: &str = "default_password";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    /// Credential every upserted user is hashed with. There is no
    /// user-supplied password anywhere in this app.
    pub default_password: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let default_password = match std::env::var("DEFAULT_PASSWORD") {
            Ok(v) if !v.is_empty() => v,
            _ => {
                tracing::warn!(
                    "DEFAULT_PASSWORD not set; using the built-in placeholder credential"
                );
                PLACEHOLDER_PASSWORD.to_string()
            }
        };
        Ok(Self {
            database_url,
            default_password,
        })
    }
}
