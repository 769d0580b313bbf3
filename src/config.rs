use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub health_check_port: u16,
    pub credit_score_url: String,
    pub score_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            database_url: std::env::var("DB_URL")
                .or_else(|_| std::env::var("DATABASE_URL"))
                .map_err(|_| {
                    anyhow::anyhow!("DB_URL or DATABASE_URL environment variable required")
                })
                .and_then(|url| {
                    if url.trim().is_empty() {
                        anyhow::bail!("DB_URL cannot be empty");
                    }
                    if !url.starts_with("postgresql://") && !url.starts_with("postgres://") {
                        anyhow::bail!("DB_URL must start with postgresql:// or postgres://");
                    }
                    Ok(url)
                })?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            health_check_port: std::env::var("HEALTH_CHECK_PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .map_err(|_| {
                    anyhow::anyhow!("HEALTH_CHECK_PORT must be a valid number between 1-65535")
                })?,
            credit_score_url: std::env::var("CREDIT_SCORE_URL")
                .map_err(|_| anyhow::anyhow!("CREDIT_SCORE_URL environment variable required"))
                .and_then(|raw| {
                    if raw.trim().is_empty() {
                        anyhow::bail!("CREDIT_SCORE_URL cannot be empty");
                    }
                    let parsed = url::Url::parse(&raw)
                        .map_err(|e| anyhow::anyhow!("CREDIT_SCORE_URL is not a valid URL: {}", e))?;
                    if parsed.scheme() != "http" && parsed.scheme() != "https" {
                        anyhow::bail!("CREDIT_SCORE_URL must start with http:// or https://");
                    }
                    Ok(raw)
                })?,
            score_timeout_secs: std::env::var("SCORE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("SCORE_TIMEOUT_SECS must be a valid number"))?,
        };

        // Log successful configuration load (without credentials in the database URL)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!(
            "Database URL: {}...",
            &config.database_url[..20.min(config.database_url.len())]
        );
        tracing::debug!("Credit Score URL: {}", config.credit_score_url);
        tracing::debug!("Server Port: {}", config.port);
        tracing::debug!("Health Check Port: {}", config.health_check_port);

        Ok(config)
    }
}
