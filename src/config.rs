use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    pub secret_key: String,
    pub database_url: String,
    pub metrics_dir: PathBuf,
    pub log_dir: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        dotenvy::dotenv().ok();

        let secret_key = std::env::var("SECRET_KEY")
            .unwrap_or_else(|_| "MY_VERY_SECRET_TOKEN".to_string());

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:sentiment_analysis.db?mode=rwc".to_string());

        let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let metrics_dir = base_dir.join(
            std::env::var("METRICS_DIR").unwrap_or_else(|_| "metrics".to_string()),
        );
        let log_dir = base_dir.join(
            std::env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
        );

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080);

        Ok(Self {
            secret_key,
            database_url,
            metrics_dir,
            log_dir,
            host,
            port,
        })
    }
}
