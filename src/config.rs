use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub seed_demo: bool,
    pub notify_capacity: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let seed_demo = match env::var("APP_SEED_DEMO") {
            Ok(raw) => parse_flag(&raw)?,
            Err(_) => true,
        };
        let notify_capacity = env::var("APP_NOTIFY_CAPACITY")
            .ok()
            .and_then(|c| c.parse::<usize>().ok())
            .unwrap_or(64);
        Ok(Self {
            host,
            port,
            seed_demo,
            notify_capacity,
        })
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("APP_SEED_DEMO must be a boolean, got {other:?}"),
    }
}
