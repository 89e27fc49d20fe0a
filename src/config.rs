// src/config.rs

use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;

const DEFAULT_DATABASE_URL: &str = "sqlite://quiz.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub bind_addr: SocketAddr,
    /// Bearer token for `/api/admin`. The admin API is closed when unset.
    pub admin_token: Option<String>,
    pub log_dir: String,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let bind_addr = env::var("BIND_ADDR")
            .ok()
            .and_then(|addr| addr.parse().ok())
            .unwrap_or(SocketAddr::from(([0, 0, 0, 0], 3000)));

        let admin_token = env::var("ADMIN_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        Self {
            database_url,
            rust_log,
            bind_addr,
            admin_token,
            log_dir,
            static_dir,
        }
    }
}
