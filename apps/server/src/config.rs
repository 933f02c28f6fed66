use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use chrono::NaiveTime;
use pairlist_market_data::CoinGeckoConfig;

/// Longest accepted request range, in days.
pub const DEFAULT_MAX_RANGE_DAYS: i64 = 3650;

/// When the daily snapshot job runs.
#[derive(Clone, Debug)]
pub struct SnapshotSchedule {
    pub enabled: bool,
    /// Local wall-clock time of the daily run.
    pub time: NaiveTime,
    pub run_on_start: bool,
}

impl Default for SnapshotSchedule {
    fn default() -> Self {
        Self {
            enabled: true,
            time: NaiveTime::from_hms_opt(0, 5, 0).unwrap_or_default(),
            run_on_start: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub max_range_days: i64,
    pub snapshot: SnapshotSchedule,
    pub provider: CoinGeckoConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            db_path: "./db/app.db".to_string(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            max_range_days: DEFAULT_MAX_RANGE_DAYS,
            snapshot: SnapshotSchedule::default(),
            provider: CoinGeckoConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Config::default();

        let listen_addr: SocketAddr = std::env::var("PL_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid PL_LISTEN_ADDR")?;
        let db_path = std::env::var("PL_DB_PATH").unwrap_or(defaults.db_path);
        let cors_allow = std::env::var("PL_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("PL_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let max_range_days = std::env::var("PL_MAX_RANGE_DAYS")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_MAX_RANGE_DAYS);

        let snapshot = SnapshotSchedule {
            enabled: env_flag("PL_SNAPSHOT_ENABLED", defaults.snapshot.enabled),
            time: match std::env::var("PL_SNAPSHOT_TIME") {
                Ok(value) => NaiveTime::parse_from_str(value.trim(), "%H:%M")
                    .with_context(|| format!("Invalid PL_SNAPSHOT_TIME '{}', expected HH:MM", value))?,
                Err(_) => defaults.snapshot.time,
            },
            run_on_start: env_flag("PL_SNAPSHOT_ON_START", defaults.snapshot.run_on_start),
        };

        let provider = CoinGeckoConfig {
            base_url: std::env::var("PL_PROVIDER_BASE_URL").unwrap_or(defaults.provider.base_url),
            vs_currency: std::env::var("PL_PROVIDER_VS_CURRENCY")
                .unwrap_or(defaults.provider.vs_currency),
            user_agent: std::env::var("PL_PROVIDER_USER_AGENT")
                .unwrap_or(defaults.provider.user_agent),
        };

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            max_range_days,
            snapshot,
            provider,
        })
    }
}

fn env_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(value) => parse_flag(&value).unwrap_or(default),
        Err(_) => default,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
