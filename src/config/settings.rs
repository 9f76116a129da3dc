// src/config/settings.rs

use anyhow::{anyhow, Context};
use std::env;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_JWT_TTL_DAYS: i64 = 7;
const DEFAULT_VIBE_LIVE_WINDOW_MINUTES: i32 = 180;

/// Configuração carregada do ambiente (e do `.env`, se existir).
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_addr: String,
    pub database_max_connections: u32,
    pub jwt_ttl_days: i64,
    /// Uma amostra de vibe mais nova que isso marca o local como "live".
    pub vibe_live_window_minutes: i32,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or_else(|| anyhow!("DATABASE_URL must be set"))?;
        let jwt_secret = lookup("JWT_SECRET").ok_or_else(|| anyhow!("JWT_SECRET must be set"))?;
        if jwt_secret.trim().is_empty() {
            return Err(anyhow!("JWT_SECRET must not be empty"));
        }

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let jwt_ttl_days = match lookup("JWT_TTL_DAYS") {
            Some(raw) => raw
                .parse::<i64>()
                .with_context(|| format!("JWT_TTL_DAYS is not a number: {raw}"))?,
            None => DEFAULT_JWT_TTL_DAYS,
        };
        if jwt_ttl_days <= 0 {
            return Err(anyhow!("JWT_TTL_DAYS must be positive"));
        }

        let vibe_live_window_minutes = match lookup("VIBE_LIVE_WINDOW_MINUTES") {
            Some(raw) => raw
                .parse::<i32>()
                .with_context(|| format!("VIBE_LIVE_WINDOW_MINUTES is not a number: {raw}"))?,
            None => DEFAULT_VIBE_LIVE_WINDOW_MINUTES,
        };
        if vibe_live_window_minutes <= 0 {
            return Err(anyhow!("VIBE_LIVE_WINDOW_MINUTES must be positive"));
        }

        Ok(Self {
            database_url,
            jwt_secret,
            bind_addr,
            database_max_connections,
            jwt_ttl_days,
            vibe_live_window_minutes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_optional_keys_missing() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/raven"),
            ("JWT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(settings.bind_addr, "0.0.0.0:3000");
        assert_eq!(settings.database_max_connections, 5);
        assert_eq!(settings.jwt_ttl_days, 7);
        assert_eq!(settings.vibe_live_window_minutes, 180);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = Settings::from_lookup(lookup_from(&[("JWT_SECRET", "secret")])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let result = Settings::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/raven"),
            ("JWT_SECRET", "secret"),
            ("DATABASE_MAX_CONNECTIONS", "many"),
        ]));
        assert!(result.is_err());

        let result = Settings::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/raven"),
            ("JWT_SECRET", "secret"),
            ("JWT_TTL_DAYS", "0"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn live_window_must_be_positive() {
        for raw in ["0", "-30"] {
            let err = Settings::from_lookup(lookup_from(&[
                ("DATABASE_URL", "postgres://localhost/raven"),
                ("JWT_SECRET", "secret"),
                ("VIBE_LIVE_WINDOW_MINUTES", raw),
            ]))
            .unwrap_err();
            assert!(err.to_string().contains("VIBE_LIVE_WINDOW_MINUTES"));
        }
    }

    #[test]
    fn overrides_are_read() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/raven"),
            ("JWT_SECRET", "s3cr3t"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DATABASE_MAX_CONNECTIONS", "20"),
            ("VIBE_LIVE_WINDOW_MINUTES", "60"),
        ]))
        .unwrap();
        assert_eq!(settings.bind_addr, "127.0.0.1:8080");
        assert_eq!(settings.database_max_connections, 20);
        assert_eq!(settings.vibe_live_window_minutes, 60);
    }
}
