// src/models/landing.rs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_DENSITY: u32 = 42;
pub const MAX_DENSITY: u32 = 200;
pub const DEFAULT_POSITIVE_RATE: f64 = 0.6;
pub const DEFAULT_BASE_COLOR: &str = "#8ACE00";

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct WordStreamQuery {
    pub density: Option<u32>,
    pub positive_rate: Option<f64>,
    /// Cor base em hex, ex.: `#8ACE00`
    pub base: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordStreamParams {
    pub density: u32,
    pub positive_rate: f64,
    pub base_color: String,
}

impl From<&WordStreamQuery> for WordStreamParams {
    fn from(query: &WordStreamQuery) -> Self {
        let positive_rate = query
            .positive_rate
            .filter(|rate| rate.is_finite())
            .unwrap_or(DEFAULT_POSITIVE_RATE)
            .clamp(0.0, 1.0);
        Self {
            density: query.density.unwrap_or(DEFAULT_DENSITY).min(MAX_DENSITY),
            positive_rate,
            base_color: query
                .base
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_COLOR.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewFragment {
    pub text: String,
    pub is_positive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WordDirection {
    Up,
    Down,
}

/// Um texto flutuante. Tempos em segundos, posições em vw/vh, sway em px.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WordItem {
    pub id: u32,
    pub text: String,
    pub x: f64,
    pub direction: WordDirection,
    pub delay: f64,
    pub duration: f64,
    pub phase_delay: f64,
    pub scale: f64,
    pub opacity: f64,
    pub color: String,
    pub start_offset: f64,
    pub sway_amp: f64,
    pub sway_dur: f64,
    pub sway_phase: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WordStream {
    pub palette: Vec<String>,
    pub items: Vec<WordItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_query_values() {
        let query = WordStreamQuery { density: None, positive_rate: None, base: None };
        let params = WordStreamParams::from(&query);
        assert_eq!(params.density, DEFAULT_DENSITY);
        assert_eq!(params.positive_rate, DEFAULT_POSITIVE_RATE);
        assert_eq!(params.base_color, DEFAULT_BASE_COLOR);
    }

    #[test]
    fn density_and_rate_are_clamped() {
        let query = WordStreamQuery {
            density: Some(5000),
            positive_rate: Some(1.7),
            base: Some("#ff00aa".into()),
        };
        let params = WordStreamParams::from(&query);
        assert_eq!(params.density, MAX_DENSITY);
        assert_eq!(params.positive_rate, 1.0);

        let nan = WordStreamQuery { density: None, positive_rate: Some(f64::NAN), base: None };
        assert_eq!(WordStreamParams::from(&nan).positive_rate, DEFAULT_POSITIVE_RATE);
    }
}
