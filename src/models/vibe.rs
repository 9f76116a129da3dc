// src/models/vibe.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Acima disso o resumo sugere a janela da madrugada.
pub const HOT_CROWD_THRESHOLD: i16 = 85;
pub const HOT_CROWD_BEST_WINDOW: &str = "02:00-04:00";
pub const MAX_QUEUE_MINUTES: i32 = 600;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VibeSample {
    pub id: Uuid,
    pub venue_id: Uuid,
    pub door_strictness: i16,
    pub queue_estimate: i32,
    pub music_intensity: i16,
    pub crowd_heat: i16,
    pub suggestion: String,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VibeSummary {
    pub venue_id: Uuid,
    pub door_strictness: i16,
    pub queue_estimate: i32,
    pub music_intensity: i16,
    pub crowd_heat: i16,
    pub suggestion: String,
    pub last_updated: DateTime<Utc>,
    pub best_window: Option<String>,
}

impl From<VibeSample> for VibeSummary {
    fn from(sample: VibeSample) -> Self {
        let best_window = (sample.crowd_heat > HOT_CROWD_THRESHOLD)
            .then(|| HOT_CROWD_BEST_WINDOW.to_string());
        Self {
            venue_id: sample.venue_id,
            door_strictness: sample.door_strictness,
            queue_estimate: sample.queue_estimate,
            music_intensity: sample.music_intensity,
            crowd_heat: sample.crowd_heat,
            suggestion: sample.suggestion,
            last_updated: sample.recorded_at,
            best_window,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordVibePayload {
    pub door_strictness: i32,
    pub queue_estimate: i32,
    pub music_intensity: i32,
    pub crowd_heat: i32,
    #[validate(length(max = 500, message = "The suggestion must have at most 500 characters."))]
    #[serde(default)]
    pub suggestion: String,
}

/// Amostra já com os valores dentro dos limites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVibeSample {
    pub door_strictness: i16,
    pub queue_estimate: i32,
    pub music_intensity: i16,
    pub crowd_heat: i16,
    pub suggestion: String,
}

impl From<&RecordVibePayload> for NewVibeSample {
    fn from(payload: &RecordVibePayload) -> Self {
        let percent = |v: i32| v.clamp(0, 100) as i16;
        Self {
            door_strictness: percent(payload.door_strictness),
            queue_estimate: payload.queue_estimate.clamp(0, MAX_QUEUE_MINUTES),
            music_intensity: percent(payload.music_intensity),
            crowd_heat: percent(payload.crowd_heat),
            suggestion: payload.suggestion.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(crowd_heat: i16) -> VibeSample {
        VibeSample {
            id: Uuid::new_v4(),
            venue_id: Uuid::new_v4(),
            door_strictness: 95,
            queue_estimate: 75,
            music_intensity: 98,
            crowd_heat,
            suggestion: "Door vibe: unsmiling tonight.".into(),
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn hot_crowd_gets_best_window() {
        let summary = VibeSummary::from(sample(90));
        assert_eq!(summary.best_window.as_deref(), Some("02:00-04:00"));
    }

    #[test]
    fn threshold_itself_is_not_hot() {
        assert!(VibeSummary::from(sample(85)).best_window.is_none());
    }

    #[test]
    fn recorded_values_are_clamped() {
        let payload = RecordVibePayload {
            door_strictness: 130,
            queue_estimate: -5,
            music_intensity: 50,
            crowd_heat: -1,
            suggestion: "  go now ".into(),
        };
        let new = NewVibeSample::from(&payload);
        assert_eq!(new.door_strictness, 100);
        assert_eq!(new.queue_estimate, 0);
        assert_eq!(new.crowd_heat, 0);
        assert_eq!(new.suggestion, "go now");
    }
}
