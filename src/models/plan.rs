// src/models/plan.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::validation::validate_not_blank;

/// Regra de lotação de um plano.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanCapacity {
    pub current: i64,
    pub max: i64,
}

impl PlanCapacity {
    pub fn new(current: i64, max: i64) -> Self {
        Self { current, max }
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    pub fn can_join(&self) -> bool {
        !self.is_full()
    }

    pub fn spots_left(&self) -> i64 {
        (self.max - self.current).max(0)
    }
}

// Linha crua do banco, antes de decidir se o local exato aparece.
#[derive(Debug, Clone, FromRow)]
pub struct PlanRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub languages: Vec<String>,
    pub time_window: String,
    pub meetup_hint: String,
    pub precise_location: Option<String>,
    pub max_members: i32,
    pub is_lgbtq_friendly: bool,
    pub venue_id: Option<Uuid>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub member_count: i64,
    pub is_member: bool,
}

impl PlanRow {
    pub fn capacity(&self) -> PlanCapacity {
        PlanCapacity::new(self.member_count, i64::from(self.max_members))
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub languages: Vec<String>,
    pub time_window: String,
    /// Local vago, sempre visível
    pub meetup_hint: String,
    /// Só aparece para membros ou quando o plano lota
    pub precise_location: Option<String>,
    pub location_revealed: bool,
    pub max_members: i32,
    pub current_members: i64,
    pub spots_left: i64,
    pub is_full: bool,
    pub is_member: bool,
    #[serde(rename = "isLGBTQFriendly")]
    pub is_lgbtq_friendly: bool,
    pub venue_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<PlanRow> for Plan {
    fn from(row: PlanRow) -> Self {
        let capacity = row.capacity();
        let location_revealed = row.is_member || capacity.is_full();
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            tags: row.tags,
            languages: row.languages,
            time_window: row.time_window,
            meetup_hint: row.meetup_hint,
            precise_location: if location_revealed { row.precise_location } else { None },
            location_revealed,
            max_members: row.max_members,
            current_members: capacity.current,
            spots_left: capacity.spots_left(),
            is_full: capacity.is_full(),
            is_member: row.is_member,
            is_lgbtq_friendly: row.is_lgbtq_friendly,
            venue_id: row.venue_id,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanMember {
    pub id: Uuid,
    pub plan_id: Uuid,
    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub user_id: Uuid,
    pub name: String,
    pub message: Option<String>,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanPayload {
    #[validate(
        length(min = 1, max = 80, message = "The title must have 1 to 80 characters."),
        custom(function = "validate_not_blank")
    )]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[validate(custom(function = "validate_not_blank", message = "The time window is required."))]
    pub time_window: String,
    #[validate(custom(function = "validate_not_blank", message = "The meetup hint is required."))]
    pub meetup_hint: String,
    pub precise_location: Option<String>,
    #[validate(range(min = 2, max = 50, message = "A plan takes between 2 and 50 members."))]
    pub max_members: i32,
    #[serde(default, rename = "isLGBTQFriendly")]
    pub is_lgbtq_friendly: bool,
    pub venue_id: Option<Uuid>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct JoinPlanPayload {
    #[validate(length(max = 280, message = "The message must have at most 280 characters."))]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct JoinPlanResponse {
    pub member: PlanMember,
    pub plan: Plan,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(member_count: i64, max_members: i32, is_member: bool) -> PlanRow {
        PlanRow {
            id: Uuid::new_v4(),
            title: "Techno Tuesday".into(),
            description: String::new(),
            tags: vec!["techno".into()],
            languages: vec!["EN".into(), "DE".into()],
            time_window: "23:00-03:00".into(),
            meetup_hint: "Near Warschauer Str.".into(),
            precise_location: Some("Späti at Revaler Str. 99".into()),
            max_members,
            is_lgbtq_friendly: true,
            venue_id: None,
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
            member_count,
            is_member,
        }
    }

    #[test]
    fn join_rejected_once_full() {
        assert!(PlanCapacity::new(3, 4).can_join());
        assert!(!PlanCapacity::new(4, 4).can_join());
        assert!(!PlanCapacity::new(5, 4).can_join());
        assert_eq!(PlanCapacity::new(5, 4).spots_left(), 0);
        assert_eq!(PlanCapacity::new(1, 4).spots_left(), 3);
    }

    #[test]
    fn precise_location_hidden_from_outsiders() {
        let plan = Plan::from(row(2, 6, false));
        assert!(plan.precise_location.is_none());
        assert!(!plan.location_revealed);
        assert_eq!(plan.spots_left, 4);
    }

    #[test]
    fn members_see_precise_location() {
        let plan = Plan::from(row(2, 6, true));
        assert_eq!(plan.precise_location.as_deref(), Some("Späti at Revaler Str. 99"));
    }

    #[test]
    fn full_plan_reveals_location() {
        let plan = Plan::from(row(6, 6, false));
        assert!(plan.is_full);
        assert!(plan.location_revealed);
        assert!(plan.precise_location.is_some());
    }

    #[test]
    fn blank_title_or_hint_fails_validation() {
        let payload: CreatePlanPayload = serde_json::from_value(serde_json::json!({
            "title": "   ",
            "timeWindow": "23:00-03:00",
            "meetupHint": " ",
            "maxMembers": 4
        }))
        .unwrap();
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("meetup_hint"));
        assert!(!fields.contains_key("time_window"));
    }

    #[test]
    fn lgbtq_flag_uses_client_field_name() {
        let json = serde_json::to_value(Plan::from(row(1, 4, false))).unwrap();
        assert_eq!(json["isLGBTQFriendly"], true);
        assert_eq!(json["currentMembers"], 1);
    }
}
