// src/models/favorite.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::{HashMap, HashSet};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::venue::{Venue, VenueFilter, VenueKind};

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteVenue {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub venue: Venue,
    pub favorite_id: Uuid,
    pub favorite_created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteState {
    pub venue_id: Uuid,
    pub is_favorite: bool,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FavoriteStatusQuery {
    /// IDs separados por vírgula
    pub ids: Option<String>,
}

impl FavoriteStatusQuery {
    pub fn requested_ids(&self) -> Vec<String> {
        self.ids
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FavoriteListQuery {
    pub kind: Option<VenueKind>,
    pub district: Option<String>,
    pub tags: Option<String>,
}

impl FavoriteListQuery {
    pub fn filter(&self) -> VenueFilter {
        VenueFilter::from_query(self.district.as_deref(), self.tags.as_deref())
    }
}

/// Um booleano por ID pedido. IDs que nem são UUID simplesmente não são favoritos.
pub fn favorite_status_map(requested: &[String], favorited: &[Uuid]) -> HashMap<String, bool> {
    let favorited: HashSet<&Uuid> = favorited.iter().collect();
    requested
        .iter()
        .map(|raw| {
            let is_favorite = Uuid::parse_str(raw)
                .map(|id| favorited.contains(&id))
                .unwrap_or(false);
            (raw.clone(), is_favorite)
        })
        .collect()
}

/// Só os IDs que dá para consultar no banco.
pub fn parse_venue_ids(requested: &[String]) -> Vec<Uuid> {
    let mut ids: Vec<Uuid> = requested
        .iter()
        .filter_map(|raw| Uuid::parse_str(raw).ok())
        .collect();
    ids.sort();
    ids.dedup();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_boolean_per_requested_id() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let requested = vec![a.to_string(), b.to_string(), "not-a-uuid".to_string()];

        let map = favorite_status_map(&requested, &[b]);

        assert_eq!(map.len(), 3);
        assert_eq!(map[&a.to_string()], false);
        assert_eq!(map[&b.to_string()], true);
        assert_eq!(map["not-a-uuid"], false);
    }

    #[test]
    fn no_favorites_means_all_false() {
        let requested = vec![Uuid::new_v4().to_string(), Uuid::new_v4().to_string()];
        let map = favorite_status_map(&requested, &[]);
        assert!(map.values().all(|v| !v));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn query_ids_are_split_and_trimmed() {
        let query = FavoriteStatusQuery { ids: Some(" a, ,b,".into()) };
        assert_eq!(query.requested_ids(), vec!["a".to_string(), "b".to_string()]);
        assert!(FavoriteStatusQuery { ids: None }.requested_ids().is_empty());
    }

    #[test]
    fn parse_keeps_valid_ids_once() {
        let id = Uuid::new_v4();
        let parsed = parse_venue_ids(&[id.to_string(), "x".into(), id.to_string()]);
        assert_eq!(parsed, vec![id]);
    }
}
