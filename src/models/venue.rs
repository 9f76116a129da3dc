// src/models/venue.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::{review::Review, vibe::VibeSummary};

pub const RATING_MIN: i16 = 0;
pub const RATING_MAX: i16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "venue_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VenueKind {
    Club,
    Bar,
}

impl VenueKind {
    /// Rótulos dos quatro slots de nota, na ordem music/vibe/crowd/safety.
    pub fn axis_labels(self) -> [&'static str; 4] {
        match self {
            VenueKind::Club => ["music", "vibe", "crowd", "safety"],
            VenueKind::Bar => ["quality", "vibe", "price", "friendliness"],
        }
    }
}

/// Notas de 0 a 100. Bares reaproveitam os mesmos slots
/// (quality, vibe, price, friendliness).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, FromRow, ToSchema)]
pub struct VenueRatings {
    pub music: i16,
    pub vibe: i16,
    pub crowd: i16,
    pub safety: i16,
}

impl VenueRatings {
    pub fn clamped(self) -> Self {
        Self {
            music: self.music.clamp(RATING_MIN, RATING_MAX),
            vibe: self.vibe.clamp(RATING_MIN, RATING_MAX),
            crowd: self.crowd.clamp(RATING_MIN, RATING_MAX),
            safety: self.safety.clamp(RATING_MIN, RATING_MAX),
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: Uuid,
    pub kind: VenueKind,
    pub name: String,
    pub district: String,
    pub tags: Vec<String>,
    #[sqlx(flatten)]
    pub ratings: VenueRatings,
    pub has_live_vibe: bool,
    pub description: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct District {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Theme {
    pub id: i32,
    pub name: String,
}

/// Filtro das listagens: distrito (igualdade) E pelo menos uma das tags.
/// Campos vazios não restringem nada.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueFilter {
    district: Option<String>,
    tags: Vec<String>,
}

impl VenueFilter {
    pub fn new<I, S>(district: Option<&str>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let district = district
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let mut normalized: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag.as_ref().trim().to_lowercase();
            if !tag.is_empty() && !normalized.contains(&tag) {
                normalized.push(tag);
            }
        }

        Self { district, tags: normalized }
    }

    /// Aceita as tags no formato da query string: `techno,house`.
    pub fn from_query(district: Option<&str>, tags_csv: Option<&str>) -> Self {
        Self::new(district, tags_csv.unwrap_or_default().split(','))
    }

    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn matches(&self, venue: &Venue) -> bool {
        let district_ok = self
            .district
            .as_deref()
            .is_none_or(|district| venue.district == district);
        let tags_ok = self.tags.is_empty()
            || self
                .tags
                .iter()
                .any(|wanted| venue.tags.iter().any(|tag| tag.eq_ignore_ascii_case(wanted)));
        district_ok && tags_ok
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VenueListQuery {
    /// Nome exato do distrito
    pub district: Option<String>,
    /// Tags separadas por vírgula; basta uma bater
    pub tags: Option<String>,
}

impl VenueListQuery {
    pub fn filter(&self) -> VenueFilter {
        VenueFilter::from_query(self.district.as_deref(), self.tags.as_deref())
    }
}

/// Tudo que a página de detalhe precisa numa resposta só.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VenueDetail {
    pub venue: Venue,
    pub axis_labels: Vec<String>,
    pub average_ratings: VenueRatings,
    pub review_count: usize,
    pub reviews: Vec<Review>,
    pub vibe: Option<VibeSummary>,
    pub is_favorite: bool,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn venue(name: &str, district: &str, tags: &[&str]) -> Venue {
        Venue {
            id: Uuid::new_v4(),
            kind: VenueKind::Club,
            name: name.to_string(),
            district: district.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ratings: VenueRatings { music: 80, vibe: 80, crowd: 80, safety: 80 },
            has_live_vibe: false,
            description: None,
            address: None,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::venue;
    use super::*;

    #[test]
    fn empty_filter_matches_everything() {
        let filter = VenueFilter::from_query(None, None);
        assert!(filter.matches(&venue("Tresor", "Mitte", &[])));
        assert!(filter.matches(&venue("Berghain", "Friedrichshain", &["techno"])));
    }

    #[test]
    fn district_and_tags_are_conjunctive() {
        let filter = VenueFilter::from_query(Some("Kreuzberg"), Some("techno,house"));

        assert!(filter.matches(&venue("Watergate", "Kreuzberg", &["house"])));
        // distrito certo, nenhuma tag
        assert!(!filter.matches(&venue("Bar X", "Kreuzberg", &["cocktails"])));
        // tag certa, distrito errado
        assert!(!filter.matches(&venue("Berghain", "Friedrichshain", &["techno"])));
    }

    #[test]
    fn tags_are_any_of() {
        let filter = VenueFilter::from_query(None, Some("outdoor,rooftop"));
        assert!(filter.matches(&venue("Sisyphos", "Lichtenberg", &["techno", "outdoor"])));
        assert!(!filter.matches(&venue("Tresor", "Mitte", &["techno", "underground"])));
    }

    #[test]
    fn query_values_are_normalized() {
        let filter = VenueFilter::from_query(Some("  "), Some(" Techno ,,techno, HOUSE"));
        assert_eq!(filter.district(), None);
        assert_eq!(filter.tags(), &["techno".to_string(), "house".to_string()]);
    }

    #[test]
    fn ratings_clamp_to_percent_range() {
        let ratings = VenueRatings { music: 140, vibe: -3, crowd: 50, safety: 100 }.clamped();
        assert_eq!(ratings, VenueRatings { music: 100, vibe: 0, crowd: 50, safety: 100 });
    }

    #[test]
    fn bars_use_their_own_axis_labels() {
        assert_eq!(VenueKind::Bar.axis_labels()[0], "quality");
        assert_eq!(VenueKind::Club.axis_labels()[3], "safety");
    }
}
