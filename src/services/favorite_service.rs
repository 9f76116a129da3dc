// src/services/favorite_service.rs

use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{FavoriteRepository, VenueRepository},
    models::{
        auth::User,
        favorite::{favorite_status_map, parse_venue_ids, FavoriteState, FavoriteVenue},
        venue::{VenueFilter, VenueKind},
    },
};

#[derive(Clone)]
pub struct FavoriteService {
    favorite_repo: FavoriteRepository,
    venue_repo: VenueRepository,
}

impl FavoriteService {
    pub fn new(favorite_repo: FavoriteRepository, venue_repo: VenueRepository) -> Self {
        Self { favorite_repo, venue_repo }
    }

    pub async fn is_favorite(&self, user: &User, venue_id: Uuid) -> Result<bool, AppError> {
        self.favorite_repo.is_favorite(user.id, venue_id).await
    }

    pub async fn add_favorite(&self, user: &User, venue_id: Uuid) -> Result<FavoriteState, AppError> {
        if !self.venue_repo.exists(venue_id).await? {
            return Err(AppError::VenueNotFound);
        }
        self.favorite_repo.add(user.id, venue_id).await?;
        Ok(FavoriteState { venue_id, is_favorite: true })
    }

    pub async fn remove_favorite(&self, user: &User, venue_id: Uuid) -> Result<FavoriteState, AppError> {
        let removed = self.favorite_repo.remove(user.id, venue_id).await?;
        if !removed {
            tracing::debug!(venue_id = %venue_id, "Favorito já não existia");
        }
        Ok(FavoriteState { venue_id, is_favorite: false })
    }

    pub async fn toggle_favorite(&self, user: &User, venue_id: Uuid) -> Result<FavoriteState, AppError> {
        if self.favorite_repo.is_favorite(user.id, venue_id).await? {
            self.remove_favorite(user, venue_id).await
        } else {
            self.add_favorite(user, venue_id).await
        }
    }

    /// Exatamente um booleano por ID pedido; sem sessão, tudo `false`.
    pub async fn favorite_statuses(
        &self,
        viewer: Option<&User>,
        requested: &[String],
    ) -> Result<HashMap<String, bool>, AppError> {
        let favorited = match viewer {
            Some(user) => {
                let ids = parse_venue_ids(requested);
                self.favorite_repo.favorited_among(user.id, &ids).await?
            }
            None => Vec::new(),
        };
        Ok(favorite_status_map(requested, &favorited))
    }

    pub async fn list_favorites(
        &self,
        user: &User,
        kind: VenueKind,
        filter: &VenueFilter,
    ) -> Result<Vec<FavoriteVenue>, AppError> {
        let favorites = self.favorite_repo.list_for_user(user.id, kind).await?;
        Ok(favorites
            .into_iter()
            .filter(|favorite| filter.matches(&favorite.venue))
            .collect())
    }
}
