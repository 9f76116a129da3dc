//! Consultas reais contra o Postgres. Cada teste recebe um banco novo com as
//! migrações (schema + seed de Berlim) aplicadas; precisa de DATABASE_URL.

use sqlx::PgPool;
use uuid::Uuid;

use raven::{
    common::error::AppError,
    db::{FavoriteRepository, UserRepository},
    models::{
        auth::User,
        plan::{CreatePlanPayload, Plan},
        venue::{VenueFilter, VenueKind},
    },
    AppState, Settings,
};

const BERGHAIN: &str = "5b0c2f36-8f0e-4a57-9f1b-000000000001";
const WATERGATE: &str = "5b0c2f36-8f0e-4a57-9f1b-000000000003";
const TRESOR: &str = "5b0c2f36-8f0e-4a57-9f1b-000000000006";

fn state(pool: PgPool) -> AppState {
    let settings = Settings {
        database_url: String::new(),
        jwt_secret: "test-secret".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        database_max_connections: 5,
        jwt_ttl_days: 7,
        vibe_live_window_minutes: 180,
    };
    AppState::from_pool(pool, settings)
}

async fn user(pool: &PgPool, name: &str) -> User {
    UserRepository::new(pool.clone())
        .create_user(pool, &format!("{}@raven.test", name.to_lowercase()), name, "not-a-real-hash")
        .await
        .unwrap()
}

fn id(raw: &str) -> Uuid {
    Uuid::parse_str(raw).unwrap()
}

async fn names(state: &AppState, kind: VenueKind, district: Option<&str>, tags: Option<&str>) -> Vec<String> {
    state
        .venue_service
        .list_venues(kind, &VenueFilter::from_query(district, tags))
        .await
        .unwrap()
        .into_iter()
        .map(|v| v.name)
        .collect()
}

fn plan_payload(max_members: i32) -> CreatePlanPayload {
    serde_json::from_value(serde_json::json!({
        "title": "Techno Tuesday",
        "timeWindow": "23:00-03:00",
        "meetupHint": "Near Warschauer Str.",
        "preciseLocation": "Späti at Revaler Str. 99",
        "maxMembers": max_members
    }))
    .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn unfiltered_listing_returns_every_club_by_name(pool: PgPool) {
    let state = state(pool);
    assert_eq!(
        names(&state, VenueKind::Club, None, None).await,
        ["About Blank", "Berghain", "Ritter Butzke", "Sisyphos", "Tresor", "Watergate"]
    );
    assert_eq!(names(&state, VenueKind::Bar, None, None).await.len(), 5);
}

#[sqlx::test(migrations = "./migrations")]
async fn district_and_tags_combine_with_and(pool: PgPool) {
    let state = state(pool);

    assert_eq!(
        names(&state, VenueKind::Club, Some("Kreuzberg"), Some("techno")).await,
        ["Ritter Butzke", "Watergate"]
    );
    // Kreuzberg não tem club com outdoor
    assert!(names(&state, VenueKind::Club, Some("Kreuzberg"), Some("outdoor")).await.is_empty());
    assert_eq!(
        names(&state, VenueKind::Bar, Some("Mitte"), None).await,
        ["Hackescher Hof", "Zur Letzten Instanz"]
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn any_selected_tag_matches_case_insensitively(pool: PgPool) {
    let state = state(pool);

    assert_eq!(
        names(&state, VenueKind::Club, None, Some("OUTDOOR, Underground")).await,
        ["About Blank", "Sisyphos", "Tresor"]
    );
    assert_eq!(
        names(&state, VenueKind::Bar, None, Some("rooftop")).await,
        ["Klunkerkranich", "Monkey Bar"]
    );
    assert!(names(&state, VenueKind::Club, Some("Wedding"), None).await.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn batched_favorite_lookup_returns_only_favorited_ids(pool: PgPool) {
    let state = state(pool.clone());
    let owner = user(&pool, "Nachteule").await;
    let other = user(&pool, "Fruehaufsteher").await;

    state.favorite_service.add_favorite(&owner, id(BERGHAIN)).await.unwrap();
    state.favorite_service.add_favorite(&owner, id(WATERGATE)).await.unwrap();
    // adicionar de novo não é erro
    state.favorite_service.add_favorite(&owner, id(WATERGATE)).await.unwrap();
    state.favorite_service.add_favorite(&other, id(TRESOR)).await.unwrap();

    let repo = FavoriteRepository::new(pool.clone(), 180);
    let mut found = repo
        .favorited_among(owner.id, &[id(BERGHAIN), id(WATERGATE), id(TRESOR)])
        .await
        .unwrap();
    found.sort();
    let mut expected = vec![id(BERGHAIN), id(WATERGATE)];
    expected.sort();
    assert_eq!(found, expected);

    let requested = vec![BERGHAIN.to_string(), TRESOR.to_string(), "nope".to_string()];
    let statuses = state
        .favorite_service
        .favorite_statuses(Some(&owner), &requested)
        .await
        .unwrap();
    assert_eq!(statuses.len(), 3);
    assert!(statuses[BERGHAIN]);
    assert!(!statuses[TRESOR]);
    assert!(!statuses["nope"]);

    let anonymous = state.favorite_service.favorite_statuses(None, &requested).await.unwrap();
    assert!(anonymous.values().all(|v| !v));
}

#[sqlx::test(migrations = "./migrations")]
async fn toggling_and_unknown_venues(pool: PgPool) {
    let state = state(pool.clone());
    let owner = user(&pool, "Nachteule").await;

    let on = state.favorite_service.toggle_favorite(&owner, id(TRESOR)).await.unwrap();
    assert!(on.is_favorite);
    let off = state.favorite_service.toggle_favorite(&owner, id(TRESOR)).await.unwrap();
    assert!(!off.is_favorite);

    let missing = state.favorite_service.add_favorite(&owner, Uuid::new_v4()).await;
    assert!(matches!(missing, Err(AppError::VenueNotFound)));
}

#[sqlx::test(migrations = "./migrations")]
async fn join_is_rejected_once_the_plan_is_full(pool: PgPool) {
    let state = state(pool.clone());
    let creator = user(&pool, "Creator").await;
    let guest = user(&pool, "Guest").await;
    let late = user(&pool, "Late").await;

    let plan = state.plan_service.create_plan(&creator, &plan_payload(2)).await.unwrap();
    assert_eq!(plan.current_members, 1);
    assert!(plan.precise_location.is_some());

    let outsider_view = state.plan_service.get_plan(plan.id, Some(&guest)).await.unwrap();
    assert!(outsider_view.precise_location.is_none());

    let joined = state
        .plan_service
        .join_plan(&guest, plan.id, Some("  see you there "))
        .await
        .unwrap();
    assert_eq!(joined.member.message.as_deref(), Some("see you there"));
    assert!(joined.plan.is_full);
    assert_eq!(joined.plan.spots_left, 0);

    let rejected = state.plan_service.join_plan(&late, plan.id, None).await;
    assert!(matches!(rejected, Err(AppError::PlanFull)));

    // membro tentando de novo num plano lotado: AlreadyMember vem antes de PlanFull
    let again = state.plan_service.join_plan(&guest, plan.id, None).await;
    assert!(matches!(again, Err(AppError::AlreadyMember)));

    let members = state.plan_service.get_plan_members(plan.id).await.unwrap();
    assert_eq!(members.len(), 2);

    // lotado: o local exato aparece até para quem está de fora
    let full_view: Plan = state.plan_service.get_plan(plan.id, Some(&late)).await.unwrap();
    assert!(full_view.precise_location.is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn concurrent_joins_never_exceed_capacity(pool: PgPool) {
    let state = state(pool.clone());
    let creator = user(&pool, "Creator").await;
    let plan_id = state.plan_service.create_plan(&creator, &plan_payload(3)).await.unwrap().id;

    let mut handles = Vec::new();
    for i in 0..6 {
        let guest = user(&pool, &format!("Guest{i}")).await;
        let service = state.plan_service.clone();
        handles.push(tokio::spawn(async move {
            service.join_plan(&guest, plan_id, None).await
        }));
    }

    let mut accepted = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => accepted += 1,
            Err(AppError::PlanFull) => {}
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    assert_eq!(accepted, 2);
    let plan = state.plan_service.get_plan(plan_id, None).await.unwrap();
    assert_eq!(plan.current_members, 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn unknown_plan_and_leaving(pool: PgPool) {
    let state = state(pool.clone());
    let creator = user(&pool, "Creator").await;
    let guest = user(&pool, "Guest").await;

    let missing = state.plan_service.join_plan(&guest, Uuid::new_v4(), None).await;
    assert!(matches!(missing, Err(AppError::PlanNotFound)));

    let plan = state.plan_service.create_plan(&creator, &plan_payload(4)).await.unwrap();
    let not_member = state.plan_service.leave_plan(&guest, plan.id).await;
    assert!(matches!(not_member, Err(AppError::NotMember)));

    state.plan_service.join_plan(&guest, plan.id, None).await.unwrap();
    let after = state.plan_service.leave_plan(&guest, plan.id).await.unwrap();
    assert_eq!(after.current_members, 1);
    assert!(after.precise_location.is_none());
}
