// src/handlers/plans.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::{AuthenticatedUser, MaybeUser},
    models::plan::{CreatePlanPayload, JoinPlanPayload, JoinPlanResponse, Plan, PlanMember},
};

// GET /api/plans
#[utoipa::path(
    get,
    path = "/api/plans",
    tag = "Plans",
    responses(
        (status = 200, description = "Planos, mais antigos primeiro", body = Vec<Plan>)
    ),
    security(
        (),
        ("api_jwt" = [])
    )
)]
pub async fn list_plans(
    State(app_state): State<AppState>,
    viewer: MaybeUser,
) -> Result<impl IntoResponse, AppError> {
    let plans = app_state.plan_service.list_plans(viewer.user()).await?;
    Ok((StatusCode::OK, Json(plans)))
}

// POST /api/plans
#[utoipa::path(
    post,
    path = "/api/plans",
    tag = "Plans",
    request_body = CreatePlanPayload,
    responses(
        (status = 201, description = "Plano criado; o criador já é membro", body = Plan),
        (status = 400, description = "Dados inválidos"),
        (status = 401, description = "Não autorizado"),
        (status = 404, description = "Local vinculado não existe")
    ),
    security(
        ("api_jwt" = [])
    )
)]
pub async fn create_plan(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreatePlanPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let plan = app_state.plan_service.create_plan(&user, &payload).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

// GET /api/plans/{id}
#[utoipa::path(
    get,
    path = "/api/plans/{id}",
    tag = "Plans",
    params(
        ("id" = Uuid, Path, description = "ID do plano")
    ),
    responses(
        (status = 200, description = "Plano; local exato só para membros ou plano lotado", body = Plan),
        (status = 404, description = "Plano não encontrado")
    ),
    security(
        (),
        ("api_jwt" = [])
    )
)]
pub async fn get_plan(
    State(app_state): State<AppState>,
    viewer: MaybeUser,
    Path(plan_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let plan = app_state.plan_service.get_plan(plan_id, viewer.user()).await?;
    Ok((StatusCode::OK, Json(plan)))
}

// GET /api/plans/{id}/members
#[utoipa::path(
    get,
    path = "/api/plans/{id}/members",
    tag = "Plans",
    params(
        ("id" = Uuid, Path, description = "ID do plano")
    ),
    responses(
        (status = 200, description = "Membros em ordem de entrada", body = Vec<PlanMember>),
        (status = 404, description = "Plano não encontrado")
    )
)]
pub async fn list_members(
    State(app_state): State<AppState>,
    Path(plan_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let members = app_state.plan_service.get_plan_members(plan_id).await?;
    Ok((StatusCode::OK, Json(members)))
}

// POST /api/plans/{id}/join
#[utoipa::path(
    post,
    path = "/api/plans/{id}/join",
    tag = "Plans",
    params(
        ("id" = Uuid, Path, description = "ID do plano")
    ),
    request_body(content = JoinPlanPayload, description = "Mensagem opcional para o grupo"),
    responses(
        (status = 201, description = "Entrou no plano", body = JoinPlanResponse),
        (status = 401, description = "Não autorizado"),
        (status = 404, description = "Plano não encontrado"),
        (status = 409, description = "Plano lotado ou usuário já é membro")
    ),
    security(
        ("api_jwt" = [])
    )
)]
pub async fn join_plan(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(plan_id): Path<Uuid>,
    payload: Option<Json<JoinPlanPayload>>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.unwrap_or_default();
    payload.validate()?;

    let joined = app_state
        .plan_service
        .join_plan(&user, plan_id, payload.message.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(joined)))
}

// DELETE /api/plans/{id}/join
#[utoipa::path(
    delete,
    path = "/api/plans/{id}/join",
    tag = "Plans",
    params(
        ("id" = Uuid, Path, description = "ID do plano")
    ),
    responses(
        (status = 200, description = "Saiu do plano", body = Plan),
        (status = 401, description = "Não autorizado"),
        (status = 404, description = "Plano não encontrado ou usuário não é membro")
    ),
    security(
        ("api_jwt" = [])
    )
)]
pub async fn leave_plan(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(plan_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let plan = app_state.plan_service.leave_plan(&user, plan_id).await?;
    Ok((StatusCode::OK, Json(plan)))
}
