// src/services/plan_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::PlanRepository,
    models::{
        auth::User,
        plan::{CreatePlanPayload, JoinPlanResponse, Plan, PlanCapacity, PlanMember},
    },
};

#[derive(Clone)]
pub struct PlanService {
    plan_repo: PlanRepository,
    pool: PgPool,
}

impl PlanService {
    pub fn new(plan_repo: PlanRepository, pool: PgPool) -> Self {
        Self { plan_repo, pool }
    }

    pub async fn list_plans(&self, viewer: Option<&User>) -> Result<Vec<Plan>, AppError> {
        let rows = self.plan_repo.list(viewer.map(|u| u.id)).await?;
        Ok(rows.into_iter().map(Plan::from).collect())
    }

    pub async fn get_plan(&self, plan_id: Uuid, viewer: Option<&User>) -> Result<Plan, AppError> {
        self.plan_repo
            .find_by_id(&self.pool, plan_id, viewer.map(|u| u.id))
            .await?
            .map(Plan::from)
            .ok_or(AppError::PlanNotFound)
    }

    pub async fn get_plan_members(&self, plan_id: Uuid) -> Result<Vec<PlanMember>, AppError> {
        // 404 em vez de lista vazia para plano inexistente
        self.get_plan(plan_id, None).await?;
        self.plan_repo.list_members(plan_id).await
    }

    /// Cria o plano e já coloca o criador como primeiro membro.
    pub async fn create_plan(&self, user: &User, payload: &CreatePlanPayload) -> Result<Plan, AppError> {
        let mut tx = self.pool.begin().await?;

        let plan_id = self.plan_repo.create_plan(&mut *tx, user.id, payload).await?;
        self.plan_repo
            .add_member(&mut *tx, plan_id, user.id, &user.display_name, None)
            .await?;
        let row = self
            .plan_repo
            .find_by_id(&mut *tx, plan_id, Some(user.id))
            .await?
            .ok_or(AppError::PlanNotFound)?;

        tx.commit().await?;

        tracing::info!(plan_id = %plan_id, max_members = payload.max_members, "🗓️ Plano criado");
        Ok(Plan::from(row))
    }

    /// Entra no plano. A linha do plano fica travada durante a contagem,
    /// então dois joins simultâneos não passam do limite.
    pub async fn join_plan(
        &self,
        user: &User,
        plan_id: Uuid,
        message: Option<&str>,
    ) -> Result<JoinPlanResponse, AppError> {
        let mut tx = self.pool.begin().await?;

        let max_members = self
            .plan_repo
            .lock_plan(&mut *tx, plan_id)
            .await?
            .ok_or(AppError::PlanNotFound)?;

        if self.plan_repo.is_member(&mut *tx, plan_id, user.id).await? {
            return Err(AppError::AlreadyMember);
        }

        let current = self.plan_repo.count_members(&mut *tx, plan_id).await?;
        let capacity = PlanCapacity::new(current, i64::from(max_members));
        if !capacity.can_join() {
            return Err(AppError::PlanFull);
        }

        let message = message.map(str::trim).filter(|m| !m.is_empty());
        let member = self
            .plan_repo
            .add_member(&mut *tx, plan_id, user.id, &user.display_name, message)
            .await?;

        let row = self
            .plan_repo
            .find_by_id(&mut *tx, plan_id, Some(user.id))
            .await?
            .ok_or(AppError::PlanNotFound)?;

        tx.commit().await?;

        tracing::info!(
            plan_id = %plan_id,
            members = capacity.current + 1,
            max_members,
            "🙋 Novo membro no plano"
        );
        Ok(JoinPlanResponse { member, plan: Plan::from(row) })
    }

    pub async fn leave_plan(&self, user: &User, plan_id: Uuid) -> Result<Plan, AppError> {
        if !self.plan_repo.remove_member(plan_id, user.id).await? {
            // Distingue plano inexistente de "não era membro".
            self.get_plan(plan_id, None).await?;
            return Err(AppError::NotMember);
        }
        self.get_plan(plan_id, Some(user)).await
    }
}
