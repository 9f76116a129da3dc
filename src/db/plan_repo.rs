// src/db/plan_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::plan::{CreatePlanPayload, PlanMember, PlanRow},
};

// `$1` é o usuário que está olhando (pode ser NULL).
const PLAN_COLUMNS: &str = r#"
    p.id, p.title, p.description, p.tags, p.languages, p.time_window,
    p.meetup_hint, p.precise_location, p.max_members, p.is_lgbtq_friendly,
    p.venue_id, p.created_by, p.created_at,
    (SELECT COUNT(*) FROM plan_members m WHERE m.plan_id = p.id) AS member_count,
    EXISTS (
        SELECT 1 FROM plan_members m WHERE m.plan_id = p.id AND m.user_id = $1
    ) AS is_member
"#;

const MEMBER_COLUMNS: &str = "id, plan_id, user_id, name, message, joined_at";

#[derive(Clone)]
pub struct PlanRepository {
    pool: PgPool,
}

impl PlanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Mais antigos primeiro.
    pub async fn list(&self, viewer: Option<Uuid>) -> Result<Vec<PlanRow>, AppError> {
        let sql = format!("SELECT {PLAN_COLUMNS} FROM plans p ORDER BY p.created_at ASC");
        let plans = sqlx::query_as::<_, PlanRow>(&sql)
            .bind(viewer)
            .fetch_all(&self.pool)
            .await?;
        Ok(plans)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        plan_id: Uuid,
        viewer: Option<Uuid>,
    ) -> Result<Option<PlanRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("SELECT {PLAN_COLUMNS} FROM plans p WHERE p.id = $2");
        let plan = sqlx::query_as::<_, PlanRow>(&sql)
            .bind(viewer)
            .bind(plan_id)
            .fetch_optional(executor)
            .await?;
        Ok(plan)
    }

    /// Trava a linha do plano até o fim da transação; devolve `max_members`.
    pub async fn lock_plan<'e, E>(&self, executor: E, plan_id: Uuid) -> Result<Option<i32>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let max: Option<i32> = sqlx::query_scalar("SELECT max_members FROM plans WHERE id = $1 FOR UPDATE")
            .bind(plan_id)
            .fetch_optional(executor)
            .await?;
        Ok(max)
    }

    pub async fn count_members<'e, E>(&self, executor: E, plan_id: Uuid) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM plan_members WHERE plan_id = $1")
            .bind(plan_id)
            .fetch_one(executor)
            .await?;
        Ok(count)
    }

    pub async fn is_member<'e, E>(&self, executor: E, plan_id: Uuid, user_id: Uuid) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM plan_members WHERE plan_id = $1 AND user_id = $2)",
        )
        .bind(plan_id)
        .bind(user_id)
        .fetch_one(executor)
        .await?;
        Ok(exists)
    }

    pub async fn list_members(&self, plan_id: Uuid) -> Result<Vec<PlanMember>, AppError> {
        let sql = format!("SELECT {MEMBER_COLUMNS} FROM plan_members WHERE plan_id = $1 ORDER BY joined_at ASC");
        let members = sqlx::query_as::<_, PlanMember>(&sql)
            .bind(plan_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(members)
    }

    pub async fn create_plan<'e, E>(
        &self,
        executor: E,
        created_by: Uuid,
        payload: &CreatePlanPayload,
    ) -> Result<Uuid, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO plans (
                title, description, tags, languages, time_window, meetup_hint,
                precise_location, max_members, is_lgbtq_friendly, venue_id, created_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(payload.title.trim())
        .bind(payload.description.trim())
        .bind(&payload.tags)
        .bind(&payload.languages)
        .bind(payload.time_window.trim())
        .bind(payload.meetup_hint.trim())
        .bind(payload.precise_location.as_deref())
        .bind(payload.max_members)
        .bind(payload.is_lgbtq_friendly)
        .bind(payload.venue_id)
        .bind(created_by)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_foreign_key_violation() {
                    return AppError::VenueNotFound;
                }
            }
            e.into()
        })?;
        Ok(id)
    }

    pub async fn add_member<'e, E>(
        &self,
        executor: E,
        plan_id: Uuid,
        user_id: Uuid,
        name: &str,
        message: Option<&str>,
    ) -> Result<PlanMember, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            INSERT INTO plan_members (plan_id, user_id, name, message)
            VALUES ($1, $2, $3, $4)
            RETURNING {MEMBER_COLUMNS}
            "#
        );
        sqlx::query_as::<_, PlanMember>(&sql)
            .bind(plan_id)
            .bind(user_id)
            .bind(name)
            .bind(message)
            .fetch_one(executor)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return AppError::AlreadyMember;
                    }
                }
                e.into()
            })
    }

    pub async fn remove_member(&self, plan_id: Uuid, user_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM plan_members WHERE plan_id = $1 AND user_id = $2")
            .bind(plan_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
