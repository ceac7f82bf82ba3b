use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::DashboardStats;

pub struct DashboardService;

impl DashboardService {
    /// Full-table counts; read-only and unpaginated by design.
    #[instrument(skip(db))]
    pub async fn stats(db: &PgPool) -> Result<DashboardStats, AppError> {
        let total_passengers = count(db, "SELECT COUNT(*) FROM passengers").await?;
        let total_drivers = count(db, "SELECT COUNT(*) FROM drivers").await?;
        let total_rides = count(db, "SELECT COUNT(*) FROM rides").await?;
        let total_admins = count(db, "SELECT COUNT(*) FROM admins").await?;
        let today_rides = count(
            db,
            "SELECT COUNT(*) FROM rides WHERE started_at::date = CURRENT_DATE",
        )
        .await?;
        let active_drivers = count(
            db,
            "SELECT COUNT(*) FROM drivers WHERE license_status = 'active'",
        )
        .await?;

        Ok(DashboardStats {
            total_passengers,
            total_drivers,
            total_rides,
            total_admins,
            today_rides,
            active_drivers,
        })
    }
}

async fn count(db: &PgPool, sql: &str) -> Result<i64, AppError> {
    Ok(sqlx::query_scalar::<_, i64>(sql).fetch_one(db).await?)
}
