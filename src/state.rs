use sqlx::PgPool;

use crate::config::database::{DatabaseConfig, init_db_pool};
use crate::config::jwt::JwtConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        db: init_db_pool(&DatabaseConfig::from_env()).await,
        jwt_config: JwtConfig::from_env(),
    }
}
