use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use ridedesk::cli::{Cli, Command};
use ridedesk::config::database::{DatabaseConfig, init_db_pool};
use ridedesk::config::server::ServerConfig;
use ridedesk::router::init_router;
use ridedesk::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    if let Some(Command::CreateAdmin(args)) = cli.command {
        let pool = init_db_pool(&DatabaseConfig::from_env()).await;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run database migrations");

        ridedesk::cli::handle_create_admin(&pool, args).await;
        return;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = init_app_state().await;

    sqlx::migrate!("./migrations")
        .run(&state.db)
        .await
        .expect("Failed to run database migrations");

    let server_config = ServerConfig::from_env();
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", server_config.port))
        .await
        .unwrap();
    println!(
        "🚀 Server running on http://localhost:{}",
        server_config.port
    );
    axum::serve(listener, app).await.unwrap();
}
