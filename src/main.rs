use weather_history::{app, config::AppConfig, db, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "weather_history=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;

    // No traffic is accepted until the store is reachable and migrated.
    let db = tokio::select! {
        res = db::bootstrap(&config) => res?,
        () = app::shutdown_signal() => {
            tracing::info!("shutdown requested while connecting to database");
            return Ok(());
        }
    };

    let (host, port) = (config.host.clone(), config.port);
    let app_state = AppState::init(config, db)?;
    let app = app::build_app(app_state);

    app::serve(app, &host, port).await
}
