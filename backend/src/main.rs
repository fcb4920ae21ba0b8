use backend::{build_rocket, config::GatewayConfig, routes::AppState};
use shuttle_runtime::CustomError;
use tracing::info;

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🗳️ Starting emoji vote gateway");

    let config = GatewayConfig::from_lookup(|key| secret_store.get(key))
        .map_err(CustomError::new)?;
    let app_state = AppState::with_config(&config);

    info!("📋 Catalog loaded with {} emoji", app_state.catalog.len());

    Ok(build_rocket(app_state).into())
}
