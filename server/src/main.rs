use std::env;
use std::path::Path;
use std::sync::Arc;

use log::info;
use tokio::{net::TcpListener, signal};

mod error;
mod routes;
mod state;

use state::AppState;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "5000";
const DEFAULT_MODEL: &str = "data/temperature_profits_model.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let model_path = env::var("MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
    let state = Arc::new(AppState::from_artifact(Path::new(&model_path)));

    let addr = format!(
        "{}:{}",
        env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
        env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string()),
    );

    let listener = TcpListener::bind(&addr).await?;
    info!("listening at {addr}");

    let app = routes::router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = signal::ctrl_c().await;
            info!("received SIGTERM, shutting down");
        })
        .await?;

    Ok(())
}
