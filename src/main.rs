use std::process::ExitCode;
use std::sync::Arc;

use menu_items_backend::api::build_routes;
use menu_items_backend::app_data::AppData;
use menu_items_backend::config::{connect_database, init_logging, migrate_database, BootstrapSettings};
use menu_items_backend::shutdown::wait_for_shutdown;
use poem::{listener::TcpListener, Server};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Fatal: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = BootstrapSettings::from_env()?;
    tracing::debug!("Bootstrap settings: {:?}", settings);
    settings.log_sources();

    // No retry: an unreachable store at boot is fatal
    let db = connect_database(&settings).await?;
    migrate_database(&db).await?;

    let app_data = Arc::new(AppData::init(db));
    let app = build_routes(app_data.clone());

    let address = settings.server_address();
    tracing::info!("Server running on http://{}", address);
    tracing::info!("Swagger UI available at http://{}/swagger", address);

    Server::new(TcpListener::bind(address))
        .run_with_graceful_shutdown(app, wait_for_shutdown(tokio::signal::ctrl_c()), None)
        .await?;

    app_data.close().await?;
    Ok(())
}
