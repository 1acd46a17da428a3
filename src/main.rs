use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pms_core::{CoreConfig, RecordStore};

/// Main entry point for the PMS application
///
/// Starts the REST server with open read-only access to patient records,
/// including OpenAPI documentation under `/swagger-ui`.
///
/// # Environment Variables
/// - `PMS_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `PATIENT_DATA_FILE`: Path of the patient data file (default: "patients.json")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If server startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pms_core=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("pms_run=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("PMS_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let cfg = Arc::new(CoreConfig::from_env_value(
        std::env::var("PATIENT_DATA_FILE").ok(),
    ));

    if !cfg.patient_data_file().is_file() {
        // The store reads the file per request, so this is survivable; flag it early anyway.
        tracing::warn!(
            "patient data file {} not found; requests will report the store unavailable",
            cfg.patient_data_file().display()
        );
    }

    tracing::info!("++ Starting PMS REST on {}", addr);
    tracing::info!(
        "++ Serving patient records from {}",
        cfg.patient_data_file().display()
    );

    let store = RecordStore::new(cfg);
    let app = api_rest::router(store).layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
