use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use launch_dash::config::{LogFormat, Settings};
use launch_dash::core::Dashboard;
use launch_dash::routes::{self, handle_query_payload_error, AppState};
use launch_dash::services::Dataset;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Configuration comes first so logging can honour it
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match settings.logging.log_format() {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Plain => subscriber.init(),
    }

    info!("Starting Launch Dash...");

    // Load the launch table; without it there is nothing to serve
    let csv_path = settings.data.csv_path.clone();
    let dataset = match Dataset::load(&csv_path) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Failed to load dataset from {}: {}", csv_path.display(), e);
            std::process::exit(1);
        }
    };

    let bounds = dataset.payload_bounds();
    info!(
        "Loaded {} launch records from {} ({} sites, payload {} - {} kg)",
        dataset.len(),
        csv_path.display(),
        dataset.sites().len(),
        bounds.min,
        bounds.max
    );

    let dashboard = Dashboard::new(Arc::new(dataset));
    let app_state = AppState::new(dashboard, &settings.dashboard);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
