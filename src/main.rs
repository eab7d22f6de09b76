use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use fit_checker::config::{LoggingSettings, Settings};
use fit_checker::core::FitChecker;
use fit_checker::models::BrandCatalog;
use fit_checker::routes::{self, fit::AppState};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Fit Checker service...");

    let params = settings.fit.to_parameters().map_err(|e| {
        error!("Invalid fit settings: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    // Load the size catalog once; it is shared read-only by all workers
    let catalog = match &settings.catalog.path {
        Some(path) => BrandCatalog::load(path),
        None => BrandCatalog::builtin(),
    }
    .map_err(|e| {
        error!("Failed to load size catalog: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;

    info!(
        "Size catalog loaded ({} brands, source: {})",
        catalog.brand_count(),
        settings.catalog.path.as_deref().unwrap_or("builtin")
    );

    let checker = FitChecker::new(Arc::new(catalog), params);

    info!("Fit checker initialized with parameters: {:?}", params);

    let app_state = AppState { checker };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
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
