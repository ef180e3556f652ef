use actix_cors::Cors;
use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use portfolio_api::{
    db::postgres::{create_pool, run_migrations},
    graceful_shutdown::shutdown_signal,
    routes::configure_routes,
    settings::AppConfig,
    AppState,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        }
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = create_pool(&config.database_url)
        .await
        .expect("Failed to create database connection pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let app_state = web::Data::new(AppState::new(pool));

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let cors_origins = config.cors_origins();

    let server = HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600);

        for origin in &cors_origins {
            cors = if origin == "*" {
                cors.allow_any_origin()
            } else {
                cors.allowed_origin(origin)
            };
        }

        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .wrap(cors)
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}
