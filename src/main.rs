//! trafficmon HTTP Server
//!
//! Usage: `trafficmon [CONFIG_FILE]`

#[cfg(feature = "http-server")]
use trafficmon::{Config, Result};

#[cfg(feature = "http-server")]
#[actix_web::main]
async fn main() -> Result<()> {
    use std::sync::Arc;

    use actix_cors::Cors;
    use actix_web::middleware::{Condition, Logger};
    use actix_web::{web, App, HttpServer};
    use trafficmon::api::{configure_assets, configure_routes, ApiServerState};
    use trafficmon::ModelStore;

    trafficmon::init()?;

    log::info!("Starting traffic monitoring API...");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading configuration from {}", path);
            Config::from_file(&path)?
        }
        None => Config::default(),
    };

    let model_store = Arc::new(ModelStore::new(&config.storage.model_dir)?);
    let loaded = model_store.load_all().await;
    log::info!("Models loaded at startup: {:?}", loaded);

    let api_state = ApiServerState::new(model_store);

    let host = config.server.host.clone();
    let port = config.server.port;
    let workers = config.server.workers.max(1);
    let cors_enabled = config.server.cors_enabled;
    let static_dir = config.storage.static_dir.clone();

    log::info!("Server will listen on {}:{}", host, port);

    HttpServer::new(move || {
        let static_dir = static_dir.clone();
        App::new()
            .wrap(Condition::new(cors_enabled, Cors::permissive()))
            .wrap(Logger::default())
            .app_data(web::Data::new(api_state.clone()))
            .configure(configure_routes)
            .configure(move |cfg| configure_assets(&static_dir, cfg))
    })
    .workers(workers)
    .bind((host.as_str(), port))?
    .run()
    .await?;

    log::info!("Server stopped.");

    Ok(())
}

#[cfg(not(feature = "http-server"))]
fn main() {
    eprintln!("HTTP server feature is not enabled.");
    eprintln!("Please compile with: cargo build --features http-server");
    std::process::exit(1);
}
