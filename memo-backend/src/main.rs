//! Memo Service: in-memory memo store behind a small JSON API, plus the
//! static front-end.
//!
//! Default: http://127.0.0.1:8000/

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod static_files;
mod store;
mod validation;

use config::Config;
use store::MemoStore;

pub struct AppState {
    pub store: Arc<MemoStore>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    if !config.static_dir.is_dir() {
        log::warn!(
            "Static directory {} not found; front-end requests will return 404",
            config.static_dir.display()
        );
    }

    // Empty on every start
    let store = Arc::new(MemoStore::new());

    log::info!("Serving static assets from {}", config.static_dir.display());
    log::info!("Starting memo server on http://{}:{}", config.host, config.port);

    let static_dir = config.static_dir.clone();

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                store: Arc::clone(&store),
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::memos::config)
            .configure(|cfg| static_files::config(cfg, &static_dir))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
