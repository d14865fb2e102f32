mod api;
mod config;
mod database;
mod models;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();

    log::info!("🚀 Starting Coffee Service...");
    log::info!("📊 Database: {}", config.database_name);

    // Collection handles exist before the listener does; the driver connects lazily
    let db = database::MongoDB::new(&config.mongodb_uri, &config.database_name)
        .await
        .map_err(|e| {
            log::error!("❌ Invalid MongoDB connection string: {}", e);
            std::io::Error::other(e.to_string())
        })?;

    // An unreachable database is not fatal: requests fail individually with a 500
    match db.ping().await {
        Ok(()) => log::info!("✅ Connected to MongoDB!"),
        Err(e) => log::error!("❌ Error connecting to MongoDB: {}", e),
    }

    let collections = web::Data::new(db.collections());

    let server = HttpServer::new(move || {
        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(collections.clone())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            .configure(api::configure)
    })
    .bind((config.host.as_str(), config.port))?;

    log::info!("🌐 Server is running on port {}", config.port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", config.host, config.port);

    server.run().await
}
