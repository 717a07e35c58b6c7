use std::env;

use dotenvy::dotenv;

use market_search::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let server_config = ServerConfig::load(&app_env).map_err(|e| {
        log::error!("Failed to load configuration: {e}");
        std::io::Error::other(format!("Failed to load configuration: {e}"))
    })?;

    market_search::run(server_config).await
}
