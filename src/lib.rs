pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod upstream;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_files::Files;
    use actix_web::{App, HttpServer, middleware, web};
    use tera::Tera;

    use crate::models::config::ServerConfig;
    use crate::routes::api::api_proxy;
    use crate::routes::main::{export_csv, search, show_index};
    use crate::upstream::HttpMarketsApi;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // The credential is checked here, once, before any request is served.
        let api = HttpMarketsApi::new(&server_config.upstream)
            .map_err(|e| std::io::Error::other(format!("Failed to build upstream client: {e}")))?;

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Serving market search on {}:{}, upstream {}",
            bind_address.0,
            bind_address.1,
            server_config.upstream.base_url
        );

        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", "./assets"))
                .service(web::scope("/api").wrap(Cors::permissive()).service(api_proxy))
                .service(show_index)
                .service(search)
                .service(export_csv)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(api.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
