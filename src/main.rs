use actix_web::HttpServer;
use env_logger::Env;
use taskhub::{build_app, AppServices, Config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| {
        log::error!("Failed to load configuration: {}", e);
        std::io::Error::from(e)
    })?;
    let services = AppServices::register();

    log::info!(
        "Starting TaskHub server at {} ({:?})",
        config.server_url(),
        config.environment
    );
    if config.environment.is_development() {
        log::info!("API docs at {}{}", config.server_url(), taskhub::docs::UI_PATH);
    }

    let bind_addr = (config.server_host.clone(), config.server_port);
    HttpServer::new(move || build_app(&config, &services))
        .bind(bind_addr)?
        .run()
        .await
}
