//! Single binary web server: league table page at /, static client from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:4000 by default.
//! Override with env: HOST, PORT, DATA_FILE (path or `:memory:`), BACKEND_URL (for the client).

use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use basketball_league_web::{
    api::{self, ClientSettings},
    InMemoryStore, JsonFileStore, League, ServerConfig,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();

    let league = if config.uses_memory_store() {
        log::warn!("Using in-memory league store; data is lost on exit");
        League::new(InMemoryStore::new())
    } else {
        log::info!("League data file: {}", config.data_file);
        League::new(JsonFileStore::new(&config.data_file))
    };

    // Fail at startup rather than on the first request if the document is unreadable.
    match league.load_all() {
        Ok(data) => log::info!(
            "Loaded {} team(s) and {} match(es)",
            data.teams.len(),
            data.matches.len()
        ),
        Err(e) => {
            log::error!("Cannot load league data: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e));
        }
    }

    let league = Data::new(league);
    let settings = Data::new(ClientSettings {
        backend_url: config.backend_url.clone(),
    });

    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(league.clone())
            .app_data(settings.clone())
            .configure(api::configure)
    })
    .bind(bind)?
    .run()
    .await
}
