use actix_web::{web, App, HttpServer};
use backend::config::GameConfig;
use backend::middleware::cors::cors_middleware;
use backend::routes;
use backend::services::game_flow::GameFlowService;
use backend::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    backend::telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let game_config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to read game configuration: {e}");
            std::process::exit(1);
        }
    };

    println!("Starting Spades backend on http://{}:{}", host, port);

    let flow = GameFlowService::new(game_config);
    let data = web::Data::new(AppState::new(flow));

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
