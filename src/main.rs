use actix_web::{middleware::Logger, web, App, HttpServer};
use chrono::Local;
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use theatre_backend::{
    config::Config,
    database::{create_pool, run_migrations, seed_database},
    handlers,
    middlewares::create_cors,
    services::*,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    let config = Config::from_toml().expect("Failed to load configuration file");

    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    if config.database.seed {
        seed_database(&pool)
            .await
            .expect("Failed to seed database");
    }

    let author_service = AuthorService::new(pool.clone());
    let genre_service = GenreService::new(pool.clone());
    let hall_service = HallService::new(pool.clone());
    let seat_service = SeatService::new(pool.clone());
    let performance_service = PerformanceService::new(pool.clone());
    let ticket_service = TicketService::new(pool.clone());

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(author_service.clone()))
            .app_data(web::Data::new(genre_service.clone()))
            .app_data(web::Data::new(hall_service.clone()))
            .app_data(web::Data::new(seat_service.clone()))
            .app_data(web::Data::new(performance_service.clone()))
            .app_data(web::Data::new(ticket_service.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api/v1")
                    .configure(handlers::author_config)
                    .configure(handlers::genre_config)
                    .configure(handlers::hall_config)
                    .configure(handlers::performance_config)
                    .configure(handlers::seat_config)
                    .configure(handlers::ticket_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
