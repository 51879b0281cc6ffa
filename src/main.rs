pub mod dispatch;
pub mod inference;
pub mod models;
pub mod routes;

use std::path::Path;

use actix_cors::Cors;
use actix_files::{Files, NamedFile};
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Responder};
use log::{error, info};

use inference::ModelRegistry;
use models::ApiResponse;

async fn index(req: HttpRequest) -> impl Responder {
    match NamedFile::open_async("./static/index.html").await {
        Ok(file) => file.into_response(&req),
        Err(_) => HttpResponse::InternalServerError().body("failed to load interface"),
    }
}

async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ApiResponse::<String>::error("endpoint not found"))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    info!("🩺 Starting Multiple Disease Prediction API");

    let model_dir = std::env::var("MODEL_DIR").unwrap_or_else(|_| "./models".to_string());
    let registry = match ModelRegistry::load(Path::new(&model_dir)) {
        Ok(registry) => {
            info!("✅ Model registry loaded from {}", model_dir);
            registry
        }
        Err(e) => {
            // No partial operation: a disease whose model failed to load
            // cannot be served, so the process stops here.
            error!("❌ Failed to load model registry: {:#}", e);
            std::process::exit(1);
        }
    };
    let registry = web::Data::new(registry);

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let workers = std::env::var("WORKERS")
        .ok()
        .and_then(|w| w.parse().ok())
        .unwrap_or_else(num_cpus::get);

    let bind_address = format!("{}:{}", host, port);

    info!("🌐 Server listening on: http://{}", bind_address);
    info!("👷 Workers: {}", workers);
    info!("📊 Interface available at: http://{}/", bind_address);
    info!("🔧 API endpoints:");
    info!("   GET  /api/health             - liveness check");
    info!("   GET  /api/model-info         - loaded model schemas");
    info!("   POST /api/predict/parkinson  - Parkinson prediction");
    info!("   POST /api/predict/kidney     - kidney disease prediction");
    info!("   POST /api/predict/liver      - liver disease prediction");

    let allowed_origin = format!("http://{}", bind_address);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_origin("http://localhost:8080")
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .wrap(cors)
            .app_data(registry.clone())
            .app_data(web::JsonConfig::default().limit(256 * 1024))
            .configure(routes::configure)
            .route("/", web::get().to(index))
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .default_service(web::route().to(not_found))
    })
    .workers(workers)
    .bind(&bind_address)?
    .run()
    .await
}
