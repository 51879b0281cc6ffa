//! HTTP handlers.

use std::time::Instant;

use actix_web::{get, post, web, HttpResponse, Responder};
use log::{error, info};

use crate::dispatch::dispatch;
use crate::inference::ModelRegistry;
use crate::models::{
    ApiResponse, Disease, KidneyRequest, LiverRequest, ParkinsonRequest, Prediction,
};

#[get("/api/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success("disease prediction API is up"))
}

#[get("/api/model-info")]
async fn model_info(registry: web::Data<ModelRegistry>) -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success(registry.info()))
}

#[post("/api/predict/parkinson")]
async fn predict_parkinson(
    registry: web::Data<ModelRegistry>,
    req: web::Json<ParkinsonRequest>,
) -> impl Responder {
    run_prediction(registry, Disease::Parkinson, req.into_inner().to_row().to_vec()).await
}

#[post("/api/predict/kidney")]
async fn predict_kidney(
    registry: web::Data<ModelRegistry>,
    req: web::Json<KidneyRequest>,
) -> impl Responder {
    run_prediction(registry, Disease::Kidney, req.into_inner().to_row().to_vec()).await
}

#[post("/api/predict/liver")]
async fn predict_liver(
    registry: web::Data<ModelRegistry>,
    req: web::Json<LiverRequest>,
) -> impl Responder {
    run_prediction(registry, Disease::Liver, req.into_inner().to_row().to_vec()).await
}

/// Score one assembled row. Inference is synchronous, so it runs under
/// `web::block` to keep the executor free.
async fn run_prediction(
    registry: web::Data<ModelRegistry>,
    disease: Disease,
    row: Vec<f32>,
) -> HttpResponse {
    let start = Instant::now();

    match web::block(move || dispatch(disease, registry.model(disease), &row)).await {
        Ok(Ok(prediction)) => {
            info!(
                "{} prediction: {} (probability: {:?})",
                disease, prediction.diagnosis, prediction.probability
            );
            let mut response = ApiResponse::success(prediction);
            response.execution_time_ms = Some(start.elapsed().as_millis() as u64);
            HttpResponse::Ok().json(response)
        }
        Ok(Err(e)) => {
            error!("{} prediction failed: {:#}", disease, e);
            let mut response = ApiResponse::<Prediction>::error(&format!("inference failed: {}", e));
            response.execution_time_ms = Some(start.elapsed().as_millis() as u64);
            HttpResponse::InternalServerError().json(response)
        }
        Err(e) => {
            error!("blocking inference task failed: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<Prediction>::error("inference task failed"))
        }
    }
}

/// API route table, shared by the server and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health)
        .service(model_info)
        .service(predict_parkinson)
        .service(predict_kidney)
        .service(predict_liver);
}
