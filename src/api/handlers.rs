//! API request handlers

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use log::{error, info, warn};

use crate::api::response::{MessageResponse, ResultsResponse, StatusResponse};
use crate::api::server::ApiServerState;
use crate::api::upload::read_form;
use crate::error::{Error, Result};
use crate::model::ModelKind;
use crate::prediction::{
    predict_csv, predict_locations, sample_results, CsvTable, PredictionRequest, PredictionResult,
};

/// 配置所有API路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected JSON body: {}", err);
        Error::validation(format!("Invalid request body: {}", err)).into()
    }))
    .route("/", web::get().to(status))
    .route("/upload-model", web::post().to(upload_model))
    .route("/upload-csv", web::post().to(upload_csv))
    .route("/predict", web::post().to(predict))
    .route("/sample-predict", web::post().to(sample_predict));
}

/// API status and loaded model identifiers
async fn status(state: web::Data<ApiServerState>) -> HttpResponse {
    let models_loaded = state
        .model_store
        .loaded_kinds()
        .await
        .into_iter()
        .map(|kind| kind.to_string())
        .collect();

    HttpResponse::Ok().json(StatusResponse {
        status: "API is running".to_string(),
        models_loaded,
    })
}

/// Replace one model artefact and reload it
async fn upload_model(state: web::Data<ApiServerState>, payload: Multipart) -> Result<HttpResponse> {
    let form = read_form(payload).await?;

    let model_type = form
        .get("model_type")
        .ok_or_else(|| Error::validation("model_type is required"))?
        .text()?;
    let kind: ModelKind = model_type.parse().map_err(|e: Error| {
        warn!("Upload rejected: {}", e);
        e
    })?;
    let model_file = form
        .get("model_file")
        .ok_or_else(|| Error::validation("model_file is required"))?;

    state
        .model_store
        .replace(kind, &model_file.data)
        .await
        .map_err(|e| {
            error!("Error uploading model: {}", e);
            Error::internal(format!("Error uploading model: {}", e))
        })?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: format!("Successfully uploaded and loaded {} model", kind),
    }))
}

/// Predict every row of an uploaded CSV with raw model outputs
async fn upload_csv(state: web::Data<ApiServerState>, payload: Multipart) -> Result<HttpResponse> {
    let form = read_form(payload).await?;

    let file = form
        .get("file")
        .filter(|part| part.filename.as_deref().map_or(false, |name| name.ends_with(".csv")))
        .ok_or_else(|| {
            warn!("Upload rejected: file must be a CSV");
            Error::validation("File must be a CSV")
        })?;

    let results = process_csv(&state, &file.data).await.map_err(|e| {
        if e.is_client_error() {
            warn!("Upload rejected: {}", e);
            e
        } else {
            error!("Error processing CSV: {}", e);
            Error::internal(format!("Error processing CSV: {}", e))
        }
    })?;

    Ok(HttpResponse::Ok().json(ResultsResponse { results }))
}

async fn process_csv(state: &ApiServerState, data: &[u8]) -> Result<Vec<PredictionResult>> {
    let text = String::from_utf8(data.to_vec())?;
    let table = CsvTable::parse(&text)?;
    let models = state.model_store.snapshot().await;
    info!(
        "Predicting {} CSV rows with {} models, feature columns {:?}",
        table.len(),
        models.len(),
        table.feature_columns()
    );
    predict_csv(&models, &table)
}

/// Labelled predictions for a batch of locations
async fn predict(state: web::Data<ApiServerState>, request: web::Json<PredictionRequest>) -> Result<HttpResponse> {
    let models = state.model_store.snapshot().await;
    if models.is_empty() {
        error!("Prediction requested with no models loaded");
        return Err(Error::NoModelsAvailable);
    }

    let results = predict_locations(&models, &request.locations);
    Ok(HttpResponse::Ok().json(results))
}

/// Fixed demo predictions
async fn sample_predict() -> HttpResponse {
    HttpResponse::Ok().json(ResultsResponse {
        results: sample_results(),
    })
}
