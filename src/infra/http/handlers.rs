use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use classprint_api_types::{DocxResponse, GenerateRequest, GenerateResponse, ServiceStatus};
use serde::Serialize;

use crate::application::{
    error::{AppError, ErrorReport},
    generator::Generator,
    render::RenderError,
};

use super::state::HttpState;

pub async fn root(State(state): State<HttpState>) -> Json<ServiceStatus> {
    Json(ServiceStatus::running(state.service_name.as_ref()))
}

pub async fn health() -> Json<ServiceStatus> {
    Json(ServiceStatus::healthy())
}

pub async fn generate_exam(
    State(state): State<HttpState>,
    Json(request): Json<GenerateRequest>,
) -> Response {
    let result = render_blocking(&state, move |generator| {
        generator.exam_html(&request.yaml_content)
    })
    .await;
    html_envelope("infra::http::generate_exam", result)
}

pub async fn generate_worksheet(
    State(state): State<HttpState>,
    Json(request): Json<GenerateRequest>,
) -> Response {
    let result = render_blocking(&state, move |generator| {
        generator.worksheet_html(&request.yaml_content)
    })
    .await;
    html_envelope("infra::http::generate_worksheet", result)
}

pub async fn generate_lesson_plan(
    State(state): State<HttpState>,
    Json(request): Json<GenerateRequest>,
) -> Response {
    let result = render_blocking(&state, move |generator| {
        generator.lesson_plan_html(&request.yaml_content)
    })
    .await;
    html_envelope("infra::http::generate_lesson_plan", result)
}

pub async fn generate_lesson_plan_docx(
    State(state): State<HttpState>,
    Json(request): Json<GenerateRequest>,
) -> Response {
    let result = render_blocking(&state, move |generator| {
        generator.lesson_plan_docx_base64(&request.yaml_content)
    })
    .await;

    match result {
        Ok(encoded) => Json(DocxResponse::ok(encoded)).into_response(),
        Err(err) => failure(
            "infra::http::generate_lesson_plan_docx",
            DocxResponse::failed(err.public_message()),
            &err,
        ),
    }
}

/// Rendering is CPU-bound; keep it off the async workers.
async fn render_blocking<T, F>(state: &HttpState, render: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&Generator) -> Result<T, RenderError> + Send + 'static,
{
    let generator = state.generator.clone();
    tokio::task::spawn_blocking(move || render(&generator))
        .await
        .map_err(|err| AppError::unexpected(format!("render task did not complete: {err}")))?
        .map_err(AppError::from)
}

fn html_envelope(source: &'static str, result: Result<String, AppError>) -> Response {
    match result {
        Ok(html) => Json(GenerateResponse::ok(html)).into_response(),
        Err(err) => failure(source, GenerateResponse::failed(err.public_message()), &err),
    }
}

/// Failures keep HTTP 200 and report through the envelope.
fn failure<B: Serialize>(source: &'static str, body: B, err: &AppError) -> Response {
    let mut response = Json(body).into_response();
    ErrorReport::from_error(source, StatusCode::OK, err).attach(&mut response);
    response
}
