use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateNoteRequest, CreateNotebookRequest},
};

#[get("/api/notebooks")]
async fn list_notebooks(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let notebooks = state.notebook_service.list_notebooks().await?;
    Ok(HttpResponse::Ok().json(notebooks))
}

#[post("/api/notebooks")]
async fn create_notebook(
    state: web::Data<AppState>,
    request: web::Json<CreateNotebookRequest>,
) -> Result<HttpResponse, AppError> {
    let notebook = state
        .notebook_service
        .create_notebook(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(notebook))
}

#[get("/api/notebooks/{id}")]
async fn get_notebook(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let notebook = state.notebook_service.get_notebook(&id).await?;
    Ok(HttpResponse::Ok().json(notebook))
}

#[get("/api/notebooks/{id}/notes")]
async fn list_notes(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let notes = state.notebook_service.list_notes(&id).await?;
    Ok(HttpResponse::Ok().json(notes))
}

#[post("/api/notebooks/{id}/notes")]
async fn create_note(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<CreateNoteRequest>,
) -> Result<HttpResponse, AppError> {
    let note = state
        .notebook_service
        .create_note(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(note))
}
