use actix_web::{get, http::header, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{ChatQuery, ContextRequest, GenerateRequest},
        response::StoryboardResponse,
    },
};

pub const CHAT_SESSION_HEADER: &str = "x-chat-session";

#[get("/api/leeai/chat")]
async fn chat(
    state: web::Data<AppState>,
    query: web::Query<ChatQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    query.validate()?;

    let reply = state
        .chat_service
        .chat(query.session_id, &query.message)
        .await?;

    Ok(HttpResponse::Ok()
        .insert_header((CHAT_SESSION_HEADER, reply.session_id))
        .content_type("text/plain; charset=utf-8")
        .body(reply.reply))
}

#[post("/api/leeai/generate")]
async fn generate(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;
    log::info!(
        "[{}] generate {}",
        get_request_id(&req).unwrap_or_default(),
        request.tool_type
    );

    let content = state.content_generator.generate(&request).await?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(content))
}

#[post("/api/leeai/audio")]
async fn audio(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<ContextRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("[{}] audio summary", get_request_id(&req).unwrap_or_default());

    let audio = state
        .audio_summary_service
        .build_audio_summary(request.context.as_deref())
        .await?;

    Ok(HttpResponse::Ok()
        .content_type("audio/mpeg")
        .insert_header((
            header::CONTENT_DISPOSITION,
            "inline; filename=\"audio-summary.mp3\"",
        ))
        .body(audio))
}

#[post("/api/leeai/video")]
async fn video(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<ContextRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("[{}] video storyboard", get_request_id(&req).unwrap_or_default());

    let storyboard = state
        .video_storyboard_service
        .build_video_storyboard(request.context.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(StoryboardResponse::from(storyboard)))
}
