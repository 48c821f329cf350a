use crate::assets;
use crate::errors::AppError;
use crate::humidity::fetch_current_humidity;
use crate::state::AppState;
use crate::ui::render_dashboard;
use crate::view::{build_view_from_path, DashboardView};
use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let view = load_view(&state).await?;
    Ok(Html(render_dashboard(&view)))
}

pub async fn get_summary(State(state): State<AppState>) -> Result<Json<DashboardView>, AppError> {
    Ok(Json(load_view(&state).await?))
}

pub async fn static_asset(Path(path): Path<String>) -> Result<impl IntoResponse, AppError> {
    let (body, mime) =
        assets::lookup(&path).ok_or_else(|| AppError::not_found(format!("no asset at /static/{path}")))?;
    Ok(([(header::CONTENT_TYPE, mime)], body))
}

pub async fn not_found() -> AppError {
    AppError::not_found("not found")
}

async fn load_view(state: &AppState) -> Result<DashboardView, AppError> {
    let config = state.config.clone();
    let view = tokio::task::spawn_blocking(move || {
        build_view_from_path(&config.log_path, config.retain_days)
    })
    .await??;

    let humidity = match &state.config.humidity {
        Some(lookup) => fetch_current_humidity(&state.http, lookup).await,
        None => None,
    };
    Ok(view.with_current_humidity(humidity))
}
