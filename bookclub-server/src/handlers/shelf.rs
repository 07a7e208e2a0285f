//! Shelf handlers: the two views, the raw books and refreshing

use crate::state::{AppState, Snapshot};
use axum::{extract::State, http::StatusCode, Json};
use bookclub_core::display::{last_updated_message, FETCH_FAILED_MESSAGE, NO_CURRENT_BOOK_MESSAGE};
use bookclub_core::{Book, HistoryCard, NowReadingCard, ShelfView};
use serde::Serialize;

/// Error body; the message is always user-facing
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: &'static str) -> ApiError {
    (status, Json(ErrorResponse { error: message }))
}

/// Current snapshot, or 503 when the last fetch failed
async fn snapshot(state: &AppState) -> Result<Snapshot, ApiError> {
    state
        .current()
        .await
        .ok_or_else(|| api_error(StatusCode::SERVICE_UNAVAILABLE, FETCH_FAILED_MESSAGE))
}

/// Full page data
#[derive(Debug, Serialize)]
pub struct ShelfResponse {
    #[serde(flatten)]
    pub view: ShelfView,
    /// `Ostatnia aktualizacja: …`
    pub updated: String,
}

/// Both views, render-ready
pub async fn get_shelf(State(state): State<AppState>) -> Result<Json<ShelfResponse>, ApiError> {
    let snapshot = snapshot(&state).await?;
    Ok(Json(ShelfResponse {
        view: ShelfView::from(&snapshot.shelf),
        updated: last_updated_message(snapshot.fetched_at),
    }))
}

/// The book being read now
pub async fn get_now_reading(
    State(state): State<AppState>,
) -> Result<Json<NowReadingCard>, ApiError> {
    let snapshot = snapshot(&state).await?;
    snapshot
        .shelf
        .now_reading
        .as_ref()
        .map(|book| Json(NowReadingCard::from(book)))
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, NO_CURRENT_BOOK_MESSAGE))
}

/// Finished books, most recent meeting first
pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<HistoryCard>>, ApiError> {
    let snapshot = snapshot(&state).await?;
    Ok(Json(
        snapshot.shelf.history.iter().map(HistoryCard::from).collect(),
    ))
}

/// Every book in the sheet, as read from the cells
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    let snapshot = snapshot(&state).await?;
    Ok(Json(snapshot.books))
}

/// Refresh response
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub books: usize,
    pub updated: String,
}

/// Fetch the sheet again
pub async fn refresh(State(state): State<AppState>) -> Result<Json<RefreshResponse>, ApiError> {
    match state.refresh().await {
        Ok(snapshot) => {
            tracing::info!("Refreshed: {} books", snapshot.books.len());
            Ok(Json(RefreshResponse {
                books: snapshot.books.len(),
                updated: last_updated_message(snapshot.fetched_at),
            }))
        }
        // Already logged by the state with the underlying error
        Err(_) => Err(api_error(StatusCode::BAD_GATEWAY, FETCH_FAILED_MESSAGE)),
    }
}
