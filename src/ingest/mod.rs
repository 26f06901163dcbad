use crate::state::AppState;
use axum::Router;

mod dto;
mod error;
pub mod handlers;
pub mod repo;
mod services;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::ingest_routes())
}
