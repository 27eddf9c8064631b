use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
mod password;
pub mod repo;
mod validation;
mod views;

pub fn router() -> Router<AppState> {
    handlers::user_routes()
}
