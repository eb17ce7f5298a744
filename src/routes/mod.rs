use axum::Router;

pub mod accounts;
pub mod health;
pub mod ping;
pub mod transactions;
pub mod users;

/// Routes served under `/api/v1`.
pub fn v1_router() -> Router {
    Router::new()
        .merge(ping::router())
        .merge(users::router())
        .merge(accounts::router())
        .merge(transactions::router())
}
