/// Subsonic ping endpoint
use crate::subsonic::{self, Container};
use axum::response::Response;

/// GET /subsonic/ping - empty success container
pub async fn ping() -> Response {
    subsonic::render(&Container::ok())
}
