#[derive(thiserror::Error, Debug)]
pub enum Error {
    // One kind on purpose: network failures, non-success statuses, and JSON
    // decode failures all sink the aggregate load the same way.
    #[error("Could not fetch `{url}': {error}")]
    Fetch { error: reqwest::Error, url: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        log::warn!("{}", self);
        (axum::http::StatusCode::BAD_GATEWAY, self.to_string()).into_response()
    }
}
