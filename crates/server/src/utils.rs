use axum::http::StatusCode;
use axum::Json;
use catalog::CatalogError;
use tracing::error;

use crate::state::ErrorResponse;

pub fn json_error(
    status: StatusCode,
    message: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Maps catalog failures onto HTTP statuses. Anything that is not a
/// lookup miss or a rejected patch is a server fault and gets logged.
pub fn catalog_error(err: CatalogError) -> (StatusCode, Json<ErrorResponse>) {
    match &err {
        CatalogError::NotFound(_) => json_error(StatusCode::NOT_FOUND, err.to_string()),
        CatalogError::Validation { .. } => json_error(StatusCode::BAD_REQUEST, err.to_string()),
        _ => {
            error!("catalog error: {}", err);
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "catalog error")
        }
    }
}

pub fn format_duration_secs(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::format_duration_secs;

    #[test]
    fn formats_minutes_and_hours() {
        assert_eq!(format_duration_secs(0), "0:00");
        assert_eq!(format_duration_secs(59), "0:59");
        assert_eq!(format_duration_secs(185), "3:05");
        assert_eq!(format_duration_secs(3671), "1:01:11");
    }
}
