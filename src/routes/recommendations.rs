use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::RecommendationResponse,
    routes::AppState,
};

/// Message returned when the path segment is not a user ID
pub const INVALID_USER_ID: &str = "Invalid user ID";

/// Parses the `userID` path segment
pub fn parse_user_id(raw: &str) -> AppResult<i32> {
    raw.parse::<i32>()
        .map_err(|_| AppError::InvalidInput(INVALID_USER_ID.to_string()))
}

/// Handler for the recommendation endpoint
///
/// Only a malformed user ID is reported as an error; store failures are
/// absorbed by the service and show up as a shorter (possibly empty) list.
pub async fn recommended(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(user_id): Path<String>,
) -> AppResult<Json<RecommendationResponse>> {
    let user_id = parse_user_id(&user_id).map_err(|e| {
        tracing::warn!(request_id = %request_id, raw = %user_id, "Rejected user ID");
        e
    })?;

    tracing::info!(
        request_id = %request_id,
        user_id,
        "Processing recommendation request"
    );

    let products = state.recommendations.recommended_products(user_id).await;

    Ok(Json(RecommendationResponse::from(products)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id_accepts_integers() {
        assert_eq!(parse_user_id("42").unwrap(), 42);
        assert_eq!(parse_user_id("-3").unwrap(), -3);
    }

    #[test]
    fn test_parse_user_id_rejects_garbage() {
        for raw in ["abc", "", "4.2", "12abc", " 7", "99999999999"] {
            let err = parse_user_id(raw).unwrap_err();
            assert_eq!(err.to_string(), format!("Invalid input: {}", INVALID_USER_ID));
        }
    }
}
