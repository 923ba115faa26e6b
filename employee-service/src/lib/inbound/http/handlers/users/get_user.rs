use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::UserData;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    // A malformed id cannot name a stored user.
    let user_id = UserId::from_string(&user_id).map_err(|_| UserError::NotFound(user_id))?;

    state
        .user_service
        .get_user(&user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
