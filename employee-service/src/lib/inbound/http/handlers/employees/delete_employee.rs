use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::router::AppState;

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let employee_id = EmployeeId::from_string(&employee_id)?;

    state
        .employee_service
        .delete_employee(&employee_id)
        .await
        .map_err(ApiError::from)?;

    tracing::info!(employee_id = %employee_id, "Employee deleted");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponseData {
            message: "Empregado deletado com sucesso",
        },
    ))
}
