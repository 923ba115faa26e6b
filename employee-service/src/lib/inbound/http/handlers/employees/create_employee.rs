use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::EmployeeMessageResponseData;
use crate::domain::employee::errors::EmployeeFieldError;
use crate::domain::employee::models::Contact;
use crate::domain::employee::models::Department;
use crate::domain::employee::models::FullName;
use crate::domain::employee::models::JobRole;
use crate::domain::employee::models::NewEmployee;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<EmployeeMessageResponseData>, ApiError> {
    let Json(body) = payload?;
    let employee = body.try_into_new_employee().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .employee_service
        .create_employee(employee)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| {
            tracing::info!(employee_id = %employee.id, "Employee created");
            ApiSuccess::new(
                StatusCode::CREATED,
                EmployeeMessageResponseData {
                    message: "Empregado criado com sucesso",
                    employee: employee.into(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequestBody {
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    job_role: String,
    #[serde(default)]
    department: String,
    #[serde(default)]
    contact: String,
}

impl CreateEmployeeRequestBody {
    fn try_into_new_employee(self) -> Result<NewEmployee, EmployeeFieldError> {
        Ok(NewEmployee {
            full_name: FullName::new(self.full_name)?,
            job_role: JobRole::new(self.job_role)?,
            department: Department::new(self.department)?,
            contact: Contact::new(self.contact)?,
        })
    }
}
