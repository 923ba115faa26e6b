use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::EmployeeMessageResponseData;
use crate::domain::employee::errors::EmployeeFieldError;
use crate::domain::employee::models::Contact;
use crate::domain::employee::models::Department;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::FullName;
use crate::domain::employee::models::JobRole;
use crate::domain::employee::models::UpdateEmployeeCommand;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<UpdateEmployeeRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<EmployeeMessageResponseData>, ApiError> {
    let Json(body) = payload?;
    let command = body.try_into_command().map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let employee_id = EmployeeId::from_string(&employee_id)?;

    state
        .employee_service
        .update_employee(&employee_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| {
            ApiSuccess::new(
                StatusCode::OK,
                EmployeeMessageResponseData {
                    message: "Empregado atualizado com sucesso",
                    employee: employee.into(),
                },
            )
        })
}

/// Every field is optional; supplied fields are validated like on creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequestBody {
    full_name: Option<String>,
    job_role: Option<String>,
    department: Option<String>,
    contact: Option<String>,
}

impl UpdateEmployeeRequestBody {
    fn try_into_command(self) -> Result<UpdateEmployeeCommand, EmployeeFieldError> {
        Ok(UpdateEmployeeCommand {
            full_name: self.full_name.map(FullName::new).transpose()?,
            job_role: self.job_role.map(JobRole::new).transpose()?,
            department: self.department.map(Department::new).transpose()?,
            contact: self.contact.map(Contact::new).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_yields_empty_command() {
        let body: UpdateEmployeeRequestBody = serde_json::from_str("{}").unwrap();
        assert!(body.try_into_command().unwrap().is_empty());
    }

    #[test]
    fn test_supplied_fields_are_validated() {
        let body: UpdateEmployeeRequestBody =
            serde_json::from_str(r#"{"contact":"not a contact"}"#).unwrap();
        assert_eq!(
            body.try_into_command().unwrap_err(),
            EmployeeFieldError::InvalidContact
        );

        let body: UpdateEmployeeRequestBody =
            serde_json::from_str(r#"{"jobRole":"Gerente"}"#).unwrap();
        let command = body.try_into_command().unwrap();
        assert_eq!(command.job_role.unwrap().as_str(), "Gerente");
        assert!(command.full_name.is_none());
    }
}
