use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::employee::models::Employee;

pub mod create_employee;
pub mod delete_employee;
pub mod get_employee;
pub mod list_employees;
pub mod update_employee;

pub use create_employee::create_employee;
pub use delete_employee::delete_employee;
pub use get_employee::get_employee;
pub use list_employees::list_employees;
pub use update_employee::update_employee;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeData {
    pub id: String,
    pub full_name: String,
    pub job_role: String,
    pub department: String,
    pub contact: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Employee> for EmployeeData {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            full_name: employee.full_name.as_str().to_string(),
            job_role: employee.job_role.as_str().to_string(),
            department: employee.department.as_str().to_string(),
            contact: employee.contact.as_str().to_string(),
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeMessageResponseData {
    pub message: &'static str,
    pub employee: EmployeeData,
}
