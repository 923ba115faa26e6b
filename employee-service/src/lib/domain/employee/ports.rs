use async_trait::async_trait;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::NewEmployee;
use crate::domain::employee::models::UpdateEmployeeCommand;

/// Port for employee record management.
#[async_trait]
pub trait EmployeeServicePort: Send + Sync + 'static {
    /// Create a new employee record.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_employee(&self, employee: NewEmployee) -> Result<Employee, EmployeeError>;

    /// Retrieve employee by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, EmployeeError>;

    /// List every employee, newest first.
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError>;

    /// Apply a partial update.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `NoUpdates` - Command carries no field
    /// * `DatabaseError` - Database operation failed
    async fn update_employee(
        &self,
        id: &EmployeeId,
        command: UpdateEmployeeCommand,
    ) -> Result<Employee, EmployeeError>;

    /// Delete an employee record.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_employee(&self, id: &EmployeeId) -> Result<(), EmployeeError>;
}

/// Persistence operations for employee records.
#[async_trait]
pub trait EmployeeRepository: Send + Sync + 'static {
    /// Persist a new employee, assigning its id and timestamps.
    async fn create(&self, employee: NewEmployee) -> Result<Employee, EmployeeError>;

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError>;

    /// Retrieve all employees ordered by creation time, newest first.
    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError>;

    /// Overwrite the supplied fields and bump `updated_at`.
    ///
    /// Returns `None` when no record has the id.
    async fn update(
        &self,
        id: &EmployeeId,
        command: UpdateEmployeeCommand,
    ) -> Result<Option<Employee>, EmployeeError>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: &EmployeeId) -> Result<bool, EmployeeError>;
}
