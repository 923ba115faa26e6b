use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::NewEmployee;
use crate::domain::employee::models::UpdateEmployeeCommand;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::employee::ports::EmployeeServicePort;

/// Domain service for employee records.
pub struct EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    repository: Arc<ER>,
}

impl<ER> EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    pub fn new(repository: Arc<ER>) -> Self {
        Self { repository }
    }

    async fn ensure_exists(&self, id: &EmployeeId) -> Result<(), EmployeeError> {
        match self.repository.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(EmployeeError::NotFound(id.to_string())),
        }
    }
}

#[async_trait]
impl<ER> EmployeeServicePort for EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    async fn create_employee(&self, employee: NewEmployee) -> Result<Employee, EmployeeError> {
        self.repository.create(employee).await
    }

    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, EmployeeError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(EmployeeError::NotFound(id.to_string()))
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError> {
        self.repository.list_all().await
    }

    async fn update_employee(
        &self,
        id: &EmployeeId,
        command: UpdateEmployeeCommand,
    ) -> Result<Employee, EmployeeError> {
        self.ensure_exists(id).await?;

        if command.is_empty() {
            return Err(EmployeeError::NoUpdates);
        }

        // The record may vanish between the check and the write.
        self.repository
            .update(id, command)
            .await?
            .ok_or(EmployeeError::NotFound(id.to_string()))
    }

    async fn delete_employee(&self, id: &EmployeeId) -> Result<(), EmployeeError> {
        self.ensure_exists(id).await?;

        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(EmployeeError::NotFound(id.to_string()))
        }
    }
}
