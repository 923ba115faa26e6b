use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::Contact;
use crate::domain::employee::models::Department;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::FullName;
use crate::domain::employee::models::JobRole;
use crate::domain::employee::models::NewEmployee;
use crate::domain::employee::models::UpdateEmployeeCommand;
use crate::domain::employee::ports::EmployeeRepository;

const EMPLOYEE_COLUMNS: &str =
    "id, full_name, job_role, department, contact, created_at, updated_at";

pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: Uuid,
    full_name: String,
    job_role: String,
    department: String,
    contact: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = EmployeeError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        Ok(Employee {
            id: EmployeeId(row.id),
            full_name: FullName::new(row.full_name)?,
            job_role: JobRole::new(row.job_role)?,
            department: Department::new(row.department)?,
            contact: Contact::new(row.contact)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> EmployeeError {
    EmployeeError::DatabaseError(e.to_string())
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn create(&self, employee: NewEmployee) -> Result<Employee, EmployeeError> {
        let now = Utc::now();
        let id = EmployeeId::new();

        sqlx::query(
            r#"
            INSERT INTO employees (id, full_name, job_role, department, contact, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            "#,
        )
        .bind(id.0)
        .bind(employee.full_name.as_str())
        .bind(employee.job_role.as_str())
        .bind(employee.department.as_str())
        .bind(employee.contact.as_str())
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(Employee {
            id,
            full_name: employee.full_name,
            job_role: employee.job_role,
            department: employee.department,
            contact: employee.contact,
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError> {
        let query = format!("SELECT {} FROM employees WHERE id = $1", EMPLOYEE_COLUMNS);

        let row = sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        row.map(Employee::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError> {
        let query = format!(
            "SELECT {} FROM employees ORDER BY created_at DESC",
            EMPLOYEE_COLUMNS
        );

        let rows = sqlx::query_as::<_, EmployeeRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        rows.into_iter().map(Employee::try_from).collect()
    }

    async fn update(
        &self,
        id: &EmployeeId,
        command: UpdateEmployeeCommand,
    ) -> Result<Option<Employee>, EmployeeError> {
        // NULL parameters keep the stored value.
        let query = format!(
            r#"
            UPDATE employees
            SET full_name = COALESCE($2, full_name),
                job_role = COALESCE($3, job_role),
                department = COALESCE($4, department),
                contact = COALESCE($5, contact),
                updated_at = $6
            WHERE id = $1
            RETURNING {}
            "#,
            EMPLOYEE_COLUMNS
        );

        let row = sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(id.0)
            .bind(command.full_name.as_ref().map(FullName::as_str))
            .bind(command.job_role.as_ref().map(JobRole::as_str))
            .bind(command.department.as_ref().map(Department::as_str))
            .bind(command.contact.as_ref().map(Contact::as_str))
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        row.map(Employee::try_from).transpose()
    }

    async fn delete(&self, id: &EmployeeId) -> Result<bool, EmployeeError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }
}
