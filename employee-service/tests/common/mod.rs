use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use auth::PasswordHasher;
use chrono::Utc;
use employee_service::domain::auth::models::RegisterUserCommand;
use employee_service::domain::auth::ports::AuthServicePort;
use employee_service::domain::auth::service::AuthService;
use employee_service::domain::employee::errors::EmployeeError;
use employee_service::domain::employee::models::Employee;
use employee_service::domain::employee::models::EmployeeId;
use employee_service::domain::employee::models::NewEmployee;
use employee_service::domain::employee::models::UpdateEmployeeCommand;
use employee_service::domain::employee::ports::EmployeeRepository;
use employee_service::domain::employee::service::EmployeeService;
use employee_service::domain::health::HealthCheckPort;
use employee_service::domain::user::errors::UserError;
use employee_service::domain::user::models::EmailAddress;
use employee_service::domain::user::models::NewUser;
use employee_service::domain::user::models::Password;
use employee_service::domain::user::models::User;
use employee_service::domain::user::models::UserId;
use employee_service::domain::user::models::Username;
use employee_service::domain::user::ports::UserRepository;
use employee_service::domain::user::service::UserService;
use employee_service::inbound::http::router::create_router;
use employee_service::inbound::http::router::AppState;
use serde_json::json;
use serde_json::Value;
use tokio::sync::RwLock;

pub mod db;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "Admin123!";

/// Test application that spawns a real server over in-memory stores
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    pub users: Arc<InMemoryUserRepository>,
    pub employees: Arc<InMemoryEmployeeRepository>,
    pub database: Arc<ToggleHealthCheck>,
}

impl TestApp {
    /// Spawn the application in a background task with production error bodies
    pub async fn spawn() -> Self {
        Self::spawn_with(false).await
    }

    /// Spawn the application, optionally exposing internal error messages
    pub async fn spawn_with(expose_internal_errors: bool) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let users = Arc::new(InMemoryUserRepository::default());
        let employees = Arc::new(InMemoryEmployeeRepository::default());
        let database = Arc::new(ToggleHealthCheck::default());

        // Minimal Argon2 cost keeps the suite fast; verification reads params from the hash.
        let hasher = PasswordHasher::with_params(1024, 1, 1).expect("Invalid hasher params");
        let authenticator = Arc::new(Authenticator::with_hasher(JWT_SECRET, hasher));
        let auth_service = Arc::new(AuthService::new(Arc::clone(&users), authenticator));

        auth_service
            .ensure_admin(RegisterUserCommand::new(
                Username::new(ADMIN_USERNAME.to_string()).unwrap(),
                EmailAddress::new("admin@empresa.com".to_string()).unwrap(),
                Password::new(ADMIN_PASSWORD.to_string()).unwrap(),
                None,
            ))
            .await
            .expect("Failed to seed admin");

        let state = AppState {
            auth_service,
            user_service: Arc::new(UserService::new(Arc::clone(&users))),
            employee_service: Arc::new(EmployeeService::new(Arc::clone(&employees))),
            health_check: database.clone(),
        };

        let router = create_router(state, expose_internal_errors);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET),
            users,
            employees,
            database,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user and return the response
    pub async fn register(&self, username: &str, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/register")
            .json(&json!({
                "username": username,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in and return the issued token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("Missing token")
            .to_string()
    }

    /// Register a regular user and return their token
    pub async fn user_token(&self, username: &str) -> String {
        let response = self
            .register(username, &format!("{}@x.com", username), "Abcd1234!")
            .await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        self.login(username, "Abcd1234!").await
    }

    pub async fn admin_token(&self) -> String {
        self.login(ADMIN_USERNAME, ADMIN_PASSWORD).await
    }

    /// Create an employee and return its id
    pub async fn create_employee(&self, token: &str, full_name: &str) -> String {
        let response = self
            .post_authenticated("/api/employees", token)
            .json(&json!({
                "fullName": full_name,
                "jobRole": "Desenvolvedor",
                "department": "Tecnologia",
                "contact": "+5521999998888"
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["employee"]["id"]
            .as_str()
            .expect("Missing employee id")
            .to_string()
    }
}

/// Credential store that enforces uniqueness under a single write lock
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(user.username.to_string()));
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }

        let now = Utc::now();
        let created = User {
            id: UserId::new(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.iter().find(|u| u.id == *id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.username == *username)
            .cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.users.read().await.iter().rev().cloned().collect())
    }
}

impl InMemoryUserRepository {
    /// Remove a user directly from the store
    pub async fn remove(&self, username: &str) {
        self.users
            .write()
            .await
            .retain(|u| u.username.as_str() != username);
    }
}

/// Employee store; `fail` makes every call return a database error
#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    employees: RwLock<Vec<Employee>>,
    pub fail: AtomicBool,
}

impl InMemoryEmployeeRepository {
    fn check(&self) -> Result<(), EmployeeError> {
        if self.fail.load(Ordering::SeqCst) {
            Err(EmployeeError::DatabaseError(
                "connection to server was lost".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, employee: NewEmployee) -> Result<Employee, EmployeeError> {
        self.check()?;

        let now = Utc::now();
        let created = Employee {
            id: EmployeeId::new(),
            full_name: employee.full_name,
            job_role: employee.job_role,
            department: employee.department,
            contact: employee.contact,
            created_at: now,
            updated_at: now,
        };
        self.employees.write().await.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError> {
        self.check()?;
        Ok(self
            .employees
            .read()
            .await
            .iter()
            .find(|e| e.id == *id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError> {
        self.check()?;
        Ok(self.employees.read().await.iter().rev().cloned().collect())
    }

    async fn update(
        &self,
        id: &EmployeeId,
        command: UpdateEmployeeCommand,
    ) -> Result<Option<Employee>, EmployeeError> {
        self.check()?;

        let mut employees = self.employees.write().await;
        let Some(employee) = employees.iter_mut().find(|e| e.id == *id) else {
            return Ok(None);
        };

        if let Some(full_name) = command.full_name {
            employee.full_name = full_name;
        }
        if let Some(job_role) = command.job_role {
            employee.job_role = job_role;
        }
        if let Some(department) = command.department {
            employee.department = department;
        }
        if let Some(contact) = command.contact {
            employee.contact = contact;
        }
        employee.updated_at = Utc::now();

        Ok(Some(employee.clone()))
    }

    async fn delete(&self, id: &EmployeeId) -> Result<bool, EmployeeError> {
        self.check()?;

        let mut employees = self.employees.write().await;
        let before = employees.len();
        employees.retain(|e| e.id != *id);
        Ok(employees.len() < before)
    }
}

/// Health probe whose answer the test controls
pub struct ToggleHealthCheck {
    pub connected: AtomicBool,
}

impl Default for ToggleHealthCheck {
    fn default() -> Self {
        Self {
            connected: AtomicBool::new(true),
        }
    }
}

#[async_trait]
impl HealthCheckPort for ToggleHealthCheck {
    async fn database_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}
