pub mod employee;
pub mod health;
pub mod user;

pub use employee::PostgresEmployeeRepository;
pub use health::PostgresHealthCheck;
pub use user::PostgresUserRepository;
