use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("ID de usuário inválido: {0}")]
    InvalidFormat(String),
}

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username é obrigatório")]
    Empty,

    #[error("Username deve ter entre {min} e {max} caracteres")]
    InvalidLength {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Username deve conter apenas letras, números e underscore")]
    InvalidCharacters,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email é obrigatório")]
    Empty,

    #[error("Email deve ser válido")]
    InvalidFormat(String),
}

/// Error for plaintext password policy violations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Senha é obrigatória")]
    Empty,

    #[error("Senha deve ter entre {min} e {max} caracteres")]
    InvalidLength {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error(
        "Senha deve conter pelo menos: 1 letra minúscula, 1 maiúscula, 1 número e 1 caractere especial"
    )]
    MissingCharacterClass,
}

/// Error for Role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Role deve ser admin ou user")]
    Unknown(String),
}

/// Top-level error for user record operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("{0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("{0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("{0}")]
    InvalidEmail(#[from] EmailError),

    #[error("{0}")]
    InvalidRole(#[from] RoleError),

    // Domain-level errors
    #[error("Usuário não encontrado")]
    NotFound(String),

    #[error("Username já existe")]
    UsernameAlreadyExists(String),

    #[error("Email já existe")]
    EmailAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
