use thiserror::Error;

/// Validation failure of a single employee field.
///
/// `field` is the label shown to clients, e.g. `Cargo`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmployeeFieldError {
    #[error("{field} é obrigatório")]
    Empty { field: &'static str },

    #[error("{field} deve ter entre {min} e {max} caracteres")]
    InvalidLength {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("{field} deve conter apenas {allowed}")]
    InvalidCharacters {
        field: &'static str,
        allowed: &'static str,
    },

    #[error("Contato deve ser um email válido ou telefone")]
    InvalidContact,
}

#[derive(Debug, Clone, Error)]
pub enum EmployeeError {
    #[error("{0}")]
    InvalidField(#[from] EmployeeFieldError),

    /// Unknown id and malformed id are reported the same way.
    #[error("Empregado não encontrado ou ID inválido")]
    NotFound(String),

    #[error("Nenhuma atualização fornecida")]
    NoUpdates,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
