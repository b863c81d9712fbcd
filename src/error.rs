use thiserror::Error;

/// Why a single form field was rejected. The display text is what the
/// visitor sees under the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0}")]
    EmptyField(&'static str),

    #[error("{label} debe tener al menos {min} caracteres")]
    TooShort { label: &'static str, min: usize },

    #[error("{0}")]
    InvalidFormat(&'static str),
}

/// Failure of the dispatch step once the form has validated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("No hay una ventana del navegador disponible")]
    NoWindow,

    #[error("El navegador bloqueó la ventana de WhatsApp. Permite las ventanas emergentes e inténtalo de nuevo")]
    PopupBlocked,

    #[error("No se pudo abrir WhatsApp: {0}")]
    Browser(String),
}
