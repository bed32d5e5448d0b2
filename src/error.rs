use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Failures raised while parsing or solving. The `Display` text is what the
/// calculators show to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("ecuación mal formada: {0}")]
    MalformedEquation(String),
    #[error("término inválido: '{0}'")]
    InvalidTerm(String),
    #[error("polinomio inválido: {0}")]
    InvalidPolynomial(String),
    #[error("variable desconocida '{symbol}' (se esperaba {expected})")]
    UnknownSymbol { symbol: char, expected: String },
    #[error("división por cero")]
    DivisionByZero,
    #[error("número inválido: '{0}'")]
    InvalidNumber(String),
    #[error("sistema no soportado: {0}")]
    UnsupportedSystem(String),
    /// An intermediate coefficient or value left the finite `f64` range.
    #[error("desbordamiento numérico: {0}")]
    NumericOverflow(String),
}
