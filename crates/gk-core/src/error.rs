use thiserror::Error;

pub type GkResult<T> = Result<T, GkError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GkError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
