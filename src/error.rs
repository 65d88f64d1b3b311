use thiserror::Error;

pub type AxisResult<T> = Result<T, AxisError>;

#[derive(Debug, Error)]
pub enum AxisError {
    #[error("invalid range: t1={t1}, t2={t2} (requires finite t1 < t2)")]
    InvalidRange { t1: f64, t2: f64 },

    #[error("invalid table: {0}")]
    InvalidTable(String),

    #[error("invalid calendar unit: {0}")]
    InvalidUnit(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
