use crate::picker::unit::Unit;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    #[error("at least one unit must be active")]
    EmptyUnits,

    #[error("unit '{0}' appears more than once")]
    DuplicateUnit(Unit),

    #[error("unsupported unit '{0}': not an active column")]
    UnsupportedUnit(Unit),

    #[error("invalid row count {count} for unit '{unit}': must be greater than 0")]
    InvalidRowCount { unit: Unit, count: i64 },

    #[error("unknown unit '{0}'")]
    UnknownUnit(String),
}

pub type Result<T> = std::result::Result<T, PickerError>;
