use crate::error::ApiError;

/// Request payload validation, run before a handler touches its services.
pub trait RequestValidation {
    fn validate(&self) -> Result<(), ApiError>;
}

/// Fail validation when a string field is empty or blank.
#[macro_export]
macro_rules! validate_required {
    ($field:expr, $message:expr) => {
        if $field.trim().is_empty() {
            return Err($crate::error::ApiError::validation($message));
        }
    };
}

/// Fail validation when a string field is outside a length range.
#[macro_export]
macro_rules! validate_length {
    ($field:expr, $min:expr, $max:expr, $message:expr) => {{
        let len = $field.trim().len();
        if len < $min || len > $max {
            return Err($crate::error::ApiError::validation($message));
        }
    }};
}

/// Fail validation when an arbitrary condition does not hold.
#[macro_export]
macro_rules! validate_field {
    ($cond:expr, $message:expr) => {
        if !($cond) {
            return Err($crate::error::ApiError::validation($message));
        }
    };
}
