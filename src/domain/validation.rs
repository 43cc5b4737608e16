use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    Zero { field: &'static str },
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::Zero { field } => write!(f, "{field} must be greater than zero"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "phone" };
        assert_eq!(err.to_string(), "phone must not be empty");

        let err = ValidationError::Zero { field: "length" };
        assert_eq!(err.to_string(), "length must be greater than zero");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");
    }
}
