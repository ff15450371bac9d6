use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Labels of the required fields left empty, in form order.
    #[error("required fields missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

impl FormError {
    pub fn is_missing(&self, label: &str) -> bool {
        match self {
            FormError::MissingFields(fields) => fields.contains(&label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no listing with id '{0}'")]
    UnknownListing(String),
    #[error("cannot {action} from the {from} view")]
    InvalidTransition {
        action: &'static str,
        from: &'static str,
    },
    #[error(transparent)]
    Form(#[from] FormError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseChoiceError {
    pub kind: &'static str,
    pub value: String,
}
