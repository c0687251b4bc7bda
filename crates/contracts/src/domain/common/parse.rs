use thiserror::Error;

/// Label that matches no variant of a select-list enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_kind_and_value() {
        let err = UnknownVariant::new("ticket status", "Pending");
        assert_eq!(err.to_string(), "unknown ticket status: \"Pending\"");
    }
}
