use std::collections::BTreeMap;
use std::fmt;

/// Identifies which user-facing message a validation failure uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCode {
    /// A required field received no value.
    Required,
    /// The value could not be interpreted as the target type.
    Invalid,
    /// A network parsed but has bits set to the right of its mask.
    HostBits,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Required => "required",
            ErrorCode::Invalid => "invalid",
            ErrorCode::HostBits => "host_bits",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options accepted by every address field.
#[derive(Debug, Clone, Default)]
pub struct FieldConfig {
    /// Makes `clean` reject absent input instead of returning `None`.
    pub required: bool,
    /// Replaces the field's default messages. `{value}` is substituted with
    /// the offending input.
    pub messages: BTreeMap<ErrorCode, String>,
}

impl FieldConfig {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn with_message(mut self, code: ErrorCode, message: impl Into<String>) -> Self {
        self.messages.insert(code, message.into());
        self
    }
}
