use std::collections::BTreeMap;

use netforms_common::config::ErrorCode;

pub const REQUIRED: &str = "This field is required.";

/// The user-facing text for each error code a field can raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessages {
    entries: BTreeMap<ErrorCode, String>,
}

impl ErrorMessages {
    /// Starts from `defaults` and applies `overrides` on top.
    pub fn new(defaults: &[(ErrorCode, &str)], overrides: &BTreeMap<ErrorCode, String>) -> Self {
        let mut entries: BTreeMap<ErrorCode, String> = defaults
            .iter()
            .map(|(code, message)| (*code, message.to_string()))
            .collect();
        entries.extend(overrides.iter().map(|(code, message)| (*code, message.clone())));
        Self { entries }
    }

    pub fn get(&self, code: ErrorCode) -> Option<&str> {
        self.entries.get(&code).map(String::as_str)
    }

    /// Message for `code` with `{value}` replaced. Unknown codes fall back to
    /// the code name.
    pub fn render(&self, code: ErrorCode, value: &str) -> String {
        self.get(code)
            .unwrap_or(code.as_str())
            .replace("{value}", value)
    }
}
