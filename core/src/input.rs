use std::fmt;

use netforms_common::network::mac::HardwareAddress;
use pnet::ipnetwork::IpNetwork;

/// What a field receives: nothing, user text, or a value that is already typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressInput<T> {
    Absent,
    Raw(String),
    Typed(T),
}

impl<T> AddressInput<T> {
    pub fn raw(text: impl Into<String>) -> Self {
        AddressInput::Raw(text.into())
    }

    /// True for `Absent` and for text that is empty once trimmed.
    pub fn is_empty(&self) -> bool {
        match self {
            AddressInput::Absent => true,
            AddressInput::Raw(text) => text.trim().is_empty(),
            AddressInput::Typed(_) => false,
        }
    }
}

impl<T: fmt::Display> AddressInput<T> {
    /// Text to redisplay in a widget. Raw input is shown as the user typed it.
    pub fn display_text(&self) -> Option<String> {
        match self {
            AddressInput::Absent => None,
            AddressInput::Raw(text) => Some(text.clone()),
            AddressInput::Typed(value) => Some(value.to_string()),
        }
    }
}

impl<T> Default for AddressInput<T> {
    fn default() -> Self {
        AddressInput::Absent
    }
}

impl<T> From<&str> for AddressInput<T> {
    fn from(text: &str) -> Self {
        AddressInput::Raw(text.to_string())
    }
}

impl<T> From<String> for AddressInput<T> {
    fn from(text: String) -> Self {
        AddressInput::Raw(text)
    }
}

impl<T> From<Option<&str>> for AddressInput<T> {
    fn from(text: Option<&str>) -> Self {
        text.map_or(AddressInput::Absent, AddressInput::from)
    }
}

impl<T> From<Option<String>> for AddressInput<T> {
    fn from(text: Option<String>) -> Self {
        text.map_or(AddressInput::Absent, AddressInput::Raw)
    }
}

impl From<IpNetwork> for AddressInput<IpNetwork> {
    fn from(network: IpNetwork) -> Self {
        AddressInput::Typed(network)
    }
}

impl From<HardwareAddress> for AddressInput<HardwareAddress> {
    fn from(addr: HardwareAddress) -> Self {
        AddressInput::Typed(addr)
    }
}
