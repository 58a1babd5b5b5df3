use netforms_common::config::FieldConfig;
use netforms_common::network::ip;
use pnet::ipnetwork::IpNetwork;
use tracing::{debug, trace};

use crate::error::ValidationError;
use crate::field::{FieldBase, FormField};
use crate::input::AddressInput;

/// Accepts an IP address or network, with or without a prefix.
#[derive(Debug, Clone)]
pub struct InetAddressField {
    base: FieldBase<IpNetwork>,
}

impl InetAddressField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            base: FieldBase::new(config, &[]),
        }
    }
}

impl Default for InetAddressField {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}

impl FormField for InetAddressField {
    type Value = IpNetwork;

    fn base(&self) -> &FieldBase<IpNetwork> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FieldBase<IpNetwork> {
        &mut self.base
    }

    fn to_value(
        &self,
        input: AddressInput<IpNetwork>,
    ) -> Result<Option<IpNetwork>, ValidationError> {
        resolve_network(input, "inet")
    }
}

/// Shared by the plain and CIDR fields. Parse failures carry the parser's text.
pub(crate) fn resolve_network(
    input: AddressInput<IpNetwork>,
    field: &str,
) -> Result<Option<IpNetwork>, ValidationError> {
    let text: String = match input {
        AddressInput::Absent => return Ok(None),
        AddressInput::Typed(network) => return Ok(Some(network)),
        AddressInput::Raw(text) => text,
    };

    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    match ip::parse_network(text) {
        Ok(network) => {
            trace!(field, %network, "accepted network");
            Ok(Some(network))
        }
        Err(err) => {
            debug!(field, input = text, error = %err, "rejected network");
            Err(ValidationError::parse(err.to_string()))
        }
    }
}
