use netforms_common::config::{ErrorCode, FieldConfig};
use netforms_common::network::ip;
use pnet::ipnetwork::IpNetwork;
use tracing::debug;

use crate::error::{ErrorKind, ValidationError};
use crate::field::{FieldBase, FormField};
use crate::fields::inet::resolve_network;
use crate::input::AddressInput;

pub const HOST_BITS: &str = "Enter a valid CIDR Address: {value} has host bits set.";

/// Accepts only network base addresses: no bits set to the right of the mask.
#[derive(Debug, Clone)]
pub struct CidrAddressField {
    base: FieldBase<IpNetwork>,
}

impl CidrAddressField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            base: FieldBase::new(config, &[(ErrorCode::HostBits, HOST_BITS)]),
        }
    }
}

impl Default for CidrAddressField {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}

impl FormField for CidrAddressField {
    type Value = IpNetwork;

    fn base(&self) -> &FieldBase<IpNetwork> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FieldBase<IpNetwork> {
        &mut self.base
    }

    /// Typed input is checked for host bits just like parsed text.
    fn to_value(
        &self,
        input: AddressInput<IpNetwork>,
    ) -> Result<Option<IpNetwork>, ValidationError> {
        let Some(network) = resolve_network(input, "cidr")? else {
            return Ok(None);
        };

        if let Err(err) = ip::validate_network_base(&network) {
            debug!(field = "cidr", %network, base = %err.base, "rejected network with host bits set");
            return Err(self.base.error(
                ErrorKind::Constraint,
                ErrorCode::HostBits,
                &network.to_string(),
            ));
        }

        Ok(Some(network))
    }
}
