use netforms_common::config::{ErrorCode, FieldConfig};
use netforms_common::html::Attrs;
use netforms_common::network::mac::{HardwareAddress, MacDialect};
use tracing::{debug, trace};

use crate::error::{ErrorKind, ValidationError};
use crate::field::{FieldBase, FormField};
use crate::input::AddressInput;

pub const INVALID: &str = "Enter a valid MAC address.";

/// Length of `xx:xx:xx:xx:xx:xx`.
pub const MAX_LENGTH: usize = 17;

const DIALECT: MacDialect = MacDialect::UnixCommon;

/// Accepts a MAC address in any common notation and normalises it to
/// lowercase colon-separated octets.
#[derive(Debug, Clone)]
pub struct MacAddressField {
    base: FieldBase<HardwareAddress>,
}

impl MacAddressField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            base: FieldBase::new(config, &[(ErrorCode::Invalid, INVALID)]),
        }
    }
}

impl Default for MacAddressField {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}

impl FormField for MacAddressField {
    type Value = HardwareAddress;

    fn base(&self) -> &FieldBase<HardwareAddress> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FieldBase<HardwareAddress> {
        &mut self.base
    }

    /// Parser detail is only logged; users always see the generic message.
    fn to_value(
        &self,
        input: AddressInput<HardwareAddress>,
    ) -> Result<Option<HardwareAddress>, ValidationError> {
        let text: String = match input {
            AddressInput::Absent => return Ok(None),
            AddressInput::Typed(addr) => return Ok(Some(addr)),
            AddressInput::Raw(text) => text,
        };

        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        match HardwareAddress::parse(text, DIALECT) {
            Ok(addr) => {
                trace!(field = "mac", %addr, "accepted MAC address");
                Ok(Some(addr))
            }
            Err(err) => {
                debug!(field = "mac", input = text, error = %err, "rejected MAC address");
                Err(self.base.error(ErrorKind::Parse, ErrorCode::Invalid, text))
            }
        }
    }

    fn widget_attrs(&self) -> Attrs {
        Attrs::new().with("maxlength", MAX_LENGTH.to_string())
    }
}
