//! # Address Form Fields
//!
//! Converts user-supplied form text into typed network values:
//!
//! * **[`InetAddressField`]**: any IP address or network.
//! * **[`CidrAddressField`]**: a network base address (host bits zero).
//! * **[`MacAddressField`]**: a 48-bit MAC address, normalised to `xx:xx:xx:xx:xx:xx`.
//!
//! Each field implements [`FormField`]. `to_value` returns `Ok(None)` for
//! blank input and a [`ValidationError`] for anything it cannot accept;
//! `clean` adds the required check and any extra validators. Parsing itself
//! is delegated to `pnet`.

pub mod error;
pub mod field;
pub mod fields;
pub mod input;
pub mod messages;
pub mod widget;

pub use error::{ErrorKind, ValidationError};
pub use field::{FieldBase, FormField, Validator};
pub use fields::{CidrAddressField, InetAddressField, MacAddressField};
pub use input::AddressInput;
pub use widget::NetInput;

pub use netforms_common::config::{ErrorCode, FieldConfig};
pub use netforms_common::html::Attrs;
pub use netforms_common::network::mac::{HardwareAddress, MacDialect};
pub use pnet::ipnetwork::IpNetwork;
