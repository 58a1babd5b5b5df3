//! Shared building blocks for the address form fields.
//!
//! * **[`network`]**: thin helpers over `pnet`'s address types (parsing, the
//!   CIDR host-bit rule, MAC dialects).
//! * **[`html`]**: attribute maps and escaping for widget markup.
//! * **[`config`]**: per-field options and error codes.

pub mod config;
pub mod html;
pub mod network;
