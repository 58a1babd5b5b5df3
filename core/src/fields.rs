pub mod cidr;
pub mod inet;
pub mod mac;

pub use cidr::CidrAddressField;
pub use inet::InetAddressField;
pub use mac::MacAddressField;
