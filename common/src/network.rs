pub mod ip;
pub mod mac;
