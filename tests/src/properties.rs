use std::net::{Ipv4Addr, Ipv6Addr};

use netforms_core::{CidrAddressField, FormField, InetAddressField, IpNetwork, MacAddressField, MacDialect};
use proptest::prelude::*;

use super::util::hw;

fn v4_base(addr: u32, prefix: u8) -> Ipv4Addr {
    let mask: u32 = if prefix == 0 { 0 } else { u32::MAX << (32 - prefix) };
    Ipv4Addr::from(addr & mask)
}

proptest! {
    #[test]
    fn inet_round_trips_v4(addr in any::<u32>(), prefix in 0u8..=32) {
        let text = format!("{}/{}", Ipv4Addr::from(addr), prefix);
        let net = InetAddressField::default().to_value(text.as_str().into()).unwrap().unwrap();

        prop_assert_eq!(net.to_string(), text.clone());
        prop_assert_eq!(net.to_string().parse::<IpNetwork>().unwrap(), net);
    }

    #[test]
    fn inet_round_trips_v6(addr in any::<u128>(), prefix in 0u8..=128) {
        let text = format!("{}/{}", Ipv6Addr::from(addr), prefix);
        let net = InetAddressField::default().to_value(text.as_str().into()).unwrap().unwrap();

        prop_assert_eq!(net.to_string(), text);
    }

    #[test]
    fn cidr_accepts_exactly_the_base_address(addr in any::<u32>(), prefix in 0u8..=32) {
        let base = v4_base(addr, prefix);
        let text = format!("{}/{}", Ipv4Addr::from(addr), prefix);
        let result = CidrAddressField::default().to_value(text.as_str().into());

        if base == Ipv4Addr::from(addr) {
            prop_assert_eq!(result.unwrap().unwrap().to_string(), text);
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn mac_dialects_agree(octets in any::<[u8; 6]>()) {
        let field = MacAddressField::default();
        let canonical = hw(octets, MacDialect::UnixCommon).to_string();

        for dialect in [
            MacDialect::UnixCommon,
            MacDialect::Unix,
            MacDialect::Eui48,
            MacDialect::Cisco,
            MacDialect::Bare,
            MacDialect::Pgsql,
        ] {
            let text = hw(octets, dialect).to_string();
            let addr = field.to_value(text.as_str().into()).unwrap().unwrap();
            prop_assert_eq!(addr.to_string(), canonical.clone());
        }
    }
}
