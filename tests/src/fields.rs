use netforms_core::{
    AddressInput, CidrAddressField, ErrorCode, ErrorKind, FieldConfig, FormField,
    HardwareAddress, InetAddressField, IpNetwork, MacAddressField, MacDialect, ValidationError,
};

use pnet::util::MacAddr;

use super::util::{BLANK, hw, v4, v6};

/*************************************************************
                     Blank and absent input
**************************************************************/

#[test]
fn blank_input_is_none_for_every_field() {
    let inet = InetAddressField::default();
    let cidr = CidrAddressField::default();
    let mac = MacAddressField::default();

    for blank in BLANK {
        assert_eq!(inet.to_value((*blank).into()), Ok(None), "{blank:?}");
        assert_eq!(cidr.to_value((*blank).into()), Ok(None), "{blank:?}");
        assert_eq!(mac.to_value((*blank).into()), Ok(None), "{blank:?}");
    }

    assert_eq!(inet.to_value(AddressInput::Absent), Ok(None));
    assert_eq!(cidr.to_value(None::<String>.into()), Ok(None));
    assert_eq!(mac.to_value(AddressInput::default()), Ok(None));
}

#[test]
fn blank_input_on_required_field_fails_clean_only() {
    let field = CidrAddressField::new(FieldConfig::required());

    assert_eq!(field.to_value("".into()), Ok(None));

    let err = field.clean("".into()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Required);
    assert_eq!(err.code(), Some(ErrorCode::Required));
    assert_eq!(err.message(), "This field is required.");
}

/*************************************************************
                          Host bits
**************************************************************/

#[test]
fn host_bits_fail_cidr_but_not_inet() {
    let inet = InetAddressField::default();
    let cidr = CidrAddressField::default();

    for s in ["10.0.0.5/24", "192.168.1.1/16", "2001:db8::1/64", "172.16.0.1/31"] {
        assert!(inet.to_value(s.into()).unwrap().is_some(), "{s}");

        let err = cidr.to_value(s.into()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Constraint, "{s}");
        assert!(err.message().contains(s), "{s}: {}", err.message());
    }
}

#[test]
fn host_networks_are_valid_cidr() {
    let cidr = CidrAddressField::default();

    assert_eq!(cidr.to_value("10.0.0.5".into()), Ok(Some(v4(10, 0, 0, 5, 32))));
    assert_eq!(cidr.to_value("::1".into()), Ok(Some(v6("::1", 128))));
}

/*************************************************************
                        Malformed input
**************************************************************/

#[test]
fn malformed_ip_carries_parser_text() {
    let inet = InetAddressField::default();
    let cidr = CidrAddressField::default();

    for s in ["not-an-ip", "10.0.0.256", "10.0.0.1/33", "1.2.3.4/x", "::g"] {
        let parser_text = s.parse::<IpNetwork>().unwrap_err().to_string();

        let err = inet.to_value(s.into()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.message(), parser_text);

        let err = cidr.to_value(s.into()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.message(), parser_text);
    }
}

#[test]
fn malformed_mac_has_fixed_message() {
    let mac = MacAddressField::default();

    for s in ["not-an-ip", "00:11:22:33:44", "00:11:22:33:44:55:66", "zz-zz-zz-zz-zz-zz"] {
        let err = mac.to_value(s.into()).unwrap_err();
        assert_eq!(err.to_string(), "Enter a valid MAC address.", "{s}");
    }
}

/*************************************************************
                          MAC dialects
**************************************************************/

#[test]
fn mac_dialects_normalise_to_colon_hex() {
    let mac = MacAddressField::default();

    for s in [
        "00-11-22-33-44-55",
        "0011.2233.4455",
        "00:11:22:33:44:55",
        "0:11:22:33:44:55",
        "001122334455",
        "001122:334455",
        "001122-334455",
        "0011:2233:4455",
        "0011-2233-4455",
        "01122334455",
    ] {
        let addr = mac.to_value(s.into()).unwrap().unwrap();
        assert_eq!(addr.to_string(), "00:11:22:33:44:55", "{s}");
        assert_eq!(addr.addr(), MacAddr::new(0, 0x11, 0x22, 0x33, 0x44, 0x55), "{s}");
    }

    let addr = mac.to_value("AA-BB-CC-DD-EE-FF".into()).unwrap().unwrap();
    assert_eq!(addr.to_string(), "aa:bb:cc:dd:ee:ff");
}

/*************************************************************
                          Typed input
**************************************************************/

#[test]
fn typed_input_passes_through() {
    let net = v4(10, 0, 0, 5, 24);
    assert_eq!(InetAddressField::default().to_value(net.into()), Ok(Some(net)));

    let base = v4(10, 0, 0, 0, 24);
    assert_eq!(CidrAddressField::default().to_value(base.into()), Ok(Some(base)));

    let addr: HardwareAddress = hw([0xde, 0xad, 0xbe, 0xef, 0, 1], MacDialect::Cisco);
    let out = MacAddressField::default().to_value(addr.into()).unwrap().unwrap();
    assert_eq!(out, addr);
    assert_eq!(out.dialect(), MacDialect::Cisco);
}

#[test]
fn typed_input_is_still_checked_for_host_bits() {
    let err = CidrAddressField::default()
        .to_value(v4(10, 0, 0, 5, 24).into())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Constraint);
    assert_eq!(err.code(), Some(ErrorCode::HostBits));
}

/*************************************************************
                     Validators and messages
**************************************************************/

#[test]
fn extra_validators_run_after_conversion() {
    let field = InetAddressField::default().with_validator(|net: &IpNetwork| {
        if net.is_ipv4() {
            Ok(())
        } else {
            Err(ValidationError::new(ErrorKind::Constraint, "IPv4 only."))
        }
    });

    assert_eq!(field.clean("10.1.0.0/16".into()), Ok(Some(v4(10, 1, 0, 0, 16))));
    assert_eq!(field.clean("".into()), Ok(None));

    let err = field.clean("fe80::/10".into()).unwrap_err();
    assert_eq!(err.message(), "IPv4 only.");

    // to_value does not run validators
    assert!(field.to_value("fe80::/10".into()).is_ok());
}

#[test]
fn message_overrides_apply() {
    let config = FieldConfig::required()
        .with_message(ErrorCode::Required, "MAC needed.")
        .with_message(ErrorCode::Invalid, "'{value}' is not a MAC.");
    let field = MacAddressField::new(config);

    assert_eq!(field.clean(AddressInput::Absent).unwrap_err().message(), "MAC needed.");
    assert_eq!(
        field.clean("xyz".into()).unwrap_err().message(),
        "'xyz' is not a MAC."
    );
}

#[test]
fn fields_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<InetAddressField>();
    assert_send_sync::<CidrAddressField>();
    assert_send_sync::<MacAddressField>();

    let field = std::sync::Arc::new(CidrAddressField::default());
    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            let field = field.clone();
            std::thread::spawn(move || field.clean(format!("10.{i}.0.0/16").into()))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let net = handle.join().unwrap().unwrap().unwrap();
        assert_eq!(net, v4(10, i as u8, 0, 0, 16));
    }
}
