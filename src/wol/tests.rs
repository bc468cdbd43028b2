use super::*;
use std::net::Ipv4Addr;

const SAMPLE_MAC: [u8; 6] = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55];

#[test]
fn test_magic_packet_layout() {
    for bytes in [SAMPLE_MAC, [0xff; 6], [0x00; 6], [0x00, 0x0c, 0x29, 0xa8, 0x92, 0xf4]] {
        let mac = MacAddress::new(bytes);
        let packet = MagicPacket::new(&mac);

        assert_eq!(packet.len(), MAGIC_PACKET_LEN);
        assert_eq!(packet.len(), 102);
        assert_eq!(&packet.as_bytes()[..6], &[0xff; 6]);
        for chunk in packet.as_bytes()[6..].chunks(6) {
            assert_eq!(chunk, &bytes);
        }
        assert_eq!(packet.mac(), &mac);
    }
}

#[test]
fn test_magic_packet_has_no_padding() {
    let packet = MagicPacket::new(&MacAddress::new(SAMPLE_MAC));
    let bytes = packet.into_bytes();

    assert_eq!(bytes[0], 0xff);
    assert_eq!(bytes[bytes.len() - 1], 0x55);
}

#[test]
fn test_is_valid_ipv4() {
    assert!(is_valid_ipv4("192.168.15.0"));
    assert!(is_valid_ipv4("0.0.0.0"));
    assert!(is_valid_ipv4("255.255.255.255"));
    assert!(is_valid_ipv4("10.000.01.1"));

    assert!(!is_valid_ipv4("192.168.15.999"));
    assert!(!is_valid_ipv4("192.168.15.256"));
    assert!(!is_valid_ipv4("192.168.15"));
    assert!(!is_valid_ipv4("192.168.15.0.1"));
    assert!(!is_valid_ipv4("192.168..0"));
    assert!(!is_valid_ipv4("192.168.15."));
    assert!(!is_valid_ipv4(" 192.168.15.0"));
    assert!(!is_valid_ipv4("192.168.15.0 "));
    assert!(!is_valid_ipv4("192.168.15.+1"));
    assert!(!is_valid_ipv4("192.168.15.0001"));
    assert!(!is_valid_ipv4("a.b.c.d"));
    assert!(!is_valid_ipv4(""));
}

#[test]
fn test_network_address_from_str() {
    let network: NetworkAddress = "192.168.15.7".parse().unwrap();
    assert_eq!(network.ip(), Ipv4Addr::new(192, 168, 15, 7));

    let err = "192.168.15".parse::<NetworkAddress>().unwrap_err();
    assert!(matches!(err, crate::WakeError::InvalidNetwork(_)));
}

#[test]
fn test_resolve_broadcast() {
    let network: NetworkAddress = "192.168.15.0".parse().unwrap();
    assert_eq!(resolve_broadcast(network).to_string(), "192.168.15.255");

    let network: NetworkAddress = "10.1.2.42".parse().unwrap();
    assert_eq!(resolve_broadcast(network).ip(), Ipv4Addr::new(10, 1, 2, 255));
}

#[test]
fn test_parse_mac_encodings() {
    let expected = MacAddress::new([0, 17, 34, 51, 68, 85]);

    assert_eq!(parse_mac("00:11:22:33:44:55").unwrap(), expected);
    assert_eq!(parse_mac("001122334455").unwrap(), expected);
    assert_eq!(parse_mac("00-11-22-33-44-55").unwrap(), expected);
    assert_eq!(parse_mac("00.11.22.33.44.55").unwrap(), expected);
}

#[test]
fn test_parse_mac_is_case_insensitive() {
    let expected = MacAddress::new([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);

    assert_eq!(parse_mac("AA:BB:CC:DD:EE:FF").unwrap(), expected);
    assert_eq!(parse_mac("aabbccDDEEff").unwrap(), expected);
}

#[test]
fn test_parse_mac_rejects_malformed() {
    for input in [
        "0-11-22-33-44-55",
        "00:11:22:33:44",
        "00:11:22:33:44:55:66",
        "00:11-22:33:44:55",
        "00:11:22:33:44:5g",
        "0011223344",
        "00112233445566",
        "0011.2233.4455",
        "00 11 22 33 44 55",
        "+0:11:22:33:44:55",
        "00:11:22:33:44:+5",
        "",
    ] {
        assert!(!is_valid_mac(input), "{input} should be rejected");
        let err = parse_mac(input).unwrap_err();
        assert!(matches!(err, crate::WakeError::InvalidMac(_)));
    }
}

#[test]
fn test_parse_mac_rejects_non_ascii() {
    assert!(parse_mac("00:11:22:33:4é5").is_err());
    assert!(parse_mac("0011223344é").is_err());
}

#[test]
fn test_mac_display() {
    let mac: MacAddress = "AA-BB-CC-00-11-22".parse().unwrap();
    assert_eq!(mac.to_string(), "aa:bb:cc:00:11:22");
}
