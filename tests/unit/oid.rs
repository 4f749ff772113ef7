//! Unit tests for the Object Identifier type.

use snmp_endpoint::oid::ObjectIdentifier;

#[test]
fn parses_dotted_decimal() {
    let oid: ObjectIdentifier = "1.3.6.1.2.1.1.5.0".parse().unwrap();
    assert_eq!(oid.components(), &[1, 3, 6, 1, 2, 1, 1, 5, 0]);
}

#[test]
fn display_round_trips_parse() {
    let oid: ObjectIdentifier = "1.3.6.1.4.1.12345".parse().unwrap();
    assert_eq!(oid.to_string(), "1.3.6.1.4.1.12345");
}

#[test]
fn rejects_empty_string() {
    assert!("".parse::<ObjectIdentifier>().is_err());
}

#[test]
fn rejects_single_component() {
    assert!("1".parse::<ObjectIdentifier>().is_err());
}

#[test]
fn rejects_non_numeric_component() {
    assert!("1.3.6.x".parse::<ObjectIdentifier>().is_err());
}

#[test]
fn starts_with_matches_prefix() {
    let sys_name: ObjectIdentifier = "1.3.6.1.2.1.1.5".parse().unwrap();
    let instance = sys_name.child(0);
    assert!(instance.starts_with(&sys_name));
    assert!(!sys_name.starts_with(&instance));
}

#[test]
fn child_appends_one_component() {
    let if_descr: ObjectIdentifier = "1.3.6.1.2.1.2.2.1.2".parse().unwrap();
    let instance = if_descr.child(1);
    assert_eq!(instance.components(), &[1, 3, 6, 1, 2, 1, 2, 2, 1, 2, 1]);
}

#[test]
fn from_array_matches_parsed_equivalent() {
    let from_array: ObjectIdentifier = [1, 3, 6, 1, 2, 1, 1, 1, 0].into();
    let from_str: ObjectIdentifier = "1.3.6.1.2.1.1.1.0".parse().unwrap();
    assert_eq!(from_array, from_str);
}
