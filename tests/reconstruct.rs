// tests/reconstruct.rs
// End-to-end reconstruction from JSON test cases under tests/data
use std::fs;
use std::path::Path;

use num_bigint::{BigInt, BigUint};
use shamir_rational::share::ShareInput;
use shamir_rational::{reconstruct_all, reconstruct_secret, Error, Method, Rational};

fn log_init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn load(name: &str) -> ShareInput {
    let path = Path::new("tests/data").join(name);
    let data = fs::read_to_string(&path).expect("cannot open test case");
    serde_json::from_str(&data).expect("test case JSON malformed")
}

#[test]
fn sample_case() {
    log_init();
    let input = load("sample.json");
    let set = input.point_set().unwrap();
    assert_eq!(set.threshold(), 3);
    assert_eq!(set.points().len(), 4);
    for method in Method::ALL {
        assert_eq!(
            reconstruct_secret(&set, method).unwrap(),
            Rational::from(3u64),
            "method {method}"
        );
    }
}

#[test]
fn large_mixed_base_case() {
    log_init();
    let expected: BigUint = fs::read_to_string("tests/data/large.secret")
        .expect("cannot open expected secret")
        .trim()
        .parse()
        .unwrap();
    let input = load("large.json");
    let set = input.point_set().unwrap();
    assert_eq!(set.threshold(), 7);
    let rec = reconstruct_all(&set).unwrap();
    assert!(rec.agree(), "{rec:?}");
    assert_eq!(rec.secret().unwrap().to_integer(), Some(BigInt::from(expected)));
}

#[test]
fn zero_index_case() {
    let set = load("zero_index.json").point_set().unwrap();
    let rec = reconstruct_all(&set).unwrap();
    assert_eq!(rec.secret().unwrap(), &Rational::from(5u64));
}

#[test]
fn fractional_case() {
    let set = load("fractional.json").point_set().unwrap();
    let secret = reconstruct_all(&set).unwrap().secret().unwrap().clone();
    assert_eq!(secret.to_string(), "1/2");
    assert_eq!(secret.to_integer(), None);
}

#[test]
fn duplicate_index_case() {
    assert_eq!(
        load("duplicate_index.json").point_set(),
        Err(Error::DuplicateAbscissa {
            x: BigUint::from(1u8)
        })
    );
}

#[test]
fn insufficient_case() {
    assert_eq!(
        load("insufficient.json").point_set(),
        Err(Error::InsufficientPoints {
            needed: 3,
            available: 2
        })
    );
}

#[test]
fn bad_digit_case() {
    assert_eq!(
        load("bad_digit.json").point_set(),
        Err(Error::InvalidDigit {
            digit: '9',
            position: 1,
            radix: 8
        })
    );
}

#[test]
fn metadata_entries_are_ignored() {
    let input = load("metadata.json");
    assert_eq!(input.metadata.len(), 3);
    assert_eq!(input.metadata["name"], serde_json::json!("case-1"));
    let set = input.point_set().unwrap();
    let rec = reconstruct_all(&set).unwrap();
    assert_eq!(rec.secret().unwrap(), &Rational::from(3u64));
}

#[test]
fn malformed_entry_is_rejected_by_parser() {
    let json = r#"{ "keys": { "n": 1, "k": 1 }, "1": { "base": "10" } }"#;
    assert!(serde_json::from_str::<ShareInput>(json).is_err());
}
