//! Tests for the base64 codec and data URL helpers

use super::*;

#[test]
fn test_encode_man() {
    assert_eq!(encode(&[0x4D, 0x61, 0x6E]), "TWFu");
}

#[test]
fn test_decode_man() {
    assert_eq!(decode("TWFu").unwrap(), vec![0x4D, 0x61, 0x6E]);
}

#[test]
fn test_encode_padding() {
    assert_eq!(encode(b""), "");
    assert_eq!(encode(b"M"), "TQ==");
    assert_eq!(encode(b"Ma"), "TWE=");
    assert_eq!(encode(b"foobar"), "Zm9vYmFy");
}

#[test]
fn test_encode_has_no_line_wrapping() {
    let data = vec![0xABu8; 1024];
    let text = encode(&data);
    assert!(!text.contains('\n'));
    assert_eq!(text.len(), 1368); // 1024 bytes -> 342 groups (last padded) * 4
}

#[test]
fn test_round_trip_varied_inputs() {
    let all_bytes: Vec<u8> = (0..=255).collect();
    let inputs: Vec<Vec<u8>> = vec![
        Vec::new(),
        vec![0],
        vec![0xFF, 0xFE],
        b"hello world".to_vec(),
        "こんにちは\r\nテスト\r\nです".as_bytes().to_vec(),
        all_bytes.clone(),
        all_bytes.iter().rev().cycle().take(1000).copied().collect(),
    ];
    for input in inputs {
        assert_eq!(decode(&encode(&input)).unwrap(), input);
    }
}

#[test]
fn test_decode_rejects_foreign_character() {
    let err = decode("TW!u").unwrap_err();
    assert_eq!(
        err,
        DecodeError::InvalidCharacter {
            character: '!',
            offset: 2
        }
    );
}

#[test]
fn test_decode_rejects_whitespace() {
    assert!(matches!(
        decode("TW u"),
        Err(DecodeError::InvalidCharacter { character: ' ', .. })
    ));
}

#[test]
fn test_decode_rejects_bad_length() {
    assert_eq!(
        decode("TWFuT"),
        Err(DecodeError::InvalidLength { length: 5 })
    );
    assert_eq!(decode("TQ"), Err(DecodeError::InvalidLength { length: 2 }));
}

#[test]
fn test_decode_rejects_missing_padding() {
    assert_eq!(decode("TWE"), Err(DecodeError::InvalidLength { length: 3 }));
}

#[test]
fn test_decode_ignores_trailing_bits() {
    // Same as the browser's atob: unused low bits of the last symbol are dropped
    assert_eq!(decode("TR==").unwrap(), b"M");
    assert_eq!(decode("TWF=").unwrap(), b"Ma");
}

#[test]
fn test_decoded_len() {
    assert_eq!(decoded_len(""), 0);
    assert_eq!(decoded_len("TQ=="), 1);
    assert_eq!(decoded_len("TWE="), 2);
    assert_eq!(decoded_len("TWFu"), 3);
    assert_eq!(decoded_len(&encode(&[7u8; 100])), 100);
}

#[test]
fn test_decode_rejects_padding_in_the_middle() {
    assert!(decode("TQ==TWFu").is_err());
}

#[test]
fn test_format_data_url() {
    assert_eq!(
        format_data_url("application/octet-stream", "TWFu"),
        "data:application/octet-stream;base64,TWFu"
    );
}

#[test]
fn test_parse_data_url() {
    let url = parse_data_url("data:text/plain;base64,TWFu").unwrap();
    assert_eq!(url.mime_type, "text/plain");
    assert_eq!(url.payload, "TWFu");
    assert_eq!(url.decode().unwrap(), b"Man");
}

#[test]
fn test_parse_data_url_empty_payload() {
    let url = parse_data_url("data:application/octet-stream;base64,").unwrap();
    assert_eq!(url.payload, "");
    assert!(url.decode().unwrap().is_empty());
}

#[test]
fn test_parse_data_url_rejects_other_forms() {
    assert!(matches!(
        parse_data_url("TWFu"),
        Err(DecodeError::NotDataUrl { .. })
    ));
    assert!(matches!(
        parse_data_url("data:text/plain,hello"),
        Err(DecodeError::NotDataUrl { .. })
    ));
}
