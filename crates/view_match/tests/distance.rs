//! Known distances, absent arguments and mixed text/bytes inputs.

use view_match::{levenshtein_distance, MatchError, Sequence};

fn distance<'a, 'b>(a: impl Into<Sequence<'a>>, b: impl Into<Sequence<'b>>) -> usize {
    levenshtein_distance(Some(a.into()), Some(b.into())).unwrap()
}

// ============================================================================
// KNOWN DISTANCES
// ============================================================================

#[test]
fn known_text_distances() {
    let cases = [
        ("", "", 0),
        ("", "a", 1),
        ("aaapppp", "", 7),
        ("frog", "fog", 1),
        ("fly", "ant", 3),
        ("elephant", "hippo", 7),
        ("hippo", "elephant", 7),
        ("hippo", "zzzzzzzz", 8),
        ("hello", "hallo", 1),
    ];

    for (a, b, expected) in cases {
        assert_eq!(distance(a, b), expected, "distance({:?}, {:?})", a, b);
    }
}

#[test]
fn empty_bytes() {
    assert_eq!(distance(b"", b""), 0);
}

// ============================================================================
// MIXED REPRESENTATIONS
// ============================================================================

#[test]
fn mixed_text_and_bytes() {
    assert_eq!(distance("hippo", b"zzzzzzzz"), 8);
    assert_eq!(distance(b"hippo", "zzzzzzzz"), 8);
    assert_eq!(distance(b"hippo", b"zzzzzzzz"), 8);
    assert_eq!(distance("hippo", "zzzzzzzz"), 8);
}

#[test]
fn mixed_multibyte_text_compares_chars() {
    let bytes = "über".as_bytes().to_vec();
    assert_eq!(distance("uber", bytes.clone()), 1);
    assert_eq!(distance(bytes, "uber"), 1);
}

#[test]
fn owned_and_borrowed_inputs_agree() {
    let label = String::from("Wi-Fi");
    assert_eq!(distance(&label, "WiFi"), 1);
    assert_eq!(distance(label, String::from("WiFi")), 1);
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn absent_first_argument() {
    let err = levenshtein_distance(None, Some("any".into())).unwrap_err();
    assert!(matches!(err, MatchError::InvalidArgument(_)));
}

#[test]
fn absent_second_argument() {
    let err = levenshtein_distance(Some("any".into()), None).unwrap_err();
    assert!(matches!(err, MatchError::InvalidArgument(_)));
    assert!(err.to_string().starts_with("Invalid argument"));
}

#[test]
fn invalid_utf8_against_text() {
    let err = levenshtein_distance(Some(vec![0xc3u8, 0x28].into()), Some("any".into())).unwrap_err();
    assert!(matches!(err, MatchError::InvalidEncoding(_)));
}
