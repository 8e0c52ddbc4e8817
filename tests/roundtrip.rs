use basemoji::decode::decoded_len;
use basemoji::encode::encoded_len;
use basemoji::{DecodeConfig, Encoding, STD_ALPHABET, STD_ENCODING};
use proptest::prelude::*;

const SAMPLES: &[&str] = &[
    "",
    "this is some test case",
    "اللُّغَة العَرَبِيّة هي أكثرُ اللغاتِ السامية تحدثاً، وإحدى أكثر اللغات \
     انتشاراً في العالم، يتحدثُها أكثرُ من",
    "漢語，又稱中文、唐話[2]，或被視為一個語族，或被視為隸屬於漢藏語系漢語族之一種語言。",
];

fn reversed_std() -> Encoding {
    let alphabet: String = STD_ALPHABET.chars().rev().collect();
    Encoding::new(&alphabet).unwrap()
}

fn ascii() -> Encoding {
    Encoding::new(
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
    )
    .unwrap()
}

#[test]
fn samples_roundtrip() {
    for sample in SAMPLES {
        let text = STD_ENCODING.encode_to_string(sample.as_bytes());
        assert_eq!(text.chars().count(), encoded_len(sample.len()));
        let bytes = STD_ENCODING.decode_str(&text).unwrap();
        assert_eq!(bytes, sample.as_bytes());
    }
}

#[test]
fn empty() {
    assert_eq!(STD_ENCODING.encode_to_string(b""), "");
    assert_eq!(STD_ENCODING.decode_str("").unwrap(), b"");
    assert_eq!(STD_ENCODING.decode(&mut [0_u8; 0], b""), Ok(0));
}

#[test]
fn test_case_sentence() {
    let src = b"this is some test case";
    let text = STD_ENCODING.encode_to_string(src);
    assert_eq!(text.chars().count(), 30);
    assert_eq!(basemoji::decode_str(&text).unwrap(), src);
}

#[test]
fn single_byte() {
    let text = basemoji::encode_to_string(&[0x41]);
    assert_eq!(text.chars().count(), 2);
    assert_eq!(basemoji::decode_str(&text).unwrap(), [0x41]);
}

#[test]
fn ascii_alphabet_matches_unpadded_base64url() {
    let enc = ascii();
    assert_eq!(enc.encode_to_string(b"Man"), "TWFu");
    assert_eq!(enc.encode_to_string(b"Ma"), "TWE");
    assert_eq!(enc.encode_to_string(b"M"), "TQ");
    assert_eq!(enc.encode_to_string(&[0xfb, 0xff]), "-_8");
    assert_eq!(enc.decode_str("aGVsbG8").unwrap(), b"hello");
}

#[test]
fn shared_between_threads() {
    let handles: Vec<_> = (0..4_u8)
        .map(|i| {
            std::thread::spawn(move || {
                let data = vec![i; 100];
                let text = STD_ENCODING.encode_to_string(&data);
                STD_ENCODING.decode_str(&text).unwrap() == data
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

proptest! {
    #[test]
    fn prop_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        for enc in [STD_ENCODING.clone(), reversed_std(), ascii()] {
            let text = enc.encode_to_string(&data);
            prop_assert_eq!(enc.decode_str(&text).unwrap(), data.clone());
        }
    }

    #[test]
    fn prop_length_law(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let n = data.len();
        let symbols = STD_ENCODING.encode_chars(&data).count();
        prop_assert_eq!(symbols, 4 * (n / 3) + [0, 2, 3][n % 3]);
        prop_assert_eq!(symbols, encoded_len(n));
        prop_assert_eq!(decoded_len(symbols), Some(n));
        prop_assert_eq!(STD_ENCODING.encoded_utf8_len(&data), 4 * symbols);
    }

    #[test]
    fn prop_deterministic(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let a = STD_ENCODING.encode_to_string(&data);
        let b = STD_ENCODING.encode_to_string(&data);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(STD_ENCODING.decode_str(&a), STD_ENCODING.decode_str(&b));
    }

    #[test]
    fn prop_alphabet_independence(
        data in proptest::collection::vec(any::<u8>(), 1..256),
    ) {
        let other = reversed_std();
        let std_text = STD_ENCODING.encode_to_string(&data);
        let other_text = other.encode_to_string(&data);
        prop_assert_ne!(&std_text, &other_text);
        prop_assert_eq!(STD_ENCODING.decode_str(&std_text).unwrap(), data.clone());
        prop_assert_eq!(other.decode_str(&other_text).unwrap(), data);
    }

    #[test]
    fn prop_encode_truncates(
        data in proptest::collection::vec(any::<u8>(), 0..128),
        cap in 0_usize..600,
    ) {
        let full = STD_ENCODING.encode_to_string(&data);
        let mut dst = vec![0; cap];
        let written = STD_ENCODING.encode(&mut dst, &data);
        prop_assert_eq!(written, cap.min(full.len()));
        prop_assert_eq!(&dst[..written], &full.as_bytes()[..written]);
    }

    #[test]
    fn prop_decode_into_buffer(
        data in proptest::collection::vec(any::<u8>(), 0..128),
        cap in 0_usize..200,
    ) {
        let text = STD_ENCODING.encode_to_string(&data);
        let mut dst = vec![0; cap];
        let written = STD_ENCODING.decode(&mut dst, text.as_bytes()).unwrap();
        prop_assert_eq!(written, cap.min(data.len()));
        prop_assert_eq!(&dst[..written], &data[..written]);
    }

    #[test]
    fn prop_relaxed_agrees_on_valid_input(
        data in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let text = STD_ENCODING.encode_to_string(&data);
        prop_assert_eq!(
            STD_ENCODING.decode_str_with(&text, DecodeConfig::relaxed()),
            STD_ENCODING.decode_str(&text),
        );
    }
}
