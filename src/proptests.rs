use super::*;

use proptest::prelude::*;
use std::io::Cursor;

fn naive_split(data: &[u8], sep: u8) -> Vec<Vec<u8>> {
    let mut records: Vec<Vec<u8>> = data.split(|&b| b == sep).map(<[u8]>::to_vec).collect();
    // split() yields one empty trailing piece when the data ends with a
    // separator; the tokenizer does not emit a record there.
    if data.is_empty() || data.last() == Some(&sep) {
        records.pop();
    }
    records
}

fn tokenize(data: &[u8], sep: Separator, capacity: usize) -> Vec<Vec<u8>> {
    let mut tokenizer = KeyTokenizer::with_capacity(Cursor::new(data.to_vec()), sep, capacity);
    let mut out = Vec::new();
    while let Some(key) = tokenizer.next_key().expect("tokenize") {
        out.push(key.to_vec());
    }
    out
}

fn key_strategy() -> impl Strategy<Value = Vec<u8>> {
    // Any byte except the two separator candidates, up to 24 bytes.
    proptest::collection::vec((1u8..=255).prop_filter("separator", |&b| b != b'\n'), 0..24)
}

proptest! {
    #[test]
    fn tokenization_matches_naive_split(
        keys in proptest::collection::vec(key_strategy(), 0..64),
        capacity in 32usize..256,
        trailing_separator in any::<bool>(),
    ) {
        let mut data = Vec::new();
        for (i, key) in keys.iter().enumerate() {
            data.extend_from_slice(key);
            if i + 1 < keys.len() || trailing_separator {
                data.push(b'\n');
            }
        }

        let expected = naive_split(&data, b'\n');
        prop_assert_eq!(&tokenize(&data, Separator::Newline, capacity), &expected);
        // Buffer-size invariance: the default capacity yields the same records.
        prop_assert_eq!(&tokenize(&data, Separator::Newline, SCAN_BUFFER_SIZE), &expected);
    }

    #[test]
    fn slice_records_match_streaming(
        keys in proptest::collection::vec(key_strategy(), 0..32),
        capacity in 32usize..128,
    ) {
        let mut data = Vec::new();
        for key in &keys {
            data.extend_from_slice(key);
            data.push(b'\n');
        }
        let streamed = tokenize(&data, Separator::Newline, capacity);
        let sliced: Vec<Vec<u8>> = SliceRecords::new(&data, Separator::Newline)
            .map(<[u8]>::to_vec)
            .collect();
        prop_assert_eq!(streamed, sliced);
    }
}
