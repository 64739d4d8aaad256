//! Proptest generators for property-based testing.

use proptest::prelude::*;

use signpost_core::{Address, Keypair, PublicKey, RecordBuilder, SignedRecord};

/// Generate a random keypair.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_map(|seed| Keypair::from_seed(&seed))
}

/// Generate a random public key (with a known signing key behind it).
pub fn public_key() -> impl Strategy<Value = PublicKey> {
    keypair().prop_map(|kp| kp.public_key())
}

/// Generate a random valid address.
pub fn address() -> impl Strategy<Value = Address> {
    public_key().prop_map(|pk| pk.address())
}

/// Generate canonical-form address text from arbitrary bytes.
///
/// Always 66 chars of `0x` + hex, but the bytes may not decode to a valid
/// curve point. Useful for exercising parse and verification failure paths.
pub fn address_text() -> impl Strategy<Value = String> {
    any::<[u8; 32]>().prop_map(|bytes| format!("0x{}", hex::encode(bytes)))
}

/// Generate a display-style timestamp string.
pub fn timestamp() -> impl Strategy<Value = String> {
    "20[0-9]{2}-[01][0-9]-[0-3][0-9] [0-2][0-9]:[0-5][0-9]:[0-5][0-9]".prop_map(String::from)
}

/// Generate a printable value of at most `max_len` bytes.
pub fn value(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(0x20u8..0x7f, 0..=max_len)
        .prop_map(|bytes| String::from_utf8(bytes).unwrap_or_default())
}

/// Generate a display name.
pub fn display_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9 -]{0,24}".prop_map(String::from)
}

/// Parameters for generating a signed record.
#[derive(Debug, Clone)]
pub struct RecordParams {
    pub seed: [u8; 32],
    pub display_name: String,
    pub timestamp: String,
    pub value: String,
}

impl Arbitrary for RecordParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: ()) -> Self::Strategy {
        (any::<[u8; 32]>(), display_name(), timestamp(), value(256))
            .prop_map(|(seed, display_name, timestamp, value)| RecordParams {
                seed,
                display_name,
                timestamp,
                value,
            })
            .boxed()
    }
}

/// Build the signed record described by the params.
pub fn record_from_params(params: &RecordParams) -> SignedRecord {
    let keypair = Keypair::from_seed(&params.seed);
    RecordBuilder::new(params.display_name.clone())
        .timestamp(params.timestamp.clone())
        .value(params.value.clone())
        .sign(&keypair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use signpost_core::{record_is_valid, verify_record};
    use signpost_store::{PublishStore, MAX_HISTORY_SIZE};

    proptest! {
        #[test]
        fn generated_records_always_verify(params: RecordParams) {
            let record = record_from_params(&params);
            prop_assert!(verify_record(&record).is_ok());
        }

        #[test]
        fn signing_is_deterministic(params: RecordParams) {
            let r1 = record_from_params(&params);
            let r2 = record_from_params(&params);
            prop_assert_eq!(r1, r2);
        }

        #[test]
        fn json_roundtrip_preserves_validity(params: RecordParams) {
            let record = record_from_params(&params);
            let body = serde_json::to_vec(&record).unwrap();
            let decoded = signpost_core::wire::from_json(&body).unwrap();
            prop_assert_eq!(&decoded, &record);
            prop_assert!(record_is_valid(&decoded));
        }

        #[test]
        fn any_flipped_signature_byte_fails(params: RecordParams, index in 2usize..130, bit in 0u8..4) {
            let mut record = record_from_params(&params);
            // Rotate the hex digit at `index`; skip the 0x prefix.
            let mut chars: Vec<char> = record.signature.chars().collect();
            let digit = chars[index].to_digit(16).unwrap();
            let flipped = (digit ^ (1 << bit)) % 16;
            chars[index] = char::from_digit(flipped, 16).unwrap();
            let tampered: String = chars.into_iter().collect();
            prop_assume!(tampered != record.signature);
            record.signature = tampered;
            prop_assert!(!record_is_valid(&record));
        }

        #[test]
        fn history_never_exceeds_bound(params: RecordParams, values in prop::collection::vec(value(32), 1..30)) {
            let store = PublishStore::new();
            let keypair = Keypair::from_seed(&params.seed);

            for v in &values {
                let record = RecordBuilder::new(params.display_name.clone())
                    .timestamp(params.timestamp.clone())
                    .value(v.clone())
                    .sign(&keypair);
                store.set(record).unwrap();
            }

            let history = store.history(&keypair.address());
            prop_assert!(history.len() <= MAX_HISTORY_SIZE);
            prop_assert!(history.len() <= values.len());
            // The tail of the write sequence, in order.
            let start = values.len().saturating_sub(MAX_HISTORY_SIZE);
            prop_assert_eq!(&history[..], &values[start..]);
        }

        #[test]
        fn arbitrary_address_text_parses_canonically(text in address_text()) {
            let parsed = Address::parse(&text).unwrap();
            let lowered = text.to_lowercase();
            prop_assert_eq!(parsed.as_str(), lowered.as_str());
        }
    }
}
