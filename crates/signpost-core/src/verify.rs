//! Record verification: is a claimed write authentic and well-formed?
//!
//! Pure functions of their inputs. No shared state, no I/O, no panics:
//! malformed hex and undecodable keys are verification failures, never
//! propagated faults.

use crate::address::Address;
use crate::error::CoreError;
use crate::record::{SignedRecord, MAX_DATA_SIZE};

/// Check a record's structure and signature.
///
/// Performs, in order:
/// - address form check (66 chars, `0x` + 64 hex)
/// - signature form check (130 chars, `0x` + 128 hex)
/// - value size check (at most [`MAX_DATA_SIZE`])
/// - Ed25519 verification over `timestamp ++ value`
///
/// Size and shape are rejected before any cryptography runs.
pub fn verify_record(record: &SignedRecord) -> Result<(), CoreError> {
    let address = Address::parse(&record.address)?;
    let signature = record.signature_bytes()?;

    if record.value.len() > MAX_DATA_SIZE {
        return Err(CoreError::ValueTooLarge {
            len: record.value.len(),
            max: MAX_DATA_SIZE,
        });
    }

    let public_key = address.to_public_key()?;
    public_key.verify(&record.signed_message(), &signature)
}

/// Convenience predicate over [`verify_record`].
pub fn record_is_valid(record: &SignedRecord) -> bool {
    verify_record(record).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Keypair;
    use crate::record::RecordBuilder;

    fn make_record(value: &str) -> SignedRecord {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        RecordBuilder::new("test")
            .timestamp("2026-08-06 12:00:00")
            .value(value)
            .sign(&keypair)
    }

    #[test]
    fn test_valid_record_verifies() {
        let record = make_record("hello");
        assert!(verify_record(&record).is_ok());
        assert!(record_is_valid(&record));
    }

    #[test]
    fn test_empty_value_verifies() {
        let record = make_record("");
        assert!(verify_record(&record).is_ok());
    }

    #[test]
    fn test_tampered_value_fails() {
        let mut record = make_record("hello");
        record.value = "hellp".into();
        assert!(matches!(
            verify_record(&record),
            Err(CoreError::SignatureMismatch)
        ));
    }

    #[test]
    fn test_tampered_timestamp_fails() {
        let mut record = make_record("hello");
        record.timestamp = "2026-08-06 12:00:01".into();
        assert!(matches!(
            verify_record(&record),
            Err(CoreError::SignatureMismatch)
        ));
    }

    #[test]
    fn test_display_name_is_not_signed() {
        let mut record = make_record("hello");
        record.display_name = "somebody else".into();
        assert!(verify_record(&record).is_ok());
    }

    #[test]
    fn test_wrong_address_fails() {
        let mut record = make_record("hello");
        let other = Keypair::from_seed(&[0x43; 32]);
        record.address = other.address().as_str().to_string();
        assert!(matches!(
            verify_record(&record),
            Err(CoreError::SignatureMismatch)
        ));
    }

    #[test]
    fn test_wrong_length_address_fails_without_fault() {
        let mut record = make_record("hello");
        record.address = "0xdeadbeef".into();
        assert!(matches!(
            verify_record(&record),
            Err(CoreError::InvalidAddress)
        ));
    }

    #[test]
    fn test_wrong_length_signature_fails_without_fault() {
        let mut record = make_record("hello");
        record.signature = "0xdeadbeef".into();
        assert!(matches!(
            verify_record(&record),
            Err(CoreError::InvalidSignatureEncoding)
        ));
    }

    #[test]
    fn test_malformed_hex_is_a_verification_failure() {
        let mut record = make_record("hello");
        record.address = format!("0x{}", "zz".repeat(32));
        assert!(matches!(
            verify_record(&record),
            Err(CoreError::InvalidAddress)
        ));
    }

    #[test]
    fn test_oversized_value_rejected_before_crypto() {
        let big = "x".repeat(MAX_DATA_SIZE + 1);
        // Properly signed, still rejected on size alone.
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let record = RecordBuilder::new("test")
            .timestamp("2026-08-06 12:00:00")
            .value(big)
            .sign(&keypair);
        assert!(matches!(
            verify_record(&record),
            Err(CoreError::ValueTooLarge { .. })
        ));
    }

    #[test]
    fn test_value_at_limit_verifies() {
        let record = make_record(&"x".repeat(MAX_DATA_SIZE));
        assert!(verify_record(&record).is_ok());
    }

    #[test]
    fn test_every_flipped_address_nibble_fails() {
        let record = make_record("hello");
        let canonical = record.address.clone();

        for i in 2..canonical.len() {
            let mut chars: Vec<char> = canonical.chars().collect();
            chars[i] = if chars[i] == '0' { '1' } else { '0' };
            let mut tampered = record.clone();
            tampered.address = chars.into_iter().collect();
            assert!(
                verify_record(&tampered).is_err(),
                "flipped address char {} still verified",
                i
            );
        }
    }
}
