//! Property-based tests for the pixelseal pipelines.
//!
//! 1. **Round trip**: any non-empty message fits and decodes back exactly
//! 2. **Bit stream**: pack/unpack are inverse; unpack truncates partial bytes
//! 3. **Capacity**: encoding succeeds exactly when the frame fits
//! 4. **Wrong passphrase**: never yields a plaintext

use pixelseal::stego::bits::{pack, unpack};
use pixelseal::stego::capacity::capacity_bits;
use pixelseal::{decode, encode, required_bits, ChaChaCipher, DecoderError, EncoderError, Image};
use proptest::prelude::*;

fn cover_from_seed(width: u32, height: u32, seed: u8) -> Image {
    Image::from_fn(width, height, |x, y| {
        let base = (x as u8).wrapping_mul(31) ^ (y as u8).wrapping_mul(17) ^ seed;
        [base, base.wrapping_add(85), base.wrapping_add(170)]
    })
    .unwrap()
}

/// Strategy for non-empty messages.
fn message_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..200)
}

/// Strategy for non-empty passphrases.
fn passphrase() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 !@#]{1,32}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_roundtrip(message in message_bytes(), pass in passphrase(), seed in any::<u8>()) {
        // 48x48 = 6912 bits, enough for 200 bytes + 40 bytes of framing.
        let cover = cover_from_seed(48, 48, seed);
        let carrier = encode(&cover, &message, &pass).unwrap();
        prop_assert_eq!(decode(&carrier, &pass).unwrap(), message);
    }

    #[test]
    fn prop_wrong_passphrase_never_decodes(
        message in message_bytes(),
        pass in passphrase(),
        other in passphrase(),
    ) {
        prop_assume!(pass != other);
        let cover = cover_from_seed(48, 48, 7);
        let carrier = encode(&cover, &message, &pass).unwrap();
        prop_assert!(matches!(
            decode(&carrier, &other),
            Err(DecoderError::Authentication(_))
        ));
    }

    #[test]
    fn prop_encode_fits_iff_capacity(len in 1usize..80, width in 1u32..40, height in 1u32..12) {
        let cover = cover_from_seed(width, height, 3);
        let message = vec![0x5Au8; len];
        let fits = required_bits(&ChaChaCipher, len) <= capacity_bits(&cover);

        match encode(&cover, &message, "pw") {
            Ok(carrier) => {
                prop_assert!(fits);
                prop_assert_eq!(decode(&carrier, "pw").unwrap(), message);
            }
            Err(EncoderError::Capacity(err)) => {
                prop_assert!(!fits);
                prop_assert_eq!(err.available, capacity_bits(&cover));
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn prop_pack_unpack_inverse(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let bits = pack(&data);
        prop_assert_eq!(bits.len(), data.len() * 8);
        prop_assert_eq!(unpack(&bits), data);
    }

    #[test]
    fn prop_unpack_truncates(
        data in prop::collection::vec(any::<u8>(), 0..64),
        extra in prop::collection::vec(0u8..=1, 0..8),
    ) {
        let mut bits = pack(&data);
        bits.extend_from_slice(&extra);
        prop_assert_eq!(unpack(&bits), data);
    }
}
