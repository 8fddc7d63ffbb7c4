use dpsk_core::error::DpskError;
use dpsk_core::profile::profile::MAX_RESET_TICKS;
use dpsk_core::profile::{defaults::default_profile, format};
use dpsk_core::validate::validate_profile;
use dpsk_core::{Bit, Recovery};

#[test]
fn encode_decode_preserves_every_field() {
    let mut p = default_profile();
    p.width_bits = 12;
    p.amplitude = -2047;
    p.delay_init = Bit::ZERO;
    p.recovery = Recovery::Symbol;
    p.reset_ticks = 4;

    let bytes = format::encode(&p);
    assert_eq!(&bytes[0..4], b"DPR1");
    assert_eq!(format::decode(&bytes).unwrap(), p);
}

#[test]
fn profile_id_is_stable_and_field_sensitive() {
    let p = default_profile();
    assert_eq!(format::profile_id_16(&p), format::profile_id_16(&p));
    assert_eq!(format::profile_id_hex(&p).len(), 32);

    let mut q = default_profile();
    q.amplitude += 1;
    assert_ne!(format::profile_id_16(&p), format::profile_id_16(&q));
}

#[test]
fn corruption_is_detected() {
    let bytes = format::encode(&default_profile());

    let mut flipped = bytes.clone();
    flipped[9] ^= 0x01; // inside amplitude
    assert!(matches!(format::decode(&flipped), Err(DpskError::ProfileFormat(_))));

    let mut bad_magic = bytes.clone();
    bad_magic[0] = b'X';
    assert!(format::decode(&bad_magic).is_err());

    assert!(format::decode(&bytes[..bytes.len() - 1]).is_err());

    let mut trailing = bytes;
    trailing.push(0);
    assert!(format::decode(&trailing).is_err());
}

#[test]
fn validation_rejects_unnegatable_amplitudes() {
    let mut p = default_profile();
    p.width_bits = 16;

    for ok in [1, -1, 32_767, -32_767] {
        p.amplitude = ok;
        assert!(validate_profile(&p).is_ok(), "{ok} should be accepted");
    }
    for bad in [0, 32_768, -32_768, i32::MIN] {
        p.amplitude = bad;
        assert!(
            matches!(validate_profile(&p), Err(DpskError::Validation(_))),
            "{bad} should be rejected"
        );
    }

    p.width_bits = 32;
    p.amplitude = i32::MIN;
    assert!(validate_profile(&p).is_err());

    p.amplitude = 1;
    p.width_bits = 1;
    assert!(validate_profile(&p).is_err());
}

#[test]
fn validation_bounds_reset_ticks() {
    let mut p = default_profile();
    p.reset_ticks = 0;
    assert!(validate_profile(&p).is_ok());
    p.reset_ticks = MAX_RESET_TICKS;
    assert!(validate_profile(&p).is_ok());

    p.reset_ticks = u32::MAX;
    assert!(matches!(validate_profile(&p), Err(DpskError::Validation(_))));

    let decoded = format::decode(&format::encode(&p)).unwrap();
    assert_eq!(decoded.reset_ticks, u32::MAX);
    assert!(dpsk_core::Modulator::new(&decoded).is_err());
}
