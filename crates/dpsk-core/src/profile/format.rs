// crates/dpsk-core/src/profile/format.rs

use crate::error::{DpskError, Result};
use crate::profile::checksum::{blake3_16, crc32};
use crate::profile::profile::{Profile, Recovery, PROFILE_VERSION};
use crate::signal::bit::Bit;

const MAGIC: &[u8; 4] = b"DPR1";

/// Binary profile format (.dpr).
/// Layout (little-endian):
/// MAGIC[4]
/// version:u16
/// flags:u16          (bit0 delay_init, bits 8..15 recovery)
/// width_bits:u8
/// amplitude:i32
/// reset_ticks:u32
/// crc32:u32          (over everything before crc32)
/// blake3_16:[16]     (over everything before blake3)
pub fn encode(p: &Profile) -> Vec<u8> {
    let mut b = Vec::with_capacity(40);
    b.extend_from_slice(MAGIC);

    b.extend_from_slice(&p.version.to_le_bytes());
    b.extend_from_slice(&pack_flags(p.delay_init, p.recovery).to_le_bytes());
    b.push(p.width_bits);
    b.extend_from_slice(&p.amplitude.to_le_bytes());
    b.extend_from_slice(&p.reset_ticks.to_le_bytes());

    let c = crc32(&b);
    b.extend_from_slice(&c.to_le_bytes());

    let h = blake3_16(&b);
    b.extend_from_slice(&h);

    b
}

/// Decode and integrity-check a profile. Range rules are not applied here;
/// run `validate_profile` (pipelines do so on construction).
pub fn decode(bytes: &[u8]) -> Result<Profile> {
    let mut i = 0usize;
    if bytes.len() < 4 || &bytes[0..4] != MAGIC {
        return Err(DpskError::ProfileFormat("bad magic".into()));
    }
    i += 4;

    let version = read_u16(bytes, &mut i)?;
    if version == 0 || version > PROFILE_VERSION {
        return Err(DpskError::ProfileFormat(format!("unknown version {version}")));
    }

    let flags = read_u16(bytes, &mut i)?;
    let (delay_init, recovery) = unpack_flags(flags)?;

    let width_bits = read_u8(bytes, &mut i)?;
    let amplitude = read_i32(bytes, &mut i)?;
    let reset_ticks = read_u32(bytes, &mut i)?;

    let crc_expected = read_u32(bytes, &mut i)?;
    let crc_actual = crc32(&bytes[0..(i - 4)]);
    if crc_expected != crc_actual {
        return Err(DpskError::ProfileFormat("crc32 mismatch".into()));
    }

    need(bytes, i, 16).map_err(|_| DpskError::ProfileFormat("missing blake3".into()))?;
    let mut h_expected = [0u8; 16];
    h_expected.copy_from_slice(&bytes[i..i + 16]);
    if h_expected != blake3_16(&bytes[0..i]) {
        return Err(DpskError::ProfileFormat("blake3 mismatch".into()));
    }
    i += 16;

    if i != bytes.len() {
        return Err(DpskError::ProfileFormat(format!(
            "{} trailing bytes",
            bytes.len() - i
        )));
    }

    Ok(Profile {
        version,
        width_bits,
        amplitude,
        delay_init,
        recovery,
        reset_ticks,
    })
}

/// Stable profile identifier: the trailing blake3_16 that `encode()` appends.
pub fn profile_id_16(p: &Profile) -> [u8; 16] {
    let enc = encode(p);
    let mut out = [0u8; 16];
    out.copy_from_slice(&enc[enc.len() - 16..]);
    out
}

pub fn profile_id_hex(p: &Profile) -> String {
    hex16(&profile_id_16(p))
}

fn hex16(id: &[u8; 16]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(32);
    for &b in id {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0F) as usize] as char);
    }
    s
}

fn pack_flags(delay_init: Bit, recovery: Recovery) -> u16 {
    let r_bits = match recovery {
        Recovery::Symbol => 0u16,
        Recovery::Data => 1u16,
    };
    delay_init.as_u8() as u16 | (r_bits << 8)
}

fn unpack_flags(flags: u16) -> Result<(Bit, Recovery)> {
    let delay_init = match flags & 0x00FF {
        0 => Bit::ZERO,
        1 => Bit::ONE,
        _ => return Err(DpskError::ProfileFormat("unknown delay_init".into())),
    };
    let recovery = match (flags >> 8) & 0x00FF {
        0 => Recovery::Symbol,
        1 => Recovery::Data,
        _ => return Err(DpskError::ProfileFormat("unknown recovery mode".into())),
    };
    Ok((delay_init, recovery))
}

fn need(bytes: &[u8], i: usize, n: usize) -> Result<()> {
    if bytes.len() < i + n {
        return Err(DpskError::ProfileFormat(format!(
            "unexpected eof at {i} (need {n} bytes)"
        )));
    }
    Ok(())
}

fn read_array<const N: usize>(bytes: &[u8], i: &mut usize) -> Result<[u8; N]> {
    need(bytes, *i, N)?;
    let mut a = [0u8; N];
    a.copy_from_slice(&bytes[*i..*i + N]);
    *i += N;
    Ok(a)
}

fn read_u8(bytes: &[u8], i: &mut usize) -> Result<u8> {
    Ok(read_array::<1>(bytes, i)?[0])
}

fn read_u16(bytes: &[u8], i: &mut usize) -> Result<u16> {
    read_array(bytes, i).map(u16::from_le_bytes)
}

fn read_u32(bytes: &[u8], i: &mut usize) -> Result<u32> {
    read_array(bytes, i).map(u32::from_le_bytes)
}

fn read_i32(bytes: &[u8], i: &mut usize) -> Result<i32> {
    read_array(bytes, i).map(i32::from_le_bytes)
}
