//! Byte buffers packed from 64-bit draws
//!
//! Each word is written in little-endian order whatever the host byte order,
//! so a seed yields the same bytes on every platform. A length that is not a
//! multiple of eight takes the low-order bytes of one extra draw.

/// Fills `buf` from successive `draw` calls.
///
/// An empty buffer calls `draw` zero times.
pub fn fill_bytes_with<F>(buf: &mut [u8], mut draw: F)
where
    F: FnMut() -> u64,
{
    let mut chunks = buf.chunks_exact_mut(8);
    for chunk in &mut chunks {
        chunk.copy_from_slice(&draw().to_le_bytes());
    }

    let tail = chunks.into_remainder();
    if !tail.is_empty() {
        let word = draw().to_le_bytes();
        let n = tail.len();
        tail.copy_from_slice(&word[..n]);
    }
}

/// Allocates and fills an `n` byte buffer.
pub fn uniform_bytes<F>(n: usize, draw: F) -> Vec<u8>
where
    F: FnMut() -> u64,
{
    let mut buf = vec![0u8; n];
    fill_bytes_with(&mut buf, draw);
    buf
}
