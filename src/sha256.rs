use std::io::{Read, Write};

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

pub const DIGEST_LEN: usize = 32;

/// Hashes everything `reader` yields as one message.
pub fn digest_reader<R: Read>(reader: &mut R) -> Result<[u8; DIGEST_LEN]> {
    let mut hasher = Sha256::new();
    let consumed = std::io::copy(reader, &mut hasher).context("failed to read input")?;
    log::debug!("[sha256] hashed {consumed} bytes");
    Ok(hasher.finalize().into())
}

/// Lowercase hex, two characters per byte.
pub fn to_hex(digest: &[u8; DIGEST_LEN]) -> String {
    hex::encode(digest)
}

/// Writes the hex digest of `reader` to `writer`, without a trailing newline.
///
/// The whole input is hashed before anything is written, so a read error
/// leaves `writer` untouched.
pub fn write_hex_digest<R, W>(reader: &mut R, writer: &mut W) -> Result<()>
where
    R: Read,
    W: Write,
{
    let digest = digest_reader(reader)?;
    writer
        .write_all(to_hex(&digest).as_bytes())
        .and_then(|_| writer.flush())
        .context("failed to write output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};
    use std::io;

    const EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    // Yields a few bytes, then fails.
    struct FlakyReader {
        served: bool,
    }

    impl Read for FlakyReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::other("device gone"));
            }
            self.served = true;
            buf[..3].copy_from_slice(b"abc");
            Ok(3)
        }
    }

    fn hex_of(input: &[u8]) -> String {
        let mut reader = input;
        let mut out = Vec::new();
        write_hex_digest(&mut reader, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_message() {
        assert_eq!(hex_of(b""), EMPTY);
    }

    #[test]
    fn abc_vector() {
        assert_eq!(hex_of(b"abc"), ABC);
    }

    #[test]
    fn two_block_vector() {
        assert_eq!(
            hex_of(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
    }

    #[test]
    fn output_is_64_lowercase_hex_without_newline() {
        let h = hex_of(b"test");
        assert_eq!(h.len(), 2 * DIGEST_LEN);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn chunked_reads_match_single_shot() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut input = vec![0u8; 2 * 1024 * 1024 + 13];
        rng.fill_bytes(&mut input);

        let whole: [u8; DIGEST_LEN] = Sha256::digest(&input).into();
        let mut reader = input.as_slice();
        assert_eq!(digest_reader(&mut reader).unwrap(), whole);
    }

    #[test]
    fn read_error_writes_nothing() {
        let mut reader = FlakyReader { served: false };
        let mut out = Vec::new();
        let err = write_hex_digest(&mut reader, &mut out).unwrap_err();
        assert_eq!(err.to_string(), "failed to read input");
        assert!(out.is_empty());
    }
}
