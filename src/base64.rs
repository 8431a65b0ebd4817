use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    write::EncoderWriter,
};

use crate::stdio;

/// RFC 4648 standard alphabet, `=`-padded on encode, canonical padding
/// required on decode. Stray bits in the last quantum are ignored, so
/// `Zh==` decodes to `f` the same way `Zg==` does.
pub const STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical)
        .with_decode_allow_trailing_bits(true),
);

/// Decodes base64 text, skipping `\r` and `\n` so line-wrapped input works.
pub fn decode<T>(input: T) -> Result<Vec<u8>>
where
    T: AsRef<[u8]>,
{
    let filtered: Vec<u8> = input
        .as_ref()
        .iter()
        .copied()
        .filter(|&b| b != b'\r' && b != b'\n')
        .collect();

    STANDARD.decode(filtered).context("invalid base64 input")
}

/// Reads all of `reader`, decodes it and writes the raw bytes to `writer`.
///
/// Nothing is written unless the whole input decodes.
pub fn decode_stream<R, W>(reader: &mut R, writer: &mut W) -> Result<usize>
where
    R: Read,
    W: Write,
{
    let text = stdio::read_all(reader)?;
    let decoded = decode(&text)?;
    log::debug!("[decode] {} bytes -> {} bytes", text.len(), decoded.len());

    writer
        .write_all(&decoded)
        .and_then(|_| writer.flush())
        .context("failed to write output")?;
    Ok(decoded.len())
}

/// Streams `reader` through a base64 encoder into `writer`.
///
/// The encoder is finished before returning so the trailing group and its
/// padding always reach `writer`. Returns the number of input bytes consumed.
pub fn encode_stream<R, W>(reader: &mut R, writer: &mut W) -> Result<u64>
where
    R: Read,
    W: Write,
{
    let mut encoder = EncoderWriter::new(writer, &STANDARD);
    let consumed = copy_into(reader, &mut encoder)?;
    encoder
        .finish()
        .and_then(|out| out.flush())
        .context("failed to write output")?;

    log::debug!("[encode] consumed {consumed} bytes");
    Ok(consumed)
}

// io::copy cannot tell a failed read from a failed write, so split them here.
fn copy_into<R, W>(reader: &mut R, writer: &mut W) -> Result<u64>
where
    R: Read,
    W: Write,
{
    let mut buffer = [0u8; 8192];
    let mut total = 0u64;
    loop {
        let count = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).context("failed to read input"),
        };
        writer
            .write_all(&buffer[..count])
            .context("failed to write output")?;
        total += count as u64;
    }
    Ok(total)
}
