use std::io::Read;

use anyhow::{Context, Result};

/// Reads `reader` to EOF and returns everything it produced.
pub fn read_all<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .context("failed to read input")?;
    log::debug!("[stdio] read {} bytes", data.len());
    Ok(data)
}
