//! Log file input.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;

/// Read a log file into lines, in file order, with line endings stripped
pub fn read_log<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let lines = decode_log(&bytes);
    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Decode raw log bytes into lines.
///
/// Servers write player names as raw bytes, so anything that is not valid
/// UTF-8 is decoded as Windows-1252.
pub fn decode_log(bytes: &[u8]) -> Vec<String> {
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(e) => {
            warn!(
                "Log is not valid UTF-8 (at byte {}), decoding as Windows-1252",
                e.valid_up_to()
            );
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            decoded
        }
    };

    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    text.lines().map(str::to_string).collect()
}
