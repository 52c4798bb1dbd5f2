use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::utils::paths::STDIN_PATH;

// Maximum export size: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

const UTF8_BOM: char = '\u{FEFF}';

/// Read an export file (or stdin for `-`) into a string.
///
/// The size is checked on the open handle before reading. A leading UTF-8 byte
/// order mark is removed.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, is larger than
/// 10MB, or is not valid UTF-8.
pub fn read_export(path: &Path) -> Result<String> {
    let content = if path.as_os_str() == STDIN_PATH {
        read_limited(io::stdin().lock(), path)?
    } else {
        let file = File::open(path)
            .with_context(|| format!("Failed to open export file: {}", path.display()))?;
        validate_file_size(&file, path)?;
        read_limited(file, path)?
    };

    Ok(match content.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_string(),
        None => content,
    })
}

fn read_limited(reader: impl Read, path: &Path) -> Result<String> {
    let mut buf = Vec::new();
    reader
        .take(MAX_FILE_SIZE_BYTES + 1)
        .read_to_end(&mut buf)
        .with_context(|| format!("Failed to read export: {}", path.display()))?;

    if buf.len() as u64 > MAX_FILE_SIZE_BYTES {
        bail!("Export too large: {} (max {} bytes)", path.display(), MAX_FILE_SIZE_BYTES);
    }

    String::from_utf8(buf).with_context(|| format!("Export is not valid UTF-8: {}", path.display()))
}

/// Validates file size using an open file handle.
///
/// Checking the handle rather than the path avoids the file changing between
/// the check and the read.
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}
