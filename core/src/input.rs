//! Reads range descriptors from a list file.
//!
//! One descriptor per line. Blank lines and lines starting with `#` are skipped
//! and never reach the parser.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::InputError;

/// Collects the descriptors in `reader`, trimmed and in file order.
pub fn parse_range_list<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut ranges: Vec<String> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        ranges.push(line.to_string());
    }

    Ok(ranges)
}

pub fn read_range_file(path: &Path) -> Result<Vec<String>, InputError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InputError::NotFound(path.to_path_buf()),
        _ => InputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let ranges = parse_range_list(BufReader::new(file)).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded {} ranges from {}", ranges.len(), path.display());
    Ok(ranges)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
