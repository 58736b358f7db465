//! Streams addresses into the output document.
//!
//! Each format is an [`Encoder`] that knows how to open the document, append one
//! address and close it again. [`OutputWriter`] drives an encoder over a buffered
//! sink in a single forward pass. Nothing is ever seeked or rewritten, so a
//! failure halfway through leaves a truncated file behind.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::net::Ipv4Addr;
use std::path::Path;

use ipgen_common::config::{Config, OutputFormat};
use tracing::info;

use crate::error::OutputError;

/// How many addresses are written between two progress lines.
pub const PROGRESS_INTERVAL: u64 = 100_000;

const BUFFER_SIZE: usize = 64 * 1024;

/// Serializes addresses in one output format.
pub trait Encoder {
    /// Writes whatever must precede the first address.
    fn begin(&mut self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    fn address(&mut self, out: &mut dyn Write, addr: Ipv4Addr) -> io::Result<()>;

    /// Writes whatever must follow the last address.
    fn finish(&mut self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

/// One dotted address per line.
#[derive(Debug, Default)]
pub struct TextEncoder;

impl Encoder for TextEncoder {
    fn address(&mut self, out: &mut dyn Write, addr: Ipv4Addr) -> io::Result<()> {
        writeln!(out, "{addr}")
    }
}

/// `{"ips":["a","b",...]}`, built element by element.
#[derive(Debug)]
pub struct JsonEncoder {
    first: bool,
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self { first: true }
    }
}

impl Encoder for JsonEncoder {
    fn begin(&mut self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(br#"{"ips":["#)
    }

    fn address(&mut self, out: &mut dyn Write, addr: Ipv4Addr) -> io::Result<()> {
        if !self.first {
            out.write_all(b",")?;
        }
        self.first = false;
        // Dotted addresses never need escaping
        write!(out, "\"{addr}\"")
    }

    fn finish(&mut self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(b"]}")
    }
}

pub fn encoder_for(format: OutputFormat) -> Box<dyn Encoder> {
    match format {
        OutputFormat::Txt => Box::new(TextEncoder),
        OutputFormat::Json => Box::new(JsonEncoder::default()),
    }
}

/// Drives an [`Encoder`] over a buffered sink and counts what it writes.
pub struct OutputWriter<W: Write> {
    out: BufWriter<W>,
    encoder: Box<dyn Encoder>,
    verbose: bool,
    total: u64,
}

impl<W: Write> OutputWriter<W> {
    pub fn new(output: W, format: OutputFormat, cfg: &Config) -> Self {
        Self {
            out: BufWriter::with_capacity(BUFFER_SIZE, output),
            encoder: encoder_for(format),
            verbose: cfg.verbose,
            total: 0,
        }
    }

    /// Writes the complete document and returns how many addresses it holds.
    pub fn write_addresses<I>(mut self, addresses: I) -> io::Result<u64>
    where
        I: IntoIterator<Item = Ipv4Addr>,
    {
        self.encoder.begin(&mut self.out)?;

        for addr in addresses {
            self.encoder.address(&mut self.out, addr)?;
            self.total += 1;

            if self.verbose && self.total % PROGRESS_INTERVAL == 0 {
                info!("Generated {} IPs...", self.total);
            }
        }

        self.encoder.finish(&mut self.out)?;
        self.out.flush()?;

        Ok(self.total)
    }
}

/// Creates (or truncates) `path` and writes every address into it.
///
/// Logs the total when [`Config::count`] is set, the output location otherwise.
pub fn write_output<I>(
    addresses: I,
    path: &Path,
    format: OutputFormat,
    cfg: &Config,
) -> Result<u64, OutputError>
where
    I: IntoIterator<Item = Ipv4Addr>,
{
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let total = OutputWriter::new(file, format, cfg).write_addresses(addresses)?;

    if cfg.count {
        info!("Total IPs generated: {total}");
    } else {
        info!("Finished. Output written to {}", path.display());
    }

    Ok(total)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
