mod commands;
mod terminal;

use anyhow::Context;
use commands::CommandLine;
use ipgen_core::{input, streamer::AddressStream, writer};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(cfg.verbose);

    let ranges: Vec<String> = match (commands.range, &commands.input) {
        (Some(range), _) => vec![range],
        (None, Some(path)) => input::read_range_file(path)?,
        (None, None) => anyhow::bail!("either --range or --input is required"),
    };

    let addresses = AddressStream::new(ranges, &cfg);

    writer::write_output(addresses, &commands.output, commands.format, &cfg)
        .with_context(|| format!("could not generate {}", commands.output.display()))?;

    Ok(())
}
