use std::io;

use pipe_codec::{exit_on_error, logger, sha256};

fn run() -> anyhow::Result<()> {
    let args: Vec<_> = std::env::args_os().skip(1).collect();
    if !args.is_empty() {
        log::debug!("Ignoring arguments: {args:?}");
    }

    sha256::write_hex_digest(&mut io::stdin().lock(), &mut io::stdout().lock())
}

fn main() {
    logger::setup_logger();
    exit_on_error(run());
}
