use std::io;

use pipe_codec::{base64, exit_on_error, logger};

fn run() -> anyhow::Result<()> {
    let args: Vec<_> = std::env::args_os().skip(1).collect();
    if !args.is_empty() {
        log::debug!("Ignoring arguments: {args:?}");
    }

    base64::decode_stream(&mut io::stdin().lock(), &mut io::stdout().lock())?;
    Ok(())
}

fn main() {
    logger::setup_logger();
    exit_on_error(run());
}
