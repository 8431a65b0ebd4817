pub mod base64;
pub mod logger;
pub mod sha256;
pub mod stdio;

/// Exit status for any read, decode or write failure.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Logs the error chain and terminates with [`FAILURE_EXIT_CODE`].
pub fn exit_on_error(result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("{e:#}");
        std::process::exit(FAILURE_EXIT_CODE);
    }
}
