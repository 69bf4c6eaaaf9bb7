use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;

/// Installs a compact `fmt` subscriber as the global default.
///
/// `verbose` lowers the threshold from INFO to DEBUG, which also turns on
/// the per-batch cost lines from the training loop.
pub fn init(verbose: bool) -> Result<(), SetGlobalDefaultError> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
