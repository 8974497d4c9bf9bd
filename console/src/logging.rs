use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `level` is a tracing env-filter expression; `json` switches the fmt
/// layer to machine-readable output. Calling this twice is an error.
pub fn init(level: &str, json: bool) -> Result<()> {
    let filter = EnvFilter::try_new(level)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true);

    if json {
        builder
            .json()
            .try_init()
            .map_err(|err| anyhow::anyhow!("failed to install subscriber: {err}"))?;
    } else {
        builder
            .pretty()
            .try_init()
            .map_err(|err| anyhow::anyhow!("failed to install subscriber: {err}"))?;
    }

    Ok(())
}
