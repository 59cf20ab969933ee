use super::*;

const LOG_FILE_NAME: &str = "cljnews.log";

/// Routes `tracing` output to `<log_dir>/cljnews.log`, since the terminal
/// interface owns stdout. The returned guard flushes the writer on drop.
pub(crate) fn initialize(log_dir: &Path) -> Result<WorkerGuard> {
  fs::create_dir_all(log_dir).with_context(|| {
    format!("could not create log directory `{}`", log_dir.display())
  })?;

  let (writer, guard) = tracing_appender::non_blocking(
    tracing_appender::rolling::never(log_dir, LOG_FILE_NAME),
  );

  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(writer)
    .with_ansi(false)
    .try_init()
    .map_err(|error| anyhow!("could not initialize logging: {error}"))?;

  Ok(guard)
}
