use super::*;

pub(crate) struct Config {
  pub(crate) base_url: Url,
  pub(crate) load_params: LoadParams,
  pub(crate) log_dir: PathBuf,
}

impl Config {
  pub(crate) fn from_arguments(arguments: &Arguments) -> Result<Self> {
    let base_url = arguments.base_url.clone();

    if base_url.cannot_be_a_base() {
      bail!("`{base_url}` cannot be used as a server base URL");
    }

    if !matches!(base_url.scheme(), "http" | "https") {
      bail!(
        "unsupported scheme `{}` in server base URL, expected http or https",
        base_url.scheme()
      );
    }

    Ok(Self {
      base_url,
      load_params: LoadParams {
        max_results: arguments.max_results,
      },
      log_dir: arguments
        .log_dir
        .clone()
        .unwrap_or_else(std::env::temp_dir),
    })
  }
}
