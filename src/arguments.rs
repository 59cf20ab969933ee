use super::*;

/// Browse and submit stories on a Clojure News server.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Arguments {
  /// Root URL of the story server.
  #[arg(
    long,
    env = "CLJNEWS_BASE_URL",
    default_value = "http://localhost:8080"
  )]
  pub(crate) base_url: Url,
  /// Directory the log file is written to. Defaults to the temp directory.
  #[arg(long, env = "CLJNEWS_LOG_DIR")]
  pub(crate) log_dir: Option<PathBuf>,
  /// Maximum number of stories to request.
  #[arg(long, env = "CLJNEWS_MAX_RESULTS")]
  pub(crate) max_results: Option<NonZeroU32>,
  #[command(subcommand)]
  pub(crate) subcommand: Option<Subcommand>,
}

#[derive(Clone, Debug, clap::Subcommand)]
pub(crate) enum Subcommand {
  /// Fetch the story list once and print it
  List,
  /// Submit a story through the browser without starting the interface
  Submit {
    /// Story URL
    #[arg(long)]
    link: String,
    /// Story title
    #[arg(long)]
    title: String,
  },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_to_local_server_without_cap() {
    let arguments = Arguments::try_parse_from(["cljnews"]).unwrap();

    assert_eq!(arguments.base_url.as_str(), "http://localhost:8080/");
    assert_eq!(arguments.max_results, None);
    assert!(arguments.subcommand.is_none());
  }

  #[test]
  fn zero_max_results_is_rejected() {
    assert!(
      Arguments::try_parse_from(["cljnews", "--max-results", "0"]).is_err()
    );
  }

  #[test]
  fn submit_subcommand_takes_link_and_title() {
    let arguments = Arguments::try_parse_from([
      "cljnews",
      "submit",
      "--link",
      "http://x",
      "--title",
      "Hello",
    ])
    .unwrap();

    let Some(Subcommand::Submit { link, title }) = arguments.subcommand else {
      panic!("expected submit subcommand");
    };

    assert_eq!(link, "http://x");
    assert_eq!(title, "Hello");
  }
}
