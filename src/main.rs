use {
  anyhow::{Context, anyhow, bail},
  app::App,
  arguments::{Arguments, Subcommand},
  clap::Parser,
  client::Client,
  column::{Column, DataIndex},
  command::Command,
  command_dispatch::CommandDispatch,
  config::Config,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  event::Event,
  form_field::FormField,
  help_view::HelpView,
  list_view::ListView,
  load_params::LoadParams,
  page::Page,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Tabs,
      Wrap,
    },
  },
  reqwest::Url,
  serde::{
    Deserialize, Deserializer,
    de::{self, Unexpected},
  },
  serde_json::Value,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    fs,
    io::{self, IsTerminal, Stdout},
    num::NonZeroU32,
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
  },
  story_draft::StoryDraft,
  story_list_envelope::StoryListEnvelope,
  story_list_view::StoryListView,
  story_record::StoryRecord,
  submission_form::{FormPhase, SubmissionForm},
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing_appender::non_blocking::WorkerGuard,
  tracing_subscriber::EnvFilter,
  transient_message::TransientMessage,
  utils::{deserialize_identifier, deserialize_text, single_line, truncate},
};

mod app;
mod arguments;
mod client;
mod column;
mod command;
mod command_dispatch;
mod config;
mod effect;
mod event;
mod form_field;
mod help_view;
mod list_view;
mod load_params;
mod logging;
mod page;
mod state;
mod story_draft;
mod story_list_envelope;
mod story_list_view;
mod story_record;
mod submission_form;
mod transient_message;
mod utils;

const STORIES_STATUS: &str =
  "↑/k up • ↓/j down • o open link • tab/s submit a story • q/esc quit • ? help";

const SUBMISSION_STATUS: &str =
  "tab/↓ next field • shift+tab/↑ previous field • enter submit • esc back";

const SUBMITTED_STATUS: &str = "Story submitted • esc back to the story list";

const LOADING_STORIES_STATUS: &str = "Loading...";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Stories:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to first story
  end     jump to last story
  o       open the selected story link in your browser
  tab / s switch to the submission form
  q       quit cljnews
  esc     close help or quit from the list
  ?       toggle this help

Submit:
  tab / ↓        focus the next field
  shift+tab / ↑  focus the previous field
  enter          submit the story in your browser
  esc            return to the story list

Anywhere:
  f1      toggle this help
  ctrl+c  quit cljnews
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn list(client: &Client, config: &Config) -> Result {
  let envelope = client
    .fetch_stories(config.load_params)
    .await
    .context("could not load stories")?;

  print!(
    "{}",
    StoryListView::format_plain(&envelope.stories, envelope.total_count())
  );

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  let config = Config::from_arguments(&arguments)?;

  let _guard = logging::initialize(&config.log_dir)?;

  tracing::info!(base_url = %config.base_url, "starting cljnews");

  let client = Client::new(config.base_url.clone());

  match arguments.subcommand {
    Some(Subcommand::List) => list(&client, &config).await,
    Some(Subcommand::Submit { link, title }) => submit(
      &client,
      StoryDraft {
        story_link: link,
        story_title: title,
      },
    ),
    None => {
      let submission = SubmissionForm::new(client.submission_action()?);

      let mut terminal = initialize_terminal()?;

      let mut app = App::new(client, State::new(config.load_params, submission));

      let result = app.run(&mut terminal);

      restore_terminal(&mut terminal)?;

      result
    }
  }
}

fn submit(client: &Client, draft: StoryDraft) -> Result {
  let mut form = SubmissionForm::new(client.submission_action()?);

  form.fill(draft);

  let Some(target) = form.submit() else {
    bail!(
      "missing required fields: {}",
      form.invalid_labels().join(", ")
    );
  };

  webbrowser::open(target.as_str())
    .with_context(|| format!("could not open {target} in a browser"))?;

  println!("Submitted story via {target}");

  Ok(())
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
