use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ListPhase {
  Failed(String),
  Idle,
  Loaded,
  Loading,
}

pub(crate) struct StoryListView {
  phase: ListPhase,
  rows: ListView<StoryRecord>,
  total_count: u64,
}

impl StoryListView {
  const TITLE: &str = "Clojure News!";

  /// Applies a fetch result. Results arriving outside `loading` are dropped.
  pub(crate) fn apply(&mut self, result: Result<StoryListEnvelope>) {
    if self.phase != ListPhase::Loading {
      tracing::warn!(phase = ?self.phase, "ignoring unexpected story list");
      return;
    }

    match result {
      Ok(envelope) => {
        self.total_count = envelope.total_count();
        self.rows.replace(envelope.stories);
        self.phase = ListPhase::Loaded;

        tracing::info!(
          rows = self.rows.len(),
          total_count = self.total_count,
          "story list applied"
        );
      }
      Err(error) => {
        tracing::error!("story list failed to load: {error:#}");
        self.phase = ListPhase::Failed(format!("{error:#}"));
      }
    }
  }

  pub(crate) fn draw(&mut self, frame: &mut Frame, area: Rect) {
    let block = Block::default().title(Self::TITLE).borders(Borders::ALL);

    let placeholder = match &self.phase {
      ListPhase::Idle | ListPhase::Loading => Some(Span::styled(
        LOADING_STORIES_STATUS,
        Style::default().fg(Color::DarkGray),
      )),
      ListPhase::Failed(error) => Some(Span::styled(
        format!("Could not load stories: {error}"),
        Style::default().fg(Color::Red),
      )),
      ListPhase::Loaded if self.rows.is_empty() => Some(Span::styled(
        "No stories yet.",
        Style::default().fg(Color::DarkGray),
      )),
      ListPhase::Loaded => None,
    };

    if let Some(placeholder) = placeholder {
      let paragraph =
        Paragraph::new(Line::from(vec![Span::raw(BASE_INDENT), placeholder]))
          .block(block)
          .wrap(Wrap { trim: true });

      frame.render_widget(paragraph, area);

      return;
    }

    let columns = Column::stories();

    let header = Row::new(columns.iter().map(|column| {
      Cell::from(column.header).style(
        Style::default()
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )
    }));

    let rows = self.rows.items().iter().map(|story| {
      Row::new(
        columns
          .iter()
          .map(|column| Cell::from(single_line(story.value(column.data_index)))),
      )
    });

    let widths = columns
      .iter()
      .map(|_| Constraint::Ratio(1, u32::try_from(columns.len()).unwrap_or(1)));

    let table = Table::new(rows, widths)
      .header(header)
      .block(block)
      .row_highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      );

    let mut table_state = TableState::default()
      .with_selected(self.rows.selected_index())
      .with_offset(self.rows.offset());

    frame.render_stateful_widget(table, area, &mut table_state);

    self.rows.set_offset(table_state.offset());
  }

  /// Renders stories as aligned plain text, one line per story.
  pub(crate) fn format_plain(stories: &[StoryRecord], total_count: u64) -> String {
    let columns = Column::stories();

    let table: Vec<Vec<String>> = std::iter::once(
      columns
        .iter()
        .map(|column| column.header.to_string())
        .collect::<Vec<_>>(),
    )
    .chain(stories.iter().map(|story| {
      columns
        .iter()
        .map(|column| single_line(story.value(column.data_index)))
        .collect::<Vec<_>>()
    }))
    .collect();

    let widths: Vec<usize> = (0..columns.len())
      .map(|index| {
        table
          .iter()
          .map(|cells| cells[index].chars().count())
          .max()
          .unwrap_or(0)
      })
      .collect();

    let mut output = String::new();

    for cells in &table {
      let line = cells
        .iter()
        .zip(&widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");

      output.push_str(line.trim_end());
      output.push('\n');
    }

    output.push_str(&format!(
      "\n{}\n",
      Self::summary(stories.len(), total_count)
    ));

    output
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent, page: usize) -> Command {
    let modifiers = key.modifiers;

    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
      KeyCode::Char('?') => Command::ShowHelp,
      KeyCode::Tab | KeyCode::Char('s' | 'S') => Command::ShowSubmission,
      KeyCode::Char('o' | 'O') => Command::OpenSelectedStory,
      KeyCode::Down | KeyCode::Char('j') => {
        self.rows.select_next();
        Command::None
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.rows.select_previous();
        Command::None
      }
      KeyCode::PageDown => {
        self.rows.page_down(page);
        Command::None
      }
      KeyCode::PageUp => {
        self.rows.page_up(page);
        Command::None
      }
      KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
        self.rows.page_down(page);
        Command::None
      }
      KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
        self.rows.page_up(page);
        Command::None
      }
      KeyCode::Home => {
        self.rows.set_selected(0);
        Command::None
      }
      KeyCode::End => {
        self.rows.select_last();
        Command::None
      }
      _ => Command::None,
    }
  }

  /// Starts the one load this view performs. Returns `None` once a load has
  /// already been issued.
  pub(crate) fn load(&mut self, params: LoadParams) -> Option<Effect> {
    if self.phase != ListPhase::Idle {
      return None;
    }

    self.phase = ListPhase::Loading;

    tracing::info!(max_results = ?params.max_results, "loading story list");

    Some(Effect::FetchStories { params })
  }

  pub(crate) fn new() -> Self {
    Self {
      phase: ListPhase::Idle,
      rows: ListView::default(),
      total_count: 0,
    }
  }

  pub(crate) fn selected(&self) -> Option<&StoryRecord> {
    self.rows.selected_item()
  }

  pub(crate) fn status(&self) -> String {
    match &self.phase {
      ListPhase::Idle | ListPhase::Loading => LOADING_STORIES_STATUS.into(),
      ListPhase::Failed(error) => {
        format!("Could not load stories: {}", truncate(error, 80))
      }
      ListPhase::Loaded => format!(
        "{} • {STORIES_STATUS}",
        Self::summary(self.rows.len(), self.total_count)
      ),
    }
  }

  fn summary(shown: usize, total_count: u64) -> String {
    match (shown, total_count) {
      (1, 1) => "1 story".into(),
      (shown, total) if u64::try_from(shown).is_ok_and(|s| s == total) => {
        format!("{shown} stories")
      }
      (shown, total) => format!("{shown} of {total} stories"),
    }
  }
}
