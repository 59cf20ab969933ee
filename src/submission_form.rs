use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FormPhase {
  Editing,
  Submitted,
}

pub(crate) struct SubmissionForm {
  action: Url,
  fields: Vec<FormField>,
  focus: usize,
  phase: FormPhase,
}

impl SubmissionForm {
  const HIDDEN_NAME: &str = "hiddenbutton";
  const HIDDEN_VALUE: &str = "hiddenvalue";
  const STORY_LINK: &str = "storyLink";
  const STORY_TITLE: &str = "storyTitle";
  const TITLE: &str = "Submit New Story";

  pub(crate) fn draw(&self, frame: &mut Frame, area: Rect) {
    let form = Paragraph::new(self.lines())
      .block(Block::default().title(Self::TITLE).borders(Borders::ALL))
      .wrap(Wrap { trim: false });

    frame.render_widget(form, area);
  }

  fn edit(&mut self, change: impl FnOnce(&mut String)) {
    if let Some(field) = self.focused_mut() {
      change(&mut field.value);

      if field.invalid {
        field.validate();
      }
    }
  }

  fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
    self.fields.iter_mut().find(|field| field.name == name)
  }

  pub(crate) fn fill(&mut self, draft: StoryDraft) {
    if let Some(field) = self.field_mut(Self::STORY_LINK) {
      field.value = draft.story_link;
    }

    if let Some(field) = self.field_mut(Self::STORY_TITLE) {
      field.value = draft.story_title;
    }
  }

  fn focus_next(&mut self) {
    let count = self.visible_count();

    if count > 0 {
      self.focus = (self.focus + 1) % count;
    }
  }

  fn focus_previous(&mut self) {
    let count = self.visible_count();

    if count > 0 {
      self.focus = (self.focus + count - 1) % count;
    }
  }

  fn focused_mut(&mut self) -> Option<&mut FormField> {
    self
      .fields
      .iter_mut()
      .filter(|field| !field.hidden)
      .nth(self.focus)
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Command {
    if key.code == KeyCode::Esc {
      return Command::ShowStories;
    }

    if self.phase == FormPhase::Submitted {
      return Command::None;
    }

    match key.code {
      KeyCode::Enter => Command::Submit,
      KeyCode::Tab | KeyCode::Down => {
        self.focus_next();
        Command::None
      }
      KeyCode::BackTab | KeyCode::Up => {
        self.focus_previous();
        Command::None
      }
      KeyCode::Backspace => {
        self.edit(|value| {
          value.pop();
        });
        Command::None
      }
      KeyCode::Char(ch) => {
        let modifiers = key.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER)
        {
          return Command::None;
        }

        self.edit(|value| value.push(ch));
        Command::None
      }
      _ => Command::None,
    }
  }

  pub(crate) fn invalid_labels(&self) -> Vec<&'static str> {
    self
      .fields
      .iter()
      .filter(|field| field.invalid)
      .map(|field| field.field_label)
      .collect()
  }

  fn lines(&self) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::raw(BASE_INDENT))];

    for (position, field) in
      self.fields.iter().filter(|field| !field.hidden).enumerate()
    {
      let focused = self.phase == FormPhase::Editing && position == self.focus;

      let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
      } else {
        Style::default().fg(Color::White)
      };

      let mut spans = vec![
        Span::raw(BASE_INDENT),
        Span::styled(format!("{}: ", field.field_label), label_style),
        Span::raw(field.value.clone()),
      ];

      if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
      }

      lines.push(Line::from(spans));

      if field.invalid {
        lines.push(Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::styled(FormField::BLANK_TEXT, Style::default().fg(Color::Red)),
        ]));
      }

      lines.push(Line::from(Span::raw(BASE_INDENT)));
    }

    lines.push(Line::from(vec![
      Span::raw(BASE_INDENT),
      match self.phase {
        FormPhase::Editing => Span::styled(
          "[ Submit ]",
          Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        FormPhase::Submitted => Span::styled(
          "Story submitted. It was opened in your browser.",
          Style::default().fg(Color::DarkGray),
        ),
      },
    ]));

    lines
  }

  pub(crate) fn new(action: Url) -> Self {
    Self {
      action,
      fields: vec![
        FormField::required("Story URL", Self::STORY_LINK),
        FormField::required("Story Title", Self::STORY_TITLE),
        FormField::hidden(Self::HIDDEN_NAME, Self::HIDDEN_VALUE),
      ],
      focus: 0,
      phase: FormPhase::Editing,
    }
  }

  pub(crate) fn phase(&self) -> FormPhase {
    self.phase
  }

  /// Returns the navigation target, or `None` when the form is already
  /// submitted or a required field is blank.
  pub(crate) fn submit(&mut self) -> Option<Url> {
    if self.phase == FormPhase::Submitted {
      return None;
    }

    let mut valid = true;

    for field in &mut self.fields {
      valid &= field.validate();
    }

    if !valid {
      tracing::debug!(
        fields = ?self.invalid_labels(),
        "submission blocked by blank fields"
      );
      return None;
    }

    let target = self.target();

    let draft = self.take_draft();

    self.phase = FormPhase::Submitted;

    tracing::info!(
      story_link = %draft.story_link,
      story_title = %draft.story_title,
      "story submitted"
    );

    Some(target)
  }

  fn take_draft(&mut self) -> StoryDraft {
    let mut take = |name| {
      self
        .field_mut(name)
        .map(|field| std::mem::take(&mut field.value))
        .unwrap_or_default()
    };

    StoryDraft {
      story_link: take(Self::STORY_LINK),
      story_title: take(Self::STORY_TITLE),
    }
  }

  fn target(&self) -> Url {
    let mut target = self.action.clone();

    target.query_pairs_mut().clear().extend_pairs(
      self
        .fields
        .iter()
        .map(|field| (field.name, field.value.as_str())),
    );

    target
  }

  fn visible_count(&self) -> usize {
    self.fields.iter().filter(|field| !field.hidden).count()
  }
}
