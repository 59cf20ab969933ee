use super::*;

pub(crate) struct State {
  help: HelpView,
  list_height: usize,
  load_params: LoadParams,
  page: Page,
  pending_effects: Vec<Effect>,
  stories: StoryListView,
  submission: SubmissionForm,
  transient_message: Option<TransientMessage>,
}

impl State {
  pub(crate) fn clear_pending_effects(&mut self) {
    self.pending_effects.clear();
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(),
      Command::HideHelp => self.help.hide(),
      Command::ShowStories => self.page = Page::Stories,
      Command::ShowSubmission => self.page = Page::Submission,
      Command::OpenSelectedStory => self.open_selected_story()?,
      Command::Submit => self.submit(),
      Command::None => {}
    }

    Ok(CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    })
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Stories { result } => self.stories.apply(result),
    }
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Command {
    if key.code == KeyCode::Char('c')
      && key.modifiers.contains(KeyModifiers::CONTROL)
    {
      return Command::Quit;
    }

    if self.help.is_visible() {
      return HelpView::handle_key(key);
    }

    if key.code == KeyCode::F(1) {
      return Command::ShowHelp;
    }

    match self.page {
      Page::Stories => {
        let page = self.list_height.max(1);
        self.stories.handle_key(key, page)
      }
      Page::Submission => self.submission.handle_key(key),
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  /// Issues the single story list load. Called once the terminal is ready.
  pub(crate) fn initialize(&mut self) -> Vec<Effect> {
    self.stories.load(self.load_params).into_iter().collect()
  }

  pub(crate) fn message(&self) -> String {
    if self.help.is_visible() {
      return HELP_STATUS.into();
    }

    if let Some(message) = &self.transient_message {
      return message.text().into();
    }

    match (self.page, self.submission.phase()) {
      (Page::Stories, _) => self.stories.status(),
      (Page::Submission, FormPhase::Editing) => SUBMISSION_STATUS.into(),
      (Page::Submission, FormPhase::Submitted) => SUBMITTED_STATUS.into(),
    }
  }

  pub(crate) fn new(load_params: LoadParams, submission: SubmissionForm) -> Self {
    Self {
      help: HelpView::new(),
      list_height: 0,
      load_params,
      page: Page::Stories,
      pending_effects: Vec::new(),
      stories: StoryListView::new(),
      submission,
      transient_message: None,
    }
  }

  fn open_selected_story(&mut self) -> Result {
    let Some(story) = self.stories.selected() else {
      return Ok(());
    };

    let url = Url::parse(story.body.trim()).with_context(|| {
      format!("story link `{}` is not a URL", truncate(&story.body, 60))
    })?;

    self.pending_effects.push(Effect::Navigate { url });

    Ok(())
  }

  pub(crate) fn page(&self) -> Page {
    self.page
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    self.transient_message = Some(TransientMessage::new(message));
  }

  pub(crate) fn stories_mut(&mut self) -> &mut StoryListView {
    &mut self.stories
  }

  pub(crate) fn submission(&self) -> &SubmissionForm {
    &self.submission
  }

  fn submit(&mut self) {
    if let Some(url) = self.submission.submit() {
      self.pending_effects.push(Effect::Navigate { url });
    }
  }

  pub(crate) fn update_transient_message(&mut self) {
    if self
      .transient_message
      .as_ref()
      .is_some_and(|message| message.is_expired_at(Instant::now()))
    {
      self.transient_message = None;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn state() -> State {
    State::new(
      LoadParams {
        max_results: NonZeroU32::new(25),
      },
      SubmissionForm::new(
        Url::parse("http://localhost:8080/savestory").unwrap(),
      ),
    )
  }

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  fn loaded_state(json: &str) -> State {
    let mut state = state();
    state.initialize();
    state.handle_event(Event::Stories {
      result: Ok(serde_json::from_str(json).unwrap()),
    });
    state
  }

  fn type_text(state: &mut State, text: &str) {
    for ch in text.chars() {
      assert_eq!(state.handle_key(key(KeyCode::Char(ch))), Command::None);
    }
  }

  #[test]
  fn initialize_issues_one_capped_load() {
    let mut state = state();

    let effects = state.initialize();

    assert_eq!(effects.len(), 1);
    assert!(matches!(
      effects[0],
      Effect::FetchStories { params } if params.max_results == NonZeroU32::new(25)
    ));
    assert!(state.initialize().is_empty());
  }

  #[test]
  fn loaded_stories_replace_loading_status() {
    let mut state = state();

    state.initialize();
    assert_eq!(state.message(), LOADING_STORIES_STATUS);

    state.handle_event(Event::Stories {
      result: Ok(
        serde_json::from_str(
          r#"{"stories":[{"storyId":1,"body":"http://x","title":"Hello"}],"totalCount":1}"#,
        )
        .unwrap(),
      ),
    });

    assert!(state.message().starts_with("1 story"));
  }

  #[test]
  fn failed_load_is_visible_in_status() {
    let mut state = state();

    state.initialize();
    state.handle_event(Event::Stories {
      result: Err(anyhow!("connection refused")),
    });

    assert_eq!(state.message(), "Could not load stories: connection refused");
  }

  #[test]
  fn open_selected_story_navigates_to_its_link() {
    let mut state = loaded_state(
      r#"{"stories":[{"storyId":1,"body":"http://x","title":"Hello"}]}"#,
    );

    let command = state.handle_key(key(KeyCode::Char('o')));

    let dispatch = state.dispatch_command(command).unwrap();

    assert!(matches!(
      &dispatch.effects[..],
      [Effect::Navigate { url }] if url.as_str() == "http://x/"
    ));
  }

  #[test]
  fn open_selected_story_rejects_non_url_links() {
    let mut state = loaded_state(
      r#"{"stories":[{"storyId":1,"body":"not a link","title":"Hello"}]}"#,
    );

    assert!(state.dispatch_command(Command::OpenSelectedStory).is_err());
  }

  #[test]
  fn blank_submission_does_not_navigate() {
    let mut state = state();

    state.dispatch_command(Command::ShowSubmission).unwrap();

    let command = state.handle_key(key(KeyCode::Enter));
    let dispatch = state.dispatch_command(command).unwrap();

    assert!(dispatch.effects.is_empty());
    assert_eq!(state.submission().phase(), FormPhase::Editing);
  }

  #[test]
  fn complete_submission_navigates_to_savestory() {
    let mut state = state();

    let command = state.handle_key(key(KeyCode::Tab));
    assert_eq!(command, Command::ShowSubmission);
    state.dispatch_command(command).unwrap();
    assert_eq!(state.page(), Page::Submission);

    type_text(&mut state, "http://x");
    state.handle_key(key(KeyCode::Tab));
    type_text(&mut state, "Hello");

    let command = state.handle_key(key(KeyCode::Enter));
    let dispatch = state.dispatch_command(command).unwrap();

    assert!(matches!(
      &dispatch.effects[..],
      [Effect::Navigate { url }]
        if url.path() == "/savestory"
          && url.query()
            == Some("storyLink=http%3A%2F%2Fx&storyTitle=Hello&hiddenbutton=hiddenvalue")
    ));
    assert_eq!(state.message(), SUBMITTED_STATUS);
  }

  #[test]
  fn help_captures_keys_until_closed() {
    let mut state = state();

    state.dispatch_command(Command::ShowHelp).unwrap();
    assert_eq!(state.message(), HELP_STATUS);

    assert_eq!(state.handle_key(key(KeyCode::Char('o'))), Command::None);

    let command = state.handle_key(key(KeyCode::Esc));
    state.dispatch_command(command).unwrap();

    assert!(!state.help().is_visible());
  }

  #[test]
  fn ctrl_c_quits_from_the_form() {
    let mut state = state();

    state.dispatch_command(Command::ShowSubmission).unwrap();

    let command = state
      .handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

    assert!(state.dispatch_command(command).unwrap().should_exit);
  }

  #[test]
  fn transient_message_overrides_status() {
    let mut state = state();

    state.set_transient_message("Opened in browser".into());

    assert_eq!(state.message(), "Opened in browser");
  }
}
