//! Application context and interactive state.
//!
//! `AppContext` is built once in `main` and passed down; there is no global
//! state. `AppState` turns events into effects without doing any I/O itself, so
//! the runner stays a thin loop.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::sync::watch;

use crate::{
    config::ClientConfig,
    domain::{GatewayError, Room, RoomFilter, RoomGateway, Route},
    usecase::{
        BrowseRoomsUseCase, EnterRoomError, EnterRoomUseCase, FeedSnapshot, PageRequest,
        PageResponse, PasswordOutcome, PasswordPrompt, PreviewRoomsUseCase, Selection,
        SessionRecord, StudySession,
    },
};

use super::{
    command::{Command, help_text},
    navigator::Navigator,
    render::{
        PreviewState, render_feed, render_header, render_preview, render_prompt, render_session,
    },
};

/// Process-wide collaborators, created at startup
#[derive(Clone)]
pub struct AppContext {
    pub config: ClientConfig,
    pub gateway: Arc<dyn RoomGateway>,
}

impl AppContext {
    pub fn new(config: ClientConfig, gateway: Arc<dyn RoomGateway>) -> Self {
        Self { config, gateway }
    }
}

/// Everything the event loop reacts to
#[derive(Debug)]
pub enum AppEvent {
    Input(Command),
    InputError(String),
    InputClosed,
    Tick,
    PageFetched(PageResponse),
    PreviewFetched(Result<Vec<Room>, GatewayError>),
    PasswordChecked {
        prompt: PasswordPrompt,
        result: Result<PasswordOutcome, EnterRoomError>,
    },
}

/// Work the runner performs on behalf of the state
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    Print(String),
    FetchPage(PageRequest),
    FetchPreview,
    CheckPassword {
        prompt: PasswordPrompt,
        password: String,
    },
    Record(SessionRecord),
    Quit,
}

pub struct AppState {
    navigator: Navigator,
    browse: BrowseRoomsUseCase,
    enter: EnterRoomUseCase,
    preview: PreviewRoomsUseCase,
    preview_state: PreviewState,
    feed_view: watch::Receiver<FeedSnapshot>,
    prompt: Option<PasswordPrompt>,
    session: Option<StudySession>,
    context: AppContext,
    container_width: u32,
    show_auth_buttons: bool,
}

impl AppState {
    pub fn new(context: AppContext) -> Self {
        let gateway = Arc::clone(&context.gateway);
        let browse = BrowseRoomsUseCase::new(
            Arc::clone(&gateway),
            context.config.layout,
            Default::default(),
        );
        let feed_view = browse.subscribe();

        Self {
            navigator: Navigator::new(Route::Home),
            enter: EnterRoomUseCase::new(Arc::clone(&gateway)),
            preview: PreviewRoomsUseCase::new(gateway),
            browse,
            preview_state: PreviewState::Loading,
            feed_view,
            prompt: None,
            session: None,
            container_width: context.config.container_width,
            context,
            show_auth_buttons: true,
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn prompt(&self) -> Option<&PasswordPrompt> {
        self.prompt.as_ref()
    }

    pub fn session(&self) -> Option<&StudySession> {
        self.session.as_ref()
    }

    pub fn browse(&self) -> &BrowseRoomsUseCase {
        &self.browse
    }

    pub fn preview(&self) -> &PreviewRoomsUseCase {
        &self.preview
    }

    pub fn enter(&self) -> &EnterRoomUseCase {
        &self.enter
    }

    /// Effects to run when the client starts on the home page
    pub fn start(&mut self) -> Vec<Effect> {
        vec![
            Effect::Print(render_header(self.route(), self.show_auth_buttons)),
            Effect::FetchPreview,
        ]
    }

    /// React to one event
    pub fn handle(&mut self, event: AppEvent, now: DateTime<Local>) -> Vec<Effect> {
        let mut effects = match event {
            AppEvent::Input(command) => self.handle_command(command, now),
            AppEvent::InputError(message) => vec![Effect::Print(message)],
            AppEvent::InputClosed => vec![Effect::Quit],
            AppEvent::Tick => {
                if let Some(session) = self.session.as_mut() {
                    session.tick();
                }
                Vec::new()
            }
            AppEvent::PageFetched(response) => {
                self.browse.apply(response);
                Vec::new()
            }
            AppEvent::PreviewFetched(result) => self.preview_loaded(result),
            AppEvent::PasswordChecked { prompt, result } => self.password_checked(prompt, result),
        };
        effects.extend(self.refresh_feed_view());
        effects
    }

    /// Render the room list when its snapshot changed and the list is on screen
    fn refresh_feed_view(&mut self) -> Option<Effect> {
        if !self.feed_view.has_changed().unwrap_or(false) {
            return None;
        }
        let snapshot = self.feed_view.borrow_and_update().clone();
        (*self.route() == Route::StudyRooms).then(|| Effect::Print(render_feed(&snapshot)))
    }

    fn handle_command(&mut self, command: Command, now: DateTime<Local>) -> Vec<Effect> {
        match command {
            Command::Help => vec![Effect::Print(help_text().to_string())],
            Command::Home => {
                self.navigate(Route::Home);
                self.preview_state = PreviewState::Loading;
                vec![self.header(), Effect::FetchPreview]
            }
            Command::Rooms => self.show_rooms(),
            Command::Search(search) => {
                let filter = self.browse.feed().filter().clone().with_search(search);
                self.change_filter(filter)
            }
            Command::Public(is_public) => {
                let filter = self.browse.feed().filter().clone().with_public(is_public);
                self.change_filter(filter)
            }
            Command::Possible(is_possible) => {
                let filter = self
                    .browse
                    .feed()
                    .filter()
                    .clone()
                    .with_possible(is_possible);
                self.change_filter(filter)
            }
            Command::Resize(width) => {
                self.container_width = width;
                if *self.route() != Route::StudyRooms {
                    return vec![Effect::Print(format!("List width set to {}px", width))];
                }
                self.browse
                    .resize(width)
                    .map(Effect::FetchPage)
                    .into_iter()
                    .collect()
            }
            Command::Scroll => {
                if *self.route() != Route::StudyRooms {
                    return vec![Effect::Print("Nothing to scroll here.".to_string())];
                }
                match self.browse.last_item_visible() {
                    Some(request) => vec![Effect::FetchPage(request)],
                    None => Vec::new(),
                }
            }
            Command::Open(number) => self.open(number),
            Command::Password(password) => match &self.prompt {
                Some(prompt) => vec![Effect::CheckPassword {
                    prompt: prompt.clone(),
                    password,
                }],
                None => vec![Effect::Print("No password prompt is open.".to_string())],
            },
            Command::Cancel => {
                if self.prompt.take().is_some() {
                    vec![Effect::Print("Password prompt closed.".to_string())]
                } else {
                    Vec::new()
                }
            }
            Command::Start => self.with_session(|session| session.start(now)),
            Command::Pause => self.with_session(|session| session.pause(now)),
            Command::Timer => match &self.session {
                Some(session) => vec![Effect::Print(render_session(session))],
                None => vec![Effect::Print("You are not in a study room.".to_string())],
            },
            Command::Leave => match self.session.take() {
                Some(session) => {
                    let (record, route) = session.leave(now);
                    let mut effects = vec![Effect::Record(record)];
                    self.navigate(route);
                    effects.extend(self.show_rooms());
                    effects
                }
                None => vec![Effect::Print("You are not in a study room.".to_string())],
            },
            Command::Login => self.auth_page(Route::Login),
            Command::Register => self.auth_page(Route::Register),
            Command::Go(path) => match path.parse::<Route>() {
                Ok(Route::StudyRoom(_)) => vec![Effect::Print(
                    "Open study rooms from the list ('rooms', then 'open <n>').".to_string(),
                )],
                Ok(Route::StudyRooms) => self.show_rooms(),
                Ok(Route::Home) => self.handle_command(Command::Home, now),
                Ok(route) => {
                    self.navigate(route);
                    vec![self.header()]
                }
                Err(e) => vec![Effect::Print(e.to_string())],
            },
            Command::Back => {
                self.session = None;
                self.prompt = None;
                // Room pages are only entered from the list, never by going back
                loop {
                    match self.navigator.back().cloned() {
                        Some(Route::StudyRoom(_)) => continue,
                        Some(_) => break,
                        None if matches!(self.route(), Route::StudyRoom(_)) => {
                            return self.show_rooms();
                        }
                        None => return vec![Effect::Print("No previous page.".to_string())],
                    }
                }
                let mut effects = vec![self.header()];
                if *self.route() == Route::StudyRooms {
                    effects.push(Effect::Print(render_feed(&self.browse.snapshot())));
                }
                effects
            }
            Command::Quit => vec![Effect::Quit],
        }
    }

    /// Header buttons; only shown on the room list
    fn auth_page(&mut self, route: Route) -> Vec<Effect> {
        if !(self.show_auth_buttons && *self.route() == Route::StudyRooms) {
            return vec![Effect::Print(
                "Login and register are available from the room list.".to_string(),
            )];
        }
        self.navigate(route);
        vec![self.header()]
    }

    fn header(&self) -> Effect {
        Effect::Print(render_header(self.route(), self.show_auth_buttons))
    }

    fn navigate(&mut self, route: Route) {
        if let Route::StudyRoom(_) = self.navigator.current() {
            self.session = None;
        }
        // The password prompt belongs to the room list
        if route != Route::StudyRooms {
            self.prompt = None;
        }
        self.navigator.navigate(route);
    }

    /// Show the room list; the first visit measures the container and starts loading
    fn show_rooms(&mut self) -> Vec<Effect> {
        self.navigate(Route::StudyRooms);
        let mut effects = vec![self.header()];
        match self.browse.resize(self.container_width) {
            Some(request) => effects.push(Effect::FetchPage(request)),
            None => {
                // Mark as seen so it is not printed twice
                self.feed_view.mark_unchanged();
                effects.push(Effect::Print(render_feed(&self.browse.snapshot())));
            }
        }
        effects
    }

    fn change_filter(&mut self, filter: RoomFilter) -> Vec<Effect> {
        if *self.route() != Route::StudyRooms {
            return vec![Effect::Print(
                "Filters apply to the room list ('rooms').".to_string(),
            )];
        }
        self.browse
            .set_filter(filter)
            .map(Effect::FetchPage)
            .into_iter()
            .collect()
    }

    fn open(&mut self, number: usize) -> Vec<Effect> {
        match self.route() {
            Route::Home => {
                let PreviewState::Loaded(rooms) = &self.preview_state else {
                    return vec![Effect::Print("The preview is not loaded.".to_string())];
                };
                let Some(room) = number.checked_sub(1).and_then(|i| rooms.get(i)) else {
                    return vec![Effect::Print(format!("No room number {}.", number))];
                };
                let route = self.preview.select(room);
                self.navigate(route);
                vec![self.header()]
            }
            Route::StudyRooms => {
                let Some(room) = number.checked_sub(1).and_then(|i| self.browse.room_at(i)) else {
                    return vec![Effect::Print(format!("No room number {}.", number))];
                };
                match self.enter.select(room) {
                    Selection::Enter(route) => self.enter_room(route),
                    Selection::PasswordRequired(prompt) => {
                        let text = render_prompt(&prompt);
                        self.prompt = Some(prompt);
                        vec![Effect::Print(text)]
                    }
                }
            }
            _ => vec![Effect::Print("There is no room list on this page.".to_string())],
        }
    }

    fn enter_room(&mut self, route: Route) -> Vec<Effect> {
        self.prompt = None;
        self.navigate(route);
        self.session = Some(StudySession::new(
            self.context.config.user_id.clone(),
            Default::default(),
        ));
        vec![
            self.header(),
            Effect::Print("'start' to run the study timer, 'leave' to exit.".to_string()),
        ]
    }

    fn with_session(
        &mut self,
        action: impl FnOnce(&mut StudySession) -> Option<SessionRecord>,
    ) -> Vec<Effect> {
        let Some(session) = self.session.as_mut() else {
            return vec![Effect::Print("You are not in a study room.".to_string())];
        };
        let record = action(session);
        let status = render_session(session);
        let mut effects: Vec<Effect> = record.into_iter().map(Effect::Record).collect();
        effects.push(Effect::Print(status));
        effects
    }

    fn preview_loaded(&mut self, result: Result<Vec<Room>, GatewayError>) -> Vec<Effect> {
        self.preview_state = match result {
            Ok(rooms) => PreviewState::Loaded(rooms),
            Err(e) => {
                tracing::warn!("Failed to load home preview: {}", e);
                PreviewState::Failed(e.to_string())
            }
        };
        if *self.route() == Route::Home {
            vec![Effect::Print(render_preview(&self.preview_state))]
        } else {
            Vec::new()
        }
    }

    fn password_checked(
        &mut self,
        prompt: PasswordPrompt,
        result: Result<PasswordOutcome, EnterRoomError>,
    ) -> Vec<Effect> {
        // The prompt was cancelled or replaced meanwhile
        if self.prompt.as_ref() != Some(&prompt) {
            return Vec::new();
        }
        match result {
            Ok(PasswordOutcome::Confirmed(route)) => self.enter_room(route),
            Ok(PasswordOutcome::Mismatch) => vec![Effect::Print(
                "Password does not match. Try again or 'cancel'.".to_string(),
            )],
            Err(EnterRoomError::InvalidPassword(e)) => vec![Effect::Print(e.to_string())],
            Err(e @ EnterRoomError::Gateway(_)) => {
                self.prompt = None;
                vec![Effect::Print(format!(
                    "Could not check the password: {}",
                    e
                ))]
            }
        }
    }
}
