use crate::config::Defaults;
use crate::quiz::{QuizSession, SessionConfig, SubmissionResult};
use crate::ui::mvi::Reducer;
use crate::ui::quiz::QuizScreen;
use crate::ui::setup::{SetupIntent, SetupReducer, SetupState};

/// Builds the session for a confirmed setup.
pub type SessionFactory = Box<dyn Fn(SessionConfig) -> QuizSession + Send>;

#[derive(Debug)]
pub enum Screen {
    Setup(SetupState),
    Quiz(QuizScreen),
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    start_session: SessionFactory,
}

impl App {
    pub fn new(defaults: &Defaults) -> Self {
        Self::with_session_factory(defaults, Box::new(QuizSession::start))
    }

    pub fn with_session_factory(defaults: &Defaults, start_session: SessionFactory) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Setup(SetupState::from_defaults(defaults)),
            start_session,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn quiz(&self) -> Option<&QuizScreen> {
        match &self.screen {
            Screen::Quiz(quiz) => Some(quiz),
            Screen::Setup(_) => None,
        }
    }

    pub fn quiz_mut(&mut self) -> Option<&mut QuizScreen> {
        match &mut self.screen {
            Screen::Quiz(quiz) => Some(quiz),
            Screen::Setup(_) => None,
        }
    }

    /// Runs a setup intent through the reducer. Ignored outside setup.
    pub fn dispatch_setup(&mut self, intent: SetupIntent) {
        if let Screen::Setup(state) = &mut self.screen {
            *state = SetupReducer::reduce(std::mem::take(state), intent);
        }
    }

    /// "Start Quiz": fixes the config and hands it to a new session.
    pub fn start_quiz(&mut self) {
        let Screen::Setup(state) = &self.screen else {
            return;
        };
        match state.session_config() {
            Ok(config) => {
                let session = (self.start_session)(config);
                self.screen = Screen::Quiz(QuizScreen::new(session));
            }
            Err(err) => tracing::warn!("Cannot start quiz: {}", err),
        }
    }

    /// "Submit": grades the current answer.
    pub fn submit(&mut self) -> Option<SubmissionResult> {
        self.quiz_mut().map(QuizScreen::submit)
    }

    /// Discards the session and goes back to setup with the same settings.
    pub fn return_to_setup(&mut self) {
        if let Screen::Quiz(quiz) = &self.screen {
            tracing::debug!(
                finished = quiz.session().is_finished(),
                "Returning to setup"
            );
            self.screen = Screen::Setup(SetupState::from_config(quiz.config()));
        }
    }
}
