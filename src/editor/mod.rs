//! New game mode editor
//!
//! [`GameModeEditor`] drives the screen on which a player defines a custom
//! game mode. It validates the [`Form`] when the player asks to save, builds
//! a [`GameModeConfig`](crate::game_mode::GameModeConfig), hands the insert
//! to the database's background write context and closes the screen once
//! the write has completed.

use std::sync::Arc;

use thiserror::Error;
use tokio::{sync::watch, task::JoinHandle};

use crate::{
    game_mode::{GameModeId, time_limit},
    screen::{Notice, Screen},
    storage::{self, Database, GameModeStore, WriteExecutor},
};

pub mod form;

pub use form::{Form, RadioGroup};

/// Lifecycle of the editor
///
/// Only [`State::Editing`] and [`State::Closed`] are visible to the player;
/// [`State::Saving`] just stops a second save while a write is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum State {
    /// Accepting input
    #[default]
    Editing,
    /// A write has been submitted and has not completed yet
    Saving,
    /// The screen has been dismissed; terminal
    Closed,
}

/// Commands exposed on the editor's toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Validate the form and store the game mode
    Save,
    /// Leave the screen without saving
    Up,
}

/// Errors reported to the player while saving
///
/// The `Display` text is the message shown on the screen.
#[derive(Error, Debug)]
pub enum Error {
    /// The time-limit field is unusable
    #[error(transparent)]
    TimeLimit(#[from] time_limit::Error),
    /// A choice group has nothing checked or the label is empty
    #[error("All fields required.")]
    MissingSelection,
    /// The editor is not accepting input
    #[error("Game mode editor is not editing.")]
    NotEditing,
    /// The store rejected the write
    #[error("Could not save game mode.")]
    Storage(#[source] storage::Error),
}

impl Error {
    /// The notice shown to the player for this error
    pub fn notice(&self) -> Notice {
        match self {
            Self::MissingSelection => Notice::short(self.to_string()),
            _ => Notice::long(self.to_string()),
        }
    }
}

/// Controller for the new game mode screen
pub struct GameModeEditor<S, D> {
    form: Form,
    screen: Arc<S>,
    store: Arc<D>,
    write_executor: WriteExecutor,
    state: Arc<watch::Sender<State>>,
}

impl<S, D> GameModeEditor<S, D>
where
    S: Screen + 'static,
    D: GameModeStore + 'static,
{
    /// Opens the editor with an empty form
    pub fn new(screen: S, database: &Database<D>) -> Self {
        let (state, _) = watch::channel(State::Editing);
        Self {
            form: Form::new(),
            screen: Arc::new(screen),
            store: database.game_modes(),
            write_executor: database.write_executor().clone(),
            state: Arc::new(state),
        }
    }

    /// Current input
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Mutable access to the input, for the host's widgets
    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    /// Current lifecycle state
    pub fn state(&self) -> State {
        *self.state.borrow()
    }

    /// Whether the editor is accepting input
    pub fn is_editing(&self) -> bool {
        self.state() == State::Editing
    }

    /// Waits until the screen has been closed
    pub async fn wait_closed(&self) {
        let mut receiver = self.state.subscribe();
        let _ = receiver.wait_for(|state| *state == State::Closed).await;
    }

    /// Handles a toolbar command
    ///
    /// Returns whether the command was handled. A save with an unusable
    /// time-limit field is reported to the player but left unhandled, as is
    /// any command once the editor has stopped editing.
    pub fn on_menu_action(&mut self, action: MenuAction) -> bool {
        if !self.is_editing() {
            return false;
        }

        match action {
            MenuAction::Save => match self.save() {
                Ok(_) => true,
                Err(e) => {
                    self.screen.show_notice(&e.notice());
                    !matches!(e, Error::TimeLimit(_))
                }
            },
            MenuAction::Up => {
                self.close();
                true
            }
        }
    }

    /// Validates the form and submits the insert in the background
    ///
    /// The returned handle resolves to the stored identifier, or `None` if
    /// the write failed. Dropping it does not cancel the write. On success
    /// the screen is closed from the background context; on failure the
    /// editor returns to editing and the player is told.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotEditing`] when a save is already in flight or the
    /// screen is closed, and any validation error from [`Form::game_mode`].
    pub fn save(&mut self) -> Result<JoinHandle<Option<GameModeId>>, Error> {
        if !self.is_editing() {
            return Err(Error::NotEditing);
        }

        let game_mode = self.form.game_mode()?;

        let store = Arc::clone(&self.store);
        let screen = Arc::clone(&self.screen);
        let state = Arc::clone(&self.state);

        self.state.send_replace(State::Saving);
        tracing::debug!(label = game_mode.label(), "submitting game mode");

        Ok(self.write_executor.execute(async move {
            match store.insert(game_mode).await {
                Ok(stored) => {
                    state.send_replace(State::Closed);
                    screen.close();
                    Some(stored.id())
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to save game mode");
                    state.send_replace(State::Editing);
                    screen.show_notice(&Error::Storage(e).notice());
                    None
                }
            }
        }))
    }

    fn close(&self) {
        self.state.send_replace(State::Closed);
        tracing::debug!("game mode editor closed");
        self.screen.close();
    }
}
