//! Editable form state
//!
//! The form mirrors the widgets of the new game mode screen: three groups of
//! mutually exclusive options, two independent hint check boxes, a label and
//! the time-limit text. Reading it never changes it.

use derive_where::derive_where;
use enum_map::{EnumArray, EnumMap};

use super::Error;
use crate::game_mode::{
    BoardSize, GameModeConfig, HintMode, MinWordLength, ScoreType, time_limit,
};

/// A group of options where at most one is meant to be checked
///
/// Checking an option through [`RadioGroup::check`] unchecks the others.
/// Hosts that mirror raw widget state with [`RadioGroup::set_checked`] may end
/// up with several options checked; the first in declaration order wins.
#[derive_where(Clone; T::Array)]
#[derive(Debug)]
#[derive_where(Default)]
pub struct RadioGroup<T: EnumArray<bool>> {
    checked: EnumMap<T, bool>,
}

impl<T: EnumArray<bool> + Copy> RadioGroup<T> {
    /// Checks `option` and unchecks every other option
    pub fn check(&mut self, option: T) {
        self.checked = EnumMap::default();
        self.checked[option] = true;
    }

    /// Sets a single option without touching the others
    pub fn set_checked(&mut self, option: T, checked: bool) {
        self.checked[option] = checked;
    }

    /// Unchecks every option
    pub fn clear(&mut self) {
        self.checked = EnumMap::default();
    }

    /// Whether `option` is currently checked
    pub fn is_checked(&self, option: T) -> bool {
        self.checked[option]
    }

    /// The checked option, or `None` when nothing is checked
    pub fn selected(&self) -> Option<T> {
        self.checked
            .iter()
            .find_map(|(option, &checked)| checked.then_some(option))
    }
}

/// Everything the player has entered on the editor screen
///
/// A new form is empty: no option checked, both hint boxes unchecked and
/// both text fields blank.
#[derive(Debug, Clone, Default)]
pub struct Form {
    /// Board size choices
    pub board_size: RadioGroup<BoardSize>,
    /// Minimum word length choices
    pub min_word_length: RadioGroup<MinWordLength>,
    /// Score type choices
    pub score_type: RadioGroup<ScoreType>,
    /// "Show tile counts" check box
    pub hint_tile_count: bool,
    /// "Colour tiles" check box
    pub hint_colour: bool,
    /// Label text field
    pub label: String,
    /// Time-limit text field, in minutes
    pub time: String,
}

impl Form {
    /// Creates an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Label with surrounding whitespace removed
    pub fn label(&self) -> &str {
        self.label.trim()
    }

    /// Hint mode implied by the two check boxes
    pub fn hint_mode(&self) -> HintMode {
        HintMode::from_flags(self.hint_tile_count, self.hint_colour)
    }

    /// Validates the time-limit field on its own
    ///
    /// # Errors
    ///
    /// Returns the field's [`time_limit::Error`].
    pub fn time_limit(&self) -> Result<std::time::Duration, time_limit::Error> {
        time_limit::parse(&self.time)
    }

    /// Builds an unstored game mode from the current input
    ///
    /// The time limit is checked first, then board size, minimum word
    /// length, score type and label. The hint mode always resolves.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimeLimit`] for a bad time-limit field and
    /// [`Error::MissingSelection`] for the first unresolved choice or an
    /// empty label. No config is built in either case.
    pub fn game_mode(&self) -> Result<GameModeConfig, Error> {
        let time_limit = self.time_limit()?;

        let board_size = self.board_size.selected().ok_or(Error::MissingSelection)?;
        let min_word_length = self
            .min_word_length
            .selected()
            .ok_or(Error::MissingSelection)?;
        let score_type = self.score_type.selected().ok_or(Error::MissingSelection)?;

        let label = self.label();
        if label.is_empty() {
            return Err(Error::MissingSelection);
        }

        GameModeConfig::custom(
            label,
            board_size,
            time_limit,
            min_word_length,
            score_type,
            self.hint_mode(),
        )
        .map_err(|_| Error::MissingSelection)
    }
}
