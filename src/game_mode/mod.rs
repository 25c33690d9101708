//! Custom game mode records
//!
//! This module defines the immutable `GameModeConfig` record that the editor
//! produces and the storage layer persists, together with the closed sets of
//! choices a player can make for each rule of the game.

use std::time::Duration;

use enum_map::Enum;
use garde::Validate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::game_mode::{MAX_TIME_LIMIT_SECONDS, MIN_LABEL_LENGTH, MIN_TIME_LIMIT_SECONDS};

pub mod time_limit;

/// Validation result type for duration validation
type ValidationResult = garde::Result;

/// Validates that a duration falls within specified bounds.
///
/// Custom validation function for use with the `garde` crate. The range
/// `MIN_SECONDS..=MAX_SECONDS` is inclusive at both ends.
///
/// # Errors
///
/// Returns a `garde::Error` if the duration is outside the specified bounds.
pub fn validate_duration<const MIN_SECONDS: u32, const MAX_SECONDS: u32>(
    val: &Duration,
    _ctx: &(),
) -> ValidationResult {
    if (u64::from(MIN_SECONDS)..=u64::from(MAX_SECONDS)).contains(&val.as_secs()) {
        Ok(())
    } else {
        Err(garde::Error::new(format!(
            "outside of bounds [{MIN_SECONDS},{MAX_SECONDS}]",
        )))
    }
}

/// A stored value that does not correspond to any known choice
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unsupported {kind}: {value}")]
pub struct UnsupportedValue {
    /// Name of the choice being decoded
    kind: &'static str,
    /// The raw value that was rejected
    value: u8,
}

/// Surrogate key assigned by the store
///
/// A freshly constructed game mode carries [`GameModeId::UNASSIGNED`] until
/// a store inserts it and hands back the stored copy.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct GameModeId(u64);

impl GameModeId {
    /// Identifier of a game mode that has not been stored yet
    pub const UNASSIGNED: Self = Self(0);

    /// Whether a store has assigned this identifier
    pub fn is_assigned(self) -> bool {
        self != Self::UNASSIGNED
    }

    /// The identifier following this one, or `None` past the last one
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

/// Distinguishes player-defined modes from the built-in presets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Kind {
    /// A mode created through the editor
    #[default]
    Custom,
}

/// Size of the square letter grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BoardSize {
    /// 4×4 grid, 16 tiles
    FourByFour,
    /// 5×5 grid, 25 tiles
    FiveByFive,
    /// 6×6 grid, 36 tiles
    SixBySix,
}

impl BoardSize {
    /// Number of tiles along one side of the grid
    pub const fn width(self) -> u8 {
        match self {
            Self::FourByFour => 4,
            Self::FiveByFive => 5,
            Self::SixBySix => 6,
        }
    }

    /// Total number of tiles on the board
    pub const fn tiles(self) -> u8 {
        self.width() * self.width()
    }
}

impl From<BoardSize> for u8 {
    fn from(size: BoardSize) -> Self {
        size.tiles()
    }
}

impl TryFrom<u8> for BoardSize {
    type Error = UnsupportedValue;

    fn try_from(tiles: u8) -> Result<Self, Self::Error> {
        match tiles {
            16 => Ok(Self::FourByFour),
            25 => Ok(Self::FiveByFive),
            36 => Ok(Self::SixBySix),
            value => Err(UnsupportedValue {
                kind: "board size",
                value,
            }),
        }
    }
}

/// Shortest word a player may submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MinWordLength {
    /// Three letters
    Three,
    /// Four letters
    Four,
    /// Five letters
    Five,
    /// Six letters
    Six,
}

impl MinWordLength {
    /// Number of letters required
    pub const fn letters(self) -> u8 {
        match self {
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
        }
    }
}

impl From<MinWordLength> for u8 {
    fn from(length: MinWordLength) -> Self {
        length.letters()
    }
}

impl TryFrom<u8> for MinWordLength {
    type Error = UnsupportedValue;

    fn try_from(letters: u8) -> Result<Self, Self::Error> {
        match letters {
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            value => Err(UnsupportedValue {
                kind: "minimum word length",
                value,
            }),
        }
    }
}

/// How a found word is scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
pub enum ScoreType {
    /// Sum of the point values of each letter
    #[serde(rename = "letters")]
    LetterPoints,
    /// Points depend only on the length of the word
    #[serde(rename = "words")]
    WordLength,
}

impl ScoreType {
    /// Stored name of this score type
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LetterPoints => "letters",
            Self::WordLength => "words",
        }
    }
}

/// Visual aids shown on the board during play
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HintMode {
    /// No hints
    #[default]
    #[serde(rename = "hint_none")]
    None,
    /// Each tile shows how many words still use it
    #[serde(rename = "tile_count")]
    TileCount,
    /// Tiles are coloured by how useful their letter is
    #[serde(rename = "hint_colour")]
    Colour,
    /// Tile counts and colouring together
    #[serde(rename = "hint_both")]
    Both,
}

impl HintMode {
    /// Combines the two independent hint check boxes into a single mode
    pub const fn from_flags(tile_count: bool, colour: bool) -> Self {
        match (tile_count, colour) {
            (true, true) => Self::Both,
            (false, true) => Self::Colour,
            (true, false) => Self::TileCount,
            (false, false) => Self::None,
        }
    }

    /// Stored name of this hint mode
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "hint_none",
            Self::TileCount => "tile_count",
            Self::Colour => "hint_colour",
            Self::Both => "hint_both",
        }
    }
}

/// A complete, validated custom game mode
///
/// Instances are only created through [`GameModeConfig::custom`], which
/// validates every field, and are never mutated afterwards. Stores hand back
/// a copy carrying the identifier they assigned.
#[serde_with::serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct GameModeConfig {
    /// Identifier assigned by the store, unassigned before insertion
    #[garde(skip)]
    #[serde(default)]
    id: GameModeId,
    /// Always `CUSTOM` for modes created by players
    #[garde(skip)]
    #[serde(default)]
    kind: Kind,
    /// Display name chosen by the player
    #[garde(length(chars, min = MIN_LABEL_LENGTH))]
    label: String,
    /// Size of the letter grid
    #[garde(skip)]
    board_size: BoardSize,
    /// Length of a round
    #[garde(custom(validate_duration::<MIN_TIME_LIMIT_SECONDS, MAX_TIME_LIMIT_SECONDS>))]
    #[serde_as(as = "serde_with::DurationSeconds<u64>")]
    #[serde(rename = "time_limit_seconds")]
    time_limit: Duration,
    /// Shortest accepted word
    #[garde(skip)]
    min_word_length: MinWordLength,
    /// Scoring rule
    #[garde(skip)]
    score_type: ScoreType,
    /// Hints shown during play
    #[garde(skip)]
    hint_mode: HintMode,
}

impl GameModeConfig {
    /// Builds a new, unstored custom game mode
    ///
    /// # Errors
    ///
    /// Returns a `garde::Report` when the label is empty or the time limit
    /// falls outside the accepted range.
    pub fn custom(
        label: impl Into<String>,
        board_size: BoardSize,
        time_limit: Duration,
        min_word_length: MinWordLength,
        score_type: ScoreType,
        hint_mode: HintMode,
    ) -> Result<Self, garde::Report> {
        let config = Self {
            id: GameModeId::UNASSIGNED,
            kind: Kind::Custom,
            label: label.into(),
            board_size,
            time_limit,
            min_word_length,
            score_type,
            hint_mode,
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy carrying the identifier assigned by a store
    pub(crate) fn with_id(self, id: GameModeId) -> Self {
        Self { id, ..self }
    }

    /// Store identifier, unassigned before insertion
    pub fn id(&self) -> GameModeId {
        self.id
    }

    /// Whether this is a built-in or player-defined mode
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Display name
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Size of the letter grid
    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    /// Length of a round
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Length of a round in whole seconds
    pub fn time_limit_seconds(&self) -> u64 {
        self.time_limit.as_secs()
    }

    /// Shortest accepted word
    pub fn min_word_length(&self) -> MinWordLength {
        self.min_word_length
    }

    /// Scoring rule
    pub fn score_type(&self) -> ScoreType {
        self.score_type
    }

    /// Hints shown during play
    pub fn hint_mode(&self) -> HintMode {
        self.hint_mode
    }
}
