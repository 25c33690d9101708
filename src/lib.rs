//! # Lexica Game Mode Library
//!
//! This library provides the custom game mode editor for the Lexica word
//! game. It validates what a player enters on the "new game mode" screen,
//! builds an immutable game mode record and stores it locally on a
//! background write context before closing the screen.
//!
//! The host application supplies the screen through [`screen::Screen`] and
//! chooses a store from [`storage`].

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

pub mod constants;

pub mod editor;
pub mod game_mode;
pub mod screen;
pub mod settings;
pub mod storage;

pub use editor::{GameModeEditor, MenuAction};
pub use game_mode::GameModeConfig;
pub use settings::Settings;
pub use storage::Database;
