//! Domain models for the investigation.
//!
//! This module contains the mansion layout, the clue index, the suspect table
//! and the scenario tying rooms to clues and suspects.

/// The fixed binary tree of rooms.
pub mod room_map;
pub use room_map::{Direction, Room, RoomMap};

/// Binary search tree of collected clues.
pub mod clue_index;
pub use clue_index::ClueIndex;

/// Chained hash table from suspects to their clues.
pub mod suspect_table;
pub use suspect_table::{Suspect, SuspectTable};

/// The static room to clue to suspect table.
pub mod scenario;
pub use scenario::ScenarioEntry;

mod investigation;
pub use investigation::{Investigation, Outcome};

mod config;
pub use config::{ColorMode, Config, ConfigError};
