//! Detective Quest
//!
//! A console mystery played across a fixed mansion. Rooms form a binary tree,
//! collected clues live in a binary search tree and every clue is tied to a
//! suspect in a chained hash table.

pub mod domain;
pub use domain::{
    ClueIndex, ColorMode, Config, Direction, Investigation, Outcome, Room, RoomMap, Suspect,
    SuspectTable,
};

/// The interactive console session driving exploration and reports.
pub mod session;
pub use session::{Session, SessionError};

pub mod terminal;
