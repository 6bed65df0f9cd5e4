//! Walking the mansion.
//!
//! An [`Explorer`] is a two-state machine: it is either standing in a room or
//! done. Moving towards a missing exit is an error that leaves it where it was.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::{Direction, Room};

/// A command typed while exploring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreCommand {
    /// `e` / `d`: go left or right.
    Move(Direction),
    /// `s`: stop exploring.
    Leave,
}

/// Error returned when an exploration line cannot be understood.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown exploration command '{0}'")]
pub struct ParseCommandError(String);

impl FromStr for ExploreCommand {
    type Err = ParseCommandError;

    /// Only the first non-blank character counts, in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('e') => Ok(Self::Move(Direction::Left)),
            Some('d') => Ok(Self::Move(Direction::Right)),
            Some('s') => Ok(Self::Leave),
            _ => Err(ParseCommandError(trimmed.to_owned())),
        }
    }
}

/// Error returned when a command cannot be applied.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    /// The current room has no exit in that direction.
    #[error("there is no path to the {direction} of {room}")]
    NoPath {
        /// The room the explorer stays in.
        room: &'static str,
        /// The direction that was refused.
        direction: Direction,
    },
    /// The exploration already ended.
    #[error("the exploration is over")]
    Finished,
}

/// Where an [`Explorer`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorationState<'m> {
    /// Standing in a room.
    AtRoom(&'m Room),
    /// Left the exploration.
    Done,
}

/// Walks a room tree under user direction.
#[derive(Debug)]
pub struct Explorer<'m> {
    state: ExplorationState<'m>,
}

impl<'m> Explorer<'m> {
    /// Starts in `root`.
    #[must_use]
    pub const fn new(root: &'m Room) -> Self {
        Self {
            state: ExplorationState::AtRoom(root),
        }
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> ExplorationState<'m> {
        self.state
    }

    /// The room the explorer stands in, or `None` once done.
    #[must_use]
    pub const fn current(&self) -> Option<&'m Room> {
        match self.state {
            ExplorationState::AtRoom(room) => Some(room),
            ExplorationState::Done => None,
        }
    }

    /// Applies `command` and returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoPath`] if the current room has no exit that way,
    /// and [`MoveError::Finished`] after leaving. The state is unchanged on
    /// error.
    pub fn apply(&mut self, command: ExploreCommand) -> Result<ExplorationState<'m>, MoveError> {
        let ExplorationState::AtRoom(room) = self.state else {
            return Err(MoveError::Finished);
        };

        self.state = match command {
            ExploreCommand::Leave => ExplorationState::Done,
            ExploreCommand::Move(direction) => {
                let next = room.child(direction).ok_or(MoveError::NoPath {
                    room: room.name(),
                    direction,
                })?;
                tracing::debug!(from = room.name(), to = next.name(), "moved");
                ExplorationState::AtRoom(next)
            }
        };
        Ok(self.state)
    }
}
