//! The mansion is a fixed binary tree of rooms.
//!
//! The shape is described declaratively by [`MANSION`], one row per room
//! naming its left and right exits. [`RoomMap::build`] grows an owned tree from
//! that table once at startup; nothing mutates it afterwards.

use std::fmt;

use tracing::instrument;

/// The room every exploration starts from.
pub const ENTRANCE: &str = "Hall de Entrada";

/// One row of the mansion layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomLayout {
    /// Name of the room.
    pub name: &'static str,
    /// Room reached by going left, if any.
    pub left: Option<&'static str>,
    /// Room reached by going right, if any.
    pub right: Option<&'static str>,
}

const fn room(
    name: &'static str,
    left: Option<&'static str>,
    right: Option<&'static str>,
) -> RoomLayout {
    RoomLayout { name, left, right }
}

/// The mansion layout.
///
/// ```text
///                  [Hall de Entrada]
///                 /                 \
///          [Biblioteca]           [Cozinha]
///           /        \             /      \
///       [Sotao]  [Escritorio]  [Quarto]  [Jardim]
///           \                              /
///          [Porão]                     [Adega]
/// ```
///
/// Some rooms deliberately lack one of their exits.
pub const MANSION: &[RoomLayout] = &[
    room(ENTRANCE, Some("Biblioteca"), Some("Cozinha")),
    room("Biblioteca", Some("Sotao"), Some("Escritorio")),
    room("Cozinha", Some("Quarto"), Some("Jardim")),
    room("Sotao", None, Some("Porão")),
    room("Escritorio", None, None),
    room("Quarto", None, None),
    room("Jardim", Some("Adega"), None),
    room("Porão", None, None),
    room("Adega", None, None),
];

/// A direction the player can take from a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the left child.
    Left,
    /// Towards the right child.
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "esquerda"),
            Self::Right => write!(f, "direita"),
        }
    }
}

/// A room of the mansion, owning the rooms below it.
#[derive(Debug, PartialEq, Eq)]
pub struct Room {
    name: &'static str,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    /// The name of the room.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The room to the left, if there is one.
    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The room to the right, if there is one.
    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The room reached by moving in `direction`, if there is one.
    #[must_use]
    pub fn child(&self, direction: Direction) -> Option<&Self> {
        match direction {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    /// Iterates over this room and every room below it, parents first.
    pub fn iter(&self) -> impl Iterator<Item = &Self> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let room = stack.pop()?;
            stack.extend(room.right());
            stack.extend(room.left());
            Some(room)
        })
    }
}

/// The whole mansion, rooted at [`ENTRANCE`].
#[derive(Debug, PartialEq, Eq)]
pub struct RoomMap {
    root: Box<Room>,
}

impl RoomMap {
    /// Builds the mansion from [`MANSION`].
    #[must_use]
    #[instrument(level = "debug")]
    pub fn build() -> Self {
        let root = grow(ENTRANCE, MANSION);
        tracing::debug!(rooms = root.iter().count(), "mansion built");
        Self { root }
    }

    /// The entrance hall.
    #[must_use]
    pub fn root(&self) -> &Room {
        &self.root
    }

    /// Finds a room by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Room> {
        self.root.iter().find(|room| room.name == name)
    }

    /// The number of rooms in the mansion.
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.iter().count()
    }

    /// Always `false`: the mansion has at least its entrance.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Default for RoomMap {
    fn default() -> Self {
        Self::build()
    }
}

/// Grows the subtree rooted at `name`. Rooms without a layout row are leaves.
fn grow(name: &'static str, layout: &[RoomLayout]) -> Box<Room> {
    let row = layout.iter().find(|row| row.name == name);
    Box::new(Room {
        name,
        left: row.and_then(|row| row.left).map(|left| grow(left, layout)),
        right: row.and_then(|row| row.right).map(|right| grow(right, layout)),
    })
}
