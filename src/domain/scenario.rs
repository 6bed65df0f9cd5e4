//! Which clue waits in which room, and whom it points at.

/// One row of the scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioEntry {
    /// The room holding the clue.
    pub room: &'static str,
    /// The clue found there.
    pub clue: &'static str,
    /// The suspect the clue points at.
    pub suspect: &'static str,
}

const fn entry(room: &'static str, clue: &'static str, suspect: &'static str) -> ScenarioEntry {
    ScenarioEntry {
        room,
        clue,
        suspect,
    }
}

/// The fixed scenario. Rooms not listed hold no clue.
pub const SCENARIO: &[ScenarioEntry] = &[
    entry("Biblioteca", "Livro rasgado com assinatura", "Professor"),
    entry("Cozinha", "Faca com marcas recentes", "Chef"),
    entry("Sotao", "Pegadas cobertas de poeira", "Jardineiro"),
    entry("Escritorio", "Cofre arrombado", "Mordomo"),
    entry("Quarto", "Perfume raro espalhado", "Madame"),
    entry("Porão", "Luvas com fuligem", "Jardineiro"),
    entry("Jardim", "Terra fresca nas botas", "Jardineiro"),
];

/// The first scenario entry for `room`, if any.
#[must_use]
pub fn lookup(room: &str) -> Option<&'static ScenarioEntry> {
    SCENARIO.iter().find(|entry| entry.room == room)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{room_map::MANSION, RoomMap};

    #[test]
    fn every_scenario_room_exists() {
        let map = RoomMap::build();
        for entry in SCENARIO {
            assert!(map.find(entry.room).is_some(), "{} is not in the mansion", entry.room);
        }
    }

    #[test]
    fn entrance_and_cellar_hold_nothing() {
        assert!(lookup("Hall de Entrada").is_none());
        assert!(lookup("Adega").is_none());
        assert_eq!(MANSION.len() - SCENARIO.len(), 2);
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(lookup("Biblioteca").unwrap().suspect, "Professor");
        assert!(lookup("biblioteca").is_none());
        assert!(lookup("Porao").is_none());
        assert_eq!(lookup("Porão").unwrap().clue, "Luvas com fuligem");
    }
}
