use tracing::instrument;

use crate::domain::{
    clue_index::ClueIndex,
    scenario::{self, ScenarioEntry},
    suspect_table::SuspectTable,
};

/// What happened when a room was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The room's clue was collected for the first time.
    Discovered(&'static ScenarioEntry),
    /// The room's clue had already been collected.
    Revisited(&'static ScenarioEntry),
    /// The room holds no clue.
    NothingHere,
}

/// The detective's notebook: every collected clue and the suspects they
/// implicate.
#[derive(Debug, Default)]
pub struct Investigation {
    clues: ClueIndex,
    suspects: SuspectTable,
}

impl Investigation {
    /// Starts an investigation with nothing collected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The clues collected so far.
    #[must_use]
    pub const fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    /// The suspects implicated so far.
    #[must_use]
    pub const fn suspects(&self) -> &SuspectTable {
        &self.suspects
    }

    /// Collects the clue of `room`, if it has one and it is new.
    #[instrument(level = "debug", skip(self))]
    pub fn resolve_room_clue(&mut self, room: &str) -> Outcome {
        let Some(entry) = scenario::lookup(room) else {
            return Outcome::NothingHere;
        };

        if self.clues.contains(entry.clue) {
            tracing::debug!(clue = entry.clue, "clue already collected");
            return Outcome::Revisited(entry);
        }

        self.clues.insert(entry.clue);
        self.suspects.associate(entry.clue, entry.suspect);
        tracing::info!(clue = entry.clue, suspect = entry.suspect, "clue discovered");
        Outcome::Discovered(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_visit_discovers_the_clue() {
        let mut investigation = Investigation::new();

        let outcome = investigation.resolve_room_clue("Biblioteca");

        let Outcome::Discovered(entry) = outcome else {
            panic!("expected a discovery, got {outcome:?}");
        };
        assert_eq!(entry.clue, "Livro rasgado com assinatura");
        assert!(investigation.clues().contains("Livro rasgado com assinatura"));
        assert_eq!(
            investigation.suspects().get("Professor").unwrap().clue_count(),
            1
        );
    }

    #[test]
    fn second_visit_changes_nothing() {
        let mut investigation = Investigation::new();
        investigation.resolve_room_clue("Biblioteca");

        let outcome = investigation.resolve_room_clue("Biblioteca");

        assert!(matches!(outcome, Outcome::Revisited(entry) if entry.suspect == "Professor"));
        assert_eq!(investigation.clues().len(), 1);
        assert_eq!(
            investigation.suspects().get("Professor").unwrap().clue_count(),
            1
        );
    }

    #[test]
    fn empty_rooms_yield_nothing() {
        let mut investigation = Investigation::new();
        assert_eq!(
            investigation.resolve_room_clue("Hall de Entrada"),
            Outcome::NothingHere
        );
        assert!(investigation.clues().is_empty());
        assert!(investigation.suspects().is_empty());
    }

    #[test]
    fn gardener_is_implicated_three_times() {
        let mut investigation = Investigation::new();
        for room in ["Sotao", "Porão", "Jardim", "Cozinha"] {
            investigation.resolve_room_clue(room);
        }
        let gardener = investigation.suspects().most_cited().unwrap();
        assert_eq!(gardener.name(), "Jardineiro");
        assert_eq!(gardener.clue_count(), 3);
    }
}
