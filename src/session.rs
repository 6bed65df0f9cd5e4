//! The interactive game session.
//!
//! A [`Session`] owns the mansion and the investigation and drives both from a
//! line-oriented console: the main menu, the exploration loop and the reports.
//! It is generic over its input and output so that whole games can be played
//! from a script.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::instrument;

use crate::{
    domain::{Config, Investigation, Outcome, Room, RoomMap},
    terminal::{self, Palette},
};

mod console;
use console::Console;

/// Walking the mansion one room at a time.
pub mod explore;
pub use explore::{ExplorationState, ExploreCommand, Explorer, MoveError, ParseCommandError};

mod menu;
pub use menu::{MenuChoice, ParseMenuError};

/// Errors that end a session early.
///
/// Bad input and illegal moves are reported to the player and never surface
/// here.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading from or writing to the console failed.
    #[error("console I/O failed")]
    Io(#[from] io::Error),
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The player chose `0`.
    Quit,
    /// The input ran out.
    InputClosed,
}

/// One game, from the welcome banner to the farewell.
#[derive(Debug)]
pub struct Session<R, W> {
    map: RoomMap,
    investigation: Investigation,
    show_exits: bool,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Prepares a fresh game reading commands from `input` and writing to
    /// `output`.
    pub fn new(config: &Config, input: R, output: W) -> Self {
        let palette = Palette::new(config.color());
        let rule_width = terminal::fit_width(config.rule_width());
        Self {
            map: RoomMap::build(),
            investigation: Investigation::new(),
            show_exits: config.show_exits,
            console: Console::new(input, output, palette, rule_width),
        }
    }

    /// The mansion being explored.
    #[must_use]
    pub const fn map(&self) -> &RoomMap {
        &self.map
    }

    /// Everything collected so far.
    #[must_use]
    pub const fn investigation(&self) -> &Investigation {
        &self.investigation
    }

    /// Gives back the output, e.g. to inspect a scripted game.
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Plays until the player quits or the input runs out.
    ///
    /// # Errors
    ///
    /// Returns an error only if the console itself fails.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> Result<Ending, SessionError> {
        self.console.say("Bem-vindo ao Desafio Detective Quest!")?;

        loop {
            self.show_menu()?;
            let Some(line) = self.console.read_line()? else {
                return self.farewell(Ending::InputClosed);
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(ParseMenuError::NotANumber(input)) => {
                    tracing::debug!(%input, "menu input rejected");
                    self.console.warn("Entrada inválida.")?;
                    continue;
                }
                Err(ParseMenuError::UnknownOption(option)) => {
                    tracing::debug!(option, "unknown menu option");
                    self.console.rule()?;
                    self.console.warn("Opção inexistente.")?;
                    self.console.rule()?;
                    self.console.blank()?;
                    continue;
                }
            };
            tracing::debug!(?choice, "menu");

            self.console.rule()?;
            match choice {
                MenuChoice::Explore => {
                    if self.explore()? == Ending::InputClosed {
                        return self.farewell(Ending::InputClosed);
                    }
                }
                MenuChoice::ListClues => self.list_clues()?,
                MenuChoice::ListSuspects => self.list_suspects()?,
                MenuChoice::MostCited => self.show_most_cited()?,
                MenuChoice::Quit => return self.farewell(Ending::Quit),
            }
            self.console.rule()?;
            self.console.blank()?;
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        let title = self.console.palette().info("=== DETECTIVE QUEST ===");
        self.console.say(title)?;
        self.console.say("1 - Explorar mansão")?;
        self.console.say("2 - Listar pistas (em ordem alfabética)")?;
        self.console.say("3 - Listar suspeitos e pistas associadas")?;
        self.console.say("4 - Mostrar suspeito mais provável")?;
        self.console.say("0 - Sair")?;
        self.console.prompt("Escolha: ")
    }

    /// Runs one exploration from the entrance.
    ///
    /// Returns [`Ending::InputClosed`] if the input runs out mid-exploration.
    #[instrument(level = "debug", skip(self))]
    fn explore(&mut self) -> io::Result<Ending> {
        let Self {
            map,
            investigation,
            show_exits,
            console,
        } = self;
        let palette = console.palette();

        console.say(palette.info("\n=== Exploração da Mansão ==="))?;
        console.say(palette.dim(
            "Use: (e) esquerda, (d) direita, (s) sair da exploração.\n",
        ))?;

        let mut explorer = Explorer::new(map.root());
        let mut entered = true;
        while let Some(room) = explorer.current() {
            console.say(format!("Você está em: ** {} **", palette.bold(room.name())))?;
            if entered {
                let outcome = investigation.resolve_room_clue(room.name());
                report_outcome(console, outcome)?;
                entered = false;
            }
            if *show_exits {
                console.say(exits(room))?;
            }

            console.prompt("Escolha: ")?;
            let Some(line) = console.read_line()? else {
                return Ok(Ending::InputClosed);
            };

            let command = match line.parse::<ExploreCommand>() {
                Ok(command) => command,
                Err(error) => {
                    tracing::debug!(%error, "exploration input rejected");
                    console.warn("Entrada inválida.")?;
                    continue;
                }
            };

            match explorer.apply(command) {
                Ok(ExplorationState::AtRoom(_)) => entered = true,
                Ok(ExplorationState::Done) => console.say("Encerrando exploração.\n")?,
                Err(error) => {
                    tracing::debug!(%error, "move refused");
                    console.warn("Movimento inválido neste ponto do mapa.")?;
                }
            }
        }
        Ok(Ending::Quit)
    }

    fn list_clues(&mut self) -> io::Result<()> {
        let clues = self.investigation.clues();
        if clues.is_empty() {
            return self.console.say("Nenhuma pista coletada ainda.");
        }

        let heading = self.console.palette().info("Pistas (ordem alfabética):");
        self.console.say(heading)?;
        for clue in clues {
            self.console.say(format!(" - {clue}"))?;
        }
        Ok(())
    }

    fn list_suspects(&mut self) -> io::Result<()> {
        let heading = self
            .console
            .palette()
            .info("\n=== Suspeitos & Pistas Relacionadas ===");
        self.console.say(heading)?;

        let suspects = self.investigation.suspects();
        if suspects.is_empty() {
            return self.console.say("Nenhum suspeito relacionado ainda.");
        }
        for suspect in suspects {
            self.console.say(format!(
                "Suspeito: {}  | Pistas ({}):",
                suspect.name(),
                suspect.clue_count()
            ))?;
            for clue in suspect.clues() {
                self.console.say(format!("   - {clue}"))?;
            }
        }
        Ok(())
    }

    fn show_most_cited(&mut self) -> io::Result<()> {
        let Some(suspect) = self.investigation.suspects().most_cited() else {
            return self.console.say("Ainda não há suspeitos relacionados.");
        };

        let count = suspect.clue_count();
        let plural = if count == 1 { "" } else { "s" };
        let line = format!(
            "Suspeito mais provável: {} ({count} pista{plural})",
            suspect.name()
        );
        let line = self.console.palette().success(&line);
        self.console.say(line)
    }

    fn farewell(&mut self, ending: Ending) -> Result<Ending, SessionError> {
        tracing::info!(
            ?ending,
            clues = self.investigation.clues().len(),
            suspects = self.investigation.suspects().len(),
            "session over"
        );
        if ending == Ending::InputClosed {
            self.console.blank()?;
        }
        self.console.say("Até a próxima investigação!")?;
        Ok(ending)
    }
}

fn report_outcome<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    outcome: Outcome,
) -> io::Result<()> {
    let palette = console.palette();
    match outcome {
        Outcome::Discovered(entry) => console.say(palette.success(&format!(
            ">> Você encontrou uma PISTA em {}: \"{}\" (associada a {})",
            entry.room, entry.clue, entry.suspect
        ))),
        Outcome::Revisited(entry) => console.say(palette.dim(&format!(
            ">> Você revisitou {}. A pista \"{}\" já foi registrada.",
            entry.room, entry.clue
        ))),
        Outcome::NothingHere => Ok(()),
    }
}

fn exits(room: &Room) -> String {
    let mut line = String::from("Caminhos: ");
    if let Some(left) = room.left() {
        line.push_str(&format!("[e] {}  ", left.name()));
    }
    if let Some(right) = room.right() {
        line.push_str(&format!("[d] {}  ", right.name()));
    }
    line.push_str("[s] sair");
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exits_list_only_existing_paths() {
        let map = RoomMap::build();
        assert_eq!(
            exits(map.root()),
            "Caminhos: [e] Biblioteca  [d] Cozinha  [s] sair"
        );
        assert_eq!(
            exits(map.find("Sotao").unwrap()),
            "Caminhos: [d] Porão  [s] sair"
        );
        assert_eq!(exits(map.find("Adega").unwrap()), "Caminhos: [s] sair");
    }
}
