use std::str::FromStr;

use thiserror::Error;

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1`: walk the mansion.
    Explore,
    /// `2`: list collected clues alphabetically.
    ListClues,
    /// `3`: list suspects with their clues.
    ListSuspects,
    /// `4`: name the most cited suspect.
    MostCited,
    /// `0`: leave the game.
    Quit,
}

/// Error returned when a menu line cannot be understood.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMenuError {
    /// The line does not start with a number.
    #[error("'{0}' is not a number")]
    NotANumber(String),
    /// The number does not name a menu entry.
    #[error("there is no menu option {0}")]
    UnknownOption(i64),
}

impl FromStr for MenuChoice {
    type Err = ParseMenuError;

    /// Only the first whitespace-separated token is considered.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.split_whitespace().next().unwrap_or_default();
        let number: i64 = token
            .parse()
            .map_err(|_| ParseMenuError::NotANumber(token.to_owned()))?;

        match number {
            1 => Ok(Self::Explore),
            2 => Ok(Self::ListClues),
            3 => Ok(Self::ListSuspects),
            4 => Ok(Self::MostCited),
            0 => Ok(Self::Quit),
            other => Err(ParseMenuError::UnknownOption(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("1", MenuChoice::Explore; "explore")]
    #[test_case("2", MenuChoice::ListClues; "clues")]
    #[test_case("3", MenuChoice::ListSuspects; "suspects")]
    #[test_case("4", MenuChoice::MostCited; "most cited")]
    #[test_case("0", MenuChoice::Quit; "quit")]
    #[test_case("  2  ", MenuChoice::ListClues; "surrounding blanks")]
    #[test_case("3 extra words", MenuChoice::ListSuspects; "trailing words")]
    #[test_case("+4", MenuChoice::MostCited; "explicit sign")]
    fn parses(input: &str, expected: MenuChoice) {
        assert_eq!(input.parse::<MenuChoice>(), Ok(expected));
    }

    #[test_case("abc", "abc"; "letters")]
    #[test_case("", ""; "empty")]
    #[test_case("1x", "1x"; "digit then letter")]
    fn rejects_non_numbers(input: &str, token: &str) {
        assert_eq!(
            input.parse::<MenuChoice>(),
            Err(ParseMenuError::NotANumber(token.to_owned()))
        );
    }

    #[test_case("5", 5; "just past the end")]
    #[test_case("-1", -1; "negative")]
    fn rejects_unknown_options(input: &str, number: i64) {
        assert_eq!(
            input.parse::<MenuChoice>(),
            Err(ParseMenuError::UnknownOption(number))
        );
    }
}
