use log::debug;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

use super::board::Board;

/// Identifier that asks for a randomly filled board instead of a preset.
pub const RANDOM_BOARD: &str = "RANDOM";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    #[error("Board {name} does not exist")]
    UnknownBoard { name: String },
}

/// Built-in starting boards, looked up by name ignoring ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Preset {
    Blinker,
    Beacon,
    Toad,
    Glider,
    Full,
}

impl Preset {
    pub fn board(self) -> Board {
        let rows = match self {
            Preset::Blinker => [
                0b00000000, 0b00000000, 0b00001000, 0b00001000, 0b00001000, 0b00000000,
                0b00000000, 0b00000000,
            ],
            Preset::Beacon => [
                0b00000000, 0b00000110, 0b00000110, 0b00011000, 0b00011000, 0b00000000,
                0b00000000, 0b00000000,
            ],
            Preset::Toad => [
                0b00000000, 0b00000000, 0b00000000, 0b00011100, 0b00111000, 0b00000000,
                0b00000000, 0b00000000,
            ],
            Preset::Glider => [
                0b00000000, 0b00000000, 0b00001000, 0b00000100, 0b00011100, 0b00000000,
                0b00000000, 0b00000000,
            ],
            Preset::Full => [0b11111111; 8],
        };

        Board::from(rows)
    }
}

/// Resolves a board identifier: a preset name, or [`RANDOM_BOARD`].
pub fn obtain_initial_board(name: &str) -> Result<Board, PresetError> {
    if let Ok(preset) = name.parse::<Preset>() {
        debug!("Using preset board {preset}");
        return Ok(preset.board());
    }

    if name.eq_ignore_ascii_case(RANDOM_BOARD) {
        debug!("Using random board");
        return Ok(Board::new_random());
    }

    Err(PresetError::UnknownBoard {
        name: name.to_owned(),
    })
}

pub fn board_exists(name: &str) -> bool {
    name.eq_ignore_ascii_case(RANDOM_BOARD) || name.parse::<Preset>().is_ok()
}

/// Preset names, not including [`RANDOM_BOARD`].
pub fn available_boards() -> Vec<String> {
    Preset::iter().map(|preset| preset.to_string()).collect()
}
