use std::{str::FromStr, time::Duration};

use anyhow::{Context, bail};
use itertools::Itertools;
use libgame::{
    preset::{self, RANDOM_BOARD},
    rule::{GAME_OF_LIFE, Rule},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub board: String,
    pub generations: u64,
    pub clear: bool,
    pub sleep: Duration,
    pub alive_symbol: char,
    pub dead_symbol: char,
    pub rule: Rule,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            board: RANDOM_BOARD.to_owned(),
            generations: 4,
            clear: false,
            sleep: Duration::ZERO,
            alive_symbol: 'X',
            dead_symbol: '.',
            rule: GAME_OF_LIFE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
}

/// The board name is only accepted as the very first argument.
pub fn parse_args<'a, I>(args: I) -> anyhow::Result<Command>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut args = args.into_iter().peekable();
    let mut options = Options::default();

    if let Some(board) = args.next_if(|arg| !arg.starts_with("--")) {
        if !preset::board_exists(board) {
            bail!("Board {board} does not exist");
        }
        options.board = board.to_owned();
    }

    while let Some(arg) = args.next() {
        match arg {
            "--help" => return Ok(Command::Help),

            "--generations" => {
                options.generations = parse_value(arg, args.next())?;
            }

            "--sleep" => {
                let millis = parse_value(arg, args.next())?;
                options.sleep = Duration::from_millis(millis);
            }

            "--clear" => {
                options.clear = true;
            }

            "--alive-symbol" => {
                options.alive_symbol = parse_symbol(arg, args.next())?;
            }

            "--dead-symbol" => {
                options.dead_symbol = parse_symbol(arg, args.next())?;
            }

            "--rule" => {
                options.rule = parse_value(arg, args.next())?;
            }

            _ => bail!("Unknown argument {arg}"),
        }
    }

    Ok(Command::Run(options))
}

fn parse_value<T>(flag: &str, value: Option<&str>) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = value.with_context(|| format!("{flag} requires an argument"))?;

    value
        .parse()
        .with_context(|| format!("Invalid value \"{value}\" for {flag}"))
}

/// `SPACE` stands for a blank, anything else contributes its first char.
fn parse_symbol(flag: &str, value: Option<&str>) -> anyhow::Result<char> {
    let value = value.with_context(|| format!("{flag} requires an argument"))?;

    if value.eq_ignore_ascii_case("SPACE") {
        return Ok(' ');
    }

    value
        .chars()
        .next()
        .with_context(|| format!("{flag} requires a non-empty argument"))
}

pub fn help() -> String {
    let boards = [RANDOM_BOARD.to_owned()]
        .into_iter()
        .chain(preset::available_boards())
        .join(", ");

    [
        "Usage: gol [board] [--generations n] [--clear] [--sleep ms] [--alive-symbol s] [--dead-symbol s] [--rule r]".to_owned(),
        format!("Available boards: {boards}. Default is {RANDOM_BOARD}"),
        "--generations n: Run for n generations. Default is 4".to_owned(),
        "--sleep ms: Sleep for ms milliseconds between generations. Default is 0".to_owned(),
        "--clear: Clear the console between generations".to_owned(),
        "--alive-symbol s: Use s as the symbol for alive cells. Use SPACE for a blank space. Default is X".to_owned(),
        "--dead-symbol s: Use s as the symbol for dead cells. Use SPACE for a blank space. Default is .".to_owned(),
        format!("--rule r: Birth/survival rule in B/S notation. Default is {GAME_OF_LIFE}"),
    ]
    .into_iter()
    .map(|line| line + "\n")
    .collect()
}
