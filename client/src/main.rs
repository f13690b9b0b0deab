use std::{
    env,
    io::{self, Write},
    process::exit,
};

use anyhow::Context;
use cli::{Command, Options};
use colored::Colorize;
use libgame::{Simulator, board::Board, preset};
use log::info;
use renderer::{TextRenderer, sleeper::Sleeper};

mod cli;
mod renderer;

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .try_init();

    if let Err(e) = run() {
        eprintln!("{} {e:#}", "error:".bright_red());
        exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = env::args().skip(1).collect::<Vec<_>>();

    let options = match cli::parse_args(args.iter().map(String::as_str))? {
        Command::Run(options) => options,
        Command::Help => {
            print!("{}", cli::help());
            return Ok(());
        }
    };

    let initial = preset::obtain_initial_board(&options.board)?;

    info!(
        "Running {} for {} generations under {}",
        options.board, options.generations, options.rule
    );

    play(&options, initial, &mut io::stdout().lock())
}

/// Writes the board name, then one frame per generation, each followed by a
/// blank line and a single update.
fn play<W>(options: &Options, initial: Board, out: &mut W) -> anyhow::Result<()>
where
    W: Write,
{
    let mut sim = Simulator::new(initial, &options.rule);

    let renderer = TextRenderer::new(options.dead_symbol, options.alive_symbol);
    let mut sleeper = Sleeper::new(options.sleep);

    writeln!(out, "{}", options.board.bold())?;

    for _ in 0..options.generations {
        if options.clear {
            renderer::clear_screen(out)?;
            writeln!(out, "{}", options.board.bold())?;
        }

        renderer
            .render(sim.current_board(), out)
            .context("Writing board")?;
        writeln!(out)?;
        out.flush()?;

        sim.update();
        sleeper.sleep();
    }

    Ok(())
}
