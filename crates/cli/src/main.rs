use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use console::style;
use std::io::{self, BufRead, Write};
use vidstream_core::VideoCatalog;
use vidstream_player::{PlayerSession, SelectionProvider};

mod commands;

use commands::CommandOutcome;

fn build_cli() -> Command {
    Command::new("vidstream")
        .version("0.1.0")
        .about("Single-user video library: playback, playlists, flags, and search")
        .arg(
            Arg::new("catalog")
                .short('c')
                .long("catalog")
                .value_name("PATH")
                .help("Catalog file: pipe-separated text, or JSON when the path ends in .json"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue),
        )
}

fn load_catalog(path: Option<&str>) -> Result<VideoCatalog> {
    match path {
        None => Ok(VideoCatalog::demo()),
        Some(path) if path.ends_with(".json") => VideoCatalog::load_json(path)
            .with_context(|| format!("Failed to load JSON catalog from {path}")),
        Some(path) => VideoCatalog::load(path)
            .with_context(|| format!("Failed to load catalog from {path}")),
    }
}

/// Reads the post-search selection from stdin.
///
/// Non-numeric or out-of-range input means "no selection", never an error.
struct StdinSelection;

impl SelectionProvider for StdinSelection {
    fn request_selection(&mut self, max_index: usize) -> Option<usize> {
        let mut input = String::new();
        io::stdin().read_line(&mut input).ok()?;
        let choice = input.trim().parse::<usize>().ok()?;
        (1..=max_index).contains(&choice).then_some(choice)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = build_cli().get_matches();
    if matches.get_flag("no-color") {
        console::set_colors_enabled(false);
    }

    let catalog = load_catalog(matches.get_one::<String>("catalog").map(String::as_str))?;
    let mut session = PlayerSession::new(catalog);
    let mut selection = StdinSelection;

    println!(
        "Hello and welcome to VidStream, what would you like to do? \
         Enter HELP for a list of available commands or EXIT to terminate."
    );

    let stdin = io::stdin();
    loop {
        print!("{} ", style(">").dim());
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("Failed to read input")? == 0 {
            // EOF
            break;
        }
        if let CommandOutcome::Exit = commands::execute(&mut session, &line, &mut selection) {
            break;
        }
    }

    println!("Thank you for using VidStream!");
    Ok(())
}
