use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use mancala::console::{read_menu_choice, ConsolePlayer, ConsoleRenderer, MenuChoice};
use mancala::{simulate, GameConfig, Kalah, Session};

/// Kalah (Mancala) for two players at one terminal.
#[derive(Parser)]
#[command(name = "mancala", about = "Kalah (Mancala) for two players")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "mancala.toml")]
    config: PathBuf,

    /// Override seeds per pit
    #[arg(long)]
    seeds: Option<u8>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the main menu (default)
    Menu,
    /// Start a two-player game straight away
    Play,
    /// Play random games and report statistics
    Simulate {
        /// Number of games to play
        #[arg(long, default_value_t = 1000)]
        games: u32,

        /// Base RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Print the default configuration as TOML
    DefaultConfig,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(seeds) = cli.seeds {
        config.seeds_per_pit = seeds;
        config.validate().context("invalid --seeds")?;
    }

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => run_menu(config),
        Command::Play => play(config),
        Command::Simulate { games, seed } => run_simulation(config, games, seed),
        Command::DefaultConfig => {
            print!("{}", GameConfig::default_toml()?);
            Ok(())
        }
    }
}

fn run_menu(config: GameConfig) -> Result<()> {
    let stdin = io::stdin();
    loop {
        let choice = read_menu_choice(&mut stdin.lock(), &mut io::stdout())?;
        match choice {
            Some(MenuChoice::TwoPlayers) => play(config)?,
            Some(MenuChoice::VersusComputer) => {
                println!("Player vs Computer is not available yet.");
            }
            Some(MenuChoice::Quit) | None => {
                println!("Thanks for playing");
                return Ok(());
            }
        }
    }
}

fn play(config: GameConfig) -> Result<()> {
    println!("Welcome to Mancala - Player vs Player");

    let mut session = Session::new(Kalah::new(config)?);
    let mut input = ConsolePlayer::new(io::stdin().lock(), io::stdout());
    let mut renderer = ConsoleRenderer::new(io::stdout());

    if session.run(&mut input, &mut renderer)?.is_none() {
        println!();
        println!("Game abandoned.");
    }
    io::stdout().flush()?;
    Ok(())
}

fn run_simulation(config: GameConfig, games: u32, seed: u64) -> Result<()> {
    let report = simulate(&Kalah::new(config)?, games, seed)
        .with_context(|| format!("simulating {games} games with seed {seed}"))?;

    println!(
        "{} games, {} seeds per pit, seed {seed}",
        report.games, config.seeds_per_pit
    );
    for (player, wins) in report.wins.iter() {
        println!(
            "  {player}: {wins} wins, average store {:.2}",
            report.average_store(player)
        );
    }
    println!("  draws: {}", report.draws);
    println!(
        "  average moves {:.1}, extra turns {}, captures {}",
        report.average_moves(),
        report.extra_turns,
        report.captures
    );
    Ok(())
}
