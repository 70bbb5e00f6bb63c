use std::io::{stdin, stdout};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ttt_console::ai::heuristic::MoveSelector;
use ttt_console::ai::simple::RandomBot;
use ttt_console::config::GameConfig;
use ttt_console::interface::console::COMPUTER;
use ttt_console::interface::render::Glyphs;
use ttt_console::util::bot_game;
use ttt_console::util::tiny::seeded_rng;

/// Tic Tac Toe at the console against the computer.
#[derive(Parser, Debug)]
#[command(name = "ttt", version, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    play: PlayArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game against the computer (the default)
    Play(PlayArgs),

    /// Let the computer play many games against a random bot and print the results
    Bench {
        /// Number of games per side
        #[arg(long, default_value_t = 1000)]
        games: u32,

        /// Seed for both bots
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(clap::Args, Debug, Clone)]
struct PlayArgs {
    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Glyph for the human's mark
    #[arg(long, default_value_t = 'X')]
    human_glyph: char,

    /// Glyph for the computer's mark
    #[arg(long, default_value_t = 'O')]
    computer_glyph: char,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => play(cli.play),
        Some(Command::Play(args)) => play(args),
        Some(Command::Bench { games, seed }) => {
            bench(games, seed);
            Ok(())
        }
    }
}

fn play(args: PlayArgs) -> anyhow::Result<()> {
    // the human plays mark A
    let glyphs = Glyphs::new(args.human_glyph, args.computer_glyph).context("invalid glyphs")?;

    let config = GameConfig {
        glyphs,
        seed: args.seed,
    };

    let stdin = stdin();
    let mut game = config.console_game(stdin.lock(), stdout());
    game.run().context("console I/O failed")?;

    Ok(())
}

fn bench(games: u32, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(rand::random);

    let mut selector = MoveSelector::new(COMPUTER, seeded_rng(Some(seed)));
    let mut random = RandomBot::new(seeded_rng(Some(seed.wrapping_add(1))));

    println!("Running {} games per side with seed {}", games, seed);
    let result = bot_game::run(&mut selector, &mut random, games, true);
    println!("{:?}", result);
}
