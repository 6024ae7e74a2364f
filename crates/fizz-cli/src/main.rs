//! CLI front end for the FizzBuzz trivia engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fizz",
    about = "Timed FizzBuzz trivia on the command line",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a game definition file
    New {
        /// Name of the game
        name: String,

        /// Game author
        #[arg(short, long, default_value = "anonymous")]
        author: String,

        /// Rule as divisor=word, repeatable (e.g. -r 3=Fizz -r 5=Buzz)
        #[arg(short = 'r', long = "rule", value_name = "DIVISOR=WORD", required = true)]
        rules: Vec<String>,

        /// Output file (default: derived from the game name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a game definition file and show its rules
    Check {
        /// Game definition file
        file: PathBuf,
    },

    /// Print the expected answer for a number
    Answer {
        /// The number to answer for
        number: i64,

        /// Game definition file
        file: PathBuf,
    },

    /// Play a timed session in the terminal
    Play {
        /// Game definition file
        file: PathBuf,

        /// Session length in seconds
        #[arg(short, long, default_value = "60")]
        duration: u32,

        /// RNG seed for a reproducible number sequence
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New {
            name,
            author,
            rules,
            output,
        } => commands::new::run(&name, &author, &rules, output.as_deref()),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Answer { number, file } => commands::answer::run(number, &file),
        Commands::Play {
            file,
            duration,
            seed,
        } => commands::play::run(&file, duration, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
