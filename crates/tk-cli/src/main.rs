//! CLI frontend for the Tavernkeep adventure engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "tk",
    about = "Tavernkeep: gather a party and send it through monster encounters",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding characters.json, monsters.json and adventures.json
    #[arg(short, long, global = true, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create any missing catalog files in the data directory
    Init,

    /// List characters, optionally filtered by player
    Characters {
        /// Case-insensitive part of the player name
        #[arg(short, long)]
        player: Option<String>,
    },

    /// Show one character's sheet
    Show {
        /// Character name
        name: String,
    },

    /// Roll stats for a new character and store it
    Create {
        /// Character name (letters and spaces only)
        name: String,

        /// Name of the player
        #[arg(short, long)]
        player: String,

        /// Starting level (1-10)
        #[arg(short, long, default_value_t = 1)]
        level: u32,

        /// Starting class: Adventurer, Cleric or Wizard
        #[arg(short, long, default_value = "Adventurer")]
        class: String,

        /// RNG seed for the stat rolls
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Remove a character from the catalog
    Delete {
        /// Character name
        name: String,
    },

    /// List the monster catalog
    Monsters,

    /// List stored adventures
    Adventures,

    /// Build a new adventure from monster groups
    NewAdventure {
        /// Adventure name
        name: String,

        /// One encounter as comma-separated groups, e.g. "Goblin x3,Dragon x1"
        #[arg(short, long = "encounter", required = true)]
        encounters: Vec<String>,
    },

    /// Play an adventure with a party of 3 to 5 characters
    Play {
        /// Adventure name
        adventure: String,

        /// A party member (repeat for each member)
        #[arg(short, long = "party", required = true)]
        party: Vec<String>,

        /// RNG seed for the playthrough
        #[arg(long)]
        seed: Option<u64>,

        /// Do not write experience and classes back to the catalog
        #[arg(long)]
        no_save: bool,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let dir = cli.data_dir;

    let result = match cli.command {
        Commands::Init => commands::init::run(&dir),
        Commands::Characters { player } => commands::characters::run(&dir, player.as_deref()),
        Commands::Show { name } => commands::show::run(&dir, &name),
        Commands::Create {
            name,
            player,
            level,
            class,
            seed,
        } => commands::create::run(&dir, &name, &player, level, &class, seed),
        Commands::Delete { name } => commands::delete::run(&dir, &name),
        Commands::Monsters => commands::monsters::run(&dir),
        Commands::Adventures => commands::adventures::run(&dir),
        Commands::NewAdventure { name, encounters } => {
            commands::new_adventure::run(&dir, &name, &encounters)
        }
        Commands::Play {
            adventure,
            party,
            seed,
            no_save,
        } => commands::play::run(&dir, &adventure, &party, seed, !no_save),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
