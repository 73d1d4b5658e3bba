use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lunalog", version, about = "Lunalog CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record and edit period events
    Period {
        #[command(subcommand)]
        action: commands::period::PeriodAction,
    },
    /// Current cycle status and predictions
    Status {
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Normalized cycle history
    History,
    /// Period days for calendar highlighting
    Calendar {
        /// Restrict to one month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Import data from older log formats
    Import {
        #[command(subcommand)]
        action: commands::import::ImportAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Period { action } => commands::period::run(action),
        Commands::Status { date } => commands::status::run(date),
        Commands::History => commands::history::run(),
        Commands::Calendar { month } => commands::calendar::run(month),
        Commands::Config { action } => commands::config::run(action),
        Commands::Import { action } => commands::import::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
