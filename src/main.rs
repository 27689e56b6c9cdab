mod commands;
mod datetime;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Manage your personal daily schedule and event reminders")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new event
    Add {
        /// Event title
        title: String,

        /// Start date/time (e.g. "2025-03-20" or "2025-03-20T15:00", local time)
        #[arg(short, long)]
        start: String,

        /// End date/time (defaults to one hour after start)
        #[arg(short, long, conflicts_with = "duration")]
        end: Option<String>,

        /// Duration (e.g. "30m", "1h", "2h30m")
        #[arg(short, long, conflicts_with = "end")]
        duration: Option<String>,

        /// Event description
        #[arg(long)]
        description: Option<String>,

        /// Event location
        #[arg(short, long)]
        location: Option<String>,

        /// Minutes before start to be reminded (0 disables the reminder,
        /// defaults to default_reminder_minutes from config)
        #[arg(short, long)]
        reminder: Option<u32>,
    },
    /// Edit an existing event; unspecified fields keep their values
    Edit {
        /// Event id (any unambiguous prefix)
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New start date/time
        #[arg(short, long)]
        start: Option<String>,

        /// New end date/time
        #[arg(short, long, conflicts_with = "duration")]
        end: Option<String>,

        /// New duration, applied from the start time
        #[arg(short, long, conflicts_with = "end")]
        duration: Option<String>,

        /// New description (empty string clears it)
        #[arg(long)]
        description: Option<String>,

        /// New location (empty string clears it)
        #[arg(short, long)]
        location: Option<String>,

        /// New reminder offset in minutes (0 disables the reminder)
        #[arg(short, long)]
        reminder: Option<u32>,
    },
    /// Remove an event
    Remove {
        /// Event id (any unambiguous prefix)
        id: String,
    },
    /// Show events for a single day
    Day {
        /// Date (YYYY-MM-DD), defaults to today
        date: Option<String>,
    },
    /// List all events, soonest first
    List,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            title,
            start,
            end,
            duration,
            description,
            location,
            reminder,
        } => commands::add::run(title, start, end, duration, description, location, reminder),
        Commands::Edit {
            id,
            title,
            start,
            end,
            duration,
            description,
            location,
            reminder,
        } => commands::edit::run(id, title, start, end, duration, description, location, reminder),
        Commands::Remove { id } => commands::remove::run(id),
        Commands::Day { date } => commands::day::run(date),
        Commands::List => commands::list::run(),
    }
}
