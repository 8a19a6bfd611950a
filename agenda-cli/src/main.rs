mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use agenda_core::{CalendarSession, FileStorage};

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Manage calendar events and non-working days from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid
    Month {
        /// Year to show (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month to show, 1-12 (defaults to the current month)
        #[arg(short, long)]
        month: Option<u32>,
    },
    /// Show the twelve-month year overview
    Year {
        /// Year to show (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// List, create and delete events
    #[command(subcommand)]
    Events(EventsCommand),
    /// Toggle a date in the custom non-working set
    Toggle {
        /// Date to flip (YYYY-MM-DD)
        date: String,
    },
}

#[derive(Subcommand)]
enum EventsCommand {
    /// List events, optionally for a single date
    List {
        /// Only events on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Create a new event
    New {
        title: String,

        /// Event date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Event time (HH:MM)
        #[arg(short, long)]
        time: Option<String>,

        /// Free-form description
        #[arg(long)]
        description: Option<String>,

        /// Email address to remind the day before
        #[arg(long)]
        email: Option<String>,
    },
    /// Replace an event, keeping its id
    Edit {
        id: String,

        /// New title
        title: String,

        /// New event date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// New event time (HH:MM)
        #[arg(short, long)]
        time: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// Email address to remind the day before
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete an event by id
    Delete { id: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let storage = FileStorage::open_default()?;
    let mut session = CalendarSession::open(storage);

    match cli.command {
        Commands::Month { year, month } => commands::month::run(&session, year, month),
        Commands::Year { year } => commands::year::run(&session, year),
        Commands::Events(command) => match command {
            EventsCommand::List { date } => commands::events::list(&session, date.as_deref()),
            EventsCommand::New {
                title,
                date,
                time,
                description,
                email,
            } => commands::events::new(&mut session, title, &date, time.as_deref(), description, email),
            EventsCommand::Edit {
                id,
                title,
                date,
                time,
                description,
                email,
            } => commands::events::edit(
                &mut session,
                &id,
                title,
                &date,
                time.as_deref(),
                description,
                email,
            ),
            EventsCommand::Delete { id } => commands::events::delete(&mut session, &id),
        },
        Commands::Toggle { date } => commands::toggle::run(&mut session, &date),
    }
}
