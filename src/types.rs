//! Shared types for the mycal application.

use clap::Subcommand;

use crate::CalError;

/// A specialized Result type for mycal operations.
pub type Result<T> = std::result::Result<T, CalError>;

/// Available subcommands for the mycal application
#[derive(Subcommand)]
pub enum Commands {
    /// List events, optionally filtered
    List {
        /// Only show events whose start timestamp contains this fragment
        #[clap(short, long)]
        date: Option<String>,

        /// Only show events at exactly this location
        #[clap(short, long)]
        location: Option<String>,

        /// Case-insensitive search across titles and locations
        #[clap(short, long)]
        search: Option<String>,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Search events by title or location
    Search {
        /// Search query text
        query: String,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// List the distinct known locations
    Locations,

    /// Add a new placeholder event
    Add {
        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Edit an existing event
    Edit {
        /// ID of the event to edit
        id: String,

        /// New title for the event
        #[clap(short = 'T', long)]
        title: Option<String>,

        /// New start timestamp (ISO-8601, no offset)
        #[clap(short, long)]
        start: Option<String>,

        /// New end timestamp (ISO-8601, no offset)
        #[clap(short, long)]
        end: Option<String>,

        /// New location (an empty string clears it)
        #[clap(short, long)]
        location: Option<String>,

        /// Preview the changes and discard them instead of saving
        #[clap(long)]
        discard: bool,
    },

    /// Delete an event by ID
    Delete {
        /// ID of the event to delete
        id: String,
    },
}
