//! CLI module for the mycal application
//!
//! This module handles the command-line interface for interacting with the
//! calendar session. Each invocation drives one session over the in-memory
//! store; nothing outlives the process.

use log::info;

use crate::{CalendarApp, Commands, Event, EventField, Result};

/// CLI application handler - processes CLI commands and interfaces with the
/// calendar controller
pub struct App {
    /// The calendar session being driven
    calendar: CalendarApp,

    /// Whether to display verbose output
    verbose: bool,
}

impl App {
    /// Create a new CLI application over the given calendar session
    pub fn new(calendar: CalendarApp, verbose: bool) -> Self {
        Self { calendar, verbose }
    }

    /// Run the CLI application with the given command
    pub fn run(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::List {
                date,
                location,
                search,
                json,
            } => self.list_events(date, location, search, json),

            Commands::Search { query, json } => self.list_events(None, None, Some(query), json),

            Commands::Locations => self.show_locations(),

            Commands::Add { json } => self.add_event(json),

            Commands::Edit {
                id,
                title,
                start,
                end,
                location,
                discard,
            } => self.edit_event(id, title, start, end, location, discard),

            Commands::Delete { id } => self.delete_event(id),
        }
    }

    fn list_events(
        &mut self,
        date: Option<String>,
        location: Option<String>,
        search: Option<String>,
        json: bool,
    ) -> Result<()> {
        if let Some(date) = date {
            self.calendar.set_date_filter(&date)?;
        }
        if let Some(location) = location {
            self.calendar.set_location_filter(&location)?;
        }
        if let Some(search) = search {
            self.calendar.set_search(&search)?;
        }

        let events = self.calendar.visible_events();
        info!(
            "Listing {} of {} events",
            events.len(),
            self.calendar.store().len()
        );

        if json {
            println!("{}", serde_json::to_string_pretty(&events)?);
            return Ok(());
        }

        if self.verbose && !self.calendar.criteria().is_empty() {
            println!(
                "Active filters: {}",
                console::style(format!("{:?}", self.calendar.criteria())).dim()
            );
        }

        if events.is_empty() {
            println!("No events match.");
            return Ok(());
        }

        print_event_table(&events);
        Ok(())
    }

    fn show_locations(&mut self) -> Result<()> {
        let locations = self.calendar.locations();
        if locations.is_empty() {
            println!("No locations known.");
            return Ok(());
        }
        for location in locations {
            println!("{}", location);
        }
        Ok(())
    }

    fn add_event(&mut self, json: bool) -> Result<()> {
        let event = self.calendar.add_event()?;
        if json {
            println!("{}", serde_json::to_string_pretty(&event)?);
        } else {
            println!(
                "Added event {} with ID: {}",
                console::style(&event.title).bold(),
                event.id
            );
        }
        Ok(())
    }

    fn edit_event(
        &mut self,
        id: String,
        title: Option<String>,
        start: Option<String>,
        end: Option<String>,
        location: Option<String>,
        discard: bool,
    ) -> Result<()> {
        self.calendar.start_edit(&id)?;

        if let Some(title) = title {
            self.calendar.edit_field(EventField::Title, &title)?;
        }
        if let Some(start) = start {
            self.calendar.edit_field(EventField::Start, &start)?;
        }
        if let Some(end) = end {
            self.calendar.edit_field(EventField::End, &end)?;
        }
        if let Some(location) = location {
            self.calendar.edit_field(EventField::Location, &location)?;
        }

        if discard {
            if let Some(copy) = self.calendar.working_copy() {
                println!("Would save: {}", serde_json::to_string(copy)?);
            }
            self.calendar.cancel_edit()?;
            println!("Discarded changes to event {}", id);
        } else {
            self.calendar.save_edit()?;
            println!("Saved event {}", id);
        }
        Ok(())
    }

    fn delete_event(&mut self, id: String) -> Result<()> {
        if self.calendar.delete_event(&id)? {
            println!("Deleted event {}", id);
        } else {
            println!(
                "{}",
                console::style(format!("No event with ID: {}", id)).yellow()
            );
        }
        Ok(())
    }
}

/// Prints events as a fixed-column table: title, start, location.
fn print_event_table(events: &[Event]) {
    let title_width = events
        .iter()
        .map(|e| e.title.len())
        .chain(std::iter::once("EVENT".len()))
        .max()
        .unwrap_or(0);

    // pad before styling so ANSI codes don't throw off the column widths
    println!(
        "{}  {}  {}",
        console::style(format!("{:<title_width$}", "EVENT")).bold(),
        console::style(format!("{:<19}", "START")).bold(),
        console::style("LOCATION").bold()
    );
    for event in events {
        println!(
            "{:<title_width$}  {:<19}  {}",
            event.title,
            event.start,
            event.location.as_deref().unwrap_or("-")
        );
    }
}
