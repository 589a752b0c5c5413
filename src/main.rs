use clap::Parser;
use log::info;

use mycal::{App, AuthState, CalendarApp, Cli, Config, Result, TokenAuthenticator};

pub fn initialize_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    info!("Logger initialized");
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if cli.no_seed {
        config.seed_events = false;
    }

    // The calendar core is only reachable once the authentication
    // collaborator hands over a credential.
    let mut auth = AuthState::default();
    auth.handle_login(&TokenAuthenticator::from_env(cli.token.clone()))?;
    info!("Authenticated; starting calendar session");

    let calendar = CalendarApp::new(config);
    App::new(calendar, cli.verbose).run(cli.command)
}

fn main() {
    initialize_logger();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{}", console::style(format!("Error: {}", err)).red());
        std::process::exit(1);
    }
}
