use std::io::{self, Write};

use base_converter::cli::{
    conversion_outcome, handle_config_action, print_outcome, AppError, Args, Command,
    ConfigAction,
};
use base_converter::config::{Config, Settings};
use base_converter::render::Renderer;
use base_converter::repl::{setup_ctrlc_handler, Session};
use clap::Parser;

/// Load .env without overriding variables that are already set.
fn load_env() {
    // Err just means there is no .env file
    let _ = dotenv::dotenv();
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<(), AppError> {
    // `config init` must work before the file it creates exists
    let creating = matches!(
        args.command,
        Some(Command::Config {
            action: ConfigAction::Init
        })
    );
    let mut config = if creating {
        Config::default()
    } else {
        Config::load(args.config.as_deref())?
    };
    config.apply_env();

    let settings = Settings::resolve(
        &config,
        args.theme.map(Into::into),
        args.no_color,
        args.no_steps,
        args.digits,
    );
    log::debug!("effective settings: {:?}", settings);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        None | Some(Command::Menu) => {
            if let Err(e) = setup_ctrlc_handler() {
                log::warn!("could not install Ctrl+C handler: {}", e);
            }
            let stdin = io::stdin();
            let mut session = Session::new(stdin.lock(), out, settings);
            session.run()?;
        }
        Some(Command::Config { action }) => {
            handle_config_action(&mut out, action, args.config.as_deref(), &settings)?;
        }
        Some(command) => {
            if let Some(outcome) = conversion_outcome(&command, &settings)? {
                let renderer = Renderer::new(settings.theme, settings.color);
                print_outcome(&mut out, &outcome, args.format, &renderer, settings.show_steps)?;
            }
            out.flush()?;
        }
    }
    Ok(())
}

fn main() {
    // Load .env file before anything else
    load_env();

    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
