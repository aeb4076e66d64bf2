//! # CLI Layer
//!
//! One possible client for pointrec: a line-oriented recording session on
//! stdin/stdout. This module is the only place that:
//! - Reads stdin and writes to stdout/stderr
//! - Installs the tracing subscriber
//! - Decides exit codes
//!
//! ## Flow
//!
//! 1. `Cli` (startup flags) is parsed once; bad flags or an unreadable config
//!    end the process with code 1.
//! 2. Each input line is parsed as a [`SessionCommand`] and dispatched to the
//!    matching `RecorderApi` method.
//! 3. Listings are rendered through templates, followed by the result messages.
//!    A failing command prints `Error: ...` on stderr and the session goes on
//!    with its state unchanged.
//! 4. `quit`, `exit` or end of input ends the session. Nothing is persisted
//!    except explicit exports and `config` changes.

use super::render::Renderer;
use super::setup::{
    get_command_help, get_grouped_help, parse_line, Cli, ExportCommands, GraphCommands,
    PathCommands, PointCommands, SessionCommand, SessionCommands,
};
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use pointrec::api::{CmdMessage, CmdResult, ConfigAction, RecorderApi};
use pointrec::commands::Session;
use pointrec::config::RecorderConfig;
use pointrec::error::{RecorderError, Result};
use pointrec::export::sink::DirectorySink;
use pointrec::geolocation::{FixedLocator, Geolocator, NoLocator};
use pointrec::model::Coordinates;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a fixed device position (`LAT,LON`).
pub const LOCATION_ENV: &str = "POINTREC_LOCATION";

const LOCAL_CONFIG_DIR: &str = ".pointrec";

struct AppContext {
    api: RecorderApi<DirectorySink, Box<dyn Geolocator>>,
    renderer: Renderer,
}

enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    init_tracing(cli.verbose);
    let mut ctx = init_context(&cli)?;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!(
            "pointrec {}: type `help` for commands, `quit` to leave.",
            env!("CARGO_PKG_VERSION")
        );
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("pointrec> ");
            io::stdout().flush().map_err(RecorderError::Io)?;
        }
        let line = match lines.next() {
            Some(line) => line.map_err(RecorderError::Io)?,
            None => break,
        };

        let command = match parse_line(&line) {
            None => continue,
            Some(Ok(command)) => command,
            Some(Err(e)) => {
                eprint!("{}", e);
                continue;
            }
        };
        debug!(?command, "dispatching");

        match dispatch(&mut ctx, command) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => print_error(&ctx, &e),
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config_dir = resolve_config_dir(cli.config.as_deref(), &cwd);
    let config = RecorderConfig::load(&config_dir)?;

    let export_dir = cli
        .out
        .clone()
        .unwrap_or_else(|| cwd.join(&config.export_dir));
    let position = resolve_location(
        cli.at,
        std::env::var(LOCATION_ENV).ok().as_deref(),
        config.location,
    )?;
    let locator: Box<dyn Geolocator> = match position {
        Some(position) => Box::new(FixedLocator::new(position)),
        None => Box::new(NoLocator),
    };
    debug!(
        config = %config_dir.display(),
        exports = %export_dir.display(),
        located = position.is_some(),
        "session context ready"
    );

    let mut session = Session::from_config(&config);
    if let Some(color) = cli.color {
        session.color = color;
    }

    let api = RecorderApi::new(session, DirectorySink::new(export_dir), locator)
        .with_geolocation(config.geolocation)
        .with_config_dir(config_dir);

    let use_color = !cli.no_color && Term::stdout().features().colors_supported();
    let renderer = Renderer::new(use_color).map_err(|e| RecorderError::Api(e.to_string()))?;

    Ok(AppContext { api, renderer })
}

/// `--config`, else `./.pointrec` when present, else the platform config dir.
fn resolve_config_dir(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    let local = cwd.join(LOCAL_CONFIG_DIR);
    if local.is_dir() {
        return local;
    }
    ProjectDirs::from("com", "pointrec", "pointrec")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or(local)
}

/// `--at`, else the environment variable, else the config file.
fn resolve_location(
    flag: Option<Coordinates>,
    env_value: Option<&str>,
    configured: Option<Coordinates>,
) -> Result<Option<Coordinates>> {
    if flag.is_some() {
        return Ok(flag);
    }
    if let Some(raw) = env_value.map(str::trim).filter(|raw| !raw.is_empty()) {
        let position = raw
            .parse::<Coordinates>()
            .map_err(|e| RecorderError::Config(format!("{}: {}", LOCATION_ENV, e)))?;
        return Ok(Some(position));
    }
    Ok(configured)
}

fn dispatch(ctx: &mut AppContext, command: SessionCommand) -> Result<Flow> {
    match command {
        SessionCommand::Points(cmd) => match cmd {
            PointCommands::Add { lat, lon, color } => {
                let result = ctx.api.add_point(lat, lon, color)?;
                print_result(ctx, &result);
            }
            PointCommands::Delete { points } => {
                let result = ctx.api.delete_points(&points)?;
                print_result(ctx, &result);
            }
            PointCommands::Edit {
                point,
                label,
                lat,
                lon,
                color,
            } => {
                let result = ctx.api.edit_point(&point, &label, lat, lon, color)?;
                print_result(ctx, &result);
            }
            PointCommands::List => {
                let result = ctx.api.list_points()?;
                print!("{}", ctx.renderer.render_points(&result.listed_points));
                print_result(ctx, &result);
            }
        },
        SessionCommand::Graph(cmd) => match cmd {
            GraphCommands::Nodes => {
                let result = ctx.api.list_nodes()?;
                print!("{}", ctx.renderer.render_nodes(&result.listed_nodes));
                print_result(ctx, &result);
            }
            GraphCommands::Path(path_cmd) => {
                let result = match path_cmd {
                    PathCommands::Add { from, to, distance } => {
                        ctx.api.add_path(&from, &to, distance)?
                    }
                    PathCommands::Remove { position } => ctx.api.remove_path(position)?,
                    PathCommands::Auto => ctx.api.auto_generate_paths()?,
                    PathCommands::List => ctx.api.list_paths()?,
                };
                print!("{}", ctx.renderer.render_paths(&result.listed_paths));
                print_result(ctx, &result);
            }
            GraphCommands::Connections { label } => {
                let result = ctx.api.connections(&label)?;
                print!("{}", ctx.renderer.render_paths(&result.listed_paths));
                print_result(ctx, &result);
            }
            GraphCommands::Suggest => {
                let result = ctx.api.suggest_label()?;
                print_result(ctx, &result);
            }
        },
        SessionCommand::Export(cmd) => {
            let result = match cmd {
                ExportCommands::Save => ctx.api.save_graph()?,
                ExportCommands::Csv => ctx.api.export_csv()?,
            };
            print_result(ctx, &result);
        }
        SessionCommand::Session(cmd) => match cmd {
            SessionCommands::Color { color } => {
                let result = match color {
                    Some(color) => ctx.api.set_color(color)?,
                    None => ctx.api.show_color()?,
                };
                print_result(ctx, &result);
            }
            SessionCommands::Locate { record } => {
                let result = ctx.api.locate(record)?;
                print_result(ctx, &result);
            }
            SessionCommands::Config { key, value } => handle_config(ctx, key, value)?,
            SessionCommands::Help { command } => handle_help(command.as_deref()),
            SessionCommands::Quit => return Ok(Flow::Quit),
        },
    }
    Ok(Flow::Continue)
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print!("{}", ctx.renderer.render_config(config));
    }
    print_result(ctx, &result);
    Ok(())
}

fn handle_help(command: Option<&str>) {
    match command {
        None => print!("{}", get_grouped_help()),
        Some(name) => match get_command_help(name) {
            Some(help) => print!("{}", help),
            None => {
                eprintln!("Unknown command: {}", name);
                print!("{}", get_grouped_help());
            }
        },
    }
}

fn print_result(ctx: &AppContext, result: &CmdResult) {
    print!("{}", ctx.renderer.render_messages(&result.messages));
}

fn print_error(ctx: &AppContext, error: &RecorderError) {
    let message = CmdMessage::error(format!("Error: {}", error));
    eprint!("{}", ctx.renderer.render_messages(&[message]));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_config_dir_wins() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp.path().join(LOCAL_CONFIG_DIR)).unwrap();
        let explicit = temp.path().join("elsewhere");
        assert_eq!(
            resolve_config_dir(Some(&explicit), temp.path()),
            explicit
        );
    }

    #[test]
    fn local_config_dir_used_when_present() {
        let temp = tempfile::tempdir().unwrap();
        let local = temp.path().join(LOCAL_CONFIG_DIR);
        std::fs::create_dir(&local).unwrap();
        assert_eq!(resolve_config_dir(None, temp.path()), local);
    }

    #[test]
    fn location_precedence() {
        let flag = Some(Coordinates::new(1.0, 1.0));
        let configured = Some(Coordinates::new(3.0, 3.0));

        assert_eq!(
            resolve_location(flag, Some("2,2"), configured).unwrap(),
            flag
        );
        assert_eq!(
            resolve_location(None, Some("2, 2"), configured).unwrap(),
            Some(Coordinates::new(2.0, 2.0))
        );
        assert_eq!(
            resolve_location(None, Some("  "), configured).unwrap(),
            configured
        );
        assert_eq!(resolve_location(None, None, None).unwrap(), None);
    }

    #[test]
    fn bad_location_env_is_config_error() {
        assert!(matches!(
            resolve_location(None, Some("north"), None),
            Err(RecorderError::Config(_))
        ));
    }
}
