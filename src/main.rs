// SPDX-License-Identifier: MPL-2.0
use clipdeck::config::{self, Config};
use clipdeck::domain::video::Video;
use clipdeck::media::{analyze, thumbnail_for, thumbnail_of};
use clipdeck::tracing_setup::{init_tracing, LogLevel};
use clipdeck::video_player::{FullscreenNotifier, Playback, PlayerSession, ScriptedHandle};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: clipdeck [--log-level <level>] [--config <path>] <command> [args]

Commands:
  classify <reference>...   Print how each reference is played, as JSON
  thumbnail <reference>     Print the thumbnail URL, or `none`
  inspect <video.json>      Print the render strategy and initial player view

Options:
  --log-level <level>       error | warn | info | debug | trace (default: error)
  --config <path>           Read settings from <path> instead of the default location
  -h, --help                Show this message";

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

enum Command {
    Classify(Vec<String>),
    Thumbnail(String),
    Inspect(PathBuf),
}

struct Flags {
    log_level: Option<LogLevel>,
    config_path: Option<PathBuf>,
    command: Command,
}

fn main() -> ExitCode {
    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args() -> CliResult<Option<Flags>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let log_level = args
        .opt_value_from_fn("--log-level", |value| value.parse::<LogLevel>())?;
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;

    let Some(name) = args.subcommand()? else {
        return Ok(None);
    };
    let rest: Vec<String> = args
        .finish()
        .into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let command = match (name.as_str(), rest.as_slice()) {
        ("classify", []) => return Err("classify needs at least one reference".into()),
        ("classify", references) => Command::Classify(references.to_vec()),
        ("thumbnail", [reference]) => Command::Thumbnail(reference.clone()),
        ("inspect", [path]) => Command::Inspect(PathBuf::from(path)),
        ("thumbnail" | "inspect", _) => {
            return Err(format!("{name} takes exactly one argument").into())
        }
        (other, _) => return Err(format!("unknown command `{other}`").into()),
    };

    Ok(Some(Flags {
        log_level,
        config_path,
        command,
    }))
}

fn run(flags: Flags) -> CliResult<()> {
    let config = match &flags.config_path {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    init_tracing(flags.log_level.unwrap_or_else(|| config.log_level()))?;

    match flags.command {
        Command::Classify(references) => {
            for reference in references {
                println!("{}", serde_json::to_string(&analyze(&reference))?);
            }
        }
        Command::Thumbnail(reference) => {
            println!(
                "{}",
                thumbnail_for(&reference).unwrap_or_else(|| "none".to_string())
            );
        }
        Command::Inspect(path) => inspect(&config, &path)?,
    }
    Ok(())
}

/// Opens the record in a headless session and prints what a player would show.
fn inspect(config: &Config, path: &std::path::Path) -> clipdeck::error::Result<()> {
    let content = std::fs::read_to_string(path)?;
    let video = Video::from_json(&content)?;

    let mut session = PlayerSession::new(config, FullscreenNotifier::new());
    let playback = session.open(&video, |_| ScriptedHandle::pair().0)?;
    let source = session.resolve(&video.video_url);
    let player = match playback {
        Playback::Native { .. } => Some(session.view()),
        Playback::Embedded { .. } => None,
    };

    let report = json!({
        "id": video.id,
        "title": video.title,
        "source": &*source,
        "playback": playback,
        "thumbnail": thumbnail_of(&video),
        "createdDate": video.created_date().map(|date| date.to_string()),
        "numComments": video.num_comments,
        "player": player,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
