pub mod audio;
pub mod cli;
pub mod config;
pub mod detect;
pub mod driver;
pub mod error;
pub mod events;
pub mod host;
pub mod sounds;

use anyhow::Context;
use audio::{AfplaySink, AudioSink, PlaybackRequest, PrintSink};
use cli::{Cli, Commands};
use config::Config;
use detect::{Occurrence, PatternTable};
use driver::Driver;
use host::StaticHost;
use serde::Serialize;
use sounds::{Sound, SoundLibrary};
use std::rc::Rc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::{JoinSet, LocalSet};

pub fn run(cli: Cli) -> anyhow::Result<()> {
    setup_tracing(cli.verbose);

    match cli.command {
        Commands::Listen(args) => listen(args),
        Commands::Check(args) => check(args),
        Commands::Play(args) => play(args),
        Commands::Config(args) => config_cmd(args),
    }
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn listen(args: cli::ListenArgs) -> anyhow::Result<()> {
    let config = Config::load().context("load config")?;
    config.validate()?;

    let host = StaticHost::new(args.channel)
        .with_focus(!args.unfocused)
        .with_blocked(config.blocked_users.clone())
        .with_bots(config.bot_users.clone());

    if args.dry_run {
        drive(Driver::new(config, host, PrintSink))
    } else {
        drive(Driver::new(config, host, AfplaySink))
    }
}

// Events run on one thread; a message still pacing its repeats yields to
// events that arrive after it.
fn drive<S: AudioSink + 'static>(driver: Driver<StaticHost, S>) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build runtime")?;
    let local = LocalSet::new();
    local.block_on(&runtime, read_events(Rc::new(driver)))
}

async fn read_events<S: AudioSink + 'static>(
    driver: Rc<Driver<StaticHost, S>>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut in_flight = JoinSet::new();

    while let Some(line) = lines.next_line().await.context("read event from stdin")? {
        while in_flight.try_join_next().is_some() {}

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event = match events::parse_event(line) {
            Ok(Some(event)) => event,
            Ok(None) => {
                tracing::warn!("event not recognized; skipping");
                continue;
            }
            Err(err) => {
                tracing::warn!(error = ?err, "malformed event; skipping");
                continue;
            }
        };

        let driver = Rc::clone(&driver);
        in_flight.spawn_local(async move {
            let channel_id = event.channel_id().to_string();
            match driver.handle(event).await {
                Ok(played) => tracing::debug!(%channel_id, played, "event handled"),
                Err(err) => tracing::warn!(%channel_id, error = ?err, "event failed"),
            }
        });
    }

    while in_flight.join_next().await.is_some() {}
    Ok(())
}

#[derive(Debug, Serialize)]
struct CheckReport {
    occurrences: Vec<Occurrence>,
    classified: Option<Sound>,
}

fn check(args: cli::CheckArgs) -> anyhow::Result<()> {
    let config = Config::load().context("load config")?;
    let table = PatternTable::builtin();
    let report = CheckReport {
        occurrences: table.occurrences(&args.text, config.emoji_sound_limit)?,
        classified: table.classify(&args.text),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.occurrences.is_empty() {
        println!("No matches");
    }
    for occurrence in &report.occurrences {
        println!("{}: {}", occurrence.sound, occurrence.count);
    }
    match report.classified {
        Some(sound) => println!("Classified as: {sound}"),
        None => println!("Classified as: none"),
    }

    Ok(())
}

fn play(args: cli::PlayArgs) -> anyhow::Result<()> {
    let config = Config::load().context("load config")?;
    let library = SoundLibrary::from_config(&config);

    let locator = match library.dispatch(args.sound, &config) {
        Some(locator) => locator,
        None => {
            println!("{} is disabled", args.sound);
            return Ok(());
        }
    };

    let request = PlaybackRequest::new(args.sound, locator, config.volume);
    if args.dry_run {
        PrintSink.play(&request)
    } else {
        AfplaySink.play(&request)
    }
}

fn config_cmd(args: cli::ConfigArgs) -> anyhow::Result<()> {
    if args.init {
        let path = Config::init_default()?;
        println!("Initialized config at {}", path.display());
        return Ok(());
    }

    if args.show {
        let config = Config::load()?;
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    if args.validate {
        let config = Config::load()?;
        config.validate()?;
        println!("Config OK");
        return Ok(());
    }

    let path = Config::default_path()?;
    println!("{}", path.display());
    Ok(())
}
