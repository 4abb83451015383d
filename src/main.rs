mod app;
mod command;
mod config;
mod consts;
mod util;
mod world;
use crate::app::App;
use crate::config::{Config, ConfigError};
use crate::world::World;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use log::LevelFilter;
use rand::{rngs::StdRng, Rng, SeedableRng};
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = concat!(
    "Usage: autosnake [-c|--config <PATH>] [--seed <INT>] [--log-file <PATH>]\n",
    "\n",
    "Watch a snake eat its way around a grid on its own\n",
    "\n",
    "Options:\n",
    "  -c, --config <PATH>   Read configuration from the given file\n",
    "      --seed <INT>      Seed the random number generator with the given value\n",
    "      --log-file <PATH> Write log messages to the given file\n",
    "  -h, --help            Show this help message and exit\n",
    "  -V, --version         Show the program version and exit\n",
);

#[derive(Clone, Debug, Eq, PartialEq)]
enum Mode {
    Run(Arguments),
    Help,
    Version,
}

impl Mode {
    fn from_parser(mut parser: Parser) -> Result<Mode, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("seed") => args.seed = Some(parser.value()?.parse()?),
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Mode::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Mode::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Mode::Run(args))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    seed: Option<u64>,
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    match Mode::from_parser(Parser::from_env()) {
        Ok(Mode::Run(args)) => exit(run(args)),
        Ok(Mode::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Mode::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("autosnake: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(path) = args.log_file.as_ref().or(config.logging.file.as_ref()) {
        init_logging(path, config.logging.level)?;
    }
    log::info!(
        "Starting {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    log::info!("World settings: {:?}", config.world);
    log::info!("Display settings: {:?}", config.display);
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("Using random seed {seed}");
    let world = World::new(config.world, StdRng::seed_from_u64(seed));
    let app = App::new(world, config.display.tick_period());
    let terminal = ratatui::try_init().context("failed to initialize terminal")?;
    let r = app.run(terminal);
    ratatui::restore();
    r?;
    Ok(())
}

/// Load the configuration file named on the command line, or else the
/// default configuration file if it exists
fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => Config::load(p, false),
        None => match Config::default_path() {
            Ok(p) => Config::load(&p, true),
            Err(ConfigError::NoPath) => Ok(Config::default()),
            Err(e) => Err(e),
        },
    }
}

fn init_logging(path: &Path, level: LevelFilter) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let file = fs_err::File::create(path)?;
    WriteLogger::init(level, simplelog::Config::default(), file)
        .context("failed to initialize logging")?;
    Ok(())
}

fn exit(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("autosnake: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe)
}
