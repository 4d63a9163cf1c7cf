use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::debug;

use iniget::utils::file::find_and_load_with;
use iniget::{ConfigStore, IniError, IniReader};

/// Read values out of INI configuration files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the INI file; defaults to the first *.ini in the current directory
    #[arg(short, long, value_name = "FILE", env = "INIGET_CONFIG")]
    config: Option<PathBuf>,

    /// Fail on lines that are neither comments, sections nor key=value pairs
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the value of KEY in SECTION
    Get {
        section: String,
        key: String,

        /// Print this instead of failing when the section or key is missing
        #[arg(short, long, value_name = "VALUE")]
        default: Option<String>,
    },
    /// List section names
    Sections,
    /// List the keys of SECTION
    Keys { section: String },
}

fn main() {
    // Diagnostics go to stderr, stdout only carries values
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let args = Args::parse();

    if let Err(err) = run(args) {
        let code = match err.downcast_ref::<IniError>() {
            Some(ini_err) => ini_err.exit_code(),
            None => {
                eprintln!("Error: {:#}", err);
                1
            }
        };
        std::process::exit(code);
    }
}

fn run(args: Args) -> Result<()> {
    let reader = if args.strict {
        IniReader::new().strict()
    } else {
        IniReader::new()
    };
    let dir = std::env::current_dir()?;
    let store = find_and_load_with(&reader, args.config.as_deref(), &dir)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.command {
        Command::Get {
            section,
            key,
            default,
        } => {
            let value = lookup(&store, &section, &key, default.as_deref())?;
            writeln!(out, "{}", value)?;
        }
        Command::Sections => {
            for section in store.sections() {
                writeln!(out, "{}", section)?;
            }
        }
        Command::Keys { section } => {
            for key in store.keys(&section)? {
                writeln!(out, "{}", key)?;
            }
        }
    }
    Ok(())
}

fn lookup<'a>(
    store: &'a ConfigStore,
    section: &str,
    key: &str,
    default: Option<&'a str>,
) -> Result<&'a str, IniError> {
    match (store.get(section, key), default) {
        (Ok(value), _) => Ok(value),
        (Err(err), Some(fallback)) if err.is_not_found() => {
            debug!("Using default for [{}] {}", section, key);
            Ok(fallback)
        }
        (Err(err), _) => Err(err),
    }
}
