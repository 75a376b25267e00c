//! ciscogen entry point.
//!
//! Renders Cisco IOS interface configuration from a TOML inventory, or a
//! single interface block from command line settings.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use tracing::{error, info};

use ciscogen::Inventory;
use ciscogen_core::{print_interface, ConfigText, Interface, InterfaceChange};
use ciscogen_types::{InterfaceKind, PortRange};

/// Cisco IOS configuration generator
#[derive(Parser, Debug)]
#[command(name = "ciscogen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every interface and table in an inventory file
    Render {
        /// Inventory file (TOML)
        path: PathBuf,

        /// Write the configuration here instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Render a single interface block
    Interface {
        /// Interface kind, e.g. fast-ethernet or g0/1
        #[arg(short = 'k', long)]
        kind: InterfaceKind,

        /// Port or port range, e.g. 3 or 1-8
        #[arg(short = 'p', long, default_value = "0")]
        ports: PortRange,

        /// Field change as FIELD=VALUE, applied in order
        #[arg(short = 's', long = "set", value_name = "FIELD=VALUE")]
        changes: Vec<String>,
    },
}

/// Initializes tracing to stderr so stdout carries only configuration.
fn init_logging(log_level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .init();
}

fn render(path: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let inventory = Inventory::load(path)?;
    let set = inventory
        .build()
        .with_context(|| format!("Failed to build inventory {}", path.display()))?;
    let text = set.render();

    match output {
        Some(out_path) => {
            let file = File::create(out_path)
                .with_context(|| format!("Failed to create {}", out_path.display()))?;
            write_text(&text, BufWriter::new(file))?;
            info!(path = %out_path.display(), lines = text.len(), "Wrote configuration");
        }
        None => write_text(&text, io::stdout().lock())?,
    }
    Ok(())
}

fn write_text<W: Write>(text: &ConfigText, mut out: W) -> anyhow::Result<()> {
    text.write_to(&mut out)
        .and_then(|()| out.flush())
        .context("Failed to write configuration")
}

fn parse_change(spec: &str) -> anyhow::Result<InterfaceChange> {
    let (field, value) = spec
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected FIELD=VALUE, got '{}'", spec))?;
    InterfaceChange::parse(field.trim(), value.trim())
        .with_context(|| format!("Invalid setting '{}'", spec))
}

fn interface(kind: InterfaceKind, ports: PortRange, changes: &[String]) -> anyhow::Result<()> {
    let mut intf = Interface::new(kind, ports);
    for spec in changes {
        let change = parse_change(spec)?;
        intf.apply(change)
            .with_context(|| format!("Rejected setting '{}'", spec))?;
    }

    let mut out = io::stdout().lock();
    print_interface(&mut out, &intf).context("Failed to write configuration")?;
    out.flush().context("Failed to write configuration")?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    let result = match &args.command {
        Command::Render { path, output } => render(path, output.as_deref()),
        Command::Interface {
            kind,
            ports,
            changes,
        } => interface(*kind, *ports, changes),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
