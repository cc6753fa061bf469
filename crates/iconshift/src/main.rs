//! iconshift - launcher icon switch simulator
//!
//! Each invocation models one process lifetime of a host app. On
//! startup the controller attaches, resuming any icon request a
//! previous run persisted but never applied; one command then runs
//! against it. Durable state (catalog, pending slot, component
//! toggles) lives in the state directory between runs, so the
//! deferred-apply and crash-survival behavior is observable from a
//! shell:
//!
//! ```text
//! $ iconshift request red        # deferred, nothing visible yet
//! $ iconshift current            # still the default icon
//! $ iconshift background         # request applied, restart signaled
//! $ iconshift current            # "red"
//! ```

mod dispatch;
mod platform;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{error, info};

use iconshift_core::{BuildMode, CatalogFile, IconId, IconSwitchController, logging};

use crate::dispatch::MethodResponse;
use crate::platform::{FileStore, SimPlatform};

/// Embedded demo catalog, used to seed a fresh state directory.
const DEFAULT_CATALOG_TOML: &str = include_str!("../../../catalog.toml");

/// iconshift - launcher icon switch simulator
#[derive(Parser, Debug)]
#[command(name = "iconshift", version, about, long_about = None)]
struct Args {
    /// Directory holding the simulated platform state
    #[arg(short, long, default_value = ".iconshift")]
    state_dir: PathBuf,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Model a release-build process (enables the restart signal)
    #[arg(long)]
    release: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Request an icon change, applied on background or next launch
    Request {
        /// Alternate icon name; omit to request the default icon
        icon: Option<String>,

        /// Ask for a confirmation-free switch where the platform has one
        #[arg(long)]
        silent: bool,
    },
    /// Signal a background transition, applying any pending request
    Background,
    /// Print the currently active icon
    Current,
    /// List the supported alternate icons
    Supported,
    /// Check whether the platform can alternate icons
    IsSupported,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    logging::init(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    fs::create_dir_all(&args.state_dir).context("creating state directory")?;

    let catalog_path = args.state_dir.join("catalog.toml");
    if !catalog_path.exists() {
        fs::write(&catalog_path, DEFAULT_CATALOG_TOML).context("seeding demo catalog")?;
        info!(path = %catalog_path.display(), "wrote demo catalog");
    }
    let catalog = CatalogFile::load(&catalog_path)
        .context("loading icon catalog")?
        .into_catalog();

    let store = FileStore::new(args.state_dir.join("pending"));
    let applier = SimPlatform::open(args.state_dir.join("components.toml"), &catalog)
        .context("opening simulated platform state")?;

    let build_mode = if args.release {
        BuildMode::Release
    } else {
        BuildMode::Debug
    };
    let controller =
        IconSwitchController::new(Box::new(catalog), Box::new(store), Box::new(applier))
            .with_build_mode(build_mode);

    // A fresh process: resume anything the previous run left pending
    // (covers the process killed before its background event fired).
    if let Some(applied) = controller
        .on_attach()
        .context("resuming pending icon request")?
    {
        info!(
            icon = applied.as_ref().map_or("<default>", IconId::as_str),
            "applied pending icon request at launch"
        );
    }

    let response = match args.command {
        Command::Request { icon, silent } => dispatch::handle(
            &controller,
            dispatch::METHOD_CHANGE_ICON,
            &json!({ "iconName": icon, "silent": silent }),
        ),
        Command::Current => dispatch::handle(
            &controller,
            dispatch::METHOD_GET_CURRENT_ICON,
            &serde_json::Value::Null,
        ),
        Command::Supported => dispatch::handle(
            &controller,
            dispatch::METHOD_GET_SUPPORTED_ICONS,
            &serde_json::Value::Null,
        ),
        Command::IsSupported => dispatch::handle(
            &controller,
            dispatch::METHOD_IS_SUPPORTED,
            &serde_json::Value::Null,
        ),
        Command::Background => {
            let outcome = controller
                .on_background()
                .context("applying pending icon request")?;
            if outcome.restart {
                info!("host would kill the process here for a clean restart");
            }
            let body = match &outcome.applied {
                None => json!({ "applied": false, "restart": outcome.restart }),
                Some(target) => json!({
                    "applied": true,
                    "icon": target.as_ref().map(IconId::as_str),
                    "restart": outcome.restart,
                }),
            };
            println!("{}", serde_json::to_string_pretty(&body)?);
            return Ok(ExitCode::SUCCESS);
        }
    };

    println!("{}", serde_json::to_string_pretty(&response.to_json())?);
    Ok(match response {
        MethodResponse::Success(_) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}
