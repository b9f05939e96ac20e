//! tabnav - replay scripted editor sessions through the navigation core
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tabnav::headless::NavEvent;
use tabnav::{run, Scenario};
use tabnav_core::{logging, Command, COMMAND_SET, RECOGNIZED_EXTENSIONS};

/// tabnav - tab navigation decisions for a code editor, driven by a scenario file
#[derive(Parser, Debug)]
#[command(name = "tabnav")]
#[command(about = "Replay a scripted editor session through the tab navigator", long_about = None)]
struct Args {
    /// Scenario file (TOML) describing windows, projects and steps
    #[arg(value_name = "SCENARIO", required_unless_present_any = ["list_commands", "list_extensions"])]
    scenario: Option<PathBuf>,

    /// Print the command table and exit
    #[arg(long)]
    list_commands: bool,

    /// Print the recognized file extensions and exit
    #[arg(long)]
    list_extensions: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.list_commands {
        println!("command set {}", COMMAND_SET);
        for command in Command::ALL {
            println!("{:#06x}  {}", command.id(), command);
        }
        return Ok(());
    }

    if args.list_extensions {
        println!("{}", RECOGNIZED_EXTENSIONS.join(" "));
        return Ok(());
    }

    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let Some(path) = args.scenario else {
        return Ok(());
    };

    let scenario = match Scenario::load(&path) {
        Ok(scenario) => scenario,
        Err(e) => {
            NavEvent::error(e.to_string(), true).emit();
            return Err(e.into());
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = run(&scenario, &mut out)?;
    out.flush()?;

    if report.failed_steps > 0 {
        eprintln!("{} step(s) failed, see error events", report.failed_steps);
    }
    Ok(())
}
