use clap::Parser;
use log::{error, info};

mod backend;
mod cli;
mod ui;

use backend::domain::check_in_service::NUDGE_STEP;
use backend::domain::commands::check_in::{
    NudgeLevelCommand, QuickSetCommand, SetCupsCommand, SetLevelCommand, SetNameCommand,
};
use backend::domain::share_service::ShareDelivery;
use backend::platform::{NoShareSheet, TerminalClipboard};
use backend::Backend;
use cli::{Cli, Commands};
use shared::MessageStyle;

fn main() {
    env_logger::init();

    let args = Cli::parse();
    if let Err(e) = run(args) {
        error!("Command failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    let backend = match &args.data_dir {
        Some(dir) => Backend::with_base_directory(dir)?,
        None => Backend::new()?,
    };
    info!("Backend ready");

    match args.command.unwrap_or(Commands::Status { json: false }) {
        Commands::Status { json } => {
            let result = backend.check_in_service.current()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                ui::render_status(&result);
            }
        }
        Commands::Set { level, cups, name } => {
            if level.is_none() && cups.is_none() && name.is_none() {
                anyhow::bail!("Provide at least one of --level, --cups, --name");
            }
            let mut result = None;
            if let Some(level) = level {
                result = Some(backend.check_in_service.set_level(SetLevelCommand { level })?);
            }
            if let Some(cups) = cups {
                result = Some(backend.check_in_service.set_cups(SetCupsCommand { cups })?);
            }
            if let Some(name) = name {
                result = Some(backend.check_in_service.set_name(SetNameCommand { name })?);
            }
            if let Some(result) = result {
                ui::render_status(&result);
            }
        }
        Commands::Up => {
            let result = backend
                .check_in_service
                .nudge_level(NudgeLevelCommand { delta: NUDGE_STEP })?;
            ui::render_status(&result);
        }
        Commands::Down => {
            let result = backend
                .check_in_service
                .nudge_level(NudgeLevelCommand { delta: -NUDGE_STEP })?;
            ui::render_status(&result);
        }
        Commands::Quick { slot } => {
            let result = backend.check_in_service.quick_set(QuickSetCommand { slot })?;
            ui::render_status(&result);
        }
        Commands::Dark => {
            let result = backend.check_in_service.toggle_dark()?;
            ui::render_status(&result);
        }
        Commands::Reset => {
            let result = backend.check_in_service.reset()?;
            ui::render_status(&result);
        }
        Commands::Clear => {
            let result = backend.check_in_service.clear_saved()?;
            println!("Reset saved settings");
            ui::render_status(&result);
        }
        Commands::Share => {
            let result = backend.check_in_service.current()?;
            let delivery = backend.share_service.share(
                &NoShareSheet,
                &TerminalClipboard,
                &result.check_in,
            )?;
            match delivery {
                ShareDelivery::Shared => println!("Shared"),
                ShareDelivery::Copied => println!("Link copied"),
                ShareDelivery::Cancelled => {}
                ShareDelivery::Unavailable => println!("Couldn’t copy"),
            }
        }
        Commands::Messages => {
            let result = backend.check_in_service.current()?;
            let templates = backend.share_service.messages(&result.check_in)?;
            let selected = MessageStyle::for_level(result.check_in.level);
            ui::render_messages(&templates, selected);
        }
        Commands::Sms => {
            let result = backend.check_in_service.current()?;
            println!("{}", backend.share_service.sms_url(&result.check_in)?);
        }
        Commands::Import { url } => {
            let command = backend.share_service.parse_link(&url)?;
            let result = backend.check_in_service.apply_import(command)?;
            ui::render_status(&result);
        }
    }

    Ok(())
}
