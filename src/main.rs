//! CapyLauncher - application launcher for Hyprland
//!
//! Indexes desktop entries once at startup, then drives the launcher from
//! line-based input events until stdin closes.

mod cli;
mod panels;
mod services;

use capy_apps::{AppCatalog, DesktopApp, Launcher, LauncherConfig};
use clap::Parser;
use cli::Args;
use log::info;
use panels::launcher::{LauncherInput, TerminalSurface, events};
use services::process::ShellSpawner;
use std::error::Error;
use std::io::{self, BufRead};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let (config, catalog) = match &args.config {
        Some(path) => {
            let config = LauncherConfig::load_or_default(path);
            let catalog = Arc::new(AppCatalog::new(config.application_directories()));
            catalog.refresh();
            (config, catalog)
        }
        None => (LauncherConfig::load(), capy_apps::get_catalog()),
    };

    if args.list {
        let index = catalog.index();
        let apps: Vec<&DesktopApp> = index.iter().map(|a| a.as_ref()).collect();
        println!("{}", serde_json::to_string_pretty(&apps)?);
        return Ok(());
    }

    // Startup scan is already in the index; only rescans arrive here.
    let mut catalog_rx = catalog.subscribe();

    let surface = TerminalSurface::new(io::stdout(), config.max_results);
    let mut launcher = Launcher::new(catalog.index(), &config, surface, ShellSpawner::new());

    launcher.surface_mut().set_visible(true);
    launcher.show();

    for line in io::stdin().lock().lines() {
        if let Some(count) = events::drain_refresh(&mut catalog_rx) {
            info!("Applying rescanned index: {} apps", count);
            launcher.replace_index(catalog.index());
        }

        let input = LauncherInput::parse(&line?);
        if !launcher.surface().is_visible() && !input.allowed_while_hidden() {
            continue;
        }

        match input {
            LauncherInput::Down => launcher.move_down(),
            LauncherInput::Up => launcher.move_up(),
            LauncherInput::Confirm => {
                launcher.confirm();
            }
            LauncherInput::Dismiss => launcher.dismiss(),
            LauncherInput::Show => {
                launcher.surface_mut().set_visible(true);
                launcher.show();
            }
            LauncherInput::Reload => {
                services::apps::start_refresh(catalog.clone());
            }
            LauncherInput::Quit => break,
            LauncherInput::Query(text) => launcher.set_query(&text),
        }
    }

    info!("CapyLauncher exiting.");
    Ok(())
}
