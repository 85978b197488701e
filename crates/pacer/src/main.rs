use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use pacer_progress::Console;

use crate::cli::App;
use crate::demo::Demo;
use crate::menu::{INTERRUPTED, Menu};
use crate::pace::Pace;

mod cli;
mod demo;
mod logging;
mod menu;
mod pace;

fn main() -> Result<()> {
    let app = App::parse();
    logging::init_logging()?;

    ctrlc::set_handler(|| {
        println!("{INTERRUPTED}");
        std::process::exit(0);
    })
    .context("failed to install Ctrl-C handler")?;

    let console = Console::new();
    let demo = Demo::new(&console, Pace::new(app.speed)).ascii(app.ascii);

    Menu::new(demo, io::stdin().lock(), io::stdout())
        .run()
        .context("menu I/O failed")
}
