mod cli;
mod error;
mod files;
mod fit;
mod loader;
mod navigation;
mod prompt;
mod resolver;
mod session;
mod ui;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use winit::event_loop::EventLoop;

use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::files::ImageSequence;
use crate::prompt::ConsolePrompt;
use crate::resolver::DirectoryResolver;
use crate::ui::App;

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => {}
        Err(Error::NotFound(query)) => {
            log::info!("No directory matches {:?}", query);
            println!("Directory not found");
        }
        Err(Error::EmptyDirectory(path)) => {
            log::info!("No eligible images in {:?}", path);
            println!("Directory contains no suitable images");
        }
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut prompt = ConsolePrompt::stdio();
    let query = match cli.query.clone() {
        Some(q) => q,
        None => prompt.read_query()?,
    };

    let resolver = DirectoryResolver::new(cli.search_roots(), cli.follow_links);
    let dir = resolver.resolve(&query, &mut prompt)?;
    drop(prompt);
    log::info!("Using directory {:?}", dir.path());

    let images = match cli.seed {
        Some(seed) => ImageSequence::shuffled(&dir, &mut StdRng::seed_from_u64(seed))?,
        None => ImageSequence::shuffled(&dir, &mut rand::rng())?,
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new(images, cli.nav_width);
    event_loop.run_app(&mut app)?;
    Ok(())
}
