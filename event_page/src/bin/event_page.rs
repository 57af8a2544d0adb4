//! # event-page
//!
//! Build the event page from a content directory.
//!
//! ## Usage
//!
//! ```bash
//! # Static HTML document
//! event-page render --content content --out dist/index.html
//!
//! # Validate content and page config
//! event-page check --content content
//!
//! # Print when each reveal slot is released
//! event-page plan --content content
//! ```
//!
//! `page.toml` is read from the content directory unless `--config` is given;
//! without either the built-in defaults apply.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::{debug, info};

use event_page::reveal::AlwaysVisible;
use event_page::{compose_page, render_page, ContentStore, Page, PageConfig, RevealController, VirtualClock};

#[derive(Parser, Debug)]
#[command(name = "event-page")]
#[command(about = "Render a content-driven event page")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose the page and write the static HTML document
    Render {
        #[command(flatten)]
        source: Source,
        /// Output file (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Load and validate content and page config, then print a summary
    Check {
        #[command(flatten)]
        source: Source,
    },
    /// Simulate the reveal schedule of every composed section
    Plan {
        #[command(flatten)]
        source: Source,
    },
}

#[derive(ClapArgs, Debug)]
struct Source {
    /// Directory holding the per-section JSON files
    #[arg(long, default_value = "content")]
    content: PathBuf,
    /// Page config (default: <content>/page.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Source {
    fn load(&self) -> Result<(ContentStore, PageConfig)> {
        let store = ContentStore::load_dir(&self.content)
            .with_context(|| format!("loading content from {}", self.content.display()))?;

        let config_path = self
            .config
            .clone()
            .or_else(|| Some(self.content.join("page.toml")).filter(|p| p.is_file()));
        let config = match config_path {
            Some(path) => PageConfig::load(&path)
                .with_context(|| format!("loading page config {}", path.display()))?,
            None => {
                debug!("no page.toml, using defaults");
                PageConfig::default()
            }
        };
        Ok((store, config))
    }

    fn page(&self) -> Result<Page> {
        let (store, config) = self.load()?;
        compose_page(&store, &config).context("composing page")
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match args.command {
        Command::Render { source, out } => render(&source, out.as_deref()),
        Command::Check { source } => check(&source),
        Command::Plan { source } => plan(&source),
    }
}

fn render(source: &Source, out: Option<&Path>) -> Result<()> {
    let page = source.page()?;
    let html = render_page(&page);
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(path, &html).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "page written");
        }
        None => print!("{html}"),
    }
    Ok(())
}

fn check(source: &Source) -> Result<()> {
    let (store, config) = source.load()?;
    let page = compose_page(&store, &config).context("composing page")?;

    let loaded: Vec<&str> = store.loaded().iter().map(|id| id.as_str()).collect();
    let order: Vec<&str> = page.sections.iter().map(|s| s.anchor.as_str()).collect();
    println!("title:    {}", page.title);
    println!("content:  {}", loaded.join(", "));
    println!("sections: {}", order.join(" -> "));
    if config.hero.inline_form {
        println!("hero:     inline registration form");
    }
    println!("ok");
    Ok(())
}

fn plan(source: &Source) -> Result<()> {
    let page = source.page()?;

    for section in &page.sections {
        let slots = event_page::reveal::slots(section.content.entrances());
        let clock = VirtualClock::new();
        let released: Rc<RefCell<Vec<(usize, Duration)>>> = Rc::default();
        let sink = {
            let clock = clock.clone();
            let released = Rc::clone(&released);
            move |index: usize| released.borrow_mut().push((index, clock.now()))
        };

        let controller = RevealController::attach(
            section.anchor.as_str(),
            &AlwaysVisible,
            &(),
            &slots,
            section.timing,
            clock.clone(),
            sink,
        )?;
        clock.run_all();

        println!(
            "{} (stagger {}ms, delay {}ms, {:?})",
            section.anchor,
            section.timing.stagger_ms,
            section.timing.initial_delay_ms,
            controller.phase()
        );
        for (index, at) in released.borrow().iter() {
            println!("  slot {index:<2} +{}ms", at.as_millis());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[event-page] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
