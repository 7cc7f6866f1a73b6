pub mod presenter;

use std::{
	io::{self, BufRead, Write},
	path::{Path, PathBuf},
	process::Command as Process,
};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{self, WrapErr};
use tracing_subscriber::EnvFilter;

use ferret_catalog::{Catalog, SnapshotOrder};
use ferret_config::Config;
use ferret_domain::Item;
use ferret_session::FilterSession;

use crate::presenter::Presenter;

#[derive(Debug, Parser)]
#[command(
	version = ferret_cli::VERSION,
	rename_all = "kebab",
	styles = ferret_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
	/// Narrow the item list and pick one item.
	Items,
	/// Pick a tag, then an item carrying it.
	Tags,
	/// Print the items shown for a filter and exit.
	List {
		#[arg(long, short = 'f', value_name = "TEXT", default_value = "")]
		filter: String,
	},
}

/// Settings the browsing flows need from the loaded config.
#[derive(Debug, Clone, Default)]
pub struct Browse {
	pub order: SnapshotOrder,
	pub opener: Option<String>,
}
impl Browse {
	pub fn from_config(config: &Config) -> eyre::Result<Self> {
		Ok(Self {
			order: config.catalog.order.parse()?,
			opener: config.opener.as_ref().map(|opener| opener.command.clone()),
		})
	}
}

pub fn run(args: Args) -> color_eyre::Result<()> {
	let config = ferret_config::load(&args.config)?;
	init_tracing(&config)?;
	let browse = Browse::from_config(&config)?;
	let catalog = Catalog::load(&config.catalog.path)?;
	let stdin = io::stdin();
	let stdout = io::stdout();
	let mut presenter = Presenter::new(stdin.lock(), stdout.lock());

	execute(&args.command, &catalog, &browse, &mut presenter)
}

/// Runs one command against an already loaded catalog.
pub fn execute<R, W>(
	command: &Command,
	catalog: &Catalog,
	browse: &Browse,
	presenter: &mut Presenter<R, W>,
) -> color_eyre::Result<()>
where
	R: BufRead,
	W: Write,
{
	match command {
		Command::Items => {
			let mut session = FilterSession::start(catalog.items(browse.order));

			if let Some(item) = presenter.run(&mut session)? {
				select_item(&item, browse, presenter)?;
			}
		},
		Command::Tags => browse_tags(catalog, browse, presenter)?,
		Command::List { filter } => {
			let mut session = FilterSession::start(catalog.items(browse.order));

			presenter.render(session.apply_filter(filter))?;
		},
	}

	Ok(())
}

/// Tag picker with a nested item picker; leaving the item picker returns to the tags.
fn browse_tags<R, W>(
	catalog: &Catalog,
	browse: &Browse,
	presenter: &mut Presenter<R, W>,
) -> color_eyre::Result<()>
where
	R: BufRead,
	W: Write,
{
	loop {
		let mut tags = FilterSession::start(catalog.tags());
		let Some(tag) = presenter.run(&mut tags)? else {
			return Ok(());
		};

		tracing::debug!(tag = %tag.name, "Browsing items by tag.");

		let mut items = FilterSession::start(catalog.items_tagged(&tag.name, browse.order));

		if let Some(item) = presenter.run(&mut items)? {
			return select_item(&item, browse, presenter);
		}
	}
}

fn select_item<R, W>(
	item: &Item,
	browse: &Browse,
	presenter: &mut Presenter<R, W>,
) -> color_eyre::Result<()>
where
	R: BufRead,
	W: Write,
{
	presenter.show_item(item)?;

	let (Some(command), Some(path)) = (browse.opener.as_deref(), item.path.as_deref()) else {
		return Ok(());
	};

	open_path(command, path)?;
	presenter.message(&format!("Opened with {command}."))?;

	Ok(())
}

fn open_path(command: &str, path: &Path) -> color_eyre::Result<()> {
	tracing::info!(command, path = %path.display(), "Launching opener.");

	let status = Process::new(command)
		.arg(path)
		.status()
		.wrap_err_with(|| format!("Failed to launch {command} for {}.", path.display()))?;

	if !status.success() {
		return Err(eyre::eyre!("{command} exited with {status}."));
	}

	Ok(())
}

fn init_tracing(config: &Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
	Ok(())
}
