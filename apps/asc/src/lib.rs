//! Command-line front end for the directory: browse commands over the
//! embedded catalogs plus the member profile editor.

pub mod command;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
	version = asc_cli::VERSION,
	rename_all = "kebab",
	styles = asc_cli::styles(),
)]
pub struct Args {
	/// Optional TOML config; built-in defaults apply when omitted.
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: Option<PathBuf>,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Browse the researcher directory.
	Researchers(ResearcherArgs),
	/// Browse the paper directory.
	Papers(PaperArgs),
	/// Browse the project directory.
	Projects(ProjectArgs),
	/// Show one researcher by slug or numeric id.
	Show {
		#[arg(value_name = "SLUG_OR_ID")]
		slug_or_id: String,
	},
	/// Inspect or edit the member profile.
	Profile {
		#[command(subcommand)]
		command: ProfileCommand,
	},
}

#[derive(Debug, clap::Args)]
pub struct ResearcherArgs {
	/// Text query over name, affiliation, bio, and topics.
	#[arg(long, short = 'q', value_name = "TEXT")]
	pub query: Option<String>,
	/// Community key (academic, ea, lesswrong).
	#[arg(long, value_name = "KEY")]
	pub community: Option<String>,
	#[arg(long, value_name = "TOPIC")]
	pub topic: Option<String>,
	/// One of relevance, papers, posts, hindex, name.
	#[arg(long, value_name = "MODE", default_value = "relevance")]
	pub sort: String,
	#[arg(long, value_name = "N", default_value_t = 1)]
	pub page: usize,
	/// grid or list; the config default applies when omitted.
	#[arg(long, value_name = "MODE")]
	pub view: Option<String>,
}

#[derive(Debug, clap::Args)]
pub struct PaperArgs {
	/// Text query over title, abstract, topics, and authors.
	#[arg(long, short = 'q', value_name = "TEXT")]
	pub query: Option<String>,
	/// Source key (academic, ea, lesswrong).
	#[arg(long, value_name = "KEY")]
	pub source: Option<String>,
	#[arg(long, value_name = "TOPIC")]
	pub topic: Option<String>,
	/// A year such as 2024, or a bound such as before-2019.
	#[arg(long, value_name = "YEAR")]
	pub year: Option<String>,
	/// One of relevance, citations, year, karma, title.
	#[arg(long, value_name = "MODE", default_value = "relevance")]
	pub sort: String,
	/// Match the literal query instead of the widened keyword search.
	#[arg(long)]
	pub exact: bool,
	#[arg(long, value_name = "N", default_value_t = 1)]
	pub page: usize,
	/// grid or list; the config default applies when omitted.
	#[arg(long, value_name = "MODE")]
	pub view: Option<String>,
}

#[derive(Debug, clap::Args)]
pub struct ProjectArgs {
	/// Text query over title, description, topics, leads, and organizations.
	#[arg(long, short = 'q', value_name = "TEXT")]
	pub query: Option<String>,
	/// Status key (active, completed, paused, seeking-collaborators).
	#[arg(long, value_name = "KEY")]
	pub status: Option<String>,
	/// Source key (academic, ea, independent, lesswrong).
	#[arg(long, value_name = "KEY")]
	pub source: Option<String>,
	#[arg(long, value_name = "TOPIC")]
	pub topic: Option<String>,
	/// One of relevance, newest, papers, title.
	#[arg(long, value_name = "MODE", default_value = "relevance")]
	pub sort: String,
	#[arg(long, value_name = "N", default_value_t = 1)]
	pub page: usize,
	/// grid or list; the config default applies when omitted.
	#[arg(long, value_name = "MODE")]
	pub view: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
	/// Print the stored profile and its completion state.
	Show,
	/// Set profile fields; only the provided flags change.
	Set(ProfileSetArgs),
	/// Add a research topic. Blank and duplicate topics are ignored.
	AddTopic {
		#[arg(value_name = "TOPIC")]
		topic: String,
	},
	/// Remove a research topic.
	RemoveTopic {
		#[arg(value_name = "TOPIC")]
		topic: String,
	},
	/// Join the community, or leave it when already joined.
	ToggleCommunity {
		#[arg(value_name = "NAME")]
		community: String,
	},
}

#[derive(Debug, clap::Args)]
pub struct ProfileSetArgs {
	#[arg(long, value_name = "TEXT")]
	pub full_name: Option<String>,
	#[arg(long, value_name = "TEXT")]
	pub display_name: Option<String>,
	#[arg(long, value_name = "URL")]
	pub avatar_url: Option<String>,
	#[arg(long, value_name = "TEXT")]
	pub bio: Option<String>,
	#[arg(long, value_name = "TEXT")]
	pub full_bio: Option<String>,
	#[arg(long, value_name = "TEXT")]
	pub affiliation: Option<String>,
	#[arg(long, value_name = "TEXT")]
	pub position: Option<String>,
	#[arg(long, value_name = "TEXT")]
	pub location: Option<String>,
	#[arg(long, value_name = "URL")]
	pub website: Option<String>,
	#[arg(long, value_name = "HANDLE")]
	pub twitter: Option<String>,
	#[arg(long, value_name = "HANDLE")]
	pub github: Option<String>,
	#[arg(long, value_name = "URL")]
	pub linkedin: Option<String>,
	#[arg(long, value_name = "URL")]
	pub google_scholar: Option<String>,
	#[arg(long, value_name = "ID")]
	pub orcid: Option<String>,
	/// Whether the profile is listed publicly.
	#[arg(long, value_name = "BOOL")]
	pub public: Option<bool>,
}

pub fn run(args: Args) -> color_eyre::Result<()> {
	let config = match &args.config {
		Some(path) => asc_config::load(path)?,
		None => asc_config::Config::default(),
	};

	init_tracing(&config)?;

	if let Some(path) = &args.config {
		tracing::debug!(path = %path.display(), "Loaded config file.");
	}

	match args.command {
		Command::Researchers(browse) => command::researchers(browse, &config),
		Command::Papers(browse) => command::papers(browse, &config),
		Command::Projects(browse) => command::projects(browse, &config),
		Command::Show { slug_or_id } => command::show(&slug_or_id),
		Command::Profile { command: profile } => command::profile(profile),
	}
}

fn init_tracing(config: &asc_config::Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.app.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();

	Ok(())
}
