use std::sync::Arc;

use color_eyre::eyre;
use time::OffsetDateTime;
use uuid::Uuid;

use asc_config::Config;
use asc_directory::{DirectoryState, PaperSort, ProjectSort, ResearcherSort, TextMatch, ViewMode};
use asc_domain::{AVAILABLE_COMMUNITIES, Catalog, Paper, Profile, Project, Researcher};
use asc_providers::{MemoryProfileStore, ProfileStore, Providers, Session, StaticSession};

use crate::{PaperArgs, ProfileCommand, ProfileSetArgs, ProjectArgs, ResearcherArgs, render};

pub fn researchers(args: ResearcherArgs, config: &Config) -> color_eyre::Result<()> {
	let catalog = Catalog::shared()?;
	let mut state = DirectoryState::<Researcher>::new(config.directory.researchers_page_size);

	state.set_query(args.query);
	state.update_facets(|facets| {
		facets.community = args.community;
		facets.topic = args.topic;
	});
	state.set_sort(ResearcherSort::parse(&args.sort));
	state.set_view(view_mode(args.view.as_deref(), &config.app.default_view));
	state.set_page(args.page);

	let page = state.derive(catalog.researchers());

	render::active_filters(&state.active_filters());
	render::researchers(&page, state.view());
	render::footer(page.current_page, page.total_pages, page.total_count);

	Ok(())
}

pub fn papers(args: PaperArgs, config: &Config) -> color_eyre::Result<()> {
	let catalog = Catalog::shared()?;
	let mut state = DirectoryState::<Paper>::new(config.directory.papers_page_size);
	let broad = config.directory.broad_search_default && !args.exact;

	state.set_query(args.query);
	state.set_text_match(if broad { TextMatch::Broad } else { TextMatch::Exact });
	state.update_facets(|facets| {
		facets.source = args.source;
		facets.topic = args.topic;
		facets.year = args.year;
	});
	state.set_sort(PaperSort::parse(&args.sort));
	state.set_view(view_mode(args.view.as_deref(), &config.app.default_view));
	state.set_page(args.page);

	let page = state.derive(catalog.papers());

	render::active_filters(&state.active_filters());
	render::papers(catalog, &page, state.view());
	render::footer(page.current_page, page.total_pages, page.total_count);

	Ok(())
}

pub fn projects(args: ProjectArgs, config: &Config) -> color_eyre::Result<()> {
	let catalog = Catalog::shared()?;
	let mut state = DirectoryState::<Project>::new(config.directory.projects_page_size);

	state.set_query(args.query);
	state.update_facets(|facets| {
		facets.status = args.status;
		facets.source = args.source;
		facets.topic = args.topic;
	});
	state.set_sort(ProjectSort::parse(&args.sort));
	state.set_view(view_mode(args.view.as_deref(), &config.app.default_view));
	state.set_page(args.page);

	let page = state.derive(catalog.projects());

	render::active_filters(&state.active_filters());
	render::projects(catalog, &page, state.view());
	render::footer(page.current_page, page.total_pages, page.total_count);

	Ok(())
}

pub fn show(slug_or_id: &str) -> color_eyre::Result<()> {
	let catalog = Catalog::shared()?;
	let researcher = catalog
		.researcher_by_slug(slug_or_id)
		.or_else(|| slug_or_id.parse().ok().and_then(|id| catalog.researcher_by_id(id)));
	let Some(researcher) = researcher else {
		return Err(eyre::eyre!("No researcher matches {slug_or_id:?}."));
	};

	render::researcher_profile(researcher, &catalog.collaborators_of(researcher));

	Ok(())
}

pub fn profile(command: ProfileCommand) -> color_eyre::Result<()> {
	let providers = local_providers();
	let Some(user) = providers.session.current_user() else {
		return Err(eyre::eyre!("Profile commands require a signed-in session."));
	};
	let mut profile = match providers.profiles.fetch(user.id)? {
		Some(profile) => profile,
		None => Profile::new(user.id, user.email.clone(), OffsetDateTime::now_utc()),
	};

	match command {
		ProfileCommand::Show => {
			render::profile(&profile);

			return Ok(());
		},
		ProfileCommand::Set(fields) => apply_fields(&mut profile, fields),
		ProfileCommand::AddTopic { topic } => {
			if !profile.add_topic(&topic) {
				println!("Topic {topic:?} was blank or already listed; nothing added.");
			}
		},
		ProfileCommand::RemoveTopic { topic } => profile.remove_topic(&topic),
		ProfileCommand::ToggleCommunity { community } => {
			if !AVAILABLE_COMMUNITIES.contains(&community.as_str()) {
				return Err(eyre::eyre!(
					"Unknown community {community:?}. Available: {}.",
					AVAILABLE_COMMUNITIES.join(", ")
				));
			}

			profile.toggle_community(&community);
		},
	}

	let stored = providers.profiles.upsert(profile)?;

	render::profile(&stored);

	Ok(())
}

/// Single-member setup backing the profile commands. The store lives for one
/// invocation; a deployment would hand in its own implementations.
fn local_providers() -> Providers {
	Providers::new(
		Arc::new(StaticSession::signed_in(Uuid::from_u128(1), "member@example.org")),
		Arc::new(MemoryProfileStore::new()),
	)
}

fn apply_fields(profile: &mut Profile, fields: ProfileSetArgs) {
	if let Some(value) = fields.full_name {
		profile.full_name = Some(value);
	}
	if let Some(value) = fields.display_name {
		profile.display_name = Some(value);
	}
	if let Some(value) = fields.avatar_url {
		profile.avatar_url = Some(value);
	}
	if let Some(value) = fields.bio {
		profile.bio = Some(value);
	}
	if let Some(value) = fields.full_bio {
		profile.full_bio = Some(value);
	}
	if let Some(value) = fields.affiliation {
		profile.affiliation = Some(value);
	}
	if let Some(value) = fields.position {
		profile.position = Some(value);
	}
	if let Some(value) = fields.location {
		profile.location = Some(value);
	}
	if let Some(value) = fields.website {
		profile.website = Some(value);
	}
	if let Some(value) = fields.twitter {
		profile.twitter = Some(value);
	}
	if let Some(value) = fields.github {
		profile.github = Some(value);
	}
	if let Some(value) = fields.linkedin {
		profile.linkedin = Some(value);
	}
	if let Some(value) = fields.google_scholar {
		profile.google_scholar = Some(value);
	}
	if let Some(value) = fields.orcid {
		profile.orcid = Some(value);
	}
	if let Some(value) = fields.public {
		profile.is_public = value;
	}
}

fn view_mode(flag: Option<&str>, configured: &str) -> ViewMode {
	match flag.unwrap_or(configured) {
		"list" => ViewMode::List,
		_ => ViewMode::Grid,
	}
}
