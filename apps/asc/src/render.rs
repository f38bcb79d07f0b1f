//! Plain-text output for directory pages and profiles. Grid view prints
//! cards, list view prints one row per entry.

use asc_directory::{ActiveFilter, BrowsePage, ViewMode};
use asc_domain::{Catalog, Paper, PersonRef, Profile, Project, Researcher, SUGGESTED_TOPICS, labels};

pub fn active_filters(filters: &[ActiveFilter]) {
	if filters.is_empty() {
		return;
	}

	let chips: Vec<String> =
		filters.iter().map(|filter| format!("{}: {}", filter.criterion, filter.value)).collect();

	println!("Filters: {}", chips.join(" | "));
	println!();
}

pub fn footer(current_page: usize, total_pages: usize, total_count: usize) {
	println!("Page {current_page} of {total_pages} ({total_count} results)");
}

pub fn researchers(page: &BrowsePage<'_, Researcher>, view: ViewMode) {
	if page.items.is_empty() {
		println!("No researchers match the current filters.");

		return;
	}

	for researcher in &page.items {
		match view {
			ViewMode::Grid => {
				println!("{} [{}]", researcher.name, researcher.slug);
				println!("  {}", researcher.affiliation);
				println!("  Communities: {}", community_labels(researcher).join(", "));
				println!("  Topics: {}", researcher.topics.join(", "));
				println!(
					"  {} papers, {} posts, h-index {}",
					researcher.papers, researcher.posts, researcher.h_index
				);
				println!("  {}", researcher.bio);
				println!();
			},
			ViewMode::List => println!(
				"{:<24} {:<28} {:>3} papers  {:>3} posts  h-index {}",
				researcher.slug,
				researcher.name,
				researcher.papers,
				researcher.posts,
				researcher.h_index,
			),
		}
	}
}

pub fn papers(catalog: &Catalog, page: &BrowsePage<'_, Paper>, view: ViewMode) {
	if page.items.is_empty() {
		println!("No papers match the current filters.");

		return;
	}

	for paper in &page.items {
		let source = labels::PAPER_SOURCES.get(paper.source.key()).label;

		match view {
			ViewMode::Grid => {
				println!("{} ({source}, {})", paper.title, paper.year);
				println!("  {}", person_list(catalog, &paper.authors));
				println!("  {} | Topics: {}", paper.venue, paper.topics.join(", "));

				match paper.karma {
					Some(karma) => println!(
						"  {} citations, {karma} karma, {} comments",
						paper.citations,
						paper.comments.unwrap_or(0),
					),
					None => println!("  {} citations", paper.citations),
				}

				println!();
			},
			ViewMode::List => println!(
				"{:>4}  {:<52} {:<9} {}  {} citations",
				paper.id, paper.title, source, paper.year, paper.citations
			),
		}
	}
}

pub fn projects(catalog: &Catalog, page: &BrowsePage<'_, Project>, view: ViewMode) {
	if page.items.is_empty() {
		println!("No projects match the current filters.");

		return;
	}

	for project in &page.items {
		let status = labels::PROJECT_STATUSES.get(project.status.key()).label;
		let source = labels::PROJECT_SOURCES.get(project.source.key()).label;

		match view {
			ViewMode::Grid => {
				let timeline = match project.end_date {
					Some(end_date) => format!("{} to {end_date}", project.start_date),
					None => format!("since {}", project.start_date),
				};

				println!("{} [{status}]", project.title);
				println!("  {source}, {timeline}");
				println!("  Leads: {}", person_list(catalog, &project.leads));

				if !project.organizations.is_empty() {
					println!("  Organizations: {}", project.organizations.join(", "));
				}

				println!("  Topics: {}", project.topics.join(", "));
				println!("  {}", project.description);
				println!();
			},
			ViewMode::List => println!(
				"{:<32} {:<22} {:<12} {}",
				project.slug, status, source, project.start_date
			),
		}
	}
}

pub fn researcher_profile(researcher: &Researcher, collaborators: &[&Researcher]) {
	println!("{} [{}]", researcher.name, researcher.slug);
	println!("{}", researcher.affiliation);
	println!("Communities: {}", community_labels(researcher).join(", "));
	println!("Topics: {}", researcher.topics.join(", "));
	println!(
		"{} papers, {} posts, h-index {}",
		researcher.papers, researcher.posts, researcher.h_index
	);
	println!();
	println!("{}", researcher.display_bio());

	if let Some(website) = &researcher.website {
		println!("Website: {website}");
	}
	if let Some(twitter) = &researcher.twitter {
		println!("Twitter: {twitter}");
	}
	if let Some(google_scholar) = &researcher.google_scholar {
		println!("Google Scholar: {google_scholar}");
	}

	if !researcher.publications.is_empty() {
		println!();
		println!("Selected publications:");

		for publication in &researcher.publications {
			println!(
				"  {} ({}, {}), {} citations",
				publication.title, publication.venue, publication.year, publication.citations
			);
		}
	}

	if !researcher.recent_posts.is_empty() {
		println!();
		println!("Recent posts:");

		for post in &researcher.recent_posts {
			println!(
				"  {} ({}, {}), {} karma",
				post.title,
				labels::COMMUNITIES.get(post.platform.key()).label,
				post.date,
				post.karma,
			);
		}
	}

	if !collaborators.is_empty() {
		let names: Vec<&str> =
			collaborators.iter().map(|collaborator| collaborator.name.as_str()).collect();

		println!();
		println!("Frequent collaborators: {}", names.join(", "));
	}
}

pub fn profile(profile: &Profile) {
	let display = profile
		.display_name
		.as_deref()
		.or(profile.full_name.as_deref())
		.unwrap_or("(unnamed member)");

	println!("{display}");

	if let Some(email) = &profile.email {
		println!("Email: {email}");
	}
	if let Some(affiliation) = &profile.affiliation {
		println!("Affiliation: {affiliation}");
	}
	if let Some(position) = &profile.position {
		println!("Position: {position}");
	}
	if let Some(location) = &profile.location {
		println!("Location: {location}");
	}
	if let Some(bio) = &profile.bio {
		println!("Bio: {bio}");
	}

	if !profile.communities.is_empty() {
		println!("Communities: {}", profile.communities.join(", "));
	}
	if profile.research_topics.is_empty() {
		println!("Suggested topics: {}", SUGGESTED_TOPICS.join(", "));
	} else {
		println!("Research topics: {}", profile.research_topics.join(", "));
	}

	for (label, value) in [
		("Website", &profile.website),
		("Twitter", &profile.twitter),
		("GitHub", &profile.github),
		("LinkedIn", &profile.linkedin),
		("Google Scholar", &profile.google_scholar),
		("ORCID", &profile.orcid),
	] {
		if let Some(value) = value {
			println!("{label}: {value}");
		}
	}

	println!("Public: {}", if profile.is_public { "yes" } else { "no" });

	match profile.missing_core_fields().as_slice() {
		[] => println!("Profile is complete."),
		missing => println!("Still missing: {}.", missing.join(", ")),
	}
}

fn community_labels(researcher: &Researcher) -> Vec<&'static str> {
	researcher
		.communities
		.iter()
		.map(|community| labels::COMMUNITIES.get(community.key()).label)
		.collect()
}

/// Names joined with commas; people whose slug resolves into the catalog
/// carry the slug in brackets so the reader can follow up with `show`.
fn person_list(catalog: &Catalog, people: &[PersonRef]) -> String {
	let names: Vec<String> = people
		.iter()
		.map(|person| match catalog.resolve_person(person) {
			Some(researcher) => format!("{} [{}]", person.name, researcher.slug),
			None => person.name.clone(),
		})
		.collect();

	names.join(", ")
}
