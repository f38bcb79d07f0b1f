use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
	pub app: App,
	pub directory: Directory,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
	pub log_level: String,
	pub default_view: String,
}
impl Default for App {
	fn default() -> Self {
		Self { log_level: "info".to_string(), default_view: "grid".to_string() }
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Directory {
	pub researchers_page_size: usize,
	pub papers_page_size: usize,
	pub projects_page_size: usize,
	pub broad_search_default: bool,
}
impl Default for Directory {
	fn default() -> Self {
		Self {
			researchers_page_size: 9,
			papers_page_size: 10,
			projects_page_size: 9,
			broad_search_default: true,
		}
	}
}
