//! Content loader - reads collections and markdown pages from the content directory

use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{
    ContentError, Event, FaqItem, FrontMatter, MarkdownRenderer, NewsArticle, OpenRole, Project,
    Sponsor, SponsorshipPackage, TeamMember,
};
use crate::query::Record;
use crate::Site;

/// Extensions probed for each collection, in order
pub const COLLECTION_EXTENSIONS: [&str; 4] = ["json", "yml", "yaml", "toml"];

/// Page stems that would shadow a generated route
pub const RESERVED_PAGES: [&str; 10] = [
    "index", "events", "projects", "team", "sponsors", "contact", "news", "join", "css", "404",
];

lazy_static! {
    static ref URL_SAFE_ID: Regex = Regex::new(r"^[a-z0-9][a-z0-9_-]*$").unwrap();
}

/// Event ids that would collide with other routes under `/events/`
pub const RESERVED_EVENT_IDS: [&str; 2] = ["filter", "not-found"];

/// True if `id` can be used as a single URL path segment
pub fn is_url_safe_id(id: &str) -> bool {
    URL_SAFE_ID.is_match(id)
}

/// True if an event with this id gets its own `/events/<id>/` page
pub fn is_event_page_id(id: &str) -> bool {
    is_url_safe_id(id) && !RESERVED_EVENT_IDS.contains(&id)
}

/// A markdown page published at `/<slug>/`
#[derive(Debug, Clone)]
pub struct MarkdownPage {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    /// Rendered HTML body
    pub content: String,
    pub source: PathBuf,
}

/// Every collection the site renders. Immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct Content {
    pub events: Vec<Event>,
    pub projects: Vec<Project>,
    pub sponsors: Vec<Sponsor>,
    pub team: Vec<TeamMember>,
    pub news: Vec<NewsArticle>,
    pub faq: Vec<FaqItem>,
    pub roles: Vec<OpenRole>,
    pub packages: Vec<SponsorshipPackage>,
    pub pages: Vec<MarkdownPage>,
}

/// Loads content from the content directory
pub struct ContentLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load all collections and pages
    pub fn load(&self) -> Result<Content, ContentError> {
        let content = Content {
            events: self.load_records("events")?,
            projects: self.load_records("projects")?,
            sponsors: self.load_records("sponsors")?,
            team: self.load_records("team")?,
            news: self.load_records("news")?,
            faq: self.load_collection("faq", false)?,
            roles: self.load_collection("roles", false)?,
            packages: self.load_collection("packages", false)?,
            pages: self.load_pages(),
        };

        tracing::debug!(
            "Loaded {} events, {} projects, {} sponsors, {} team members, {} news articles, {} pages",
            content.events.len(),
            content.projects.len(),
            content.sponsors.len(),
            content.team.len(),
            content.news.len(),
            content.pages.len()
        );

        Ok(content)
    }

    /// Load a required collection and check its ids
    fn load_records<T: DeserializeOwned + Record>(&self, name: &str) -> Result<Vec<T>, ContentError> {
        let records: Vec<T> = self.load_collection(name, true)?;
        check_ids(name, &records);
        Ok(records)
    }

    /// Load `<content_dir>/<name>.<ext>`; the first existing extension wins
    fn load_collection<T: DeserializeOwned>(
        &self,
        name: &str,
        required: bool,
    ) -> Result<Vec<T>, ContentError> {
        match self.locate_collection(name) {
            Some(path) => read_collection(&path),
            None => {
                if required {
                    tracing::warn!(
                        "No {} collection found in {:?}, using an empty list",
                        name,
                        self.site.content_dir
                    );
                }
                Ok(Vec::new())
            }
        }
    }

    fn locate_collection(&self, name: &str) -> Option<PathBuf> {
        COLLECTION_EXTENSIONS
            .iter()
            .map(|ext| self.site.content_dir.join(format!("{}.{}", name, ext)))
            .find(|path| path.is_file())
    }

    /// Load all markdown pages from the pages directory
    pub fn load_pages(&self) -> Vec<MarkdownPage> {
        let pages_dir = &self.site.pages_dir;
        if !pages_dir.exists() {
            return Vec::new();
        }

        let mut pages = Vec::new();
        let mut seen = HashSet::new();

        for entry in WalkDir::new(pages_dir)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }

            let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if !is_url_safe_id(slug) {
                tracing::warn!("Skipping page {:?}: name is not URL-safe", path);
                continue;
            }
            if RESERVED_PAGES.contains(&slug) {
                tracing::warn!("Skipping page {:?}: /{}/ is a built-in route", path, slug);
                continue;
            }
            if !seen.insert(slug.to_string()) {
                continue;
            }

            match self.load_page(path, slug) {
                Ok(Some(page)) => pages.push(page),
                Ok(None) => tracing::debug!("Skipping unpublished page {:?}", path),
                Err(e) => tracing::warn!("Failed to load page {:?}: {}", path, e),
            }
        }

        pages
    }

    fn load_page(&self, path: &Path, slug: &str) -> Result<Option<MarkdownPage>, ContentError> {
        let raw = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let (fm, body) = FrontMatter::parse(&raw).map_err(|e| ContentError::parse(path, e))?;
        if !fm.published {
            return Ok(None);
        }

        Ok(Some(MarkdownPage {
            slug: slug.to_string(),
            title: fm.title.unwrap_or_else(|| title_from_slug(slug)),
            description: fm.description,
            content: self.renderer.render(body),
            source: path.to_path_buf(),
        }))
    }
}

/// Parse one collection file according to its extension
fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ContentError> {
    let raw = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&raw).map_err(|e| ContentError::parse(path, e)),
        Some("yml") | Some("yaml") => {
            serde_yaml::from_str(&raw).map_err(|e| ContentError::parse(path, e))
        }
        Some("toml") => read_toml_collection(path, &raw),
        _ => Err(ContentError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// TOML has no top-level arrays; records live in `[[items]]` tables
fn read_toml_collection<T: DeserializeOwned>(path: &Path, raw: &str) -> Result<Vec<T>, ContentError> {
    #[derive(serde::Deserialize)]
    #[serde(bound = "T: DeserializeOwned")]
    struct Items<T> {
        #[serde(default = "Vec::new")]
        items: Vec<T>,
    }

    toml::from_str::<Items<T>>(raw)
        .map(|doc| doc.items)
        .map_err(|e| ContentError::parse(path, e))
}

/// Warn about duplicate and non-URL-safe ids
fn check_ids<T: Record>(collection: &str, records: &[T]) {
    let mut seen = HashSet::new();
    for record in records {
        let id = record.id();
        if !seen.insert(id) {
            tracing::warn!("Duplicate id {:?} in {}; the first record wins", id, collection);
        }
        if !is_url_safe_id(id) {
            tracing::warn!("Id {:?} in {} is not URL-safe", id, collection);
        }
    }
}

fn title_from_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{EventCategory, SponsorTier};
    use tempfile::TempDir;

    fn site_with(files: &[(&str, &str)]) -> (TempDir, Site) {
        let tmp = TempDir::new().unwrap();
        for (name, body) in files {
            let path = tmp.path().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, body).unwrap();
        }
        let site = Site::new(tmp.path()).unwrap();
        (tmp, site)
    }

    #[test]
    fn test_load_json_collections() {
        let (_tmp, site) = site_with(&[
            (
                "content/events.json",
                r#"[{"id":"e1","title":"Talk","date":"2025-03-01","category":"Talk","status":"upcoming"},
                    {"id":"e2","title":"Hack","date":"2025-03-02","category":"Hackathon","status":"past"}]"#,
            ),
            (
                "content/sponsors.json",
                r#"[{"id":"s1","name":"Acme","tier":"Gold","website":"https://acme.example"}]"#,
            ),
        ]);

        let content = ContentLoader::new(&site).load().unwrap();
        assert_eq!(content.events.len(), 2);
        assert_eq!(content.events[1].category, EventCategory::Other("Hackathon".into()));
        assert_eq!(content.sponsors[0].tier, SponsorTier::Gold);
        assert!(content.projects.is_empty());
        assert!(content.faq.is_empty());
    }

    #[test]
    fn test_load_yaml_and_toml_collections() {
        let (_tmp, site) = site_with(&[
            (
                "content/team.yml",
                "- id: alex\n  name: Alex Chen\n  role: President\n",
            ),
            (
                "content/faq.toml",
                "[[items]]\nquestion = \"Who can join?\"\nanswer = \"Anyone.\"\n",
            ),
        ]);

        let content = ContentLoader::new(&site).load().unwrap();
        assert_eq!(content.team[0].name, "Alex Chen");
        assert_eq!(content.faq[0].question, "Who can join?");
    }

    #[test]
    fn test_json_wins_over_yaml() {
        let (_tmp, site) = site_with(&[
            ("content/team.json", r#"[{"id":"from-json","name":"J"}]"#),
            ("content/team.yml", "- id: from-yaml\n  name: Y\n"),
        ]);

        let content = ContentLoader::new(&site).load().unwrap();
        assert_eq!(content.team.len(), 1);
        assert_eq!(content.team[0].id, "from-json");
    }

    #[test]
    fn test_broken_collection_is_error() {
        let (_tmp, site) = site_with(&[("content/events.json", "[{\"id\": ")]);
        let err = ContentLoader::new(&site).load().unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let (_tmp, site) = site_with(&[(
            "content/team.json",
            r#"[{"id":"a","name":"First"},{"id":"a","name":"Second"}]"#,
        )]);

        let content = ContentLoader::new(&site).load().unwrap();
        assert_eq!(content.team.len(), 2);
        assert_eq!(crate::query::find_by_id(&content.team, "a").unwrap().name, "First");
    }

    #[test]
    fn test_load_pages() {
        let (_tmp, site) = site_with(&[
            ("content/pages/about.md", "---\ntitle: About Us\n---\n\n# Mission\n"),
            ("content/pages/code-of-conduct.md", "Be kind."),
            ("content/pages/events.md", "Shadows the events page."),
            ("content/pages/draft.md", "---\ntitle: Draft\npublished: false\n---\nHidden"),
            ("content/pages/Bad Name.md", "Nope"),
        ]);

        let pages = ContentLoader::new(&site).load_pages();
        let slugs: Vec<&str> = pages.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["about", "code-of-conduct"]);
        assert_eq!(pages[0].title, "About Us");
        assert!(pages[0].content.contains("<h1>Mission</h1>"));
        assert_eq!(pages[1].title, "Code Of Conduct");
    }

    #[test]
    fn test_url_safe_ids() {
        assert!(is_url_safe_id("uav-design"));
        assert!(is_url_safe_id("2025_gala"));
        assert!(!is_url_safe_id("../etc"));
        assert!(!is_url_safe_id("Rocket"));
        assert!(!is_url_safe_id(""));
        assert!(!is_url_safe_id("-leading"));
    }

    #[test]
    fn test_event_page_ids() {
        assert!(is_event_page_id("rocket-talk"));
        assert!(!is_event_page_id("filter"));
        assert!(!is_event_page_id("not-found"));
        assert!(!is_event_page_id("../x"));
    }
}
