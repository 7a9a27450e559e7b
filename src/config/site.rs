//! Site configuration (_config.yml / _config.toml / _config.json)

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::query::NewsOrder;

/// Config file names probed in order
pub const CONFIG_FILES: [&str; 4] = ["_config.yml", "_config.yaml", "_config.toml", "_config.json"];

/// Accepts a stat value written as either a string ("150+") or a number (150)
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct StringOrNumber;

    impl<'de> Visitor<'de> for StringOrNumber {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a number")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(StringOrNumber)
}

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub pages_dir: String,
    pub static_dir: String,
    pub public_dir: String,

    // Date formats (Moment.js-style tokens)
    pub date_format: String,
    pub long_date_format: String,
    pub short_date_format: String,

    // Home page
    #[serde(default)]
    pub home: HomeConfig,
    pub news_order: NewsOrder,

    // Navigation (order preserved)
    pub menu: IndexMap<String, String>,

    // Organization
    #[serde(default)]
    pub announcement: AnnouncementConfig,
    #[serde(alias = "contactEmail")]
    pub contact_email: String,
    #[serde(alias = "contactLocation")]
    pub contact_location: String,
    #[serde(default, alias = "socialLinks")]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default, alias = "membershipInfo")]
    pub membership: MembershipConfig,
    #[serde(alias = "contactSubjects")]
    pub contact_subjects: IndexMap<String, String>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let menu = [
            ("Home", "/"),
            ("About", "/about/"),
            ("Events", "/events/"),
            ("Projects", "/projects/"),
            ("Team", "/team/"),
            ("Sponsors", "/sponsors/"),
            ("Contact", "/contact/"),
        ]
        .into_iter()
        .map(|(name, path)| (name.to_string(), path.to_string()))
        .collect();

        let contact_subjects = [
            ("general", "General Inquiry"),
            ("membership", "Membership Question"),
            ("events", "Events & Workshops"),
            ("projects", "Projects & Teams"),
            ("sponsorship", "Sponsorship"),
            ("other", "Other"),
        ]
        .into_iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();

        Self {
            title: "AIAA TMU".to_string(),
            subtitle: "Student Branch".to_string(),
            description: "Inspiring the next generation of aerospace professionals through hands-on projects, industry connections, and a passionate community.".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            content_dir: "content".to_string(),
            pages_dir: "content/pages".to_string(),
            static_dir: "static".to_string(),
            public_dir: "public".to_string(),

            date_format: "MMMM D, YYYY".to_string(),
            long_date_format: "dddd, MMMM D, YYYY".to_string(),
            short_date_format: "ddd, MMM D".to_string(),

            home: HomeConfig::default(),
            news_order: NewsOrder::default(),

            menu,

            announcement: AnnouncementConfig::default(),
            contact_email: "contact@example.com".to_string(),
            contact_location: String::new(),
            social_links: SocialLinks::default(),
            stats: StatsConfig::default(),
            membership: MembershipConfig::default(),
            contact_subjects,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file, choosing the parser by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;

        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => serde_yaml::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            _ => bail!("Unsupported config format: {:?}", path),
        };

        Ok(config)
    }

    /// Find the first config file present in `base_dir`
    pub fn locate<P: AsRef<Path>>(base_dir: P) -> Option<PathBuf> {
        CONFIG_FILES
            .iter()
            .map(|name| base_dir.as_ref().join(name))
            .find(|path| path.exists())
    }

    /// Load the config from `base_dir`, falling back to defaults
    pub fn load_from_dir<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        match Self::locate(&base_dir) {
            Some(path) => {
                tracing::debug!("Loading config from {:?}", path);
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }
}

/// Home page section limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    pub featured_events: usize,
    pub latest_news: usize,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            featured_events: 3,
            latest_news: 2,
        }
    }
}

/// Announcement banner shown above the navbar
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnouncementConfig {
    pub enabled: bool,
    pub message: String,
    pub link: Option<String>,
    #[serde(alias = "linkText")]
    pub link_text: String,
}

/// Social profile links
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub linkedin: String,
    pub instagram: String,
    pub twitter: String,
}

/// Headline numbers shown on the home and sponsors pages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    #[serde(deserialize_with = "string_or_number")]
    pub members: String,
    #[serde(alias = "eventsPerTerm", deserialize_with = "string_or_number")]
    pub events_per_term: String,
    #[serde(alias = "industryTalks", deserialize_with = "string_or_number")]
    pub industry_talks: String,
    #[serde(alias = "activeProjects", deserialize_with = "string_or_number")]
    pub active_projects: String,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            members: "0".to_string(),
            events_per_term: "0".to_string(),
            industry_talks: "0".to_string(),
            active_projects: "0".to_string(),
        }
    }
}

/// Membership fees and benefits for the join page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MembershipConfig {
    #[serde(alias = "studentBranchFee")]
    pub student_branch_fee: String,
    #[serde(alias = "aiaaNationalFee")]
    pub national_fee: String,
    pub benefits: Vec<String>,
}

impl Default for MembershipConfig {
    fn default() -> Self {
        Self {
            student_branch_fee: "Free".to_string(),
            national_fee: String::new(),
            benefits: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.home.featured_events, 3);
        assert_eq!(config.home.latest_news, 2);
        assert_eq!(config.news_order, NewsOrder::AsAuthored);
        assert_eq!(config.menu.get_index(0).map(|(k, _)| k.as_str()), Some("Home"));
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
title: Rocketry Club
contact_email: hello@rocketry.example
news_order: newest_first
home:
  featured_events: 4
stats:
  members: 150+
  events_per_term: 15
announcement:
  enabled: true
  message: Applications are open
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Rocketry Club");
        assert_eq!(config.contact_email, "hello@rocketry.example");
        assert_eq!(config.news_order, NewsOrder::NewestFirst);
        assert_eq!(config.home.featured_events, 4);
        assert_eq!(config.home.latest_news, 2);
        assert_eq!(config.stats.members, "150+");
        assert_eq!(config.stats.events_per_term, "15");
        assert!(config.announcement.enabled);
    }

    #[test]
    fn test_parse_camel_case_json_config() {
        let json = r#"{
            "contactEmail": "aiaa@example.edu",
            "socialLinks": { "linkedin": "https://linkedin.com/x" },
            "announcement": { "enabled": true, "message": "Hi", "link": "/join", "linkText": "Join" },
            "membershipInfo": { "studentBranchFee": "Free", "aiaaNationalFee": "$35/year", "benefits": ["Events"] }
        }"#;
        let config: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.contact_email, "aiaa@example.edu");
        assert_eq!(config.social_links.linkedin, "https://linkedin.com/x");
        assert_eq!(config.announcement.link_text, "Join");
        assert_eq!(config.membership.national_fee, "$35/year");
        assert_eq!(config.membership.benefits, vec!["Events".to_string()]);
    }

    #[test]
    fn test_load_toml_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.toml"),
            "title = \"Toml Club\"\npublic_dir = \"dist\"\n",
        )
        .unwrap();

        let config = SiteConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.title, "Toml Club");
        assert_eq!(config.public_dir, "dist");
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.title, SiteConfig::default().title);
    }
}
