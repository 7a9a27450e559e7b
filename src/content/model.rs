//! Content records loaded from the content directory

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::query::Record;

/// Event category. Unknown names are kept as `Other` so new categories can
/// appear in content without a code change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventCategory {
    Talk,
    Workshop,
    Tour,
    Social,
    Other(String),
}

impl EventCategory {
    /// The categories every site offers as filters
    pub const BUILT_IN: [EventCategory; 4] = [
        EventCategory::Talk,
        EventCategory::Workshop,
        EventCategory::Tour,
        EventCategory::Social,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            EventCategory::Talk => "Talk",
            EventCategory::Workshop => "Workshop",
            EventCategory::Tour => "Tour",
            EventCategory::Social => "Social",
            EventCategory::Other(name) => name,
        }
    }

    /// URL segment used by the filter pages
    pub fn slug(&self) -> String {
        slug::slugify(self.as_str())
    }
}

impl From<String> for EventCategory {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Talk" => EventCategory::Talk,
            "Workshop" => EventCategory::Workshop,
            "Tour" => EventCategory::Tour,
            "Social" => EventCategory::Social,
            _ => EventCategory::Other(name),
        }
    }
}

impl From<&str> for EventCategory {
    fn from(name: &str) -> Self {
        EventCategory::from(name.to_string())
    }
}

impl From<EventCategory> for String {
    fn from(category: EventCategory) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Author-declared lifecycle state of an event. Never derived from the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Past,
}

/// A club event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    pub category: EventCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub speakers: Vec<String>,
    #[serde(default)]
    pub rsvp_link: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: EventStatus,
    #[serde(default)]
    pub featured: bool,
}

impl Event {
    pub fn is_upcoming(&self) -> bool {
        self.status == EventStatus::Upcoming
    }
}

/// Project team status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Active,
    Completed,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectStatus::Active => f.write_str("Active"),
            ProjectStatus::Completed => f.write_str("Completed"),
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(ProjectStatus::Active),
            "completed" => Ok(ProjectStatus::Completed),
            _ => Err(anyhow::anyhow!("Unknown project status: {}. Available: active, completed", s)),
        }
    }
}

/// A student project team
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub team_size: u32,
    #[serde(default)]
    pub open_positions: u32,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Sponsorship level. Ordering of prominence is Title > Gold > Silver > Bronze.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SponsorTier {
    Title,
    Gold,
    Silver,
    Bronze,
    Other(String),
}

impl SponsorTier {
    /// Display order of the sponsors page
    pub const ORDER: [SponsorTier; 4] = [
        SponsorTier::Title,
        SponsorTier::Gold,
        SponsorTier::Silver,
        SponsorTier::Bronze,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            SponsorTier::Title => "Title",
            SponsorTier::Gold => "Gold",
            SponsorTier::Silver => "Silver",
            SponsorTier::Bronze => "Bronze",
            SponsorTier::Other(name) => name,
        }
    }
}

impl From<String> for SponsorTier {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Title" => SponsorTier::Title,
            "Gold" => SponsorTier::Gold,
            "Silver" => SponsorTier::Silver,
            "Bronze" => SponsorTier::Bronze,
            _ => SponsorTier::Other(name),
        }
    }
}

impl From<SponsorTier> for String {
    fn from(tier: SponsorTier) -> Self {
        tier.as_str().to_string()
    }
}

impl fmt::Display for SponsorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sponsoring organization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sponsor {
    pub id: String,
    pub name: String,
    pub tier: SponsorTier,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub website: String,
}

/// An executive team member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub program: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A news article or announcement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl NewsArticle {
    /// Paragraphs of the body, split on blank lines
    pub fn paragraphs(&self) -> Vec<&str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// The authored excerpt, or the first paragraph
    pub fn summary(&self) -> &str {
        match self.excerpt.as_deref() {
            Some(excerpt) if !excerpt.trim().is_empty() => excerpt,
            _ => self.paragraphs().first().copied().unwrap_or(""),
        }
    }
}

/// A frequently asked question on the join page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// An open volunteer or executive role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRole {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub commitment: String,
}

/// A sponsorship package offered to companies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SponsorshipPackage {
    pub tier: SponsorTier,
    pub price: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub highlighted: bool,
}

impl Record for Event {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Sponsor {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for TeamMember {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for NewsArticle {
    fn id(&self) -> &str {
        &self.id
    }
}
