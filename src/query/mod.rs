//! Content queries - derive display subsets from the loaded collections
//!
//! Every function here is pure: it borrows an immutable collection and
//! returns references into it. Not-found and empty results are ordinary
//! outcomes, never errors.

use anyhow::{anyhow, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::content::{
    Event, EventCategory, EventStatus, NewsArticle, Project, ProjectStatus, Sponsor, SponsorTier,
};

/// A record addressable by a unique string id
pub trait Record {
    fn id(&self) -> &str;
}

/// Status filter on the events page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    All,
    #[default]
    Upcoming,
    Past,
}

impl StatusFilter {
    pub const OPTIONS: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Upcoming, StatusFilter::Past];

    pub fn matches(self, status: EventStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Upcoming => status == EventStatus::Upcoming,
            StatusFilter::Past => status == EventStatus::Past,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Upcoming => "Upcoming",
            StatusFilter::Past => "Past",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Upcoming => "upcoming",
            StatusFilter::Past => "past",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "upcoming" => Ok(StatusFilter::Upcoming),
            "past" => Ok(StatusFilter::Past),
            _ => Err(anyhow!("Unknown status filter: {}. Available: all, upcoming, past", s)),
        }
    }
}

/// Category filter on the events page
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(EventCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: &EventCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Preferred URL segment. Content-defined categories are prefixed with
    /// `c-` so they never take a built-in segment; empty if nothing usable
    /// remains after slugifying.
    pub fn slug(&self) -> String {
        match self {
            CategoryFilter::All => "all".to_string(),
            CategoryFilter::Only(category @ EventCategory::Other(_)) => match category.slug() {
                base if base.is_empty() => base,
                base => format!("c-{}", base),
            },
            CategoryFilter::Only(category) => category.slug(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = anyhow::Error;

    /// Built-in names match case-insensitively; anything else is taken as a
    /// content-defined category verbatim.
    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        let category = EventCategory::BUILT_IN
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .cloned()
            .unwrap_or_else(|| EventCategory::from(s));
        Ok(CategoryFilter::Only(category))
    }
}

/// A category filter together with the URL segment of its pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub filter: CategoryFilter,
    pub slug: String,
}

impl CategoryOption {
    pub fn label(&self) -> &str {
        self.filter.label()
    }

    pub fn matches(&self, category: &EventCategory) -> bool {
        self.filter.matches(category)
    }
}

impl From<CategoryFilter> for CategoryOption {
    fn from(filter: CategoryFilter) -> Self {
        let slug = filter.slug();
        Self { filter, slug }
    }
}

impl Default for CategoryOption {
    fn default() -> Self {
        CategoryFilter::All.into()
    }
}

/// A status + category combination. The default is the events page's
/// initial state: upcoming events of every category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventFilter {
    pub status: StatusFilter,
    pub category: CategoryOption,
}

impl EventFilter {
    pub fn new(status: StatusFilter, category: CategoryOption) -> Self {
        Self { status, category }
    }

    /// The filter that shows everything
    pub fn cleared() -> Self {
        Self::new(StatusFilter::All, CategoryOption::default())
    }

    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        filter_events(events, self.status, &self.category.filter)
    }

    /// Site path of the pre-rendered page for this combination
    pub fn path(&self) -> String {
        format!("events/filter/{}/{}/", self.status.slug(), self.category.slug)
    }
}

/// Order applied to news before taking the latest items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewsOrder {
    /// Trust the order of the content file
    #[default]
    AsAuthored,
    /// Sort by date, newest first (stable for equal dates)
    NewestFirst,
}

/// Events matching both filters, in input order
pub fn filter_events<'a>(
    events: &'a [Event],
    status: StatusFilter,
    category: &CategoryFilter,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| status.matches(e.status) && category.matches(&e.category))
        .collect()
}

/// First record whose id equals `id`
pub fn find_by_id<'a, T: Record>(collection: &'a [T], id: &str) -> Option<&'a T> {
    collection.iter().find(|record| record.id() == id)
}

/// Sponsors bucketed by tier in `tier_order`. Every listed tier gets an entry,
/// possibly empty; sponsors whose tier is not listed are dropped.
pub fn group_sponsors_by_tier<'a>(
    sponsors: &'a [Sponsor],
    tier_order: &[SponsorTier],
) -> IndexMap<SponsorTier, Vec<&'a Sponsor>> {
    let mut groups: IndexMap<SponsorTier, Vec<&'a Sponsor>> = tier_order
        .iter()
        .map(|tier| (tier.clone(), Vec::new()))
        .collect();

    for sponsor in sponsors {
        match groups.get_mut(&sponsor.tier) {
            Some(bucket) => bucket.push(sponsor),
            None => tracing::debug!(
                "Sponsor {} has unlisted tier {}, skipping",
                sponsor.id,
                sponsor.tier
            ),
        }
    }

    groups
}

/// Featured upcoming events, at most `limit`, in input order
pub fn featured_upcoming(events: &[Event], limit: usize) -> Vec<&Event> {
    events
        .iter()
        .filter(|e| e.featured && e.is_upcoming())
        .take(limit)
        .collect()
}

/// The first `limit` articles in the order supplied
pub fn latest_news(news: &[NewsArticle], limit: usize) -> Vec<&NewsArticle> {
    news.iter().take(limit).collect()
}

/// Articles arranged by `order`
pub fn sorted_news(news: &[NewsArticle], order: NewsOrder) -> Vec<NewsArticle> {
    let mut sorted = news.to_vec();
    if order == NewsOrder::NewestFirst {
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
    }
    sorted
}

/// Projects with the given status, in input order
pub fn projects_by_status(projects: &[Project], status: ProjectStatus) -> Vec<&Project> {
    projects.iter().filter(|p| p.status == status).collect()
}

/// Filter menu entries: All, the built-in categories, then any extra
/// categories found in content in first-seen order. Every option gets a
/// distinct slug; a taken slug gets a numeric suffix. Categories with no
/// usable slug are left out.
pub fn category_options(events: &[Event]) -> Vec<CategoryOption> {
    let mut filters = vec![CategoryFilter::All];
    filters.extend(EventCategory::BUILT_IN.iter().cloned().map(CategoryFilter::Only));

    for event in events {
        let filter = CategoryFilter::Only(event.category.clone());
        if !filters.contains(&filter) {
            filters.push(filter);
        }
    }

    let mut taken = HashSet::new();
    let mut options = Vec::with_capacity(filters.len());
    for filter in filters {
        let base = filter.slug();
        if base.is_empty() {
            tracing::warn!("Category {:?} has no usable URL segment, skipping its filter", filter.label());
            continue;
        }

        let mut slug = base.clone();
        let mut n = 2;
        while !taken.insert(slug.clone()) {
            slug = format!("{}-{}", base, n);
            n += 1;
        }
        options.push(CategoryOption { filter, slug });
    }

    options
}
