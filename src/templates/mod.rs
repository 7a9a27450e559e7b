//! Built-in site templates using the Tera template engine
//!
//! All templates are embedded directly in the binary. Autoescaping is off,
//! so templates apply `| html_escape` to every piece of free text.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

use crate::config::{AnnouncementConfig, MembershipConfig, SiteConfig, SocialLinks, StatsConfig};
use crate::content::loader::RESERVED_PAGES;
use crate::content::{
    is_event_page_id, Event, EventCategory, MarkdownPage, NewsArticle, Project, Sponsor,
    SponsorTier, TeamMember,
};
use crate::helpers::Helpers;

/// The embedded stylesheet, written to `css/style.css`
pub const STYLESHEET: &str = include_str!("site/style.css");

/// Which event card template to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    /// Large card with image band, used on the home page
    Featured,
    /// Single-row card, used in sidebars
    Compact,
}

impl CardVariant {
    pub fn template(self) -> &'static str {
        match self {
            CardVariant::Default => "cards/event_default.html",
            CardVariant::Featured => "cards/event_featured.html",
            CardVariant::Compact => "cards/event_compact.html",
        }
    }
}

/// Badge style for an event category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Default,
}

impl BadgeVariant {
    pub fn for_category(category: &EventCategory) -> Self {
        match category {
            EventCategory::Talk => BadgeVariant::Primary,
            EventCategory::Workshop => BadgeVariant::Success,
            EventCategory::Tour => BadgeVariant::Warning,
            _ => BadgeVariant::Default,
        }
    }
}

/// Template renderer with the embedded site templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded and helpers bound to `config`
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let mut tera = Tera::default();

        // Generating HTML by hand; templates escape free text explicitly
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("partials/navbar.html", include_str!("site/partials/navbar.html")),
            ("partials/footer.html", include_str!("site/partials/footer.html")),
            (
                "partials/page_header.html",
                include_str!("site/partials/page_header.html"),
            ),
            (
                "cards/event_default.html",
                include_str!("site/cards/event_default.html"),
            ),
            (
                "cards/event_featured.html",
                include_str!("site/cards/event_featured.html"),
            ),
            (
                "cards/event_compact.html",
                include_str!("site/cards/event_compact.html"),
            ),
            ("cards/project.html", include_str!("site/cards/project.html")),
            ("cards/team.html", include_str!("site/cards/team.html")),
            ("cards/news.html", include_str!("site/cards/news.html")),
            ("home.html", include_str!("site/home.html")),
            ("events.html", include_str!("site/events.html")),
            ("event_detail.html", include_str!("site/event_detail.html")),
            ("event_not_found.html", include_str!("site/event_not_found.html")),
            ("projects.html", include_str!("site/projects.html")),
            ("team.html", include_str!("site/team.html")),
            ("sponsors.html", include_str!("site/sponsors.html")),
            ("contact.html", include_str!("site/contact.html")),
            ("news.html", include_str!("site/news.html")),
            ("join.html", include_str!("site/join.html")),
            ("page.html", include_str!("site/page.html")),
            ("404.html", include_str!("site/404.html")),
        ])?;

        Helpers::new(config.clone()).register(&mut tera);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render one event card per event with the given variant
    pub fn event_cards(&self, events: &[EventData], variant: CardVariant) -> Result<Vec<String>> {
        events
            .iter()
            .map(|event| self.render_card(variant.template(), "event", event))
            .collect()
    }

    pub fn project_cards(&self, projects: &[ProjectData]) -> Result<Vec<String>> {
        projects
            .iter()
            .map(|project| self.render_card("cards/project.html", "project", project))
            .collect()
    }

    pub fn team_cards(&self, members: &[TeamMember]) -> Result<Vec<String>> {
        members
            .iter()
            .map(|member| self.render_card("cards/team.html", "member", member))
            .collect()
    }

    pub fn news_cards(&self, articles: &[NewsData]) -> Result<Vec<String>> {
        articles
            .iter()
            .map(|article| self.render_card("cards/news.html", "article", article))
            .collect()
    }

    fn render_card<T: Serialize>(&self, template: &str, key: &str, value: &T) -> Result<String> {
        let mut context = Context::new();
        context.insert(key, value);
        self.render(template, &context)
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub url: String,
    pub contact_email: String,
    pub contact_location: String,
    pub social_links: SocialLinks,
    pub announcement: AnnouncementConfig,
    pub stats: StatsConfig,
    pub membership: MembershipConfig,
    pub contact_subjects: Vec<SubjectOption>,
    pub year: String,
}

impl SiteData {
    pub fn new(config: &SiteConfig, year: String) -> Self {
        Self {
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            description: config.description.clone(),
            url: config.url.clone(),
            contact_email: config.contact_email.clone(),
            contact_location: config.contact_location.clone(),
            social_links: config.social_links.clone(),
            announcement: config.announcement.clone(),
            stats: config.stats.clone(),
            membership: config.membership.clone(),
            contact_subjects: config
                .contact_subjects
                .iter()
                .map(|(value, label)| SubjectOption {
                    value: value.clone(),
                    label: label.clone(),
                })
                .collect(),
            year,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubjectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub name: String,
    pub path: String,
    pub active: bool,
}

/// Navigation menu with the entry for `current_path` marked active
/// Navbar entries, leaving out links to pages that are not generated
pub fn menu_items(config: &SiteConfig, current_path: &str, page_slugs: &[String]) -> Vec<MenuItem> {
    config
        .menu
        .iter()
        .filter(|(_, path)| menu_target_exists(path, page_slugs))
        .map(|(name, path)| {
            let active = if path == "/" {
                current_path == "/"
            } else {
                current_path.starts_with(path.as_str())
            };
            MenuItem {
                name: name.clone(),
                path: path.clone(),
                active,
            }
        })
        .collect()
}

/// False only for a `/<name>/` link that is neither a built-in route nor a
/// loaded markdown page
pub fn menu_target_exists(path: &str, page_slugs: &[String]) -> bool {
    if !path.starts_with('/') {
        return true;
    }
    let target = path.split(['#', '?']).next().unwrap_or("").trim_matches('/');
    if target.is_empty() || target.contains('/') {
        return true;
    }
    RESERVED_PAGES.contains(&target) || page_slugs.iter().any(|slug| slug == target)
}

/// A link in a filter bar
#[derive(Debug, Clone, Serialize)]
pub struct FilterLink {
    pub label: String,
    pub path: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventData {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category: String,
    pub badge: BadgeVariant,
    pub description: String,
    pub speakers: Vec<String>,
    pub rsvp_link: Option<String>,
    pub tags: Vec<String>,
    pub is_upcoming: bool,
    pub featured: bool,
    pub path: String,
}

impl From<&Event> for EventData {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            date: event.date.format("%Y-%m-%d").to_string(),
            time: event.time.clone(),
            location: event.location.clone(),
            category: event.category.to_string(),
            badge: BadgeVariant::for_category(&event.category),
            description: event.description.clone(),
            speakers: event.speakers.clone(),
            rsvp_link: event.rsvp_link.clone().filter(|link| !link.trim().is_empty()),
            tags: event.tags.clone(),
            is_upcoming: event.is_upcoming(),
            featured: event.featured,
            path: if is_event_page_id(&event.id) {
                format!("/events/{}/", event.id)
            } else {
                "/events/not-found/".to_string()
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectData {
    pub id: String,
    pub title: String,
    pub status: String,
    pub description: String,
    pub objective: String,
    pub skills: Vec<String>,
    pub team_size: u32,
    pub open_positions: u32,
    pub timeline: String,
    pub image: Option<String>,
    pub path: String,
}

impl From<&Project> for ProjectData {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            status: project.status.to_string(),
            description: project.description.clone(),
            objective: project.objective.clone(),
            skills: project.skills.clone(),
            team_size: project.team_size,
            open_positions: project.open_positions,
            timeline: project.timeline.clone(),
            image: project.image.clone(),
            path: format!("/projects/#{}", project.id),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsData {
    pub id: String,
    pub title: String,
    pub date: String,
    pub summary: String,
    pub paragraphs: Vec<String>,
    pub author: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub path: String,
}

impl From<&NewsArticle> for NewsData {
    fn from(article: &NewsArticle) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            date: article.date.format("%Y-%m-%d").to_string(),
            summary: article.summary().to_string(),
            paragraphs: article.paragraphs().into_iter().map(String::from).collect(),
            author: article.author.clone(),
            tags: article.tags.clone(),
            featured: article.featured,
            path: format!("/news/#{}", article.id),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TierData<'a> {
    pub tier: String,
    pub slug: String,
    pub sponsors: Vec<&'a Sponsor>,
}

impl<'a> TierData<'a> {
    pub fn new(tier: &SponsorTier, sponsors: Vec<&'a Sponsor>) -> Self {
        Self {
            tier: tier.to_string(),
            slug: tier.as_str().to_ascii_lowercase(),
            sponsors,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageData {
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    pub path: String,
}

impl From<&MarkdownPage> for PageData {
    fn from(page: &MarkdownPage) -> Self {
        Self {
            title: page.title.clone(),
            description: page.description.clone(),
            content: page.content.clone(),
            path: format!("/{}/", page.slug),
        }
    }
}
