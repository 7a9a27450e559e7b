//! List site content

use anyhow::Result;
use chrono::NaiveDate;

use crate::config::SiteConfig;
use crate::content::{Content, ContentLoader, ProjectStatus, SponsorTier};
use crate::helpers::format_date;
use crate::query::{self, CategoryFilter, StatusFilter};
use crate::Site;

/// What to list
#[derive(Debug, Clone)]
pub enum ListKind {
    Events {
        status: StatusFilter,
        category: CategoryFilter,
    },
    Featured,
    Projects {
        status: Option<ProjectStatus>,
    },
    Sponsors,
    Team,
    News {
        limit: Option<usize>,
    },
}

/// Print a listing of one collection
pub fn run(site: &Site, kind: &ListKind) -> Result<()> {
    let content = ContentLoader::new(site).load()?;
    print!("{}", render(&content, &site.config, kind));
    Ok(())
}

/// Format a listing as plain text, one record per line
pub fn render(content: &Content, config: &SiteConfig, kind: &ListKind) -> String {
    let date = |d: &NaiveDate| format_date(d, &config.date_format);
    let mut lines = Vec::new();

    match kind {
        ListKind::Events { status, category } => {
            let events = query::filter_events(&content.events, *status, category);
            lines.push(format!("Events ({}, {}): {}", status, category, events.len()));
            for event in events {
                lines.push(format!(
                    "  {} - {} [{}] ({})",
                    date(&event.date),
                    event.title,
                    event.category,
                    event.id
                ));
            }
        }
        ListKind::Featured => {
            let events = query::featured_upcoming(&content.events, config.home.featured_events);
            lines.push(format!("Featured events ({}):", events.len()));
            for event in events {
                lines.push(format!("  {} - {} ({})", date(&event.date), event.title, event.id));
            }
        }
        ListKind::Projects { status } => {
            let projects: Vec<_> = match status {
                Some(status) => query::projects_by_status(&content.projects, *status),
                None => content.projects.iter().collect(),
            };
            lines.push(format!("Projects ({}):", projects.len()));
            for project in projects {
                lines.push(format!(
                    "  {} [{}] {} open of {} ({})",
                    project.title, project.status, project.open_positions, project.team_size, project.id
                ));
            }
        }
        ListKind::Sponsors => {
            let groups = query::group_sponsors_by_tier(&content.sponsors, &SponsorTier::ORDER);
            lines.push(format!("Sponsors ({}):", content.sponsors.len()));
            for (tier, sponsors) in groups.iter().filter(|(_, s)| !s.is_empty()) {
                lines.push(format!("  {}:", tier));
                for sponsor in sponsors {
                    lines.push(format!("    {} ({})", sponsor.name, sponsor.id));
                }
            }
        }
        ListKind::Team => {
            lines.push(format!("Team ({}):", content.team.len()));
            for member in &content.team {
                lines.push(format!("  {} - {} ({})", member.name, member.role, member.id));
            }
        }
        ListKind::News { limit } => {
            let news = query::sorted_news(&content.news, config.news_order);
            let shown = limit.unwrap_or(news.len());
            lines.push(format!("News ({}):", news.len().min(shown)));
            for article in query::latest_news(&news, shown) {
                lines.push(format!("  {} - {} ({})", date(&article.date), article.title, article.id));
            }
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
