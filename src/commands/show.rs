//! Show a single record by id

use anyhow::Result;
use std::fmt;

use crate::config::SiteConfig;
use crate::content::{Content, ContentLoader};
use crate::helpers::format_date;
use crate::query::find_by_id;
use crate::Site;

/// Collection a record is looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowKind {
    Event,
    Project,
    Sponsor,
    Member,
    News,
}

impl fmt::Display for ShowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShowKind::Event => "event",
            ShowKind::Project => "project",
            ShowKind::Sponsor => "sponsor",
            ShowKind::Member => "team member",
            ShowKind::News => "news article",
        };
        f.write_str(name)
    }
}

/// Print one record, or a not-found line
pub fn run(site: &Site, kind: ShowKind, id: &str) -> Result<()> {
    let content = ContentLoader::new(site).load()?;
    print!("{}", render(&content, &site.config, kind, id));
    Ok(())
}

/// Format the record with `id`. A missing record is reported, not an error.
pub fn render(content: &Content, config: &SiteConfig, kind: ShowKind, id: &str) -> String {
    let lines = match kind {
        ShowKind::Event => find_by_id(&content.events, id).map(|event| {
            let mut lines = vec![
                event.title.clone(),
                format!("  Date:     {}", format_date(&event.date, &config.long_date_format)),
                format!("  Time:     {}", event.time),
                format!("  Location: {}", event.location),
                format!("  Category: {}", event.category),
                format!("  Status:   {:?}", event.status),
            ];
            if !event.speakers.is_empty() {
                lines.push(format!("  Speakers: {}", event.speakers.join(", ")));
            }
            if let Some(link) = event.rsvp_link.as_deref().filter(|l| !l.trim().is_empty()) {
                lines.push(format!("  RSVP:     {}", link));
            }
            if !event.tags.is_empty() {
                lines.push(format!("  Tags:     {}", event.tags.join(", ")));
            }
            lines.push(String::new());
            lines.push(event.description.clone());
            lines
        }),
        ShowKind::Project => find_by_id(&content.projects, id).map(|project| {
            vec![
                project.title.clone(),
                format!("  Status:    {}", project.status),
                format!("  Timeline:  {}", project.timeline),
                format!("  Team size: {}", project.team_size),
                format!("  Open:      {}", project.open_positions),
                format!("  Skills:    {}", project.skills.join(", ")),
                String::new(),
                project.description.clone(),
                format!("Objective: {}", project.objective),
            ]
        }),
        ShowKind::Sponsor => find_by_id(&content.sponsors, id).map(|sponsor| {
            vec![
                sponsor.name.clone(),
                format!("  Tier:    {}", sponsor.tier),
                format!("  Website: {}", sponsor.website),
            ]
        }),
        ShowKind::Member => find_by_id(&content.team, id).map(|member| {
            let mut lines = vec![
                member.name.clone(),
                format!("  Role:    {}", member.role),
                format!("  Program: {}", member.program),
            ];
            if let Some(linkedin) = &member.linkedin {
                lines.push(format!("  LinkedIn: {}", linkedin));
            }
            lines.push(String::new());
            lines.push(member.bio.clone());
            lines
        }),
        ShowKind::News => find_by_id(&content.news, id).map(|article| {
            let mut lines = vec![
                article.title.clone(),
                format!("  Date:   {}", format_date(&article.date, &config.date_format)),
                format!("  Author: {}", article.author),
                String::new(),
            ];
            lines.extend(article.paragraphs().into_iter().map(str::to_string));
            lines
        }),
    };

    let mut out = lines
        .unwrap_or_else(|| vec![format!("No {} found with id {}", kind, id)])
        .join("\n");
    out.push('\n');
    out
}
