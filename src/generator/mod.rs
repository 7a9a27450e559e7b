//! Generator module - renders every route of the site into the public directory

use anyhow::{bail, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use tera::Context;
use walkdir::WalkDir;

use crate::content::{is_event_page_id, Content, ProjectStatus, SponsorTier};
use crate::helpers::{date_xml, feed_tag, full_url_for, meta_generator};
use crate::query::{self, CategoryFilter, CategoryOption, EventFilter, NewsOrder, StatusFilter};
use crate::templates::{
    menu_items, menu_target_exists, CardVariant, EventData, FilterLink, NewsData, PageData, ProjectData, SiteData,
    TemplateRenderer, TierData, STYLESHEET,
};
use crate::Site;

/// Delay of the simulated contact form submission
pub const CONTACT_SUBMIT_DELAY_MS: u64 = 1000;

/// Number of compact cards in the event detail sidebar
const RELATED_EVENTS: usize = 3;

/// Static site generator using Tera templates
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
    site_data: SiteData,
    written: Cell<usize>,
    page_slugs: RefCell<Vec<String>>,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let renderer = TemplateRenderer::new(&site.config)?;
        let year = chrono::Local::now().format("%Y").to_string();
        let site_data = SiteData::new(&site.config, year);

        Ok(Self {
            site: site.clone(),
            renderer,
            site_data,
            written: Cell::new(0),
            page_slugs: RefCell::new(Vec::new()),
        })
    }

    /// Generate the entire site, returning the number of files written
    pub fn generate(&self, content: &Content) -> Result<usize> {
        self.written.set(0);
        fs::create_dir_all(&self.site.public_dir)?;

        let slugs: Vec<String> = content.pages.iter().map(|p| p.slug.clone()).collect();
        for (name, path) in &self.site.config.menu {
            if !menu_target_exists(path, &slugs) {
                tracing::warn!("Menu entry {:?} links to {} which has no page, leaving it out", name, path);
            }
        }
        *self.page_slugs.borrow_mut() = slugs;

        self.write_file("css/style.css", STYLESHEET)?;
        self.copy_static_assets()?;

        self.generate_home(content)?;
        self.generate_events(content)?;
        self.generate_projects(content)?;
        self.generate_team(content)?;
        self.generate_sponsors(content)?;
        self.generate_contact()?;
        self.generate_news(content)?;
        self.generate_atom_feed(content)?;
        self.generate_join(content)?;
        self.generate_pages(content)?;
        self.generate_not_found()?;

        Ok(self.written.get())
    }

    /// Context shared by every page
    fn create_base_context(&self, current_path: &str, title: &str, description: Option<&str>) -> Context {
        let config = &self.site.config;
        let mut context = Context::new();
        context.insert("site", &self.site_data);
        context.insert("menu", &menu_items(config, current_path, &self.page_slugs.borrow()));
        context.insert("language", &config.language);
        context.insert("current_path", current_path);
        context.insert("page_title", title);
        context.insert("page_description", &description);
        context.insert("meta_generator", &meta_generator());
        context.insert("feed_tag", &feed_tag(config, "/news/atom.xml"));
        context
    }

    /// Generate the home page
    fn generate_home(&self, content: &Content) -> Result<()> {
        let home = &self.site.config.home;
        let mut context = self.create_base_context("/", "", None);

        let featured: Vec<EventData> = query::featured_upcoming(&content.events, home.featured_events)
            .into_iter()
            .map(EventData::from)
            .collect();
        context.insert(
            "featured_cards",
            &self.renderer.event_cards(&featured, CardVariant::Featured)?,
        );

        let news = query::sorted_news(&content.news, self.site.config.news_order);
        let latest: Vec<NewsData> = query::latest_news(&news, home.latest_news)
            .into_iter()
            .map(NewsData::from)
            .collect();
        context.insert("news_cards", &self.renderer.news_cards(&latest)?);

        let sponsors: Vec<_> = query::group_sponsors_by_tier(&content.sponsors, &SponsorTier::ORDER)
            .into_values()
            .flatten()
            .collect();
        context.insert("sponsors", &sponsors);

        let html = self.renderer.render("home.html", &context)?;
        self.write_page("/", &html)
    }

    /// Generate the events listing, every filter combination, and detail pages
    fn generate_events(&self, content: &Content) -> Result<()> {
        let categories = query::category_options(&content.events);

        self.generate_event_list(content, &EventFilter::default(), &categories, "/events/")?;

        let mut count = 0;
        for status in StatusFilter::OPTIONS {
            for category in &categories {
                let filter = EventFilter::new(status, category.clone());
                let path = format!("/{}", filter.path());
                self.generate_event_list(content, &filter, &categories, &path)?;
                count += 1;
            }
        }
        tracing::debug!("Generated {} event filter pages", count);

        self.generate_event_details(content)?;

        let context = self.create_base_context("/events/not-found/", "Event Not Found", None);
        let html = self.renderer.render("event_not_found.html", &context)?;
        self.write_page("/events/not-found/", &html)
    }

    fn generate_event_list(
        &self,
        content: &Content,
        filter: &EventFilter,
        categories: &[CategoryOption],
        path: &str,
    ) -> Result<()> {
        let mut context = self.create_base_context(
            path,
            "Events",
            Some("Talks, workshops, industry tours and socials for aerospace students."),
        );

        let events: Vec<EventData> = filter
            .apply(&content.events)
            .into_iter()
            .map(EventData::from)
            .collect();
        context.insert(
            "event_cards",
            &self.renderer.event_cards(&events, CardVariant::Default)?,
        );

        let status_links: Vec<FilterLink> = StatusFilter::OPTIONS
            .iter()
            .map(|status| FilterLink {
                label: status.label().to_string(),
                path: format!("/{}", EventFilter::new(*status, filter.category.clone()).path()),
                active: *status == filter.status,
            })
            .collect();
        let category_links: Vec<FilterLink> = categories
            .iter()
            .map(|category| FilterLink {
                label: category.label().to_string(),
                path: format!("/{}", EventFilter::new(filter.status, category.clone()).path()),
                active: *category == filter.category,
            })
            .collect();
        context.insert("status_links", &status_links);
        context.insert("category_links", &category_links);
        context.insert("filter_label", &filter_label(filter));
        context.insert("cleared_path", &format!("/{}", EventFilter::cleared().path()));

        let html = self.renderer.render("events.html", &context)?;
        self.write_page(path, &html)
    }

    fn generate_event_details(&self, content: &Content) -> Result<()> {
        let mut seen = HashSet::new();
        for event in &content.events {
            if !is_event_page_id(&event.id) {
                tracing::warn!("Skipping detail page for event {:?}: id cannot be used as a path", event.id);
                continue;
            }
            if !seen.insert(event.id.as_str()) {
                continue;
            }

            let path = format!("/events/{}/", event.id);
            let mut context = self.create_base_context(&path, &event.title, Some(&event.description));
            context.insert("event", &EventData::from(event));

            let related: Vec<EventData> =
                query::filter_events(&content.events, StatusFilter::Upcoming, &CategoryFilter::All)
                    .into_iter()
                    .filter(|other| other.id != event.id)
                    .take(RELATED_EVENTS)
                    .map(EventData::from)
                    .collect();
            context.insert(
                "more_cards",
                &self.renderer.event_cards(&related, CardVariant::Compact)?,
            );

            let html = self.renderer.render("event_detail.html", &context)?;
            self.write_page(&path, &html)?;
        }
        tracing::debug!("Generated {} event detail pages", seen.len());
        Ok(())
    }

    /// Generate the projects page
    fn generate_projects(&self, content: &Content) -> Result<()> {
        let mut context = self.create_base_context(
            "/projects/",
            "Projects",
            Some("Hands-on engineering teams designing, building and flying real hardware."),
        );

        let active: Vec<ProjectData> = query::projects_by_status(&content.projects, ProjectStatus::Active)
            .into_iter()
            .map(ProjectData::from)
            .collect();
        let completed: Vec<ProjectData> =
            query::projects_by_status(&content.projects, ProjectStatus::Completed)
                .into_iter()
                .map(ProjectData::from)
                .collect();
        context.insert("active", &active);
        context.insert("completed_cards", &self.renderer.project_cards(&completed)?);

        let html = self.renderer.render("projects.html", &context)?;
        self.write_page("/projects/", &html)
    }

    /// Generate the team page
    fn generate_team(&self, content: &Content) -> Result<()> {
        let mut context = self.create_base_context(
            "/team/",
            "Our Team",
            Some("Meet the executive team behind the student branch."),
        );
        context.insert("team_cards", &self.renderer.team_cards(&content.team)?);
        context.insert("roles", &content.roles);

        let html = self.renderer.render("team.html", &context)?;
        self.write_page("/team/", &html)
    }

    /// Generate the sponsors page, skipping tiers with no sponsors
    fn generate_sponsors(&self, content: &Content) -> Result<()> {
        let mut context = self.create_base_context(
            "/sponsors/",
            "Sponsors",
            Some("The organizations that make our projects and events possible."),
        );

        let tiers: Vec<TierData> = query::group_sponsors_by_tier(&content.sponsors, &SponsorTier::ORDER)
            .into_iter()
            .filter(|(_, sponsors)| !sponsors.is_empty())
            .map(|(tier, sponsors)| TierData::new(&tier, sponsors))
            .collect();
        context.insert("tiers", &tiers);
        context.insert("packages", &content.packages);

        let html = self.renderer.render("sponsors.html", &context)?;
        self.write_page("/sponsors/", &html)
    }

    /// Generate the contact page
    fn generate_contact(&self) -> Result<()> {
        let mut context = self.create_base_context(
            "/contact/",
            "Contact Us",
            Some("Questions about membership, events or sponsorship? Get in touch."),
        );
        context.insert("submit_delay_ms", &CONTACT_SUBMIT_DELAY_MS);

        let html = self.renderer.render("contact.html", &context)?;
        self.write_page("/contact/", &html)
    }

    /// Generate the news page
    fn generate_news(&self, content: &Content) -> Result<()> {
        let mut context = self.create_base_context(
            "/news/",
            "News",
            Some("Announcements, recaps and achievements from the branch."),
        );
        let articles: Vec<NewsData> = query::sorted_news(&content.news, self.site.config.news_order)
            .iter()
            .map(NewsData::from)
            .collect();
        context.insert("articles", &articles);

        let html = self.renderer.render("news.html", &context)?;
        self.write_page("/news/", &html)
    }

    /// Generate Atom feed of news articles, newest first
    fn generate_atom_feed(&self, content: &Content) -> Result<()> {
        let config = &self.site.config;
        let articles = query::sorted_news(&content.news, NewsOrder::NewestFirst);
        let news_url = full_url_for(config, "/news/");
        let updated = articles
            .first()
            .map(|article| date_xml(&article.date))
            .unwrap_or_else(|| chrono::Utc::now().to_rfc3339());

        let mut feed = String::new();
        feed.push_str(r#"<?xml version="1.0" encoding="utf-8"?>"#);
        feed.push('\n');
        feed.push_str(r#"<feed xmlns="http://www.w3.org/2005/Atom">"#);
        feed.push('\n');
        feed.push_str(&format!("  <title>{}</title>\n", escape_xml(&config.title)));
        feed.push_str(&format!(
            "  <link href=\"{}\" rel=\"self\"/>\n",
            escape_xml(&full_url_for(config, "/news/atom.xml"))
        ));
        feed.push_str(&format!("  <link href=\"{}\"/>\n", escape_xml(&news_url)));
        feed.push_str(&format!("  <updated>{}</updated>\n", updated));
        feed.push_str(&format!("  <id>{}</id>\n", escape_xml(&news_url)));
        feed.push_str(&format!(
            "  <author><name>{}</name></author>\n",
            escape_xml(&config.title)
        ));

        for article in articles.iter().take(20) {
            let link = escape_xml(&format!("{}#{}", news_url, article.id));
            feed.push_str("  <entry>\n");
            feed.push_str(&format!("    <title>{}</title>\n", escape_xml(&article.title)));
            feed.push_str(&format!("    <link href=\"{}\"/>\n", link));
            feed.push_str(&format!("    <id>{}</id>\n", link));
            feed.push_str(&format!("    <published>{}</published>\n", date_xml(&article.date)));
            feed.push_str(&format!("    <updated>{}</updated>\n", date_xml(&article.date)));
            if !article.author.is_empty() {
                feed.push_str(&format!(
                    "    <author><name>{}</name></author>\n",
                    escape_xml(&article.author)
                ));
            }
            feed.push_str(&format!(
                "    <summary>{}</summary>\n",
                escape_xml(article.summary())
            ));
            for tag in &article.tags {
                feed.push_str(&format!("    <category term=\"{}\"/>\n", escape_xml(tag)));
            }
            feed.push_str("  </entry>\n");
        }

        feed.push_str("</feed>\n");

        self.write_file("news/atom.xml", &feed)
    }

    /// Generate the join page
    fn generate_join(&self, content: &Content) -> Result<()> {
        let mut context = self.create_base_context(
            "/join/",
            "Join Us",
            Some("Become part of a community of students passionate about aerospace."),
        );
        context.insert("faq", &content.faq);

        let html = self.renderer.render("join.html", &context)?;
        self.write_page("/join/", &html)
    }

    /// Generate markdown pages
    fn generate_pages(&self, content: &Content) -> Result<()> {
        for page in &content.pages {
            let data = PageData::from(page);
            let mut context =
                self.create_base_context(&data.path, &data.title, data.description.as_deref());
            context.insert("page", &data);

            let html = self.renderer.render("page.html", &context)?;
            self.write_page(&data.path, &html)?;
        }
        Ok(())
    }

    fn generate_not_found(&self) -> Result<()> {
        let context = self.create_base_context("/404.html", "Page Not Found", None);
        let html = self.renderer.render("404.html", &context)?;
        self.write_file("404.html", &html)
    }

    /// Copy static assets (images, etc.) into the public directory
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.site.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        let mut copied = 0;
        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;
            let dest = self.site.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
            copied += 1;
        }

        tracing::debug!("Copied {} static assets", copied);
        Ok(())
    }

    /// Write a page route such as `/events/` to `<public>/events/index.html`
    fn write_page(&self, route: &str, html: &str) -> Result<()> {
        let relative = route.trim_start_matches('/');
        if relative.is_empty() {
            self.write_file("index.html", html)
        } else {
            self.write_file(&format!("{}index.html", relative), html)
        }
    }

    fn write_file(&self, relative: &str, contents: &str) -> Result<()> {
        let output_path = self.output_path(relative)?;
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, contents)?;
        self.written.set(self.written.get() + 1);
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }

    /// Resolve a relative output path, refusing anything that leaves the public directory
    fn output_path(&self, relative: &str) -> Result<PathBuf> {
        let safe = relative
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..");
        if !safe {
            bail!("Refusing to write outside the public directory: {:?}", relative);
        }
        Ok(self.site.public_dir.join(relative))
    }
}

/// Human-readable summary of the active filter, empty for the cleared state
fn filter_label(filter: &EventFilter) -> String {
    let mut parts = Vec::new();
    if filter.status != StatusFilter::All {
        parts.push(filter.status.label().to_string());
    }
    if filter.category.filter != CategoryFilter::All {
        parts.push(filter.category.label().to_string());
    }
    parts.join(" · ")
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentLoader;
    use tempfile::TempDir;

    const EVENTS: &str = r#"[
        {"id":"rocket-talk","title":"Rocket Propulsion 101","date":"2025-02-12","time":"6:00 PM","location":"ENG 103","category":"Talk","description":"Intro","speakers":["Dr. Rivera"],"rsvpLink":"https://forms.example/rsvp","status":"upcoming","featured":true},
        {"id":"cad-workshop","title":"CAD Workshop","date":"2025-02-20","category":"Workshop","description":"SolidWorks basics","status":"upcoming","featured":false},
        {"id":"hangar-tour","title":"Hangar Tour","date":"2024-11-02","category":"Tour","description":"Visit","rsvpLink":"https://forms.example/old","status":"past"},
        {"id":"hack-night","title":"Hack Night","date":"2025-03-01","category":"Hackathon","description":"Build","status":"upcoming"},
        {"id":"filter","title":"Bad Id","date":"2025-03-01","category":"Social","description":"x","status":"upcoming"},
        {"id":"../escape","title":"Traversal","date":"2025-03-01","category":"Social","description":"x","status":"upcoming"}
    ]"#;

    const PROJECTS: &str = r#"[
        {"id":"uav","title":"UAV Design","status":"Active","description":"Fixed wing","objective":"Compete","skills":["CAD"],"teamSize":12,"openPositions":3,"timeline":"2024-2025"},
        {"id":"cubesat","title":"CubeSat","status":"Active","description":"1U","objective":"Launch","skills":[],"teamSize":8,"openPositions":0,"timeline":"2025"},
        {"id":"glider","title":"Glider","status":"Completed","description":"Done","objective":"Fly","skills":[],"teamSize":5,"openPositions":0,"timeline":"2023"}
    ]"#;

    const SPONSORS: &str = r#"[
        {"id":"acme","name":"Acme Aero","tier":"Gold","website":"https://acme.example"},
        {"id":"zen","name":"Zen Space","tier":"Bronze","website":"https://zen.example"}
    ]"#;

    const NEWS: &str = r#"[
        {"id":"older","title":"Older News","date":"2024-09-01","content":"First.\n\nSecond.","author":"Comms","tags":["Recap"],"featured":false},
        {"id":"newer","title":"Newer News","date":"2025-01-15","content":"Fresh & new.","author":"Comms","tags":[],"featured":true}
    ]"#;

    fn build_site() -> (TempDir, Site, Content) {
        let tmp = TempDir::new().unwrap();
        let content_dir = tmp.path().join("content");
        fs::create_dir_all(content_dir.join("pages")).unwrap();
        fs::write(content_dir.join("events.json"), EVENTS).unwrap();
        fs::write(content_dir.join("projects.json"), PROJECTS).unwrap();
        fs::write(content_dir.join("sponsors.json"), SPONSORS).unwrap();
        fs::write(content_dir.join("team.json"), r#"[{"id":"alex","name":"Alex Chen","role":"President","program":"Aerospace","bio":"Hi"}]"#).unwrap();
        fs::write(content_dir.join("news.json"), NEWS).unwrap();
        fs::write(content_dir.join("faq.json"), r#"[{"question":"Who can join?","answer":"Everyone."}]"#).unwrap();
        fs::write(content_dir.join("pages/about.md"), "---\ntitle: About Us\n---\n# Our Mission\n").unwrap();
        fs::create_dir_all(tmp.path().join("static/images")).unwrap();
        fs::write(tmp.path().join("static/images/logo.svg"), "<svg/>").unwrap();
        fs::write(
            tmp.path().join("_config.yml"),
            "title: AIAA TMU\ncontact_email: club@example.com\nannouncement:\n  enabled: true\n  message: Gala tickets on sale\n",
        )
        .unwrap();

        let site = Site::new(tmp.path()).unwrap();
        let content = ContentLoader::new(&site).load().unwrap();
        (tmp, site, content)
    }

    fn read(site: &Site, relative: &str) -> String {
        fs::read_to_string(site.public_dir.join(relative)).unwrap()
    }

    #[test]
    fn test_generate_all_routes() {
        let (_tmp, site, content) = build_site();
        let written = Generator::new(&site).unwrap().generate(&content).unwrap();
        assert!(written > 20);

        for route in [
            "index.html",
            "events/index.html",
            "events/filter/all/all/index.html",
            "events/filter/past/tour/index.html",
            "events/filter/upcoming/c-hackathon/index.html",
            "events/rocket-talk/index.html",
            "events/not-found/index.html",
            "projects/index.html",
            "team/index.html",
            "sponsors/index.html",
            "contact/index.html",
            "news/index.html",
            "news/atom.xml",
            "join/index.html",
            "about/index.html",
            "404.html",
            "css/style.css",
            "images/logo.svg",
        ] {
            assert!(site.public_dir.join(route).exists(), "missing {}", route);
        }
    }

    #[test]
    fn test_unsafe_event_ids_get_no_page() {
        let (tmp, site, content) = build_site();
        Generator::new(&site).unwrap().generate(&content).unwrap();
        assert!(!site.public_dir.join("escape").exists());
        assert!(!tmp.path().join("escape").exists());
        // the reserved id must not overwrite the filter tree
        assert!(!site.public_dir.join("events/filter/index.html").exists());
    }

    #[test]
    fn test_home_page_sections() {
        let (_tmp, site, content) = build_site();
        Generator::new(&site).unwrap().generate(&content).unwrap();
        let home = read(&site, "index.html");

        assert!(home.contains("event-card-featured"));
        assert!(home.contains("Rocket Propulsion 101"));
        assert!(!home.contains("CAD Workshop"));
        // authored order: the first article is shown first
        let older = home.find("Older News").unwrap();
        let newer = home.find("Newer News").unwrap();
        assert!(older < newer);
        assert!(home.contains("Acme Aero"));
        assert!(home.contains("Gala tickets on sale"));
        assert!(home.contains(r#"class="active" aria-current="page">Home"#));
    }

    #[test]
    fn test_event_filter_pages() {
        let (_tmp, site, content) = build_site();
        Generator::new(&site).unwrap().generate(&content).unwrap();

        let default = read(&site, "events/index.html");
        assert!(default.contains("Rocket Propulsion 101"));
        assert!(default.contains("CAD Workshop"));
        assert!(!default.contains("Hangar Tour"));

        let past_tours = read(&site, "events/filter/past/tour/index.html");
        assert!(past_tours.contains("Hangar Tour"));
        assert!(!past_tours.contains("Rocket Propulsion 101"));

        let empty = read(&site, "events/filter/past/workshop/index.html");
        assert!(empty.contains("No events found"));
        assert!(empty.contains(r#"href="/events/filter/all/all/""#));
    }

    #[test]
    fn test_event_detail_rsvp() {
        let (_tmp, site, content) = build_site();
        Generator::new(&site).unwrap().generate(&content).unwrap();

        let upcoming = read(&site, "events/rocket-talk/index.html");
        assert!(upcoming.contains("https://forms.example/rsvp"));
        assert!(upcoming.contains("event-card-compact"));

        let past = read(&site, "events/hangar-tour/index.html");
        assert!(past.contains("already taken place"));
        assert!(!past.contains("https://forms.example/old"));

        let no_link = read(&site, "events/cad-workshop/index.html");
        assert!(!no_link.contains("RSVP Now"));
    }

    #[test]
    fn test_projects_and_sponsors_pages() {
        let (_tmp, site, content) = build_site();
        Generator::new(&site).unwrap().generate(&content).unwrap();

        let projects = read(&site, "projects/index.html");
        assert_eq!(projects.matches("Join This Project").count(), 1);
        assert!(projects.contains(r#"id="uav""#));
        assert!(projects.contains("Glider"));

        let sponsors = read(&site, "sponsors/index.html");
        assert!(sponsors.contains("Gold Sponsors"));
        assert!(sponsors.contains("Bronze Sponsors"));
        assert!(!sponsors.contains("Silver Sponsors"));
        assert!(sponsors.find("Acme Aero").unwrap() < sponsors.find("Zen Space").unwrap());
        assert!(sponsors.contains("mailto:club@example.com?subject=Sponsorship%20Inquiry"));
    }

    #[test]
    fn test_news_page_and_feed() {
        let (_tmp, site, content) = build_site();
        Generator::new(&site).unwrap().generate(&content).unwrap();

        let news = read(&site, "news/index.html");
        assert!(news.contains("<p>First.</p>"));
        assert!(news.contains("<p>Second.</p>"));
        assert!(news.contains("Fresh &amp; new."));

        let feed = read(&site, "news/atom.xml");
        assert!(feed.starts_with("<?xml"));
        assert!(feed.find("Newer News").unwrap() < feed.find("Older News").unwrap());
        assert!(feed.contains("<updated>2025-01-15T00:00:00Z</updated>"));
    }

    #[test]
    fn test_contact_and_join_pages() {
        let (_tmp, site, content) = build_site();
        Generator::new(&site).unwrap().generate(&content).unwrap();

        let contact = read(&site, "contact/index.html");
        assert!(contact.contains("}, 1000);"));
        assert!(contact.contains(r#"<option value="sponsorship">Sponsorship</option>"#));

        let join = read(&site, "join/index.html");
        assert!(join.contains("Who can join?"));

        assert!(join.contains(r#"href="/about/""#));

        let about = read(&site, "about/index.html");
        assert!(about.contains("<h1>Our Mission</h1>"));
        assert!(about.contains("<title>About Us | AIAA TMU</title>"));
    }

    #[test]
    fn test_empty_site_generates() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        let content = Content::default();
        Generator::new(&site).unwrap().generate(&content).unwrap();

        let events = read(&site, "events/index.html");
        assert!(events.contains("No events found"));
        assert!(events.contains(r#"href="/events/""#));
        assert!(!events.contains(r#"href="/about/""#));
        assert!(read(&site, "index.html").contains("No featured events"));
    }

    #[test]
    fn test_colliding_categories_keep_separate_pages() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("content")).unwrap();
        fs::write(
            tmp.path().join("content/events.json"),
            r#"[
                {"id":"builtin-talk","title":"Builtin Talk","date":"2025-03-01","category":"Talk","status":"upcoming"},
                {"id":"lower-talk","title":"Lowercase Talk","date":"2025-03-02","category":"talk","status":"upcoming"},
                {"id":"all-night","title":"All Nighter","date":"2025-03-03","category":"All","status":"upcoming"}
            ]"#,
        )
        .unwrap();
        let site = Site::new(tmp.path()).unwrap();
        let content = ContentLoader::new(&site).load().unwrap();
        Generator::new(&site).unwrap().generate(&content).unwrap();

        let talk = read(&site, "events/filter/upcoming/talk/index.html");
        assert!(talk.contains("Builtin Talk"));
        assert!(!talk.contains("Lowercase Talk"));

        let lower = read(&site, "events/filter/upcoming/c-talk/index.html");
        assert!(lower.contains("Lowercase Talk"));
        assert!(!lower.contains("Builtin Talk"));

        let everything = read(&site, "events/filter/all/all/index.html");
        for title in ["Builtin Talk", "Lowercase Talk", "All Nighter"] {
            assert!(everything.contains(title), "cleared page is missing {}", title);
        }

        let all_category = read(&site, "events/filter/all/c-all/index.html");
        assert!(all_category.contains("All Nighter"));
        assert!(!all_category.contains("Builtin Talk"));
    }

    #[test]
    fn test_filter_label() {
        assert_eq!(filter_label(&EventFilter::cleared()), "");
        assert_eq!(filter_label(&EventFilter::default()), "Upcoming");
        assert_eq!(
            filter_label(&EventFilter::new(
                StatusFilter::Past,
                CategoryFilter::Only("Talk".into()).into()
            )),
            "Past · Talk"
        );
    }

    #[test]
    fn test_output_path_rejects_traversal() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        let generator = Generator::new(&site).unwrap();
        assert!(generator.output_path("events/../../x").is_err());
        assert!(generator.output_path("events/a/index.html").is_ok());
    }
}
