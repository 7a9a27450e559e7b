//! Initialize a new club site

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

use crate::config::CONFIG_FILES;

const CONFIG: &str = r#"# Site
title: AIAA TMU
subtitle: Student Branch
description: Inspiring the next generation of aerospace professionals through hands-on projects, industry connections, and a passionate community.
language: en

# URL
url: http://example.com
root: /

# Directory
content_dir: content
pages_dir: content/pages
static_dir: static
public_dir: public

# Date formats
date_format: MMMM D, YYYY
long_date_format: dddd, MMMM D, YYYY
short_date_format: ddd, MMM D

# Home page
home:
  featured_events: 3
  latest_news: 2
# as_authored | newest_first
news_order: as_authored

menu:
  Home: /
  About: /about/
  Events: /events/
  Projects: /projects/
  Team: /team/
  Sponsors: /sponsors/
  Contact: /contact/

announcement:
  enabled: true
  message: Registration for the Spring Design Challenge is open!
  link: /events/
  link_text: See events

contact_email: contact@example.com
contact_location: Engineering Building, Room 101
social_links:
  linkedin: https://www.linkedin.com/
  instagram: https://www.instagram.com/
  twitter: ""

stats:
  members: 150+
  events_per_term: 12
  industry_talks: 8
  active_projects: 2

membership:
  student_branch_fee: Free
  national_fee: $35/year
  benefits:
    - Access to all branch events and workshops
    - Hands-on experience on project teams
    - Networking with industry professionals
    - Mentorship from upper-year students
"#;

const EVENTS: &str = r#"[
  {
    "id": "rocket-propulsion-101",
    "title": "Rocket Propulsion 101",
    "date": "2025-02-12",
    "time": "6:00 PM - 8:00 PM",
    "location": "ENG 103",
    "category": "Talk",
    "description": "An introduction to liquid and solid rocket propulsion from an industry propulsion engineer.",
    "speakers": ["Dr. Maya Rivera"],
    "rsvpLink": "https://forms.example.com/rocket-propulsion",
    "tags": ["Propulsion", "Industry"],
    "status": "upcoming",
    "featured": true
  },
  {
    "id": "cad-workshop",
    "title": "CAD for Aircraft Design",
    "date": "2025-02-26",
    "time": "5:00 PM - 7:00 PM",
    "location": "ENG 201 Computer Lab",
    "category": "Workshop",
    "description": "Hands-on workshop covering wing and fuselage modelling.",
    "tags": ["CAD", "Design"],
    "status": "upcoming",
    "featured": true
  },
  {
    "id": "hangar-tour",
    "title": "Maintenance Hangar Tour",
    "date": "2024-11-08",
    "time": "1:00 PM - 4:00 PM",
    "location": "Regional Airport",
    "category": "Tour",
    "description": "A guided tour of a commercial aircraft maintenance hangar.",
    "status": "past"
  }
]
"#;

const PROJECTS: &str = r#"[
  {
    "id": "uav-design",
    "title": "UAV Design Team",
    "status": "Active",
    "description": "Designing and building a fixed-wing UAV for the annual design-build-fly competition.",
    "objective": "Place in the top ten at this year's competition.",
    "skills": ["CAD", "Aerodynamics", "Composites", "Embedded Systems"],
    "teamSize": 12,
    "openPositions": 3,
    "timeline": "September 2024 - April 2025"
  },
  {
    "id": "glider",
    "title": "Balsa Glider Challenge",
    "status": "Completed",
    "description": "A first-year friendly glider build and flight competition.",
    "objective": "Longest flight time.",
    "skills": ["Prototyping"],
    "teamSize": 6,
    "openPositions": 0,
    "timeline": "Fall 2023"
  }
]
"#;

const SPONSORS: &str = r#"[
  { "id": "northstar-aero", "name": "Northstar Aerospace", "tier": "Gold", "website": "https://example.com" },
  { "id": "skyline-composites", "name": "Skyline Composites", "tier": "Bronze", "website": "https://example.org" }
]
"#;

const TEAM: &str = r#"[
  {
    "id": "alex-chen",
    "name": "Alex Chen",
    "role": "President",
    "program": "Aerospace Engineering, 4th Year",
    "bio": "Alex leads the branch and loves anything that flies."
  },
  {
    "id": "sam-patel",
    "name": "Sam Patel",
    "role": "VP Events",
    "program": "Mechanical Engineering, 3rd Year",
    "bio": "Sam organizes talks, tours and socials."
  }
]
"#;

const NEWS: &str = r#"[
  {
    "id": "welcome-back",
    "title": "Welcome Back for the Winter Term",
    "date": "2025-01-10",
    "content": "We have a packed term ahead with talks, workshops and a hangar tour.\n\nKeep an eye on the events page and join us at the first general meeting.",
    "author": "Communications Team",
    "tags": ["Announcement"],
    "featured": true
  },
  {
    "id": "uav-recruiting",
    "title": "UAV Team Recruiting",
    "date": "2024-12-02",
    "content": "The UAV Design Team has three open positions for the winter term.",
    "author": "UAV Design Team",
    "tags": ["Projects"],
    "featured": false
  }
]
"#;

const FAQ: &str = r#"[
  {
    "question": "Do I need to be in Aerospace Engineering to join?",
    "answer": "Not at all! Students from every program are welcome."
  },
  {
    "question": "Do I need any prior experience?",
    "answer": "No experience required. Our workshops and project teams welcome beginners."
  }
]
"#;

const ROLES: &str = r#"[
  {
    "title": "Social Media Manager",
    "description": "Create engaging content for our social media channels.",
    "commitment": "2-4 hours/week"
  }
]
"#;

const PACKAGES: &str = r#"[
  { "tier": "Title", "price": "$5,000+", "benefits": ["Naming rights at flagship events", "Logo on all materials"], "highlighted": false },
  { "tier": "Gold", "price": "$2,500", "benefits": ["Logo on website and banners", "Resume book access"], "highlighted": true },
  { "tier": "Silver", "price": "$1,000", "benefits": ["Logo on website"], "highlighted": false },
  { "tier": "Bronze", "price": "$500", "benefits": ["Name on website"], "highlighted": false }
]
"#;

const ABOUT: &str = r#"---
title: About Us
description: Who we are and what we do
---

## Our Mission

We inspire the next generation of aerospace professionals through hands-on
projects, industry connections, and a passionate community.

## Our Vision

A campus where every student curious about flight has a place to learn,
build, and lead.
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    if let Some(existing) = CONFIG_FILES
        .iter()
        .map(|name| target_dir.join(name))
        .find(|path| path.exists())
    {
        bail!("A site already exists here: {:?}", existing);
    }

    let content_dir = target_dir.join("content");
    fs::create_dir_all(content_dir.join("pages"))?;
    fs::create_dir_all(target_dir.join("static/images"))?;

    fs::write(target_dir.join("_config.yml"), CONFIG)?;

    for (name, body) in [
        ("events.json", EVENTS),
        ("projects.json", PROJECTS),
        ("sponsors.json", SPONSORS),
        ("team.json", TEAM),
        ("news.json", NEWS),
        ("faq.json", FAQ),
        ("roles.json", ROLES),
        ("packages.json", PACKAGES),
    ] {
        let path = content_dir.join(name);
        if path.exists() {
            tracing::warn!("Keeping existing {:?}", path);
            continue;
        }
        fs::write(&path, body)?;
    }

    let about = content_dir.join("pages/about.md");
    if !about.exists() {
        fs::write(about, ABOUT)?;
    }

    Ok(())
}
