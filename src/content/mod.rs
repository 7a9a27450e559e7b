//! Content module - collections, markdown pages, and content processing

mod error;
mod frontmatter;
pub mod loader;
mod markdown;
mod model;

pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use loader::{is_event_page_id, is_url_safe_id, Content, ContentLoader, MarkdownPage};
pub use markdown::MarkdownRenderer;
pub use model::{
    Event, EventCategory, EventStatus, FaqItem, NewsArticle, OpenRole, Project, ProjectStatus,
    Sponsor, SponsorTier, SponsorshipPackage, TeamMember,
};
