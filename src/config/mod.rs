//! Configuration module

mod site;

pub use site::SiteConfig;
pub use site::AnnouncementConfig;
pub use site::HomeConfig;
pub use site::MembershipConfig;
pub use site::SocialLinks;
pub use site::StatsConfig;
pub use site::CONFIG_FILES;
