//! clubsite: a static site generator for a university aerospace student club
//!
//! Content collections (events, projects, sponsors, team, news) are read from
//! JSON, YAML or TOML files, queried, and rendered through embedded Tera
//! templates into a directory of plain HTML.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod query;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A site rooted at a base directory
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Collection files
    pub content_dir: PathBuf,
    /// Markdown pages
    pub pages_dir: PathBuf,
    /// Assets copied verbatim into the output
    pub static_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// The config file in use, if any
    pub config_path: Option<PathBuf>,
}

impl Site {
    /// Open the site in `base_dir`, loading its config file when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = config::SiteConfig::locate(&base_dir);

        let config = match &config_path {
            Some(path) => config::SiteConfig::load(path)?,
            None => config::SiteConfig::default(),
        };

        Ok(Self {
            content_dir: base_dir.join(&config.content_dir),
            pages_dir: base_dir.join(&config.pages_dir),
            static_dir: base_dir.join(&config.static_dir),
            public_dir: base_dir.join(&config.public_dir),
            config,
            base_dir,
            config_path,
        })
    }

    /// Read every collection and page
    pub fn load_content(&self) -> Result<content::Content> {
        Ok(content::ContentLoader::new(self).load()?)
    }

    /// Scaffold a new site in the base directory
    pub fn init(&self) -> Result<()> {
        commands::init::init_site(&self.base_dir)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
