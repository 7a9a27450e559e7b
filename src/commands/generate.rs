//! Generate static files

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use crate::content::ContentLoader;
use crate::generator::Generator;
use crate::Site;

/// Quiet period before a batch of file events triggers a rebuild
const DEBOUNCE: Duration = Duration::from_millis(500);

/// Load the content and render the whole site
pub fn run(site: &Site) -> Result<()> {
    let start = Instant::now();

    let content = ContentLoader::new(site).load()?;
    tracing::info!(
        "Loaded {} events, {} projects, {} sponsors, {} members, {} articles and {} pages",
        content.events.len(),
        content.projects.len(),
        content.sponsors.len(),
        content.team.len(),
        content.news.len(),
        content.pages.len()
    );

    let generator = Generator::new(site)?;
    let written = generator.generate(&content)?;

    tracing::info!(
        "Generated {} files in {:.2}s",
        written,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Watch content, static assets and the config file, regenerating on change
pub fn watch(site: &Site) -> Result<()> {
    let (tx, rx) = channel();
    let mut debouncer = new_debouncer(DEBOUNCE, tx)?;

    for dir in [&site.content_dir, &site.static_dir] {
        if dir.exists() {
            debouncer.watcher().watch(dir, RecursiveMode::Recursive)?;
            tracing::debug!("Watching: {:?}", dir);
        }
    }
    if let Some(config_path) = &site.config_path {
        debouncer
            .watcher()
            .watch(config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let paths: Vec<PathBuf> = events.into_iter().map(|e| e.path).collect();
                rebuild_on_change(site, &paths);
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Rebuild once for a debounced batch of changed paths. Returns whether a
/// rebuild was attempted.
fn rebuild_on_change(site: &Site, paths: &[PathBuf]) -> bool {
    let relevant: Vec<&PathBuf> = paths.iter().filter(|p| !is_ignored(p)).collect();
    if relevant.is_empty() {
        return false;
    }

    for path in &relevant {
        tracing::info!("File changed: {}", path.display());
    }

    // Re-read the config so edits to it apply
    match Site::new(&site.base_dir).and_then(|fresh| run(&fresh)) {
        Ok(()) => tracing::info!("Regenerated successfully"),
        Err(e) => tracing::error!("Generation failed: {:#}", e),
    }
    true
}

/// Editor and VCS noise that should not trigger a rebuild
fn is_ignored(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    path_str.contains(".git")
        || path_str.contains(".DS_Store")
        || path_str.ends_with('~')
        || path_str.ends_with(".swp")
}
