use std::time::Duration;

use clap::Parser;

use crate::error::UpdaterError;
use crate::github::Github;
use crate::pinned::FALLBACK_PINNED;
use crate::readme::{Fields, Template};

pub mod age;
pub mod args;
pub mod error;
pub mod github;
pub mod pinned;
pub mod readme;

pub use args::ReadmeUpdater;

pub async fn builder() -> Result<(), UpdaterError> {
    let args = ReadmeUpdater::parse();
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Off)
        .filter_module("readme_updater", args.log_level)
        .init();
    log::debug!("{args:?}");

    update(&args).await
}

/// Scrapes the pinned repositories and rewrites the README.
///
/// The scrape runs in the background while the age and timestamp are
/// computed. A failed scrape only degrades the projects section; template
/// and write failures are returned.
pub async fn update(args: &ReadmeUpdater) -> Result<(), UpdaterError> {
    let user = args.user().to_owned();
    let github = Github::new(
        args.base_url.clone(),
        args.proxy.clone(),
        Duration::from_secs(args.timeout),
    )?;

    let scrape = {
        let (user, limit) = (user.clone(), args.limit);
        tokio::spawn(async move { github.pinned_repos(&user, limit).await })
    };

    let age = age::current_age(args.birthdate);
    let updated = readme::format_updated(&chrono::Local::now());

    let projects = scrape.await.unwrap_or_else(|e| {
        log::warn!("pinned repo task failed: {e}");
        FALLBACK_PINNED.to_owned()
    });

    let template = match &args.template {
        Some(path) => Template::from_file(path)?,
        None => Template::builtin(),
    };

    let content = template.render(&Fields {
        age,
        projects: &projects,
        updated: &updated,
        user: &user,
    })?;
    readme::write_readme(&args.output, &content)?;

    log::info!("README updated successfully for user: {user}");
    Ok(())
}
