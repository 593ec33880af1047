use std::fmt;

use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

use crate::error::UpdaterError;

/// Listed in place of the projects when nothing could be scraped.
pub const FALLBACK_PINNED: &str =
    "* No pinned repositories found or there was an issue loading them.\n";

const ITEM: &str = ".pinned-item-list-item-content";
const TITLE: &str = "a > span";
const LINK: &str = "a";
const DESC: &str = ".pinned-item-desc";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedRepo {
    pub title: String,
    pub link: String,
    pub description: String,
}

impl fmt::Display for PinnedRepo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "* [{}]({})", self.title, self.link)?;
        if !self.description.is_empty() {
            write!(f, ": {}", self.description)?;
        }
        Ok(())
    }
}

fn selector(css: &'static str) -> Result<Selector, UpdaterError> {
    Selector::parse(css).map_err(|_| UpdaterError::InvalidSelector(css))
}

fn text_of(item: ElementRef<'_>, sel: &Selector) -> String {
    item.select(sel)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Pulls the pinned repositories out of a profile page, in page order.
///
/// Links are resolved against `base`. Items without a usable `href` are
/// skipped. `limit == 0` means no limit.
pub fn extract_pinned(html: &str, base: &Url, limit: usize) -> Result<Vec<PinnedRepo>, UpdaterError> {
    let (item_sel, title_sel, link_sel, desc_sel) =
        (selector(ITEM)?, selector(TITLE)?, selector(LINK)?, selector(DESC)?);

    let doc = Html::parse_document(html);
    let mut repos = Vec::new();
    for item in doc.select(&item_sel) {
        if limit > 0 && repos.len() >= limit {
            break;
        }
        let href = item.select(&link_sel).next().and_then(|a| a.value().attr("href"));
        let Some(link) = href.and_then(|h| base.join(h.trim()).ok()) else {
            log::debug!("skipping pinned item without a usable link: {href:?}");
            continue;
        };
        repos.push(PinnedRepo {
            title: text_of(item, &title_sel),
            link: link.to_string(),
            description: text_of(item, &desc_sel),
        });
    }
    log::debug!("extracted {} pinned repos", repos.len());
    Ok(repos)
}

/// Markdown bullet list of `repos`, or the fallback message when empty.
pub fn render_list(repos: &[PinnedRepo]) -> String {
    if repos.is_empty() {
        return FALLBACK_PINNED.to_owned();
    }
    repos.iter().map(|r| format!("{r}\n")).collect()
}
