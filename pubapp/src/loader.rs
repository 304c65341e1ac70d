use pubcore::render::{
    render_journal_list,
    render_working_list,
};
use crate::{
    config::Config,
    error::LoadError,
    page::Page,
    source::DataSource,
};

/// Fetches the document once and renders both listings into their
/// containers, journal publications first.
///
/// A listing is only written if its container exists on the page and
/// the document carries the corresponding sequence.  Nothing is written
/// if the document could not be loaded.
pub async fn render_page<S, P>(
    source: &S,
    page: &mut P,
    config: &Config,
) -> Result<(), LoadError>
where
    S: DataSource + ?Sized,
    P: Page + ?Sized,
{
    let data = source.fetch().await?;
    for id in data.duplicate_ids() {
        log::warn!("entry id {id:?} is used more than once; abstract toggles will collide");
    }

    if let Some(entries) = data.journal_publications.as_deref() {
        if page.has_container(&config.journal_container) {
            log::debug!("rendering {} journal publications", entries.len());
            page.set_content(&config.journal_container, render_journal_list(entries));
        }
    }
    if let Some(entries) = data.working_papers.as_deref() {
        if page.has_container(&config.working_container) {
            log::debug!("rendering {} working papers", entries.len());
            page.set_content(&config.working_container, render_working_list(entries));
        }
    }
    Ok(())
}

/// Runs `render_page`, reporting any failure through the logger instead
/// of returning it.
pub async fn init_with<S, P>(
    source: &S,
    page: &mut P,
    config: &Config,
)
where
    S: DataSource + ?Sized,
    P: Page + ?Sized,
{
    if let Err(e) = render_page(source, page, config).await {
        log::error!("Error loading research data: {e}");
    }
}

/// Whether rendering has to wait for `DOMContentLoaded`, given the
/// document's `readyState`.
pub fn should_defer(ready_state: &str) -> bool {
    ready_state == "loading"
}
