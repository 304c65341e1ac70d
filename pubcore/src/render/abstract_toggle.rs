use crate::{
    model::TrustedHtml,
    render::LINK_SEPARATOR,
};

/// Renders the collapsible abstract block for the entry identified by
/// `id`, or nothing at all when there is no abstract.
///
/// The toggle and the collapsible body are linked through the element id
/// `abstract-<id>`, so entry ids must be unique within a page.  A leading
/// separator is only emitted when `links_before` is set.  The abstract is
/// inserted verbatim.
pub fn abstract_toggle(
    r#abstract: Option<&TrustedHtml>,
    id: &str,
    links_before: bool,
) -> String {
    let Some(r#abstract) = r#abstract.filter(|html| !html.is_empty()) else {
        return String::new();
    };
    let separator = if links_before { LINK_SEPARATOR } else { "" };
    format!(r##"
      {separator}
      <span class="paper-link">
        <i class="far fa-file-alt" style="color:#696969"></i>
        <a data-toggle="collapse" href="#abstract-{id}" role="button" aria-expanded="false" aria-controls="abstract-{id}">Abstract ↓</a>
      </span>
      <div class="collapse" id="abstract-{id}">
        <div class="card card-body">{body}</div>
      </div>"##,
        body = r#abstract,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_abstract() {
        assert_eq!(abstract_toggle(None, "a1", false), "");
        assert_eq!(abstract_toggle(None, "a1", true), "");
        assert_eq!(abstract_toggle(Some(&"".into()), "a1", true), "");
    }

    #[test]
    fn separator_only_after_links() {
        let text = TrustedHtml::from("Some findings.");
        let output = abstract_toggle(Some(&text), "a1", false);
        assert_eq!(output.matches(LINK_SEPARATOR).count(), 0);
        let output = abstract_toggle(Some(&text), "a1", true);
        assert_eq!(output.matches(LINK_SEPARATOR).count(), 1);
        assert!(output.trim_start().starts_with(LINK_SEPARATOR));
    }

    #[test]
    fn anchored_by_id() {
        let text = TrustedHtml::from("Some findings.");
        let output = abstract_toggle(Some(&text), "jp-3", false);
        assert!(output.contains(r##"href="#abstract-jp-3""##));
        assert!(output.contains(r#"aria-controls="abstract-jp-3""#));
        assert!(output.contains(r#"<div class="collapse" id="abstract-jp-3">"#));
        assert!(output.contains(r#"<div class="card card-body">Some findings.</div>"#));
    }

    #[test]
    fn markup_passed_through() {
        let text = TrustedHtml::from("We find <em>large</em> effects &amp; more.");
        let output = abstract_toggle(Some(&text), "a1", false);
        assert!(output.contains("We find <em>large</em> effects &amp; more."));
    }
}
