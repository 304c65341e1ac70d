use crate::{
    model::{
        LinkKind,
        LinkSet,
    },
    render::LINK_SEPARATOR,
};

fn link_item(kind: LinkKind, url: &str) -> String {
    let style = kind.icon_color()
        .map(|color| format!(r#" style="color:{color}""#))
        .unwrap_or_default();
    format!(
        r#"<span class="paper-link"><i class="{icon}"{style}></i> <a href="{url}" target="_blank">{label}</a></span>"#,
        icon = kind.icon(),
        label = kind.label(),
    )
}

/// Renders the links that are set as inline icon and label anchors, in
/// the fixed priority order of `LinkKind::ALL`.
///
/// Returns an empty string if no link is set; callers rely on this to
/// decide whether anything follows needs a separator.  The entry id is
/// currently unused.
pub fn link_list(links: Option<&LinkSet>, _id: &str) -> String {
    let Some(links) = links else {
        return String::new();
    };
    links.iter()
        .map(|(kind, url)| link_item(kind, url))
        .collect::<Vec<_>>()
        .join(LINK_SEPARATOR)
}
