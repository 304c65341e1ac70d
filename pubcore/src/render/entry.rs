use crate::{
    model::{
        JournalEntry,
        WorkingEntry,
    },
    render::{
        Position,
        abstract_toggle,
        link_list,
    },
};

/// The citation line of a journal publication, e.g.
/// `Smith, J., 2020. <b>X</b>. <i>Econometrica</i> (88(1))`.
pub fn citation(entry: &JournalEntry) -> String {
    let mut citation = entry.authors.clone();
    match entry.year() {
        Some(year) => citation.push_str(&format!(", {year}.")),
        None => citation.push(','),
    }
    citation.push_str(&format!(" <b>{}</b>", entry.title));
    if let Some(journal) = entry.journal() {
        citation.push_str(&format!(". <i>{journal}</i>"));
        if let Some(info) = entry.journal_info() {
            citation.push_str(&format!(" ({info})"));
        }
    }
    citation
}

/// The title line of a working paper, with coauthors in parentheses.
pub fn working_title(entry: &WorkingEntry) -> String {
    match entry.coauthors() {
        Some(coauthors) => format!("{} ({coauthors})", entry.title),
        None => entry.title.clone(),
    }
}

/// Renders a journal publication as a list item.  The links line is
/// always present, even when it ends up empty.
pub fn journal_entry(entry: &JournalEntry, position: Position) -> String {
    let citation = citation(entry);
    let links = link_list(entry.links.as_ref(), &entry.id);
    let r#abstract = abstract_toggle(entry.abstract_html(), &entry.id, !links.is_empty());
    format!(r#"
      <li>
        {citation}
        <br>
        <span class="paper-links">
          {links}{body}
        </span>
      </li>
      {divider}"#,
        body = r#abstract,
        divider = position.divider(),
    )
}

/// Renders a working paper as a list item.  Unlike journal entries the
/// links line is dropped entirely if there is nothing to put in it.
pub fn working_entry(entry: &WorkingEntry, position: Position) -> String {
    let title = working_title(entry);
    let links = link_list(entry.links.as_ref(), &entry.id);
    let r#abstract = abstract_toggle(entry.abstract_html(), &entry.id, !links.is_empty());
    let links_line = if links.is_empty() && r#abstract.is_empty() {
        String::new()
    } else {
        format!(r#"<br><span class="paper-links">{links}{body}</span>"#, body = r#abstract)
    };
    format!(r#"
      <li>
        {title}
        {links_line}
      </li>
      {divider}"#,
        divider = position.divider(),
    )
}
