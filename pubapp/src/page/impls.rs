use crate::page::{
    Fragments,
    Page,
};

impl Fragments {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            containers: ids.into_iter()
                .map(|id| (id.into(), None))
                .collect(),
        }
    }

    /// The content of the container, if it was ever written to.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.containers.get(id)?.as_deref()
    }

    /// Containers that were written to, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.containers.iter()
            .filter_map(|(id, html)| Some((id.as_str(), html.as_deref()?)))
    }

    pub fn is_untouched(&self) -> bool {
        self.containers.values().all(Option::is_none)
    }
}

impl Page for Fragments {
    fn has_container(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    fn set_content(&mut self, id: &str, html: String) {
        if let Some(content) = self.containers.get_mut(id) {
            *content = Some(html);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_known_containers() {
        let mut page = Fragments::new(["journal"]);
        assert!(page.is_untouched());
        assert!(page.has_container("journal"));
        assert!(!page.has_container("working"));

        page.set_content("working", "<li>ignored</li>".to_string());
        assert!(page.is_untouched());
        assert_eq!(page.get("working"), None);

        page.set_content("journal", "<li>kept</li>".to_string());
        assert_eq!(page.get("journal"), Some("<li>kept</li>"));
        assert_eq!(page.iter().collect::<Vec<_>>(), [("journal", "<li>kept</li>")]);
    }
}
