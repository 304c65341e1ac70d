use std::collections::BTreeMap;

/// The containers of a page that rendered listings are written into.
///
/// A container that is not present is skipped, which is not an error.
pub trait Page {
    fn has_container(&self, id: &str) -> bool;
    /// Replaces the entire content of the container.
    fn set_content(&mut self, id: &str, html: String);
}

/// An in-memory page with a fixed set of containers, holding whatever
/// was rendered into them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fragments {
    containers: BTreeMap<String, Option<String>>,
}

mod impls;
