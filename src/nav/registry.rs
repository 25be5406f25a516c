use std::collections::BTreeMap;

use thiserror::Error;

/// Handles for one view: the nav link that targets it and the section that
/// renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageEntry<H> {
    pub link: H,
    pub section: H,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("nav link targets '{0}' but no page section has that id")]
    MissingSection(String),
    #[error("page section '{0}' has no nav link pointing at it")]
    MissingLink(String),
    #[error("page id '{0}' appears on more than one nav link")]
    DuplicateLink(String),
}

/// Explicit id -> handles map, built once at startup.
///
/// Replaces per-call attribute discovery: every switch resolves its target
/// against this map, and completeness is checked when the map is built.
#[derive(Debug)]
pub struct PageRegistry<H> {
    entries: BTreeMap<String, PageEntry<H>>,
    /// Page ids in nav-link DOM order, for keyboard adjacency.
    order: Vec<String>,
}

impl<H> PageRegistry<H> {
    /// Pairs nav links (id from `data-page`) with sections (id from the
    /// element id), keeping link DOM order. Defective pairs are dropped and
    /// reported; the valid subset still works.
    pub fn build(
        links: Vec<(String, H)>,
        sections: Vec<(String, H)>,
    ) -> (Self, Vec<RegistryError>) {
        let mut errors = Vec::new();
        let mut sections: BTreeMap<String, H> = sections.into_iter().collect();
        let mut entries = BTreeMap::new();
        let mut order = Vec::new();

        for (id, link) in links {
            if entries.contains_key(&id) {
                errors.push(RegistryError::DuplicateLink(id));
                continue;
            }
            match sections.remove(&id) {
                Some(section) => {
                    order.push(id.clone());
                    entries.insert(id, PageEntry { link, section });
                }
                None => errors.push(RegistryError::MissingSection(id)),
            }
        }

        // Whatever is left over never had a link.
        errors.extend(sections.into_keys().map(RegistryError::MissingLink));

        (Self { entries, order }, errors)
    }

    pub fn get(&self, id: &str) -> Option<&PageEntry<H>> {
        self.entries.get(id)
    }

    /// Page ids in nav-link DOM order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Entries in nav-link DOM order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &PageEntry<H>)> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id).map(|entry| (id.as_str(), entry)))
    }

    pub fn id_at(&self, index: usize) -> Option<&str> {
        self.order.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(ids: &[&str], prefix: &str) -> Vec<(String, String)> {
        ids.iter()
            .map(|id| (id.to_string(), format!("{prefix}:{id}")))
            .collect()
    }

    #[test]
    fn complete_input_builds_without_errors() {
        let (registry, errors) = PageRegistry::build(
            pairs(&["home", "features", "about"], "link"),
            pairs(&["about", "home", "features"], "section"),
        );

        assert_eq!(errors, vec![]);
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.get("features"),
            Some(&PageEntry {
                link: "link:features".to_string(),
                section: "section:features".to_string(),
            })
        );
    }

    #[test]
    fn order_follows_links_not_sections() {
        let (registry, _) = PageRegistry::build(
            pairs(&["home", "features", "about"], "link"),
            pairs(&["about", "home", "features"], "section"),
        );

        let ids: Vec<&str> = registry.ids().collect();
        assert_eq!(ids, vec!["home", "features", "about"]);
        assert_eq!(registry.id_at(1), Some("features"));
        assert_eq!(registry.id_at(3), None);
    }

    #[test]
    fn link_without_section_is_reported_and_dropped() {
        let (registry, errors) = PageRegistry::build(
            pairs(&["home", "ghost"], "link"),
            pairs(&["home"], "section"),
        );

        assert_eq!(errors, vec![RegistryError::MissingSection("ghost".into())]);
        assert_eq!(registry.len(), 1);
        assert!(registry.get("ghost").is_none());
    }

    #[test]
    fn section_without_link_is_reported() {
        let (registry, errors) = PageRegistry::build(
            pairs(&["home"], "link"),
            pairs(&["home", "orphan"], "section"),
        );

        assert_eq!(errors, vec![RegistryError::MissingLink("orphan".into())]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_link_keeps_the_first() {
        let links = vec![
            ("home".to_string(), "first".to_string()),
            ("home".to_string(), "second".to_string()),
        ];
        let (registry, errors) = PageRegistry::build(links, pairs(&["home"], "section"));

        assert_eq!(errors, vec![RegistryError::DuplicateLink("home".into())]);
        assert_eq!(registry.get("home").unwrap().link, "first");
    }

    #[test]
    fn unknown_id_resolves_to_none() {
        let (registry, _) =
            PageRegistry::build(pairs(&["home"], "link"), pairs(&["home"], "section"));
        assert!(registry.get("pricing").is_none());
    }
}
