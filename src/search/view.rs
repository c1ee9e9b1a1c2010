use crate::search::item::ResultItem;

/// Items whose title contains `term`, ignoring case.
///
/// An empty term shows nothing. Cheap enough to recompute on every frame.
pub fn filter_items<'a>(items: &'a [ResultItem], term: &str) -> Vec<&'a ResultItem> {
    if term.is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.title.to_lowercase().contains(&needle))
        .collect()
}
