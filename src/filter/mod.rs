//! Tag filtering and grouping over tagged collections

use indexmap::IndexMap;
use serde::Serialize;

/// Anything carrying an ordered list of tags
pub trait Tagged {
    fn tags(&self) -> &[String];

    /// Whether the item takes part in tag grouping
    fn show_tags(&self) -> bool {
        true
    }

    fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }
}

/// Items sharing the same intersection with the selected tags
#[derive(Debug, Serialize)]
pub struct TagGroup<'a, T> {
    /// Sorted matching tags joined by `", "`
    pub key: String,
    /// Fragment id for linking to the group
    pub anchor: String,
    pub items: Vec<&'a T>,
}

/// Keep items carrying every selected tag
///
/// An empty selection keeps everything. Input order is preserved.
pub fn filter_by_tags<'a, T: Tagged>(items: &'a [T], selected: &[String]) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| selected.iter().all(|tag| item.has_tag(tag)))
        .collect()
}

/// Group items by which of the selected tags they carry
///
/// Groups appear in the order their first item was seen. Items with
/// `show_tags() == false` are left out.
pub fn group_by_tags<'a, T: Tagged>(
    items: &[&'a T],
    selected: &[String],
) -> Vec<TagGroup<'a, T>> {
    let mut groups: IndexMap<String, Vec<&'a T>> = IndexMap::new();

    for &item in items.iter().filter(|item| item.show_tags()) {
        let mut matching: Vec<&str> = item
            .tags()
            .iter()
            .filter(|tag| selected.contains(*tag))
            .map(String::as_str)
            .collect();
        matching.sort_unstable();
        matching.dedup();

        groups.entry(matching.join(", ")).or_default().push(item);
    }

    groups
        .into_iter()
        .map(|(key, items)| TagGroup {
            anchor: slug::slugify(&key),
            key,
            items,
        })
        .collect()
}

/// Flip a tag in the selection: add it when absent, remove it when present
pub fn toggle_tag(selected: &mut Vec<String>, tag: &str) {
    if let Some(pos) = selected.iter().position(|t| t == tag) {
        selected.remove(pos);
    } else {
        selected.push(tag.to_string());
    }
}

/// Split a comma separated tag list, dropping blanks
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        name: &'static str,
        tags: Vec<String>,
        show: bool,
    }

    impl Tagged for Item {
        fn tags(&self) -> &[String] {
            &self.tags
        }

        fn show_tags(&self) -> bool {
            self.show
        }
    }

    fn item(name: &'static str, tags: &[&str]) -> Item {
        Item {
            name,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            show: true,
        }
    }

    fn sel(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    fn names<T: std::ops::Deref<Target = Item>>(items: &[T]) -> Vec<&'static str> {
        items.iter().map(|i| i.name).collect()
    }

    #[test]
    fn test_filter_empty_selection_keeps_all() {
        let items = vec![item("a", &["x"]), item("b", &[])];
        assert_eq!(names(&filter_by_tags(&items, &[])), vec!["a", "b"]);
    }

    #[test]
    fn test_filter_is_and() {
        let items = vec![
            item("a", &["rust", "web"]),
            item("b", &["rust"]),
            item("c", &["web", "rust", "cli"]),
        ];
        assert_eq!(
            names(&filter_by_tags(&items, &sel(&["rust", "web"]))),
            vec!["a", "c"]
        );
        assert!(filter_by_tags(&items, &sel(&["go"])).is_empty());
    }

    #[test]
    fn test_group_by_intersection() {
        let items = vec![
            item("a", &["web", "rust"]),
            item("b", &["rust"]),
            item("c", &["rust", "web", "cli"]),
        ];
        let refs: Vec<&Item> = items.iter().collect();
        let groups = group_by_tags(&refs, &sel(&["web", "rust"]));

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "rust, web");
        assert_eq!(groups[0].anchor, "rust-web");
        assert_eq!(names(&groups[0].items), vec!["a", "c"]);
        assert_eq!(groups[1].key, "rust");
        assert_eq!(names(&groups[1].items), vec!["b"]);
    }

    #[test]
    fn test_group_skips_hidden_tags() {
        let mut hidden = item("hidden", &["rust"]);
        hidden.show = false;
        let items = vec![hidden, item("shown", &["rust"])];
        let refs: Vec<&Item> = items.iter().collect();
        let groups = group_by_tags(&refs, &sel(&["rust"]));
        assert_eq!(groups.len(), 1);
        assert_eq!(names(&groups[0].items), vec!["shown"]);
    }

    #[test]
    fn test_group_without_selection() {
        let items = vec![item("a", &["rust"])];
        let refs: Vec<&Item> = items.iter().collect();
        let groups = group_by_tags(&refs, &[]);
        assert_eq!(groups[0].key, "");
        assert_eq!(names(&groups[0].items), vec!["a"]);
    }

    #[test]
    fn test_toggle_tag() {
        let mut selected = sel(&["rust"]);
        toggle_tag(&mut selected, "web");
        assert_eq!(selected, sel(&["rust", "web"]));
        toggle_tag(&mut selected, "rust");
        assert_eq!(selected, sel(&["web"]));
    }

    #[test]
    fn test_parse_tag_list() {
        assert_eq!(parse_tag_list("rust, web,,  "), sel(&["rust", "web"]));
        assert!(parse_tag_list("").is_empty());
    }
}
