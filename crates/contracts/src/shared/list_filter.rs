//! Keyword filtering for in-memory lists (role list, dashboard list, ...)

/// Types that can be matched against a search keyword
pub trait Searchable {
    /// Returns true when the item matches `keywords`.
    ///
    /// `keywords` arrives already trimmed and non-empty.
    fn matches_filter(&self, keywords: &str) -> bool;
}

/// Filters `items` by `keywords`.
///
/// A blank query keeps the whole list, otherwise the trimmed query is passed
/// to [`Searchable::matches_filter`].
pub fn filter_list<T: Searchable + Clone>(items: &[T], keywords: &str) -> Vec<T> {
    filter_by(items, keywords, |keywords, item| item.matches_filter(keywords))
}

/// Same as [`filter_list`] with an ad-hoc predicate instead of the trait.
pub fn filter_by<T, F>(items: &[T], keywords: &str, predicate: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&str, &T) -> bool,
{
    let keywords = keywords.trim();
    if keywords.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| predicate(keywords, *item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Named(&'static str);

    impl Searchable for Named {
        fn matches_filter(&self, keywords: &str) -> bool {
            self.0.contains(keywords)
        }
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        let items = vec![Named("Admin"), Named("Viewer")];
        assert_eq!(filter_list(&items, ""), items);
        assert_eq!(filter_list(&items, "   "), items);
    }

    #[test]
    fn test_query_is_trimmed() {
        let items = vec![Named("Admin"), Named("Viewer")];
        assert_eq!(filter_list(&items, "  dmi "), vec![Named("Admin")]);
    }

    #[test]
    fn test_filter_by_predicate() {
        let items = vec![1, 12, 23, 5];
        let found = filter_by(&items, "2", |k, n| n.to_string().contains(k));
        assert_eq!(found, vec![12, 23]);
    }
}
