/// Fuzzy bookmark search: greedy subsequence filter, prefix-first ranking
use crate::bookmark::{Bookmark, MatchResult};
use crate::highlight::annotate;

/// Case-insensitive comparison of two characters
///
/// Characters whose lowercase form expands to several code points (e.g. 'İ')
/// only compare equal to characters with the same expansion.
pub(crate) fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Greedy subsequence test: the query cursor advances at the first name
/// character equal to the current query character and never backs up.
fn is_subsequence(query: &[char], name: &str) -> bool {
    let mut cursor = 0;

    for ch in name.chars() {
        if cursor == query.len() {
            break;
        }
        if same_letter(ch, query[cursor]) {
            cursor += 1;
        }
    }

    cursor == query.len()
}

/// Keep the bookmarks whose name is a case-insensitive subsequence match of `query`
///
/// An empty query returns every bookmark in its original order.
pub fn filter<'a>(query: &str, bookmarks: &'a [Bookmark]) -> Vec<&'a Bookmark> {
    if query.is_empty() {
        return bookmarks.iter().collect();
    }

    let query: Vec<char> = query.chars().collect();

    bookmarks
        .iter()
        .filter(|bookmark| is_subsequence(&query, &bookmark.name))
        .collect()
}

/// Move names that start with `query` ahead of the rest
///
/// This is a stable partition: within the prefix group and within the
/// remainder, the incoming order is kept.
pub fn rank<'a>(query: &str, mut filtered: Vec<&'a Bookmark>) -> Vec<&'a Bookmark> {
    let prefix = query.to_lowercase();

    filtered.sort_by_cached_key(|bookmark| !bookmark.name.to_lowercase().starts_with(&prefix));
    filtered
}

/// Full pipeline: filter, rank, then annotate each surviving name
pub fn search(query: &str, bookmarks: &[Bookmark]) -> Vec<MatchResult> {
    rank(query, filter(query, bookmarks))
        .into_iter()
        .map(|bookmark| MatchResult {
            bookmark: bookmark.clone(),
            annotated_name: annotate(&bookmark.name, query),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookmarks(names: &[&str]) -> Vec<Bookmark> {
        names
            .iter()
            .map(|name| Bookmark::new(*name, format!("https://{}.example", name.to_lowercase())))
            .collect()
    }

    fn names<'a>(results: impl IntoIterator<Item = &'a Bookmark>) -> Vec<&'a str> {
        results.into_iter().map(|b| b.name.as_str()).collect()
    }

    #[test]
    fn test_filter_empty_query_is_identity() {
        let list = bookmarks(&["Zed", "alpha", "Mid"]);

        let filtered = filter("", &list);

        assert_eq!(names(filtered), vec!["Zed", "alpha", "Mid"]);
    }

    #[test]
    fn test_filter_empty_list() {
        assert!(filter("abc", &[]).is_empty());
        assert!(search("", &[]).is_empty());
    }

    #[test]
    fn test_filter_single_letter_case_insensitive() {
        let list = bookmarks(&["Google", "GitHub", "Gmail"]);

        let filtered = filter("g", &list);

        assert_eq!(names(filtered), vec!["Google", "GitHub", "Gmail"]);
    }

    #[test]
    fn test_filter_requires_order() {
        let list = bookmarks(&["Amazon", "eBay"]);

        assert_eq!(names(filter("ay", &list)), vec!["eBay"]);
        assert!(filter("ya", &list).is_empty());
    }

    #[test]
    fn test_filter_no_match() {
        let list = bookmarks(&["abc"]);

        assert!(filter("xyz", &list).is_empty());
    }

    #[test]
    fn test_filter_query_longer_than_name() {
        let list = bookmarks(&["Go"]);

        assert!(filter("gol", &list).is_empty());
        assert_eq!(names(filter("GO", &list)), vec!["Go"]);
    }

    #[test]
    fn test_filter_repeated_letters_need_repeated_matches() {
        let list = bookmarks(&["Hacker News", "Hulu"]);

        assert_eq!(names(filter("hh", &list)), Vec::<&str>::new());
        assert_eq!(names(filter("hn", &list)), vec!["Hacker News"]);
    }

    #[test]
    fn test_filter_non_ascii() {
        let list = bookmarks(&["École", "Ecosia"]);

        assert_eq!(names(filter("éco", &list)), vec!["École"]);
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let list = bookmarks(&["b", "a"]);
        let before = list.clone();

        let _ = search("a", &list);

        assert_eq!(list, before);
    }

    #[test]
    fn test_rank_prefix_matches_first() {
        let list = bookmarks(&["Rust Docs", "Crates", "rustup", "Trust"]);

        let ranked = rank("rust", filter("rust", &list));

        assert_eq!(names(ranked), vec!["Rust Docs", "rustup", "Trust"]);
    }

    #[test]
    fn test_rank_is_stable_within_groups() {
        let list = bookmarks(&["xab", "ab2", "yab", "AB1", "zab"]);

        let ranked = rank("ab", list.iter().collect());

        assert_eq!(names(ranked), vec!["ab2", "AB1", "xab", "yab", "zab"]);
    }

    #[test]
    fn test_rank_all_prefix_keeps_order() {
        let list = bookmarks(&["Google", "GitHub", "Gmail"]);

        let ranked = rank("g", filter("g", &list));

        assert_eq!(names(ranked), vec!["Google", "GitHub", "Gmail"]);
    }

    #[test]
    fn test_rank_empty_query_keeps_order() {
        let list = bookmarks(&["b", "a", "c"]);

        assert_eq!(names(rank("", list.iter().collect())), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_search_pipeline() {
        let list = vec![
            Bookmark::new("Amazon", "https://amazon.com"),
            Bookmark::new("eBay", "https://ebay.com"),
        ];

        let results = search("ay", &list);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].bookmark, Bookmark::new("eBay", "https://ebay.com"));
        let tags: Vec<bool> = results[0].annotated_name.iter().map(|c| c.is_match).collect();
        assert_eq!(tags, vec![false, false, true, true]);
    }

    #[test]
    fn test_search_ranks_and_annotates() {
        let list = bookmarks(&["My GitHub", "GitLab", "Gmail"]);

        let results = search("gi", &list);

        let result_names: Vec<&str> = results.iter().map(|r| r.bookmark.name.as_str()).collect();
        assert_eq!(result_names, vec!["GitLab", "My GitHub", "Gmail"]);
        assert_eq!(results[1].annotated_name.len(), "My GitHub".chars().count());
    }
}
