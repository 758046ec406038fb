use newtab_bookmarks::{Bookmark, annotate, filter, rank, search};
use newtab_bookmarks::highlight::matched_text;
use proptest::prelude::*;

/// Reference subsequence check on ASCII input
fn is_subsequence(query: &str, name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    let mut rest = name.chars();
    query
        .to_ascii_lowercase()
        .chars()
        .all(|q| rest.any(|c| c == q))
}

fn bookmark_list() -> impl Strategy<Value = Vec<Bookmark>> {
    prop::collection::vec("[a-zA-Z ]{0,12}", 0..12).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Bookmark::new(name, format!("https://site{}.example", i)))
            .collect()
    })
}

proptest! {
    #[test]
    fn empty_query_is_identity(bookmarks in bookmark_list()) {
        let filtered: Vec<Bookmark> = filter("", &bookmarks).into_iter().cloned().collect();
        prop_assert_eq!(filtered, bookmarks);
    }

    #[test]
    fn filter_keeps_exactly_the_subsequence_matches(
        query in "[a-zA-Z]{1,4}",
        bookmarks in bookmark_list(),
    ) {
        let filtered = filter(&query, &bookmarks);

        for bookmark in &bookmarks {
            let kept = filtered.iter().any(|b| std::ptr::eq(*b, bookmark));
            prop_assert_eq!(kept, is_subsequence(&query, &bookmark.name), "name {:?}", bookmark.name);
        }
    }

    #[test]
    fn rank_puts_prefix_matches_first_and_is_stable(
        query in "[a-zA-Z]{0,3}",
        bookmarks in bookmark_list(),
    ) {
        let filtered = filter(&query, &bookmarks);
        let ranked = rank(&query, filtered.clone());
        let lowered = query.to_lowercase();
        let is_prefix = |name: &str| name.to_lowercase().starts_with(&lowered);

        prop_assert_eq!(ranked.len(), filtered.len());

        let split = ranked.iter().take_while(|b| is_prefix(&b.name)).count();
        prop_assert!(ranked[split..].iter().all(|b| !is_prefix(&b.name)));

        let expected: Vec<&Bookmark> = filtered
            .iter()
            .copied()
            .filter(|b| is_prefix(&b.name))
            .chain(filtered.iter().copied().filter(|b| !is_prefix(&b.name)))
            .collect();
        prop_assert_eq!(ranked, expected);
    }

    #[test]
    fn annotation_covers_every_char(name in "\\PC{0,16}", query in "\\PC{0,4}") {
        let annotated = annotate(&name, &query);

        prop_assert_eq!(annotated.len(), name.chars().count());
        let rebuilt: String = annotated.iter().map(|c| c.ch).collect();
        prop_assert_eq!(rebuilt, name);
        prop_assert!(matched_text(&annotated).chars().count() <= query.chars().count());
    }

    #[test]
    fn search_results_spell_out_the_query(
        query in "[a-z]{1,4}",
        bookmarks in bookmark_list(),
    ) {
        for result in search(&query, &bookmarks) {
            let matched = matched_text(&result.annotated_name).to_lowercase();
            prop_assert_eq!(matched, query.clone());
        }
    }
}

#[test]
fn documented_examples() {
    let list = vec![
        Bookmark::new("Google", "https://google.com"),
        Bookmark::new("GitHub", "https://github.com"),
        Bookmark::new("Gmail", "https://mail.google.com"),
    ];
    let names: Vec<String> = search("g", &list).into_iter().map(|r| r.bookmark.name).collect();
    assert_eq!(names, vec!["Google", "GitHub", "Gmail"]);

    let list = vec![
        Bookmark::new("Amazon", "https://amazon.com"),
        Bookmark::new("eBay", "https://ebay.com"),
    ];
    let names: Vec<String> = search("ay", &list).into_iter().map(|r| r.bookmark.name).collect();
    assert_eq!(names, vec!["eBay"]);

    assert!(search("xyz", &[Bookmark::new("abc", "https://abc.example")]).is_empty());

    let tags: Vec<bool> = annotate("GitHub", "gh").iter().map(|c| c.is_match).collect();
    assert_eq!(tags, vec![true, false, false, true, false, false]);
}
