use crate::models::{Repository, SearchResult, SortKey};
use crate::search::fuzzy::find_matches;

/// Filter, match and order `repos` for one request.
///
/// Pipeline:
/// 1. Keep only `language` (exact, case-sensitive) when it is non-empty.
/// 2. When `query` is non-empty, keep fuzzy matches of the searchable text,
///    best match first.
/// 3. Without a query, order by `sort` (stable; unknown keys sort by
///    starred time). Relevance order is never re-sorted.
pub fn search(repos: &[Repository], query: &str, language: &str, sort: &str) -> SearchResult {
    let mut filtered: Vec<&Repository> = repos
        .iter()
        .filter(|r| language.is_empty() || r.language == language)
        .collect();

    if query.is_empty() {
        sort_repos(&mut filtered, SortKey::parse(sort));
    } else {
        let texts: Vec<String> = filtered.iter().map(|r| r.searchable_text()).collect();
        filtered = find_matches(query, &texts)
            .into_iter()
            .map(|m| filtered[m.index])
            .collect();
    }

    tracing::debug!(
        query,
        language,
        sort,
        matches = filtered.len(),
        "search"
    );

    let repos: Vec<Repository> = filtered.into_iter().cloned().collect();
    SearchResult {
        total_count: repos.len(),
        repos,
        query: query.to_string(),
        language: language.to_string(),
        sort: sort.to_string(),
    }
}

fn sort_repos(repos: &mut [&Repository], key: SortKey) {
    match key {
        SortKey::Stars => repos.sort_by(|a, b| b.stargazer_count.cmp(&a.stargazer_count)),
        SortKey::Pushed => repos.sort_by(|a, b| b.pushed_at.cmp(&a.pushed_at)),
        SortKey::Starred => repos.sort_by(|a, b| b.starred_at.cmp(&a.starred_at)),
        SortKey::Name => repos.sort_by(|a, b| a.name_with_owner.cmp(&b.name_with_owner)),
    }
}
