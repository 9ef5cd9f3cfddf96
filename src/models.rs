use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A starred repository snapshot, as exported to the data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name_with_owner: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Primary language label; empty means unknown.
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    pub url: String,
    pub stargazer_count: u64,
    #[serde(default)]
    pub fork_count: u64,
    pub pushed_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// When the viewing user starred the repository.
    pub starred_at: DateTime<Utc>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics: Vec<String>,
}

impl Repository {
    /// Text the fuzzy matcher runs against: owner/name, description, topics.
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {}",
            self.name_with_owner,
            self.description,
            self.topics.join(" ")
        )
    }
}

/// GitHub exports write `null` for missing descriptions, languages and topics.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Result ordering used when no text query is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Stars,
    Pushed,
    Starred,
    Name,
}

impl SortKey {
    /// Map a request value to a sort key. Unknown and empty values fall back
    /// to `Starred`.
    pub fn parse(value: &str) -> Self {
        match value {
            "stars" => SortKey::Stars,
            "pushed" => SortKey::Pushed,
            "name" => SortKey::Name,
            _ => SortKey::Starred,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Stars => "stars",
            SortKey::Pushed => "pushed",
            SortKey::Starred => "starred",
            SortKey::Name => "name",
        }
    }
}

/// Query string of `GET /search`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub q: String,
    pub lang: String,
    pub sort: String,
}

impl SearchParams {
    /// Pick `q`, `lang` and `sort` out of decoded query pairs. A repeated
    /// key keeps its first value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut q = None;
        let mut lang = None;
        let mut sort = None;
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut q,
                "lang" => &mut lang,
                "sort" => &mut sort,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        Self {
            q: q.unwrap_or_default(),
            lang: lang.unwrap_or_default(),
            sort: sort.unwrap_or_default(),
        }
    }
}

/// Outcome of one query, echoed back to the results template.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub repos: Vec<Repository>,
    pub query: String,
    pub language: String,
    pub sort: String,
    pub total_count: usize,
}
