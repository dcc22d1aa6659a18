pub mod profile;
pub mod role;

use serde::{Deserialize, Deserializer};

/// Accepts either a JSON list or a comma-delimited string (the seed-data form).
#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrDelimited {
    List(Vec<String>),
    Delimited(String),
}

/// Splits a comma-delimited field, trimming entries and dropping empty ones.
pub fn split_delimited(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<ListOrDelimited>::deserialize(deserializer)?;
    Ok(match raw {
        Some(ListOrDelimited::List(items)) => items
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(ListOrDelimited::Delimited(s)) => split_delimited(&s),
        None => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_delimited_trims_and_drops_empty() {
        assert_eq!(
            split_delimited("Python, SQL,,Git "),
            vec!["Python".to_string(), "SQL".to_string(), "Git".to_string()]
        );
        assert!(split_delimited("").is_empty());
    }
}
