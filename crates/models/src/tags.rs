use std::collections::BTreeSet;

/// Merges comma-separated tag columns into one sorted list without duplicates or blanks
pub fn collect_tags<'a>(columns: impl IntoIterator<Item = Option<&'a str>>) -> Vec<String> {
    columns
        .into_iter()
        .flatten()
        .flat_map(|tags| tags.split(','))
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
