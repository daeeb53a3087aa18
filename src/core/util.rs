//! Generic utilities used across core modules.

/// Filter items by case-insensitive substring match on one string field.
/// Returns all items when query is empty.
pub fn filter_by_query<'a, T, F>(items: &'a [T], query: &str, get_field: F) -> Vec<&'a T>
where
    F: Fn(&'a T) -> &'a str,
{
    if query.is_empty() {
        return items.iter().collect();
    }
    let q = query.to_lowercase();
    items
        .iter()
        .filter(|item| get_field(*item).to_lowercase().contains(&q))
        .collect()
}
