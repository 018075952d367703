use indexmap::IndexMap;
use std::hash::Hash;

/// First key (in insertion order) whose value equals `value`.
pub fn get_map_key<'a, K, V>(map: &'a IndexMap<K, V>, value: &V) -> Option<&'a K>
where
    V: PartialEq,
{
    map.iter().find(|(_, v)| *v == value).map(|(k, _)| k)
}

/// Keys whose value contains `partial`.
pub fn get_map_keys<'a, K, V>(map: &'a IndexMap<K, V>, partial: &str) -> Vec<&'a K>
where
    V: AsRef<str>,
{
    map.iter()
        .filter(|(_, v)| v.as_ref().contains(partial))
        .map(|(k, _)| k)
        .collect()
}

/// Values that contain `partial`.
pub fn search_map_values<'a, K, V>(map: &'a IndexMap<K, V>, partial: &str) -> Vec<&'a str>
where
    V: AsRef<str>,
{
    map.values()
        .filter_map(|v| {
            let v: &str = v.as_ref();
            v.contains(partial).then_some(v)
        })
        .collect()
}

/// Group items by key. Groups keep the order in which their key was first
/// seen, items keep their input order.
///
/// ```
/// use recase::group_by;
///
/// let groups = group_by(vec![("John", 30), ("Jane", 25), ("Doe", 30)], |(_, age)| *age);
/// assert_eq!(groups[&30], vec![("John", 30), ("Doe", 30)]);
/// assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![30, 25]);
/// ```
pub fn group_by<I, K, F>(items: I, mut key: F) -> IndexMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
{
    let mut groups: IndexMap<K, Vec<I::Item>> = IndexMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}
