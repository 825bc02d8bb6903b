//! Text rendering of optional values, lists and groups.

use std::collections::BTreeMap;
use std::fmt::Display;

/// `Some(EUR 7.5)` or `None`.
pub fn option<T: Display>(value: Option<&T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| format!("Some({v})"))
}

/// `[USD 42, USD 7]`.
pub fn list<T: Display>(items: &[T]) -> String {
    let joined: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", joined.join(", "))
}

/// `{EUR=[EUR 2], USD=[USD 42, USD 7]}`.
pub fn groups<K: Display, V: Display>(groups: &BTreeMap<K, Vec<V>>) -> String {
    let entries: Vec<String> = groups
        .iter()
        .map(|(key, values)| format!("{key}={}", list(values)))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option() {
        assert_eq!(option(Some(&7.5_f64)), "Some(7.5)");
        assert_eq!(option::<u8>(None), "None");
    }

    #[test]
    fn test_list_and_groups() {
        assert_eq!(list::<u8>(&[]), "[]");
        assert_eq!(list(&[1, 2]), "[1, 2]");

        let mut map = BTreeMap::new();
        map.insert("b", vec![2]);
        map.insert("a", vec![1, 3]);
        assert_eq!(groups(&map), "{a=[1, 3], b=[2]}");
    }
}
