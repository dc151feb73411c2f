use crate::vnode::ClassValue;

/// Resolves a `class` attribute value into the string that should be
/// written to the `class=""` attribute, or `None` if nothing should be
/// emitted at all (an empty string still counts as present for a plain
/// `Str`, but an empty map resolves to `None`).
pub fn resolve_class(value: &ClassValue) -> Option<String> {
    match value {
        ClassValue::Str(s) => Some(s.to_string()),
        ClassValue::Map(map) => {
            let joined = map
                .iter()
                .filter(|(_, &enabled)| enabled)
                .map(|(name, _)| name.as_ref())
                .collect::<Vec<_>>()
                .join(" ");
            if joined.is_empty() {
                None
            } else {
                Some(joined)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use indexmap::IndexMap;

    #[test]
    fn plain_string_passes_through() {
        assert_eq!(
            resolve_class(&ClassValue::Str(Cow::Borrowed("a b"))),
            Some("a b".to_string())
        );
    }

    #[test]
    fn map_keeps_only_enabled_classes_in_insertion_order() {
        let mut map = IndexMap::new();
        map.insert(Cow::Borrowed("active"), true);
        map.insert(Cow::Borrowed("disabled"), false);
        map.insert(Cow::Borrowed("highlight"), true);
        assert_eq!(
            resolve_class(&ClassValue::Map(map)),
            Some("active highlight".to_string())
        );
    }

    #[test]
    fn map_with_nothing_enabled_resolves_to_none() {
        let mut map = IndexMap::new();
        map.insert(Cow::Borrowed("disabled"), false);
        assert_eq!(resolve_class(&ClassValue::Map(map)), None);
    }
}
