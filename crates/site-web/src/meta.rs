use std::collections::BTreeMap;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// One head entry attached to a page.
///
/// Serialises as `{ "title": .. }` or `{ "name": .., "content": .. }`,
/// the same shape the router hands to the document head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaEntry {
    Title { title: String },
    Named { name: String, content: String },
}

impl MetaEntry {
    pub fn title(title: impl Into<String>) -> Self {
        Self::Title {
            title: title.into(),
        }
    }

    pub fn named(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            content: content.into(),
        }
    }

    /// True when every text field carried by the entry is non-empty.
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Title { title } => !title.is_empty(),
            Self::Named { name, content } => !name.is_empty() && !content.is_empty(),
        }
    }
}

/// Route-match arguments offered to a page's metadata function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaArgs {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl MetaArgs {
    pub fn from_query(path: impl Into<String>, params: BTreeMap<String, String>) -> Self {
        Self {
            path: path.into(),
            params,
        }
    }

    /// Build the arguments from the current router location.
    /// Only `path` is filled; `params` stays empty since no page reads it.
    /// Must be called inside a `<Router>`.
    pub fn from_router() -> Self {
        let location = leptos_router::hooks::use_location();
        Self {
            path: location.pathname.get_untracked(),
            params: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_shape() {
        let json = serde_json::to_value(MetaEntry::title("Home")).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "Home" }));
    }

    #[test]
    fn test_named_shape() {
        let json = serde_json::to_value(MetaEntry::named("description", "Hi")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "description", "content": "Hi" })
        );
    }

    #[test]
    fn test_untagged_parse() {
        let entries: Vec<MetaEntry> = serde_json::from_str(
            r#"[{ "title": "A" }, { "name": "b", "content": "c" }]"#,
        )
        .unwrap();
        assert_eq!(entries, vec![MetaEntry::title("A"), MetaEntry::named("b", "c")]);
    }

    #[test]
    fn test_is_complete() {
        assert!(MetaEntry::title("A").is_complete());
        assert!(!MetaEntry::title("").is_complete());
        assert!(!MetaEntry::named("b", "").is_complete());
        assert!(!MetaEntry::named("", "c").is_complete());
    }

    #[test]
    fn test_args_defaults() {
        let args: MetaArgs = serde_json::from_str("{}").unwrap();
        assert_eq!(args, MetaArgs::default());

        let mut params = BTreeMap::new();
        params.insert("id".to_string(), "7".to_string());
        let args = MetaArgs::from_query("/preview", params);
        assert_eq!(args.path, "/preview");
        assert_eq!(args.params.get("id").map(String::as_str), Some("7"));
    }
}
