//! Raw dictionary documents.
//!
//! A document is a JSON object with a single root label. Its value is either
//! the `key -> transcription` mapping itself or a list whose first element is
//! that mapping:
//!
//! ```json
//! { "en_US": [ { "hello": "/həˈɫoʊ/", "with": "/ˈwɪð/, /ˈwɪθ/" } ] }
//! ```
//!
//! Entries whose value is not a string are skipped. Entries are yielded in
//! document order so later duplicates overwrite earlier ones.
use std::fmt;
use std::io::Read;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

/// One string-valued entry, exactly as written in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Default)]
pub struct RawDocument {
    /// Label of the root object, usually the language code.
    pub label: String,
    pub entries: Vec<RawEntry>,
    /// Count of entries dropped because their value was not a string.
    pub skipped: usize,
}

impl RawDocument {
    pub fn from_reader<R: Read>(reader: R) -> Result<RawDocument, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<RawDocument, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

impl<'de> Deserialize<'de> for RawDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = RawDocument;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object with a single root label")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawDocument, A::Error> {
        let (label, body) = map
            .next_entry::<String, Body>()?
            .ok_or_else(|| {
                <A::Error as de::Error>::custom("dictionary document has no root label")
            })?;

        // Only the first root label is used.
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}

        Ok(RawDocument {
            label,
            entries: body.entries,
            skipped: body.skipped,
        })
    }
}

/// The mapping under the root label, unwrapped from a list if necessary.
#[derive(Default)]
struct Body {
    entries: Vec<RawEntry>,
    skipped: usize,
}

impl<'de> Deserialize<'de> for Body {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BodyVisitor { nested: false })
    }
}

struct BodyVisitor {
    nested: bool,
}

impl<'de> Visitor<'de> for BodyVisitor {
    type Value = Body;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.nested {
            f.write_str("a mapping of keys to transcriptions")
        } else {
            f.write_str("a mapping of keys to transcriptions, or a list containing one")
        }
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Body, A::Error> {
        let mut body = Body::default();

        while let Some(key) = map.next_key::<String>()? {
            match map.next_value::<EntryValue>()? {
                EntryValue::Text(value) => body.entries.push(RawEntry { key, value }),
                EntryValue::Other(_) => body.skipped += 1,
            }
        }

        Ok(body)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Body, A::Error> {
        if self.nested {
            return Err(de::Error::invalid_type(de::Unexpected::Seq, &self));
        }

        let body = seq
            .next_element_seed(NestedBody)?
            .ok_or_else(|| <A::Error as de::Error>::invalid_length(0, &self))?;

        while seq.next_element::<IgnoredAny>()?.is_some() {}

        Ok(body)
    }
}

struct NestedBody;

impl<'de> de::DeserializeSeed<'de> for NestedBody {
    type Value = Body;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Body, D::Error> {
        deserializer.deserialize_map(BodyVisitor { nested: true })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
#[allow(dead_code)]
enum EntryValue {
    Text(String),
    Other(IgnoredAny),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(document: &str) -> Result<RawDocument, serde_json::Error> {
        RawDocument::from_slice(document.as_bytes())
    }

    fn entry(key: &str, value: &str) -> RawEntry {
        RawEntry {
            key: key.into(),
            value: value.into(),
        }
    }

    #[test]
    fn flat_mapping() {
        let doc = parse(r#"{"de": {"Hund": "/hʊnt/", "Katze": "/ˈkatsə/"}}"#).unwrap();
        assert_eq!(doc.label, "de");
        assert_eq!(
            doc.entries,
            vec![entry("Hund", "/hʊnt/"), entry("Katze", "/ˈkatsə/")]
        );
        assert_eq!(doc.skipped, 0);
    }

    #[test]
    fn wrapped_mapping() {
        let doc = parse(r#"{"en_US": [{"with": "/ˈwɪð/, /ˈwɪθ/"}]}"#).unwrap();
        assert_eq!(doc.label, "en_US");
        assert_eq!(doc.entries, vec![entry("with", "/ˈwɪð/, /ˈwɪθ/")]);
    }

    #[test]
    fn keeps_document_order() {
        let doc = parse(r#"{"x": {"b": "1", "a": "2", "b": "3"}}"#).unwrap();
        let keys = doc.entries.iter().map(|e| e.key.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["b", "a", "b"]);
    }

    #[test]
    fn skips_non_string_values() {
        let doc = parse(
            r#"{"x": [{"a": "/a/", "b": 1, "c": null, "d": ["/d/"], "e": {"f": "g"}, "h": "/h/"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.entries, vec![entry("a", "/a/"), entry("h", "/h/")]);
        assert_eq!(doc.skipped, 4);
    }

    #[test]
    fn extra_list_elements_and_labels_are_ignored() {
        let doc = parse(r#"{"first": [{"a": "/a/"}, {"b": "/b/"}], "second": {"c": "/c/"}}"#)
            .unwrap();
        assert_eq!(doc.label, "first");
        assert_eq!(doc.entries, vec![entry("a", "/a/")]);
    }

    #[test]
    fn malformed_documents_fail() {
        assert!(parse("").is_err());
        assert!(parse("not json").is_err());
        assert!(parse("{}").is_err());
        assert!(parse(r#"["a"]"#).is_err());
        assert!(parse(r#"{"x": "y"}"#).is_err());
        assert!(parse(r#"{"x": []}"#).is_err());
        assert!(parse(r#"{"x": [[{"a": "b"}]]}"#).is_err());
    }
}
