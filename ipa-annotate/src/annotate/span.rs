//! A contiguous piece of annotated output.
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Literal input text, with the transcription found for it if any.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// the text exactly as it appeared in the input
    pub text: SmolStr,
    /// the dictionary transcription of `text`
    #[serde(rename = "ipa", default, skip_serializing_if = "Option::is_none")]
    pub transcription: Option<SmolStr>,
}

impl Span {
    pub fn plain<T: Into<SmolStr>>(text: T) -> Span {
        Span {
            text: text.into(),
            transcription: None,
        }
    }

    pub fn annotated<T: Into<SmolStr>, U: Into<SmolStr>>(text: T, transcription: U) -> Span {
        Span {
            text: text.into(),
            transcription: Some(transcription.into()),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn transcription(&self) -> Option<&str> {
        self.transcription.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_like_the_json_envelope() {
        let spans = vec![Span::annotated("hello", "/həˈɫoʊ/"), Span::plain(", ")];
        assert_eq!(
            serde_json::to_string(&spans).unwrap(),
            r#"[{"text":"hello","ipa":"/həˈɫoʊ/"},{"text":", "}]"#
        );
        let back: Vec<Span> = serde_json::from_str(r#"[{"text":"hello","ipa":"/həˈɫoʊ/"},{"text":", "}]"#).unwrap();
        assert_eq!(back, spans);
    }
}
