//! XML decoding shared by every operation.
//!
//! Result types carry their element mapping as serde attributes (`@name` for
//! attributes, `$text` for character data). This module adds what serde cannot
//! express on its own: a root-element check, zero-for-empty numbers, and
//! unwrapping of container elements such as `<comparables><comp/>...`.

use std::fmt::Display;
use std::str::FromStr;

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};

use crate::error::ApiError;

/// Decode `body` into `T`, requiring the document element to be `root`.
///
/// Namespace prefixes on the root (`<Zestimate:zestimate ...>`) are ignored.
pub(crate) fn decode<T: DeserializeOwned>(body: &str, root: &str) -> Result<T, ApiError> {
    let found = root_element(body)?;
    if found != root {
        return Err(ApiError::Decode(format!(
            "expected root element <{root}>, found <{found}>"
        )));
    }
    quick_xml::de::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Local name of the first element in the document.
fn root_element(body: &str) -> Result<String, ApiError> {
    let mut reader = Reader::from_str(body);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => return Err(ApiError::Decode("document has no root element".into())),
            Ok(_) => continue,
            Err(e) => return Err(ApiError::Decode(e.to_string())),
        }
    }
}

/// Parse character data as a number, treating empty text as zero.
///
/// The service emits `<amount currency="USD"></amount>` when it has no figure.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    let text = String::deserialize(deserializer)?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(T::default());
    }
    text.parse().map_err(D::Error::custom)
}

/// Boolean counterpart of [`lenient`]: empty is `false`, and `1`/`0`, `t`/`f`
/// and any casing of `true`/`false` are accepted.
pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    match text.trim() {
        "" | "0" | "f" | "F" | "false" | "False" | "FALSE" => Ok(false),
        "1" | "t" | "T" | "true" | "True" | "TRUE" => Ok(true),
        other => Err(D::Error::custom(format!("invalid boolean {other:?}"))),
    }
}

/// Generates a `deserialize_with` helper that reads a container element and
/// returns its repeated `$elem` children.
macro_rules! wrapped_list {
    ($(#[$meta:meta])* $name:ident, $elem:literal) => {
        $(#[$meta])*
        pub(crate) fn $name<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
        where
            D: Deserializer<'de>,
            T: Deserialize<'de>,
        {
            #[derive(Deserialize)]
            struct Wrapper<U> {
                #[serde(rename = $elem, default = "Vec::new")]
                items: Vec<U>,
            }
            Ok(Wrapper::deserialize(deserializer)?.items)
        }
    };
}

wrapped_list!(
    /// `<localRealEstate>` and `<list>` children.
    regions,
    "region"
);
wrapped_list!(comps, "comp");
wrapped_list!(results, "result");
wrapped_list!(rates, "rate");
wrapped_list!(urls, "url");

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Money {
        #[serde(rename = "@currency")]
        currency: String,
        #[serde(rename = "$text", deserialize_with = "lenient")]
        value: i64,
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Doc {
        amount: Money,
        #[serde(rename = "localRealEstate", deserialize_with = "regions")]
        names: Vec<String>,
    }

    #[test]
    fn decodes_attribute_text_and_wrapped_list() {
        let body = r#"<?xml version="1.0"?>
            <doc><amount currency="USD">1219500</amount>
            <localRealEstate><region>a</region><region>b</region></localRealEstate></doc>"#;
        let doc: Doc = decode(body, "doc").unwrap();
        assert_eq!(doc.amount.currency, "USD");
        assert_eq!(doc.amount.value, 1219500);
        assert_eq!(doc.names, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn empty_amount_is_zero() {
        let doc: Doc = decode(r#"<doc><amount currency="USD"></amount></doc>"#, "doc").unwrap();
        assert_eq!(doc.amount.value, 0);
        assert_eq!(doc.amount.currency, "USD");
        assert!(doc.names.is_empty());
    }

    #[test]
    fn namespaced_root_matches_local_name() {
        let body = r#"<Z:doc xmlns:Z="http://example.com/z"><amount currency="USD">5</amount></Z:doc>"#;
        let doc: Doc = decode(body, "doc").unwrap();
        assert_eq!(doc.amount.value, 5);
    }

    #[test]
    fn wrong_root_is_decode_error() {
        let err = decode::<Doc>("<other/>", "doc").unwrap_err();
        assert!(err.is_decode());
        assert!(err.to_string().contains("<other>"));
    }

    #[test]
    fn truncated_document_is_decode_error() {
        let err = decode::<Doc>(r#"<doc><amount currency="USD">12"#, "doc").unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn empty_body_is_decode_error() {
        assert!(decode::<Doc>("", "doc").unwrap_err().is_decode());
    }

    #[test]
    fn garbage_number_is_decode_error() {
        let err = decode::<Doc>(r#"<doc><amount currency="USD">lots</amount></doc>"#, "doc").unwrap_err();
        assert!(err.is_decode());
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Scalars {
        #[serde(rename = "@score", deserialize_with = "lenient")]
        score: f64,
        #[serde(deserialize_with = "lenient")]
        count: u32,
        #[serde(deserialize_with = "lenient_bool")]
        flag: bool,
    }

    #[test]
    fn empty_scalars_are_zero() {
        let doc: Scalars = decode(r#"<doc score=""><count></count><flag></flag></doc>"#, "doc").unwrap();
        assert_eq!(doc, Scalars::default());

        let doc: Scalars = decode(r#"<doc score="0.25"><count/><flag/></doc>"#, "doc").unwrap();
        assert_eq!(doc.score, 0.25);
        assert_eq!(doc.count, 0);
        assert!(!doc.flag);
    }

    #[test]
    fn boolean_spellings() {
        for (text, want) in [("true", true), ("1", true), ("T", true), ("False", false), ("0", false)] {
            let doc: Scalars = decode(&format!("<doc><flag>{text}</flag></doc>"), "doc").unwrap();
            assert_eq!(doc.flag, want, "{text}");
        }
        assert!(decode::<Scalars>("<doc><flag>maybe</flag></doc>", "doc").unwrap_err().is_decode());
    }
}
