//! Stored-value transforms applied by the normalizer.
//!
//! Transforms are named so schemas declared in TOML files can reference them;
//! the name table is a compile-time [`phf`] map. Both transforms are
//! fail-soft: on unparseable input they log a warning and keep the original
//! value rather than surfacing an error.

use crate::record::FieldValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;

static BY_NAME: phf::Map<&'static str, Transform> = phf::phf_map! {
    "strip_markup" => Transform::StripMarkup,
    "canonical_date" => Transform::CanonicalDate,
};

/// A named normalization applied to a field's stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Collapse embedded markup to plain text content.
    StripMarkup,
    /// Reformat a date string as a canonical UTC ISO-8601 timestamp.
    CanonicalDate,
}

impl Transform {
    /// Resolve a schema-file transform name.
    pub fn from_name(name: &str) -> Option<Self> {
        BY_NAME.get(name).copied()
    }

    /// The name used in schema files.
    pub fn name(self) -> &'static str {
        match self {
            Transform::StripMarkup => "strip_markup",
            Transform::CanonicalDate => "canonical_date",
        }
    }

    /// Apply the transform. Both transforms operate on text; number values
    /// pass through untouched.
    pub fn apply(self, value: FieldValue) -> FieldValue {
        match (self, value) {
            (Transform::StripMarkup, FieldValue::Text(s)) => FieldValue::Text(strip_markup(&s)),
            (Transform::CanonicalDate, FieldValue::Text(s)) => {
                FieldValue::Text(canonical_date(&s))
            }
            (_, other) => other,
        }
    }
}

// ---------------------------------------------------------------------------
// strip_markup
// ---------------------------------------------------------------------------

/// Run `input` through a markup tokenizer and keep only text content, with
/// entity references resolved. Tokenizer failures (stray `<`, truncated
/// tags) keep the original string.
fn strip_markup(input: &str) -> String {
    if !input.contains('<') && !input.contains('&') {
        return input.to_string();
    }

    let mut reader = Reader::from_str(input);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut out = String::with_capacity(input.len());
    let mut entity = String::with_capacity(8);

    loop {
        match reader.read_event() {
            Ok(Event::Text(t)) => match t.decode() {
                Ok(text) => out.push_str(&text),
                Err(err) => {
                    tracing::warn!(error = ?err, "markup decode failed; keeping original text");
                    return input.to_string();
                }
            },
            Ok(Event::CData(c)) => match reader.decoder().decode(&c) {
                Ok(text) => out.push_str(&text),
                Err(err) => {
                    tracing::warn!(error = ?err, "markup decode failed; keeping original text");
                    return input.to_string();
                }
            },
            Ok(Event::GeneralRef(r)) => {
                let Ok(name) = r.decode() else {
                    tracing::warn!("entity decode failed; keeping original text");
                    return input.to_string();
                };
                entity.clear();
                entity.push('&');
                entity.push_str(&name);
                entity.push(';');
                match quick_xml::escape::unescape(&entity) {
                    Ok(resolved) => out.push_str(&resolved),
                    // Unknown named entity: keep it literally.
                    Err(_) => out.push_str(&entity),
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(error = ?err, "markup strip failed; keeping original text");
                return input.to_string();
            }
        }
    }

    out
}

// ---------------------------------------------------------------------------
// canonical_date
// ---------------------------------------------------------------------------

/// Reformat a date string as a UTC ISO-8601 millisecond timestamp
/// (`2020-01-01T00:00:00.000Z`). Unparseable input is kept unchanged with a
/// logged warning; empty input (the text zero-value) passes through
/// silently.
fn canonical_date(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    match parse_date(input) {
        Some(utc) => utc.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => {
            tracing::warn!(value = input, "unparseable date; keeping original value");
            input.to_string()
        }
    }
}

fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&dt));
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(input: &str) -> String {
        match Transform::StripMarkup.apply(FieldValue::from(input)) {
            FieldValue::Text(s) => s,
            other => panic!("unexpected value {other:?}"),
        }
    }

    fn date(input: &str) -> String {
        match Transform::CanonicalDate.apply(FieldValue::from(input)) {
            FieldValue::Text(s) => s,
            other => panic!("unexpected value {other:?}"),
        }
    }

    #[test]
    fn strips_simple_tags() {
        assert_eq!(strip("<b>Hi</b>"), "Hi");
        assert_eq!(strip("<p>A<br/>B</p>"), "AB");
    }

    #[test]
    fn resolves_entities() {
        assert_eq!(strip("Fish &amp; Chips"), "Fish & Chips");
        assert_eq!(strip("5 &lt; 6"), "5 < 6");
        assert_eq!(strip("caf&#233;"), "café");
    }

    #[test]
    fn unknown_entities_kept_literally() {
        assert_eq!(strip("a&nbsp;b"), "a&nbsp;b");
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(strip("no markup here"), "no markup here");
    }

    #[test]
    fn truncated_markup_keeps_original() {
        assert_eq!(strip("Hi <b"), "Hi <b");
    }

    #[test]
    fn date_only_becomes_utc_midnight() {
        assert_eq!(date("2020-01-01"), "2020-01-01T00:00:00.000Z");
    }

    #[test]
    fn rfc3339_input_is_idempotent() {
        let canonical = date("2020-01-01");
        assert_eq!(date(&canonical), canonical);
    }

    #[test]
    fn offset_timestamps_converted_to_utc() {
        assert_eq!(date("2020-06-01T12:00:00+02:00"), "2020-06-01T10:00:00.000Z");
    }

    #[test]
    fn junk_dates_kept_unchanged() {
        assert_eq!(date("not-a-date"), "not-a-date");
    }

    #[test]
    fn empty_date_passes_through() {
        assert_eq!(date(""), "");
    }

    #[test]
    fn numbers_pass_through_transforms() {
        assert_eq!(
            Transform::CanonicalDate.apply(FieldValue::from(3.0)),
            FieldValue::from(3.0)
        );
    }

    #[test]
    fn names_round_trip() {
        for t in [Transform::StripMarkup, Transform::CanonicalDate] {
            assert_eq!(Transform::from_name(t.name()), Some(t));
        }
        assert_eq!(Transform::from_name("shout"), None);
    }
}
