//! Input validation shared by every mutation and lookup path.
//!
//! # Responsibility
//! - Check identity shape before a lookup reaches the store.
//! - Extract required/optional text fields from JSON payloads according
//!   to a per-entity [`FieldSpec`].
//! - Parse vote deltas.
//!
//! # Invariants
//! - Every rejection is `BadRequest` and happens without a store round-trip.
//! - Keys not declared in a `FieldSpec` are ignored.

use crate::error::{ApiError, ApiResult};
use serde_json::Value;
use std::collections::HashMap;

/// Payload key carrying a signed vote delta.
pub const VOTE_DELTA_KEY: &str = "inc_votes";

/// Declares which text fields an entity payload must or may carry.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub entity: &'static str,
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
}

/// Text fields pulled out of a payload by [`FieldSpec::extract`].
#[derive(Debug, Clone, Default)]
pub struct Fields {
    entity: &'static str,
    values: HashMap<&'static str, String>,
}

impl FieldSpec {
    /// Validates `payload` and returns the declared fields it carries.
    ///
    /// Required fields must be present, be JSON strings and contain
    /// non-whitespace text. Optional fields may be absent, `null` or empty
    /// (all treated as absent), otherwise they must be strings.
    pub fn extract(&self, payload: &Value) -> ApiResult<Fields> {
        let Some(object) = payload.as_object() else {
            return Err(ApiError::bad_request(format!(
                "{} payload must be a JSON object",
                self.entity
            )));
        };

        let mut values = HashMap::new();
        for &name in self.required {
            match object.get(name).and_then(Value::as_str) {
                Some(text) if !text.trim().is_empty() => {
                    values.insert(name, text.to_string());
                }
                _ => {
                    return Err(ApiError::bad_request(format!(
                        "{} requires a non-empty `{name}`",
                        self.entity
                    )));
                }
            }
        }

        for &name in self.optional {
            match object.get(name) {
                None | Some(Value::Null) => {}
                Some(Value::String(text)) if text.trim().is_empty() => {}
                Some(Value::String(text)) => {
                    values.insert(name, text.clone());
                }
                Some(_) => {
                    return Err(ApiError::bad_request(format!(
                        "{} field `{name}` must be a string",
                        self.entity
                    )));
                }
            }
        }

        Ok(Fields {
            entity: self.entity,
            values,
        })
    }
}

impl Fields {
    /// Moves a required field out; missing means the `FieldSpec` did not declare it.
    pub fn take_required(&mut self, name: &str) -> ApiResult<String> {
        self.values.remove(name).ok_or_else(|| {
            ApiError::bad_request(format!("{} requires a non-empty `{name}`", self.entity))
        })
    }

    pub fn take_optional(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }
}

/// Parses a numeric identity from its raw path form.
pub fn parse_id(raw: &str, id_name: &str) -> ApiResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::bad_request(format!("`{id_name}` must be an integer")))
}

/// Checks a textual identity (slug, username) is present.
pub fn parse_key<'a>(raw: &'a str, key_name: &str) -> ApiResult<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::bad_request(format!("`{key_name}` cannot be empty")));
    }
    Ok(trimmed)
}

/// Reads the signed vote delta from a patch payload.
///
/// Only JSON integers are accepted; floats, strings and booleans are
/// rejected rather than coerced.
pub fn parse_vote_delta(payload: &Value) -> ApiResult<i64> {
    payload
        .get(VOTE_DELTA_KEY)
        .and_then(Value::as_i64)
        .ok_or_else(|| {
            ApiError::bad_request(format!("`{VOTE_DELTA_KEY}` must be an integer"))
        })
}

#[cfg(test)]
mod tests {
    use super::{parse_id, parse_key, parse_vote_delta, FieldSpec};
    use crate::error::ErrorKind;
    use serde_json::json;

    const WIDGET_FIELDS: FieldSpec = FieldSpec {
        entity: "widget",
        required: &["name", "owner"],
        optional: &["icon"],
    };

    #[test]
    fn extract_collects_declared_fields_and_ignores_extra_keys() {
        let payload = json!({"name": "a", "owner": "b", "icon": "c", "colour": "red"});
        let mut fields = WIDGET_FIELDS.extract(&payload).unwrap();
        assert_eq!(fields.take_required("name").unwrap(), "a");
        assert_eq!(fields.take_required("owner").unwrap(), "b");
        assert_eq!(fields.take_optional("icon").as_deref(), Some("c"));
        assert_eq!(fields.take_optional("colour"), None);
    }

    #[test]
    fn extract_rejects_missing_blank_and_wrong_typed_required_fields() {
        for payload in [
            json!({"owner": "b"}),
            json!({"name": "", "owner": "b"}),
            json!({"name": "   ", "owner": "b"}),
            json!({"name": 7, "owner": "b"}),
            json!({"name": null, "owner": "b"}),
            json!({}),
            json!("name"),
        ] {
            let err = WIDGET_FIELDS.extract(&payload).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::BadRequest, "payload: {payload}");
        }
    }

    #[test]
    fn extract_treats_empty_optional_as_absent_but_rejects_wrong_type() {
        let mut fields = WIDGET_FIELDS
            .extract(&json!({"name": "a", "owner": "b", "icon": ""}))
            .unwrap();
        assert_eq!(fields.take_optional("icon"), None);

        let err = WIDGET_FIELDS
            .extract(&json!({"name": "a", "owner": "b", "icon": 3}))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("42", "article_id").unwrap(), 42);
        assert_eq!(parse_id(" 7 ", "article_id").unwrap(), 7);
        for raw in ["notAnId", "", "1.5", "12abc"] {
            let err = parse_id(raw, "article_id").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::BadRequest);
        }
    }

    #[test]
    fn parse_key_rejects_blank() {
        assert_eq!(parse_key(" cats ", "slug").unwrap(), "cats");
        assert_eq!(
            parse_key("  ", "username").unwrap_err().kind(),
            ErrorKind::BadRequest
        );
    }

    #[test]
    fn parse_vote_delta_requires_integer() {
        assert_eq!(parse_vote_delta(&json!({"inc_votes": -85})).unwrap(), -85);
        assert_eq!(parse_vote_delta(&json!({"inc_votes": 0})).unwrap(), 0);
        for payload in [
            json!({}),
            json!({"inc_votes": "one"}),
            json!({"inc_votes": 1.5}),
            json!({"inc_votes": true}),
            json!({"inc_votes": null}),
            json!({"votes": 1}),
        ] {
            assert_eq!(
                parse_vote_delta(&payload).unwrap_err().kind(),
                ErrorKind::BadRequest,
                "payload: {payload}"
            );
        }
    }
}
