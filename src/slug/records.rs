//! Decorating records with their public slug.
//!
//! Listing endpoints return records keyed by internal id; before they
//! leave the process each one gets a `slug` so links never expose the id.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::codec::generate_slug;
use crate::errors::{Result, SlugwardError};

/// A record that carries an internal identifier.
pub trait HasId {
    fn id(&self) -> &str;
}

/// A record together with its computed slug.
///
/// Serializes as the record's own fields plus a `slug` field. `T` must
/// not have a field named `slug` itself: the flattened record would
/// emit that key and then this one, giving JSON text with `slug` twice.
/// Use `attach_slugs_json` for records that may already carry one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slugged<T> {
    #[serde(flatten)]
    pub record: T,
    pub slug: String,
}

/// Return a copy of `items`, in order, each paired with its slug.
///
/// The input slice is left untouched and duplicates are kept.
pub fn attach_slugs<T: HasId + Clone>(items: &[T], secret: &str) -> Vec<Slugged<T>> {
    items
        .iter()
        .map(|item| Slugged {
            slug: generate_slug(item.id(), secret),
            record: item.clone(),
        })
        .collect()
}

/// Same as `attach_slugs` for untyped JSON records.
///
/// Each record must be an object with a string field named `id_field`.
/// An existing `slug` field is overwritten.
pub fn attach_slugs_json(records: Vec<Value>, id_field: &str, secret: &str) -> Result<Vec<Value>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, mut record)| {
            let object = record
                .as_object_mut()
                .ok_or(SlugwardError::RecordNotObject { index })?;

            let slug = match object.get(id_field) {
                Some(Value::String(id)) => generate_slug(id, secret),
                _ => {
                    return Err(SlugwardError::RecordMissingId {
                        index,
                        field: id_field.to_string(),
                    })
                }
            };

            object.insert("slug".to_string(), Value::String(slug));
            Ok(record)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SECRET: &str = "records-secret";

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct Quote {
        id: String,
        company: String,
    }

    impl HasId for Quote {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn quote(id: &str, company: &str) -> Quote {
        Quote {
            id: id.to_string(),
            company: company.to_string(),
        }
    }

    #[test]
    fn attach_preserves_order_and_duplicates() {
        let items = vec![quote("b", "Beta"), quote("a", "Acme"), quote("b", "Beta")];
        let slugged = attach_slugs(&items, SECRET);

        assert_eq!(slugged.len(), 3);
        for (out, original) in slugged.iter().zip(&items) {
            assert_eq!(&out.record, original);
            assert_eq!(out.slug, generate_slug(&original.id, SECRET));
        }
        assert_eq!(slugged[0].slug, slugged[2].slug);
    }

    #[test]
    fn attach_empty_is_empty() {
        let items: Vec<Quote> = Vec::new();
        assert!(attach_slugs(&items, SECRET).is_empty());
    }

    #[test]
    fn slugged_serializes_flat() {
        let slugged = attach_slugs(&[quote("a", "Acme")], SECRET);
        let value = serde_json::to_value(&slugged[0]).unwrap();
        assert_eq!(
            value,
            json!({ "id": "a", "company": "Acme", "slug": generate_slug("a", SECRET) })
        );
    }

    #[derive(Debug, Clone, Serialize)]
    struct Legacy {
        id: String,
        slug: String,
    }

    #[test]
    fn slugged_record_with_own_slug_emits_key_twice() {
        let slugged = Slugged {
            record: Legacy {
                id: "a".into(),
                slug: "old".into(),
            },
            slug: generate_slug("a", SECRET),
        };

        let text = serde_json::to_string(&slugged).unwrap();
        assert_eq!(text.matches("\"slug\":").count(), 2);
        assert!(text.find("\"old\"").unwrap() < text.find(slugged.slug.as_str()).unwrap());

        // Building a `Value` keeps the last key, which is the computed slug.
        let value = serde_json::to_value(&slugged).unwrap();
        assert_eq!(value["slug"], generate_slug("a", SECRET));
    }

    #[test]
    fn json_records_get_slug_field() {
        let records = vec![json!({ "id": "a", "n": 1 }), json!({ "id": "b", "slug": "old" })];
        let out = attach_slugs_json(records, "id", SECRET).unwrap();

        assert_eq!(out[0]["n"], 1);
        assert_eq!(out[0]["slug"], generate_slug("a", SECRET));
        assert_eq!(out[1]["slug"], generate_slug("b", SECRET));
    }

    #[test]
    fn json_custom_id_field() {
        let out = attach_slugs_json(vec![json!({ "uuid": "u-1" })], "uuid", SECRET).unwrap();
        assert_eq!(out[0]["slug"], generate_slug("u-1", SECRET));
    }

    #[test]
    fn json_rejects_non_objects() {
        let err = attach_slugs_json(vec![json!({ "id": "a" }), json!(42)], "id", SECRET)
            .unwrap_err();
        assert!(matches!(err, SlugwardError::RecordNotObject { index: 1 }));
    }

    #[test]
    fn json_rejects_missing_or_non_string_id() {
        let err = attach_slugs_json(vec![json!({ "name": "x" })], "id", SECRET).unwrap_err();
        assert!(matches!(err, SlugwardError::RecordMissingId { index: 0, .. }));

        let err = attach_slugs_json(vec![json!({ "id": 7 })], "id", SECRET).unwrap_err();
        assert!(matches!(err, SlugwardError::RecordMissingId { index: 0, .. }));
    }
}
