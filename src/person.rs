//! Display rows read out of the people payload.

use std::collections::HashSet;

use serde_json::Value;

/// One person block as it will be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonRow {
    /// List key. Equal to `id` unless the id was already used in this payload.
    pub key: String,
    pub id: String,
    pub name: String,
}

/// Strings render bare, everything else as JSON text. Missing or null is blank.
fn field_text(record: &Value, field: &str) -> String {
    match record.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Reads every element of the array best effort; `None` when the payload is not an array.
pub fn rows_from(payload: &Value) -> Option<Vec<PersonRow>> {
    let records = payload.as_array()?;
    let mut seen = HashSet::new();

    let rows = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let id = field_text(record, "id");
            let key = if seen.insert(id.clone()) {
                id.clone()
            } else {
                format!("{id}#{idx}")
            };
            PersonRow {
                key,
                id,
                name: field_text(record, "name"),
            }
        })
        .collect();

    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_and_string_ids_render_bare() {
        let rows = rows_from(&json!([
            {"id": 1, "name": "Ada"},
            {"id": "p-2", "name": "Grace"},
        ]))
        .unwrap();

        assert_eq!(rows[0], PersonRow { key: "1".into(), id: "1".into(), name: "Ada".into() });
        assert_eq!(rows[1].id, "p-2");
        assert_eq!(rows[1].name, "Grace");
    }

    #[test]
    fn non_array_has_no_rows() {
        assert_eq!(rows_from(&json!({"id": 1, "name": "Ada"})), None);
        assert_eq!(rows_from(&json!("people")), None);
        assert_eq!(rows_from(&Value::Null), None);
    }

    #[test]
    fn empty_array_is_valid() {
        assert_eq!(rows_from(&json!([])), Some(vec![]));
    }

    #[test]
    fn missing_fields_render_blank() {
        let rows = rows_from(&json!([{"name": "NoId"}, {"id": 7}, 42])).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].id, "");
        assert_eq!(rows[0].name, "NoId");
        assert_eq!(rows[1].name, "");
        assert_eq!(rows[2].id, "");
    }

    #[test]
    fn repeated_ids_get_distinct_keys() {
        let rows = rows_from(&json!([
            {"id": 1, "name": "a"},
            {"id": 1, "name": "b"},
            {"name": "c"},
            {"name": "d"},
        ]))
        .unwrap();

        let keys: HashSet<_> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys.len(), 4);
        assert_eq!(rows[1].id, "1");
        assert_eq!(rows[1].key, "1#1");
    }
}
