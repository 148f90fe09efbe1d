//! Validation steps of the repository protocol
//!
//! Each step either passes or yields the first [`ErrorSignal`] it meets;
//! callers chain them with `?` so an operation stops at the first failure.

use super::errors::ErrorSignal;
use super::schema::{EntitySchema, FieldValue, Fields};

/// Picks the first supplied key from `keys`, in order.
pub fn resolve_key(
    schema: &EntitySchema,
    keys: &[&'static str],
    selector: &impl Fields,
) -> Result<(&'static str, FieldValue), ErrorSignal> {
    keys.iter()
        .find_map(|key| selector.present(key).map(|value| (*key, value)))
        .ok_or_else(|| {
            ErrorSignal::bad_request(format!(
                "You must provide the {} of the {}",
                EntitySchema::describe_keys(keys),
                schema.noun()
            ))
        })
}

/// Fails on the first required field that was not supplied.
pub fn check_required(schema: &EntitySchema, input: &impl Fields) -> Result<(), ErrorSignal> {
    match schema
        .required
        .iter()
        .find(|field| input.present(field).is_none())
    {
        Some(field) => Err(ErrorSignal::bad_request(format!("The {field} is required"))),
        None => Ok(()),
    }
}

/// Builds the filtered update payload.
pub fn build_patch(
    schema: &EntitySchema,
    id: i32,
    patch: Option<&impl Fields>,
) -> Result<Vec<(&'static str, FieldValue)>, ErrorSignal> {
    if id == 0 {
        return Err(ErrorSignal::bad_request("The id is required"));
    }
    let patch =
        patch.ok_or_else(|| ErrorSignal::bad_request(format!("{} is required", schema.label)))?;

    let fields = patch.present_fields();
    if fields.is_empty() {
        return Err(ErrorSignal::bad_request(format!(
            "At least one field must be provided to update the {}",
            schema.noun()
        )));
    }

    Ok(fields)
}

/// Fails on the first patch field whose value equals the stored one.
pub fn check_changed(
    patch: &[(&'static str, FieldValue)],
    existing: &impl Fields,
) -> Result<(), ErrorSignal> {
    let stored = existing.fields();

    for (name, value) in patch {
        let unchanged = stored
            .iter()
            .any(|(field, current)| field == name && current.as_ref() == Some(value));
        if unchanged {
            return Err(ErrorSignal::bad_request(format!(
                "The field {name} already has the same value"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ErrorCode;
    use crate::domain::schema::{Field, id_field};

    static WIDGET: EntitySchema = EntitySchema {
        label: "Widget",
        columns: &["name", "size"],
        required: &["name", "size"],
        unique_key: "name",
        find_keys: &["id", "name"],
        delete_keys: &["id", "name"],
    };

    #[derive(Default)]
    struct Widget {
        id: Option<i32>,
        name: Option<String>,
        size: Option<i32>,
    }

    impl Fields for Widget {
        fn fields(&self) -> Vec<Field> {
            vec![
                id_field(self.id),
                ("name", self.name.clone().map(FieldValue::from)),
                ("size", self.size.map(FieldValue::from)),
            ]
        }
    }

    #[test]
    fn test_id_takes_precedence_over_natural_key() {
        let selector = Widget {
            id: Some(3),
            name: Some("bolt".into()),
            ..Default::default()
        };
        let (key, value) = resolve_key(&WIDGET, WIDGET.find_keys, &selector).unwrap();
        assert_eq!(key, "id");
        assert_eq!(value, FieldValue::Int(3));
    }

    #[test]
    fn test_missing_key_names_accepted_keys() {
        let err = resolve_key(&WIDGET, WIDGET.find_keys, &Widget::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::BadRequest);
        assert_eq!(err.message, "You must provide the ID or name of the widget");
    }

    #[test]
    fn test_required_stops_at_first_missing_field() {
        let err = check_required(&WIDGET, &Widget::default()).unwrap_err();
        assert_eq!(err.message, "The name is required");

        let input = Widget {
            name: Some("bolt".into()),
            ..Default::default()
        };
        let err = check_required(&WIDGET, &input).unwrap_err();
        assert_eq!(err.message, "The size is required");
    }

    #[test]
    fn test_patch_rejects_missing_id_and_payload() {
        let err = build_patch(&WIDGET, 0, Some(&Widget::default())).unwrap_err();
        assert_eq!(err.message, "The id is required");

        let err = build_patch(&WIDGET, 1, None::<&Widget>).unwrap_err();
        assert_eq!(err.message, "Widget is required");

        let err = build_patch(&WIDGET, 1, Some(&Widget::default())).unwrap_err();
        assert_eq!(err.message, "At least one field must be provided to update the widget");
    }

    #[test]
    fn test_patch_drops_blank_values() {
        let patch = Widget {
            name: Some(String::new()),
            size: Some(4),
            ..Default::default()
        };
        let fields = build_patch(&WIDGET, 1, Some(&patch)).unwrap();
        assert_eq!(fields, vec![("size", FieldValue::Int(4))]);
    }

    #[test]
    fn test_unchanged_field_is_rejected() {
        let existing = Widget {
            id: Some(1),
            name: Some("bolt".into()),
            size: Some(4),
        };
        let patch = vec![
            ("size", FieldValue::Int(5)),
            ("name", FieldValue::Text("bolt".into())),
        ];

        let err = check_changed(&patch, &existing).unwrap_err();
        assert_eq!(err.message, "The field name already has the same value");
        assert!(check_changed(&patch[..1], &existing).is_ok());
    }
}
