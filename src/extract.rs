use crate::parse::try_parse_literal;
use crate::{ConditionRule, ExpectedValue, FieldDefinition, Markers, Value};

/// Attribute the client runtime treats as "field must be filled in".
const REQUIRED_ATTRIBUTE: &str = "required";

pub(crate) fn extract(field: &FieldDefinition, markers: &Markers) -> Option<ConditionRule> {
    let controlling_field_id = field
        .get_attribute(markers.conditional_id())
        .filter(|id| !id.is_empty())?;

    let expected_value = field
        .get_attribute(markers.conditional_value())
        .map(parse_expected);

    Some(ConditionRule {
        controlling_field_id: controlling_field_id.to_owned(),
        expected_value,
    })
}

fn parse_expected(raw: &str) -> ExpectedValue {
    match try_parse_literal(raw) {
        Ok(value) => ExpectedValue::from(value),
        Err(raw) => {
            tracing::trace!(literal = raw, "expected value is not a literal, matching raw text");
            ExpectedValue::Scalar(Value::from(raw))
        }
    }
}

pub(crate) fn needs_client_runtime(fields: &[FieldDefinition], markers: &Markers) -> bool {
    fields.iter().any(|field| {
        field.required
            || field.attributes.contains_key(REQUIRED_ATTRIBUTE)
            || field.attributes.contains_key(markers.conditional_id())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> Markers {
        Markers::default()
    }

    #[test]
    fn no_marker_no_rule() {
        let field = FieldDefinition::new("b").attribute("class", "wide");
        assert_eq!(extract(&field, &markers()), None);
    }

    #[test]
    fn empty_controller_no_rule() {
        let field = FieldDefinition::new("b").depends_on("").expects("red");
        assert_eq!(extract(&field, &markers()), None);
    }

    #[test]
    fn expected_value_alone_is_not_a_rule() {
        let field = FieldDefinition::new("b").expects("red");
        assert_eq!(extract(&field, &markers()), None);
    }

    #[test]
    fn controller_without_expected_value() {
        let rule = extract(&FieldDefinition::new("b").depends_on("a"), &markers()).unwrap();
        assert_eq!(rule.controlling_field_id, "a");
        assert_eq!(rule.expected_value, None);
    }

    #[test]
    fn unparseable_expected_value_kept_raw() {
        let field = FieldDefinition::new("b").depends_on("a").expects("red");
        let rule = extract(&field, &markers()).unwrap();
        assert_eq!(
            rule.expected_value,
            Some(ExpectedValue::Scalar(Value::from("red")))
        );
    }

    #[test]
    fn array_expected_value_becomes_set() {
        let field = FieldDefinition::new("b")
            .depends_on("a")
            .expects(r#"["red","blue"]"#);
        let rule = extract(&field, &markers()).unwrap();
        assert_eq!(
            rule.expected_value,
            Some(ExpectedValue::Set(vec![Value::from("red"), Value::from("blue")]))
        );
    }

    #[test]
    fn numeric_expected_value_parsed() {
        let field = FieldDefinition::new("b").depends_on("a").expects("1");
        let rule = extract(&field, &markers()).unwrap();
        assert_eq!(rule.expected_value, Some(ExpectedValue::Scalar(Value::Int(1))));
    }

    #[test]
    fn empty_expected_value_is_raw_empty_string() {
        let field = FieldDefinition::new("b").depends_on("a").expects("");
        let rule = extract(&field, &markers()).unwrap();
        assert_eq!(
            rule.expected_value,
            Some(ExpectedValue::Scalar(Value::from("")))
        );
    }

    #[test]
    fn custom_markers() {
        let custom = Markers::builder()
            .conditional_id("data-show-if")
            .conditional_value("data-show-value")
            .build()
            .unwrap();
        let field = FieldDefinition::new("b")
            .attribute("data-show-if", "a")
            .attribute("data-show-value", "true");

        let rule = extract(&field, &custom).unwrap();
        assert_eq!(rule.controlling_field_id, "a");
        assert_eq!(rule.expected_value, Some(ExpectedValue::Scalar(Value::Bool(true))));

        // Default markers are ignored once custom ones are configured.
        let default_style = FieldDefinition::new("c").depends_on("a");
        assert_eq!(extract(&default_style, &custom), None);
    }

    #[test]
    fn client_runtime_detection() {
        let plain = FieldDefinition::new("a");
        assert!(!needs_client_runtime(&[plain.clone()], &markers()));
        assert!(!needs_client_runtime(&[], &markers()));

        let required = FieldDefinition::new("b").required(true);
        assert!(needs_client_runtime(&[plain.clone(), required], &markers()));

        let required_attr = FieldDefinition::new("c").attribute("required", "required");
        assert!(needs_client_runtime(&[plain.clone(), required_attr], &markers()));

        let conditional = FieldDefinition::new("d").depends_on("a");
        assert!(needs_client_runtime(&[plain, conditional], &markers()));
    }
}
