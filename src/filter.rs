use std::time::Instant;

use crate::extract::extract;
use crate::{
    ConditionRule, ExpectedValue, FieldDefinition, FilterReport, Markers, Removal, RemovalReason,
    Value, ValueMap,
};

enum Outcome {
    Unconditional,
    Kept,
    Removed(Removal),
}

/// Decide whether `controlling` satisfies `rule`. `None` means the dependent
/// field keeps its value.
pub(crate) fn check(rule: &ConditionRule, controlling: Option<&Value>) -> Option<RemovalReason> {
    let Some(value) = controlling else {
        return Some(RemovalReason::ControllerAbsent);
    };
    match &rule.expected_value {
        Some(ExpectedValue::Set(items)) => {
            (!items.iter().any(|item| value.loose_eq(item))).then_some(RemovalReason::NotInSet)
        }
        Some(ExpectedValue::Scalar(expected)) => {
            (!value.loose_eq(expected)).then_some(RemovalReason::ValueMismatch)
        }
        None => (!value.is_truthy()).then_some(RemovalReason::Falsy),
    }
}

// Reads the live map: a controller stripped earlier in the pass is already
// gone when its dependents are checked.
fn apply(field: &FieldDefinition, values: &mut ValueMap, markers: &Markers) -> Outcome {
    let Some(rule) = extract(field, markers) else {
        return Outcome::Unconditional;
    };

    match check(&rule, values.get_set(&rule.controlling_field_id)) {
        None => Outcome::Kept,
        Some(reason) => {
            let value = values.remove(&field.id);
            tracing::debug!(
                field = %field.id,
                controller = %rule.controlling_field_id,
                %reason,
                "stripping conditional field value"
            );
            Outcome::Removed(Removal {
                field_id: field.id.clone(),
                controlling_field_id: rule.controlling_field_id,
                reason,
                value,
            })
        }
    }
}

pub(crate) fn filter_values(fields: &[FieldDefinition], values: &mut ValueMap, markers: &Markers) {
    let mut removed = 0_usize;
    for field in fields {
        if let Outcome::Removed(_) = apply(field, values, markers) {
            removed += 1;
        }
    }
    tracing::debug!(fields = fields.len(), removed, "conditional save pass complete");
}

pub(crate) fn filter_detailed(
    fields: &[FieldDefinition],
    values: &mut ValueMap,
    markers: &Markers,
) -> FilterReport {
    let start = Instant::now();
    let mut removed = Vec::new();
    let mut kept = Vec::new();

    for field in fields {
        match apply(field, values, markers) {
            Outcome::Unconditional => {}
            Outcome::Kept => kept.push(field.id.clone()),
            Outcome::Removed(removal) => removed.push(removal),
        }
    }

    tracing::debug!(
        fields = fields.len(),
        removed = removed.len(),
        "conditional save pass complete"
    );
    FilterReport::new(removed, kept, start.elapsed())
}
