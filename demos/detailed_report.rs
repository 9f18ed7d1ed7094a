use field_conditionals::{FieldDefinition, SaveFilter, ValueMap};

fn main() {
    let fields = vec![
        FieldDefinition::new("has_vehicle"),
        FieldDefinition::new("vehicle_type").depends_on("has_vehicle"),
        FieldDefinition::new("axles")
            .depends_on("vehicle_type")
            .expects(r#"["truck","trailer"]"#),
        FieldDefinition::new("plate").depends_on("has_vehicle"),
    ];

    let mut values = ValueMap::new()
        .set("has_vehicle", "")
        .set("vehicle_type", "truck")
        .set("axles", 3_i64)
        .set("plate", "AB-123");

    let report = SaveFilter::new().filter_detailed(&fields, &mut values);

    println!("{report}");
    for removal in report.removed() {
        println!(
            "  {} (controlled by {}): {}",
            removal.field_id, removal.controlling_field_id, removal.reason
        );
    }
    println!("remaining values: {}", values.len());
}
