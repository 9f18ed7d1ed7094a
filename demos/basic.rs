use field_conditionals::{FieldDefinition, SaveFilter, ValueMap};

fn main() {
    // Define the form
    let fields = vec![
        FieldDefinition::new("contact_method"),
        FieldDefinition::new("phone")
            .depends_on("contact_method")
            .expects(r#"["phone","sms"]"#),
        FieldDefinition::new("email")
            .depends_on("contact_method")
            .expects("email"),
        FieldDefinition::new("newsletter").depends_on("email"),
    ];

    let filter = SaveFilter::new();
    println!("{filter}");
    println!("client script needed: {}", filter.needs_client_runtime(&fields));

    // Values submitted from a form where the user switched to SMS after
    // typing an email address.
    let mut values = ValueMap::new()
        .set("contact_method", "sms")
        .set("phone", "555-0100")
        .set("email", "me@example.com")
        .set("newsletter", "1");

    filter.filter_values_to_save(&fields, &mut values);

    let mut kept: Vec<_> = values.iter().collect();
    kept.sort_by_key(|(id, _)| *id);
    for (id, value) in kept {
        println!("{id} = {value}");
    }
}
