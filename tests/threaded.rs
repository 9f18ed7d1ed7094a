use std::sync::Arc;
use std::thread;

use field_conditionals::{FieldDefinition, SaveFilter, ValueMap};

fn form() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition::new("delivery"),
        FieldDefinition::new("address")
            .depends_on("delivery")
            .expects(r#"["courier","post"]"#),
        FieldDefinition::new("locker").depends_on("delivery").expects("locker"),
        FieldDefinition::new("notes").depends_on("address"),
    ]
}

#[test]
fn filter_across_threads() {
    let filter = Arc::new(SaveFilter::new());
    let fields = Arc::new(form());

    let mut handles = vec![];

    // Thread 1: courier delivery keeps the address and its notes.
    let (f, fs) = (Arc::clone(&filter), Arc::clone(&fields));
    handles.push(thread::spawn(move || {
        let mut values = ValueMap::new()
            .set("delivery", "courier")
            .set("address", "1 Main St")
            .set("locker", "L4")
            .set("notes", "ring twice");
        f.filter_values_to_save(&fs, &mut values);
        values
    }));

    // Thread 2: locker delivery drops the address chain.
    let (f, fs) = (Arc::clone(&filter), Arc::clone(&fields));
    handles.push(thread::spawn(move || {
        let mut values = ValueMap::new()
            .set("delivery", "locker")
            .set("address", "1 Main St")
            .set("locker", "L4")
            .set("notes", "ring twice");
        f.filter_values_to_save(&fs, &mut values);
        values
    }));

    let results: Vec<ValueMap> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(
        results[0],
        ValueMap::new()
            .set("delivery", "courier")
            .set("address", "1 Main St")
            .set("notes", "ring twice")
    );
    assert_eq!(
        results[1],
        ValueMap::new().set("delivery", "locker").set("locker", "L4")
    );
}

#[test]
fn many_threads_same_result() {
    let filter = Arc::new(SaveFilter::new());
    let fields = Arc::new(form());
    let values = ValueMap::new()
        .set("delivery", "post")
        .set("address", "PO Box 9")
        .set("locker", "L1")
        .set("notes", "");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let f = Arc::clone(&filter);
            let fs = Arc::clone(&fields);
            let mut v = values.clone();
            thread::spawn(move || {
                f.filter_values_to_save(&fs, &mut v);
                v
            })
        })
        .collect();

    let expected = ValueMap::new()
        .set("delivery", "post")
        .set("address", "PO Box 9")
        .set("notes", "");
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
