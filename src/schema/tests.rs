use super::*;

fn labels(header: &[HeaderColumn]) -> Vec<&str> {
    header.iter().map(|c| c.label.as_str()).collect()
}

fn small_spec() -> ColumnSpec {
    ColumnSpec::new()
        .sample_name(columns::SOURCE_NAME)
        .shared(&columns::characteristics("Organism"), "organism")
        .slot("source_characteristics")
        .literal(columns::PROTOCOL_REF, "Sample collection")
        .empty(columns::PERFORMER)
        .empty(columns::DATE)
        .sample_name(columns::SAMPLE_NAME)
        .slot("sample_characteristics")
}

#[test]
fn test_label_patterns() {
    assert_eq!(columns::characteristics("genotype"), "Characteristics[genotype]");
    assert_eq!(columns::parameter_value("enzyme"), "Parameter Value[enzyme]");
    assert_eq!(ColumnKind::Characteristics.label("age"), "Characteristics[age]");
    assert_eq!(ColumnKind::ParameterValue.label("kit"), "Parameter Value[kit]");
}

#[test]
fn test_expand_without_groups() {
    let spec = small_spec();
    let header = spec.expand(&[]).unwrap();

    assert_eq!(header.len(), spec.base_columns().count());
    assert_eq!(
        labels(&header),
        [
            "Source Name",
            "Characteristics[Organism]",
            "Protocol REF",
            "Performer",
            "Date",
            "Sample Name"
        ]
    );
    assert!(header.iter().all(|c| c.group.is_none()));
}

#[test]
fn test_expand_splices_group_at_slot() {
    let group = ColumnGroup::characteristics("source_characteristics")
        .with_columns(["genotype", "passage"]);
    let header = small_spec().expand(&[group]).unwrap();

    assert_eq!(header.len(), 8);
    assert_eq!(header[2].label, "Characteristics[genotype]");
    assert_eq!(header[3].label, "Characteristics[passage]");
    assert_eq!(header[4].label, "Protocol REF");
    assert_eq!(header[2].source, FieldSource::Empty);
    assert_eq!(header[2].group.as_deref(), Some("source_characteristics"));
}

#[test]
fn test_expand_trailing_slot() {
    let group = ColumnGroup::characteristics("sample_characteristics").with_columns(["batch"]);
    let header = small_spec().expand(&[group]).unwrap();

    assert_eq!(header.last().unwrap().label, "Characteristics[batch]");
}

#[test]
fn test_groups_at_same_point_keep_caller_order() {
    let first = ColumnGroup::characteristics("source_characteristics").with_columns(["b"]);
    let mut second = ColumnGroup::parameter_values("source_characteristics").with_columns(["a"]);
    second.name = "second".to_string();

    let header = small_spec().expand(&[first, second]).unwrap();
    assert_eq!(header[2].label, "Characteristics[b]");
    assert_eq!(header[3].label, "Parameter Value[a]");
    assert_eq!(header[3].group.as_deref(), Some("second"));
}

#[test]
fn test_expand_after_first_matching_label() {
    let spec = ColumnSpec::new()
        .literal(columns::PROTOCOL_REF, "Dissociation")
        .empty(columns::PERFORMER)
        .literal(columns::PROTOCOL_REF, "Library construction")
        .empty(columns::PERFORMER);
    let group = ColumnGroup::new(
        "extra",
        ColumnKind::ParameterValue,
        InsertionPoint::After(columns::PROTOCOL_REF.to_string()),
    )
    .with_columns(["temperature"]);

    let header = spec.expand(&[group]).unwrap();
    assert_eq!(
        labels(&header),
        [
            "Protocol REF",
            "Parameter Value[temperature]",
            "Performer",
            "Protocol REF",
            "Performer"
        ]
    );
}

#[test]
fn test_undefined_slot_is_malformed() {
    let group = ColumnGroup::characteristics("nowhere").with_columns(["x"]);
    let err = small_spec().expand(&[group]).unwrap_err();

    assert_eq!(
        err,
        SchemaError::MalformedColumnGroup {
            group: "nowhere".to_string(),
            point: InsertionPoint::Slot("nowhere".to_string()),
        }
    );
    assert!(err.to_string().contains("slot 'nowhere'"));
}

#[test]
fn test_undefined_anchor_is_malformed() {
    let group = ColumnGroup::new(
        "extra",
        ColumnKind::Characteristics,
        InsertionPoint::After("Extract Name".to_string()),
    );
    let err = small_spec().expand(&[group]).unwrap_err();
    assert!(matches!(err, SchemaError::MalformedColumnGroup { .. }));
}

#[test]
fn test_empty_group_at_undefined_point_still_fails() {
    let group = ColumnGroup::parameter_values("sequencing_parameters");
    assert!(group.is_empty());
    assert!(small_spec().expand(&[group]).is_err());
}

#[test]
fn test_invalid_column_name_rejected() {
    let group = ColumnGroup::characteristics("source_characteristics")
        .with_columns(["ok", "bad\tname"]);
    let err = small_spec().expand(&[group]).unwrap_err();
    assert_eq!(
        err,
        SchemaError::InvalidColumnName {
            group: "source_characteristics".to_string(),
            name: "bad\tname".to_string(),
        }
    );
}

#[test]
fn test_duplicate_names_pass_through() {
    let group = ColumnGroup::characteristics("source_characteristics")
        .with_columns(["Organism"]);
    let header = small_spec().expand(&[group]).unwrap();

    let organism_columns = header
        .iter()
        .filter(|c| c.label == "Characteristics[Organism]")
        .count();
    assert_eq!(organism_columns, 2);
}
