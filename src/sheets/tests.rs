use super::*;
use crate::metadata::fields;
use crate::table::{SharedFields, TableBuilder};

fn library_fields() -> SharedFields {
    SharedFields::new()
        .with(fields::LIBRARY_KIT, "10x")
        .with(fields::LIBRARY_TYPE, "3'")
}

fn build(kind: SheetKind, stages: &StageColumns) -> crate::table::Table {
    TableBuilder::new(&kind.spec(), &stages.groups_for(kind), library_fields())
        .unwrap()
        .build_table(&["S-1", "S-2"])
        .unwrap()
}

#[test]
fn test_sample_and_assay_names_link() {
    let stages = StageColumns::new();
    let sample = build(SheetKind::Sample, &stages);
    let assay = build(SheetKind::Assay, &stages);

    assert_eq!(sample.len(), 2);
    assert_eq!(assay.len(), 2);

    assert_eq!(sample.field(0, columns::SOURCE_NAME), Some("S_1"));
    assert_eq!(sample.field(0, columns::SAMPLE_NAME), Some("S_1"));
    assert_eq!(assay.field(0, columns::SAMPLE_NAME), Some("S_1"));
    assert_eq!(assay.field(0, columns::EXTRACT_NAME), Some("S_1_GEX"));
    assert_eq!(assay.field(0, columns::LIBRARY_NAME), Some("S_1"));
    assert_eq!(assay.field(1, columns::EXTRACT_NAME), Some("S_2_GEX"));

    assert_eq!(assay.field(0, "Parameter Value[Library kit]"), Some("10x"));
    assert_eq!(assay.field(0, "Parameter Value[Library type]"), Some("3'"));
}

#[test]
fn test_sample_sheet_layout() {
    let table = build(SheetKind::Sample, &StageColumns::new());
    assert_eq!(
        table.header,
        [
            "Source Name",
            "Characteristics[Organism]",
            "Term Source REF",
            "Term Accession Number",
            "Characteristics[Experiment]",
            "Characteristics[Source type]",
            "Characteristics[Model type]",
            "Protocol REF",
            "Performer",
            "Date",
            "Sample Name"
        ]
    );
    assert_eq!(
        table.field(0, columns::PROTOCOL_REF),
        Some(protocols::SAMPLE_COLLECTION)
    );
}

#[test]
fn test_assay_sheet_protocol_steps() {
    let table = build(SheetKind::Assay, &StageColumns::new());
    assert_eq!(table.width(), 15);

    let protocol_values: Vec<&str> = table
        .column_indices(columns::PROTOCOL_REF)
        .map(|i| table.rows[0][i].as_str())
        .collect();
    assert_eq!(
        protocol_values,
        [
            protocols::DISSOCIATION,
            protocols::LIBRARY_CONSTRUCTION,
            protocols::NUCLEIC_ACID_SEQUENCING
        ]
    );

    // Performer and Date follow every protocol step
    assert_eq!(table.column_indices(columns::PERFORMER).count(), 3);
    assert_eq!(table.column_indices(columns::DATE).count(), 3);
    assert_eq!(table.header.last().map(String::as_str), Some(columns::RAW_DATA_FILE));
}

#[test]
fn test_stage_columns_land_in_their_steps() {
    let stages = StageColumns {
        source_characteristics: vec!["genotype".to_string()],
        sample_characteristics: vec!["day".to_string(), "replicate".to_string()],
        dissociation_parameters: vec!["enzyme".to_string()],
        library_parameters: vec!["cycles".to_string()],
        sequencing_parameters: vec!["instrument model".to_string()],
    };

    let sample = build(SheetKind::Sample, &stages);
    assert_eq!(sample.header[7], "Characteristics[genotype]");
    assert_eq!(sample.header[8], columns::PROTOCOL_REF);
    assert_eq!(sample.header[12], "Characteristics[day]");
    assert_eq!(sample.header[13], "Characteristics[replicate]");
    assert_eq!(sample.width(), 14);

    let assay = build(SheetKind::Assay, &stages);
    assert_eq!(assay.header[2], "Parameter Value[enzyme]");
    assert_eq!(assay.header[3], columns::PERFORMER);
    let cycles = assay.column_index("Parameter Value[cycles]").unwrap();
    assert_eq!(assay.header[cycles - 1], "Parameter Value[Library type]");
    let instrument = assay.column_index("Parameter Value[instrument model]").unwrap();
    assert_eq!(assay.header[instrument - 1], columns::PROTOCOL_REF);
    assert_eq!(assay.width(), 18);

    for table in [&sample, &assay] {
        for row in &table.rows {
            assert_eq!(row.len(), table.width());
        }
    }
    assert_eq!(sample.field(1, "Characteristics[day]"), Some(""));
    assert_eq!(assay.field(1, "Parameter Value[enzyme]"), Some(""));
}

#[test]
fn test_empty_stage_lists_add_no_groups() {
    let stages = StageColumns::new();
    assert!(stages.is_empty());
    assert!(stages.groups_for(SheetKind::Sample).is_empty());
    assert!(stages.groups_for(SheetKind::Assay).is_empty());
}

#[test]
fn test_every_stage_slot_is_declared() {
    let sample = sample_sheet_spec();
    let sample_slots: Vec<&str> = sample.slots().collect();
    assert_eq!(
        sample_slots,
        [slots::SOURCE_CHARACTERISTICS, slots::SAMPLE_CHARACTERISTICS]
    );

    let assay = assay_sheet_spec();
    let assay_slots: Vec<&str> = assay.slots().collect();
    assert_eq!(
        assay_slots,
        [
            slots::DISSOCIATION_PARAMETERS,
            slots::LIBRARY_PARAMETERS,
            slots::SEQUENCING_PARAMETERS
        ]
    );
}

#[test]
fn test_stage_columns_extend() {
    let mut stages = StageColumns {
        source_characteristics: vec!["a".to_string()],
        ..Default::default()
    };
    stages.extend(StageColumns {
        source_characteristics: vec!["b".to_string()],
        sequencing_parameters: vec!["c".to_string()],
        ..Default::default()
    });

    assert_eq!(stages.source_characteristics, ["a", "b"]);
    assert_eq!(stages.sequencing_parameters, ["c"]);
    assert_eq!(stages.len(), 3);
}

#[test]
fn test_sheet_kind_display() {
    assert_eq!(SheetKind::Sample.to_string(), "sample");
    assert_eq!(SheetKind::Assay.to_string(), "assay");
}
