use serde::{Deserialize, Serialize};

use super::{slots, SheetKind};
use crate::schema::ColumnGroup;

/// Extra column names per workflow stage
///
/// Each non-empty list becomes one column group in its sheet. The columns
/// are added to the header only; their values are left for curation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageColumns {
    /// `Characteristics` of the source material (sample sheet)
    pub source_characteristics: Vec<String>,
    /// `Characteristics` of the samples (sample sheet)
    pub sample_characteristics: Vec<String>,
    /// `Parameter Value`s of the dissociation step (assay sheet)
    pub dissociation_parameters: Vec<String>,
    /// `Parameter Value`s of the library construction step (assay sheet)
    pub library_parameters: Vec<String>,
    /// `Parameter Value`s of the sequencing step (assay sheet)
    pub sequencing_parameters: Vec<String>,
}

impl StageColumns {
    /// Create an empty set of stage columns
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of extra columns over all stages
    pub fn len(&self) -> usize {
        self.source_characteristics.len()
            + self.sample_characteristics.len()
            + self.dissociation_parameters.len()
            + self.library_parameters.len()
            + self.sequencing_parameters.len()
    }

    /// Whether no stage has extra columns
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append the lists of `other` to this one
    pub fn extend(&mut self, other: StageColumns) {
        self.source_characteristics.extend(other.source_characteristics);
        self.sample_characteristics.extend(other.sample_characteristics);
        self.dissociation_parameters.extend(other.dissociation_parameters);
        self.library_parameters.extend(other.library_parameters);
        self.sequencing_parameters.extend(other.sequencing_parameters);
    }

    /// Column groups for one sheet
    pub fn groups_for(&self, kind: SheetKind) -> Vec<ColumnGroup> {
        let candidates = match kind {
            SheetKind::Sample => vec![
                ColumnGroup::characteristics(slots::SOURCE_CHARACTERISTICS)
                    .with_columns(self.source_characteristics.iter().cloned()),
                ColumnGroup::characteristics(slots::SAMPLE_CHARACTERISTICS)
                    .with_columns(self.sample_characteristics.iter().cloned()),
            ],
            SheetKind::Assay => vec![
                ColumnGroup::parameter_values(slots::DISSOCIATION_PARAMETERS)
                    .with_columns(self.dissociation_parameters.iter().cloned()),
                ColumnGroup::parameter_values(slots::LIBRARY_PARAMETERS)
                    .with_columns(self.library_parameters.iter().cloned()),
                ColumnGroup::parameter_values(slots::SEQUENCING_PARAMETERS)
                    .with_columns(self.sequencing_parameters.iter().cloned()),
            ],
        };

        candidates.into_iter().filter(|g| !g.is_empty()).collect()
    }
}
