pub const PLACEHOLDER: &str = "N/A";

/// Free-text fields asked of the operator, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataField {
    Project,
    ReviewedBy,
    QatBy,
    Summary,
    Impacts,
    Notes,
}

impl MetadataField {
    pub const ALL: [MetadataField; 6] = [
        MetadataField::Project,
        MetadataField::ReviewedBy,
        MetadataField::QatBy,
        MetadataField::Summary,
        MetadataField::Impacts,
        MetadataField::Notes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetadataField::Project => "Project",
            MetadataField::ReviewedBy => "Code/Unit Test Reviewed By",
            MetadataField::QatBy => "QAT By",
            MetadataField::Summary => "Summary",
            MetadataField::Impacts => "Impacts",
            MetadataField::Notes => "Notes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckinMetadata {
    pub project: String,
    pub reviewed_by: String,
    pub qat_by: String,
    pub summary: String,
    pub impacts: String,
    pub notes: String,
}

impl Default for CheckinMetadata {
    fn default() -> Self {
        Self {
            project: PLACEHOLDER.to_string(),
            reviewed_by: PLACEHOLDER.to_string(),
            qat_by: PLACEHOLDER.to_string(),
            summary: PLACEHOLDER.to_string(),
            impacts: PLACEHOLDER.to_string(),
            notes: PLACEHOLDER.to_string(),
        }
    }
}

impl CheckinMetadata {
    /// Stores an answer; empty input falls back to the placeholder.
    pub fn set(&mut self, field: MetadataField, answer: &str) {
        let value = if answer.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            answer.to_string()
        };
        *self.slot(field) = value;
    }

    pub fn get(&self, field: MetadataField) -> &str {
        match field {
            MetadataField::Project => &self.project,
            MetadataField::ReviewedBy => &self.reviewed_by,
            MetadataField::QatBy => &self.qat_by,
            MetadataField::Summary => &self.summary,
            MetadataField::Impacts => &self.impacts,
            MetadataField::Notes => &self.notes,
        }
    }

    fn slot(&mut self, field: MetadataField) -> &mut String {
        match field {
            MetadataField::Project => &mut self.project,
            MetadataField::ReviewedBy => &mut self.reviewed_by,
            MetadataField::QatBy => &mut self.qat_by,
            MetadataField::Summary => &mut self.summary,
            MetadataField::Impacts => &mut self.impacts,
            MetadataField::Notes => &mut self.notes,
        }
    }
}
