use serde::{Deserialize, Serialize};

use super::{display_int, parse_int, RecommendationRecord};

/// Raw values of the seven form inputs
///
/// This is the client's working copy of one record. Values are kept exactly as
/// typed; coercion only happens when a request is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub rec_id: String,
    pub rec_name: String,
    pub rec_type: String,
    pub like_num: String,
}

impl FormState {
    /// Reads all seven fields into a record, coercing the numeric ones
    pub fn read_record(&self) -> RecommendationRecord {
        RecommendationRecord {
            id: parse_int(&self.id),
            product_id: parse_int(&self.product_id),
            product_name: self.product_name.clone(),
            rec_id: parse_int(&self.rec_id),
            rec_name: self.rec_name.clone(),
            rec_type: self.rec_type.clone(),
            like_num: parse_int(&self.like_num),
        }
    }

    /// Overwrites every field, `id` included, from `record`
    pub fn populate(&mut self, record: &RecommendationRecord) {
        *self = Self::from(record);
    }

    /// Blanks the six non-id fields
    pub fn clear_fields(&mut self) {
        let id = std::mem::take(&mut self.id);
        *self = Self {
            id,
            ..Self::default()
        };
    }

    /// Blanks every field
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&RecommendationRecord> for FormState {
    fn from(record: &RecommendationRecord) -> Self {
        Self {
            id: display_int(record.id),
            product_id: display_int(record.product_id),
            product_name: record.product_name.clone(),
            rec_id: display_int(record.rec_id),
            rec_name: record.rec_name.clone(),
            rec_type: record.rec_type.clone(),
            like_num: display_int(record.like_num),
        }
    }
}
