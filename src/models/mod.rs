use serde::{Deserialize, Serialize};

pub mod action;
pub mod form;
pub mod view;

pub use action::Action;
pub use form::FormState;
pub use view::View;

/// Column headers of the search results table, in display order
pub const RESULT_COLUMNS: [&str; 7] = [
    "ID",
    "Product ID",
    "Product Name",
    "Rec ID",
    "Rec Name",
    "Rec Type",
    "Like",
];

/// Recommendation types the service knows about. `rec_type` stays free-form on
/// the client; these are only offered as input suggestions.
pub const KNOWN_REC_TYPES: [&str; 4] = ["CROSS_SELL", "UP_SELL", "ACCESSORY", "BUY_WITH"];

/// A recommendation as exchanged with the recommendations service
///
/// Numeric fields are optional because form input that does not coerce to an
/// integer is still sent; it goes over the wire as `null` and the server
/// decides what to do with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationRecord {
    pub id: Option<i64>,
    pub product_id: Option<i64>,
    pub product_name: String,
    pub rec_id: Option<i64>,
    pub rec_name: String,
    pub rec_type: String,
    pub like_num: Option<i64>,
}

impl RecommendationRecord {
    /// Cells of this record in `RESULT_COLUMNS` order
    pub fn table_row(&self) -> [String; 7] {
        [
            display_int(self.id),
            display_int(self.product_id),
            self.product_name.clone(),
            display_int(self.rec_id),
            self.rec_name.clone(),
            self.rec_type.clone(),
            display_int(self.like_num),
        ]
    }
}

/// Renders a coerced integer back into form text. The sentinel renders blank.
pub fn display_int(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

/// Integer coercion for form input, following browser `parseInt`.
///
/// Leading whitespace is skipped and an optional sign is accepted. A `0x` or
/// `0X` prefix switches to hexadecimal; otherwise decimal digits are read. The
/// run of digits is taken and anything after it is ignored. Input without
/// leading digits yields `None`.
pub fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -value } else { value })
}
