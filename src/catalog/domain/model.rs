use serde::{Deserialize, Serialize};

// ItemEntity is the stored catalogue record, one per title or tool, with the
// number of copies owned and currently lent out.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ItemEntity {
    pub item_id: i64,
    pub item_name: String,
    pub item_type: String,
    pub year: i64,
    pub number_owned: i64,
    pub on_loan: i64,
}

impl ItemEntity {
    pub fn new(item_id: i64, item_name: &str, item_type: &str, year: i64, number_owned: i64) -> Self {
        Self {
            item_id,
            item_name: item_name.to_string(),
            item_type: item_type.to_string(),
            year,
            number_owned,
            on_loan: 0,
        }
    }
}
