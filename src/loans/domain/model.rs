use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDate;
use crate::core::library::ItemCategory;
use crate::utils::date::format_date;

// ItemRef is the part of a catalogue item a loan needs to describe itself. The
// catalogue keeps the item and its on-loan counter; a loan only points at it.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRef {
    pub id: i64,
    pub name: String,
    pub category: ItemCategory,
}

impl ItemRef {
    pub fn new(id: i64, name: &str, category: ItemCategory) -> Self {
        Self {
            id,
            name: name.to_string(),
            category,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Loan {
    pub item: ItemRef,
    pub due_date: NaiveDate,
}

impl Loan {
    pub fn new(item: ItemRef, due_date: NaiveDate) -> Self {
        Self { item, due_date }
    }

    pub fn item_id(&self) -> i64 {
        self.item.id
    }
}

impl Display for Loan {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Item {}: {} ({}); due {}",
               self.item.id, self.item.name, self.item.category, format_date(&self.due_date))
    }
}
