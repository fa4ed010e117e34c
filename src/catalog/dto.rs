use std::fmt;
use std::fmt::{Display, Formatter};
use crate::catalog::domain::Borrowable;
use crate::catalog::domain::model::ItemEntity;
use crate::core::domain::Identifiable;
use crate::core::library::{ItemCategory, LibraryError, LibraryResult};
use crate::loans::domain::model::ItemRef;

// Item is the in-memory catalogue entry; on_loan never exceeds total_copies.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub category: ItemCategory,
    pub year: i64,
    pub total_copies: i64,
    pub on_loan: i64,
}

impl Item {
    pub fn new(id: i64, name: &str, category: ItemCategory, year: i64, total_copies: i64) -> Self {
        Self {
            id,
            name: name.to_string(),
            category,
            year,
            total_copies,
            on_loan: 0,
        }
    }

    pub fn item_ref(&self) -> ItemRef {
        ItemRef::new(self.id, self.name.as_str(), self.category)
    }

    pub(crate) fn lend_copy(&mut self) -> LibraryResult<()> {
        if !self.is_available() {
            return Err(LibraryError::not_granted(
                format!("all {} copies of item {} are on loan", self.total_copies, self.id).as_str(), None));
        }
        self.on_loan += 1;
        Ok(())
    }

    pub(crate) fn receive_copy(&mut self) {
        if self.on_loan > 0 {
            self.on_loan -= 1;
        }
    }
}

impl Identifiable for Item {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Borrowable for Item {
    fn category(&self) -> ItemCategory {
        self.category
    }

    fn is_available(&self) -> bool {
        self.on_loan < self.total_copies
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Item {}: {} ({})\nYear: {}\n{}/{} on loan",
               self.id, self.name, self.category, self.year, self.on_loan, self.total_copies)
    }
}

impl From<&ItemEntity> for Item {
    fn from(other: &ItemEntity) -> Self {
        let total_copies = other.number_owned.max(0);
        Self {
            id: other.item_id,
            name: other.item_name.to_string(),
            category: ItemCategory::from(other.item_type.as_str()),
            year: other.year,
            total_copies,
            on_loan: other.on_loan.clamp(0, total_copies),
        }
    }
}

impl From<&Item> for ItemEntity {
    fn from(other: &Item) -> Self {
        Self {
            item_id: other.id,
            item_name: other.name.to_string(),
            item_type: other.category.to_string(),
            year: other.year,
            number_owned: other.total_copies,
            on_loan: other.on_loan,
        }
    }
}
