use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::warn;
use crate::catalog::dto::Item;
use crate::core::domain::Identifiable;
use crate::core::library::PatronType;
use crate::loans::domain::model::Loan;
use crate::patrons::domain::model::{LoanEntity, PatronEntity};
use crate::rules::classify_patron;

// Patron abstracts a library member together with the loans they hold. Loans
// hold at most one entry per item id.
#[derive(Debug, Clone, PartialEq)]
pub struct Patron {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub outstanding_fees: f64,
    pub gardening_trained: bool,
    pub carpentry_trained: bool,
    pub makerspace_trained: bool,
    pub loans: Vec<Loan>,
}

impl Patron {
    // a freshly registered patron: no fees, no training, no loans
    pub fn new(id: i64, name: &str, age: i64) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
            outstanding_fees: 0.0,
            gardening_trained: false,
            carpentry_trained: false,
            makerspace_trained: false,
            loans: vec![],
        }
    }

    pub fn from_entity(entity: &PatronEntity, catalogue: &[Item]) -> Self {
        let mut patron = Self {
            id: entity.patron_id,
            name: entity.name.to_string(),
            age: entity.age,
            outstanding_fees: entity.outstanding_fees.max(0.0),
            gardening_trained: entity.gardening_tool_training,
            carpentry_trained: entity.carpentry_tool_training,
            makerspace_trained: entity.makerspace_training,
            loans: vec![],
        };
        for loan in &entity.loans {
            match catalogue.iter().find(|item| item.id == loan.item_id) {
                Some(item) if patron.find_loan(item.id).is_none() => {
                    patron.loans.push(Loan::new(item.item_ref(), loan.due_date));
                }
                Some(_) => {
                    warn!("patron {} lists item {} twice, keeping the first loan", patron.id, loan.item_id);
                }
                None => {
                    warn!("patron {} has a loan for unknown item {}, skipping it", patron.id, loan.item_id);
                }
            }
        }
        patron
    }

    pub fn patron_type(&self) -> PatronType {
        classify_patron(self.age)
    }

    pub fn find_loan(&self, item_id: i64) -> Option<&Loan> {
        self.loans.iter().find(|loan| loan.item_id() == item_id)
    }

    fn training_lines(&self) -> Vec<&'static str> {
        let mut lines = vec![];
        if self.gardening_trained {
            lines.push(" - gardening tools");
        }
        if self.carpentry_trained {
            lines.push(" - carpentry tools");
        }
        if self.makerspace_trained {
            lines.push(" - makerspace");
        }
        lines
    }
}

impl Identifiable for Patron {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Display for Patron {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Patron {}: {} (aged {})", self.id, self.name, self.age)?;
        writeln!(f, "Outstanding fees: ${:.2}", self.outstanding_fees)?;
        let training = self.training_lines();
        if training.is_empty() {
            writeln!(f, "Completed training: NONE")?;
        } else {
            writeln!(f, "Completed training:")?;
            for line in training {
                writeln!(f, "{}", line)?;
            }
        }
        match self.loans.len() {
            0 => write!(f, "No current loans"),
            1 => write!(f, "1 active loan:\n - {}", self.loans[0]),
            n => {
                write!(f, "{} active loans:", n)?;
                for loan in &self.loans {
                    write!(f, "\n - {}", loan)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&Patron> for PatronEntity {
    fn from(other: &Patron) -> Self {
        Self {
            patron_id: other.id,
            name: other.name.to_string(),
            age: other.age,
            outstanding_fees: other.outstanding_fees,
            gardening_tool_training: other.gardening_trained,
            carpentry_tool_training: other.carpentry_trained,
            makerspace_training: other.makerspace_trained,
            loans: other.loans.iter().map(|loan| LoanEntity {
                item_id: loan.item_id(),
                due_date: loan.due_date,
            }).collect(),
        }
    }
}
