use chrono::{Duration, NaiveDate};
use tracing::{info, warn};
use crate::catalog::domain::Borrowable;
use crate::catalog::dto::Item;
use crate::core::library::{LibraryError, LibraryResult};
use crate::loans::domain::model::Loan;
use crate::patrons::dto::Patron;
use crate::rules::check_borrow;

// Lends one copy of the item to the patron, due requested_days after today.
// Nothing is mutated unless every check passes.
pub fn process_loan(patron: &mut Patron, item: &mut Item,
                    requested_days: i64, today: NaiveDate) -> LibraryResult<NaiveDate> {
    if requested_days < 1 {
        return Err(LibraryError::validation(
            format!("loan length must be at least one day, got {}", requested_days).as_str(), None));
    }
    check_borrow(item.category(), patron.age, requested_days, patron.outstanding_fees,
                 patron.gardening_trained, patron.carpentry_trained)?;
    if patron.find_loan(item.id).is_some() {
        return Err(LibraryError::not_granted(
            format!("patron {} already has item {} on loan", patron.id, item.id).as_str(),
            Some("already_on_loan".to_string())));
    }
    let due_date = Duration::try_days(requested_days)
        .and_then(|days| today.checked_add_signed(days))
        .ok_or_else(|| LibraryError::validation(
            format!("loan of {} days has no valid due date", requested_days).as_str(), None))?;
    item.lend_copy()?;
    patron.loans.push(Loan::new(item.item_ref(), due_date));
    info!("lent item {} to patron {} until {}", item.id, patron.id, due_date);
    Ok(due_date)
}

// Takes the patron's loan for item_id back and frees the copy in the catalogue.
pub fn process_return(patron: &mut Patron, catalogue: &mut [Item], item_id: i64) -> LibraryResult<()> {
    let position = patron.loans.iter().position(|loan| loan.item_id() == item_id)
        .ok_or_else(|| LibraryError::not_found(
            format!("patron {} has no loan for item {}", patron.id, item_id).as_str()))?;
    patron.loans.remove(position);
    match catalogue.iter_mut().find(|item| item.id == item_id) {
        Some(item) => item.receive_copy(),
        None => warn!("returned item {} is not in the catalogue", item_id),
    }
    info!("patron {} returned item {}", patron.id, item_id);
    Ok(())
}

pub fn find_loan(patron: &Patron, item_id: i64) -> Option<&Loan> {
    patron.find_loan(item_id)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::catalog::dto::Item;
    use crate::core::library::{ItemCategory, LibraryError};
    use crate::loans::domain::service::{find_loan, process_loan, process_return};
    use crate::patrons::dto::Patron;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
    }

    fn catalogue() -> Vec<Item> {
        vec![
            Item::new(8, "Alice in the Wonderland", ItemCategory::Book, 2024, 10),
            Item::new(3, "Cordless Drill", ItemCategory::CarpentryTool, 2021, 1),
            Item::new(12, "Sewing Machine", ItemCategory::Unknown, 2015, 1),
        ]
    }

    #[test]
    fn test_should_process_loan() {
        let mut patron = Patron::new(101, "John Manor", 25);
        let mut items = catalogue();
        let loans_before = patron.loans.len();
        let due = process_loan(&mut patron, &mut items[0], 10, today()).expect("should lend");
        assert_eq!(NaiveDate::from_ymd_opt(2024, 3, 11).expect("valid date"), due);
        assert_eq!(loans_before + 1, patron.loans.len());
        assert_eq!(1, items[0].on_loan);
        assert_eq!(due, find_loan(&patron, 8).expect("loan").due_date);
    }

    #[test]
    fn test_should_not_lend_beyond_category_limit() {
        let mut patron = Patron::new(101, "John Manor", 25);
        let mut items = catalogue();
        let res = process_loan(&mut patron, &mut items[0], 100, today());
        assert!(matches!(res, Err(LibraryError::NotGranted{ message: _, reason_code: _ })));
        assert!(patron.loans.is_empty());
        assert_eq!(0, items[0].on_loan);
    }

    #[test]
    fn test_should_not_lend_with_fees_owed() {
        let mut patron = Patron::new(101, "John Manor", 25);
        patron.outstanding_fees = 0.5;
        let mut items = catalogue();
        assert!(process_loan(&mut patron, &mut items[0], 10, today()).is_err());
        assert!(patron.loans.is_empty());
    }

    #[test]
    fn test_should_not_lend_unknown_category() {
        let mut patron = Patron::new(101, "John Manor", 25);
        let mut items = catalogue();
        assert!(process_loan(&mut patron, &mut items[2], 1, today()).is_err());
        assert_eq!(0, items[2].on_loan);
    }

    #[test]
    fn test_should_not_lend_same_item_twice() {
        let mut patron = Patron::new(101, "John Manor", 25);
        let mut items = catalogue();
        process_loan(&mut patron, &mut items[0], 10, today()).expect("should lend");
        let res = process_loan(&mut patron, &mut items[0], 10, today());
        assert!(matches!(res, Err(LibraryError::NotGranted{ message: _, reason_code: Some(ref code) }) if code == "already_on_loan"));
        assert_eq!(1, patron.loans.len());
        assert_eq!(1, items[0].on_loan);
    }

    #[test]
    fn test_should_not_lend_without_free_copy() {
        let mut first = Patron::new(1, "Maria Garcia", 42);
        let mut second = Patron::new(2, "Ann Bell", 40);
        let mut items = catalogue();
        process_loan(&mut first, &mut items[1], 7, today()).expect("should lend");
        assert!(process_loan(&mut second, &mut items[1], 7, today()).is_err());
        assert!(second.loans.is_empty());
        assert_eq!(1, items[1].on_loan);
    }

    #[test]
    fn test_should_reject_non_positive_length() {
        let mut patron = Patron::new(101, "John Manor", 25);
        let mut items = catalogue();
        let res = process_loan(&mut patron, &mut items[0], 0, today());
        assert!(matches!(res, Err(LibraryError::Validation{ message: _, reason_code: _ })));
    }

    #[test]
    fn test_should_process_return() {
        let mut patron = Patron::new(101, "John Manor", 25);
        let mut items = catalogue();
        let loans_before = patron.loans.len();
        process_loan(&mut patron, &mut items[0], 10, today()).expect("should lend");
        process_return(&mut patron, &mut items, 8).expect("should return");
        assert_eq!(loans_before, patron.loans.len());
        assert_eq!(0, items[0].on_loan);
        assert!(find_loan(&patron, 8).is_none());
    }

    #[test]
    fn test_should_fail_return_without_loan() {
        let mut patron = Patron::new(101, "John Manor", 25);
        let mut items = catalogue();
        items[0].on_loan = 4;
        let res = process_return(&mut patron, &mut items, 8);
        assert!(matches!(res, Err(LibraryError::NotFound{ message: _ })));
        assert_eq!(4, items[0].on_loan);
    }
}
