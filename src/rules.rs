use crate::core::library::{ItemCategory, LibraryError, LibraryResult, PatronType};

pub const ADULT_AGE: i64 = 18;
pub const ELDERLY_AGE: i64 = 90;

pub const BOOK_LOAN_DAYS: i64 = 56;
pub const GARDENING_TOOL_LOAN_DAYS: i64 = 28;
pub const CARPENTRY_TOOL_LOAN_DAYS: i64 = 14;

// Rules take primitive values only, never patrons or items.
pub fn classify_patron(age: i64) -> PatronType {
    if age < 0 {
        PatronType::Error
    } else if age < ADULT_AGE {
        PatronType::Minor
    } else if age < ELDERLY_AGE {
        PatronType::Adult
    } else {
        PatronType::Elderly
    }
}

/// Percentage taken off fees for a patron of the given age.
pub fn discount_for(age: i64) -> LibraryResult<u32> {
    match age {
        a if a < 0 => Err(LibraryError::validation(
            format!("no discount band for age {}", age).as_str(), Some("negative_age".to_string()))),
        a if a < 50 => Ok(0),
        a if a < 65 => Ok(10),
        a if a < ELDERLY_AGE => Ok(15),
        _ => Ok(100),
    }
}

pub fn max_loan_days(category: ItemCategory) -> Option<i64> {
    match category {
        ItemCategory::Book => Some(BOOK_LOAN_DAYS),
        ItemCategory::GardeningTool => Some(GARDENING_TOOL_LOAN_DAYS),
        ItemCategory::CarpentryTool => Some(CARPENTRY_TOOL_LOAN_DAYS),
        ItemCategory::Unknown => None,
    }
}

// Age and training are accepted so category policies can use them; the general
// rule only looks at fees and loan length.
pub fn check_borrow(category: ItemCategory, _age: i64, requested_days: i64, outstanding_fees: f64,
                    _gardening_trained: bool, _carpentry_trained: bool) -> LibraryResult<()> {
    let max_days = max_loan_days(category).ok_or_else(|| LibraryError::not_granted(
        format!("{} items cannot be borrowed", category).as_str(), Some("unknown_category".to_string())))?;
    if outstanding_fees > 0.0 {
        return Err(LibraryError::not_granted(
            format!("patron owes ${:.2} in fees", outstanding_fees).as_str(), Some("fees_owed".to_string())));
    }
    if requested_days > max_days {
        return Err(LibraryError::not_granted(
            format!("{} loans are limited to {} days, {} requested", category, max_days, requested_days).as_str(),
            Some("loan_too_long".to_string())));
    }
    Ok(())
}

pub fn can_borrow(category: ItemCategory, age: i64, requested_days: i64, outstanding_fees: f64,
                  gardening_trained: bool, carpentry_trained: bool) -> bool {
    check_borrow(category, age, requested_days, outstanding_fees, gardening_trained, carpentry_trained).is_ok()
}

pub fn can_borrow_carpentry_tool(age: i64, requested_days: i64, outstanding_fees: f64,
                                 carpentry_trained: bool) -> bool {
    classify_patron(age) == PatronType::Adult
        && outstanding_fees == 0.0
        && requested_days <= CARPENTRY_TOOL_LOAN_DAYS
        && carpentry_trained
}

pub fn check_makerspace(age: i64, outstanding_fees: f64, makerspace_trained: bool) -> LibraryResult<()> {
    let patron_type = classify_patron(age);
    if patron_type != PatronType::Adult {
        return Err(LibraryError::not_granted(
            format!("makerspace is for adults aged {} to {}, patron type is {}",
                    ADULT_AGE, ELDERLY_AGE - 1, patron_type).as_str(), Some("age".to_string())));
    }
    if outstanding_fees > 0.0 {
        return Err(LibraryError::not_granted(
            format!("patron owes ${:.2} in fees", outstanding_fees).as_str(), Some("fees_owed".to_string())));
    }
    if !makerspace_trained {
        return Err(LibraryError::not_granted(
            "patron has not completed makerspace training", Some("training".to_string())));
    }
    Ok(())
}

pub fn can_use_makerspace(age: i64, outstanding_fees: f64, makerspace_trained: bool) -> bool {
    check_makerspace(age, outstanding_fees, makerspace_trained).is_ok()
}

#[cfg(test)]
mod tests {
    use crate::core::library::{ItemCategory, LibraryError, PatronType};
    use crate::rules::{can_borrow, can_borrow_carpentry_tool, can_use_makerspace, check_borrow,
                       check_makerspace, classify_patron, discount_for, max_loan_days};

    #[test]
    fn test_should_classify_patrons_by_age() {
        assert_eq!(PatronType::Error, classify_patron(-5));
        assert_eq!(PatronType::Error, classify_patron(-1));
        assert_eq!(PatronType::Minor, classify_patron(0));
        assert_eq!(PatronType::Minor, classify_patron(15));
        assert_eq!(PatronType::Minor, classify_patron(17));
        assert_eq!(PatronType::Adult, classify_patron(18));
        assert_eq!(PatronType::Adult, classify_patron(50));
        assert_eq!(PatronType::Adult, classify_patron(89));
        assert_eq!(PatronType::Elderly, classify_patron(90));
        assert_eq!(PatronType::Elderly, classify_patron(95));
    }

    #[test]
    fn test_should_calculate_discounts() {
        assert!(matches!(discount_for(-5), Err(LibraryError::Validation{ message: _, reason_code: _ })));
        assert_eq!(0, discount_for(25).expect("discount"));
        assert_eq!(0, discount_for(49).expect("discount"));
        assert_eq!(10, discount_for(50).expect("discount"));
        assert_eq!(10, discount_for(60).expect("discount"));
        assert_eq!(15, discount_for(65).expect("discount"));
        assert_eq!(15, discount_for(75).expect("discount"));
        assert_eq!(100, discount_for(90).expect("discount"));
        assert_eq!(100, discount_for(95).expect("discount"));
    }

    #[test]
    fn test_should_cap_loan_days_by_category() {
        assert_eq!(Some(56), max_loan_days(ItemCategory::Book));
        assert_eq!(Some(28), max_loan_days(ItemCategory::GardeningTool));
        assert_eq!(Some(14), max_loan_days(ItemCategory::CarpentryTool));
        assert_eq!(None, max_loan_days(ItemCategory::Unknown));
    }

    #[test]
    fn test_should_borrow_book() {
        assert!(can_borrow(ItemCategory::Book, 15, 10, 0.0, true, true));
        assert!(can_borrow(ItemCategory::Book, 15, 56, 0.0, false, false));
        assert!(!can_borrow(ItemCategory::Book, 15, 60, 0.0, true, true));
        assert!(!can_borrow(ItemCategory::Book, 15, 10, 10.0, true, true));
    }

    #[test]
    fn test_should_borrow_gardening_tool() {
        assert!(can_borrow(ItemCategory::GardeningTool, 15, 10, 0.0, true, true));
        assert!(!can_borrow(ItemCategory::GardeningTool, 15, 60, 0.0, true, true));
        assert!(!can_borrow(ItemCategory::GardeningTool, 15, 10, 10.0, true, true));
        assert!(can_borrow(ItemCategory::GardeningTool, 15, 28, 0.0, true, true));
        assert!(!can_borrow(ItemCategory::GardeningTool, 15, 29, 0.0, true, true));
    }

    #[test]
    fn test_should_refuse_long_carpentry_loan() {
        assert!(!can_borrow(ItemCategory::CarpentryTool, 50, 60, 0.0, true, true));
        assert!(can_borrow(ItemCategory::CarpentryTool, 50, 14, 0.0, true, true));
        assert!(!can_borrow(ItemCategory::CarpentryTool, 50, 15, 0.0, true, true));
        let res = check_borrow(ItemCategory::CarpentryTool, 50, 15, 0.0, true, true);
        assert!(matches!(res, Err(LibraryError::NotGranted{ message: _, reason_code: Some(ref code) }) if code == "loan_too_long"));
    }

    #[test]
    fn test_should_refuse_unknown_category() {
        assert!(!can_borrow(ItemCategory::from("BOOK"), 50, 10, 0.0, true, true));
        let res = check_borrow(ItemCategory::Unknown, 50, 10, 0.0, true, true);
        assert!(matches!(res, Err(LibraryError::NotGranted{ message: _, reason_code: Some(ref code) }) if code == "unknown_category"));
    }

    #[test]
    fn test_should_explain_borrow_refusal() {
        let res = check_borrow(ItemCategory::Book, 25, 100, 0.0, false, false);
        assert!(matches!(res, Err(LibraryError::NotGranted{ message: _, reason_code: Some(ref code) }) if code == "loan_too_long"));
        let res = check_borrow(ItemCategory::Book, 25, 10, 2.5, false, false);
        assert!(matches!(res, Err(LibraryError::NotGranted{ message: _, reason_code: Some(ref code) }) if code == "fees_owed"));
    }

    #[test]
    fn test_should_borrow_carpentry_tool() {
        assert!(can_borrow_carpentry_tool(50, 10, 0.0, true));
        assert!(!can_borrow_carpentry_tool(95, 10, 0.0, true));
        assert!(!can_borrow_carpentry_tool(15, 10, 0.0, true));
        assert!(!can_borrow_carpentry_tool(50, 10, 10.0, true));
        assert!(!can_borrow_carpentry_tool(50, 15, 0.0, true));
        assert!(!can_borrow_carpentry_tool(50, 10, 0.0, false));
        assert!(!can_borrow_carpentry_tool(18, 14, 0.0, false));
        assert!(can_borrow_carpentry_tool(18, 14, 0.0, true));
        assert!(can_borrow_carpentry_tool(89, 14, 0.0, true));
    }

    #[test]
    fn test_should_use_makerspace() {
        assert!(!can_use_makerspace(-5, 0.0, true));
        assert!(!can_use_makerspace(15, 0.0, true));
        assert!(!can_use_makerspace(95, 0.0, true));
        assert!(!can_use_makerspace(50, 1.0, true));
        assert!(!can_use_makerspace(50, 0.0, false));
        assert!(can_use_makerspace(50, 0.0, true));
    }

    #[test]
    fn test_should_explain_makerspace_refusal() {
        let res = check_makerspace(50, 0.0, false);
        assert!(matches!(res, Err(LibraryError::NotGranted{ message: _, reason_code: Some(ref code) }) if code == "training"));
        let res = check_makerspace(5, 0.0, true);
        assert!(matches!(res, Err(LibraryError::NotGranted{ message: _, reason_code: Some(ref code) }) if code == "age"));
    }
}
