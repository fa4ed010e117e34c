use crate::catalog::dto::Item;
use crate::core::domain::Identifiable;
use crate::patrons::dto::Patron;

// Names match exactly, case included.
pub fn find_patron_by_name<'a>(name: &str, patrons: &'a [Patron]) -> Vec<&'a Patron> {
    patrons.iter().filter(|p| p.name == name).collect()
}

pub fn find_patron_by_age(age: i64, patrons: &[Patron]) -> Vec<&Patron> {
    patrons.iter().filter(|p| p.age == age).collect()
}

pub fn find_patron_by_name_and_age<'a>(name: &str, age: i64, patrons: &'a [Patron]) -> Option<&'a Patron> {
    position_of_patron(name, age, patrons).map(|ndx| &patrons[ndx])
}

pub fn find_item_by_id(id: i64, catalogue: &[Item]) -> Option<&Item> {
    find_by_id(id, catalogue)
}

pub fn find_by_id<T: Identifiable>(id: i64, records: &[T]) -> Option<&T> {
    records.iter().find(|r| r.id() == id)
}

pub(crate) fn position_by_id<T: Identifiable>(id: i64, records: &[T]) -> Option<usize> {
    records.iter().position(|r| r.id() == id)
}

pub(crate) fn position_of_patron(name: &str, age: i64, patrons: &[Patron]) -> Option<usize> {
    patrons.iter().position(|p| p.name == name && p.age == age)
}
