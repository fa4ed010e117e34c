use crate::core::domain::Identifiable;
use crate::core::library::ItemCategory;

pub mod model;

pub trait Borrowable: Identifiable {
    fn category(&self) -> ItemCategory;
    fn is_available(&self) -> bool;
}
