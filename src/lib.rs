pub mod core;
pub mod utils;
pub mod rules;
pub mod catalog;
pub mod patrons;
pub mod loans;
pub mod search;
pub mod store;
pub mod input;
pub mod desk;
