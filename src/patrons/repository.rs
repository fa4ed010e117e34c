pub mod json_patron_repository;
pub mod embedded_patron_repository;

use crate::core::repository::Repository;
use crate::patrons::domain::model::PatronEntity;

pub trait PatronRepository: Repository<PatronEntity> {}
