use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::repository::PatronRepository;
use crate::utils::json::parse_records;

const SEED_PATRONS: &str = include_str!("../../../data/patrons.json");

#[derive(Debug, Default)]
pub(crate) struct EmbeddedPatronRepository {}

impl Repository<PatronEntity> for EmbeddedPatronRepository {
    fn load_all(&self) -> LibraryResult<Vec<PatronEntity>> {
        parse_records(SEED_PATRONS)
    }

    fn save_all(&self, entities: &[PatronEntity]) -> LibraryResult<usize> {
        Ok(entities.len())
    }
}

impl PatronRepository for EmbeddedPatronRepository {}
