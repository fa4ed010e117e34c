use crate::catalog::domain::model::ItemEntity;
use crate::catalog::repository::ItemRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::utils::json::parse_records;

const SEED_CATALOGUE: &str = include_str!("../../../data/library_catalogue.json");

#[derive(Debug, Default)]
pub(crate) struct EmbeddedItemRepository {}

impl Repository<ItemEntity> for EmbeddedItemRepository {
    fn load_all(&self) -> LibraryResult<Vec<ItemEntity>> {
        parse_records(SEED_CATALOGUE)
    }

    fn save_all(&self, entities: &[ItemEntity]) -> LibraryResult<usize> {
        Ok(entities.len())
    }
}

impl ItemRepository for EmbeddedItemRepository {}
