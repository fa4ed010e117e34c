use std::path::{Path, PathBuf};
use tracing::debug;
use crate::catalog::domain::model::ItemEntity;
use crate::catalog::repository::ItemRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::utils::json::{read_records, write_records};

#[derive(Debug)]
pub(crate) struct JsonItemRepository {
    path: PathBuf,
}

impl JsonItemRepository {
    pub(crate) fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl Repository<ItemEntity> for JsonItemRepository {
    fn load_all(&self) -> LibraryResult<Vec<ItemEntity>> {
        let items: Vec<ItemEntity> = read_records(&self.path)?;
        debug!("loaded {} catalogue items from {}", items.len(), self.path.display());
        Ok(items)
    }

    fn save_all(&self, entities: &[ItemEntity]) -> LibraryResult<usize> {
        write_records(&self.path, entities)
    }
}

impl ItemRepository for JsonItemRepository {}
