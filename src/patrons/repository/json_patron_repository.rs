use std::path::{Path, PathBuf};
use tracing::debug;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::repository::PatronRepository;
use crate::utils::json::{read_records, write_records};

#[derive(Debug)]
pub(crate) struct JsonPatronRepository {
    path: PathBuf,
}

impl JsonPatronRepository {
    pub(crate) fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl Repository<PatronEntity> for JsonPatronRepository {
    fn load_all(&self) -> LibraryResult<Vec<PatronEntity>> {
        let patrons: Vec<PatronEntity> = read_records(&self.path)?;
        debug!("loaded {} patrons from {}", patrons.len(), self.path.display());
        Ok(patrons)
    }

    fn save_all(&self, entities: &[PatronEntity]) -> LibraryResult<usize> {
        let saved = write_records(&self.path, entities)?;
        debug!("saved {} patrons to {}", saved, self.path.display());
        Ok(saved)
    }
}

impl PatronRepository for JsonPatronRepository {}
