use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

pub trait Repository<Entity> {
    // loads every stored entity
    fn load_all(&self) -> LibraryResult<Vec<Entity>>;

    // replaces the stored entities
    fn save_all(&self, entities: &[Entity]) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    JsonFile,
    // seed records compiled into the binary; saving is a no-op
    Embedded,
}

impl From<String> for RepositoryStore {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "embedded" => RepositoryStore::Embedded,
            _ => RepositoryStore::JsonFile,
        }
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::JsonFile => write!(f, "json"),
            RepositoryStore::Embedded => write!(f, "embedded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_format_repository_store() {
        for store in vec![RepositoryStore::JsonFile, RepositoryStore::Embedded] {
            assert_eq!(store, RepositoryStore::from(store.to_string()));
        }
        assert_eq!(RepositoryStore::JsonFile, RepositoryStore::from("dynamo".to_string()));
    }
}
