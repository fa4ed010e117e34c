use crate::catalog::repository::ItemRepository;
use crate::catalog::repository::embedded_item_repository::EmbeddedItemRepository;
use crate::catalog::repository::json_item_repository::JsonItemRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

pub fn create_item_repository(config: &Configuration) -> Box<dyn ItemRepository> {
    match config.store {
        RepositoryStore::JsonFile => Box::new(JsonItemRepository::new(&config.catalogue_path())),
        RepositoryStore::Embedded => Box::new(EmbeddedItemRepository::default()),
    }
}
