use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::patrons::repository::PatronRepository;
use crate::patrons::repository::embedded_patron_repository::EmbeddedPatronRepository;
use crate::patrons::repository::json_patron_repository::JsonPatronRepository;

pub fn create_patron_repository(config: &Configuration) -> Box<dyn PatronRepository> {
    match config.store {
        RepositoryStore::JsonFile => Box::new(JsonPatronRepository::new(&config.patrons_path())),
        RepositoryStore::Embedded => Box::new(EmbeddedPatronRepository::default()),
    }
}
