use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::core::repository::RepositoryStore;

// Identifiable defines common traits that can be shared by stored records
pub trait Identifiable {
    fn id(&self) -> i64;
}

pub const PATRONS_FILE: &str = "patrons.json";
pub const CATALOGUE_FILE: &str = "library_catalogue.json";

// Configuration abstracts config options for the library desk
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub data_dir: PathBuf,
    pub store: RepositoryStore,
    pub log_level: String,
    pub save_on_quit: bool,
}

impl Configuration {
    pub fn new(data_dir: &str) -> Self {
        Configuration {
            data_dir: PathBuf::from(data_dir),
            store: RepositoryStore::JsonFile,
            log_level: "warn".to_string(),
            save_on_quit: false,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Configuration::new(
            lookup("LIBRARY_DATA_DIR").unwrap_or_else(|| "data".to_string()).as_str());
        if let Some(store) = lookup("LIBRARY_STORE") {
            config.store = RepositoryStore::from(store);
        }
        if let Some(level) = lookup("LIBRARY_LOG_LEVEL") {
            config.log_level = level;
        }
        if let Some(save) = lookup("LIBRARY_SAVE_ON_QUIT") {
            config.save_on_quit = matches!(save.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        config
    }

    pub fn patrons_path(&self) -> PathBuf {
        self.data_dir.join(PATRONS_FILE)
    }

    pub fn catalogue_path(&self) -> PathBuf {
        self.data_dir.join(CATALOGUE_FILE)
    }
}
