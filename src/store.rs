use tracing::info;
use crate::catalog::domain::model::ItemEntity;
use crate::catalog::dto::Item;
use crate::catalog::repository::ItemRepository;
use crate::core::library::LibraryResult;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::dto::Patron;
use crate::patrons::repository::PatronRepository;

// DataStore owns the patrons and the catalogue for the whole session. Every
// screen reads and writes these collections in place.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    pub patrons: Vec<Patron>,
    pub catalogue: Vec<Item>,
}

impl DataStore {
    pub fn new(patrons: Vec<Patron>, catalogue: Vec<Item>) -> Self {
        Self { patrons, catalogue }
    }

    pub fn load(patron_repository: &dyn PatronRepository,
                item_repository: &dyn ItemRepository) -> LibraryResult<Self> {
        let catalogue: Vec<Item> = item_repository.load_all()?.iter().map(Item::from).collect();
        let patrons: Vec<Patron> = patron_repository.load_all()?.iter()
            .map(|p| Patron::from_entity(p, &catalogue)).collect();
        info!("loaded {} patrons and {} catalogue items", patrons.len(), catalogue.len());
        Ok(Self::new(patrons, catalogue))
    }

    pub fn save(&self, patron_repository: &dyn PatronRepository,
                item_repository: &dyn ItemRepository) -> LibraryResult<()> {
        let items: Vec<ItemEntity> = self.catalogue.iter().map(ItemEntity::from).collect();
        item_repository.save_all(&items)?;
        let patrons: Vec<PatronEntity> = self.patrons.iter().map(PatronEntity::from).collect();
        patron_repository.save_all(&patrons)?;
        info!("saved {} patrons and {} catalogue items", patrons.len(), items.len());
        Ok(())
    }

    // one past the highest id; when that overflows, the lowest positive id not taken
    pub fn next_patron_id(&self) -> i64 {
        let max_id = self.patrons.iter().map(|p| p.id).max().unwrap_or(0);
        max_id.checked_add(1).unwrap_or_else(|| self.lowest_free_patron_id())
    }

    fn lowest_free_patron_id(&self) -> i64 {
        let mut ids: Vec<i64> = self.patrons.iter().map(|p| p.id).filter(|id| *id > 0).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.iter().zip(1i64..)
            .find(|(id, expected)| **id != *expected)
            .map(|(_, expected)| expected)
            .unwrap_or(ids.len() as i64 + 1)
    }

    pub fn register_patron(&mut self, name: &str, age: i64) -> &Patron {
        let patron = Patron::new(self.next_patron_id(), name, age);
        info!("registered patron {} ({})", patron.id, patron.name);
        let ndx = self.patrons.len();
        self.patrons.push(patron);
        &self.patrons[ndx]
    }
}
