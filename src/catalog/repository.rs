pub mod json_item_repository;
pub mod embedded_item_repository;

use crate::catalog::domain::model::ItemEntity;
use crate::core::repository::Repository;

pub trait ItemRepository: Repository<ItemEntity> {}
