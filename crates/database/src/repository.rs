use crate::DbError;
use async_trait::async_trait;
use core_types::{Entity, Page, PageRequest, Sort};

/// Basic persistence operations for one entity type.
#[async_trait]
pub trait CrudRepository<T: Entity>: Send + Sync {
    /// Every record, in store default order (id ascending).
    async fn find_all(&self) -> Result<Vec<T>, DbError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, DbError>;

    /// Inserts the record when it has no id, otherwise updates the row in place.
    /// A record carrying an id that no longer exists is inserted under a fresh id.
    /// Returns the record as stored, id included.
    async fn save(&self, entity: T) -> Result<T, DbError>;

    /// Removes the row. Returns `false` when there was nothing to remove.
    async fn delete(&self, id: i64) -> Result<bool, DbError>;

    async fn count(&self) -> Result<u64, DbError>;

    /// Like `find_by_id`, but a missing record is an error.
    async fn get(&self, id: i64) -> Result<T, DbError> {
        self.find_by_id(id)
            .await?
            .ok_or(DbError::NotFound { entity: T::NAME, id })
    }
}

/// Paginated retrieval on top of the CRUD operations.
#[async_trait]
pub trait PagingRepository<T: Entity>: CrudRepository<T> {
    async fn find_page(&self, request: &PageRequest) -> Result<Page<T>, DbError>;
}

/// Checks the requested sort against the entity's sortable properties.
/// Without a sort the first sortable property is used, ascending.
pub(crate) fn resolve_sort<T: Entity>(sort: Option<&Sort>) -> Result<Sort, DbError> {
    match sort {
        Some(sort) if T::SORTABLE.contains(&sort.property.as_str()) => Ok(sort.clone()),
        Some(sort) => Err(DbError::InvalidSort {
            entity: T::NAME,
            property: sort.property.clone(),
        }),
        None => Ok(Sort::asc(T::SORTABLE[0])),
    }
}
