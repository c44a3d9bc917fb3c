use crate::repository::{resolve_sort, CrudRepository, PagingRepository};
use crate::DbError;
use async_trait::async_trait;
use core_types::{Direction, Entity, Page, PageRequest};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// A process-local entity store with the same contract as the PostgreSQL DAOs.
///
/// Ids are assigned from a counter starting at 1 and are never reused.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    state: RwLock<State<T>>,
}

#[derive(Debug)]
struct State<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T: Entity> State<T> {
    fn insert(&mut self, mut entity: T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        entity.set_id(id);
        self.rows.insert(id, entity.clone());
        entity
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Builds a store pre-populated with `records`. Records that carry an id keep it.
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let mut state = State { rows: BTreeMap::new(), next_id: 1 };
        for record in records {
            match record.id() {
                Some(id) => {
                    state.next_id = state.next_id.max(id + 1);
                    state.rows.insert(id, record);
                }
                None => {
                    state.insert(record);
                }
            }
        }
        Self { state: RwLock::new(state) }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> CrudRepository<T> for InMemoryRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, DbError> {
        Ok(self.state.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, DbError> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, entity: T) -> Result<T, DbError> {
        let mut state = self.state.write().await;
        match entity.id() {
            Some(id) if state.rows.contains_key(&id) => {
                state.rows.insert(id, entity.clone());
                Ok(entity)
            }
            _ => Ok(state.insert(entity)),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, DbError> {
        Ok(self.state.write().await.rows.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, DbError> {
        Ok(self.state.read().await.rows.len() as u64)
    }
}

#[async_trait]
impl<T: Entity> PagingRepository<T> for InMemoryRepository<T> {
    async fn find_page(&self, request: &PageRequest) -> Result<Page<T>, DbError> {
        let sort = resolve_sort::<T>(request.sort.as_ref())?;
        let state = self.state.read().await;

        let mut rows: Vec<&T> = state.rows.values().collect();
        rows.sort_by(|a, b| {
            let ordering = a
                .compare_by(b, &sort.property)
                .unwrap_or(std::cmp::Ordering::Equal);
            let ordering = match sort.direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            };
            ordering.then_with(|| a.id().cmp(&b.id()))
        });

        let content = rows
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.size as usize)
            .cloned()
            .collect();
        Ok(Page::new(content, request, state.rows.len() as u64))
    }
}
