use crate::repository::{resolve_sort, CrudRepository, PagingRepository};
use crate::DbError;
use async_trait::async_trait;
use core_types::{Page, PageRequest, Qualite};
use sqlx::postgres::PgPool;

const COLUMNS: &str = "id, name, colour";

/// PostgreSQL-backed store for the `qualites` table.
#[derive(Debug, Clone)]
pub struct PgQualiteDao {
    pool: PgPool,
}

impl PgQualiteDao {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, qualite: &Qualite) -> Result<Qualite, DbError> {
        let saved = sqlx::query_as::<_, Qualite>(&format!(
            "INSERT INTO qualites (name, colour) VALUES ($1, $2) RETURNING {COLUMNS}"
        ))
        .bind(&qualite.name)
        .bind(&qualite.colour)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }
}

#[async_trait]
impl CrudRepository<Qualite> for PgQualiteDao {
    async fn find_all(&self) -> Result<Vec<Qualite>, DbError> {
        let qualites = sqlx::query_as::<_, Qualite>(&format!(
            "SELECT {COLUMNS} FROM qualites ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(qualites)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Qualite>, DbError> {
        let qualite = sqlx::query_as::<_, Qualite>(&format!(
            "SELECT {COLUMNS} FROM qualites WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(qualite)
    }

    async fn save(&self, qualite: Qualite) -> Result<Qualite, DbError> {
        let Some(id) = qualite.id else {
            return self.insert(&qualite).await;
        };

        let updated = sqlx::query_as::<_, Qualite>(&format!(
            "UPDATE qualites SET name = $1, colour = $2 WHERE id = $3 RETURNING {COLUMNS}"
        ))
        .bind(&qualite.name)
        .bind(&qualite.colour)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(qualite) => Ok(qualite),
            None => self.insert(&qualite).await,
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM qualites WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, DbError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM qualites")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }
}

#[async_trait]
impl PagingRepository<Qualite> for PgQualiteDao {
    async fn find_page(&self, request: &PageRequest) -> Result<Page<Qualite>, DbError> {
        // The sort property comes from a fixed whitelist, so it is safe to splice.
        let sort = resolve_sort::<Qualite>(request.sort.as_ref())?;
        let content = sqlx::query_as::<_, Qualite>(&format!(
            "SELECT {COLUMNS} FROM qualites ORDER BY {} {}, id ASC LIMIT $1 OFFSET $2",
            sort.property,
            sort.direction.as_sql()
        ))
        .bind(i64::from(request.size))
        .bind(request.offset() as i64)
        .fetch_all(&self.pool)
        .await?;

        let total = self.count().await?;
        Ok(Page::new(content, request, total))
    }
}

/// The quality tiers inserted by the initial migration, for stores that start empty.
pub fn default_qualites() -> Vec<Qualite> {
    vec![
        Qualite::new("Commun", "#9d9d9d"),
        Qualite::new("Rare", "#0070dd"),
        Qualite::new("Épique", "#a335ee"),
        Qualite::new("Légendaire", "#ff8000"),
    ]
}
