use crate::repository::CrudRepository;
use crate::DbError;
use async_trait::async_trait;
use core_types::Potion;
use sqlx::postgres::PgPool;

const COLUMNS: &str = "id, name, description, effect_description, heal_amount";

/// PostgreSQL-backed store for the `potions` table.
#[derive(Debug, Clone)]
pub struct PgPotionDao {
    pool: PgPool,
}

impl PgPotionDao {
    /// Creates a new `PgPotionDao` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, potion: &Potion) -> Result<Potion, DbError> {
        let saved = sqlx::query_as::<_, Potion>(&format!(
            "INSERT INTO potions (name, description, effect_description, heal_amount)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        ))
        .bind(&potion.name)
        .bind(&potion.description)
        .bind(&potion.effect_description)
        .bind(potion.heal_amount)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }
}

#[async_trait]
impl CrudRepository<Potion> for PgPotionDao {
    async fn find_all(&self) -> Result<Vec<Potion>, DbError> {
        let potions = sqlx::query_as::<_, Potion>(&format!(
            "SELECT {COLUMNS} FROM potions ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(potions)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Potion>, DbError> {
        let potion = sqlx::query_as::<_, Potion>(&format!(
            "SELECT {COLUMNS} FROM potions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(potion)
    }

    async fn save(&self, potion: Potion) -> Result<Potion, DbError> {
        let Some(id) = potion.id else {
            return self.insert(&potion).await;
        };

        let updated = sqlx::query_as::<_, Potion>(&format!(
            "UPDATE potions
             SET name = $1, description = $2, effect_description = $3, heal_amount = $4
             WHERE id = $5
             RETURNING {COLUMNS}"
        ))
        .bind(&potion.name)
        .bind(&potion.description)
        .bind(&potion.effect_description)
        .bind(potion.heal_amount)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(potion) => Ok(potion),
            None => {
                tracing::debug!(id, "Potion to update is gone, inserting it anew.");
                self.insert(&potion).await
            }
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM potions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, DbError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM potions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }
}
