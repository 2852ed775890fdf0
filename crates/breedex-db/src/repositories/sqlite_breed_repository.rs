//! `SQLite` implementation of the `BreedRepository` trait.

use async_trait::async_trait;
use sqlx::{Row, SqliteConnection, SqlitePool};
use tokio::sync::broadcast;
use tracing::debug;

use breedex_core::{BreedRecord, BreedRepository, CacheChange, RepositoryError, Species};

use super::row_mappers::{BREED_SELECT_COLUMNS, encode_images, row_to_breed, storage};

/// Capacity of the change notification channel.
const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// `SQLite` implementation of the `BreedRepository` trait.
///
/// Holds a connection pool and the sending half of the change channel.
/// Dropping the repository closes every subscriber's receiver.
pub struct SqliteBreedRepository {
    pool: SqlitePool,
    changes: broadcast::Sender<CacheChange>,
}

impl SqliteBreedRepository {
    /// Create a new `SQLite` breed repository.
    pub fn new(pool: SqlitePool) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self { pool, changes }
    }

    fn notify(&self, species: Species) {
        // No subscribers is fine
        let _ = self.changes.send(CacheChange { species });
    }
}

fn position(base: i64, offset: usize) -> i64 {
    base.saturating_add(i64::try_from(offset).unwrap_or(i64::MAX))
}

async fn insert_breed(
    conn: &mut SqliteConnection,
    record: &BreedRecord,
    species: Species,
    position: i64,
    fetched_at: &str,
) -> Result<(), RepositoryError> {
    let images = encode_images(&record.additional_images)?;

    sqlx::query(
        r"INSERT OR IGNORE INTO breeds (
            species, id, name, origin, temperament, description, life_span,
            image_url, additional_images, is_favorite, position, fetched_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(species.as_str())
    .bind(&record.id)
    .bind(&record.name)
    .bind(&record.origin)
    .bind(&record.temperament)
    .bind(&record.description)
    .bind(&record.life_span)
    .bind(&record.image_url)
    .bind(&images)
    .bind(record.is_favorite)
    .bind(position)
    .bind(fetched_at)
    .execute(&mut *conn)
    .await
    .map_err(storage)?;

    Ok(())
}

fn now() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[async_trait]
impl BreedRepository for SqliteBreedRepository {
    async fn replace_species(
        &self,
        species: Species,
        records: &[BreedRecord],
    ) -> Result<(), RepositoryError> {
        let fetched_at = now();
        let mut tx = self.pool.begin().await.map_err(storage)?;

        sqlx::query("DELETE FROM breeds WHERE species = ?")
            .bind(species.as_str())
            .execute(&mut *tx)
            .await
            .map_err(storage)?;

        for (offset, record) in records.iter().enumerate() {
            insert_breed(&mut tx, record, species, position(0, offset), &fetched_at).await?;
        }

        tx.commit().await.map_err(storage)?;
        debug!(species = %species, count = records.len(), "Replaced cached breeds");
        self.notify(species);
        Ok(())
    }

    async fn append_species(
        &self,
        species: Species,
        records: &[BreedRecord],
    ) -> Result<(), RepositoryError> {
        let fetched_at = now();
        let mut tx = self.pool.begin().await.map_err(storage)?;

        let (base,): (i64,) = sqlx::query_as(
            "SELECT COALESCE(MAX(position), -1) + 1 FROM breeds WHERE species = ?",
        )
        .bind(species.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(storage)?;

        for (offset, record) in records.iter().enumerate() {
            insert_breed(&mut tx, record, species, position(base, offset), &fetched_at).await?;
        }

        tx.commit().await.map_err(storage)?;
        debug!(species = %species, count = records.len(), "Appended cached breeds");
        self.notify(species);
        Ok(())
    }

    async fn list(
        &self,
        species: Species,
        favorites_only: bool,
    ) -> Result<Vec<BreedRecord>, RepositoryError> {
        let query = format!(
            "SELECT {BREED_SELECT_COLUMNS} FROM breeds
             WHERE species = ? AND (? = 0 OR is_favorite = 1)
             ORDER BY position"
        );

        let rows = sqlx::query(&query)
            .bind(species.as_str())
            .bind(favorites_only)
            .fetch_all(&self.pool)
            .await
            .map_err(storage)?;

        rows.iter().map(row_to_breed).collect()
    }

    async fn get(
        &self,
        species: Species,
        id: &str,
    ) -> Result<Option<BreedRecord>, RepositoryError> {
        let query = format!("SELECT {BREED_SELECT_COLUMNS} FROM breeds WHERE species = ? AND id = ?");

        let row = sqlx::query(&query)
            .bind(species.as_str())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage)?;

        row.as_ref().map(row_to_breed).transpose()
    }

    async fn toggle_favorite(
        &self,
        species: Species,
        id: &str,
    ) -> Result<Option<bool>, RepositoryError> {
        let row = sqlx::query(
            "UPDATE breeds SET is_favorite = 1 - is_favorite
             WHERE species = ? AND id = ?
             RETURNING is_favorite",
        )
        .bind(species.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let state: bool = row.try_get("is_favorite").map_err(storage)?;
        self.notify(species);
        Ok(Some(state))
    }

    async fn set_additional_images(
        &self,
        species: Species,
        id: &str,
        images: &[String],
    ) -> Result<(), RepositoryError> {
        let json = encode_images(images)?;

        let result =
            sqlx::query("UPDATE breeds SET additional_images = ? WHERE species = ? AND id = ?")
                .bind(&json)
                .bind(species.as_str())
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(storage)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Breed {species}/{id}")));
        }

        self.notify(species);
        Ok(())
    }

    fn changes(&self) -> broadcast::Receiver<CacheChange> {
        self.changes.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    async fn repo() -> SqliteBreedRepository {
        SqliteBreedRepository::new(setup_test_database().await.unwrap())
    }

    fn breed(species: Species, id: &str, favorite: bool) -> BreedRecord {
        let mut record = BreedRecord::new(species, id, format!("Breed {id}"));
        record.is_favorite = favorite;
        record.life_span = "10 - 12".to_string();
        record
    }

    fn ids(records: &[BreedRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_replace_then_list_preserves_order_and_fields() {
        let repo = repo().await;
        let mut first = breed(Species::Cat, "b", true);
        first.image_url = Some("https://cdn.example/b.jpg".to_string());
        first.additional_images = vec!["u1".to_string()];

        repo.replace_species(Species::Cat, &[first.clone(), breed(Species::Cat, "a", false)])
            .await
            .unwrap();

        let listed = repo.list(Species::Cat, false).await.unwrap();
        assert_eq!(ids(&listed), vec!["b", "a"]);
        assert_eq!(listed[0], first);
    }

    #[tokio::test]
    async fn test_replace_drops_previous_records_of_species_only() {
        let repo = repo().await;
        repo.replace_species(Species::Cat, &[breed(Species::Cat, "a", false)])
            .await
            .unwrap();
        repo.replace_species(Species::Dog, &[breed(Species::Dog, "1", false)])
            .await
            .unwrap();

        repo.replace_species(Species::Cat, &[breed(Species::Cat, "z", false)])
            .await
            .unwrap();

        assert_eq!(ids(&repo.list(Species::Cat, false).await.unwrap()), vec!["z"]);
        assert_eq!(ids(&repo.list(Species::Dog, false).await.unwrap()), vec!["1"]);
    }

    #[tokio::test]
    async fn test_same_id_in_both_species_is_allowed() {
        let repo = repo().await;
        repo.replace_species(Species::Cat, &[breed(Species::Cat, "1", true)])
            .await
            .unwrap();
        repo.replace_species(Species::Dog, &[breed(Species::Dog, "1", false)])
            .await
            .unwrap();

        assert!(repo.get(Species::Cat, "1").await.unwrap().unwrap().is_favorite);
        assert!(!repo.get(Species::Dog, "1").await.unwrap().unwrap().is_favorite);
    }

    #[tokio::test]
    async fn test_failed_replace_keeps_previous_set() {
        let pool = setup_test_database().await.unwrap();
        sqlx::query(
            "CREATE TRIGGER reject_boom BEFORE INSERT ON breeds
             WHEN NEW.id = 'boom'
             BEGIN SELECT RAISE(ABORT, 'rejected'); END",
        )
        .execute(&pool)
        .await
        .unwrap();

        let repo = SqliteBreedRepository::new(pool);
        repo.replace_species(Species::Cat, &[breed(Species::Cat, "a", true)])
            .await
            .unwrap();
        let mut changes = repo.changes();

        let result = repo
            .replace_species(
                Species::Cat,
                &[breed(Species::Cat, "x", false), breed(Species::Cat, "boom", false)],
            )
            .await;

        assert!(matches!(result, Err(RepositoryError::Storage(_))));
        let listed = repo.list(Species::Cat, false).await.unwrap();
        assert_eq!(ids(&listed), vec!["a"]);
        assert!(listed[0].is_favorite);
        assert!(changes.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_append_skips_known_ids_and_keeps_order() {
        let repo = repo().await;
        repo.replace_species(
            Species::Cat,
            &[breed(Species::Cat, "a", true), breed(Species::Cat, "b", false)],
        )
        .await
        .unwrap();

        let mut clash = breed(Species::Cat, "a", false);
        clash.name = "Changed".to_string();
        repo.append_species(Species::Cat, &[clash, breed(Species::Cat, "c", false)])
            .await
            .unwrap();

        let listed = repo.list(Species::Cat, false).await.unwrap();
        assert_eq!(ids(&listed), vec!["a", "b", "c"]);
        assert_eq!(listed[0].name, "Breed a");
        assert!(listed[0].is_favorite);
    }

    #[tokio::test]
    async fn test_append_to_empty_species() {
        let repo = repo().await;
        repo.append_species(Species::Dog, &[breed(Species::Dog, "1", false)])
            .await
            .unwrap();
        assert_eq!(ids(&repo.list(Species::Dog, false).await.unwrap()), vec!["1"]);
    }

    #[tokio::test]
    async fn test_list_favorites_only() {
        let repo = repo().await;
        repo.replace_species(
            Species::Cat,
            &[breed(Species::Cat, "a", false), breed(Species::Cat, "b", true)],
        )
        .await
        .unwrap();

        assert_eq!(ids(&repo.list(Species::Cat, true).await.unwrap()), vec!["b"]);
    }

    #[tokio::test]
    async fn test_toggle_favorite_flips_and_reports_unknown() {
        let repo = repo().await;
        repo.replace_species(Species::Cat, &[breed(Species::Cat, "a", false)])
            .await
            .unwrap();

        assert_eq!(repo.toggle_favorite(Species::Cat, "a").await.unwrap(), Some(true));
        assert_eq!(repo.toggle_favorite(Species::Cat, "a").await.unwrap(), Some(false));
        assert_eq!(repo.toggle_favorite(Species::Cat, "nope").await.unwrap(), None);
        assert_eq!(repo.toggle_favorite(Species::Dog, "a").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_additional_images() {
        let repo = repo().await;
        repo.replace_species(Species::Cat, &[breed(Species::Cat, "a", false)])
            .await
            .unwrap();

        let images = vec!["u1".to_string(), "u2".to_string()];
        repo.set_additional_images(Species::Cat, "a", &images)
            .await
            .unwrap();
        assert_eq!(
            repo.get(Species::Cat, "a").await.unwrap().unwrap().additional_images,
            images
        );

        assert!(matches!(
            repo.set_additional_images(Species::Cat, "ghost", &images).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_writes_publish_changes() {
        let repo = repo().await;
        let mut changes = repo.changes();

        repo.replace_species(Species::Dog, &[breed(Species::Dog, "1", false)])
            .await
            .unwrap();
        assert_eq!(changes.recv().await.unwrap().species, Species::Dog);

        repo.toggle_favorite(Species::Dog, "1").await.unwrap();
        assert_eq!(changes.recv().await.unwrap().species, Species::Dog);

        // Toggling an unknown id writes nothing and publishes nothing
        repo.toggle_favorite(Species::Dog, "ghost").await.unwrap();
        assert!(changes.try_recv().is_err());
    }
}
