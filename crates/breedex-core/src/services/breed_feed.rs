//! Change-driven view over the cached breeds of one species.

use std::sync::{Arc, Weak};

use tokio::sync::broadcast::{self, error::RecvError};
use tracing::debug;

use crate::domain::{BreedRecord, Species};
use crate::ports::{BreedRepository, CacheChange, CoreError};

/// Stream of cache snapshots for one species.
///
/// The first [`next`](Self::next) yields the current snapshot. Later calls
/// wait for a write to the species and yield only when the snapshot
/// differs from the last one returned. The feed holds the repository
/// weakly, so it ends once the repository is dropped.
pub struct BreedFeed {
    repo: Weak<dyn BreedRepository>,
    changes: broadcast::Receiver<CacheChange>,
    species: Species,
    favorites_only: bool,
    last: Option<Vec<BreedRecord>>,
}

impl BreedFeed {
    pub(crate) fn new(repo: &Arc<dyn BreedRepository>, species: Species, favorites_only: bool) -> Self {
        // Subscribe before the first read so no write is missed
        let changes = repo.changes();
        Self {
            repo: Arc::downgrade(repo),
            changes,
            species,
            favorites_only,
            last: None,
        }
    }

    /// Wait for the next distinct snapshot.
    ///
    /// Returns `None` once the cache is gone.
    pub async fn next(&mut self) -> Option<Result<Vec<BreedRecord>, CoreError>> {
        if self.last.is_none() {
            return self.emit_snapshot().await;
        }

        loop {
            match self.changes.recv().await {
                Ok(change) if change.species != self.species => continue,
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    debug!(species = %self.species, skipped, "Breed feed lagged, re-reading");
                }
                Err(RecvError::Closed) => return None,
            }

            let records = match self.read().await? {
                Ok(records) => records,
                Err(e) => return Some(Err(e)),
            };

            if self.last.as_ref() != Some(&records) {
                self.last = Some(records.clone());
                return Some(Ok(records));
            }
        }
    }

    async fn emit_snapshot(&mut self) -> Option<Result<Vec<BreedRecord>, CoreError>> {
        let result = self.read().await?;
        if let Ok(records) = &result {
            self.last = Some(records.clone());
        }
        Some(result)
    }

    async fn read(&self) -> Option<Result<Vec<BreedRecord>, CoreError>> {
        let repo = self.repo.upgrade()?;
        Some(
            repo.list(self.species, self.favorites_only)
                .await
                .map_err(CoreError::from),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{InMemoryBreedRepo, cat};
    use std::time::Duration;
    use tokio::time::timeout;

    fn feed(repo: &Arc<InMemoryBreedRepo>, favorites_only: bool) -> BreedFeed {
        let repo: Arc<dyn BreedRepository> = repo.clone();
        BreedFeed::new(&repo, Species::Cat, favorites_only)
    }

    #[tokio::test]
    async fn test_first_next_yields_current_snapshot() {
        let repo = Arc::new(InMemoryBreedRepo::with_records(
            Species::Cat,
            vec![cat("a", false)],
        ));
        let mut feed = feed(&repo, false);

        let first = feed.next().await.unwrap().unwrap();
        assert_eq!(first, vec![cat("a", false)]);
    }

    #[tokio::test]
    async fn test_emits_after_write_to_species() {
        let repo = Arc::new(InMemoryBreedRepo::new());
        let mut feed = feed(&repo, false);
        assert!(feed.next().await.unwrap().unwrap().is_empty());

        repo.replace_species(Species::Cat, &[cat("a", false)])
            .await
            .unwrap();

        let next = timeout(Duration::from_secs(1), feed.next())
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        assert_eq!(next, vec![cat("a", false)]);
    }

    #[tokio::test]
    async fn test_skips_other_species_and_unchanged_snapshots() {
        let repo = Arc::new(InMemoryBreedRepo::with_records(
            Species::Cat,
            vec![cat("a", false)],
        ));
        let mut favorites = feed(&repo, true);
        assert!(favorites.next().await.unwrap().unwrap().is_empty());

        // Neither write changes the favorites snapshot for cats
        let mut dog = cat("d", false);
        dog.species = Species::Dog;
        repo.replace_species(Species::Dog, &[dog]).await.unwrap();
        repo.append_species(Species::Cat, &[cat("b", false)])
            .await
            .unwrap();
        assert!(
            timeout(Duration::from_millis(50), favorites.next())
                .await
                .is_err()
        );

        repo.toggle_favorite(Species::Cat, "b").await.unwrap();
        let next = timeout(Duration::from_secs(1), favorites.next())
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        assert_eq!(next, vec![cat("b", true)]);
    }

    #[tokio::test]
    async fn test_ends_when_repository_is_dropped() {
        let repo = Arc::new(InMemoryBreedRepo::new());
        let mut feed = feed(&repo, false);
        feed.next().await.unwrap().unwrap();

        drop(repo);
        assert!(feed.next().await.is_none());
    }
}
