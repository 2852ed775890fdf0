//! In-memory port fakes shared by service tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::broadcast;

use crate::domain::{BreedRecord, Species};
use crate::ports::{
    BreedRepository, BreedSource, BreedSources, CacheChange, MockBreedSource, RepositoryError,
    SettingsRepository,
};
use crate::settings::Settings;
use std::sync::Arc;

/// Breed cache kept in a `HashMap<Species, Vec<_>>`, insertion ordered.
pub struct InMemoryBreedRepo {
    records: Mutex<HashMap<Species, Vec<BreedRecord>>>,
    changes: broadcast::Sender<CacheChange>,
}

impl InMemoryBreedRepo {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(16);
        Self {
            records: Mutex::new(HashMap::new()),
            changes,
        }
    }

    pub fn with_records(species: Species, records: Vec<BreedRecord>) -> Self {
        let repo = Self::new();
        repo.records.lock().unwrap().insert(species, records);
        repo
    }

    pub fn snapshot(&self, species: Species) -> Vec<BreedRecord> {
        self.records
            .lock()
            .unwrap()
            .get(&species)
            .cloned()
            .unwrap_or_default()
    }

    fn notify(&self, species: Species) {
        let _ = self.changes.send(CacheChange { species });
    }
}

#[async_trait]
impl BreedRepository for InMemoryBreedRepo {
    async fn replace_species(
        &self,
        species: Species,
        records: &[BreedRecord],
    ) -> Result<(), RepositoryError> {
        self.records
            .lock()
            .unwrap()
            .insert(species, records.to_vec());
        self.notify(species);
        Ok(())
    }

    async fn append_species(
        &self,
        species: Species,
        records: &[BreedRecord],
    ) -> Result<(), RepositoryError> {
        {
            let mut all = self.records.lock().unwrap();
            let cached = all.entry(species).or_default();
            for record in records {
                if !cached.iter().any(|r| r.id == record.id) {
                    cached.push(record.clone());
                }
            }
        }
        self.notify(species);
        Ok(())
    }

    async fn list(
        &self,
        species: Species,
        favorites_only: bool,
    ) -> Result<Vec<BreedRecord>, RepositoryError> {
        Ok(self
            .snapshot(species)
            .into_iter()
            .filter(|r| !favorites_only || r.is_favorite)
            .collect())
    }

    async fn get(
        &self,
        species: Species,
        id: &str,
    ) -> Result<Option<BreedRecord>, RepositoryError> {
        Ok(self.snapshot(species).into_iter().find(|r| r.id == id))
    }

    async fn toggle_favorite(
        &self,
        species: Species,
        id: &str,
    ) -> Result<Option<bool>, RepositoryError> {
        let toggled = {
            let mut all = self.records.lock().unwrap();
            all.get_mut(&species)
                .and_then(|records| records.iter_mut().find(|r| r.id == id))
                .map(|record| {
                    record.is_favorite = !record.is_favorite;
                    record.is_favorite
                })
        };
        if toggled.is_some() {
            self.notify(species);
        }
        Ok(toggled)
    }

    async fn set_additional_images(
        &self,
        species: Species,
        id: &str,
        images: &[String],
    ) -> Result<(), RepositoryError> {
        {
            let mut all = self.records.lock().unwrap();
            let record = all
                .get_mut(&species)
                .and_then(|records| records.iter_mut().find(|r| r.id == id))
                .ok_or_else(|| RepositoryError::NotFound(format!("{species}/{id}")))?;
            record.additional_images = images.to_vec();
        }
        self.notify(species);
        Ok(())
    }

    fn changes(&self) -> broadcast::Receiver<CacheChange> {
        self.changes.subscribe()
    }
}

/// Settings held in a mutex.
pub struct InMemorySettingsRepo {
    settings: Mutex<Settings>,
}

impl InMemorySettingsRepo {
    pub fn new() -> Self {
        Self {
            settings: Mutex::new(Settings::with_defaults()),
        }
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepo {
    async fn load(&self) -> Result<Settings, RepositoryError> {
        Ok(self.settings.lock().unwrap().clone())
    }

    async fn save(&self, settings: &Settings) -> Result<(), RepositoryError> {
        *self.settings.lock().unwrap() = settings.clone();
        Ok(())
    }
}

/// A mock source that only answers `species()`.
pub fn idle_source(species: Species) -> MockBreedSource {
    let mut mock = MockBreedSource::new();
    mock.expect_species().return_const(species);
    mock
}

/// Sources where the cat side is `cat` and the dog side is idle.
pub fn cat_sources(cat: MockBreedSource) -> BreedSources {
    let cat: Arc<dyn BreedSource> = Arc::new(cat);
    let dog: Arc<dyn BreedSource> = Arc::new(idle_source(Species::Dog));
    BreedSources::new(cat, dog)
}

pub fn cat(id: &str, favorite: bool) -> BreedRecord {
    let mut record = BreedRecord::new(Species::Cat, id, id.to_uppercase());
    record.is_favorite = favorite;
    record
}
