use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use log::info;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::error::StorageError;
use super::store::CityStore;
use crate::model::Trip;

/// Name of the JSONL file holding all trips.
pub const TRIPS_FILE: &str = "trips.jsonl";

/// Manages JSONL-based trip persistence.
///
/// Keeps the saved trips in memory so the UI can read them synchronously;
/// every mutation is written to disk before the in-memory list changes.
pub struct CityManager {
    path: PathBuf,
    cities: RwLock<Vec<Trip>>,
    pending_adds: AtomicUsize,
    /// Held across every file mutation so an append and a rewrite never interleave.
    write_lock: Mutex<()>,
}

impl CityManager {
    /// Opens the trips file inside `data_dir`, creating the directory if needed.
    ///
    /// A missing file means no trips yet.
    pub fn new(data_dir: &Path) -> Result<Self, StorageError> {
        fs::create_dir_all(data_dir)?;
        let path = data_dir.join(TRIPS_FILE);
        let cities = if path.exists() {
            load_trips(&path)?
        } else {
            Vec::new()
        };
        info!("Loaded {} trips from {}", cities.len(), path.display());
        Ok(Self {
            path,
            cities: RwLock::new(cities),
            pending_adds: AtomicUsize::new(0),
            write_lock: Mutex::new(()),
        })
    }

    /// Returns the path of the trips file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn append_trip(&self, trip: &Trip) -> Result<(), StorageError> {
        let mut line = serde_json::to_string(trip)?;
        line.push('\n');
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn write_all_trips(&self, trips: &[Trip]) -> Result<(), StorageError> {
        let mut content = String::new();
        for trip in trips {
            content.push_str(&serde_json::to_string(trip)?);
            content.push('\n');
        }
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl CityStore for CityManager {
    async fn add_city(&self, trip: Trip) -> Result<(), StorageError> {
        self.pending_adds.fetch_add(1, Ordering::SeqCst);
        let _guard = self.write_lock.lock().await;
        let result = self.append_trip(&trip).await;
        if result.is_ok() {
            info!("Saved trip {} ({})", trip.id, trip.city_name);
            self.cities
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .push(trip);
        }
        self.pending_adds.fetch_sub(1, Ordering::SeqCst);
        result
    }

    async fn delete_city(&self, id: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let remaining: Vec<Trip> = {
            let cities = self.cities.read().unwrap_or_else(PoisonError::into_inner);
            if !cities.iter().any(|t| t.id == id) {
                return Err(StorageError::CityNotFound(id.to_string()));
            }
            cities.iter().filter(|t| t.id != id).cloned().collect()
        };
        self.write_all_trips(&remaining).await?;
        info!("Deleted trip {id}");
        *self.cities.write().unwrap_or_else(PoisonError::into_inner) = remaining;
        Ok(())
    }

    fn cities(&self) -> Vec<Trip> {
        self.cities
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn is_loading(&self) -> bool {
        self.pending_adds.load(Ordering::SeqCst) > 0
    }
}

/// Loads all trips from a JSONL file, skipping blank lines.
fn load_trips(path: &Path) -> Result<Vec<Trip>, StorageError> {
    let reader = BufReader::new(fs::File::open(path)?);
    let mut trips = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let trip = serde_json::from_str(&line).map_err(|source| StorageError::CorruptRecord {
            path: path.to_path_buf(),
            line: index + 1,
            source,
        })?;
        trips.push(trip);
    }
    Ok(trips)
}
