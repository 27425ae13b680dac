//! Persistence of the indicator snapshot behind each evaluation.

use crate::models::indicators::IndicatorSnapshot;
use crate::services::error::RepositoryError;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Snapshots keyed by the date of the last bar they were computed from.
#[async_trait::async_trait]
pub trait IndicatorStore: Send + Sync {
    /// Store `snapshot`, replacing any snapshot with the same date.
    async fn upsert(&self, snapshot: IndicatorSnapshot) -> Result<(), RepositoryError>;

    async fn get(&self, date: NaiveDate) -> Result<Option<IndicatorSnapshot>, RepositoryError>;

    /// Snapshots with `start <= date < end`, ascending by date.
    async fn between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<IndicatorSnapshot>, RepositoryError>;
}

#[derive(Clone, Default)]
pub struct InMemoryIndicatorStore {
    snapshots: Arc<RwLock<BTreeMap<NaiveDate, IndicatorSnapshot>>>,
}

impl InMemoryIndicatorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.snapshots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.snapshots.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl IndicatorStore for InMemoryIndicatorStore {
    async fn upsert(&self, snapshot: IndicatorSnapshot) -> Result<(), RepositoryError> {
        let mut snapshots = self.snapshots.write().await;
        snapshots.insert(snapshot.date, snapshot);
        Ok(())
    }

    async fn get(&self, date: NaiveDate) -> Result<Option<IndicatorSnapshot>, RepositoryError> {
        Ok(self.snapshots.read().await.get(&date).cloned())
    }

    async fn between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<IndicatorSnapshot>, RepositoryError> {
        if start > end {
            return Err(RepositoryError::InvalidRange { start, end });
        }
        let snapshots = self.snapshots.read().await;
        Ok(snapshots.range(start..end).map(|(_, s)| s.clone()).collect())
    }
}
