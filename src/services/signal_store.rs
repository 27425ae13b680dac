//! Persistence of computed signals and of the strategy settings.

use crate::models::signal::SignalRecord;
use crate::models::strategy::StrategyParameters;
use crate::services::error::RepositoryError;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[async_trait::async_trait]
pub trait SignalHistoryStore: Send + Sync {
    /// Most recent record dated strictly before `date`.
    async fn latest_before(
        &self,
        date: NaiveDate,
    ) -> Result<Option<SignalRecord>, RepositoryError>;

    /// Store `record`, replacing any record with the same date.
    async fn insert(&self, record: SignalRecord) -> Result<(), RepositoryError>;
}

#[async_trait::async_trait]
pub trait SettingsStore: Send + Sync {
    async fn load(&self) -> Result<StrategyParameters, RepositoryError>;
}

/// Signal history keyed by date.
#[derive(Clone, Default)]
pub struct InMemorySignalHistory {
    records: Arc<RwLock<BTreeMap<NaiveDate, SignalRecord>>>,
}

impl InMemorySignalHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in date order.
    pub async fn records(&self) -> Vec<SignalRecord> {
        self.records.read().await.values().cloned().collect()
    }

    pub async fn get(&self, date: NaiveDate) -> Option<SignalRecord> {
        self.records.read().await.get(&date).cloned()
    }
}

#[async_trait::async_trait]
impl SignalHistoryStore for InMemorySignalHistory {
    async fn latest_before(
        &self,
        date: NaiveDate,
    ) -> Result<Option<SignalRecord>, RepositoryError> {
        let records = self.records.read().await;
        Ok(records.range(..date).next_back().map(|(_, r)| r.clone()))
    }

    async fn insert(&self, record: SignalRecord) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        records.insert(record.date, record);
        Ok(())
    }
}

/// Settings that can be swapped at runtime.
#[derive(Clone, Default)]
pub struct InMemorySettings {
    params: Arc<RwLock<StrategyParameters>>,
}

impl InMemorySettings {
    pub fn new(params: StrategyParameters) -> Self {
        Self {
            params: Arc::new(RwLock::new(params)),
        }
    }

    pub async fn replace(&self, params: StrategyParameters) {
        *self.params.write().await = params;
    }
}

#[async_trait::async_trait]
impl SettingsStore for InMemorySettings {
    async fn load(&self) -> Result<StrategyParameters, RepositoryError> {
        Ok(self.params.read().await.clone())
    }
}
