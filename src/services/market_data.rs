//! Market data source for the daily bars the engine consumes.

use crate::models::bar::{DailyBar, HistoricalSeries};
use crate::services::error::RepositoryError;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::RwLock;

#[async_trait::async_trait]
pub trait MarketDataRepository: Send + Sync {
    /// Bars with `start <= date < end`, ascending by date. A `start` after
    /// `end` is [`RepositoryError::InvalidRange`].
    async fn bars_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyBar>, RepositoryError>;
}

/// Series held in memory, upserted bar by bar like a daily ingest would.
#[derive(Clone, Default)]
pub struct InMemoryMarketData {
    series: Arc<RwLock<HistoricalSeries>>,
}

impl InMemoryMarketData {
    pub fn new(series: HistoricalSeries) -> Self {
        Self {
            series: Arc::new(RwLock::new(series)),
        }
    }

    /// Insert or replace the bar for `bar.date`.
    pub async fn upsert(&self, bar: DailyBar) {
        let mut series = self.series.write().await;
        let mut bars = std::mem::take(&mut *series).into_inner();
        bars.push(bar);
        *series = HistoricalSeries::from_unordered(bars);
    }

    pub async fn len(&self) -> usize {
        self.series.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.series.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl MarketDataRepository for InMemoryMarketData {
    async fn bars_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyBar>, RepositoryError> {
        if start > end {
            return Err(RepositoryError::InvalidRange { start, end });
        }
        let series = self.series.read().await;
        Ok(series.between(start, end).to_vec())
    }
}
