//! Daily bars and date-ordered bar series.

use crate::error::SeriesError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// One trading day across the four tracked instruments.
///
/// `equity_*` is the index proxy, `vol_*` the volatility index, `reference_*`
/// the reference safe asset (its closes feed the reference SMA) and
/// `reserve_*` the alternative safe asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub equity_open: f64,
    pub equity_close: f64,
    pub equity_high: f64,
    pub equity_low: f64,
    pub equity_volume: f64,
    pub vol_open: f64,
    pub vol_close: f64,
    pub vol_high: f64,
    pub vol_low: f64,
    pub reference_open: f64,
    pub reference_close: f64,
    pub reserve_open: f64,
    pub reserve_close: f64,
}

impl DailyBar {
    /// Bar with every price slot set to zero.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            equity_open: 0.0,
            equity_close: 0.0,
            equity_high: 0.0,
            equity_low: 0.0,
            equity_volume: 0.0,
            vol_open: 0.0,
            vol_close: 0.0,
            vol_high: 0.0,
            vol_low: 0.0,
            reference_open: 0.0,
            reference_close: 0.0,
            reserve_open: 0.0,
            reserve_close: 0.0,
        }
    }

    pub fn with_equity(mut self, open: f64, close: f64, high: f64, low: f64, volume: f64) -> Self {
        self.equity_open = open;
        self.equity_close = close;
        self.equity_high = high;
        self.equity_low = low;
        self.equity_volume = volume;
        self
    }

    pub fn with_volatility(mut self, open: f64, close: f64, high: f64, low: f64) -> Self {
        self.vol_open = open;
        self.vol_close = close;
        self.vol_high = high;
        self.vol_low = low;
        self
    }

    pub fn with_reference(mut self, open: f64, close: f64) -> Self {
        self.reference_open = open;
        self.reference_close = close;
        self
    }

    pub fn with_reserve(mut self, open: f64, close: f64) -> Self {
        self.reserve_open = open;
        self.reserve_close = close;
        self
    }
}

/// Close series the indicators are computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSeries {
    EquityClose,
    VolatilityClose,
    ReferenceClose,
}

impl PriceSeries {
    pub fn name(self) -> &'static str {
        match self {
            PriceSeries::EquityClose => "equity_close",
            PriceSeries::VolatilityClose => "vol_close",
            PriceSeries::ReferenceClose => "reference_close",
        }
    }

    pub fn value(self, bar: &DailyBar) -> f64 {
        match self {
            PriceSeries::EquityClose => bar.equity_close,
            PriceSeries::VolatilityClose => bar.vol_close,
            PriceSeries::ReferenceClose => bar.reference_close,
        }
    }

    /// Extract the series from bars, oldest first.
    pub fn extract(self, bars: &[DailyBar]) -> Vec<f64> {
        bars.iter().map(|bar| self.value(bar)).collect()
    }
}

/// Date-ascending bars with no duplicate dates. Gaps are allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HistoricalSeries {
    bars: Vec<DailyBar>,
}

impl HistoricalSeries {
    pub fn new(bars: Vec<DailyBar>) -> Result<Self, SeriesError> {
        for pair in bars.windows(2) {
            let (previous, next) = (pair[0].date, pair[1].date);
            if next == previous {
                return Err(SeriesError::DuplicateDate(next));
            }
            if next < previous {
                return Err(SeriesError::OutOfOrder { previous, next });
            }
        }
        Ok(Self { bars })
    }

    /// Sort by date and keep the last bar seen for each date.
    pub fn from_unordered(mut bars: Vec<DailyBar>) -> Self {
        // stable sort keeps arrival order within a date, so the later duplicate wins below
        bars.sort_by_key(|bar| bar.date);
        let mut deduped: Vec<DailyBar> = Vec::with_capacity(bars.len());
        for bar in bars {
            match deduped.last_mut() {
                Some(last) if last.date == bar.date => *last = bar,
                _ => deduped.push(bar),
            }
        }
        Self { bars: deduped }
    }

    /// Bars with `start <= date < end`.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> &[DailyBar] {
        let from = self.bars.partition_point(|bar| bar.date < start);
        let to = self.bars.partition_point(|bar| bar.date < end);
        if from >= to {
            return &[];
        }
        &self.bars[from..to]
    }

    pub fn into_inner(self) -> Vec<DailyBar> {
        self.bars
    }
}

impl Deref for HistoricalSeries {
    type Target = [DailyBar];

    fn deref(&self) -> &Self::Target {
        &self.bars
    }
}

impl<'de> Deserialize<'de> for HistoricalSeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bars = Vec::<DailyBar>::deserialize(deserializer)?;
        HistoricalSeries::new(bars).map_err(serde::de::Error::custom)
    }
}
