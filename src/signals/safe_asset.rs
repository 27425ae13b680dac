//! Choice of the asset that holds the safe sleeve.

use crate::models::bar::DailyBar;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::SafeAssetChoice;

/// Reference asset while its last close is above its SMA, reserve otherwise.
///
/// A saturated (zero) SMA means the window was not filled and picks the
/// reserve asset.
pub fn select_safe_asset(reference_close: f64, reference_sma: f64) -> SafeAssetChoice {
    if reference_sma > 0.0 && reference_close > reference_sma {
        SafeAssetChoice::Reference
    } else {
        SafeAssetChoice::Reserve
    }
}

/// Safe asset for today from yesterday's bar and its snapshot.
pub fn safe_asset_for(yesterday: &DailyBar, indicators: &IndicatorSnapshot) -> SafeAssetChoice {
    select_safe_asset(yesterday.reference_close, indicators.ref_sma)
}
