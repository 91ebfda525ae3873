// SPDX-License-Identifier: MPL-2.0
//! Simulated fertilizer recommendation request.

use crate::domain::advisory::{recommend, Crop, FertilizerRecommendation, SoilType};
use std::time::Duration;

/// Waits `delay`, then returns the recommendation for the selection.
pub async fn request_recommendation(
    crop: Crop,
    soil: SoilType,
    delay: Duration,
) -> FertilizerRecommendation {
    tokio::time::sleep(delay).await;
    recommend(crop, soil)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn recommendation_arrives_after_delay() {
        let started = tokio::time::Instant::now();
        let rec = request_recommendation(Crop::Wheat, SoilType::Loamy, Duration::from_millis(1500)).await;
        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(rec.fertilizer, "NPK 20:20:0 + Zinc Sulphate");
    }
}
