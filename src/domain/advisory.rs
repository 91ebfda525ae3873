// SPDX-License-Identifier: MPL-2.0
//! Crops, soil types and fertilizer recommendations.

/// Crops offered on the soil and fertilizer page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crop {
    Wheat,
    Rice,
    Corn,
    Cotton,
    Sugarcane,
    Tomato,
    Potato,
    Onion,
}

impl Crop {
    pub const ALL: [Crop; 8] = [
        Crop::Wheat,
        Crop::Rice,
        Crop::Corn,
        Crop::Cotton,
        Crop::Sugarcane,
        Crop::Tomato,
        Crop::Potato,
        Crop::Onion,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Crop::Wheat => "wheat",
            Crop::Rice => "rice",
            Crop::Corn => "corn",
            Crop::Cotton => "cotton",
            Crop::Sugarcane => "sugarcane",
            Crop::Tomato => "tomato",
            Crop::Potato => "potato",
            Crop::Onion => "onion",
        }
    }
}

/// Soil types offered on the soil and fertilizer page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoilType {
    Clay,
    Sandy,
    Loamy,
    Black,
    Red,
}

impl SoilType {
    pub const ALL: [SoilType; 5] = [
        SoilType::Clay,
        SoilType::Sandy,
        SoilType::Loamy,
        SoilType::Black,
        SoilType::Red,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            SoilType::Clay => "clay",
            SoilType::Sandy => "sandy",
            SoilType::Loamy => "loamy",
            SoilType::Black => "black",
            SoilType::Red => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FertilizerRecommendation {
    pub fertilizer: String,
    pub amount: String,
    pub timing: String,
    pub notes: String,
}

/// The recommendation shown for every crop and soil combination.
#[must_use]
pub fn recommend(_crop: Crop, _soil: SoilType) -> FertilizerRecommendation {
    FertilizerRecommendation {
        fertilizer: "NPK 20:20:0 + Zinc Sulphate".to_string(),
        amount: "2.5 kg per acre".to_string(),
        timing: "Apply before sowing and 30 days after sowing".to_string(),
        notes: "Soil health is good. Regular water management recommended.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheat_on_loamy_soil() {
        let rec = recommend(Crop::Wheat, SoilType::Loamy);
        assert_eq!(rec.fertilizer, "NPK 20:20:0 + Zinc Sulphate");
        assert_eq!(rec.amount, "2.5 kg per acre");
        assert_eq!(rec.timing, "Apply before sowing and 30 days after sowing");
        assert_eq!(
            rec.notes,
            "Soil health is good. Regular water management recommended."
        );
    }

    #[test]
    fn recommendation_does_not_depend_on_selection() {
        let reference = recommend(Crop::Wheat, SoilType::Loamy);
        for crop in Crop::ALL {
            for soil in SoilType::ALL {
                assert_eq!(recommend(crop, soil), reference);
            }
        }
    }

    #[test]
    fn ids_are_lowercase_and_unique() {
        let mut ids: Vec<_> = Crop::ALL.iter().map(|c| c.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Crop::ALL.len());
        assert!(SoilType::ALL.iter().all(|s| s.id() == s.id().to_lowercase()));
    }
}
