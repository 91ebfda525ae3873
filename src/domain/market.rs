// SPDX-License-Identifier: MPL-2.0
//! Static mandi prices.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketPrice {
    pub crop: &'static str,
    /// Rupees per unit.
    pub price: u32,
    pub unit: &'static str,
    pub trend: Trend,
    /// Change since the previous day, in rupees.
    pub change: i32,
}

const UNIT: &str = "₹/quintal";

/// Reference price list shown on the market page.
#[must_use]
pub fn reference_prices() -> Vec<MarketPrice> {
    let entry = |crop, price, trend, change| MarketPrice {
        crop,
        price,
        unit: UNIT,
        trend,
        change,
    };
    vec![
        entry("Wheat", 2150, Trend::Up, 50),
        entry("Rice", 2890, Trend::Down, -30),
        entry("Cotton", 6200, Trend::Up, 100),
        entry("Sugarcane", 380, Trend::Stable, 0),
        entry("Tomato", 2800, Trend::Up, 200),
        entry("Onion", 3500, Trend::Down, -150),
    ]
}

/// Formats a rupee amount with Indian digit grouping, e.g. `₹1,23,456`.
#[must_use]
pub fn format_rupees(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{digits}");
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();
    format!("₹{},{tail}", groups.join(","))
}

/// Formats a change with an explicit sign, e.g. `+50` or `-30`.
#[must_use]
pub fn format_change(change: i32) -> String {
    if change > 0 {
        format!("+{change}")
    } else {
        change.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_prices_match_the_mandi_list() {
        let prices = reference_prices();
        assert_eq!(prices.len(), 6);
        assert_eq!(prices[0].crop, "Wheat");
        assert_eq!(prices[0].price, 2150);
        assert_eq!(prices[3].trend, Trend::Stable);
        assert!(prices.iter().all(|p| p.unit == "₹/quintal"));
    }

    #[test]
    fn trend_agrees_with_change_sign() {
        for price in reference_prices() {
            match price.trend {
                Trend::Up => assert!(price.change > 0),
                Trend::Down => assert!(price.change < 0),
                Trend::Stable => assert_eq!(price.change, 0),
            }
        }
    }

    #[test]
    fn rupees_use_indian_grouping() {
        assert_eq!(format_rupees(380), "₹380");
        assert_eq!(format_rupees(2150), "₹2,150");
        assert_eq!(format_rupees(123_456), "₹1,23,456");
        assert_eq!(format_rupees(12_345_678), "₹1,23,45,678");
    }

    #[test]
    fn change_carries_sign() {
        assert_eq!(format_change(50), "+50");
        assert_eq!(format_change(-150), "-150");
        assert_eq!(format_change(0), "0");
    }
}
