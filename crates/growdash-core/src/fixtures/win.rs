//! Win tab fixtures: feature adoption, scorecards, revenue lift, forecasts.

use serde::Serialize;

/// Which growth features a seller has enabled.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeatureAdoption {
    pub seller: &'static str,
    pub fba: bool,
    pub ads: bool,
    pub promotions: bool,
    pub coupons: bool,
}

impl FeatureAdoption {
    /// Share of the four growth features enabled, in percent.
    pub fn adoption_pct(&self) -> u8 {
        let enabled =
            [self.fba, self.ads, self.promotions, self.coupons]
                .iter()
                .filter(|&&on| on)
                .count() as u8;
        enabled * 100 / 4
    }
}

pub fn feature_adoption() -> Vec<FeatureAdoption> {
    vec![
        FeatureAdoption {
            seller: "TechGiant_SG",
            fba: true,
            ads: true,
            promotions: true,
            coupons: false,
        },
        FeatureAdoption {
            seller: "ElectroMax_ID",
            fba: false,
            ads: true,
            promotions: false,
            coupons: true,
        },
        FeatureAdoption {
            seller: "FashionHub_MY",
            fba: true,
            ads: false,
            promotions: true,
            coupons: true,
        },
        FeatureAdoption {
            seller: "BeautyPro_VN",
            fba: true,
            ads: true,
            promotions: false,
            coupons: true,
        },
    ]
}

/// Quality scorecard per seller.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Scorecard {
    pub seller: &'static str,
    pub listing_quality: u8,
    pub ad_roi: f64,
    pub inventory_health: &'static str,
    pub overall_grade: &'static str,
}

pub fn scorecards() -> Vec<Scorecard> {
    vec![
        Scorecard {
            seller: "TechGiant_SG",
            listing_quality: 85,
            ad_roi: 3.2,
            inventory_health: "Excellent",
            overall_grade: "A",
        },
        Scorecard {
            seller: "ElectroMax_ID",
            listing_quality: 72,
            ad_roi: 2.1,
            inventory_health: "Good",
            overall_grade: "B",
        },
        Scorecard {
            seller: "FashionHub_MY",
            listing_quality: 68,
            ad_roi: 1.8,
            inventory_health: "Needs work",
            overall_grade: "C+",
        },
        Scorecard {
            seller: "BeautyPro_VN",
            listing_quality: 91,
            ad_roi: 4.1,
            inventory_health: "Excellent",
            overall_grade: "A+",
        },
    ]
}

/// Revenue before and after feature adoption.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RevenueLift {
    pub seller: &'static str,
    pub baseline: u32,
    pub current: u32,
    pub driver: &'static str,
}

impl RevenueLift {
    pub fn lift_pct(&self) -> f64 {
        if self.baseline == 0 {
            0.0
        } else {
            (self.current as f64 - self.baseline as f64) / self.baseline as f64 * 100.0
        }
    }
}

pub fn revenue_lift() -> Vec<RevenueLift> {
    vec![
        RevenueLift {
            seller: "TechGiant_SG",
            baseline: 150_000,
            current: 195_000,
            driver: "Ads + FBA",
        },
        RevenueLift {
            seller: "ElectroMax_ID",
            baseline: 80_000,
            current: 98_000,
            driver: "FBA",
        },
        RevenueLift {
            seller: "FashionHub_MY",
            baseline: 60_000,
            current: 72_000,
            driver: "Promotions",
        },
        RevenueLift {
            seller: "BeautyPro_VN",
            baseline: 120_000,
            current: 156_000,
            driver: "All features",
        },
    ]
}

/// Forecast growth and confidence per seller.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GrowthPotential {
    pub seller: &'static str,
    pub current_performance: &'static str,
    pub adoption_pct: u8,
    pub forecast_growth_pct: u8,
    pub confidence_pct: u8,
}

pub fn growth_potential() -> Vec<GrowthPotential> {
    vec![
        GrowthPotential {
            seller: "TechGiant_SG",
            current_performance: "Excellent",
            adoption_pct: 75,
            forecast_growth_pct: 40,
            confidence_pct: 92,
        },
        GrowthPotential {
            seller: "ElectroMax_ID",
            current_performance: "Good",
            adoption_pct: 50,
            forecast_growth_pct: 35,
            confidence_pct: 78,
        },
        GrowthPotential {
            seller: "FashionHub_MY",
            current_performance: "Average",
            adoption_pct: 75,
            forecast_growth_pct: 25,
            confidence_pct: 65,
        },
        GrowthPotential {
            seller: "BeautyPro_VN",
            current_performance: "Excellent",
            adoption_pct: 75,
            forecast_growth_pct: 45,
            confidence_pct: 95,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adoption_pct() {
        let rows = feature_adoption();
        let pcts: Vec<u8> = rows.iter().map(|r| r.adoption_pct()).collect();
        assert_eq!(pcts, vec![75, 50, 75, 75]);
    }

    #[test]
    fn test_revenue_lift_pct() {
        let rows = revenue_lift();
        assert!((rows[0].lift_pct() - 30.0).abs() < 1e-9);
        assert!((rows[1].lift_pct() - 22.5).abs() < 1e-9);
        assert!((rows[3].lift_pct() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_tables_cover_same_sellers() {
        let adoption: Vec<&str> = feature_adoption().iter().map(|r| r.seller).collect();
        let scorecard: Vec<&str> = scorecards().iter().map(|r| r.seller).collect();
        assert_eq!(adoption, scorecard);
    }
}
