//! Static crop reference data: advisory tables and market reference prices.
//! Initialized once, read-only for the process lifetime.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleEntry {
    pub day: u32,
    pub task: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CropAdvisory {
    pub best_seeds: Vec<&'static str>,
    pub fertilizer_schedule: Vec<ScheduleEntry>,
    pub common_diseases: Vec<&'static str>,
}

/// Regional best practices for Telangana, 2025-2026 season. Keyed by
/// lowercase crop name.
static CROP_ADVISORY: Lazy<HashMap<&'static str, CropAdvisory>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        "paddy",
        CropAdvisory {
            best_seeds: vec!["RNR 15048 (Telangana Sona)", "BPT 5204", "KNM 118"],
            fertilizer_schedule: vec![
                ScheduleEntry {
                    day: 0,
                    task: "Basal Dose: Apply DAP (50kg) and Zinc Sulphate (10kg) per acre.",
                },
                ScheduleEntry {
                    day: 20,
                    task: "First Top Dressing: Apply Urea (25kg).",
                },
                ScheduleEntry {
                    day: 45,
                    task: "Second Top Dressing: Apply Urea (25kg) and MOP (15kg).",
                },
            ],
            common_diseases: vec!["Blast", "Sheath Blight", "Brown Plant Hopper"],
        },
    );
    m.insert(
        "cotton",
        CropAdvisory {
            best_seeds: vec!["RCH 134 Bt", "Kaveri 555", "Rasi 651"],
            fertilizer_schedule: vec![
                ScheduleEntry {
                    day: 0,
                    task: "Basal Dose: 50kg DAP and 25kg Magnesium Sulphate.",
                },
                ScheduleEntry {
                    day: 30,
                    task: "Apply Urea (30kg) and Boron for better flower retention.",
                },
                ScheduleEntry {
                    day: 60,
                    task: "Apply Urea (30kg) and MOP (20kg).",
                },
            ],
            common_diseases: vec!["Pink Bollworm", "Leaf Spot", "Wilting"],
        },
    );
    m
});

/// Reference market prices per kg used by the fairness check.
static STANDARD_PRICES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([("paddy", 23.00), ("cotton", 70.00), ("chilli", 150.00)])
});

/// Distributor stock list served to field reps.
#[derive(Debug, Clone, Serialize)]
pub struct DistributorItem {
    pub id: u32,
    pub product: &'static str,
    pub stock: u32,
    pub price: u32,
}

pub static DISTRIBUTOR_INVENTORY: &[DistributorItem] = &[
    DistributorItem {
        id: 1,
        product: "BSH Nitro-Grow",
        stock: 450,
        price: 1150,
    },
    DistributorItem {
        id: 2,
        product: "Agri-Tech Potash",
        stock: 120,
        price: 1400,
    },
    DistributorItem {
        id: 3,
        product: "Premium Paddy Seed",
        stock: 800,
        price: 950,
    },
];

/// Case-insensitive advisory lookup.
pub fn get_advisory(crop_name: &str) -> Option<&'static CropAdvisory> {
    CROP_ADVISORY.get(crop_name.to_lowercase().as_str())
}

/// Case-insensitive reference-price lookup.
pub fn standard_price(crop_name: &str) -> Option<f64> {
    STANDARD_PRICES.get(crop_name.to_lowercase().as_str()).copied()
}
