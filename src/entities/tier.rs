use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct Tier {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub multiplier: f64,
    pub capacity_seats: u32,
    pub speed_kmh: f64,
}

static CATALOG: [Tier; 3] = [
    Tier {
        id: "standard",
        name: "Standard",
        description: "Comfortable ride for everyday travel",
        multiplier: 1.0,
        capacity_seats: 2,
        speed_kmh: 150.0,
    },
    Tier {
        id: "premium",
        name: "Premium",
        description: "Extra comfort with priority boarding",
        multiplier: 1.5,
        capacity_seats: 4,
        speed_kmh: 200.0,
    },
    Tier {
        id: "express",
        name: "Express",
        description: "Fastest ride with luxury amenities",
        multiplier: 2.0,
        capacity_seats: 2,
        speed_kmh: 250.0,
    },
];

pub fn catalog() -> &'static [Tier] {
    &CATALOG
}

pub fn find_tier(id: &str) -> Option<&'static Tier> {
    CATALOG.iter().find(|tier| tier.id == id)
}
