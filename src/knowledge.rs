//! Static Philippine agriculture knowledge base.
//!
//! Crop profiles, island-group regions and the option menus shown by the
//! console and the HTTP API. Everything here is `'static` and read-only.

use serde::Serialize;

/// Regional, seasonal and threat metadata for one crop
#[derive(Debug, Clone, Serialize)]
pub struct CropProfile {
    /// Lowercase key used for containment lookup
    pub key: &'static str,
    pub name: &'static str,
    /// Filipino name
    pub local_name: &'static str,
    pub regions: &'static [&'static str],
    pub seasons: &'static [&'static str],
    pub varieties: &'static [&'static str],
    pub pests: &'static [&'static str],
    pub diseases: &'static [&'static str],
}

/// Major crops, in the order crop conditionals are tested
pub static MAJOR_CROPS: &[CropProfile] = &[
    CropProfile {
        key: "rice",
        name: "Rice",
        local_name: "Palay",
        regions: &["Central Luzon", "Cagayan Valley", "Ilocos", "Bicol"],
        seasons: &["Wet season", "Dry season"],
        varieties: &["PSB Rc82", "NSIC Rc222", "NSIC Rc216", "PSB Rc18"],
        pests: &["Brown Planthopper", "Stem Borer", "Rice Bug", "Golden Apple Snail"],
        diseases: &["Rice Blast", "Bacterial Leaf Blight", "Sheath Blight", "Tungro"],
    },
    CropProfile {
        key: "corn",
        name: "Corn",
        local_name: "Mais",
        regions: &["Northern Mindanao", "SOCCSKSARGEN", "Cagayan Valley"],
        seasons: &["Wet season", "Dry season"],
        varieties: &["Pioneer", "Dekalb", "NK", "Local varieties"],
        pests: &["Fall Armyworm", "Corn Borer", "Cutworm", "Corn Earworm"],
        diseases: &["Downy Mildew", "Corn Rust", "Ear Rot", "Stalk Rot"],
    },
    CropProfile {
        key: "banana",
        name: "Banana",
        local_name: "Saging",
        regions: &["Davao", "Northern Mindanao", "SOCCSKSARGEN"],
        seasons: &["Year-round"],
        varieties: &["Cavendish", "Lakatan", "Latundan", "Saba"],
        pests: &["Banana Weevil", "Nematodes", "Thrips", "Aphids"],
        diseases: &["Panama Disease", "Black Sigatoka", "Bunchy Top", "Bacterial Wilt"],
    },
];

/// Regions grouped by island group
pub static REGIONS: &[(&str, &[&str])] = &[
    ("luzon", &["Central Luzon", "Cagayan Valley", "Ilocos", "CALABARZON", "Bicol"]),
    ("visayas", &["Western Visayas", "Central Visayas", "Eastern Visayas"]),
    ("mindanao", &["Northern Mindanao", "Davao", "SOCCSKSARGEN", "CARAGA", "ARMM"]),
];

pub const CROP_OPTIONS: &[&str] = &[
    "Rice",
    "Corn",
    "Banana",
    "Coconut",
    "Sugarcane",
    "Vegetables",
    "Fruits",
    "Other",
];

pub const CONCERN_OPTIONS: &[&str] = &[
    "Water Management",
    "Pest Control",
    "Disease Control",
    "Soil Health",
    "Yield Improvement",
    "Weather Planning",
    "General Advice",
];

pub const CLIMATE_OPTIONS: &[&str] = &["Dry season", "Wet season", "Monsoon", "Year-round"];

pub const SOIL_OPTIONS: &[&str] = &["Sandy loam", "Clay", "Loamy", "Sandy", "Silt"];

/// Find the profile whose key the crop text contains.
///
/// Case-insensitive; the first match in [`MAJOR_CROPS`] order wins.
pub fn crop_profile(crop: &str) -> Option<&'static CropProfile> {
    let crop = crop.to_lowercase();
    MAJOR_CROPS.iter().find(|p| crop.contains(p.key))
}

/// Island group whose name or one of whose regions the location contains
pub fn island_group(region: &str) -> Option<&'static str> {
    let region = region.trim().to_lowercase();
    if region.is_empty() {
        return None;
    }
    REGIONS
        .iter()
        .find(|(group, regions)| {
            region.contains(group) || regions.iter().any(|r| region.contains(&r.to_lowercase()))
        })
        .map(|(group, _)| *group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_profile_lookup() {
        assert_eq!(crop_profile("Rice").map(|p| p.local_name), Some("Palay"));
        assert_eq!(crop_profile("Hybrid CORN").map(|p| p.name), Some("Corn"));
        assert_eq!(crop_profile("lakatan banana").map(|p| p.key), Some("banana"));
        assert!(crop_profile("Sugarcane").is_none());
        assert!(crop_profile("").is_none());
    }

    #[test]
    fn test_profiles_carry_threats() {
        let corn = crop_profile("corn").unwrap();
        assert!(corn.pests.contains(&"Fall Armyworm"));
        assert!(corn.diseases.contains(&"Downy Mildew"));
    }

    #[test]
    fn test_island_group() {
        assert_eq!(island_group("Davao"), Some("mindanao"));
        assert_eq!(island_group("Southern Luzon"), Some("luzon"));
        assert_eq!(island_group("Central Visayas"), Some("visayas"));
        assert_eq!(island_group("Davao del Sur"), Some("mindanao"));
        assert_eq!(island_group("Cagayan Valley, Region II"), Some("luzon"));
        assert_eq!(island_group("Atlantis"), None);
        assert_eq!(island_group("  "), None);
    }
}
