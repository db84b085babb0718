//! Request and topic types shared by the classifier, renderer and responders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Farmer-supplied context for a structured advice request.
///
/// Every field is free-form display text. Missing fields deserialize to the
/// empty string so a partial request still produces advice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmingContext {
    #[serde(default)]
    pub crop: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub climate: String,
    #[serde(default)]
    pub soil_type: String,
    #[serde(default)]
    pub main_concern: String,
}

impl FarmingContext {
    pub fn new(
        crop: impl Into<String>,
        location: impl Into<String>,
        climate: impl Into<String>,
        soil_type: impl Into<String>,
        main_concern: impl Into<String>,
    ) -> Self {
        Self {
            crop: crop.into(),
            location: location.into(),
            climate: climate.into(),
            soil_type: soil_type.into(),
            main_concern: main_concern.into(),
        }
    }

    /// Text routed through the concern classifier
    pub fn concern_signal(&self) -> &str {
        &self.main_concern
    }
}

/// Advisory topic for the structured path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    WaterManagement,
    PestDisease,
    SoilHealth,
    YieldImprovement,
    WeatherPlanning,
    General,
}

impl Topic {
    pub const ALL: [Topic; 6] = [
        Topic::WaterManagement,
        Topic::PestDisease,
        Topic::SoilHealth,
        Topic::YieldImprovement,
        Topic::WeatherPlanning,
        Topic::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WaterManagement => "water_management",
            Self::PestDisease => "pest_disease",
            Self::SoilHealth => "soil_health",
            Self::YieldImprovement => "yield_improvement",
            Self::WeatherPlanning => "weather_planning",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Topic for the free-text conversational path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationTopic {
    Livestock,
    Cultivation,
    DiseaseDetection,
    SmartIrrigation,
    WeatherYield,
    PrecisionAgriculture,
    Rice,
    Corn,
    Greeting,
}

impl ConversationTopic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Livestock => "livestock",
            Self::Cultivation => "cultivation",
            Self::DiseaseDetection => "disease_detection",
            Self::SmartIrrigation => "smart_irrigation",
            Self::WeatherYield => "weather_yield",
            Self::PrecisionAgriculture => "precision_agriculture",
            Self::Rice => "rice",
            Self::Corn => "corn",
            Self::Greeting => "greeting",
        }
    }
}

impl fmt::Display for ConversationTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single advice request, structured or free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdviceRequest {
    Context(FarmingContext),
    Prompt(String),
}

impl AdviceRequest {
    /// The text handed to the classifier for this request
    pub fn signal(&self) -> &str {
        match self {
            Self::Context(ctx) => ctx.concern_signal(),
            Self::Prompt(prompt) => prompt,
        }
    }

    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Context(_) => "context",
            Self::Prompt(_) => "prompt",
        }
    }
}

impl From<FarmingContext> for AdviceRequest {
    fn from(ctx: FarmingContext) -> Self {
        Self::Context(ctx)
    }
}
