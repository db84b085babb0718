//! Advisory templates.
//!
//! Each topic renders a header that echoes the farmer's context verbatim,
//! an optional crop block (rice, then corn, then banana; at most one),
//! independent climate and soil blocks, and fixed closing sections.
//! Rendering is pure: same topic and context, same bytes.

use crate::knowledge::{crop_profile, island_group};
use crate::models::{ConversationTopic, FarmingContext, Topic};

const RULE_WIDTH: usize = 70;

/// Crop families with dedicated advice, in match order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CropKind {
    Rice,
    Corn,
    Banana,
}

impl CropKind {
    const ORDER: [(CropKind, &'static str); 3] = [
        (CropKind::Rice, "rice"),
        (CropKind::Corn, "corn"),
        (CropKind::Banana, "banana"),
    ];

    fn detect(crop: &str) -> Option<Self> {
        let crop = crop.to_lowercase();
        Self::ORDER
            .iter()
            .find(|(_, key)| crop.contains(key))
            .map(|(kind, _)| *kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Season {
    Wet,
    Dry,
}

impl Season {
    fn detect(climate: &str) -> Option<Self> {
        let climate = climate.to_lowercase();
        if climate.contains("wet") || climate.contains("monsoon") {
            Some(Self::Wet)
        } else if climate.contains("dry") {
            Some(Self::Dry)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SoilKind {
    Sandy,
    Clay,
    Loamy,
}

impl SoilKind {
    fn detect(soil: &str) -> Option<Self> {
        let soil = soil.to_lowercase();
        if soil.contains("sandy") {
            Some(Self::Sandy)
        } else if soil.contains("clay") {
            Some(Self::Clay)
        } else if soil.contains("loamy") {
            Some(Self::Loamy)
        } else {
            None
        }
    }
}

/// Line-oriented text builder for one advisory
struct Sheet {
    out: String,
}

impl Sheet {
    fn new(title: &str, ctx: &FarmingContext) -> Self {
        let mut out = String::with_capacity(2048);
        out.push_str(title);
        out.push('\n');
        out.push_str(&format!(
            "📍 {} | 🌾 {} | 🌤️ {} | 🌍 {}\n",
            ctx.location, ctx.crop, ctx.climate, ctx.soil_type
        ));
        out.push_str(&"=".repeat(RULE_WIDTH));
        out.push('\n');
        Self { out }
    }

    fn plain(title: &str) -> Self {
        let mut out = String::with_capacity(1024);
        out.push_str(title);
        out.push('\n');
        out.push_str(&"=".repeat(RULE_WIDTH));
        out.push('\n');
        Self { out }
    }

    /// Start a new section
    fn section(&mut self, title: &str) -> &mut Self {
        self.out.push('\n');
        self.out.push_str(title);
        self.out.push_str(":\n");
        self
    }

    /// Unbulleted line inside the current section
    fn note(&mut self, line: &str) -> &mut Self {
        self.out.push_str(line);
        self.out.push('\n');
        self
    }

    fn bullets<S: AsRef<str>>(&mut self, lines: &[S]) -> &mut Self {
        for line in lines {
            self.out.push_str("• ");
            self.out.push_str(line.as_ref());
            self.out.push('\n');
        }
        self
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Render the advisory for a structured request.
pub fn render(topic: Topic, ctx: &FarmingContext) -> String {
    match topic {
        Topic::WaterManagement => water_management(ctx),
        Topic::PestDisease => pest_disease(ctx),
        Topic::SoilHealth => soil_health(ctx),
        Topic::YieldImprovement => yield_improvement(ctx),
        Topic::WeatherPlanning => weather_planning(ctx),
        Topic::General => general(ctx),
    }
}

fn water_management(ctx: &FarmingContext) -> String {
    let mut sheet = Sheet::new("💧 WATER MANAGEMENT ANALYSIS", ctx);

    match CropKind::detect(&ctx.crop) {
        Some(CropKind::Rice) => {
            if Season::detect(&ctx.climate) == Some(Season::Wet) {
                sheet.section("🌧️ WET SEASON RICE MANAGEMENT").bullets(&[
                    "Monitor field water levels (5-10cm depth)",
                    "Install proper drainage to prevent flooding",
                    "Use alternate wetting and drying (AWD) technique",
                    "Check for water stagnation daily",
                ]);
            } else {
                sheet.section("☀️ DRY SEASON RICE MANAGEMENT").bullets(&[
                    "Ensure consistent irrigation supply",
                    "Use drip or sprinkler irrigation",
                    "Apply water every 2-3 days",
                    "Mulch to retain soil moisture",
                ]);
            }
        }
        Some(CropKind::Corn) => {
            sheet.section("🌽 CORN WATER MANAGEMENT").bullets(&[
                "Water deeply but less frequently",
                "Critical periods: tasseling and grain filling",
                "Avoid waterlogging in clay soils",
                "Use furrow irrigation for better efficiency",
            ]);
        }
        Some(CropKind::Banana) => {
            sheet.section("🍌 BANANA WATER MANAGEMENT").bullets(&[
                "Maintain consistent soil moisture",
                "Install drainage in monsoon season",
                "Water 2-3 times per week in dry season",
                "Use mulching to conserve moisture",
            ]);
        }
        None => {}
    }

    sheet.section("🔎 PERSONALIZED INSIGHTS");
    match SoilKind::detect(&ctx.soil_type) {
        Some(SoilKind::Sandy) => sheet.bullets(&[
            "Your sandy soil requires 30-40% more frequent watering",
            "Water retention: LOW - Consider drip irrigation",
        ]),
        Some(SoilKind::Clay) => sheet.bullets(&[
            "Your clay soil retains water well but drains slowly",
            "Risk of waterlogging: HIGH - Ensure proper drainage",
        ]),
        _ => sheet.bullets(&[
            "Your loamy soil has optimal water retention",
            "Balanced irrigation schedule recommended",
        ]),
    };

    sheet
        .section(&format!("📊 CLIMATE ANALYSIS for {}", ctx.location))
        .bullets(&[
            "Expected rainfall pattern: Monitor PAGASA forecasts",
            "Irrigation efficiency: Adjust based on evapotranspiration",
            "Water stress indicators: Check leaf wilting daily",
        ]);

    sheet.section("⚠️ SMART FARMING REMINDERS").bullets(&[
        "Use soil moisture sensors for precision",
        "Check weather forecasts (PAGASA) regularly",
        "Adjust irrigation based on real-time rainfall",
        "Monitor crop water stress indicators",
    ]);

    sheet.finish()
}

fn pest_disease(ctx: &FarmingContext) -> String {
    let mut sheet = Sheet::new("🐛 PEST & DISEASE MANAGEMENT", ctx);

    match CropKind::detect(&ctx.crop) {
        Some(CropKind::Rice) => {
            sheet.section("🌾 COMMON RICE PESTS & DISEASES").bullets(&[
                "Brown Planthopper: Use resistant varieties, avoid over-fertilizing",
                "Stem Borer: Apply neem oil, use pheromone traps",
                "Rice Blast: Improve air circulation, avoid excess nitrogen",
                "Bacterial Leaf Blight: Use certified seeds, crop rotation",
            ]);
        }
        Some(CropKind::Corn) => {
            sheet.section("🌽 COMMON CORN PESTS & DISEASES").bullets(&[
                "Fall Armyworm: Early morning inspection, biological control",
                "Corn Borer: Remove crop residues, use Bt corn varieties",
                "Downy Mildew: Improve drainage, use resistant varieties",
                "Corn Rust: Apply fungicides preventively",
            ]);
        }
        Some(CropKind::Banana) => {
            sheet.section("🍌 COMMON BANANA PESTS & DISEASES").bullets(&[
                "Bunchy Top Virus: Remove infected plants, control aphids",
                "Panama Disease: Use resistant varieties, soil sterilization",
                "Banana Weevil: Use pheromone traps, remove plant debris",
                "Black Sigatoka: Improve air circulation, fungicide application",
            ]);
        }
        None => {}
    }

    sheet.section("🔎 RISK ASSESSMENT");
    if Season::detect(&ctx.climate) == Some(Season::Wet) {
        sheet
            .note("⚠️ HIGH RISK: Fungal diseases likely due to wet conditions")
            .bullets(&[
                "Disease pressure: 75-90% probability",
                "Recommended action: Preventive fungicide application",
            ]);
    } else {
        sheet
            .note("✅ MODERATE RISK: Insect pests more common in dry season")
            .bullets(&[
                "Pest pressure: 50-65% probability",
                "Recommended action: Regular scouting and monitoring",
            ]);
    }

    match SoilKind::detect(&ctx.soil_type) {
        Some(SoilKind::Sandy) => {
            sheet.section("🏖️ SOIL-BORNE RISK (SANDY SOIL)").bullets(&[
                "Nematodes and cutworms thrive in light soils",
                "Incorporate organic matter to support beneficial microbes",
            ]);
        }
        Some(SoilKind::Clay) => {
            sheet.section("🧱 SOIL-BORNE RISK (CLAY SOIL)").bullets(&[
                "Poor drainage favors root rot and damping-off",
                "Use raised beds and avoid standing water",
            ]);
        }
        _ => {}
    }

    sheet.section("🛡️ INTEGRATED PEST MANAGEMENT").bullets(&[
        "Scout fields 2-3 times per week",
        "Use biological control agents (Trichogramma, Bt)",
        "Rotate pesticides to prevent resistance",
        "Maintain field sanitation (remove infected plants)",
        "Plant trap crops around main crop",
        "Use pheromone traps for early detection",
    ]);

    sheet.section("📱 DIGITAL TOOLS").bullets(&[
        "Use pest identification apps (PlantVillage, iNaturalist)",
        "Join farmer messaging groups for local alerts",
        "Contact DA-ATI for expert consultation",
    ]);

    sheet.finish()
}

fn soil_health(ctx: &FarmingContext) -> String {
    let mut sheet = Sheet::new("🌱 SOIL HEALTH MANAGEMENT", ctx);

    match SoilKind::detect(&ctx.soil_type) {
        Some(SoilKind::Sandy) => {
            sheet.section("🏖️ SANDY SOIL MANAGEMENT").bullets(&[
                "Add organic matter (compost, manure)",
                "Use cover crops to prevent erosion",
                "Apply fertilizers in small, frequent doses",
                "Improve water retention with mulching",
            ]);
        }
        Some(SoilKind::Clay) => {
            sheet.section("🧱 CLAY SOIL MANAGEMENT").bullets(&[
                "Improve drainage with raised beds",
                "Add organic matter to improve structure",
                "Avoid working soil when wet",
                "Use gypsum to improve soil structure",
            ]);
        }
        Some(SoilKind::Loamy) => {
            sheet.section("🌿 LOAMY SOIL MANAGEMENT").bullets(&[
                "Maintain organic matter levels",
                "Practice crop rotation",
                "Regular soil testing (every 2-3 years)",
                "Balanced fertilization program",
            ]);
        }
        None => {}
    }

    match CropKind::detect(&ctx.crop) {
        Some(CropKind::Rice) => {
            sheet.section("🌾 RICE SOIL NUTRITION").bullets(&[
                "Target soil pH 5.5-6.5 for lowland rice",
                "Incorporate rice straw instead of burning it",
                "Use the Leaf Color Chart to time nitrogen top-dressing",
                "Apply zinc where deficiency symptoms appear",
            ]);
        }
        Some(CropKind::Corn) => {
            sheet.section("🌽 CORN SOIL NUTRITION").bullets(&[
                "Target soil pH 5.8-7.0",
                "Apply phosphorus and potassium basally at planting",
                "Rotate with legumes (mungbean, peanut) to restore nitrogen",
                "Hill-up after side-dressing to reduce nutrient loss",
            ]);
        }
        Some(CropKind::Banana) => {
            sheet.section("🍌 BANANA SOIL NUTRITION").bullets(&[
                "Banana is a heavy potassium feeder - split K applications",
                "Keep pH between 5.5 and 7.0",
                "Mulch with chopped pseudostems and leaves",
                "Avoid soils from fields with Panama Disease history",
            ]);
        }
        None => {}
    }

    match Season::detect(&ctx.climate) {
        Some(Season::Wet) => {
            sheet.section("🌧️ WET CONDITIONS").bullets(&[
                "Prevent nutrient leaching with split fertilizer applications",
                "Keep ground covered to limit erosion on slopes",
            ]);
        }
        Some(Season::Dry) => {
            sheet.section("☀️ DRY CONDITIONS").bullets(&[
                "Conserve soil moisture with mulch",
                "Avoid deep tillage that dries out the topsoil",
            ]);
        }
        None => {}
    }

    sheet.section("📊 SOIL TESTING RECOMMENDATIONS").bullets(&[
        "Test pH levels (ideal: 6.0-7.0 for most crops)",
        "Check NPK levels",
        "Monitor organic matter content",
        "Test for micronutrients if needed",
    ]);

    sheet.section("🌾 SOIL IMPROVEMENT PRACTICES").bullets(&[
        "Apply compost or well-rotted manure",
        "Practice green manuring",
        "Use appropriate crop rotation",
        "Minimize soil compaction",
    ]);

    sheet.finish()
}

fn yield_improvement(ctx: &FarmingContext) -> String {
    let title = format!("📈 YIELD IMPROVEMENT for {}", ctx.crop.to_uppercase());
    let mut sheet = Sheet::new(&title, ctx);

    sheet.section("🎯 KEY STRATEGIES").bullets(&[
        "Use high-quality, certified seeds",
        "Optimize planting density",
        "Implement proper fertilization program",
        "Ensure adequate water management",
        "Control pests and diseases effectively",
        "Practice proper crop spacing",
    ]);

    match CropKind::detect(&ctx.crop) {
        Some(CropKind::Rice) => {
            sheet.section("🌾 RICE-SPECIFIC TIPS").bullets(&[
                "Use System of Rice Intensification (SRI) method",
                "Transplant young seedlings (14-21 days)",
                "Maintain proper plant spacing (25x25 cm)",
                "Apply balanced NPK fertilization",
            ]);
        }
        Some(CropKind::Corn) => {
            sheet.section("🌽 CORN-SPECIFIC TIPS").bullets(&[
                "Plant at optimal density (60,000-75,000 plants/ha)",
                "Side-dress with nitrogen at V6 stage",
                "Ensure adequate phosphorus at planting",
                "Control weeds early in season",
            ]);
        }
        Some(CropKind::Banana) => {
            sheet.section("🍌 BANANA-SPECIFIC TIPS").bullets(&[
                "Keep one mother plant and one follower per mat (desuckering)",
                "Remove the male bud after the last hand forms",
                "Bag bunches to protect fruit quality",
                "Prop plants heavy with bunches against wind",
            ]);
        }
        None => {}
    }

    match SoilKind::detect(&ctx.soil_type) {
        Some(SoilKind::Sandy) => {
            sheet.section("🏖️ SOIL ADJUSTMENT").bullets(&[
                "Split fertilizer into 3-4 smaller applications on sandy soil",
            ]);
        }
        Some(SoilKind::Clay) => {
            sheet.section("🧱 SOIL ADJUSTMENT").bullets(&[
                "Time field operations to avoid compacting wet clay",
            ]);
        }
        _ => {}
    }

    sheet.section("⏰ TIMING IS CRUCIAL").bullets(&[
        "Plant at optimal time for your region",
        "Monitor growth stages closely",
        "Apply inputs at right growth stages",
        "Harvest at proper maturity",
    ]);

    sheet.finish()
}

fn weather_planning(ctx: &FarmingContext) -> String {
    let title = format!("🌤️ WEATHER PLANNING for {}", ctx.crop.to_uppercase());
    let mut sheet = Sheet::new(&title, ctx);

    match Season::detect(&ctx.climate) {
        Some(Season::Wet) => {
            sheet.section("🌧️ WET SEASON PREPARATIONS").bullets(&[
                "Ensure proper field drainage",
                "Prepare for potential flooding",
                "Increase disease monitoring",
                "Adjust fertilizer application timing",
                "Harvest before heavy rains if possible",
            ]);
        }
        Some(Season::Dry) => {
            sheet.section("☀️ DRY SEASON PREPARATIONS").bullets(&[
                "Secure irrigation water sources",
                "Plan water-efficient crops",
                "Use drought-resistant varieties",
                "Apply mulching to conserve moisture",
                "Monitor for heat stress in crops",
            ]);
        }
        None => {}
    }

    match CropKind::detect(&ctx.crop) {
        Some(CropKind::Rice) => {
            sheet.section("🌾 RICE CROPPING CALENDAR").bullets(&[
                "Wet season planting: June-July with the onset of rains",
                "Dry season planting: November-December where irrigation is secure",
                "Use submergence-tolerant varieties in flood-prone fields",
            ]);
        }
        Some(CropKind::Corn) => {
            sheet.section("🌽 CORN CROPPING CALENDAR").bullets(&[
                "First cropping: April-May at the start of the rains",
                "Second cropping: September-October before the dry months",
                "Avoid tasseling during peak typhoon months",
            ]);
        }
        Some(CropKind::Banana) => {
            sheet.section("🍌 BANANA WEATHER PROTECTION").bullets(&[
                "Prop and guy plants before typhoon season",
                "Plant windbreaks along exposed field edges",
                "Irrigate during extended dry spells to protect bunch size",
            ]);
        }
        None => {}
    }

    match island_group(&ctx.location) {
        Some("luzon") | Some("visayas") => {
            sheet.section("🌀 REGIONAL OUTLOOK").bullets(&[
                "Your area lies in the main typhoon belt (peak July-November)",
                "Keep harvest and storage plans ready before typhoon warnings",
            ]);
        }
        Some("mindanao") => {
            sheet.section("🌀 REGIONAL OUTLOOK").bullets(&[
                "Mindanao sees fewer typhoons but longer dry spells during El Niño",
                "Plan water storage for extended drought",
            ]);
        }
        _ => {}
    }

    sheet.section("📱 WEATHER MONITORING TOOLS").bullets(&[
        "PAGASA weather forecasts",
        "Local weather apps",
        "Agricultural weather stations",
        "Community weather updates",
    ]);

    sheet.section("🚨 EXTREME WEATHER PREPAREDNESS").bullets(&[
        "Typhoon: Harvest early, secure equipment",
        "Drought: Water conservation, crop insurance",
        "Flooding: Drainage systems, elevated storage",
        "El Niño/La Niña: Adjust cropping calendar",
    ]);

    sheet.finish()
}

fn general(ctx: &FarmingContext) -> String {
    let title = format!("🌾 GENERAL FARMING ADVICE for {}", ctx.crop.to_uppercase());
    let mut sheet = Sheet::new(&title, ctx);

    if let Some(profile) = crop_profile(&ctx.crop) {
        sheet
            .section(&format!(
                "📚 {} ({}) PROFILE",
                profile.name.to_uppercase(),
                profile.local_name
            ))
            .bullets(&[
                format!("Recommended varieties: {}", profile.varieties.join(", ")),
                format!("Major producing regions: {}", profile.regions.join(", ")),
                format!("Growing seasons: {}", profile.seasons.join(", ")),
                format!("Pests to watch: {}", profile.pests.join(", ")),
            ]);
    }

    sheet.section("📋 FARMING BEST PRACTICES").bullets(&[
        "Plan your cropping calendar",
        "Keep detailed farm records",
        "Regular field monitoring",
        "Maintain equipment properly",
        "Stay updated with new technologies",
    ]);

    sheet.section("💰 ECONOMIC CONSIDERATIONS").bullets(&[
        "Monitor market prices regularly",
        "Consider crop insurance (PCIC)",
        "Plan for input costs",
        "Explore value-adding opportunities",
    ]);

    sheet.section("🤝 RESOURCES & SUPPORT").bullets(&[
        "Contact local agricultural extension office",
        "Join farmer cooperatives",
        "Attend agricultural training programs",
        "Connect with fellow farmers",
    ]);

    sheet.finish()
}

/// Render the reply for a free-text prompt.
pub fn render_conversation(topic: ConversationTopic) -> String {
    let mut sheet = match topic {
        ConversationTopic::Livestock => {
            let mut sheet = Sheet::plain("🐃 LIVESTOCK CARE");
            sheet.section("🩺 HEALTH").bullets(&[
                "Vaccinate against hemorrhagic septicemia before the rainy season",
                "Deworm carabao, cattle and goats every 3-4 months",
                "Isolate sick animals and call your municipal veterinarian",
            ]);
            sheet.section("🌿 FEEDING").bullets(&[
                "Provide clean drinking water at all times",
                "Mix forage grasses with legumes such as ipil-ipil",
                "Store silage for the dry months",
            ]);
            sheet
        }
        ConversationTopic::Cultivation => {
            let mut sheet = Sheet::plain("🌱 CROP CULTIVATION GUIDE");
            sheet.section("🧭 BEFORE PLANTING").bullets(&[
                "Choose varieties suited to your region and season",
                "Test your soil and correct pH before planting",
                "Prepare the field 2-3 weeks ahead",
            ]);
            sheet.section("🌾 DURING THE SEASON").bullets(&[
                "Follow recommended spacing and seeding rates",
                "Apply fertilizer at key growth stages",
                "Weed early and scout for pests weekly",
            ]);
            sheet
        }
        ConversationTopic::DiseaseDetection => {
            let mut sheet = Sheet::plain("🔬 PLANT DISEASE DETECTION");
            sheet.section("👀 WHAT TO LOOK FOR").bullets(&[
                "Spots, lesions or unusual leaf color",
                "Wilting despite adequate water",
                "Stunted growth or deformed fruit",
            ]);
            sheet.section("🧪 NEXT STEPS").bullets(&[
                "Photograph symptoms and compare with PlantVillage",
                "Remove and destroy badly infected plants",
                "Send samples to the nearest DA regional laboratory",
            ]);
            sheet
        }
        ConversationTopic::SmartIrrigation => {
            let mut sheet = Sheet::plain("💧 SMART IRRIGATION");
            sheet.section("🚿 EFFICIENT WATERING").bullets(&[
                "Irrigate early morning or late afternoon",
                "Use alternate wetting and drying (AWD) for rice",
                "Switch to drip lines for vegetables and fruit trees",
            ]);
            sheet.section("📡 MONITORING").bullets(&[
                "Install soil moisture sensors at root depth",
                "Track rainfall with a simple rain gauge",
            ]);
            sheet
        }
        ConversationTopic::WeatherYield => {
            let mut sheet = Sheet::plain("🌦️ WEATHER & YIELD PLANNING");
            sheet.section("📅 PLANNING").bullets(&[
                "Follow PAGASA seasonal climate outlooks",
                "Align planting with the onset of rains",
                "Keep records of past yields per season to spot trends",
            ]);
            sheet.section("🛡️ PROTECTING YIELD").bullets(&[
                "Insure crops through PCIC",
                "Harvest early when a typhoon is forecast",
            ]);
            sheet
        }
        ConversationTopic::PrecisionAgriculture => {
            let mut sheet = Sheet::plain("🛰️ PRECISION AGRICULTURE");
            sheet.section("🔧 TOOLS").bullets(&[
                "Soil moisture and nutrient sensors",
                "Drone scouting for large fields",
                "Farm record apps to track inputs and yields",
            ]);
            sheet.section("🚀 GETTING STARTED").bullets(&[
                "Start with one sensor plot and compare results",
                "Ask your cooperative about shared equipment",
            ]);
            sheet
        }
        ConversationTopic::Rice => {
            let mut sheet = Sheet::plain("🌾 GROWING RICE (PALAY)");
            sheet.section("🌱 ESSENTIALS").bullets(&[
                "Use certified seeds of NSIC-registered varieties",
                "Transplant 14-21 day old seedlings at 25x25 cm",
                "Keep 5-10cm of water during vegetative growth",
                "Drain the field 2 weeks before harvest",
            ]);
            sheet
        }
        ConversationTopic::Corn => {
            let mut sheet = Sheet::plain("🌽 GROWING CORN (MAIS)");
            sheet.section("🌱 ESSENTIALS").bullets(&[
                "Plant at 60,000-75,000 plants/ha",
                "Side-dress with nitrogen at V6 stage",
                "Scout for Fall Armyworm twice a week",
                "Harvest when husks dry and kernels show a black layer",
            ]);
            sheet
        }
        ConversationTopic::Greeting => {
            let mut sheet = Sheet::plain("🌾 Welcome to Agri-AI!");
            sheet.note("I can help Filipino farmers with:").bullets(&[
                "Crop cultivation (rice, corn, banana and more)",
                "Pest and disease detection",
                "Irrigation and water management",
                "Weather and yield planning",
                "Livestock care",
                "Precision agriculture and IoT tools",
            ]);
            sheet
        }
    };

    sheet.section("💡 TIP").bullets(&[
        "Share your crop, location, season, soil type and main concern for tailored advice",
    ]);

    sheet.finish()
}
