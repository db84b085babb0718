//! Agricultural advisor prompts.
//!
//! Contains the system instruction and the user prompt builders for both
//! structured context requests and free-text questions.

use crate::models::{AdviceRequest, FarmingContext, Topic};

/// System prompt for the agricultural advisor
pub const SYSTEM_PROMPT: &str = r#"You are Agri-AI, an expert agricultural advisor specializing in Philippine farming.

Rules you MUST follow:
- Give practical, step-by-step advice a smallholder farmer can act on.
- Prefer locally available inputs and Philippine resources (DA, ATI, PAGASA, PhilRice, PCIC, cooperatives).
- Mention both traditional and modern solutions where they exist.
- If the question is not about agriculture, politely steer back to farming topics.
- Do not invent statistics, prices or product names.

Format your response with short headed sections and bullet points for easy reading."#;

/// User prompt template for a structured request
/// Placeholders: {crop}, {location}, {climate}, {soil_type}, {main_concern}, {focus}
pub const CONTEXT_PROMPT_TEMPLATE: &str = r#"FARMER'S CONTEXT:
- Crop: {crop}
- Location: {location}
- Climate Season: {climate}
- Soil Type: {soil_type}
- Main Concern: {main_concern}

PROVIDE EXPERT ADVICE:
Analyze the farmer's specific situation and provide detailed, actionable advice that:
1. Addresses their main concern directly
2. Considers local Philippine agricultural practices
3. Accounts for the specific climate and soil conditions
4. Includes practical, step-by-step recommendations
5. Mentions relevant Filipino farming techniques and resources
6. Provides both traditional and modern solutions
7. Includes timing and seasonal considerations
8. Suggests local resources (DA, ATI, cooperatives)

FOCUS AREAS:
{focus}"#;

/// Topic-specific focus list appended to the context prompt
pub fn topic_focus(topic: Topic) -> &'static str {
    match topic {
        Topic::WaterManagement => {
            "1. Irrigation techniques suitable for the crop and climate
2. Water scheduling recommendations
3. Drainage considerations
4. Water conservation methods
5. Climate-specific adjustments"
        }
        Topic::PestDisease => {
            "1. Common pests and diseases for this crop in the Philippines
2. Prevention strategies
3. Organic and chemical control options
4. Integrated Pest Management (IPM) approach
5. Monitoring and early detection methods"
        }
        Topic::SoilHealth => {
            "1. Soil-specific management practices
2. Organic matter improvement
3. Nutrient management
4. Soil testing recommendations
5. Long-term soil conservation"
        }
        Topic::YieldImprovement => {
            "1. Variety selection
2. Planting techniques and timing
3. Fertilization program
4. Crop management practices
5. Harvest timing and methods"
        }
        Topic::WeatherPlanning => {
            "1. Seasonal planning
2. Weather risk mitigation
3. Climate-appropriate practices
4. Extreme weather preparedness
5. Weather monitoring resources"
        }
        Topic::General => {
            "1. Best practices for the specific context
2. Resource management
3. Economic considerations
4. Available support systems
5. Technology recommendations"
        }
    }
}

/// Build the user prompt for a structured request
pub fn build_context_prompt(ctx: &FarmingContext, topic: Topic) -> String {
    fill_template(CONTEXT_PROMPT_TEMPLATE, |key| match key {
        "crop" => Some(ctx.crop.as_str()),
        "location" => Some(ctx.location.as_str()),
        "climate" => Some(ctx.climate.as_str()),
        "soil_type" => Some(ctx.soil_type.as_str()),
        "main_concern" => Some(ctx.main_concern.as_str()),
        "focus" => Some(topic_focus(topic)),
        _ => None,
    })
}

/// Substitute `{key}` placeholders in one pass over the template.
///
/// Substituted values are never rescanned, so braces in farmer text stay literal.
fn fill_template<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let value = tail
            .find('}')
            .and_then(|close| lookup(&tail[1..close]).map(|value| (value, close)));
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Build the user prompt for any request.
///
/// Free-text prompts are forwarded as-is.
pub fn build_user_prompt(request: &AdviceRequest, topic: Topic) -> String {
    match request {
        AdviceRequest::Context(ctx) => build_context_prompt(ctx, topic),
        AdviceRequest::Prompt(prompt) => prompt.trim().to_string(),
    }
}
