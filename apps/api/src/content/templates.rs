// Template constants for post generation.
// Each template carries `{topic}` and `{audience}` placeholders.

/// Topic category used when the requested topic has no template set of its own.
pub const FALLBACK_TOPIC: &str = "Career Advice";

/// Number of post variations produced per generation request.
pub const VARIATIONS_PER_REQUEST: usize = 3;

pub const TOPIC_PLACEHOLDER: &str = "{topic}";
pub const AUDIENCE_PLACEHOLDER: &str = "{audience}";

pub const STUDENT_LIFE_TEMPLATES: [&str; 3] = [
    "🎓 {topic} insights for students: Here's what every {audience} should know...",
    "💡 Pro tip for {audience}: {topic} can transform your academic journey...",
    "🚀 Ready to level up your {topic} game? Here's your roadmap...",
];

pub const CAREER_ADVICE_TEMPLATES: [&str; 3] = [
    "💼 Career breakthrough: How {topic} changed everything for {audience}...",
    "🎯 {audience} success story: The {topic} strategy that works...",
    "⭐ From student to professional: {topic} lessons learned...",
];

pub const CAMPUS_EVENTS_TEMPLATES: [&str; 3] = [
    "🎉 Campus spotlight: {topic} event that {audience} can't miss...",
    "📅 Mark your calendar: {topic} is happening and here's why you should attend...",
    "🌟 Community building through {topic}: How {audience} benefit...",
];

/// Topic category → template set. Lookup is an exact, case-sensitive match.
pub const TEMPLATE_SETS: &[(&str, [&str; 3])] = &[
    ("Student Life", STUDENT_LIFE_TEMPLATES),
    (FALLBACK_TOPIC, CAREER_ADVICE_TEMPLATES),
    ("Campus Events", CAMPUS_EVENTS_TEMPLATES),
];

pub const CASUAL_CALL_TO_ACTION: &str = "What do you think? Drop your thoughts below! 👇";
pub const INSPIRATIONAL_CALL_TO_ACTION: &str =
    "Your journey starts today. Which step will you take first? 💪";
pub const EDUCATIONAL_CALL_TO_ACTION: &str =
    "Want to learn more? Comment 'INFO' and I'll share resources! 📚";

/// Trailing hashtag shared by every generated post.
pub const GROWTH_HASHTAG: &str = "#LinkedInGrowth";

/// Separator placed before the call-to-action and before the hashtag line.
pub const SECTION_BREAK: &str = "\n\n";
