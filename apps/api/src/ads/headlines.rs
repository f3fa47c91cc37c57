//! Ad headline templates. `{audience}` is replaced with the title-cased target audience.

pub const DEFAULT_TARGET_AUDIENCE: &str = "students";

const AUDIENCE_PLACEHOLDER: &str = "{audience}";

pub const HEADLINE_TEMPLATES: [&str; 10] = [
    "Transform Your Career: Join 10k+ {audience} Who Succeeded",
    "Unlock Your Potential: The #1 Platform for {audience}",
    "Ready to Stand Out? Connect with Alumni & Grow Your Network",
    "From Student to Professional: Your Journey Starts Here",
    "Join the Future Leaders: Network, Learn, Succeed",
    "Career Breakthrough Awaits: Connect with Industry Leaders",
    "Build Your Professional Brand: Start Today",
    "Network Like a Pro: Access Exclusive Opportunities",
    "Your Career Game-Changer: Join Now",
    "Success Stories Begin Here: Join {audience} Network",
];

pub fn render_headlines(target_audience: &str) -> Vec<String> {
    let audience = title_case(target_audience);
    HEADLINE_TEMPLATES
        .iter()
        .map(|t| t.replace(AUDIENCE_PLACEHOLDER, &audience))
        .collect()
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest,
/// so `"college STUDENTS"` becomes `"College Students"` and `"10k"` becomes `"10K"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if prev_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_alpha = c.is_alphabetic();
    }
    out
}
