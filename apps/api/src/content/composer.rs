//! Post composer: fills topic templates, appends the tone call-to-action and hashtags.
//!
//! Flow: template set lookup → placeholder substitution → tone suffix → hashtag line.
//!
//! FALLBACK: a topic with no template set of its own silently uses the
//! "Career Advice" set. The requested topic string is still substituted, so
//! "Quantum Computing" yields career-advice phrasing about Quantum Computing.
//! Callers expecting topic-specific wording for unlisted topics will not get it.

use tracing::{debug, info};

use crate::content::templates::{
    AUDIENCE_PLACEHOLDER, FALLBACK_TOPIC, GROWTH_HASHTAG, SECTION_BREAK, TEMPLATE_SETS,
    TOPIC_PLACEHOLDER, VARIATIONS_PER_REQUEST,
};
use crate::content::tone::PostTone;
use crate::models::post::ContentPost;
use crate::store::RecordStore;

/// Returns the template set for `topic`, falling back to the career-advice set.
pub fn template_set_for(topic: &str) -> &'static [&'static str; 3] {
    TEMPLATE_SETS
        .iter()
        .find(|(category, _)| *category == topic)
        .or_else(|| {
            debug!("No template set for topic {topic:?}, using {FALLBACK_TOPIC:?}");
            TEMPLATE_SETS
                .iter()
                .find(|(category, _)| *category == FALLBACK_TOPIC)
        })
        .map(|(_, templates)| templates)
        .unwrap_or(&TEMPLATE_SETS[0].1)
}

/// `#<topic without spaces> #<audience>Success #LinkedInGrowth`
pub fn hashtags(topic: &str, audience: &str) -> String {
    format!(
        "#{} #{}Success {}",
        topic.replace(' ', ""),
        audience,
        GROWTH_HASHTAG
    )
}

/// Builds the text of each post variation. Pure; no store access.
///
/// The audience is lower-cased inside the template body but kept verbatim in
/// the hashtag. Unrecognised tones append no call-to-action.
pub fn compose(topic: &str, audience: &str, tone: &str) -> Vec<String> {
    let audience_lower = audience.to_lowercase();
    let call_to_action = PostTone::from_label(tone).map(|t| t.call_to_action());
    let tags = hashtags(topic, audience);

    template_set_for(topic)
        .iter()
        .take(VARIATIONS_PER_REQUEST)
        .map(|template| {
            let mut content = fill_template(template, topic, &audience_lower);
            if let Some(cta) = call_to_action {
                content.push_str(SECTION_BREAK);
                content.push_str(cta);
            }
            content.push_str(SECTION_BREAK);
            content.push_str(&tags);
            content
        })
        .collect()
}

/// Fills `{topic}` and `{audience}` in one left-to-right scan. Inserted values are
/// never rescanned, so placeholder-like text inside them is kept literally.
fn fill_template(template: &str, topic: &str, audience: &str) -> String {
    let mut out = String::with_capacity(template.len() + topic.len() + audience.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix(TOPIC_PLACEHOLDER) {
            out.push_str(topic);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(AUDIENCE_PLACEHOLDER) {
            out.push_str(audience);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Composes post variations and persists them as drafts.
///
/// Not pure: every returned post has already been appended to `posts`.
pub async fn generate(
    posts: &RecordStore<ContentPost>,
    topic: &str,
    audience: &str,
    tone: &str,
) -> Vec<ContentPost> {
    let drafts = compose(topic, audience, tone)
        .into_iter()
        .map(|content| ContentPost::draft(content, topic, audience, tone))
        .collect();

    let stored = posts.append_batch(drafts).await;
    info!(
        "Generated {} posts for topic={topic:?} audience={audience:?} tone={tone:?}",
        stored.len()
    );
    stored
}
