//! Headline cleaning: drops the trailing " - <publisher>" attribution that
//! aggregators such as Google News append to every title.

/// Strips the final ` - <attribution>` suffix and trims surrounding whitespace.
///
/// Only the right-most hyphen is considered: it must have whitespace on both
/// sides, and the attribution after it can therefore contain no hyphen.
/// Hyphens earlier in the headline body are preserved.
pub fn clean_headline(headline: &str) -> String {
    strip_attribution(headline).trim().to_string()
}

fn strip_attribution(headline: &str) -> &str {
    let Some(hyphen) = headline.rfind('-') else {
        return headline;
    };
    let (head, tail) = headline.split_at(hyphen);
    let after = &tail[1..];

    let before_ws = head.chars().next_back().filter(|c| c.is_whitespace());
    let after_ws = after.chars().next().filter(|c| c.is_whitespace());

    match (before_ws, after_ws) {
        (Some(ws), Some(_)) => &head[..head.len() - ws.len_utf8()],
        _ => headline,
    }
}
