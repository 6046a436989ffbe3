//! Story assembly: interleaving fixed text with user responses.

/// Weave `responses` into `fixed_segments`, alternating one segment then one
/// response until either side runs out, then appending whatever remains of
/// the longer side.
///
/// The canonical mad-lib shape has one more fixed segment than responses
/// (text before, between, and after the blanks). Other shapes are tolerated
/// on purpose: the walk still terminates and every input character appears in
/// the output exactly once, just without further interleaving.
pub fn assemble(fixed_segments: &[String], responses: &[String]) -> String {
    let capacity = fixed_segments.iter().chain(responses).map(String::len).sum();
    let mut story = String::with_capacity(capacity);

    let mut segments = fixed_segments.iter();
    let mut responses = responses.iter();
    loop {
        match (segments.next(), responses.next()) {
            (Some(segment), Some(response)) => {
                story.push_str(segment);
                story.push_str(response);
            }
            (Some(segment), None) => {
                story.push_str(segment);
                story.extend(segments.map(String::as_str));
                break;
            }
            (None, Some(response)) => {
                story.push_str(response);
                story.extend(responses.map(String::as_str));
                break;
            }
            (None, None) => break,
        }
    }

    story
}
