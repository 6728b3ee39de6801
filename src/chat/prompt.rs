// System prompt construction
//
// The whole record snapshot is embedded in the system prompt as JSON,
// clipped to a fixed byte budget so prompt size (and request latency)
// stays bounded no matter how large the dataset grows.

use crate::store::Record;

/// Maximum bytes of serialized snapshot embedded in the prompt.
pub const MAX_SNAPSHOT_BYTES: usize = 15_000;

/// Serialize the snapshot to JSON and clip it to [`MAX_SNAPSHOT_BYTES`].
///
/// The clip is a raw cut, not a structural one: past the budget the
/// embedded JSON may be left unterminated. That is accepted — the model
/// copes with a clipped tail, while an unbounded prompt would not stay
/// within latency limits. The cut is backed off to a char boundary so
/// the prompt is always valid UTF-8.
pub fn render_snapshot(records: &[Record]) -> String {
    let mut json = serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string());

    if json.len() > MAX_SNAPSHOT_BYTES {
        let mut cut = MAX_SNAPSHOT_BYTES;
        while !json.is_char_boundary(cut) {
            cut -= 1;
        }
        json.truncate(cut);
    }

    json
}

/// Build the fixed instruction template around a rendered snapshot.
pub fn build_system_prompt(snapshot_json: &str) -> String {
    format!(
        "You are a helpful data analyst for a Student Information System.\n\
        Here is the current database of students in JSON format:\n\
        {snapshot_json}\n\
        \n\
        Instructions:\n\
        1. Answer based ONLY on this data.\n\
        2. Format lists with <br> for new lines.\n\
        3. If asked \"Who created you?\", say \"I was created by Monica & Anilov.\"\n"
    )
}
