use rand::seq::IndexedRandom;

// Text before and after the quoted user message.
const TEMPLATES: [(&str, &str); 4] = [
    (
        "I received your message: '",
        "'. This is a mock response while we're setting up the AI connection.",
    ),
    ("Thanks for saying '", "'! I'm currently in demo mode."),
    (
        "Mock AI: I understand you said '",
        "'. The real AI will be connected soon!",
    ),
    ("Demo response to '", "': The Flask app is working correctly!"),
];

/// Every reply the stub can produce for `message`.
pub fn candidates(message: &str) -> Vec<String> {
    TEMPLATES
        .iter()
        .map(|(before, after)| format!("{before}{message}{after}"))
        .collect()
}

/// Canned reply used once every remote strategy has given up. Never fails.
pub fn mock_reply(message: &str) -> String {
    let (before, after) = TEMPLATES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(TEMPLATES[0]);
    format!("{before}{message}{after}")
}
