use reqwest::StatusCode;

use super::types::RejectionBody;

const MAX_MESSAGE_CHARS: usize = 200;

/// Pick a human readable message out of a rejected response body.
pub fn rejection_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<RejectionBody>(body) {
        let non_blank = |field: Option<String>| field.filter(|m| !m.trim().is_empty());
        if let Some(message) = non_blank(parsed.error)
            .or_else(|| non_blank(parsed.message))
            .or_else(|| non_blank(parsed.detail))
        {
            return truncate(message.trim());
        }
    }

    let raw = String::from_utf8_lossy(body);
    let raw = raw.trim();
    if !raw.is_empty() {
        return truncate(raw);
    }

    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

fn truncate(message: &str) -> String {
    if message.chars().count() <= MAX_MESSAGE_CHARS {
        return message.to_string();
    }
    let mut cut: String = message.chars().take(MAX_MESSAGE_CHARS).collect();
    cut.push('…');
    cut
}
