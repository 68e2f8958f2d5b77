//! Flavour text from a hosted text-generation API.
//!
//! Every call degrades to a readable fallback line; nothing here fails the game.
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use rand::Rng;
use serde_json::{Value, json};

use crate::config::Config;
use crate::core::enemy::EnemyKind;
use crate::error::{GameError, GameResult};

const TIMEOUT: Duration = Duration::from_secs(10);

pub const NOT_CONFIGURED: &str = "The trail is quiet. (Gemini API key not configured)";
pub const NO_TEXT: &str = "No text found in the response";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrailEvent { Storm, FloodedRiver, Encounter, Sickness }

impl TrailEvent {
    pub const ALL: [TrailEvent; 4] =
        [TrailEvent::Storm, TrailEvent::FloodedRiver, TrailEvent::Encounter, TrailEvent::Sickness];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn label(self) -> &'static str {
        match self {
            TrailEvent::Storm => "storm",
            TrailEvent::FloodedRiver => "flooded river",
            TrailEvent::Encounter => "encounter",
            TrailEvent::Sickness => "sickness",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DialogueKind {
    EnemyDefeated(EnemyKind),
    FriendlyTraveler,
    RandomEvent(TrailEvent),
    Merchant,
}

impl DialogueKind {
    pub fn prompt(self) -> String {
        match self {
            DialogueKind::EnemyDefeated(kind) => format!(
                "Write a dramatic last message of at most 2 lines that a {} from the Oregon Trail \
                 game would say when defeated by the player. Brief and dramatic. No special formatting.",
                kind.label()
            ),
            DialogueKind::FriendlyTraveler => "Write a short greeting (at most 3 lines) from a traveler \
                 on the Oregon Trail in 1848 who offers useful advice about the journey. Friendly and \
                 historically grounded. No special formatting."
                .to_string(),
            DialogueKind::RandomEvent(event) => format!(
                "Write a brief description (at most 3 lines) of a '{}' event that happens during the \
                 journey on the Oregon Trail. Dramatic. No special formatting.",
                event.label()
            ),
            DialogueKind::Merchant => "Write a 2 line greeting from a merchant in Independence, Missouri \
                 in 1848 who sells supplies for the journey to Oregon. Persuasive. No special formatting."
                .to_string(),
        }
    }

    /// Canned line used when the service is not configured.
    pub fn offline_line(self) -> String {
        match self {
            DialogueKind::EnemyDefeated(kind) => match kind {
                EnemyKind::Bandit => "\"Tell my brothers... the gold is buried by the river...\"".to_string(),
                EnemyKind::Wolf => "The wolf lets out one last howl into the prairie.".to_string(),
                EnemyKind::Bear => "The grizzly staggers and falls with a heavy thud.".to_string(),
            },
            DialogueKind::FriendlyTraveler => {
                "\"Howdy, friend. Ford rivers only where the water runs low, and keep your powder dry.\""
                    .to_string()
            }
            DialogueKind::RandomEvent(event) => format!("A {} slows the caravan down.", event.label()),
            DialogueKind::Merchant => {
                "\"Welcome to Independence! Best flour and bullets this side of the Missouri.\"".to_string()
            }
        }
    }
}

/// First string stored under a `"text"` key, depth first.
pub fn extract_text(response: &Value) -> Option<&str> {
    if let Some(text) = response.pointer("/candidates/0/content/parts/0/text").and_then(Value::as_str) {
        return Some(text);
    }
    find_text(response)
}

fn find_text(value: &Value) -> Option<&str> {
    match value {
        Value::Object(map) => {
            if let Some(text) = map.get("text").and_then(Value::as_str) {
                return Some(text);
            }
            map.values().find_map(find_text)
        }
        Value::Array(items) => items.iter().find_map(find_text),
        _ => None,
    }
}

pub fn request_body(prompt: &str) -> Value {
    json!({ "contents": [ { "parts": [ { "text": prompt } ] } ] })
}

#[derive(Clone, Debug)]
pub struct DialogueService {
    api_url: String,
    api_key: Option<String>,
}

impl DialogueService {
    pub fn new(config: &Config) -> Self {
        Self { api_url: config.gemini_api_url.clone(), api_key: config.api_key().map(str::to_string) }
    }

    pub fn is_configured(&self) -> bool { self.api_key.is_some() }

    /// Blocking. Always returns something printable.
    pub fn generate_text(&self, prompt: &str) -> String {
        let Some(key) = self.api_key.as_deref() else {
            return NOT_CONFIGURED.to_string();
        };
        match self.post(prompt, key) {
            Ok(text) => text,
            Err(GameError::Http(msg)) => {
                log::warn!("Dialogue request failed: {msg}");
                msg
            }
            Err(e) => {
                log::warn!("Dialogue response unreadable: {e}");
                "Error processing the dialogue response".to_string()
            }
        }
    }

    fn post(&self, prompt: &str, key: &str) -> GameResult<String> {
        let agent = ureq::AgentBuilder::new().timeout_connect(TIMEOUT).timeout_read(TIMEOUT).build();
        let url = format!("{}?key={}", self.api_url, key);
        let body = serde_json::to_string(&request_body(prompt))?;
        let response = match agent.post(&url).set("Content-Type", "application/json").send_string(&body) {
            Ok(r) => r,
            Err(ureq::Error::Status(code, r)) => {
                let detail = r.into_string().unwrap_or_default();
                log::debug!("Dialogue API error body: {detail}");
                return Err(GameError::Http(format!("Error generating dialogue (code: {code})")));
            }
            // the transport error prints the request URL, key included
            Err(ureq::Error::Transport(t)) => return Err(GameError::Http(format!("Connection error: {}", t.kind()))),
        };
        let text = response.into_string()?;
        let value: Value = serde_json::from_str(&text)?;
        Ok(extract_text(&value).map(str::to_string).unwrap_or_else(|| NO_TEXT.to_string()))
    }

    /// Runs the request on its own thread. Poll the receiver with `try_recv`.
    pub fn request(&self, kind: DialogueKind) -> Receiver<String> {
        let (tx, rx) = mpsc::channel();
        if !self.is_configured() {
            let _ = tx.send(kind.offline_line());
            return rx;
        }
        let service = self.clone();
        thread::spawn(move || {
            let text = service.generate_text(&kind.prompt());
            // the UI may have moved on and dropped the receiver
            let _ = tx.send(text);
        });
        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_candidate_text() {
        let v = json!({"candidates":[{"content":{"parts":[{"text":"Hold fast."}],"role":"model"}}]});
        assert_eq!(extract_text(&v), Some("Hold fast."));
    }

    #[test]
    fn falls_back_to_any_text_field() {
        let v = json!({"other":[{"nested":{"text":"found"}}]});
        assert_eq!(extract_text(&v), Some("found"));
        assert_eq!(extract_text(&json!({"candidates":[]})), None);
    }

    #[test]
    fn body_shape() {
        let body = request_body("hi \"there\"");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hi \"there\"");
    }
}
