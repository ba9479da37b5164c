/// Neutral speaking rate; backends commonly accept 0.1 through 10.0.
pub const NEUTRAL_RATE: f32 = 1.0;

/// Neutral pitch; backends commonly accept 0.0 through 2.0.
pub const NEUTRAL_PITCH: f32 = 1.0;

/// A synthesizer voice as reported by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Voice {
	pub name:     String,
	// BCP-47 style tag, e.g. "en-US"
	pub language: String,
}

/// One request to the speech backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
	pub text:  String,
	// None means the backend default voice
	pub voice: Option<Voice>,
	pub rate:  f32,
	pub pitch: f32,
}

impl Utterance {
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into(), voice: None, rate: NEUTRAL_RATE, pitch: NEUTRAL_PITCH }
	}
}

/// External text-to-speech capability. Speaking is fire-and-forget: `speak`
/// returns without waiting for the utterance to finish. The voice list may
/// be empty until the backend has finished loading it, at any point in the
/// program's life; callers re-query rather than cache.
pub trait SpeechSynthesizer {
	fn voices(&self) -> &[Voice];

	fn is_speaking(&self) -> bool;

	/// Stops any in-flight utterance.
	fn cancel(&mut self);

	fn speak(&mut self, utterance: Utterance);
}

/// Picks the first voice with an English language tag ("en" or "en-*").
/// None means no match; the caller falls back to the backend default.
pub fn select_english_voice(voices: &[Voice]) -> Option<&Voice> {
	voices.iter().find(|voice| is_english(&voice.language))
}

fn is_english(tag: &str) -> bool { tag == "en" || tag.starts_with("en-") }
