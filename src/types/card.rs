use serde::Deserialize;

/// One question/answer pair. Immutable once defined.
#[derive(Debug, Clone, Eq, Hash, PartialEq, Deserialize)]
pub struct Card {
	// An opaque reference to an image resource, either a local path or a
	// URL. Passed through to the renderer as-is, no validation.
	#[serde(rename = "question")]
	pub question_ref: String,

	// The expected spoken/written answer
	#[serde(rename = "answer")]
	pub answer_text: String,
}
