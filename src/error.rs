use semver::Version;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
	#[error("No .deck.toml file found")]
	NoDeckFound,

	#[error("Deck has no cards")]
	EmptyDeck,

	#[error("No active session")]
	NoActiveSession,

	#[error("Card {0} has a blank answer")]
	BlankAnswer(usize),

	#[error("Unsupported deck schema version {0}")]
	UnsupportedSchema(Version),

	#[error("Failed to parse deck file: {0}")]
	Parse(#[from] toml::de::Error),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}
