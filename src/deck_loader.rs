use std::path::Path;

use fs_err as fs;
use tracing::{debug, error, info, instrument, warn};

use crate::{error::DeckError, types::{config::DeckConfig, deck::Deck}};

/// Major schema version this loader understands.
const SUPPORTED_SCHEMA: u64 = 1;

#[instrument(skip(path))]
pub fn load_deck<P: AsRef<Path>>(path: P) -> Result<Deck, DeckError> {
	let path = path.as_ref();
	info!("Loading deck from {:?}", path);

	let content = fs::read_to_string(path)?;
	let config: DeckConfig = toml::from_str(&content)?;

	deck_from_config(config)
}

/// Validates a parsed deck file and hands back the immutable deck.
#[instrument(skip(config))]
pub fn deck_from_config(config: DeckConfig) -> Result<Deck, DeckError> {
	if config.schema_version.major != SUPPORTED_SCHEMA {
		error!("Unsupported schema version {}", config.schema_version);
		return Err(DeckError::UnsupportedSchema(config.schema_version));
	}

	if let Some(name) = &config.name {
		debug!("Deck name: {}", name);
	}

	// The question reference is opaque and deliberately unchecked; the
	// answer has to hold actual text since it is what gets spoken.
	for (index, card) in config.cards.iter().enumerate() {
		if card.answer_text.trim().is_empty() {
			error!("Card {} has a blank answer", index);
			return Err(DeckError::BlankAnswer(index));
		}
	}

	if config.cards.is_empty() {
		warn!("Deck file defines no cards");
		return Err(DeckError::EmptyDeck);
	}

	info!("Loaded {} cards", config.cards.len());
	Ok(Deck::new(config.cards))
}
