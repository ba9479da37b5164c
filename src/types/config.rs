use semver::Version;
use serde::Deserialize;

use crate::types::card::Card;

/// On-disk layout of a `*.deck.toml` file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeckConfig {
	pub name: Option<String>,

	// The version of the schema that we're on
	pub schema_version: Version,

	pub cards: Vec<Card>,
}
