use std::path::{Path, PathBuf};

use fs_err as fs;
use tracing::{error, info, instrument};

use crate::error::DeckError;

#[instrument]
pub fn find_deck_file() -> Result<PathBuf, DeckError> {
	info!("Searching for deck file");

	pub fn is_deck_file(path: &Path) -> bool {
		path.is_file()
			&& path
				.file_name()
				.and_then(|name| name.to_str())
				.is_some_and(|name| name.ends_with(".deck.toml"))
	}

	fs::read_dir(".")?.flatten().map(|e| e.path()).find(|p| is_deck_file(p)).ok_or_else(|| {
		error!("No deck file found");
		DeckError::NoDeckFound
	})
}
