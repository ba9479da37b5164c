use rand::Rng;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
	error::DeckError,
	shuffle::shuffled,
	speech::{SpeechSynthesizer, Utterance, select_english_voice},
	types::{card::Card, deck::Deck},
};

/// Whether the answer for the current card has been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
	Hidden,
	Revealed,
}

/// Shuffled traversal over a deck. Owns the working order, the cursor and
/// the reveal state; rendering and speech collaborators are injected by the
/// presentation layer rather than reached for here.
pub struct Session<R: Rng> {
	rng:    R,
	active: Option<Active>,
}

struct Active {
	// Session id only exists for log correlation
	id: Uuid,

	// The pristine deck, reshuffled into a fresh working order on wraparound
	deck: Deck,

	working_order: Vec<Card>,
	cursor:        usize,
	reveal:        RevealState,
}

impl<R: Rng> Session<R> {
	pub fn new(rng: R) -> Self { Self { rng, active: None } }

	/// Begins a session over `deck`, replacing any session in progress.
	#[instrument(skip(self, deck))]
	pub fn start(&mut self, deck: Deck) -> Result<(), DeckError> {
		if deck.is_empty() {
			warn!("Refusing to start a session over an empty deck");
			self.active = None;
			return Err(DeckError::EmptyDeck);
		}

		let id = Uuid::new_v4();
		let working_order = shuffled(deck.cards(), &mut self.rng);
		info!("Session {} started with {} cards", id, working_order.len());

		self.active =
			Some(Active { id, deck, working_order, cursor: 0, reveal: RevealState::Hidden });
		Ok(())
	}

	/// The card under the cursor. Pure read, no side effects.
	pub fn current_card(&self) -> Result<&Card, DeckError> {
		let active = self.active.as_ref().ok_or(DeckError::NoActiveSession)?;
		Ok(&active.working_order[active.cursor])
	}

	pub fn reveal_state(&self) -> RevealState {
		self.active.as_ref().map_or(RevealState::Hidden, |active| active.reveal)
	}

	/// Shows the answer for the current card. Calling again while already
	/// revealed is a no-op.
	#[instrument(skip(self))]
	pub fn reveal(&mut self) -> Result<(), DeckError> {
		let active = self.active.as_mut().ok_or(DeckError::NoActiveSession)?;

		if active.reveal == RevealState::Hidden {
			debug!("Revealing answer at cursor {}", active.cursor);
			active.reveal = RevealState::Revealed;
		}

		Ok(())
	}

	/// Speaks the current answer through `synth`, whether or not it has been
	/// revealed yet. Quietly does nothing when no session is active.
	#[instrument(skip(self, synth))]
	pub fn speak_current_answer(&self, synth: &mut dyn SpeechSynthesizer) {
		let Some(active) = self.active.as_ref() else {
			debug!("No active session, nothing to speak");
			return;
		};

		// Only one utterance is audible at a time; cut off whatever is
		// still playing before starting the new one.
		if synth.is_speaking() {
			debug!("Cancelling in-flight utterance");
			synth.cancel();
		}

		let answer = &active.working_order[active.cursor].answer_text;
		let mut utterance = Utterance::new(answer.clone());

		match select_english_voice(synth.voices()) {
			Some(voice) => {
				debug!("Speaking with voice '{}'", voice.name);
				utterance.voice = Some(voice.clone());
			}
			None => warn!("No English voice available, using the backend default"),
		}

		synth.speak(utterance);
	}

	/// Moves to the next card, reshuffling a fresh copy of the deck once
	/// every card has been shown. The new card always starts hidden.
	#[instrument(skip(self))]
	pub fn advance(&mut self) -> Result<&Card, DeckError> {
		let active = self.active.as_mut().ok_or(DeckError::NoActiveSession)?;

		active.cursor += 1;
		if active.cursor >= active.working_order.len() {
			info!("Session {} exhausted the deck, reshuffling", active.id);
			active.working_order = shuffled(active.deck.cards(), &mut self.rng);
			active.cursor = 0;
		}
		active.reveal = RevealState::Hidden;

		Ok(&active.working_order[active.cursor])
	}
}
