use std::io::{self, BufRead};

use eyre::Result;
use rand::Rng;
use tracing::warn;
use tracing_subscriber::fmt::time::ChronoLocal;

use picflash::{
	deck_loader::load_deck,
	deck_locator::find_deck_file,
	session::{RevealState, Session},
	speech::{SpeechSynthesizer, Utterance, Voice},
};

/// Console stand-in for a platform text-to-speech backend; prints what it
/// would say. A real binding would hand the utterance to the OS synthesizer
/// and refresh `voices` when the platform announces its voice list.
struct ConsoleSpeech {
	voices:   Vec<Voice>,
	speaking: bool,
}

impl ConsoleSpeech {
	fn new() -> Self {
		let mut voices =
			vec![Voice { name: "Console English".to_string(), language: "en-US".to_string() }];
		voices.sort_by(|a, b| a.name.cmp(&b.name));
		Self { voices, speaking: false }
	}
}

impl SpeechSynthesizer for ConsoleSpeech {
	fn voices(&self) -> &[Voice] { &self.voices }

	fn is_speaking(&self) -> bool { self.speaking }

	fn cancel(&mut self) { self.speaking = false; }

	fn speak(&mut self, utterance: Utterance) {
		let voice = utterance.voice.map_or_else(|| "default voice".to_string(), |v| v.name);
		println!("~ [{}] \"{}\"", voice, utterance.text);
		// Printing finishes immediately, so the backend never stays busy
		self.speaking = false;
	}
}

fn render<R: Rng>(session: &Session<R>) {
	match session.current_card() {
		Ok(card) => {
			println!();
			println!("Question: {}", card.question_ref);
			if session.reveal_state() == RevealState::Revealed {
				println!("Answer:   {}", card.answer_text);
			}
		}
		Err(_) => println!("No card to show."),
	}
}

fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt().with_timer(ChronoLocal::rfc_3339()).init();

	let deck = match find_deck_file().and_then(load_deck) {
		Ok(deck) => deck,
		Err(error) => {
			// Keep running but with every affordance disabled, the same
			// fallback the renderer is expected to show.
			warn!("{error}");
			println!("No deck data available. Check your *.deck.toml file.");
			return Ok(());
		}
	};

	let mut session = Session::new(rand::thread_rng());
	session.start(deck)?;

	let mut speech = ConsoleSpeech::new();

	render(&session);
	println!("(r)eveal  (s)peak  (n)ext  (q)uit");

	for line in io::stdin().lock().lines() {
		match line?.trim() {
			"r" => session.reveal()?,
			"s" => session.speak_current_answer(&mut speech),
			"n" => {
				session.advance()?;
			}
			"q" => break,
			_ => println!("(r)eveal  (s)peak  (n)ext  (q)uit"),
		}
		render(&session);
	}

	Ok(())
}
