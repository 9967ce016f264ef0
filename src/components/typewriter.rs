//! Title that types itself out one character at a time.

use std::time::Duration;

use leptos::prelude::*;

/// Delay between revealed characters.
const TICK: Duration = Duration::from_millis(80);

/// Reveal progress through a piece of text, counted in characters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Typewriter {
	text: String,
	shown: usize,
}

impl Typewriter {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			shown: 0,
		}
	}

	/// Reveal one more character. Returns `false` once everything is shown.
	pub fn tick(&mut self) -> bool {
		if self.is_done() {
			return false;
		}
		self.shown += 1;
		true
	}

	pub fn is_done(&self) -> bool {
		self.shown >= self.text.chars().count()
	}

	/// The revealed prefix, never splitting a multi-byte character.
	pub fn visible(&self) -> &str {
		match self.text.char_indices().nth(self.shown) {
			Some((end, _)) => &self.text[..end],
			None => &self.text,
		}
	}

	/// Start over with new text unless it is unchanged.
	pub fn restart(&mut self, text: &str) {
		if self.text != text {
			self.text = text.to_string();
			self.shown = 0;
		}
	}
}

/// Heading whose text is typed out, restarting whenever `text` changes.
#[component]
pub fn TypewriterTitle(#[prop(into)] text: Signal<String>) -> impl IntoView {
	let state = RwSignal::new(Typewriter::new(text.get_untracked()));

	Effect::new(move |_| {
		let current = text.get();
		state.update(|t| t.restart(&current));
	});

	if let Ok(handle) = set_interval_with_handle(
		move || {
			if !state.with_untracked(Typewriter::is_done) {
				state.update(|t| {
					t.tick();
				});
			}
		},
		TICK,
	) {
		on_cleanup(move || handle.clear());
	}

	view! {
		<h1 class="title fade-in">
			{move || state.with(|t| t.visible().to_string())}
			<span class=move || {
				if state.with(Typewriter::is_done) { "caret caret-done" } else { "caret" }
			}>
				"|"
			</span>
		</h1>
	}
}
