//! Full-detail overlay for the selected project.

use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, MouseEvent};

use super::lifecycle::{ScrollLock, WindowListener};
use crate::catalog::Project;
use crate::i18n::Locale;

/// Whether a keyboard event should dismiss the overlay.
fn is_dismiss_key(key: &str) -> bool {
	key == "Escape" || key == "Esc"
}

/// Modal dialog with the long description, every tag and an outbound link.
///
/// Closes via the close button, a click on the backdrop, or Escape. Page
/// scrolling is suspended while it is mounted.
#[component]
pub fn ProjectDetail(
	project: Project,
	#[prop(into)] locale: Signal<Locale>,
	#[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
	let escape = WindowListener::attach("keydown", move |ev: Event| {
		let dismiss = ev
			.dyn_ref::<KeyboardEvent>()
			.is_some_and(|key| is_dismiss_key(&key.key()));
		// Closing unmounts this listener, so let the handler return first.
		if dismiss {
			set_timeout(move || on_close.run(()), Duration::ZERO);
		}
	});
	let guards = StoredValue::new_local(Some((ScrollLock::engage(), escape)));
	on_cleanup(move || {
		let _ = guards.try_update_value(Option::take);
	});

	let accent = project.gradient.to_css(90);
	let icon_bg = project.icon_gradient.to_css(135);
	let Project {
		title,
		long_description,
		icon,
		tags,
		link,
		..
	} = project;

	view! {
		<div
			class="modal-backdrop"
			role="dialog"
			aria-modal="true"
			aria-labelledby="modal-title"
			on:click=move |_| on_close.run(())
		>
			<div class="modal-panel" on:click=|ev: MouseEvent| ev.stop_propagation()>
				<button
					class="modal-close"
					aria-label=move || locale.get().strings().close
					on:click=move |_| on_close.run(())
				>
					"✕"
				</button>
				<div class="modal-scroll">
					<div class="modal-header">
						<div class="project-icon project-icon--large" style:background=icon_bg>
							<span class="float">{icon}</span>
						</div>
						<div class="modal-heading">
							<h2 id="modal-title" class="modal-title">
								{move || title.get(locale.get()).clone()}
							</h2>
							<div class="tags">
								{tags
									.into_iter()
									.map(|tag| view! { <span class="tag">{tag}</span> })
									.collect_view()}
							</div>
						</div>
					</div>
					<section class="modal-section">
						<h3>{move || locale.get().strings().project_details}</h3>
						<div class="long-description">
							{move || long_description.get(locale.get()).clone()}
						</div>
					</section>
					<a
						class="visit-link"
						href=link
						target="_blank"
						rel="noopener noreferrer"
						style:background=accent
					>
						{move || format!("{} →", locale.get().strings().visit_website)}
					</a>
				</div>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn escape_dismisses() {
		assert!(is_dismiss_key("Escape"));
		assert!(is_dismiss_key("Esc"));
	}

	#[test]
	fn other_keys_do_not_dismiss() {
		for key in ["Enter", "b", " ", "escape"] {
			assert!(!is_dismiss_key(key));
		}
	}
}
