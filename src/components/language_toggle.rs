use leptos::prelude::*;

use crate::i18n::Locale;

/// Button flipping between the two locales.
#[component]
pub fn LanguageToggle(locale: ReadSignal<Locale>, set_locale: WriteSignal<Locale>) -> impl IntoView {
	view! {
		<button
			class="language-toggle"
			title=move || locale.get().toggle_hint()
			on:click=move |_| set_locale.update(|l| *l = l.toggled())
		>
			{move || locale.get().toggle_label()}
		</button>
	}
}
