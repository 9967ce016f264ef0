//! portfolio-landing: bilingual project showcase for the browser.
//!
//! This crate provides a WASM landing page that lists project cards, opens a
//! detail overlay on selection, switches between Chinese and English, and
//! animates a particle field behind everything.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlScriptElement, Window};

// Only needed to enable the `js` entropy backend for `rand` under wasm.
use getrandom as _;

pub mod catalog;
pub mod components;
pub mod i18n;

pub use catalog::{Catalog, Project};
use components::{
	LanguageToggle, ParticleBackground, ProjectCard, ProjectDetail, Theme, TypewriterTitle,
};
pub use i18n::Locale;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-landing: logging initialized");
}

/// Text of a `<script id="project-data">` element, if the page carries one.
fn page_catalog_json() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("project-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Load the project catalog, preferring data embedded in the page over the
/// catalog bundled at build time.
fn load_catalog() -> Catalog {
	let (source, parsed) = match page_catalog_json() {
		Some(json) => ("page", Catalog::from_json(&json)),
		None => ("bundled", Catalog::embedded()),
	};

	match parsed {
		Ok(catalog) => {
			info!(
				"portfolio-landing: loaded {} projects from {} data",
				catalog.len(),
				source
			);
			catalog
		}
		Err(e) => {
			warn!(
				"portfolio-landing: failed to parse {} project data: {}",
				source, e
			);
			Catalog::default()
		}
	}
}

/// Today's date as the footer build stamp.
fn build_stamp() -> String {
	js_sys::Date::new_0()
		.to_locale_date_string("zh-CN", &JsValue::UNDEFINED)
		.into()
}

/// Main application component.
///
/// Owns the two pieces of page state, the active locale and the selected
/// project, and hands them to the views as read-only signals.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let catalog = StoredValue::new(load_catalog());
	let (locale, set_locale) = signal(Locale::default());
	let selected = RwSignal::new(None::<u32>);
	let title = Signal::derive(move || locale.get().strings().title.to_string());
	let stamp = build_stamp();

	let cards = catalog.with_value(|c| {
		c.projects
			.iter()
			.cloned()
			.enumerate()
			.map(|(index, project)| {
				let id = project.id;
				view! {
					<ProjectCard
						project=project
						locale=locale
						index=index
						on_select=move |_| selected.set(Some(id))
					/>
				}
			})
			.collect_view()
	});

	let detail = move || {
		let project = selected
			.get()
			.and_then(|id| catalog.with_value(|c| c.get(id).cloned()))?;
		Some(view! {
			<ProjectDetail
				project=project
				locale=locale
				on_close=move |_| selected.set(None)
			/>
		})
	};

	view! {
		<Html attr:lang=move || locale.get().tag() attr:dir="ltr" />
		<Title text=move || locale.get().strings().title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="page" style=Theme::default().css_variables()>
			<ParticleBackground />
			<div class="backdrop-glow" aria-hidden="true" />
			<div class="container">
				<header class="header">
					<TypewriterTitle text=title />
					<div class="header__actions">
						<LanguageToggle locale=locale set_locale=set_locale />
					</div>
					<p class="subtitle">{move || locale.get().strings().subtitle}</p>
				</header>

				<div class="project-list">{cards}</div>

				<footer class="footer">
					<p>{move || locale.get().strings().built_with}</p>
					<p class="footer__stamp">{format!("✨ {}", stamp)}</p>
				</footer>
			</div>
			{detail}
		</div>
	}
}
