//! Summary card for one project, with a pointer-following tilt.

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::catalog::Project;
use crate::i18n::Locale;

/// Tags shown on a card plus how many were left out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagSummary {
	pub visible: Vec<String>,
	pub hidden: usize,
}

impl TagSummary {
	pub fn of(tags: &[String], limit: usize) -> Self {
		let shown = tags.len().min(limit);
		Self {
			visible: tags[..shown].to_vec(),
			hidden: tags.len() - shown,
		}
	}
}

/// Card rotation in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
	pub rotate_x: f64,
	pub rotate_y: f64,
}

/// Maximum tilt at the card corners, in degrees.
const MAX_TILT_DEG: f64 = 6.0;

impl Tilt {
	/// Tilt toward a pointer at (`px`, `py`) over a card whose bounding box
	/// is `(left, top, width, height)`.
	///
	/// The card leans away from the pointer's offset from its center, scaled
	/// so an edge gives `max_deg`. Degenerate boxes stay flat.
	pub fn from_pointer(rect: (f64, f64, f64, f64), px: f64, py: f64, max_deg: f64) -> Self {
		let (left, top, width, height) = rect;
		if width <= 0.0 || height <= 0.0 {
			return Self::default();
		}
		let nx = (((px - left) / width) * 2.0 - 1.0).clamp(-1.0, 1.0);
		let ny = (((py - top) / height) * 2.0 - 1.0).clamp(-1.0, 1.0);
		Self {
			rotate_x: -ny * max_deg,
			rotate_y: nx * max_deg,
		}
	}

	pub fn to_css(self) -> String {
		format!(
			"perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg)",
			self.rotate_x, self.rotate_y
		)
	}
}

/// Clickable project summary.
#[component]
pub fn ProjectCard(
	project: Project,
	#[prop(into)] locale: Signal<Locale>,
	/// Position in the list, used to stagger the entry animation.
	index: usize,
	#[prop(into)] on_select: Callback<()>,
) -> impl IntoView {
	let card_ref = NodeRef::<leptos::html::Div>::new();
	let (tilt, set_tilt) = signal(Tilt::default());

	let on_mousemove = move |ev: MouseEvent| {
		let Some(card) = card_ref.get() else {
			return;
		};
		let rect = card.get_bounding_client_rect();
		set_tilt.set(Tilt::from_pointer(
			(rect.left(), rect.top(), rect.width(), rect.height()),
			f64::from(ev.client_x()),
			f64::from(ev.client_y()),
			MAX_TILT_DEG,
		));
	};
	let on_mouseleave = move |_: MouseEvent| set_tilt.set(Tilt::default());

	let tags = TagSummary::of(&project.tags, 3);
	let accent = project.gradient.to_css(90);
	let icon_bg = project.icon_gradient.to_css(135);
	let Project {
		title,
		description,
		icon,
		..
	} = project;

	view! {
		<div
			node_ref=card_ref
			class="project-card"
			style:animation-delay=format!("{}ms", index * 150)
			style:transform=move || tilt.get().to_css()
			on:click=move |_| on_select.run(())
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
		>
			<div class="project-card__glow" style:background=accent.clone() />
			<div class="project-card__body">
				<div class="project-icon" style:background=icon_bg>
					<span class="float">{icon}</span>
				</div>
				<div class="project-card__content">
					<h3 class="project-card__title">{move || title.get(locale.get()).clone()}</h3>
					<p class="project-card__description">
						{move || description.get(locale.get()).clone()}
					</p>
					<div class="tags">
						{tags
							.visible
							.into_iter()
							.map(|tag| view! { <span class="tag">{tag}</span> })
							.collect_view()}
						{(tags.hidden > 0)
							.then(|| view! { <span class="tag tag--more">{format!("+{}", tags.hidden)}</span> })}
					</div>
					<div class="project-card__cta">
						<span class="gradient-text" style:background-image=accent>
							{move || locale.get().strings().view_details}
						</span>
						<span class="arrow">"→"</span>
					</div>
				</div>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tags(n: usize) -> Vec<String> {
		(0..n).map(|i| format!("tag{i}")).collect()
	}

	#[test]
	fn short_tag_lists_show_everything() {
		let summary = TagSummary::of(&tags(2), 3);
		assert_eq!(summary.visible.len(), 2);
		assert_eq!(summary.hidden, 0);
	}

	#[test]
	fn long_tag_lists_overflow() {
		let summary = TagSummary::of(&tags(6), 3);
		assert_eq!(summary.visible, vec!["tag0", "tag1", "tag2"]);
		assert_eq!(summary.hidden, 3);
	}

	#[test]
	fn pointer_at_center_is_flat() {
		let tilt = Tilt::from_pointer((0.0, 0.0, 200.0, 100.0), 100.0, 50.0, 6.0);
		assert_eq!(tilt, Tilt::default());
	}

	#[test]
	fn pointer_at_corner_gives_full_tilt() {
		let tilt = Tilt::from_pointer((10.0, 20.0, 200.0, 100.0), 210.0, 20.0, 6.0);
		assert_eq!(tilt.rotate_y, 6.0);
		assert_eq!(tilt.rotate_x, 6.0);
	}

	#[test]
	fn pointer_outside_is_clamped() {
		let tilt = Tilt::from_pointer((0.0, 0.0, 100.0, 100.0), -500.0, 900.0, 6.0);
		assert_eq!(tilt.rotate_y, -6.0);
		assert_eq!(tilt.rotate_x, -6.0);
	}

	#[test]
	fn degenerate_rect_stays_flat() {
		assert_eq!(
			Tilt::from_pointer((0.0, 0.0, 0.0, 50.0), 10.0, 10.0, 6.0),
			Tilt::default()
		);
	}

	#[test]
	fn tilt_css_uses_two_decimals() {
		let css = Tilt {
			rotate_x: 1.0,
			rotate_y: -2.5,
		}
		.to_css();
		assert_eq!(css, "perspective(1000px) rotateX(1.00deg) rotateY(-2.50deg)");
	}
}
