//! Project records shown on the landing page.
//!
//! The catalog is read once at startup and never mutated.

use serde::Deserialize;

use crate::i18n::Localized;

const EMBEDDED: &str = include_str!("../data/projects.json");

/// Two-stop CSS gradient used for accents.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Gradient {
	pub from: String,
	pub to: String,
}

impl Gradient {
	pub fn to_css(&self, angle_deg: u16) -> String {
		format!("linear-gradient({}deg, {}, {})", angle_deg, self.from, self.to)
	}
}

/// A single portfolio entry.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
	pub id: u32,
	pub title: Localized<String>,
	/// One-line summary for the card.
	pub description: Localized<String>,
	/// Multi-paragraph text for the detail overlay. Line breaks are kept.
	pub long_description: Localized<String>,
	/// Emoji shown in the icon tile.
	pub icon: String,
	pub tags: Vec<String>,
	/// External site the "visit" action opens.
	pub link: String,
	pub gradient: Gradient,
	pub icon_gradient: Gradient,
}

/// The ordered list of projects.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
	pub projects: Vec<Project>,
}

impl Catalog {
	/// Parse a catalog from a JSON array of project records.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// The catalog bundled into the binary.
	pub fn embedded() -> Result<Self, serde_json::Error> {
		Self::from_json(EMBEDDED)
	}

	pub fn get(&self, id: u32) -> Option<&Project> {
		self.projects.iter().find(|p| p.id == id)
	}

	pub fn len(&self) -> usize {
		self.projects.len()
	}

	pub fn is_empty(&self) -> bool {
		self.projects.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::i18n::Locale;

	#[test]
	fn embedded_catalog_parses() {
		let catalog = Catalog::embedded().unwrap();
		assert_eq!(catalog.len(), 2);
		assert_eq!(catalog.projects[0].id, 1);
		assert_eq!(catalog.projects[1].title.get(Locale::En), "Pixel Verse Social");
	}

	#[test]
	fn lookup_by_id() {
		let catalog = Catalog::embedded().unwrap();
		let reader = catalog.get(1).unwrap();
		assert_eq!(reader.title.get(Locale::En), "Moyu Reader");
		assert_eq!(reader.link, "https://reader.momoyu.lol");
		assert!(catalog.get(99).is_none());
	}

	#[test]
	fn long_descriptions_keep_line_breaks() {
		let catalog = Catalog::embedded().unwrap();
		for project in &catalog.projects {
			assert!(project.long_description.get(Locale::Zh).contains('\n'));
			assert!(project.long_description.get(Locale::En).contains("\n\n"));
		}
	}

	#[test]
	fn ids_are_unique() {
		let catalog = Catalog::embedded().unwrap();
		let mut ids: Vec<_> = catalog.projects.iter().map(|p| p.id).collect();
		ids.sort_unstable();
		ids.dedup();
		assert_eq!(ids.len(), catalog.len());
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(Catalog::from_json(r#"[{"id": "one"}]"#).is_err());
		assert!(Catalog::from_json("[]").unwrap().is_empty());
	}

	#[test]
	fn gradient_renders_css() {
		let g = Gradient {
			from: "#3b82f6".into(),
			to: "#06b6d4".into(),
		};
		assert_eq!(g.to_css(90), "linear-gradient(90deg, #3b82f6, #06b6d4)");
	}
}
