//! The two display locales and their static UI strings.

use serde::Deserialize;

/// Active display language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
	#[default]
	Zh,
	En,
}

/// UI strings that do not belong to any one project.
#[derive(Debug)]
pub struct Strings {
	pub title: &'static str,
	pub subtitle: &'static str,
	pub view_details: &'static str,
	pub project_details: &'static str,
	pub visit_website: &'static str,
	pub built_with: &'static str,
	pub close: &'static str,
}

const ZH: Strings = Strings {
	title: "我的项目集",
	subtitle: "精选项目展示",
	view_details: "查看详情",
	project_details: "项目详情",
	visit_website: "访问网站",
	built_with: "Built with Rust + Leptos + WebAssembly",
	close: "关闭",
};

const EN: Strings = Strings {
	title: "My Projects",
	subtitle: "Featured Projects",
	view_details: "View Details",
	project_details: "Project Details",
	visit_website: "Visit Website",
	built_with: "Built with Rust + Leptos + WebAssembly",
	close: "Close",
};

impl Locale {
	pub fn toggled(self) -> Self {
		match self {
			Locale::Zh => Locale::En,
			Locale::En => Locale::Zh,
		}
	}

	pub fn strings(self) -> &'static Strings {
		match self {
			Locale::Zh => &ZH,
			Locale::En => &EN,
		}
	}

	/// Toggle button text, naming the locale a click switches *to*.
	pub fn toggle_label(self) -> &'static str {
		match self {
			Locale::Zh => "🌐 EN",
			Locale::En => "🌐 中文",
		}
	}

	/// Toggle button tooltip, written in the target locale.
	pub fn toggle_hint(self) -> &'static str {
		match self {
			Locale::Zh => "Switch to English",
			Locale::En => "切换到中文",
		}
	}

	/// BCP 47 tag for the `lang` attribute and date formatting.
	pub fn tag(self) -> &'static str {
		match self {
			Locale::Zh => "zh-CN",
			Locale::En => "en",
		}
	}
}

/// A value with one variant per locale.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Localized<T> {
	pub zh: T,
	pub en: T,
}

impl<T> Localized<T> {
	pub fn get(&self, locale: Locale) -> &T {
		match locale {
			Locale::Zh => &self.zh,
			Locale::En => &self.en,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_locale_is_chinese() {
		assert_eq!(Locale::default(), Locale::Zh);
	}

	#[test]
	fn toggling_twice_returns_to_start() {
		assert_eq!(Locale::Zh.toggled(), Locale::En);
		assert_eq!(Locale::Zh.toggled().toggled(), Locale::Zh);
	}

	#[test]
	fn strings_follow_locale() {
		assert_eq!(Locale::Zh.strings().title, "我的项目集");
		assert_eq!(Locale::En.strings().view_details, "View Details");
	}

	#[test]
	fn toggle_label_names_the_other_locale() {
		assert_eq!(Locale::Zh.toggle_label(), "🌐 EN");
		assert_eq!(Locale::En.toggle_label(), "🌐 中文");
	}

	#[test]
	fn localized_values_pick_by_locale() {
		let title: Localized<String> = serde_json::from_str(r#"{"zh":"摸鱼","en":"Moyu"}"#).unwrap();
		assert_eq!(title.get(Locale::Zh), "摸鱼");
		assert_eq!(title.get(Locale::En), "Moyu");
	}

	#[test]
	fn locale_parses_lowercase_tags() {
		let locale: Locale = serde_json::from_str(r#""en""#).unwrap();
		assert_eq!(locale, Locale::En);
	}
}
