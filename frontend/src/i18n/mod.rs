//! Static bilingual text tables.
//!
//! Every string the UI renders comes from a [`UiText`] bundle selected by
//! [`Locale`]. The bundles are plain data with identical shape per locale;
//! components never hardcode copy.

use serde::{Deserialize, Serialize};

mod en;
mod zh;

/// Supported UI languages.
///
/// Lives in transient page state; nothing persists it across reloads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    /// BCP-47-ish tag used for the `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Name of the language in itself.
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Zh => "中文",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Locale::En => "🇺🇸",
            Locale::Zh => "🇨🇳",
        }
    }

    /// The other locale (compact switcher on small screens).
    pub fn toggled(self) -> Locale {
        match self {
            Locale::En => Locale::Zh,
            Locale::Zh => Locale::En,
        }
    }
}

/// Text bundle for `locale`.
pub fn text(locale: Locale) -> &'static UiText {
    match locale {
        Locale::En => &en::TEXT,
        Locale::Zh => &zh::TEXT,
    }
}

// =============================================================================
// Bundle shapes
// =============================================================================

pub struct UiText {
    pub nav: NavText,
    pub hero: HeroText,
    pub carousel: CarouselText,
    pub form: FormText,
    pub order: OrderText,
    pub detector: DetectorText,
    pub options: OptionTables,
    pub not_found: &'static str,
}

pub struct NavText {
    pub home: &'static str,
    pub essay_writer: &'static str,
    pub detector: &'static str,
    pub web: &'static str,
    pub mobile: &'static str,
}

pub struct HeroText {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub struct CarouselText {
    pub title: &'static str,
    pub anchor: &'static str,
    pub cards: [CarouselCard; 4],
}

pub struct CarouselCard {
    pub id: u8,
    pub title: &'static str,
    pub tag: &'static str,
}

pub struct FormText {
    pub type_label: &'static str,
    pub level_label: &'static str,
    pub topic_label: &'static str,
    pub topic_placeholder: &'static str,
    pub instructions_label: &'static str,
    pub req_section_title: &'static str,
    pub missing_hint: &'static str,
    pub add_constraints: &'static str,
    /// Button labels for the constraint templates.
    pub missing_suggestions: [&'static str; 4],
    /// Lines inserted into the instructions by each template.
    pub constraint_templates: [&'static str; 4],
    pub attach_ref: &'static str,
    pub attach_ref_tooltip: &'static str,
    pub ref_list_label: &'static str,
    pub ref_disclaimer: &'static str,
    pub remove: &'static str,
    pub outline_label: &'static str,
    pub outline_ai: &'static str,
    pub outline_custom: &'static str,
    pub word_count_label: &'static str,
    pub language_label: &'static str,
    pub citation_label: &'static str,
    pub figures_label: &'static str,
    pub extra_charts: &'static str,
    pub extra_formulas: &'static str,
    pub submit_button: &'static str,
}

pub struct Deliverable {
    pub title: &'static str,
    pub format: &'static str,
}

pub struct Deliverables {
    pub paper: Deliverable,
    pub summary: Deliverable,
    pub faq: Deliverable,
    pub strategy: Deliverable,
    pub refs: Deliverable,
    pub agent: Deliverable,
}

pub struct PreviewTitles {
    pub paper: &'static str,
    pub summary: &'static str,
    pub faq: &'static str,
    pub strategy: &'static str,
    pub refs: &'static str,
    pub all: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct OrderText {
    pub config_title: &'static str,
    pub untitled: &'static str,
    pub edit: &'static str,
    pub back: &'static str,
    pub sample_previews: &'static str,
    pub sample_desc: &'static str,
    pub preview_samples: &'static str,
    pub all_in_one: &'static str,
    pub core_paper: &'static str,
    pub review: &'static str,
    pub revision: &'static str,
    pub addons_title: &'static str,
    pub similarity_title: &'static str,
    pub slides_title: &'static str,
    pub soon: &'static str,
    pub recommended: &'static str,
    pub addon_label: &'static str,
    pub total: &'static str,
    pub pay_button: &'static str,
    pub pay_notice: &'static str,
    pub secure_payment: &'static str,
    pub close_preview: &'static str,
    pub sample_preview: &'static str,
    pub high_fidelity: &'static str,
    pub sample_placeholder: &'static str,
    pub click_hint: &'static str,
    pub faqs: [Faq; 2],
    pub trusted_by: &'static str,
    pub students: &'static str,
    pub deliverables: Deliverables,
    pub preview_titles: PreviewTitles,
}

pub struct Feature {
    /// Icon key, mapped to a CSS class by the view.
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct WhyEssayPass {
    pub badge: &'static str,
    pub heading: &'static str,
    pub general_risk: &'static str,
    pub essay_pass_safe: &'static str,
    pub cta: &'static str,
    pub features: [Feature; 3],
}

pub struct DetectorText {
    pub hero_title: &'static str,
    pub hero_title_highlight: &'static str,
    pub hero_subtitle: &'static str,
    pub identify_risks: &'static str,
    pub professional_solution: &'static str,
    pub upload_prompt: &'static str,
    pub upload_supported: &'static str,
    pub detect_button: &'static str,
    pub detecting: &'static str,
    pub remove_file: &'static str,
    pub notes: [&'static str; 3],
    pub why: WhyEssayPass,
}

/// Display labels for the form's fixed choice sets, indexed like the
/// corresponding enum's `ALL` array.
pub struct OptionTables {
    pub essay_types: [&'static str; 10],
    pub academic_levels: [&'static str; 5],
    pub word_counts: [&'static str; 7],
    pub languages: [&'static str; 7],
    pub citation_styles: [&'static str; 6],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        for locale in Locale::ALL {
            assert_eq!(locale.toggled().toggled(), locale);
            assert_ne!(locale.toggled(), locale);
        }
    }

    #[test]
    fn test_carousel_cards_share_ids_across_locales() {
        let en: Vec<u8> = text(Locale::En).carousel.cards.iter().map(|c| c.id).collect();
        let zh: Vec<u8> = text(Locale::Zh).carousel.cards.iter().map(|c| c.id).collect();
        assert_eq!(en, zh);
        assert_eq!(en, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_no_empty_labels() {
        for locale in Locale::ALL {
            let options = &text(locale).options;
            let all = options
                .essay_types
                .iter()
                .chain(options.academic_levels.iter())
                .chain(options.word_counts.iter())
                .chain(options.languages.iter())
                .chain(options.citation_styles.iter());
            for label in all {
                assert!(!label.trim().is_empty(), "empty option label in {:?}", locale);
            }
        }
    }

    #[test]
    fn test_locale_serializes_as_tag() {
        assert_eq!(serde_json::to_string(&Locale::Zh).unwrap(), "\"zh\"");
        assert_eq!(Locale::default(), Locale::En);
    }
}
