//! Essay request form model.
//!
//! [`EssayDraft`] is the page-local editing copy; [`EssayDraft::snapshot`]
//! produces the immutable [`EssayRequest`] that is handed to the order page.
//! Choice fields are enums with stable serialized ids; their display labels
//! come from the locale tables so a snapshot renders correctly in either
//! language.

use serde::{Deserialize, Serialize};

use crate::i18n::{text, Locale};
use crate::types::FileDescriptor;

// =============================================================================
// Choice sets
// =============================================================================

/// Declares a fixed choice set whose labels live in `OptionTables::$table`.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident => $table:ident {
            $( $(#[$vmeta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every choice, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Position in [`Self::ALL`] and in the label table.
            pub fn index(self) -> usize {
                self as usize
            }

            pub fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }

            pub fn label(self, locale: Locale) -> &'static str {
                text(locale).options.$table[self.index()]
            }
        }
    };
}

choice_enum! {
    /// Document category.
    EssayType => essay_types {
        Essay,
        ResearchPaper,
        CaseStudy,
        Coursework,
        TermPaper,
        Dissertation,
        Report,
        Review,
        Speech,
        Presentation,
    }
}

choice_enum! {
    /// Academic level, high school through doctoral.
    AcademicLevel => academic_levels {
        HighSchool,
        Undergraduate,
        Bachelors,
        Masters,
        Doctoral,
    }
}

choice_enum! {
    /// Target length.
    WordCount => word_counts {
        #[serde(rename = "300")]
        Words300,
        #[serde(rename = "500")]
        Words500,
        #[serde(rename = "1000")]
        Words1000,
        #[serde(rename = "1600")]
        Words1600,
        #[serde(rename = "2000")]
        Words2000,
        #[serde(rename = "3000")]
        Words3000,
        #[serde(rename = "5000+")]
        Words5000Plus,
    }
}

choice_enum! {
    /// Language the essay is written in.
    OutputLanguage => languages {
        EnglishUs,
        EnglishUk,
        Spanish,
        French,
        German,
        ChineseSimplified,
        Portuguese,
    }
}

choice_enum! {
    CitationStyle => citation_styles {
        Apa7,
        Mla,
        Chicago,
        Harvard,
        Ieee,
        Vancouver,
    }
}

/// How the outline is produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlineType {
    #[default]
    Ai,
    Custom,
}

impl OutlineType {
    pub const ALL: [OutlineType; 2] = [OutlineType::Ai, OutlineType::Custom];

    pub fn label(self, locale: Locale) -> &'static str {
        let form = &text(locale).form;
        match self {
            OutlineType::Ai => form.outline_ai,
            OutlineType::Custom => form.outline_custom,
        }
    }
}

/// Instruction templates offered under "Add constraints".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    WordCount,
    CitationStyle,
    References,
    Deadline,
}

impl Constraint {
    pub const ALL: [Constraint; 4] = [
        Constraint::WordCount,
        Constraint::CitationStyle,
        Constraint::References,
        Constraint::Deadline,
    ];

    pub fn label(self, locale: Locale) -> &'static str {
        text(locale).form.missing_suggestions[self as usize]
    }

    /// Line appended to the instructions.
    pub fn template(self, locale: Locale) -> &'static str {
        text(locale).form.constraint_templates[self as usize]
    }
}

// =============================================================================
// Request
// =============================================================================

/// A complete essay request.
///
/// Serialized as camelCase JSON for the session hand-off.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EssayRequest {
    #[serde(rename = "type")]
    pub essay_type: EssayType,
    pub academic_level: AcademicLevel,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub instructions: String,
    /// Reference-only attachments; never merged into `instructions`.
    #[serde(default)]
    pub reference_files: Vec<FileDescriptor>,
    #[serde(default)]
    pub outline_type: OutlineType,
    pub word_count: WordCount,
    pub language: OutputLanguage,
    pub citation_style: CitationStyle,
    #[serde(default)]
    pub include_charts_tables: bool,
    #[serde(default)]
    pub include_formulas: bool,
}

impl Default for EssayRequest {
    fn default() -> Self {
        Self {
            essay_type: EssayType::Essay,
            academic_level: AcademicLevel::Undergraduate,
            topic: String::new(),
            instructions: String::new(),
            reference_files: Vec::new(),
            outline_type: OutlineType::Ai,
            word_count: WordCount::Words1000,
            language: OutputLanguage::EnglishUs,
            citation_style: CitationStyle::Apa7,
            include_charts_tables: false,
            include_formulas: false,
        }
    }
}

impl EssayRequest {
    /// Example order shown when the order page has nothing to read.
    pub fn sample() -> Self {
        Self {
            essay_type: EssayType::ResearchPaper,
            academic_level: AcademicLevel::Undergraduate,
            topic: "The Impact of Artificial Intelligence on Modern Education".to_string(),
            instructions: "### Task Objectives\n\
                - Discuss the pros and cons of AI tools like ChatGPT in classrooms\n\
                - Include ethical considerations\n\n\
                ### Constraints\n\
                - Use academic tone\n\
                - Cite all sources"
                .to_string(),
            reference_files: Vec::new(),
            outline_type: OutlineType::Ai,
            word_count: WordCount::Words2000,
            language: OutputLanguage::EnglishUs,
            citation_style: CitationStyle::Apa7,
            include_charts_tables: false,
            include_formulas: false,
        }
    }

    /// Topic for headings, or the localized "untitled" label.
    pub fn display_topic(&self, locale: Locale) -> &str {
        let topic = self.topic.trim();
        if topic.is_empty() {
            text(locale).order.untitled
        } else {
            topic
        }
    }
}

// =============================================================================
// Draft
// =============================================================================

/// The request while it is being edited.
///
/// No field is required; an empty topic is rendered with a fallback label
/// downstream.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EssayDraft {
    request: EssayRequest,
}

impl EssayDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled with a quick-start topic.
    pub fn seeded(topic: impl Into<String>) -> Self {
        let mut draft = Self::new();
        draft.set_topic(topic);
        draft
    }

    pub fn request(&self) -> &EssayRequest {
        &self.request
    }

    pub fn set_type(&mut self, essay_type: EssayType) {
        self.request.essay_type = essay_type;
    }

    pub fn set_level(&mut self, level: AcademicLevel) {
        self.request.academic_level = level;
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.request.topic = topic.into();
    }

    pub fn set_instructions(&mut self, instructions: impl Into<String>) {
        self.request.instructions = instructions.into();
    }

    pub fn set_word_count(&mut self, word_count: WordCount) {
        self.request.word_count = word_count;
    }

    pub fn set_language(&mut self, language: OutputLanguage) {
        self.request.language = language;
    }

    pub fn set_citation_style(&mut self, style: CitationStyle) {
        self.request.citation_style = style;
    }

    pub fn set_outline_type(&mut self, outline: OutlineType) {
        self.request.outline_type = outline;
    }

    pub fn set_include_charts_tables(&mut self, include: bool) {
        self.request.include_charts_tables = include;
    }

    pub fn set_include_formulas(&mut self, include: bool) {
        self.request.include_formulas = include;
    }

    pub fn add_reference_file(&mut self, file: FileDescriptor) {
        self.request.reference_files.push(file);
    }

    /// Removes the attachment at `index`; out-of-range is a no-op.
    pub fn remove_reference_file(&mut self, index: usize) -> Option<FileDescriptor> {
        if index < self.request.reference_files.len() {
            Some(self.request.reference_files.remove(index))
        } else {
            None
        }
    }

    /// Appends the constraint template on its own line.
    pub fn insert_constraint(&mut self, constraint: Constraint, locale: Locale) {
        let instructions = &mut self.request.instructions;
        if !instructions.is_empty() && !instructions.ends_with('\n') {
            instructions.push('\n');
        }
        instructions.push_str(constraint.template(locale));
    }

    /// Immutable copy for submission. Later edits do not reach it.
    pub fn snapshot(&self) -> EssayRequest {
        self.request.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_tables_cover_every_choice() {
        for locale in Locale::ALL {
            let options = &text(locale).options;
            assert_eq!(EssayType::ALL.len(), options.essay_types.len());
            assert_eq!(AcademicLevel::ALL.len(), options.academic_levels.len());
            assert_eq!(WordCount::ALL.len(), options.word_counts.len());
            assert_eq!(OutputLanguage::ALL.len(), options.languages.len());
            assert_eq!(CitationStyle::ALL.len(), options.citation_styles.len());
        }
    }

    #[test]
    fn test_index_matches_position() {
        for (i, level) in AcademicLevel::ALL.iter().enumerate() {
            assert_eq!(level.index(), i);
            assert_eq!(AcademicLevel::from_index(i), Some(*level));
        }
        assert_eq!(WordCount::from_index(99), None);
    }

    #[test]
    fn test_sample_request_literal() {
        let sample = EssayRequest::sample();
        assert_eq!(sample.topic, "The Impact of Artificial Intelligence on Modern Education");
        assert_eq!(sample.essay_type.label(Locale::En), "Research Paper");
        assert_eq!(sample.academic_level, AcademicLevel::Undergraduate);
        assert_eq!(sample.citation_style.label(Locale::En), "APA 7th");
        assert_eq!(sample.language, OutputLanguage::EnglishUs);
        assert!(sample.instructions.starts_with("### Task Objectives\n- Discuss"));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(EssayRequest::sample()).unwrap();
        assert_eq!(json["type"], "research-paper");
        assert_eq!(json["academicLevel"], "undergraduate");
        assert_eq!(json["wordCount"], "2000");
        assert_eq!(json["citationStyle"], "apa7");
        assert_eq!(json["outlineType"], "ai");
        assert_eq!(json["includeChartsTables"], false);
    }

    #[test]
    fn test_snapshot_is_decoupled_from_draft() {
        let mut draft = EssayDraft::seeded("Climate policy");
        let submitted = draft.snapshot();

        draft.set_topic("Something else");
        draft.set_include_formulas(true);
        draft.add_reference_file(FileDescriptor::new("notes.pdf", 10));

        assert_eq!(submitted.topic, "Climate policy");
        assert!(!submitted.include_formulas);
        assert!(submitted.reference_files.is_empty());
    }

    #[test]
    fn test_reference_files_do_not_touch_instructions() {
        let mut draft = EssayDraft::new();
        draft.set_instructions("Focus on Europe");
        draft.add_reference_file(FileDescriptor::new("a.pdf", 1));
        draft.add_reference_file(FileDescriptor::new("b.docx", 2));

        assert_eq!(draft.remove_reference_file(0).map(|f| f.name), Some("a.pdf".to_string()));
        assert_eq!(draft.remove_reference_file(5), None);
        assert_eq!(draft.request().reference_files.len(), 1);
        assert_eq!(draft.request().instructions, "Focus on Europe");
    }

    #[test]
    fn test_insert_constraint_appends_line() {
        let mut draft = EssayDraft::new();
        draft.insert_constraint(Constraint::WordCount, Locale::En);
        assert_eq!(draft.request().instructions, "- Word count: ");

        draft.set_instructions("Intro first");
        draft.insert_constraint(Constraint::Deadline, Locale::En);
        assert_eq!(draft.request().instructions, "Intro first\n- Deadline: ");
        assert!(draft.request().topic.is_empty());
    }

    #[test]
    fn test_display_topic_falls_back() {
        let mut request = EssayRequest::default();
        assert_eq!(request.display_topic(Locale::En), "Untitled Essay");
        assert_eq!(request.display_topic(Locale::Zh), "未命名论文");
        request.topic = "  Ocean acidification ".to_string();
        assert_eq!(request.display_topic(Locale::En), "Ocean acidification");
    }
}
