//! English text bundle.

use super::*;

pub(super) static TEXT: UiText = UiText {
    nav: NavText {
        home: "Home",
        essay_writer: "AI Essay Writer",
        detector: "AI Detector",
        web: "Web",
        mobile: "Mobile",
    },
    hero: HeroText {
        title: "Submission-Ready Academic Results",
        subtitle: "What You Get After Generation",
    },
    carousel: CarouselText {
        title: "Final Deliverables",
        anchor: "Not a draft. Not a sample. It's the one you submit.",
        cards: [
            CarouselCard { id: 1, title: "Complete Academic Essay", tag: "Submission-Ready" },
            CarouselCard { id: 2, title: "Verified References", tag: "Matched to Text" },
            CarouselCard { id: 3, title: "Summary & FAQs", tag: "Key Points Included" },
            CarouselCard { id: 4, title: "Writing Strategy", tag: "Clear Structure & Logic" },
        ],
    },
    form: FormText {
        type_label: "Type",
        level_label: "Academic level",
        topic_label: "Topic or Name",
        topic_placeholder: "Assignment's topic or name",
        instructions_label: "Instructions & Notes",
        req_section_title: "Editor",
        missing_hint: "Templates:",
        add_constraints: "Add constraints",
        missing_suggestions: ["Word count", "Citation style", "References", "Deadline"],
        constraint_templates: [
            "- Word count: ",
            "- Citation style: ",
            "- References: at least 5 peer-reviewed sources",
            "- Deadline: ",
        ],
        attach_ref: "Attach references",
        attach_ref_tooltip: "Upload academic papers, reading lists, or course materials as references for your essay.",
        ref_list_label: "Reference materials",
        ref_disclaimer: "For reference only. Won't overwrite instructions.",
        remove: "Remove",
        outline_label: "Outline",
        outline_ai: "AI Smart Outline",
        outline_custom: "Custom Outline",
        word_count_label: "Word Count",
        language_label: "Language",
        citation_label: "Citation Style",
        figures_label: "Figures & Equations",
        extra_charts: "Include Charts&Tables",
        extra_formulas: "Include Formulas",
        submit_button: "Get My Paper",
    },
    order: OrderText {
        config_title: "Essay Configuration",
        untitled: "Untitled Essay",
        edit: "Edit details",
        back: "Back",
        sample_previews: "Sample Previews",
        sample_desc: "See example outputs. Your final files follow your topic & requirements.",
        preview_samples: "Preview samples",
        all_in_one: "All-in-one Service",
        core_paper: "1. Core paper",
        review: "2. Review & understanding",
        revision: "3. Revision",
        addons_title: "Add-on Services",
        similarity_title: "Similarity & AI Report",
        slides_title: "Presentation Slides",
        soon: "Soon",
        recommended: "Recommended",
        addon_label: "Add-on (Turnitin Official Report)",
        total: "Total",
        pay_button: "Pay",
        pay_notice: "Payment integration coming soon!",
        secure_payment: "SSL Secure Payment",
        close_preview: "Close Preview",
        sample_preview: "Sample Preview",
        high_fidelity: "High-Fidelity Sample",
        sample_placeholder: "This is a placeholder for the sample. In production, this would display a high-resolution PDF or interactive document viewer to show the quality of output.",
        click_hint: "Tap to preview",
        faqs: [
            Faq {
                question: "Q: Will my EssayPass paper get flagged?",
                answer: "A: Our engine writes line-by-line using academic logic, unlike standard LLMs. Plus, you can add the official Turnitin report for proof.",
            },
            Faq {
                question: "Q: Is the draft actually usable?",
                answer: "A: Yes. You get real citations (matched to text), a clear outline, and a verified reference list. It is a submission-ready artifact.",
            },
        ],
        trusted_by: "Trusted by",
        students: "5M+ students",
        deliverables: Deliverables {
            paper: Deliverable { title: "Submission-ready paper", format: "DOCX/PDF" },
            summary: Deliverable { title: "1-Page Summary", format: "PDF" },
            faq: Deliverable { title: "Topic FAQ", format: "PDF" },
            strategy: Deliverable { title: "Writing Strategy", format: "PDF" },
            refs: Deliverable { title: "Reference Full Text", format: "ZIP/PDF" },
            agent: Deliverable { title: "AI Agent Context", format: "Chat Log" },
        },
        preview_titles: PreviewTitles {
            paper: "Final Paper Sample",
            summary: "Executive Summary Sample",
            faq: "Topic FAQ & Analysis Sample",
            strategy: "Logic & Strategy Map Sample",
            refs: "Verified References Sample",
            all: "Sample Deliverables Overview",
        },
    },
    detector: DetectorText {
        hero_title: "Free AI Detector",
        hero_title_highlight: "for Essays",
        hero_subtitle: "Check whether your paper reads as AI-written before your instructor does.",
        identify_risks: "Identify AI risks",
        professional_solution: "Professional solution",
        upload_prompt: "Upload a file",
        upload_supported: "Supports .docx and .pdf",
        detect_button: "Detect AI",
        detecting: "Detecting...",
        remove_file: "Remove file",
        notes: ["📝 English text only", "🖼️ Images not analyzed", "📄 Max 10MB"],
        why: WhyEssayPass {
            badge: "Why EssayPass",
            heading: "Write it right the first time",
            general_risk: "General AI: high risk",
            essay_pass_safe: "EssayPass: safe",
            cta: "Try AI Essay Writer",
            features: [
                Feature {
                    icon: "check",
                    title: "Human-grade writing",
                    description: "Line-by-line academic reasoning instead of generic LLM output.",
                },
                Feature {
                    icon: "book",
                    title: "Verified sources",
                    description: "Every citation is matched to a real, retrievable reference.",
                },
                Feature {
                    icon: "format",
                    title: "Formatted for submission",
                    description: "Citation style, structure and layout handled for you.",
                },
            ],
        },
    },
    options: OptionTables {
        essay_types: [
            "Essay", "Research Paper", "Case Study", "Coursework", "Term Paper",
            "Dissertation", "Report", "Review", "Speech", "Presentation",
        ],
        academic_levels: [
            "High School", "Undergraduate (Years 1-2)", "Bachelor's", "Master's", "Doctoral",
        ],
        word_counts: [
            "300 words", "500 words", "1000 words", "1600 words", "2000 words", "3000 words",
            "5000+ words",
        ],
        languages: [
            "English(US)", "English(UK)", "Spanish", "French", "German", "Chinese (Simplified)",
            "Portuguese",
        ],
        citation_styles: ["APA 7th", "MLA", "Chicago", "Harvard", "IEEE", "Vancouver"],
    },
    not_found: "Page not found",
};
