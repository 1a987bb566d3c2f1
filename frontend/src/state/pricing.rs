//! Order pricing: base package plus optional add-ons.
//!
//! Amounts are integer cents. Totals are never stored; [`AddOnSelection::quote`]
//! recomputes them from the current selection on every read.

use std::collections::BTreeSet;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::i18n::{text, Locale};

// =============================================================================
// Money
// =============================================================================

/// US dollar amount in cents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cents(pub u32);

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Cents>>(iter: I) -> Cents {
        iter.fold(Cents::default(), Add::add)
    }
}

/// Current price and the struck-through "was" price.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceTag {
    pub price: Cents,
    pub reference: Cents,
}

impl Add for PriceTag {
    type Output = PriceTag;

    fn add(self, rhs: PriceTag) -> PriceTag {
        PriceTag {
            price: self.price + rhs.price,
            reference: self.reference + rhs.reference,
        }
    }
}

impl PriceTag {
    pub fn savings(&self) -> Cents {
        Cents(self.reference.0.saturating_sub(self.price.0))
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The all-in-one package every order includes.
pub const BASE_PACKAGE: PriceTag = PriceTag {
    price: Cents(999),
    reference: Cents(4000),
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AddOnId {
    /// Turnitin similarity & AI report.
    SimilarityReport,
    PresentationSlides,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
    Available,
    /// Rendered, but cannot be selected.
    ComingSoon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddOn {
    pub id: AddOnId,
    pub price: PriceTag,
    pub availability: Availability,
}

impl AddOn {
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    pub fn title(&self, locale: Locale) -> &'static str {
        let order = &text(locale).order;
        match self.id {
            AddOnId::SimilarityReport => order.similarity_title,
            AddOnId::PresentationSlides => order.slides_title,
        }
    }
}

pub static ADD_ONS: [AddOn; 2] = [
    AddOn {
        id: AddOnId::SimilarityReport,
        price: PriceTag { price: Cents(499), reference: Cents(999) },
        availability: Availability::Available,
    },
    AddOn {
        id: AddOnId::PresentationSlides,
        price: PriceTag { price: Cents(999), reference: Cents(1999) },
        availability: Availability::ComingSoon,
    },
];

impl AddOnId {
    pub fn add_on(self) -> &'static AddOn {
        match self {
            AddOnId::SimilarityReport => &ADD_ONS[0],
            AddOnId::PresentationSlides => &ADD_ONS[1],
        }
    }
}

// =============================================================================
// Selection
// =============================================================================

/// What the pay action does in this build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayOutcome {
    /// Show the "payment coming soon" notice.
    ComingSoon,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddOnSelection {
    selected: BTreeSet<AddOnId>,
}

impl AddOnSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`.
    ///
    /// Unavailable add-ons are ignored; returns whether anything changed.
    pub fn toggle(&mut self, id: AddOnId) -> bool {
        if !id.add_on().is_available() {
            return false;
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        true
    }

    pub fn is_selected(&self, id: AddOnId) -> bool {
        self.selected.contains(&id)
    }

    /// Selected, available add-ons in catalog order.
    pub fn selected(&self) -> impl Iterator<Item = &'static AddOn> + '_ {
        ADD_ONS
            .iter()
            .filter(move |a| a.is_available() && self.selected.contains(&a.id))
    }

    /// Base package plus every selected add-on.
    pub fn quote(&self) -> PriceTag {
        self.selected().fold(BASE_PACKAGE, |total, a| total + a.price)
    }

    pub fn pay(&self) -> PayOutcome {
        log::info!("💳 Pay requested for {}", self.quote().price);
        PayOutcome::ComingSoon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cents_display() {
        assert_eq!(Cents(999).to_string(), "$9.99");
        assert_eq!(Cents(4000).to_string(), "$40.00");
        assert_eq!(Cents(5).to_string(), "$0.05");
        assert_eq!([Cents(1), Cents(2)].into_iter().sum::<Cents>(), Cents(3));
    }

    #[test]
    fn test_base_quote() {
        let selection = AddOnSelection::new();
        let quote = selection.quote();
        assert_eq!(quote.price.to_string(), "$9.99");
        assert_eq!(quote.reference.to_string(), "$40.00");
        assert_eq!(quote.savings(), Cents(3001));
    }

    #[test]
    fn test_similarity_report_adds_to_total() {
        let mut selection = AddOnSelection::new();
        assert!(selection.toggle(AddOnId::SimilarityReport));
        let quote = selection.quote();
        assert_eq!(quote.price.to_string(), "$14.98");
        assert_eq!(quote.reference.to_string(), "$49.99");
    }

    #[test]
    fn test_double_toggle_restores_selection() {
        let mut selection = AddOnSelection::new();
        let before = selection.clone();
        selection.toggle(AddOnId::SimilarityReport);
        selection.toggle(AddOnId::SimilarityReport);
        assert_eq!(selection, before);
    }

    #[test]
    fn test_unavailable_add_on_never_counts() {
        let mut selection = AddOnSelection::new();
        assert!(!selection.toggle(AddOnId::PresentationSlides));
        assert!(!selection.is_selected(AddOnId::PresentationSlides));
        assert_eq!(selection.quote(), BASE_PACKAGE);
    }

    #[test]
    fn test_quote_matches_sum_over_toggle_sequences() {
        let ids = [
            AddOnId::SimilarityReport,
            AddOnId::PresentationSlides,
            AddOnId::SimilarityReport,
            AddOnId::PresentationSlides,
            AddOnId::SimilarityReport,
        ];
        let mut selection = AddOnSelection::new();
        for id in ids {
            selection.toggle(id);
            let expected: Cents = BASE_PACKAGE.price
                + ADD_ONS
                    .iter()
                    .filter(|a| a.is_available() && selection.is_selected(a.id))
                    .map(|a| a.price.price)
                    .sum::<Cents>();
            assert_eq!(selection.quote().price, expected);
        }
    }

    #[test]
    fn test_catalog_lookup_matches_id() {
        for id in [AddOnId::SimilarityReport, AddOnId::PresentationSlides] {
            assert_eq!(id.add_on().id, id);
        }
    }

    #[test]
    fn test_pay_is_placeholder() {
        assert_eq!(AddOnSelection::new().pay(), PayOutcome::ComingSoon);
    }
}
