//! One-shot hand-off of a submitted request between pages.
//!
//! The composer writes one JSON value into a single slot at submit time and
//! the order page reads it once at mount. The reader never fails: absent or
//! unreadable data yields [`EssayRequest::sample`].

use std::cell::RefCell;

use crate::state::essay::EssayRequest;
use crate::types::AppResult;

/// A single optional string value.
pub trait HandoffSlot {
    fn read(&self) -> AppResult<Option<String>>;
    fn write(&self, value: &str) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

/// In-memory slot, used for same-page flows and tests.
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: RefCell<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HandoffSlot for MemorySlot {
    fn read(&self) -> AppResult<Option<String>> {
        Ok(self.value.borrow().clone())
    }

    fn write(&self, value: &str) -> AppResult<()> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        self.value.borrow_mut().take();
        Ok(())
    }
}

/// Serializes `snapshot` into `slot`, replacing any previous value.
pub fn handoff(slot: &impl HandoffSlot, snapshot: &EssayRequest) -> AppResult<()> {
    let json = serde_json::to_string(snapshot)?;
    slot.write(&json)?;
    log::debug!("📦 Handed off request ({} bytes)", json.len());
    Ok(())
}

/// Reads the handed-off request, falling back to the sample order.
pub fn retrieve(slot: &impl HandoffSlot) -> EssayRequest {
    match slot.read() {
        Ok(Some(json)) => match serde_json::from_str(&json) {
            Ok(request) => request,
            Err(e) => {
                log::warn!("⚠️ Malformed hand-off data, using sample order: {}", e);
                EssayRequest::sample()
            }
        },
        Ok(None) => {
            log::info!("No hand-off data, using sample order");
            EssayRequest::sample()
        }
        Err(e) => {
            log::warn!("⚠️ Hand-off slot unreadable, using sample order: {}", e);
            EssayRequest::sample()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::essay::{EssayDraft, EssayType};
    use crate::types::AppError;

    struct BrokenSlot;

    impl HandoffSlot for BrokenSlot {
        fn read(&self) -> AppResult<Option<String>> {
            Err(AppError::Storage("denied".into()))
        }

        fn write(&self, _value: &str) -> AppResult<()> {
            Err(AppError::Storage("quota".into()))
        }

        fn clear(&self) -> AppResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_retrieve_without_handoff_returns_sample() {
        let slot = MemorySlot::new();
        assert_eq!(retrieve(&slot), EssayRequest::sample());
    }

    #[test]
    fn test_handoff_then_retrieve() {
        let slot = MemorySlot::new();
        let mut draft = EssayDraft::seeded("Urban heat islands");
        draft.set_type(EssayType::CaseStudy);

        handoff(&slot, &draft.snapshot()).unwrap();
        let received = retrieve(&slot);

        assert_eq!(received.topic, "Urban heat islands");
        assert_eq!(received.essay_type, EssayType::CaseStudy);
    }

    #[test]
    fn test_corrupt_data_falls_back() {
        let slot = MemorySlot::new();
        slot.write("{not json").unwrap();
        assert_eq!(retrieve(&slot), EssayRequest::sample());

        slot.write(r#"{"type":"poem"}"#).unwrap();
        assert_eq!(retrieve(&slot), EssayRequest::sample());
    }

    #[test]
    fn test_unreadable_slot_falls_back() {
        assert_eq!(retrieve(&BrokenSlot), EssayRequest::sample());
        assert!(handoff(&BrokenSlot, &EssayRequest::default()).is_err());
    }

    #[test]
    fn test_last_writer_wins_and_clear() {
        let slot = MemorySlot::new();
        handoff(&slot, &EssayDraft::seeded("first").snapshot()).unwrap();
        handoff(&slot, &EssayDraft::seeded("second").snapshot()).unwrap();
        assert_eq!(retrieve(&slot).topic, "second");

        slot.clear().unwrap();
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let slot = MemorySlot::new();
        slot.write(
            r#"{"type":"essay","academicLevel":"masters","wordCount":"500",
                "language":"german","citationStyle":"mla"}"#,
        )
        .unwrap();
        let request = retrieve(&slot);
        assert_eq!(request.topic, "");
        assert!(request.reference_files.is_empty());
        assert!(!request.include_formulas);
    }
}
