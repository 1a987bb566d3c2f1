//! Detector upload box state.
//!
//! Single-file selection with an extension/size allowlist, drag tracking,
//! and a simulated detection run. Each detection run is identified by a
//! [`DetectionTicket`]; clearing or replacing the file invalidates every
//! outstanding ticket, so a late timer cannot re-enable the UI.

use std::fmt;

use crate::config::{ACCEPTED_EXTENSIONS, MAX_FILE_SIZE};
use crate::types::{AppError, FileDescriptor};

/// Where a candidate file came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionSource {
    /// Dropped onto the upload box.
    Drop,
    /// Returned by the OS file dialog.
    Picker,
}

/// Why a candidate file was not selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileRejection {
    UnsupportedExtension(String),
    TooLarge { size: u64, max: u64 },
}

impl fmt::Display for FileRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRejection::UnsupportedExtension(name) => {
                write!(f, "unsupported file type: {}", name)
            }
            FileRejection::TooLarge { size, max } => {
                write!(f, "file too large: {} bytes (max {})", size, max)
            }
        }
    }
}

impl From<FileRejection> for AppError {
    fn from(rejection: FileRejection) -> Self {
        AppError::Validation(rejection.to_string())
    }
}

/// Checks a candidate against the accepted extensions and size ceiling.
///
/// Extensions compare case-insensitively.
pub fn validate_file(file: &FileDescriptor) -> Result<(), FileRejection> {
    let name = file.name.to_ascii_lowercase();
    if !ACCEPTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
        return Err(FileRejection::UnsupportedExtension(file.name.clone()));
    }
    if file.size > MAX_FILE_SIZE {
        return Err(FileRejection::TooLarge { size: file.size, max: MAX_FILE_SIZE });
    }
    Ok(())
}

/// Identifies one detection run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetectionTicket(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadSession {
    selected: Option<FileDescriptor>,
    drag_active: bool,
    detecting: bool,
    /// Bumped whenever the selected file changes.
    generation: u64,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_file(&self) -> Option<&FileDescriptor> {
        self.selected.as_ref()
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn is_detecting(&self) -> bool {
        self.detecting
    }

    pub fn drag_enter(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    /// Handles a drop: always ends the drag, then selects the first file if any.
    pub fn drop_file(&mut self, candidate: Option<FileDescriptor>) -> Result<(), FileRejection> {
        self.drag_active = false;
        match candidate {
            Some(file) => self.select_file(file, SelectionSource::Drop),
            None => Ok(()),
        }
    }

    /// Selects `candidate` if it passes [`validate_file`].
    ///
    /// A rejected candidate leaves the current selection untouched. Both
    /// sources are validated: the picker's `accept` filter can be bypassed.
    pub fn select_file(
        &mut self,
        candidate: FileDescriptor,
        source: SelectionSource,
    ) -> Result<(), FileRejection> {
        if let Err(rejection) = validate_file(&candidate) {
            log::debug!("Ignoring {:?} file: {}", source, rejection);
            return Err(rejection);
        }
        self.invalidate();
        self.selected = Some(candidate);
        Ok(())
    }

    /// Unsets the file and cancels any running detection.
    pub fn clear_file(&mut self) {
        self.invalidate();
        self.selected = None;
    }

    /// Starts a detection run.
    ///
    /// Returns `None` (no-op) without a file or while a run is in progress.
    pub fn start_detection(&mut self) -> Option<DetectionTicket> {
        if self.selected.is_none() || self.detecting {
            return None;
        }
        self.detecting = true;
        Some(DetectionTicket(self.generation))
    }

    /// Completes the run identified by `ticket`.
    ///
    /// Returns `false` and changes nothing if the ticket is stale.
    pub fn complete_detection(&mut self, ticket: DetectionTicket) -> bool {
        if ticket.0 != self.generation || !self.detecting {
            return false;
        }
        self.detecting = false;
        true
    }

    fn invalidate(&mut self) {
        self.generation += 1;
        self.detecting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> FileDescriptor {
        FileDescriptor::new(name, 2048)
    }

    #[test]
    fn test_rejection_into_app_error() {
        let err: AppError = FileRejection::UnsupportedExtension("a.txt".into()).into();
        assert_eq!(err.to_string(), "Validation error: unsupported file type: a.txt");
    }

    #[test]
    fn test_drop_filters_extensions() {
        let mut session = UploadSession::new();
        assert!(session.drop_file(Some(file("report.txt"))).is_err());
        assert!(session.selected_file().is_none());

        assert!(session.drop_file(Some(file("report.docx"))).is_ok());
        assert_eq!(session.selected_file().map(|f| f.name.as_str()), Some("report.docx"));

        assert!(session.drop_file(Some(file("report.pdf"))).is_ok());
        assert_eq!(session.selected_file().map(|f| f.name.as_str()), Some("report.pdf"));
    }

    #[test]
    fn test_rejected_drop_keeps_previous_file() {
        let mut session = UploadSession::new();
        session.drop_file(Some(file("thesis.pdf"))).unwrap();
        assert!(session.drop_file(Some(file("photo.png"))).is_err());
        assert_eq!(session.selected_file().map(|f| f.name.as_str()), Some("thesis.pdf"));
    }

    #[test]
    fn test_picker_is_validated_too() {
        let mut session = UploadSession::new();
        let result = session.select_file(file("notes.md"), SelectionSource::Picker);
        assert_eq!(result, Err(FileRejection::UnsupportedExtension("notes.md".into())));
        assert!(session.select_file(file("NOTES.PDF"), SelectionSource::Picker).is_ok());
    }

    #[test]
    fn test_size_ceiling() {
        let mut session = UploadSession::new();
        let big = FileDescriptor::new("big.pdf", MAX_FILE_SIZE + 1);
        assert!(matches!(
            session.select_file(big, SelectionSource::Drop),
            Err(FileRejection::TooLarge { .. })
        ));
        let exact = FileDescriptor::new("exact.pdf", MAX_FILE_SIZE);
        assert!(session.select_file(exact, SelectionSource::Drop).is_ok());
    }

    #[test]
    fn test_drop_resets_drag_state() {
        let mut session = UploadSession::new();
        session.drag_enter();
        assert!(session.drag_active());
        let _ = session.drop_file(Some(file("x.exe")));
        assert!(!session.drag_active());

        session.drag_enter();
        session.drag_leave();
        assert!(!session.drag_active());
    }

    #[test]
    fn test_detection_requires_file() {
        let mut session = UploadSession::new();
        assert_eq!(session.start_detection(), None);
        assert!(!session.is_detecting());
    }

    #[test]
    fn test_detection_completes() {
        let mut session = UploadSession::new();
        session.drop_file(Some(file("essay.docx"))).unwrap();
        let ticket = session.start_detection().unwrap();
        assert!(session.is_detecting());
        assert_eq!(session.start_detection(), None);

        assert!(session.complete_detection(ticket));
        assert!(!session.is_detecting());
        assert!(session.selected_file().is_some());
    }

    #[test]
    fn test_clear_file_suppresses_stale_completion() {
        let mut session = UploadSession::new();
        session.drop_file(Some(file("essay.docx"))).unwrap();
        let ticket = session.start_detection().unwrap();

        session.clear_file();
        assert!(!session.is_detecting());

        assert!(!session.complete_detection(ticket));
        assert!(!session.is_detecting());
        assert!(session.selected_file().is_none());
    }

    #[test]
    fn test_stale_ticket_ignored_after_reselect() {
        let mut session = UploadSession::new();
        session.drop_file(Some(file("one.pdf"))).unwrap();
        let old = session.start_detection().unwrap();

        session.drop_file(Some(file("two.pdf"))).unwrap();
        let new = session.start_detection().unwrap();

        assert!(!session.complete_detection(old));
        assert!(session.is_detecting());
        assert!(session.complete_detection(new));
    }

    #[test]
    fn test_rejected_selection_mid_run_keeps_ticket() {
        let mut session = UploadSession::new();
        session.drop_file(Some(file("essay.pdf"))).unwrap();
        let ticket = session.start_detection().unwrap();

        assert!(session.drop_file(Some(file("photo.png"))).is_err());
        assert!(session
            .select_file(file("notes.txt"), SelectionSource::Picker)
            .is_err());
        assert!(session.drop_file(None).is_ok());
        assert!(session.is_detecting());
        assert_eq!(session.selected_file(), Some(&file("essay.pdf")));

        assert!(session.complete_detection(ticket));
        assert!(!session.is_detecting());
    }
}
