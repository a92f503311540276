//! Platform capability ports.
//!
//! The domain layer never talks to a clipboard or share surface directly;
//! it is handed these narrow traits and reports what happened. Failures
//! here are outcomes, not errors: the host shows a notice and moves on.

/// Outcome of a clipboard write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Unavailable,
}

/// Outcome of handing text to a native share surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Cancelled,
    Unavailable,
}

/// Clipboard capability injected into the domain layer.
pub trait Clipboard: Send + Sync {
    fn copy_text(&self, text: &str) -> CopyOutcome;
}

/// Share-sheet capability injected into the domain layer.
pub trait ShareSheet: Send + Sync {
    /// Hand a headline and link to the platform share surface.
    fn share(&self, text: &str, url: &str) -> ShareOutcome;
}

/// Terminal stand-in for a clipboard: prints the text so the user can copy
/// it themselves.
pub struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
    fn copy_text(&self, text: &str) -> CopyOutcome {
        println!("{}", text);
        CopyOutcome::Copied
    }
}

/// The terminal has no native share sheet. Reporting unavailable routes
/// callers down their clipboard fallback.
pub struct NoShareSheet;

impl ShareSheet for NoShareSheet {
    fn share(&self, _text: &str, _url: &str) -> ShareOutcome {
        ShareOutcome::Unavailable
    }
}
