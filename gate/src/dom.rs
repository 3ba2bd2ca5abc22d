//! DOM collaborators of the gate
//!
//! The controller only reads the password field and writes markup, text and
//! visibility. These traits are that surface; the browser implementations
//! live in `browser`, tests use in-memory doubles.
//!
//! Methods take `&self`: DOM handles are shared references into the page,
//! mutation goes through the browser.

use crate::error::Result;

/// The password input control.
pub trait PasswordInput {
    /// Current text of the field, exactly as typed.
    fn value(&self) -> String;

    /// Empty the field so the user can retry.
    fn clear(&self) -> Result<()>;
}

/// A region that can be shown or hidden.
pub trait Region {
    fn show(&self) -> Result<()>;
    fn hide(&self) -> Result<()>;
    fn is_visible(&self) -> bool;
}

/// The region that receives the protected fragment.
pub trait ContentRegion: Region {
    /// Replace the region's markup. The fragment is trusted verbatim.
    fn set_html(&self, html: &str) -> Result<()>;
}

/// Element that shows the failure message.
pub trait MessageDisplay {
    fn set_text(&self, text: &str) -> Result<()>;
}

/// The four elements a gate works on.
pub struct GateElements<I, G, C, M> {
    pub input: I,
    pub gate: G,
    pub content: C,
    pub error: M,
}

impl<I, G, C, M> GateElements<I, G, C, M>
where
    I: PasswordInput,
    G: Region,
    C: ContentRegion,
    M: MessageDisplay,
{
    pub fn new(input: I, gate: G, content: C, error: M) -> Self {
        Self {
            input,
            gate,
            content,
            error,
        }
    }

    /// True once the protected region is showing and the gate is not.
    pub fn is_unlocked(&self) -> bool {
        self.content.is_visible() && !self.gate.is_visible()
    }
}
