//! Display styles for room cards and filter toggles.
//!
//! Each style state maps to a fixed descriptor; rendering only reads the
//! descriptor.

use crate::domain::Visibility;

/// Inputs that change how a room card or filter toggle looks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleState {
    Visibility(Visibility),
    Chat(bool),
    Occupancy { full: bool },
    /// Tri-state filter toggle: `Some(true)` on, `Some(false)` off, `None` any
    Toggle(Option<bool>),
}

/// Concrete look of one badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDescriptor {
    pub glyph: &'static str,
    pub label: &'static str,
}

pub fn style_for(state: StyleState) -> StyleDescriptor {
    let (glyph, label) = match state {
        StyleState::Visibility(Visibility::Public) => ("🔓", "public"),
        StyleState::Visibility(Visibility::Private) => ("🔒", "private"),
        StyleState::Chat(true) => ("💬", "chat"),
        StyleState::Chat(false) => ("🔇", "no chat"),
        StyleState::Occupancy { full: true } => ("⛔", "full"),
        StyleState::Occupancy { full: false } => ("👤", "open"),
        StyleState::Toggle(Some(true)) => ("[✔]", "on"),
        StyleState::Toggle(Some(false)) => ("[✘]", "off"),
        StyleState::Toggle(None) => ("[ ]", "any"),
    };
    StyleDescriptor { glyph, label }
}
