use log::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent, Window};

/// Where keyboard focus currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusContext {
    Idle,
    TextEntry,
}

impl FocusContext {
    pub fn classify(tag_name: &str, content_editable: bool) -> Self {
        if content_editable {
            return FocusContext::TextEntry;
        }
        match tag_name.to_ascii_uppercase().as_str() {
            "INPUT" | "TEXTAREA" | "SELECT" => FocusContext::TextEntry,
            _ => FocusContext::Idle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
}

impl KeyPress {
    pub fn plain(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Self::default()
        }
    }

    pub fn from_event(e: &KeyboardEvent) -> Self {
        Self {
            key: e.key(),
            ctrl: e.ctrl_key(),
            meta: e.meta_key(),
            alt: e.alt_key(),
        }
    }

    pub fn is_escape(&self) -> bool {
        self.key == "Escape"
    }
}

/// Single-character page shortcut, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotkey(char);

impl Hotkey {
    pub fn new(key: char) -> Self {
        Self(key)
    }

    pub fn key(&self) -> char {
        self.0
    }

    pub fn matches(&self, press: &KeyPress, focus: FocusContext) -> bool {
        if focus == FocusContext::TextEntry || press.ctrl || press.meta || press.alt {
            return false;
        }
        let mut chars = press.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_lowercase().eq(self.0.to_lowercase()),
            _ => false,
        }
    }
}

/// Looks at `document.activeElement`.
pub fn focus_context() -> FocusContext {
    let active = window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element());

    match active {
        Some(el) => {
            let editable = el
                .dyn_ref::<web_sys::HtmlElement>()
                .map_or(false, |h| h.is_content_editable());
            FocusContext::classify(&el.tag_name(), editable)
        }
        None => FocusContext::Idle,
    }
}

/// A `keydown` listener on `window`, removed again when dropped.
pub struct WindowListener {
    window: Window,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl WindowListener {
    pub fn keydown(handler: impl FnMut(KeyboardEvent) + 'static) -> Option<Self> {
        let window = window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(KeyboardEvent)>);

        if let Err(e) = window
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
        {
            error!("Failed to register keydown listener: {:?}", e);
            return None;
        }
        debug!("keydown listener registered");
        Some(Self { window, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "keydown",
            self.callback.as_ref().unchecked_ref(),
        );
        debug!("keydown listener removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_text_entry_elements() {
        assert_eq!(FocusContext::classify("INPUT", false), FocusContext::TextEntry);
        assert_eq!(FocusContext::classify("textarea", false), FocusContext::TextEntry);
        assert_eq!(FocusContext::classify("SELECT", false), FocusContext::TextEntry);
        assert_eq!(FocusContext::classify("DIV", true), FocusContext::TextEntry);
        assert_eq!(FocusContext::classify("BODY", false), FocusContext::Idle);
        assert_eq!(FocusContext::classify("BUTTON", false), FocusContext::Idle);
    }

    #[test]
    fn matches_either_case() {
        let hotkey = Hotkey::new('b');
        assert!(hotkey.matches(&KeyPress::plain("b"), FocusContext::Idle));
        assert!(hotkey.matches(&KeyPress::plain("B"), FocusContext::Idle));
        assert!(!hotkey.matches(&KeyPress::plain("n"), FocusContext::Idle));
    }

    #[test]
    fn ignores_named_keys() {
        let hotkey = Hotkey::new('b');
        assert!(!hotkey.matches(&KeyPress::plain("Backspace"), FocusContext::Idle));
        assert!(!hotkey.matches(&KeyPress::plain(""), FocusContext::Idle));
    }

    #[test]
    fn never_fires_while_typing() {
        let hotkey = Hotkey::new('b');
        assert!(!hotkey.matches(&KeyPress::plain("b"), FocusContext::TextEntry));
        assert!(!hotkey.matches(&KeyPress::plain("B"), FocusContext::TextEntry));
    }

    #[test]
    fn ignores_modifier_chords() {
        let hotkey = Hotkey::new('b');
        let ctrl_b = KeyPress {
            ctrl: true,
            ..KeyPress::plain("b")
        };
        let cmd_b = KeyPress {
            meta: true,
            ..KeyPress::plain("b")
        };
        assert!(!hotkey.matches(&ctrl_b, FocusContext::Idle));
        assert!(!hotkey.matches(&cmd_b, FocusContext::Idle));
    }

    #[test]
    fn escape_detection() {
        assert!(KeyPress::plain("Escape").is_escape());
        assert!(!KeyPress::plain("Esc").is_escape());
    }
}
