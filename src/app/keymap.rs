//! Key bindings: map key presses to semantic actions.
//!
//! Text inputs consume printable characters before the keymap is consulted,
//! so plain-letter bindings only fire while the list or the submit button
//! has focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Semantic keyboard actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Move focus to the next widget.
    NextFocus,
    /// Move focus to the previous widget.
    PrevFocus,
    /// Submit the form (from a form field or the submit button).
    Activate,
    /// Re-read the users list.
    Refresh,
    /// Show the keybindings overlay.
    OpenHelp,
    /// Close the open overlay.
    Close,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
}

impl KeyAction {
    pub fn describe(self) -> &'static str {
        match self {
            KeyAction::Quit => "Quit",
            KeyAction::NextFocus => "Next field",
            KeyAction::PrevFocus => "Previous field",
            KeyAction::Activate => "Create user",
            KeyAction::Refresh => "Reload users",
            KeyAction::OpenHelp => "Help",
            KeyAction::Close => "Close overlay",
            KeyAction::MoveUp => "Move up",
            KeyAction::MoveDown => "Move down",
            KeyAction::PageUp => "Page up",
            KeyAction::PageDown => "Page down",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Keymap {
    bindings: HashMap<(KeyModifiers, KeyCode), KeyAction>,
}

impl Keymap {
    pub fn new_defaults() -> Self {
        use KeyCode::*;
        use KeyModifiers as M;
        let mut bindings = HashMap::new();
        bindings.insert((M::NONE, Char('q')), KeyAction::Quit);
        bindings.insert((M::CONTROL, Char('c')), KeyAction::Quit);
        bindings.insert((M::NONE, Tab), KeyAction::NextFocus);
        // Terminals disagree on how Shift+Tab is reported.
        bindings.insert((M::NONE, BackTab), KeyAction::PrevFocus);
        bindings.insert((M::SHIFT, BackTab), KeyAction::PrevFocus);
        bindings.insert((M::SHIFT, Tab), KeyAction::PrevFocus);
        bindings.insert((M::NONE, Enter), KeyAction::Activate);
        bindings.insert((M::NONE, Char('r')), KeyAction::Refresh);
        bindings.insert((M::NONE, Char('?')), KeyAction::OpenHelp);
        bindings.insert((M::SHIFT, Char('?')), KeyAction::OpenHelp);
        bindings.insert((M::NONE, Esc), KeyAction::Close);

        bindings.insert((M::NONE, Up), KeyAction::MoveUp);
        bindings.insert((M::NONE, Down), KeyAction::MoveDown);
        bindings.insert((M::NONE, Char('k')), KeyAction::MoveUp);
        bindings.insert((M::NONE, Char('j')), KeyAction::MoveDown);
        bindings.insert((M::NONE, PageUp), KeyAction::PageUp);
        bindings.insert((M::NONE, PageDown), KeyAction::PageDown);

        Self { bindings }
    }

    pub fn resolve(&self, key: &KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&(key.modifiers, key.code)).copied()
    }

    /// All bindings, sorted by action then key label.
    pub fn all_bindings(&self) -> Vec<(KeyAction, String)> {
        let mut out: Vec<(KeyAction, String)> = self
            .bindings
            .iter()
            .map(|((mods, code), action)| (*action, Self::format_key(*mods, *code)))
            .collect();
        out.sort();
        out.dedup();
        out
    }

    /// Human-readable key label such as `Ctrl+c` or `Shift+Tab`.
    pub fn format_key(mods: KeyModifiers, code: KeyCode) -> String {
        use KeyCode::*;
        let base = match code {
            Enter => "Enter".to_string(),
            Esc => "Esc".to_string(),
            Tab if mods.contains(KeyModifiers::SHIFT) => return "Shift+Tab".to_string(),
            BackTab => return "Shift+Tab".to_string(),
            Tab => "Tab".to_string(),
            Up => "Up".to_string(),
            Down => "Down".to_string(),
            PageUp => "PageUp".to_string(),
            PageDown => "PageDown".to_string(),
            Char(c) => c.to_string(),
            other => format!("{other:?}"),
        };
        if mods.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{base}")
        } else {
            base
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new_defaults()
    }
}
