//! Key-trigger predicates shared by the builtin adapters.
//!
//! A submit gesture must never fire for modified Enter (Shift, Ctrl, Alt
//! or Meta) or while an IME composition is in progress; all of those are
//! intra-edit keystrokes.

use promptstash_core_types::KeyEvent;

/// Bare Enter with no modifiers outside IME composition.
pub fn plain_enter(event: &KeyEvent) -> bool {
    event.is_plain_enter()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter() -> KeyEvent {
        KeyEvent::of("Enter")
    }

    #[test]
    fn plain_enter_fires_only_without_modifiers() {
        assert!(plain_enter(&enter()));

        let mut shifted = enter();
        shifted.shift = true;
        assert!(!plain_enter(&shifted));

        let mut ctrl = enter();
        ctrl.ctrl = true;
        assert!(!plain_enter(&ctrl));

        let mut meta = enter();
        meta.meta = true;
        assert!(!plain_enter(&meta));
    }

    #[test]
    fn composition_never_triggers() {
        let mut composing = enter();
        composing.is_composing = true;
        assert!(!plain_enter(&composing));
    }

    #[test]
    fn other_keys_never_trigger() {
        assert!(!plain_enter(&KeyEvent::of("Escape")));
        assert!(!plain_enter(&KeyEvent::of("a")));
    }
}
