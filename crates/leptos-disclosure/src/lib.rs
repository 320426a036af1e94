//! Leptos Disclosure Utilities
//!
//! Two-state Open/Closed visibility toggles for Leptos: menus, sidebars,
//! password reveal buttons. The state machine has no terminal state; a toggle
//! always flips, and the initial state is chosen by the caller.

use leptos::prelude::*;

/// Visibility of a disclosable element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    Open,
    #[default]
    Closed,
}

impl Visibility {
    pub fn from_open(open: bool) -> Self {
        if open {
            Visibility::Open
        } else {
            Visibility::Closed
        }
    }

    pub fn is_open(self) -> bool {
        self == Visibility::Open
    }

    /// The state a toggle action moves to
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Open => Visibility::Closed,
            Visibility::Closed => Visibility::Open,
        }
    }
}

/// Disclosure state signals
#[derive(Clone, Copy)]
pub struct DisclosureSignals {
    pub state_read: ReadSignal<Visibility>,
    pub state_write: WriteSignal<Visibility>,
    /// Label used in debug logs
    name: &'static str,
}

pub fn create_disclosure(name: &'static str, initial: Visibility) -> DisclosureSignals {
    let (state_read, state_write) = signal(initial);
    DisclosureSignals {
        state_read,
        state_write,
        name,
    }
}

impl DisclosureSignals {
    /// Tracked read, for use inside views and effects
    pub fn is_open(&self) -> bool {
        self.state_read.get().is_open()
    }

    pub fn is_open_untracked(&self) -> bool {
        self.state_read.get_untracked().is_open()
    }

    pub fn toggle(&self) {
        self.state_write.update(|v| *v = v.toggled());
        log::debug!(
            "[{}] toggled -> {:?}",
            self.name,
            self.state_read.get_untracked()
        );
    }

    pub fn set_open(&self, open: bool) {
        self.state_write.set(Visibility::from_open(open));
    }

    pub fn open(&self) {
        self.set_open(true);
    }

    pub fn close(&self) {
        self.set_open(false);
    }
}

/// Click handler that flips the disclosure
pub fn make_on_toggle(disclosure: DisclosureSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| disclosure.toggle()
}

/// Click handler that closes the disclosure (e.g. following a link in an overlay)
pub fn make_on_close(disclosure: DisclosureSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| disclosure.close()
}

/// Reactive class chooser: `open_class` while open, `closed_class` otherwise
pub fn make_class(
    disclosure: DisclosureSignals,
    open_class: &'static str,
    closed_class: &'static str,
) -> impl Fn() -> &'static str + Copy + 'static {
    move || {
        if disclosure.is_open() {
            open_class
        } else {
            closed_class
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_flips() {
        assert_eq!(Visibility::Open.toggled(), Visibility::Closed);
        assert_eq!(Visibility::Closed.toggled(), Visibility::Open);
        assert_eq!(Visibility::default(), Visibility::Closed);
    }

    #[test]
    fn test_even_toggles_return_to_initial() {
        for initial in [Visibility::Open, Visibility::Closed] {
            let mut state = initial;
            for n in 1..=6 {
                state = state.toggled();
                assert_eq!(state == initial, n % 2 == 0);
            }
        }
    }

    #[test]
    fn test_disclosure_signals() {
        let owner = Owner::new();
        owner.with(|| {
            let menu = create_disclosure("menu", Visibility::Closed);
            assert!(!menu.is_open_untracked());

            menu.toggle();
            assert!(menu.is_open_untracked());
            menu.toggle();
            assert!(!menu.is_open_untracked());

            menu.open();
            menu.open();
            assert!(menu.is_open_untracked());
            menu.close();
            assert!(!menu.is_open_untracked());
        });
    }

    #[test]
    fn test_disclosures_are_independent() {
        let owner = Owner::new();
        owner.with(|| {
            let password = create_disclosure("password", Visibility::Closed);
            let confirm = create_disclosure("confirm", Visibility::Closed);

            password.toggle();
            assert!(password.is_open_untracked());
            assert!(!confirm.is_open_untracked());

            confirm.toggle();
            password.toggle();
            assert!(!password.is_open_untracked());
            assert!(confirm.is_open_untracked());
        });
    }
}
