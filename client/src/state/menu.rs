//! Overlay menu open/close state.
//!
//! DESIGN
//! ======
//! The menu is in exactly one of four phases. `toggle` is the only way to
//! start a sequence and it refuses while one is running, so rapid clicks can
//! never overlap animations. `finish` is called from the overlay clip-path
//! completion callback and settles the running sequence.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Which sequence a toggle started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuMotion {
    Open,
    Close,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub phase: MenuPhase,
}

impl MenuState {
    /// Start the open or close sequence, or `None` while one is in flight.
    pub fn toggle(&mut self) -> Option<MenuMotion> {
        match self.phase {
            MenuPhase::Closed => {
                self.phase = MenuPhase::Opening;
                Some(MenuMotion::Open)
            }
            MenuPhase::Open => {
                self.phase = MenuPhase::Closing;
                Some(MenuMotion::Close)
            }
            MenuPhase::Opening | MenuPhase::Closing => None,
        }
    }

    /// Settle the running sequence. Returns the motion that completed.
    pub fn finish(&mut self) -> Option<MenuMotion> {
        match self.phase {
            MenuPhase::Opening => {
                self.phase = MenuPhase::Open;
                Some(MenuMotion::Open)
            }
            MenuPhase::Closing => {
                self.phase = MenuPhase::Closed;
                Some(MenuMotion::Close)
            }
            MenuPhase::Closed | MenuPhase::Open => None,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.phase == MenuPhase::Open
    }

    #[must_use]
    pub fn is_animating(self) -> bool {
        matches!(self.phase, MenuPhase::Opening | MenuPhase::Closing)
    }

    /// Hover previews only react on a fully open, idle menu.
    #[must_use]
    pub fn accepts_hover(self) -> bool {
        self.is_open() && !self.is_animating()
    }

    /// The toggle carries the `menu-open` class from the moment the open
    /// sequence lands until the close sequence finishes.
    #[must_use]
    pub fn marks_toggle_open(self) -> bool {
        matches!(self.phase, MenuPhase::Open | MenuPhase::Closing)
    }
}
