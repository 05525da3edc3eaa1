//! Header menus
//!
//! Two trigger/panel pairs live in the site header: the hamburger button
//! with the slide-in side menu, and the avatar button with the user-account
//! popover. The side menu is the primary one; opening it closes the user
//! menu, but opening the user menu leaves the side menu alone.
//!
//! Either pair may be missing from a page, in which case every operation on
//! it is a no-op.

/// Which header menu an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuKind {
    /// Slide-in navigation panel behind the hamburger button
    Side,
    /// Account popover behind the avatar button
    User,
}

impl MenuKind {
    /// Opening a primary menu force-closes the secondary one.
    pub fn is_primary(&self) -> bool {
        matches!(self, MenuKind::Side)
    }

    /// Element id of the panel
    pub fn panel_id(&self) -> &'static str {
        match self {
            MenuKind::Side => "side-menu",
            MenuKind::User => "user-menu",
        }
    }
}

/// Expanded/collapsed state of one menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    expanded: bool,
}

impl MenuState {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Value of the panel's `hidden` attribute
    pub fn panel_hidden(&self) -> bool {
        !self.expanded
    }

    /// Value for the trigger's `aria-expanded` attribute
    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }

    /// Value for the panel's `aria-hidden` attribute
    pub fn aria_hidden(&self) -> &'static str {
        if self.expanded {
            "false"
        } else {
            "true"
        }
    }
}

/// Where a click landed, relative to the header menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Trigger(MenuKind),
    Panel(MenuKind),
    /// A page control that keeps its click to itself, like the share
    /// button. No menu sees it as outside.
    Contained,
    Elsewhere,
}

impl ClickTarget {
    /// True when the click hit the menu's trigger or its panel, or never
    /// left a contained control
    pub fn is_within(&self, kind: MenuKind) -> bool {
        match self {
            ClickTarget::Trigger(k) | ClickTarget::Panel(k) => *k == kind,
            ClickTarget::Contained => true,
            ClickTarget::Elsewhere => false,
        }
    }
}

/// Owns the state of both header menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuController {
    side: Option<MenuState>,
    user: Option<MenuState>,
}

impl Default for MenuController {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuController {
    /// Both menus bound, both collapsed.
    pub fn new() -> Self {
        Self::with_bindings(true, true)
    }

    /// Bind only the menus whose trigger and panel are present on the page.
    pub fn with_bindings(side: bool, user: bool) -> Self {
        Self {
            side: side.then(MenuState::default),
            user: user.then(MenuState::default),
        }
    }

    pub fn is_bound(&self, kind: MenuKind) -> bool {
        self.slot(kind).is_some()
    }

    /// State of a bound menu
    pub fn state(&self, kind: MenuKind) -> Option<MenuState> {
        self.slot(kind)
    }

    pub fn is_expanded(&self, kind: MenuKind) -> bool {
        self.slot(kind).is_some_and(|s| s.expanded)
    }

    /// Flip a menu open or closed.
    pub fn toggle(&mut self, kind: MenuKind) {
        let Some(state) = self.slot_mut(kind) else {
            return;
        };

        let was_expanded = state.expanded;
        state.expanded = !was_expanded;
        tracing::debug!(menu = ?kind, expanded = !was_expanded, "Toggled menu");

        if kind.is_primary() && !was_expanded && self.is_expanded(MenuKind::User) {
            self.toggle(MenuKind::User);
        }
    }

    /// Close every open menu whose trigger and panel both lie outside `target`.
    pub fn close_on_outside_click(&mut self, target: ClickTarget) {
        for kind in [MenuKind::User, MenuKind::Side] {
            if self.is_expanded(kind) && !target.is_within(kind) {
                self.toggle(kind);
            }
        }
    }

    fn slot(&self, kind: MenuKind) -> Option<MenuState> {
        match kind {
            MenuKind::Side => self.side,
            MenuKind::User => self.user,
        }
    }

    fn slot_mut(&mut self, kind: MenuKind) -> Option<&mut MenuState> {
        match kind {
            MenuKind::Side => self.side.as_mut(),
            MenuKind::User => self.user.as_mut(),
        }
    }
}

/// A single button-driven popover, e.g. the share menu on the game page.
///
/// Unlike the header menus it has no aria bookkeeping and no partner to
/// close.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Popover {
    open: bool,
}

impl Popover {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close unless the click landed inside the popover or on its button.
    pub fn close_on_outside_click(&mut self, inside: bool) {
        if self.open && !inside {
            self.open = false;
        }
    }
}
