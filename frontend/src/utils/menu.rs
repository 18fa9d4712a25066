use std::rc::Rc;
use yew::Reducible;

pub enum MenuAction {
    /// Hamburger button.
    Toggle,
    /// A nav link was followed.
    SelectLink,
    /// A click landed outside the navbar.
    ClickAway,
}

/// Open/closed state of the mobile nav menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::SelectLink | MenuAction::ClickAway => false,
        };
        if open == self.open {
            return self;
        }
        log::debug!("Mobile menu {}", if open { "opened" } else { "closed" });
        Rc::new(Self { open })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed() -> Rc<MenuState> {
        Rc::new(MenuState::default())
    }

    #[test]
    fn starts_closed() {
        assert!(!closed().is_open());
    }

    #[test]
    fn toggle_flips() {
        let state = closed().reduce(MenuAction::Toggle);
        assert!(state.is_open());
        assert!(!state.reduce(MenuAction::Toggle).is_open());
    }

    #[test]
    fn following_a_link_closes() {
        let state = closed().reduce(MenuAction::Toggle).reduce(MenuAction::SelectLink);
        assert!(!state.is_open());
    }

    #[test]
    fn outside_click_closes() {
        let state = closed().reduce(MenuAction::Toggle).reduce(MenuAction::ClickAway);
        assert!(!state.is_open());
    }

    #[test]
    fn closing_a_closed_menu_keeps_the_same_state() {
        let state = closed();
        let next = Rc::clone(&state).reduce(MenuAction::ClickAway);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
