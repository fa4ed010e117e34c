use std::fmt;
use std::fmt::{Display, Formatter};

// Screen is one state of the interactive desk. The desk starts at MainMenu and
// stops at Quit.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Screen {
    #[default]
    MainMenu,
    LoanItem,
    ReturnItem,
    SearchForPatron,
    RegisterPatron,
    AccessMakerspace,
    Quit,
}

impl Screen {
    pub const MENU: [Screen; 6] = [
        Screen::LoanItem,
        Screen::ReturnItem,
        Screen::SearchForPatron,
        Screen::RegisterPatron,
        Screen::AccessMakerspace,
        Screen::Quit,
    ];

    // main menu choices are numbered from 1 in MENU order
    pub fn from_menu_choice(choice: i64) -> Option<Screen> {
        usize::try_from(choice).ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|ndx| Screen::MENU.get(ndx).copied())
    }

    pub fn is_terminal(&self) -> bool {
        *self == Screen::Quit
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::MainMenu => "Main menu",
            Screen::LoanItem => "Loan an item",
            Screen::ReturnItem => "Return an item",
            Screen::SearchForPatron => "Search for a patron",
            Screen::RegisterPatron => "Register a new patron",
            Screen::AccessMakerspace => "Access the makerspace",
            Screen::Quit => "Quit",
        }
    }
}

impl Display for Screen {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Screen::MainMenu => write!(f, "MAIN MENU"),
            Screen::LoanItem => write!(f, "LOAN ITEM"),
            Screen::ReturnItem => write!(f, "RETURN ITEM"),
            Screen::SearchForPatron => write!(f, "SEARCH FOR PATRON"),
            Screen::RegisterPatron => write!(f, "REGISTER PATRON"),
            Screen::AccessMakerspace => write!(f, "ACCESS MAKERSPACE"),
            Screen::Quit => write!(f, "QUIT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::desk::screen::Screen;

    #[test]
    fn test_should_start_at_main_menu() {
        assert_eq!(Screen::MainMenu, Screen::default());
    }

    #[test]
    fn test_should_map_menu_choices() {
        assert_eq!(Some(Screen::LoanItem), Screen::from_menu_choice(1));
        assert_eq!(Some(Screen::ReturnItem), Screen::from_menu_choice(2));
        assert_eq!(Some(Screen::SearchForPatron), Screen::from_menu_choice(3));
        assert_eq!(Some(Screen::RegisterPatron), Screen::from_menu_choice(4));
        assert_eq!(Some(Screen::AccessMakerspace), Screen::from_menu_choice(5));
        assert_eq!(Some(Screen::Quit), Screen::from_menu_choice(6));
        assert_eq!(None, Screen::from_menu_choice(0));
        assert_eq!(None, Screen::from_menu_choice(7));
        assert_eq!(None, Screen::from_menu_choice(-1));
    }

    #[test]
    fn test_should_format_screens() {
        assert_eq!("MAIN MENU", Screen::MainMenu.to_string());
        assert_eq!("SEARCH FOR PATRON", Screen::SearchForPatron.to_string());
        assert_eq!("QUIT", Screen::Quit.to_string());
        assert!(Screen::Quit.is_terminal());
        assert!(!Screen::MainMenu.is_terminal());
    }
}
