use chrono::{Local, NaiveDate};
use tracing::{debug, info};
use crate::core::library::LibraryResult;
use crate::desk::screen::Screen;
use crate::input::console::Console;
use crate::input::{read_bool, read_integer, read_integer_range, read_string};
use crate::loans::domain::service::{process_loan, process_return};
use crate::rules::check_makerspace;
use crate::search::{find_patron_by_age, find_patron_by_name, position_by_id, position_of_patron};
use crate::patrons::dto::Patron;
use crate::store::DataStore;
use crate::utils::date::format_date;

// Desk runs one screen at a time. Every screen ends by choosing exactly one next screen;
// lookup misses and refusals go back to the main menu.
pub struct Desk<C: Console> {
    store: DataStore,
    console: C,
    current_screen: Screen,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl<C: Console> Desk<C> {
    pub fn new(store: DataStore, console: C) -> Self {
        Self {
            store,
            console,
            current_screen: Screen::MainMenu,
            today: local_today,
        }
    }

    pub fn with_screen(mut self, screen: Screen) -> Self {
        self.current_screen = screen;
        self
    }

    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_store(self) -> DataStore {
        self.store
    }

    pub fn run(&mut self) -> LibraryResult<()> {
        while !self.current_screen.is_terminal() {
            self.run_current_screen()?;
        }
        Ok(())
    }

    pub fn run_current_screen(&mut self) -> LibraryResult<()> {
        let next = match self.current_screen {
            Screen::MainMenu => self.main_menu()?,
            Screen::LoanItem => self.loan_item()?,
            Screen::ReturnItem => self.return_item()?,
            Screen::SearchForPatron => self.search_for_patron()?,
            Screen::RegisterPatron => self.register_patron()?,
            Screen::AccessMakerspace => self.access_makerspace()?,
            Screen::Quit => Screen::Quit,
        };
        debug!("screen {} -> {}", self.current_screen, next);
        self.current_screen = next;
        Ok(())
    }

    fn heading(&mut self, screen: Screen) {
        self.console.write_line("");
        self.console.write_line(format!("== {} ==", screen.title()).as_str());
    }

    fn main_menu(&mut self) -> LibraryResult<Screen> {
        self.heading(Screen::MainMenu);
        for (ndx, screen) in Screen::MENU.iter().enumerate() {
            self.console.write_line(format!("{}. {}", ndx + 1, screen.title()).as_str());
        }
        let max_choice = Screen::MENU.len() as i64;
        let choice = read_integer_range(&mut self.console, "Enter your choice: ", 1, max_choice)?;
        Ok(Screen::from_menu_choice(choice).unwrap_or(Screen::MainMenu))
    }

    // asks for name then age and returns the index of the matching patron
    fn prompt_patron(&mut self) -> LibraryResult<Option<usize>> {
        let name = read_string(&mut self.console, "Enter the patron's name: ")?;
        let age = read_integer(&mut self.console, "Enter the patron's age: ")?;
        let found = position_of_patron(name.as_str(), age, &self.store.patrons);
        if found.is_none() {
            self.console.write_line(format!("No patron named {} aged {} was found.", name, age).as_str());
        }
        Ok(found)
    }

    fn loan_item(&mut self) -> LibraryResult<Screen> {
        self.heading(Screen::LoanItem);
        let text = read_string(&mut self.console, "Enter the item id: ")?;
        let item_id = match text.parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                self.console.write_line(format!("{:?} is not an item id.", text).as_str());
                return Ok(Screen::MainMenu);
            }
        };
        let item_ndx = match position_by_id(item_id, &self.store.catalogue) {
            Some(ndx) => ndx,
            None => {
                self.console.write_line(format!("No item with id {} is in the catalogue.", item_id).as_str());
                return Ok(Screen::MainMenu);
            }
        };
        let details = self.store.catalogue[item_ndx].to_string();
        self.console.write_line(details.as_str());
        if !read_bool(&mut self.console, "Is this the item? (y/n): ")? {
            return Ok(Screen::MainMenu);
        }
        let patron_ndx = match self.prompt_patron()? {
            Some(ndx) => ndx,
            None => return Ok(Screen::MainMenu),
        };
        let days = read_integer(&mut self.console, "Enter the length of the loan in days: ")?;
        let today = (self.today)();
        let DataStore { patrons, catalogue } = &mut self.store;
        match process_loan(&mut patrons[patron_ndx], &mut catalogue[item_ndx], days, today) {
            Ok(due_date) => {
                let message = format!("Loan approved, due {}.", format_date(&due_date));
                self.console.write_line(message.as_str());
            }
            Err(err) => {
                info!("loan of item {} refused: {}", item_id, err);
                self.console.write_line(format!("Loan denied: {}.", err.message()).as_str());
            }
        }
        Ok(Screen::MainMenu)
    }

    fn return_item(&mut self) -> LibraryResult<Screen> {
        self.heading(Screen::ReturnItem);
        let patron_ndx = match self.prompt_patron()? {
            Some(ndx) => ndx,
            None => return Ok(Screen::MainMenu),
        };
        let summary = self.store.patrons[patron_ndx].to_string();
        self.console.write_line(summary.as_str());
        if self.store.patrons[patron_ndx].loans.is_empty() {
            return Ok(Screen::MainMenu);
        }
        loop {
            let text = read_string(&mut self.console, "Enter the id of the item being returned: ")?;
            let item_id = match text.parse::<i64>() {
                Ok(id) => id,
                Err(_) => {
                    self.console.write_line("Please enter the id of one of the patron's loans.");
                    continue;
                }
            };
            let DataStore { patrons, catalogue } = &mut self.store;
            match process_return(&mut patrons[patron_ndx], catalogue, item_id) {
                Ok(()) => {
                    self.console.write_line(format!("Item {} returned.", item_id).as_str());
                    return Ok(Screen::MainMenu);
                }
                Err(err) => {
                    self.console.write_line(format!("{}.", err.message()).as_str());
                }
            }
        }
    }

    fn print_patrons(&mut self, found: Vec<Patron>) {
        if found.is_empty() {
            self.console.write_line("No matching patrons.");
        }
        for patron in found {
            self.console.write_line(patron.to_string().as_str());
        }
    }

    fn search_for_patron(&mut self) -> LibraryResult<Screen> {
        self.heading(Screen::SearchForPatron);
        self.console.write_line("1. Search by name");
        self.console.write_line("2. Search by age");
        self.console.write_line("3. Return to the main menu");
        match read_integer_range(&mut self.console, "Enter your choice: ", 1, 3)? {
            1 => {
                let name = read_string(&mut self.console, "Enter the name to search for: ")?;
                let found: Vec<Patron> = find_patron_by_name(name.as_str(), &self.store.patrons)
                    .into_iter().cloned().collect();
                self.print_patrons(found);
                Ok(Screen::SearchForPatron)
            }
            2 => {
                let age = read_integer(&mut self.console, "Enter the age to search for: ")?;
                let found: Vec<Patron> = find_patron_by_age(age, &self.store.patrons)
                    .into_iter().cloned().collect();
                self.print_patrons(found);
                Ok(Screen::SearchForPatron)
            }
            _ => Ok(Screen::MainMenu),
        }
    }

    fn register_patron(&mut self) -> LibraryResult<Screen> {
        self.heading(Screen::RegisterPatron);
        let name = loop {
            let name = read_string(&mut self.console, "Enter the new patron's name: ")?;
            if !name.is_empty() {
                break name;
            }
            self.console.write_line("The name cannot be empty.");
        };
        let age = read_integer_range(&mut self.console, "Enter the new patron's age: ", 0, i64::MAX)?;
        let summary = self.store.register_patron(name.as_str(), age).to_string();
        self.console.write_line("Patron registered:");
        self.console.write_line(summary.as_str());
        Ok(Screen::MainMenu)
    }

    fn access_makerspace(&mut self) -> LibraryResult<Screen> {
        self.heading(Screen::AccessMakerspace);
        let patron_ndx = match self.prompt_patron()? {
            Some(ndx) => ndx,
            None => return Ok(Screen::MainMenu),
        };
        let patron = &self.store.patrons[patron_ndx];
        match check_makerspace(patron.age, patron.outstanding_fees, patron.makerspace_trained) {
            Ok(()) => {
                info!("patron {} admitted to the makerspace", patron.id);
                self.console.write_line(format!("{} may use the makerspace.", patron.name).as_str());
            }
            Err(err) => {
                info!("patron {} ({}) refused the makerspace: {}", patron.id, patron.patron_type(), err);
                let message = format!("{} may not use the makerspace: {}.", patron.name, err.message());
                self.console.write_line(message.as_str());
            }
        }
        Ok(Screen::MainMenu)
    }
}
