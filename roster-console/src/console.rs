//! Console loop
//!
//! `Console` owns the item list and the view and runs the
//! read-dispatch-print cycle until the user picks `4`.
//!
//! ```text
//! Running --"1"/"2"/"3"/invalid--> Running
//! Running --"4"--> Stopped
//! ```
//!
//! End of input is not a way out: it aborts the loop with
//! `ConsoleError::InputClosed`.

use crate::{
    error::ConsoleResult,
    menu::{MenuChoice, MENU_LINES},
    view::ConsoleView,
};
use roster_shared::models::item::ItemList;
use std::io::{BufRead, Write};

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Waiting for the next menu choice
    Running,
    /// The user chose to exit
    Stopped,
}

/// Console controller
pub struct Console<R, W> {
    items: ItemList,
    view: ConsoleView<R, W>,
    state: LoopState,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console with an empty item list
    pub fn new(input: R, output: W) -> Self {
        Self {
            items: ItemList::new(),
            view: ConsoleView::new(input, output),
            state: LoopState::Running,
        }
    }

    /// Current loop state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Items collected so far
    pub fn items(&self) -> &ItemList {
        &self.items
    }

    /// Appends an item and confirms it
    pub fn add_item(&mut self, item: String) -> ConsoleResult<()> {
        let message = format!("Элемент '{item}' добавлен");
        self.items.add(item);
        self.view.show_message(&message)
    }

    /// Prints the numbered list, or a notice when it is empty
    pub fn show_items(&mut self) -> ConsoleResult<()> {
        if self.items.is_empty() {
            self.view.show_message("Список пуст")
        } else {
            self.view.show_items(self.items.items())
        }
    }

    /// Removes the first matching item and confirms
    ///
    /// The confirmation is printed whether or not anything matched.
    pub fn remove_item(&mut self, item: &str) -> ConsoleResult<()> {
        let removed = self.items.remove(item);
        tracing::debug!(removed, "remove requested");
        self.view.show_message(&format!("Элемент '{item}' удален"))
    }

    /// Runs one iteration: print the menu, read a choice, act on it
    ///
    /// Returns the state after the iteration.
    pub fn step(&mut self) -> ConsoleResult<LoopState> {
        for line in MENU_LINES {
            self.view.show_message(line)?;
        }

        let choice = self.view.get_input("Выберите действие: ")?;

        match MenuChoice::parse(&choice) {
            Some(MenuChoice::AddItem) => {
                let item = self.view.get_input("Введите элемент: ")?;
                self.add_item(item)?;
            }
            Some(MenuChoice::ShowItems) => self.show_items()?,
            Some(MenuChoice::RemoveItem) => {
                let item = self.view.get_input("Введите элемент для удаления: ")?;
                self.remove_item(&item)?;
            }
            Some(MenuChoice::Exit) => self.state = LoopState::Stopped,
            None => {
                tracing::debug!(input = %choice, "invalid menu choice");
                self.view.show_message("Неверный выбор")?;
            }
        }

        Ok(self.state)
    }

    /// Runs until the user exits
    ///
    /// # Errors
    ///
    /// Fails on I/O errors and when input ends before `4` is chosen.
    pub fn run(&mut self) -> ConsoleResult<()> {
        while self.state == LoopState::Running {
            self.step()?;
        }
        tracing::debug!(items = self.items.items().len(), "console stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConsoleError;
    use std::io::Cursor;

    fn run_script(lines: &[&str]) -> (ConsoleResult<()>, Vec<String>, String) {
        let input = Cursor::new(lines.iter().map(|l| format!("{l}\n")).collect::<String>());
        let mut output = Vec::new();

        let mut console = Console::new(input, &mut output);
        let result = console.run();
        let items = console.items().items().to_vec();
        drop(console);

        (result, items, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_add_then_show_then_exit() {
        let (result, items, output) = run_script(&["1", "apple", "2", "4"]);

        assert!(result.is_ok());
        assert_eq!(items, vec!["apple"]);

        let added = output.find("Элемент 'apple' добавлен").unwrap();
        let listing = output.find("Список элементов:\n1. apple\n").unwrap();
        assert!(added < listing);
        assert_eq!(output.matches(". apple").count(), 1);
        assert!(output.ends_with("Выберите действие: "));
    }

    #[test]
    fn test_show_empty_list() {
        let (result, _, output) = run_script(&["2", "4"]);

        assert!(result.is_ok());
        assert!(output.contains("Список пуст\n"));
    }

    #[test]
    fn test_remove_reports_even_without_match() {
        let (result, items, output) = run_script(&["1", "apple", "3", "plum", "4"]);

        assert!(result.is_ok());
        assert_eq!(items, vec!["apple"]);
        assert!(output.contains("Элемент 'plum' удален"));
    }

    #[test]
    fn test_remove_first_match_only() {
        let (_, items, _) = run_script(&["1", "a", "1", "b", "1", "a", "3", "a", "4"]);
        assert_eq!(items, vec!["b", "a"]);
    }

    #[test]
    fn test_invalid_choice_keeps_running() {
        let (result, _, output) = run_script(&["9", "", "4"]);

        assert!(result.is_ok());
        assert_eq!(output.matches("Неверный выбор").count(), 2);
        assert_eq!(output.matches("4. Выход").count(), 3);
    }

    #[test]
    fn test_invalid_utf8_is_an_invalid_choice() {
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new(vec![0xff, b'\n', b'4', b'\n']), &mut output);

        assert!(console.run().is_ok());
        assert_eq!(console.state(), LoopState::Stopped);
        drop(console);

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches("Неверный выбор").count(), 1);
    }

    #[test]
    fn test_step_transitions_to_stopped() {
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new("2\n4\n"), &mut output);

        assert_eq!(console.state(), LoopState::Running);
        assert_eq!(console.step().unwrap(), LoopState::Running);
        assert_eq!(console.step().unwrap(), LoopState::Stopped);
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let (result, items, _) = run_script(&["1", "apple"]);

        assert!(matches!(result, Err(ConsoleError::InputClosed)));
        assert_eq!(items, vec!["apple"]);
    }
}
