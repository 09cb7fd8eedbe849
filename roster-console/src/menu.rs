//! Menu choices
//!
//! The menu is fixed: four numbered actions, selected by typing the number.

/// Lines printed before every prompt (the first one is blank)
pub const MENU_LINES: [&str; 4] = [
    "\n1. Добавить элемент",
    "2. Показать элементы",
    "3. Удалить элемент",
    "4. Выход",
];

/// Action selected from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1`: append an item
    AddItem,
    /// `2`: list items
    ShowItems,
    /// `3`: remove an item
    RemoveItem,
    /// `4`: leave the loop
    Exit,
}

impl MenuChoice {
    /// Parses user input into a choice
    ///
    /// Surrounding whitespace is ignored; anything other than `1`-`4` is
    /// `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddItem),
            "2" => Some(Self::ShowItems),
            "3" => Some(Self::RemoveItem),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}
