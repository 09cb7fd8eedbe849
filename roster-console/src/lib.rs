//! # Roster Console Library
//!
//! A menu-driven console program that keeps a list of text items in
//! memory. The user can add an item, list items, remove an item or exit.
//!
//! ## Modules
//!
//! - `console`: The read-dispatch-print loop (controller)
//! - `menu`: Menu choices and their parsing
//! - `view`: Prompting and printing over any reader/writer pair
//! - `error`: Console error type
//!
//! ## Example
//!
//! ```
//! use roster_console::console::Console;
//! use std::io::Cursor;
//!
//! let input = Cursor::new("1\napple\n4\n");
//! let mut output = Vec::new();
//!
//! let mut console = Console::new(input, &mut output);
//! console.run().unwrap();
//! assert_eq!(console.items().items(), ["apple"]);
//! ```

pub mod console;
pub mod error;
pub mod menu;
pub mod view;
