//! # Shell Commands
//!
//! Menu choices and the flows behind them.
//!
//! ## Menu
//! ```text
//! ┌───────┬──────────────────────┬──────────────────────────────┐
//! │ Input │ Choice               │ Flow                         │
//! ├───────┼──────────────────────┼──────────────────────────────┤
//! │ 1     │ Add                  │ book::add_book               │
//! │ 2     │ ListAll              │ book::list_books             │
//! │ 3     │ Search               │ book::search_books           │
//! │ 4     │ Borrow               │ book::borrow_book            │
//! │ 5     │ Return               │ book::return_book            │
//! │ 6     │ Update               │ book::update_book            │
//! │ 7     │ Delete               │ book::delete_book            │
//! │ 0     │ Quit                 │ (handled by the shell)       │
//! └───────┴──────────────────────┴──────────────────────────────┘
//! ```

pub mod book;

/// Text printed before every choice prompt.
pub const MENU: &str = "\
==============================
        Library Menu
==============================
1. Add a book
2. List all books
3. Search books
4. Borrow a book
5. Return a book
6. Update book details
7. Delete a book
0. Exit
==============================";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ListAll,
    Search,
    Borrow,
    Return,
    Update,
    Delete,
    Quit,
}

impl MenuChoice {
    /// Maps the typed code to a choice. Surrounding whitespace is ignored;
    /// anything else unknown yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::ListAll),
            "3" => Some(MenuChoice::Search),
            "4" => Some(MenuChoice::Borrow),
            "5" => Some(MenuChoice::Return),
            "6" => Some(MenuChoice::Update),
            "7" => Some(MenuChoice::Delete),
            "0" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::Update));
        assert_eq!(MenuChoice::parse(" 7 "), Some(MenuChoice::Delete));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Quit));
    }

    #[test]
    fn test_parse_rejects_unknown_input() {
        for input in ["", "8", "01", "add", "1 2", "-1"] {
            assert_eq!(MenuChoice::parse(input), None, "input {:?}", input);
        }
    }
}
