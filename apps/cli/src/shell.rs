//! # Shell Loop
//!
//! Menu-driven session over a [`Console`]. Every operation outcome is
//! reported to the user and the loop goes on; only `0`, end of input or a
//! broken console end it.

use std::io::{self, BufRead, Write};

use libris_db::BookRepository;
use tracing::{debug, info, warn};

use crate::commands::{book, MenuChoice, MENU};
use crate::error::{ShellError, ShellResult};
use crate::prompt::Console;

/// What the loop does after one menu round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive inventory session.
pub struct Shell<R, W> {
    books: BookRepository,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(books: BookRepository, input: R, output: W) -> Self {
        Shell {
            books,
            console: Console::new(input, output),
        }
    }

    /// Runs menu rounds until the user quits or input ends.
    ///
    /// ## Returns
    /// * `Ok(())` - User chose `0` or input reached end of file
    /// * `Err(io::Error)` - The console could not be read or written
    pub async fn run(&mut self) -> io::Result<()> {
        info!("Shell started");

        loop {
            match self.round().await {
                Ok(Flow::Continue) => continue,
                Ok(Flow::Quit) => break,
                Err(ShellError::InputClosed) => {
                    debug!("Input closed, leaving shell");
                    break;
                }
                Err(ShellError::Io(err)) => return Err(err),
                Err(err) => {
                    if let Err(ShellError::Io(io_err)) = self.report(&err) {
                        return Err(io_err);
                    }
                }
            }
        }

        info!("Shell finished");
        Ok(())
    }

    /// One pass: menu, choice, operation, pause.
    async fn round(&mut self) -> ShellResult<Flow> {
        self.console.say(format!("\n{}", MENU))?;
        let line = self.console.prompt("Enter your choice: ")?;

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Quit) => {
                self.console.say("Goodbye!")?;
                return Ok(Flow::Quit);
            }
            Some(choice) => {
                debug!(?choice, "Menu choice");
                if let Err(err) = self.dispatch(choice).await {
                    if err.ends_session() {
                        return Err(err);
                    }
                    self.report(&err)?;
                }
            }
            None => {
                self.console
                    .say("Invalid choice. Please enter a number from 0 to 7.")?;
            }
        }

        self.console.prompt("\nPress Enter to continue...")?;
        Ok(Flow::Continue)
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> ShellResult<()> {
        let books = &self.books;
        let console = &mut self.console;

        match choice {
            MenuChoice::Add => book::add_book(books, console).await,
            MenuChoice::ListAll => book::list_books(books, console).await,
            MenuChoice::Search => book::search_books(books, console).await,
            MenuChoice::Borrow => book::borrow_book(books, console).await,
            MenuChoice::Return => book::return_book(books, console).await,
            MenuChoice::Update => book::update_book(books, console).await,
            MenuChoice::Delete => book::delete_book(books, console).await,
            MenuChoice::Quit => Ok(()),
        }
    }

    /// Prints a failed operation and logs store-side failures.
    fn report(&mut self, err: &ShellError) -> ShellResult<()> {
        match err {
            ShellError::Db(db_err) if db_err.is_store_failure() => {
                warn!(error = %db_err, "Store operation failed");
            }
            _ => debug!(error = %err, "Operation rejected"),
        }

        self.console.say(format!("Error: {}", err))
    }

    /// Consumes the shell, returning its output stream.
    pub fn into_output(self) -> W {
        self.console.into_output()
    }
}
