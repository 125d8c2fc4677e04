//! Line-oriented console over a [`BTree`].
//!
//! Reads a menu selection, then a key, from any `BufRead` and echoes the
//! tree after every action:
//!
//! ```text
//! NEXT ACTION (1 = ADD, 2 = DELETE, 3 = QUIT)
//! 1
//! KEY TO ADD: 42
//!
//! ADDED 42
//! ```
//!
//! Key validation lives here; the tree itself accepts any `u32`.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::btree::BTree;
use crate::common::config::MAX_CONSOLE_KEY;
use crate::common::{Error, Key, Result};

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Delete,
    Quit,
}

impl Command {
    /// Parse a menu line: `1` adds, `2` deletes, anything else quits.
    pub fn parse(line: &str) -> Self {
        match line.trim().parse::<u64>() {
            Ok(1) => Command::Add,
            Ok(2) => Command::Delete,
            _ => Command::Quit,
        }
    }
}

/// Parse a key line, accepting `0..=MAX_CONSOLE_KEY`.
///
/// # Errors
/// - `Error::InvalidKey` for non-numeric or out-of-range input
pub fn parse_key(line: &str) -> Result<Key> {
    let text = line.trim();
    let value: i64 = text
        .parse()
        .map_err(|_| Error::InvalidKey(text.to_string()))?;

    if (0..=i64::from(MAX_CONSOLE_KEY)).contains(&value) {
        Ok(value as Key)
    } else {
        Err(Error::InvalidKey(text.to_string()))
    }
}

/// Interactive loop driving one tree.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run until the user quits or input ends.
    ///
    /// # Errors
    /// - `Error::Io` if reading or writing fails
    /// - `Error::AllocationFailure` if an insert cannot reserve its nodes
    pub fn run(&mut self, tree: &mut BTree) -> Result<()> {
        loop {
            write!(self.output, "\n\nNEXT ACTION (1 = ADD, 2 = DELETE, 3 = QUIT)\n")?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            match Command::parse(&line) {
                Command::Add => {
                    write!(self.output, "KEY TO ADD: ")?;
                    let Some(line) = self.read_line()? else {
                        return Ok(());
                    };
                    self.add(tree, &line)?;
                }
                Command::Delete => {
                    write!(self.output, "KEY TO DELETE: ")?;
                    let Some(line) = self.read_line()? else {
                        return Ok(());
                    };
                    self.delete(tree, &line)?;
                }
                Command::Quit => return Ok(()),
            }

            write!(self.output, "{}", tree)?;
        }
    }

    /// Hand back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn add(&mut self, tree: &mut BTree, line: &str) -> Result<()> {
        match parse_key(line) {
            Ok(key) => {
                tree.insert(key)?;
                info!(key, "added");
                write!(self.output, "\nADDED {}\n", key)?;
            }
            Err(err) => {
                warn!(%err, "rejected input");
                write!(self.output, "\nNOT VALID INPUT\n")?;
            }
        }
        Ok(())
    }

    fn delete(&mut self, tree: &mut BTree, line: &str) -> Result<()> {
        match parse_key(line) {
            Ok(key) if tree.delete(key) => {
                info!(key, "deleted");
                write!(self.output, "\nDELETING {}\n", key)?;
            }
            Ok(key) => {
                write!(self.output, "\n{} NOT IN TREE\n", key)?;
            }
            Err(err) => {
                warn!(%err, "rejected input");
                write!(self.output, "\nNOT VALID INPUT\n")?;
            }
        }
        Ok(())
    }

    /// Next input line, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
