//! Headless stdin commands

use std::time::Duration;

use qdigital_core::prelude::*;
use qdigital_core::Route;

/// One line of headless input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `navigate <id>`
    Navigate(Route),
    /// `menu`: open or close the mobile menu
    ToggleMenu,
    /// `menu-navigate <id>`: navigate from the mobile menu (closes it)
    MenuNavigate(Route),
    /// `scroll <px>`: report a new scroll offset
    Scroll(u32),
    Next,
    Prev,
    Toggle,
    /// `jump <index>`
    Jump(usize),
    /// `render`: emit the current page
    Render,
    /// `wait <ms>`: pause reading input
    Wait(Duration),
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default();
        let arg = words.next();
        if words.next().is_some() {
            return Err(Error::unknown_command(line));
        }

        let bad = || Error::unknown_command(line);
        let command = match (verb, arg) {
            ("navigate" | "go", Some(id)) => Command::Navigate(Route::parse(id)),
            ("menu", None) => Command::ToggleMenu,
            ("menu-navigate", Some(id)) => Command::MenuNavigate(Route::parse(id)),
            ("scroll", Some(px)) => Command::Scroll(px.parse().map_err(|_| bad())?),
            ("next", None) => Command::Next,
            ("prev", None) => Command::Prev,
            ("toggle", None) => Command::Toggle,
            ("jump", Some(index)) => Command::Jump(index.parse().map_err(|_| bad())?),
            ("render", None) => Command::Render,
            ("wait", Some(ms)) => {
                Command::Wait(Duration::from_millis(ms.parse().map_err(|_| bad())?))
            }
            ("q" | "quit", None) => Command::Quit,
            _ => return Err(bad()),
        };
        Ok(Some(command))
    }
}
