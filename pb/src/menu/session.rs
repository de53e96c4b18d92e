//! Menu session management

use std::io::Write;

use colored::Colorize;
use eyre::Result;
use tracing::{debug, info};

use super::{LineSource, MenuCommand};
use crate::config::{Config, resolve_capacity};
use crate::directory::Directory;
use crate::entry::Entry;

/// Interactive menu session over one directory
pub struct MenuSession<S, W> {
    source: S,
    out: W,
    directory: Directory,
}

/// What the menu loop does after a command
enum Flow {
    Continue,
    Quit,
}

impl<S: LineSource, W: Write> MenuSession<S, W> {
    /// Greet the operator and build the directory
    ///
    /// With `capacity` given the size prompt is skipped; otherwise the
    /// operator picks a custom or default size.
    pub fn start(mut source: S, mut out: W, config: &Config, capacity: Option<i64>) -> Result<Self> {
        writeln!(out)?;
        writeln!(out, "{}", "Phonebook".bright_cyan().bold())?;
        writeln!(out)?;

        let default = config.fallback_capacity();
        let capacity = match capacity {
            Some(requested) => apply_capacity(&mut out, Some(requested), default)?,
            None => choose_capacity(&mut source, &mut out, default)?,
        };

        info!(capacity, "Starting menu session");
        Ok(Self {
            source,
            out,
            directory: Directory::new(capacity),
        })
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Run the menu loop until the operator exits or input ends
    pub fn run(mut self) -> Result<Directory> {
        loop {
            self.print_menu()?;
            let Some(input) = self.source.read_line("Select an option: ")? else {
                break;
            };

            let flow = match input.parse::<MenuCommand>() {
                Ok(cmd) => {
                    debug!(command = %cmd, "Menu command");
                    self.handle(cmd)?
                }
                Err(_) => {
                    writeln!(self.out, "{} Invalid option: {}", "?".yellow(), input.trim())?;
                    Flow::Continue
                }
            };
            writeln!(self.out)?;

            if let Flow::Quit = flow {
                break;
            }
        }

        writeln!(self.out, "Goodbye!")?;
        Ok(self.directory)
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "Menu:".bright_cyan())?;
        for cmd in MenuCommand::ALL {
            writeln!(self.out, "  {}. {}", cmd.key(), cmd.label())?;
        }
        Ok(())
    }

    fn handle(&mut self, cmd: MenuCommand) -> Result<Flow> {
        match cmd {
            MenuCommand::AddEntry => self.add_entry(),
            MenuCommand::CheckExists => self.check_exists(),
            MenuCommand::ListAll => self.list_all().map(|_| Flow::Continue),
            MenuCommand::FindByName => self.find_by_name(),
            MenuCommand::RemoveEntry => self.remove_entry(),
            MenuCommand::UpdatePhone => self.update_phone(),
            MenuCommand::IsFull => {
                if self.directory.is_full() {
                    writeln!(self.out, "{} The directory is FULL.", "⚠".yellow())?;
                } else {
                    writeln!(self.out, "{} The directory is not full.", "✓".green())?;
                }
                Ok(Flow::Continue)
            }
            MenuCommand::FreeSlots => self.free_slots().map(|_| Flow::Continue),
            MenuCommand::Exit => Ok(Flow::Quit),
        }
    }

    /// Read first and last name; `None` when input ends
    fn read_name(&mut self) -> Result<Option<(String, String)>> {
        let Some(first) = self.source.read_line("First name: ")? else {
            return Ok(None);
        };
        let Some(last) = self.source.read_line("Last name: ")? else {
            return Ok(None);
        };
        Ok(Some((first, last)))
    }

    fn add_entry(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n--- Add contact ---")?;
        let Some((first, last)) = self.read_name()? else {
            return Ok(Flow::Quit);
        };
        let Some(phone) = self.source.read_line("Phone: ")? else {
            return Ok(Flow::Quit);
        };

        match self.directory.try_add(Entry::new(first, last, phone)) {
            Ok(()) => writeln!(self.out, "{} Contact added.", "✓".green())?,
            Err(e) => writeln!(self.out, "{} Error: {}", "✗".red(), e)?,
        }
        Ok(Flow::Continue)
    }

    fn check_exists(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n--- Check contact ---")?;
        let Some((first, last)) = self.read_name()? else {
            return Ok(Flow::Quit);
        };

        if self.directory.exists(&Entry::new(first.as_str(), last.as_str(), "")) {
            writeln!(self.out, "{} {} {} is in the directory.", "✓".green(), first, last)?;
        } else {
            writeln!(self.out, "{} {} {} is not in the directory.", "✗".red(), first, last)?;
        }
        Ok(Flow::Continue)
    }

    fn list_all(&mut self) -> Result<()> {
        let listing = self.directory.list();
        if listing.is_empty() {
            writeln!(self.out, "The directory is empty.")?;
            return Ok(());
        }

        writeln!(self.out, "\n===== CONTACTS =====")?;
        for (i, entry) in listing.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, entry)?;
        }
        writeln!(self.out, "====================")?;
        Ok(())
    }

    fn find_by_name(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n--- Find contact ---")?;
        let Some((first, last)) = self.read_name()? else {
            return Ok(Flow::Quit);
        };

        match self.directory.find_by_name(&first, &last) {
            Some(entry) => {
                writeln!(self.out, "Contact found:")?;
                writeln!(self.out, "  First name: {}", entry.first())?;
                writeln!(self.out, "  Last name: {}", entry.last())?;
                writeln!(self.out, "  Phone: {}", entry.phone())?;
            }
            None => writeln!(self.out, "No contact found with that first and last name.")?,
        }
        Ok(Flow::Continue)
    }

    fn remove_entry(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n--- Remove contact ---")?;
        let Some((first, last)) = self.read_name()? else {
            return Ok(Flow::Quit);
        };

        match self.directory.try_remove(&Entry::new(first, last, "")) {
            Ok(removed) => writeln!(self.out, "{} Contact removed: {}", "✓".green(), removed)?,
            Err(e) => writeln!(self.out, "{} Error: {}", "✗".red(), e)?,
        }
        Ok(Flow::Continue)
    }

    fn update_phone(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n--- Change phone ---")?;
        let Some((first, last)) = self.read_name()? else {
            return Ok(Flow::Quit);
        };
        let Some(phone) = self.source.read_line("New phone: ")? else {
            return Ok(Flow::Quit);
        };

        match self.directory.try_update_phone(&first, &last, &phone) {
            Ok(()) => {
                writeln!(self.out, "{} Phone updated.", "✓".green())?;
                writeln!(self.out, "New phone for {} {}: {}", first, last, phone)?;
            }
            Err(e) => writeln!(self.out, "{} Error: {}", "✗".red(), e)?,
        }
        Ok(Flow::Continue)
    }

    fn free_slots(&mut self) -> Result<()> {
        let stats = self.directory.stats();
        writeln!(self.out, "\n===== DIRECTORY =====")?;
        writeln!(self.out, "Maximum size: {}", stats.capacity)?;
        writeln!(self.out, "Current contacts: {}", stats.used)?;
        writeln!(self.out, "Free slots: {}", stats.free)?;
        if self.directory.is_full() {
            writeln!(self.out, "{} The directory is full. No room for new contacts.", "⚠".yellow())?;
        } else {
            writeln!(self.out, "{} You can add {} more contact(s).", "✓".green(), stats.free)?;
        }
        writeln!(self.out, "=====================")?;
        Ok(())
    }
}

/// Ask the operator for a custom or default size
fn choose_capacity<S: LineSource, W: Write>(source: &mut S, out: &mut W, default: usize) -> Result<usize> {
    writeln!(out, "How should the directory be created?")?;
    writeln!(out, "  1. Custom size")?;
    writeln!(out, "  2. Default size ({} contacts)", default)?;

    let choice = source.read_line("Select an option: ")?.unwrap_or_default();
    if choice.trim() != "1" {
        writeln!(out, "Directory created with the default size ({} contacts).", default)?;
        return Ok(default);
    }

    let requested = source
        .read_line("Maximum number of contacts: ")?
        .and_then(|s| s.trim().parse::<i64>().ok());
    apply_capacity(out, requested, default)
}

/// Resolve an operator-supplied size, telling them when the default is used
fn apply_capacity<W: Write>(out: &mut W, requested: Option<i64>, default: usize) -> Result<usize> {
    let capacity = resolve_capacity(requested, default);
    if requested.is_none_or(|n| n <= 0) {
        writeln!(out, "Invalid size. Using the default size ({}).", capacity)?;
    }
    Ok(capacity)
}
