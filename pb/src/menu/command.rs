//! Menu commands

/// A top-level menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddEntry,
    CheckExists,
    ListAll,
    FindByName,
    RemoveEntry,
    UpdatePhone,
    IsFull,
    FreeSlots,
    Exit,
}

impl MenuCommand {
    /// Commands in the order the menu shows them
    pub const ALL: [MenuCommand; 9] = [
        Self::AddEntry,
        Self::CheckExists,
        Self::ListAll,
        Self::FindByName,
        Self::RemoveEntry,
        Self::UpdatePhone,
        Self::IsFull,
        Self::FreeSlots,
        Self::Exit,
    ];

    /// Number typed to select the command
    pub fn key(self) -> u8 {
        match self {
            Self::AddEntry => 1,
            Self::CheckExists => 2,
            Self::ListAll => 3,
            Self::FindByName => 4,
            Self::RemoveEntry => 5,
            Self::UpdatePhone => 6,
            Self::IsFull => 7,
            Self::FreeSlots => 8,
            Self::Exit => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AddEntry => "Add contact",
            Self::CheckExists => "Check whether a contact exists",
            Self::ListAll => "List all contacts",
            Self::FindByName => "Find contact by first and last name",
            Self::RemoveEntry => "Remove contact",
            Self::UpdatePhone => "Change a contact's phone",
            Self::IsFull => "Check whether the directory is full",
            Self::FreeSlots => "Show free slots",
            Self::Exit => "Exit",
        }
    }
}

impl std::fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AddEntry => write!(f, "add-entry"),
            Self::CheckExists => write!(f, "check-exists"),
            Self::ListAll => write!(f, "list-all"),
            Self::FindByName => write!(f, "find-by-name"),
            Self::RemoveEntry => write!(f, "remove-entry"),
            Self::UpdatePhone => write!(f, "update-phone"),
            Self::IsFull => write!(f, "is-full"),
            Self::FreeSlots => write!(f, "free-slots"),
            Self::Exit => write!(f, "exit"),
        }
    }
}

impl std::str::FromStr for MenuCommand {
    type Err = String;

    /// Accepts the menu number or the command name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(key) = s.parse::<u8>() {
            return Self::ALL
                .into_iter()
                .find(|cmd| cmd.key() == key)
                .ok_or_else(|| format!("Unknown option: {}", s));
        }

        let name = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.to_string() == name)
            .ok_or_else(|| format!("Unknown option: {}", s))
    }
}
