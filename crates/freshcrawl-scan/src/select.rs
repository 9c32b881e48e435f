//! Interactive folder selection.
//!
//! The selector shows the subfolders of the current folder as a numbered
//! menu with one extra "go up" entry and reacts to one line of input at a
//! time:
//!
//! ```text
//! [0] /sites/axion/Shared Documents/Reports
//! [1] /sites/axion/Shared Documents/Specs
//! [2] ../
//! ```
//!
//! An empty line selects the current folder.

use tracing::{debug, warn};

use freshcrawl_core::{CrawlError, Prompt, RemoteTreeClient, path};

const QUESTION: &str = "Select a folder to browse or press ENTER to search current directory: ";
const RETRY_NOTICE: &str = "Select from options and try again.";

/// What a line of input asks the selector to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Select the current folder.
    Terminate,
    /// Move to the parent folder.
    Ascend,
    /// Move into the subfolder at this menu index.
    Descend(usize),
    /// Unrecognized input; ask again.
    Retry,
}

impl Transition {
    /// Interpret a line of input for a menu with `subfolder_count` entries.
    ///
    /// The "go up" entry sits at index `subfolder_count`. Only an empty
    /// line terminates; a line of blanks is unrecognized input.
    pub fn from_input(input: &str, subfolder_count: usize) -> Self {
        if input.is_empty() {
            return Self::Terminate;
        }
        match input.trim().parse::<usize>() {
            Ok(index) if index == subfolder_count => Self::Ascend,
            Ok(index) if index < subfolder_count => Self::Descend(index),
            _ => Self::Retry,
        }
    }
}

/// Lets a user walk the remote hierarchy to pick a starting folder.
pub struct FolderSelector<C> {
    client: C,
    floor: Option<String>,
}

impl<C: RemoteTreeClient> FolderSelector<C> {
    /// Create a selector over a client.
    pub fn new(client: C) -> Self {
        Self {
            client,
            floor: None,
        }
    }

    /// Refuse to ascend above `floor`, e.g. the site root.
    pub fn with_floor(mut self, floor: impl AsRef<str>) -> Self {
        self.floor = Some(path::normalize(floor.as_ref()).to_string());
        self
    }

    /// Run the selection loop starting at `start` and return the chosen folder.
    ///
    /// Invalid input re-prompts at the same folder without limit. Listing
    /// failures and closed input end the selection with an error.
    pub fn select(&self, start: &str, prompt: &mut dyn Prompt) -> Result<String, CrawlError> {
        let mut current = path::normalize(start).to_string();

        loop {
            let subfolders = self.client.list_subfolders(&current)?;
            debug!(folder = %current, count = subfolders.len(), "presenting folder menu");

            for (index, folder) in subfolders.iter().enumerate() {
                prompt.say(&format!("[{index}] {}", folder.path));
            }
            prompt.say(&format!("[{}] ../", subfolders.len()));
            prompt.say("");

            let choice = prompt.ask(QUESTION)?;
            match Transition::from_input(&choice, subfolders.len()) {
                Transition::Terminate => {
                    prompt.say("Current directory selected.");
                    return Ok(current);
                }
                Transition::Ascend => match self.parent_of(&current) {
                    Some(parent) => current = parent.to_string(),
                    None => {
                        warn!(folder = %current, "refusing to ascend past the top folder");
                        prompt.say("Already at the top folder. Select from options and try again.");
                    }
                },
                Transition::Descend(index) => current = subfolders[index].path.clone(),
                Transition::Retry => prompt.say(RETRY_NOTICE),
            }
        }
    }

    /// Parent folder, unless that would leave the floor or the path entirely.
    fn parent_of<'p>(&self, folder: &'p str) -> Option<&'p str> {
        let parent = path::parent(folder)?;
        match &self.floor {
            Some(floor) if !path::is_within(parent, floor) => None,
            _ => Some(parent),
        }
    }
}
