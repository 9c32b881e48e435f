//! Menu-driven job planning.

use freshcrawl_core::{CrawlError, MAX_DAYS, Prompt, SearchMode, Settings, path};

use crate::run::Job;

const SITE_QUESTION: &str = "Enter number for SharePoint site you'd like to check for updates: ";
const DAYS_QUESTION: &str =
    "Enter desired number of days prior to today that you'd like to check for updates: ";
const MODE_QUESTION: &str =
    "Choose the number for the search mode you'd like to use from the options above: ";
const SCOPE_QUESTION: &str = "Would you like to search a specific directory? \
     Enter 'N' to search this entire SharePoint site. Y/N: ";
const KNOWN_PATH_QUESTION: &str =
    "Do you know the path to the directory? Enter 'N' to initiate browse mode: ";

/// Walk the user through site, window, mode and folder choices.
///
/// Any malformed answer aborts with [`CrawlError::InputFormat`].
pub fn plan(settings: &Settings, prompt: &mut dyn Prompt) -> Result<Job, CrawlError> {
    if settings.sites.is_empty() {
        return Err(CrawlError::invalid_config(
            "no sites configured, add a [sites] table to config.toml",
        ));
    }

    prompt.say("");
    for (index, title) in settings.sites.keys().enumerate() {
        prompt.say(&format!("[{index}] {title}"));
    }
    let choice = menu_choice(&prompt.ask(SITE_QUESTION)?, settings.sites.len())?;
    let site = settings.sites[choice].clone();

    let days = parse_days(&prompt.ask(DAYS_QUESTION)?)?;

    prompt.say("");
    let modes = [
        SearchMode::New,
        SearchMode::NewFolder,
        SearchMode::Modified,
        SearchMode::Both,
    ];
    for (index, mode) in modes.iter().enumerate() {
        prompt.say(&format!("[{index}] {}", mode.label()));
    }
    let mode = menu_choice(&prompt.ask(MODE_QUESTION)?, modes.len())
        .map(|index| modes[index])?;

    let library = settings.library_root(&site);
    let (start, browse) = if yes_no(&prompt.ask(SCOPE_QUESTION)?)? {
        if yes_no(&prompt.ask(KNOWN_PATH_QUESTION)?)? {
            prompt.say("Enter path to folder. Path is case-sensitive!");
            let sub_path = prompt.ask(&format!("{site}/Documents/"))?;
            (path::join(&library, sub_path.trim()), false)
        } else {
            (library, true)
        }
    } else {
        (library, false)
    };

    Ok(Job {
        site,
        start,
        browse,
        days,
        mode,
        now: None,
    })
}

/// Parse a zero-based menu index.
fn menu_choice(input: &str, options: usize) -> Result<usize, CrawlError> {
    let index: usize = input
        .trim()
        .parse()
        .map_err(|_| CrawlError::input_format(input, "an integer"))?;
    if index >= options {
        return Err(CrawlError::input_format(input, "a number from the list of options"));
    }
    Ok(index)
}

/// Parse a whole number of days between one and [`MAX_DAYS`].
fn parse_days(input: &str) -> Result<u32, CrawlError> {
    match input.trim().parse::<u32>() {
        Ok(days) if (1..=MAX_DAYS).contains(&days) => Ok(days),
        _ => Err(CrawlError::input_format(input, "a whole number of days")),
    }
}

/// Parse a yes/no answer.
fn yes_no(input: &str) -> Result<bool, CrawlError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(CrawlError::input_format(input, "yes or no")),
    }
}
