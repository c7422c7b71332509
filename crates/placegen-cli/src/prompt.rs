//! Interactive input: location confirmation and keyword entry.
//!
//! Both prompts re-ask on bad input up to a configured number of attempts,
//! then fail with [`PromptError::AttemptsExhausted`].

#[cfg(test)]
pub(crate) mod scripted;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use placegen_geonames::{GeonamesClient, GeonamesError};
use thiserror::Error;

const LOCATION_PROMPT: &str = "Find location (city, village, etc.)";
const KEYWORD_PROMPT: &str = "Find by keyword (cafe, restaurant, etc.)";
pub(crate) const INVALID_LOCATION_MESSAGE: &str =
    "Invalid location. Please enter a valid location.";
pub(crate) const EMPTY_KEYWORD_MESSAGE: &str = "Keyword cannot be empty.";

#[derive(Debug, Error)]
pub(crate) enum PromptError {
    #[error("terminal prompt failed: {0}")]
    Terminal(#[source] dialoguer::Error),

    #[error("input closed before an answer was given")]
    InputClosed,

    #[error("location lookup failed: {0}")]
    Lookup(#[from] GeonamesError),

    #[error("no valid {what} entered after {attempts} attempts")]
    AttemptsExhausted { what: &'static str, attempts: u32 },
}

/// Source of user answers. The terminal implementation wraps `dialoguer`;
/// tests script the answers.
pub(crate) trait Prompter {
    fn input(&mut self, prompt: &str) -> Result<String, PromptError>;
    fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError>;
    fn notify(&mut self, message: &str);
}

#[derive(Default)]
pub(crate) struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str) -> Result<String, PromptError> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(terminal_error)?)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(terminal_error)?)
    }

    fn notify(&mut self, message: &str) {
        println!("{message}");
    }
}

/// End of input on stdin means nobody is left to answer.
fn terminal_error(err: dialoguer::Error) -> PromptError {
    match err {
        dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::UnexpectedEof => {
            PromptError::InputClosed
        }
        other => PromptError::Terminal(other),
    }
}

/// A location the user confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedLocation {
    /// Bare place name; this is what gets geocoded.
    pub place: String,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct LocationPolicy {
    pub max_attempts: u32,
    /// Reject matches whose name equals their country name.
    pub reject_country_named: bool,
}

/// Ask for a location until the lookup finds a match the user confirms.
///
/// Empty input, no match, a "no" answer, and (under the policy) a match that
/// is the country itself all count as a failed attempt.
///
/// # Errors
///
/// [`PromptError::AttemptsExhausted`] after `policy.max_attempts` failed
/// attempts; lookup and terminal failures propagate immediately.
pub(crate) async fn resolve_location<P: Prompter + ?Sized>(
    prompter: &mut P,
    lookup: &GeonamesClient,
    policy: LocationPolicy,
) -> Result<ResolvedLocation, PromptError> {
    for attempt in 1..=policy.max_attempts {
        let input = prompter.input(LOCATION_PROMPT)?;
        if let Some(resolved) = try_location(prompter, lookup, input.trim(), policy).await? {
            tracing::info!(
                place = %resolved.place,
                country = resolved.country.as_deref().unwrap_or(""),
                attempt,
                "location confirmed"
            );
            return Ok(resolved);
        }
        tracing::debug!(attempt, max_attempts = policy.max_attempts, "location rejected");
        prompter.notify(INVALID_LOCATION_MESSAGE);
    }

    Err(PromptError::AttemptsExhausted {
        what: "location",
        attempts: policy.max_attempts,
    })
}

async fn try_location<P: Prompter + ?Sized>(
    prompter: &mut P,
    lookup: &GeonamesClient,
    query: &str,
    policy: LocationPolicy,
) -> Result<Option<ResolvedLocation>, PromptError> {
    if query.is_empty() {
        return Ok(None);
    }

    let Some(entry) = lookup.search(query, 1).await?.into_iter().next() else {
        tracing::debug!(query, "no geonames match");
        return Ok(None);
    };

    let question = format!("Is {} the correct location?", entry.display_label());
    if !prompter.confirm(&question)? {
        return Ok(None);
    }

    if policy.reject_country_named && entry.is_country_itself() {
        tracing::warn!(
            place = %entry.name,
            "match names a country, not a place inside it; rejecting"
        );
        return Ok(None);
    }

    Ok(Some(ResolvedLocation {
        place: entry.name,
        country: entry.country_name,
    }))
}

/// Ask for a non-blank search keyword.
///
/// # Errors
///
/// [`PromptError::AttemptsExhausted`] after `max_attempts` blank answers.
pub(crate) fn resolve_keyword<P: Prompter + ?Sized>(
    prompter: &mut P,
    max_attempts: u32,
) -> Result<String, PromptError> {
    for _ in 0..max_attempts {
        let input = prompter.input(KEYWORD_PROMPT)?;
        let keyword = input.trim();
        if !keyword.is_empty() {
            return Ok(keyword.to_owned());
        }
        prompter.notify(EMPTY_KEYWORD_MESSAGE);
    }

    Err(PromptError::AttemptsExhausted {
        what: "keyword",
        attempts: max_attempts,
    })
}

#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;
