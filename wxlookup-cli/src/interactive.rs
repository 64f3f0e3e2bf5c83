use chrono::Local;
use inquire::{InquireError, Text};
use wxlookup_core::{Config, LocationQuery, UnitSystem, WeatherProvider, lookup, provider_from_config};

use crate::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchMode {
    Zip,
    City,
}

impl SearchMode {
    fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "zip" => Some(SearchMode::Zip),
            "city" => Some(SearchMode::City),
            _ => None,
        }
    }
}

fn parse_yes_no(input: &str) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

fn non_empty(input: &str) -> Option<String> {
    (!input.is_empty()).then(|| input.to_string())
}

/// Ask `message` on the terminal until `parse` accepts the trimmed answer.
fn prompt_until<T>(
    message: &str,
    retry: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, InquireError> {
    ask_until(message, retry, |m| Text::new(m).prompt(), parse)
}

/// Returns early only if `ask` fails, e.g. when the user cancels the prompt.
fn ask_until<T>(
    message: &str,
    retry: &str,
    mut ask: impl FnMut(&str) -> Result<String, InquireError>,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, InquireError> {
    loop {
        let answer = ask(message)?;
        if let Some(value) = parse(answer.trim()) {
            return Ok(value);
        }
        output::print_retry(retry);
    }
}

/// Run the prompt loop until the user declines another lookup.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let provider = provider_from_config(config)?;

    output::print_welcome();
    match session(provider.as_ref()).await {
        Ok(())
        | Err(InquireError::OperationCanceled)
        | Err(InquireError::OperationInterrupted) => {
            output::print_goodbye();
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

async fn session(provider: &dyn WeatherProvider) -> Result<(), InquireError> {
    let mut wants_lookup = ask_yes_no("Would you like to perform a weather lookup? (Y/N):")?;

    while wants_lookup {
        let mode = prompt_until(
            "> Would you like to search by 'ZIP' or 'CITY'?",
            "** Select lookup by 'ZIP' or 'CITY'",
            SearchMode::parse,
        )?;

        let units = prompt_until(
            "> How would you like the temperature displayed? (Metric, Imperial, Kelvin):",
            "** Select a Unit of Measurement (Metric, Imperial, Kelvin)",
            |input| UnitSystem::try_from(input).ok(),
        )?;

        let query = match mode {
            SearchMode::Zip => LocationQuery::zip(prompt_until(
                "> Enter the Zip Code you would like to lookup:",
                "> Please Enter a Zip Code",
                non_empty,
            )?),
            SearchMode::City => {
                let city = prompt_until(
                    "> Enter the City you would like to lookup:",
                    "> Please Enter a City",
                    non_empty,
                )?;
                let state = prompt_until("> Enter a State:", "> Please Enter a State", non_empty)?;
                LocationQuery::city(city, state)
            }
        };

        match lookup(provider, &query, units).await {
            Ok(report) => output::print_report(&report, Local::now().naive_local()),
            Err(err) => {
                // Same as after a bad answer: straight back to the search prompt.
                output::print_failure(&err);
                continue;
            }
        }

        wants_lookup = ask_yes_no("Would you like to perform another weather lookup? (Y/N):")?;
    }

    Ok(())
}

fn ask_yes_no(message: &str) -> Result<bool, InquireError> {
    prompt_until(message, "** Enter 'Y' to perform a lookup or 'N' to exit", parse_yes_no)
}
