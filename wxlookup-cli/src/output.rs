use chrono::NaiveDateTime;
use colored::Colorize;
use wxlookup_core::{ErrorKind, Report, WeatherError, report::rule};

pub fn failure_message(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::NotFound => {
            "You have entered an invalid location. Please use a correct ZIP code or CITY name."
        }
        ErrorKind::Connect => {
            "Could not establish a connection to the server, there was a connection error."
        }
    }
}

pub fn print_failure(err: &WeatherError) {
    tracing::debug!(error = %err, "lookup failed");

    let message = format!("> {}", failure_message(err.kind()));
    match err.kind() {
        ErrorKind::NotFound => println!("\n{}", message.bright_red()),
        ErrorKind::Connect => println!("\n{}", message.red()),
    }
}

pub fn print_report(report: &Report, at: NaiveDateTime) {
    println!("{}", rule().dimmed());
    println!("\n{}", report.render_heading(at).magenta());
    println!("{}", rule().dimmed());
    println!("{}", report.render().cyan());
    println!("{}", rule().dimmed());
}

pub fn print_welcome() {
    println!("\n{}", "Welcome to wxlookup.".bold().yellow());
}

pub fn print_goodbye() {
    println!("\n{}", "~~ Thank you, have a good day, Good Bye".yellow());
}

pub fn print_retry(message: &str) {
    println!("\n{}", message.bright_red());
}
