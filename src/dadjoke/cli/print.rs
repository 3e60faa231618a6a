use colored::Colorize;
use dadjoke::api::{CmdMessage, MessageLevel};
use dadjoke::error::JokeError;
use dadjoke::model::Joke;

pub(super) fn print_joke(joke: &Joke) {
    println!("{}", joke_line(&joke.text));
}

/// Some jokes (knock-knocks) carry `\r\n` breaks; stdout gets exactly one line.
fn joke_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Messages go to stderr so stdout only ever carries the joke.
/// Info is shown in verbose mode only.
pub(super) fn print_messages(messages: &[CmdMessage], verbose: bool) {
    for message in messages {
        match message.level {
            MessageLevel::Info if verbose => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Info => {}
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

pub fn print_error(err: &JokeError) {
    eprintln!("{} {}", "Error:".red(), err);
}
