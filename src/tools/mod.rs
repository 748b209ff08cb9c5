use chrono::{Local, NaiveDate};
use log::error;
use std::fmt::Debug;

pub mod env_args;
pub mod error;
pub mod web;

pub fn log_error<E: Debug>(error: E) {
    error!("{error:#?}");
}

pub fn log_error_and_return<E: Debug, T>(value_to_return: T) -> impl FnOnce(E) -> T {
    |error| {
        error!("{error:#?}");
        value_to_return
    }
}

pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |error| {
        error!("{message}\n{error:#?}");
        value_to_return
    }
}

/// The gym works on local calendar days: a membership ending today is still valid today.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Normalize a name before comparing it to another one:
/// trimmed, lowercased, single-spaced and without diacritics.
pub fn normalize(value: &str) -> String {
    let value = value
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
        .to_lowercase();
    diacritics::remove_diacritics(&value)
}
