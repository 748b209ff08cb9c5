#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::env;
use std::str::FromStr;

/// Name(s) of an argument passed as `--name=value`.
/// Can be built from a single `&str` or from a slice of aliases (`&["-p", "--port"]`).
pub struct ArgName<'a> {
    names: Vec<&'a str>,
}

impl<'a> From<&'a str> for ArgName<'a> {
    fn from(name: &'a str) -> Self {
        ArgName { names: vec![name] }
    }
}

impl<'a> From<&[&'a str]> for ArgName<'a> {
    fn from(names: &[&'a str]) -> Self {
        ArgName {
            names: names.to_vec(),
        }
    }
}

/// Retrieve the value associated to an arg passed to the app.
/// An arg passed without any value (`--port=`) is considered missing.
///
/// /!\ As this reads the process args,
/// a function using `retrieve_arg_value` has to be tested within `with_env_args(args, fn)`.
pub fn retrieve_arg_value<'a, A>(arg_names: A) -> Option<String>
where
    A: Into<ArgName<'a>>,
{
    let arg_names = arg_names.into();
    get_env_args().into_iter().find_map(|arg| {
        arg_names.names.iter().find_map(|arg_name| {
            arg.strip_prefix(arg_name)
                .and_then(|rest| rest.strip_prefix('='))
                .filter(|value| !value.is_empty())
                .map(str::to_owned)
        })
    })
}

/// Retrieve and parse an arg value.
/// Fall back onto the default value when the arg is missing or can't be parsed.
pub fn retrieve_parsed_arg_value<'a, A, T>(arg_names: A, default_value: T) -> T
where
    A: Into<ArgName<'a>>,
    T: FromStr,
{
    retrieve_arg_value(arg_names)
        .and_then(|value| value.parse::<T>().ok())
        .unwrap_or(default_value)
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// Args seen by the app while running tests.
    /// `with_env_args` replaces them for the duration of a test.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}

#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|args| args.borrow().clone())
}

#[cfg(test)]
/// Run the function as if the app had been started with the given args.
pub fn with_env_args<F, T>(args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_ARGS.with(|refcell| {
        let old_value = refcell.replace(args);
        let result = function();
        refcell.replace(old_value);
        result
    })
}
