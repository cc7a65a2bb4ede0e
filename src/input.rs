//! Line commands read from stdin.

use weathernow_ui::Action;
use weathernow_weather::TemperatureUnit;

pub const HELP: &str = "\
Commands:
  search <city>        look up a city (bare text works too)
  here                 weather at your location
  unit                 switch between °C and °F
  alert <value> <C|F>  warn when the temperature reaches value
  alert clear          remove the alert
  history clear        forget recent cities
  recent <n>           show the n-th recent city
  dismiss <id>         close a notice
  show                 redraw
  help                 this text
  quit                 exit";

#[derive(Debug)]
pub enum Input {
    Action(Action),
    Show,
    Help,
    Quit,
    /// Recognised command with bad arguments
    Usage(&'static str),
}

/// Parse one line. Blank lines yield `None`.
pub fn parse(line: &str) -> Option<Input> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let input = match command.to_ascii_lowercase().as_str() {
        "search" | "s" => Input::Action(Action::Search(rest.to_string())),
        "here" => Input::Action(Action::UseLocation),
        "unit" | "u" => Input::Action(Action::ToggleUnit),
        "alert" => parse_alert(rest),
        "history" if rest.eq_ignore_ascii_case("clear") => Input::Action(Action::ClearHistory),
        "history" => Input::Usage("history clear"),
        "recent" | "r" => match rest.parse::<usize>() {
            Ok(n) if n >= 1 => Input::Action(Action::SelectRecent(n - 1)),
            _ => Input::Usage("recent <n>  (1 is the most recent)"),
        },
        "dismiss" | "d" => match rest.parse::<u64>() {
            Ok(id) => Input::Action(Action::DismissNotice(id)),
            Err(_) => Input::Usage("dismiss <id>"),
        },
        "show" => Input::Show,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        _ => Input::Action(Action::Search(line.to_string())),
    };
    Some(input)
}

fn parse_alert(rest: &str) -> Input {
    if rest.eq_ignore_ascii_case("clear") {
        return Input::Action(Action::ClearAlert);
    }

    let mut parts = rest.split_whitespace();
    let threshold = parts.next().unwrap_or_default().to_string();
    let unit = match parts.next() {
        Some(symbol) => TemperatureUnit::from_symbol(symbol),
        None if threshold.is_empty() => Some(TemperatureUnit::default()),
        None => None,
    };

    match (unit, parts.next()) {
        (Some(unit), None) => Input::Action(Action::SetAlert { threshold, unit }),
        _ => Input::Usage("alert <value> <C|F>  or  alert clear"),
    }
}
