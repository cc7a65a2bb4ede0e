//! Display surfaces. [`TerminalSurface`] draws to stdout with `console` styling.

use console::{style, StyledObject};

use weathernow_weather::Theme;

use crate::notify::{Notice, Severity};
use crate::render::{RecentView, WeatherView, NO_RECENT};

/// Where views end up. Each call replaces that region's previous content.
pub trait Surface {
    fn show_weather(&mut self, view: &WeatherView);
    fn show_recent(&mut self, view: &RecentView);
    fn show_alert_info(&mut self, text: Option<&str>);
    fn show_unit_label(&mut self, label: &str);
    fn show_notices(&mut self, notices: &[Notice]);

    /// Flush pending changes after a batch of updates
    fn present(&mut self) {}
}

#[derive(Debug, Default)]
pub struct TerminalSurface {
    weather: Option<WeatherView>,
    recent: RecentView,
    alert_info: Option<String>,
    unit_label: String,
    notices: Vec<Notice>,
    dirty: bool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the surface for redraw on the next `present`
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Full text of the current display
    pub fn frame(&self) -> String {
        let mut out = String::new();
        let rule = style("─".repeat(44)).dim();

        out.push_str(&format!("{}\n", rule));
        match &self.weather {
            Some(view) => push_weather(&mut out, view),
            None => out.push_str(&format!("{}\n", style("No weather loaded yet").dim())),
        }

        out.push_str(&format!("{}\n", rule));
        out.push_str(&format!(
            "{}  unit {}",
            style("Recent").bold(),
            style(&self.unit_label).cyan()
        ));
        if let Some(info) = &self.alert_info {
            out.push_str(&format!("  {}", style(info).yellow()));
        }
        out.push('\n');
        if self.recent.is_empty() {
            out.push_str(&format!("  {}\n", style(NO_RECENT).dim()));
        }
        for (i, name) in self.recent.entries.iter().enumerate() {
            out.push_str(&format!("  [{}] {}\n", i + 1, name));
        }

        if !self.notices.is_empty() {
            out.push_str(&format!("{}\n", rule));
            for notice in &self.notices {
                out.push_str(&format!(
                    "{} {}  {}\n",
                    severity_marker(notice.severity),
                    notice.message,
                    style(format!("(dismiss {})", notice.id)).dim()
                ));
            }
        }
        out
    }
}

fn push_weather(out: &mut String, view: &WeatherView) {
    out.push_str(&format!(
        "{} {}  {}\n",
        view.icon,
        themed(view.theme, &view.location).bold(),
        style(format!("local time {}", view.local_time)).dim()
    ));
    out.push_str(&format!(
        "   {}  {}\n",
        themed(view.theme, &view.temperature).bold(),
        view.description
    ));
    out.push_str(&format!(
        "   {}   Precip: {}   Min/Max: {}\n",
        view.wind, view.precipitation, view.min_max
    ));
    for card in &view.forecast {
        out.push_str(&format!(
            "   {:<4} {} {:<14} {}\n",
            card.weekday, card.icon, card.description, card.high_low
        ));
    }
}

fn themed<D>(theme: Theme, value: D) -> StyledObject<D> {
    match theme {
        Theme::Sunny => style(value).yellow(),
        Theme::Cloudy => style(value).white(),
        Theme::Rainy => style(value).blue(),
        Theme::Snow => style(value).cyan(),
        Theme::Storm => style(value).magenta(),
    }
}

fn severity_marker(severity: Severity) -> StyledObject<&'static str> {
    match severity {
        Severity::Info => style("ℹ").blue().bold(),
        Severity::Warn => style("⚠").yellow().bold(),
        Severity::Error => style("✗").red().bold(),
    }
}

impl Surface for TerminalSurface {
    fn show_weather(&mut self, view: &WeatherView) {
        self.weather = Some(view.clone());
        self.dirty = true;
    }

    fn show_recent(&mut self, view: &RecentView) {
        self.recent = view.clone();
        self.dirty = true;
    }

    fn show_alert_info(&mut self, text: Option<&str>) {
        self.alert_info = text.map(str::to_string);
        self.dirty = true;
    }

    fn show_unit_label(&mut self, label: &str) {
        self.unit_label = label.to_string();
        self.dirty = true;
    }

    fn show_notices(&mut self, notices: &[Notice]) {
        self.notices = notices.to_vec();
        self.dirty = true;
    }

    fn present(&mut self) {
        if std::mem::take(&mut self.dirty) {
            print!("{}", self.frame());
        }
    }
}
