//! Colouring for `scan` output

use owo_colors::{OwoColorize, colors::css};
use supports_color::Stream;

/// Styles applied to the parts of a narrative listing.
///
/// Colour is only emitted when stdout supports it.
pub trait Colorize {
    /// The totals line
    fn success(&self) -> String;
    /// Requirement type names
    fn info(&self) -> String;
    /// Titles and other secondary text
    fn dim(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> Colorize for T {
    fn success(&self) -> String {
        styled(self.as_ref(), |s| s.fg::<css::Green>().to_string())
    }

    fn info(&self) -> String {
        styled(self.as_ref(), |s| s.fg::<css::LightBlue>().to_string())
    }

    fn dim(&self) -> String {
        styled(self.as_ref(), |s| s.dimmed().to_string())
    }
}

fn styled(text: &str, style: impl FnOnce(&str) -> String) -> String {
    if supports_color::on(Stream::Stdout).is_some() {
        style(text)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styling_keeps_the_text() {
        let owned = String::from("3 narratives");
        assert!(owned.success().contains("3 narratives"));
        assert!("feature".info().contains("feature"));
        assert!("Checkout".dim().contains("Checkout"));
    }
}
