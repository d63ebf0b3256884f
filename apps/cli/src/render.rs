//! Text rendering of the calculator screen.
//!
//! ```text
//! Bill Amount
//!   $ 123.5                      $123.50
//! Split Bill
//!   [-]  4 people  [+]
//! Tip: 20%   presets: 10% [15%] 18% 20% 25%
//! Summary
//!   Tip Amount                    $24.70
//!   ...
//! ```
//!
//! The compact layout drops the padding and the preset strip. With a theme,
//! the split buttons take the theme's button colors and the per-person row
//! the primary color.

use std::fmt::Write;

use crossterm::style::{style, Color, Stylize};
use tipcalc_core::split_selector::unit_label;
use tipcalc_core::theme::parse_hex_color;
use tipcalc_core::{Haptics, Layout, Theme, TipCalculator};

const REGULAR_WIDTH: usize = 40;
const COMPACT_WIDTH: usize = 30;

/// Renders the whole screen. `theme` is `None` for plain text.
pub fn render_screen<H: Haptics + Clone>(
    calc: &TipCalculator<H>,
    layout: Layout,
    theme: Option<&Theme>,
) -> String {
    let (width, indent) = match layout {
        Layout::Regular => (REGULAR_WIDTH, "  "),
        Layout::Compact => (COMPACT_WIDTH, ""),
    };
    let paint = Painter { theme };
    let mut out = String::new();

    // Bill
    let input = calc.bill_input();
    let field = input.placeholder().unwrap_or(input.text());
    let preview = input.formatted_value().unwrap_or_default();
    let _ = writeln!(out, "Bill Amount");
    let _ = writeln!(out, "{}", row(indent, &format!("$ {field}"), &preview, width));

    // Split
    let split = calc.split();
    let selector = calc.split_selector();
    let can_decrement = selector.can_decrement(split);
    let can_increment = selector.can_increment(split);
    let minus = paint.step_button(if can_decrement { "[-]" } else { "[ ]" }, can_decrement);
    let plus = paint.step_button(if can_increment { "[+]" } else { "[ ]" }, can_increment);
    let _ = writeln!(out, "Split Bill");
    match selector.edit_value() {
        Some(text) => {
            let _ = writeln!(out, "{indent}{minus}  editing: {text}_  {plus}");
        }
        None => {
            let _ = writeln!(out, "{indent}{minus}  {} {}  {plus}", split, unit_label(split));
        }
    }

    // Tip
    let _ = write!(out, "Tip: {}", calc.tip_rate());
    if layout == Layout::Regular {
        let presets: Vec<String> = TipCalculator::<H>::presets()
            .map(|rate| {
                if rate == calc.tip_rate() {
                    format!("[{rate}]")
                } else {
                    rate.to_string()
                }
            })
            .collect();
        let _ = write!(out, "   presets: {}", presets.join(" "));
    }
    let _ = writeln!(out);

    // Summary
    let summary = calc.summary();
    let _ = writeln!(out, "{}", summary.title);
    for line in &summary.rows {
        if line.emphasized {
            let text = row(indent, &format!("* {}", line.label), &line.value, width);
            let _ = writeln!(out, "{}", paint.emphasis(&text));
        } else {
            let _ = writeln!(out, "{}", row(indent, &line.label, &line.value, width));
        }
    }

    out
}

/// Left label, right-aligned value.
fn row(indent: &str, label: &str, value: &str, width: usize) -> String {
    let used = indent.chars().count() + label.chars().count();
    let pad = width.saturating_sub(used).max(value.chars().count() + 1);
    format!("{indent}{label}{value:>pad$}")
}

/// Applies theme colors; passes text through untouched without a theme.
struct Painter<'a> {
    theme: Option<&'a Theme>,
}

impl Painter<'_> {
    fn step_button(&self, label: &str, enabled: bool) -> String {
        match self.theme {
            Some(theme) => {
                let colors = theme.step_button(enabled);
                style(label)
                    .with(terminal_color(colors.foreground))
                    .on(terminal_color(colors.background))
                    .to_string()
            }
            None => label.to_string(),
        }
    }

    fn emphasis(&self, text: &str) -> String {
        match self.theme {
            Some(theme) => style(text)
                .with(terminal_color(&theme.colors.primary))
                .bold()
                .to_string(),
            None => text.to_string(),
        }
    }
}

/// Theme hex to a 24-bit terminal color; unparseable values fall back to the
/// terminal default.
fn terminal_color(hex: &str) -> Color {
    match parse_hex_color(hex) {
        Some((r, g, b)) => Color::Rgb { r, g, b },
        None => Color::Reset,
    }
}
