//! Terminal rendering for check-in snapshots.

use colored::{Color, Colorize};

use shared::{cup_text, display_name, Hue, MessageStyle, MessageTemplates};

use crate::backend::domain::commands::check_in::CheckInResult;
use crate::backend::domain::models::check_in::MAX_CUPS;

/// Terminal color for a palette hue, matching the thumb-border shades.
fn hue_color(hue: Hue) -> Color {
    match hue {
        Hue::Green => Color::TrueColor {
            r: 34,
            g: 197,
            b: 94,
        },
        Hue::Lime => Color::TrueColor {
            r: 132,
            g: 204,
            b: 22,
        },
        Hue::Amber => Color::TrueColor {
            r: 245,
            g: 158,
            b: 11,
        },
        Hue::Orange => Color::TrueColor {
            r: 249,
            g: 115,
            b: 22,
        },
        Hue::Red => Color::TrueColor {
            r: 239,
            g: 68,
            b: 68,
        },
    }
}

/// Slider track as text, filled up to the current level.
fn meter(level: i32) -> String {
    let filled = (level.clamp(0, 100) / 5) as usize;
    format!(
        "[{}{}] {}/100",
        "█".repeat(filled),
        "░".repeat(20 - filled),
        level
    )
}

/// Cup row: filled cups then empty pots, like the five-slot picker.
fn cup_row(cups: u32) -> String {
    format!(
        "{}{}",
        "☕".repeat(cups as usize),
        "🫖".repeat(MAX_CUPS.saturating_sub(cups) as usize)
    )
}

/// Render the full check-in snapshot.
pub fn render_status(result: &CheckInResult) {
    let check_in = &result.check_in;
    let derived = &result.derived;
    let color = hue_color(derived.tone.hue);

    println!();
    println!(
        "  {}  {}",
        derived.face,
        derived.descriptor.title.color(color).bold()
    );
    println!("      {}", derived.descriptor.subtitle.dimmed());
    println!();
    println!("  {}", meter(check_in.level).color(color));
    println!();
    println!("  Checking on: {}", display_name(&check_in.name));
    println!(
        "  Coffee:      {} {}",
        cup_row(check_in.cups),
        cup_text(check_in.cups).dimmed()
    );
    println!(
        "  Mood:        {} ({})",
        derived.label,
        derived.tone.hue.name()
    );
    println!(
        "  Dark mode:   {}",
        if check_in.dark { "on" } else { "off" }
    );
    println!();
    println!("  Suggested approach: {}", derived.recommendation);
    println!();
}

/// Render the three message templates, marking the auto-selected one.
pub fn render_messages(templates: &MessageTemplates, selected: MessageStyle) {
    for style in [
        MessageStyle::Playful,
        MessageStyle::Straight,
        MessageStyle::Emoji,
    ] {
        let marker = if style == selected { "▸" } else { " " };
        println!();
        println!("{} {}", marker, style.name().bold());
        println!("  {}", templates.get(style));
    }
    println!();
}
