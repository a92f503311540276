use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fallback display name used wherever a check-in name is empty or blank.
pub const FALLBACK_NAME: &str = "Dad";

/// The five ordered mood ranges over the 0–100 grump scale.
///
/// Band thresholds are inclusive upper bounds (≤20, ≤40, ≤60, ≤80, >80) and
/// partition the scale with no overlap and no gap. Every level-keyed lookup
/// in this crate goes through [`MoodBand::of`] so the thresholds live in
/// exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodBand {
    /// Levels 0–20
    Sunny,
    /// Levels 21–40
    MildClouds,
    /// Levels 41–60
    GrumpAdjacent,
    /// Levels 61–80
    StormWatch,
    /// Levels 81–100
    FullCurmudgeon,
}

impl MoodBand {
    /// All bands from happiest to grumpiest.
    pub const ALL: [MoodBand; 5] = [
        MoodBand::Sunny,
        MoodBand::MildClouds,
        MoodBand::GrumpAdjacent,
        MoodBand::StormWatch,
        MoodBand::FullCurmudgeon,
    ];

    /// Map a level to its band.
    ///
    /// Total over all integers: values below the scale land in `Sunny`,
    /// values above it in `FullCurmudgeon`. Callers are expected to clamp to
    /// [0, 100] before display, but nothing here requires it.
    pub fn of(level: i32) -> Self {
        if level <= 20 {
            MoodBand::Sunny
        } else if level <= 40 {
            MoodBand::MildClouds
        } else if level <= 60 {
            MoodBand::GrumpAdjacent
        } else if level <= 80 {
            MoodBand::StormWatch
        } else {
            MoodBand::FullCurmudgeon
        }
    }

    /// Position of this band on the scale, 0 (happiest) through 4 (grumpiest).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Face emoji shown for this band.
    pub fn face(self) -> &'static str {
        match self {
            MoodBand::Sunny => "😄",
            MoodBand::MildClouds => "🙂",
            MoodBand::GrumpAdjacent => "😐",
            MoodBand::StormWatch => "😠",
            MoodBand::FullCurmudgeon => "😡",
        }
    }

    /// Short mood word used inside message templates.
    pub fn label(self) -> &'static str {
        match self {
            MoodBand::Sunny => "happy",
            MoodBand::MildClouds => "slightly grumpy",
            MoodBand::GrumpAdjacent => "grumpy",
            MoodBand::StormWatch => "very grumpy",
            MoodBand::FullCurmudgeon => "extremely grumpy",
        }
    }

    /// Title + subtitle mood text for this band.
    pub fn descriptor(self) -> Descriptor {
        match self {
            MoodBand::Sunny => Descriptor {
                title: "Sunny disposition",
                subtitle: "Whistling while making coffee.",
            },
            MoodBand::MildClouds => Descriptor {
                title: "Mild clouds",
                subtitle: "May require one dad joke to clear.",
            },
            MoodBand::GrumpAdjacent => Descriptor {
                title: "Grump adjacent",
                subtitle: "Proceed with snacks and small talk.",
            },
            MoodBand::StormWatch => Descriptor {
                title: "Storm watch",
                subtitle: "Caffeine before conversation recommended.",
            },
            MoodBand::FullCurmudgeon => Descriptor {
                title: "Full curmudgeon",
                subtitle: "Deploy hugs, retreat cautiously.",
            },
        }
    }

    /// Presentation palette for this band.
    pub fn tone(self) -> &'static Tone {
        &TONES[self.index()]
    }

    fn base_recommendation(self) -> &'static str {
        match self {
            MoodBand::Sunny => "No notes—lead with a smile and maybe a quick win for the day.",
            MoodBand::MildClouds => "Open with a light check-in and one (1) tasteful dad joke.",
            MoodBand::GrumpAdjacent => "Start with small talk; bring snacks or a coffee assist.",
            MoodBand::StormWatch => "Give space, deliver caffeine, circle back with empathy.",
            MoodBand::FullCurmudgeon => {
                "Proceed with maximum kindness. Coffee and a hug are your best bets."
            }
        }
    }
}

impl fmt::Display for MoodBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The {title, subtitle} pair of human-readable mood text for a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl Descriptor {
    /// Single-line form used for screen-reader announcements.
    pub fn announcement(&self) -> String {
        format!("{}. {}", self.title, self.subtitle)
    }
}

/// Color family of a band's palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hue {
    Green,
    Lime,
    Amber,
    Orange,
    Red,
}

impl Hue {
    /// Lowercase color name, e.g. for logging or CSS hooks.
    pub fn name(self) -> &'static str {
        match self {
            Hue::Green => "green",
            Hue::Lime => "lime",
            Hue::Amber => "amber",
            Hue::Orange => "orange",
            Hue::Red => "red",
        }
    }
}

/// Presentation palette for one band.
///
/// Class entries are utility-class strings consumed opaquely by a web host;
/// `track` and `thumb_border` are raw hex colors for slider styling. The
/// whole record is fixed data keyed by [`Hue`], never computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tone {
    pub hue: Hue,
    pub text: &'static str,
    pub track: &'static str,
    pub thumb_border: &'static str,
    pub bg_from: &'static str,
    pub bg_to: &'static str,
    pub pill_bg: &'static str,
    pub pill_text: &'static str,
    pub pill_border: &'static str,
    pub btn_bg: &'static str,
    pub btn_text: &'static str,
    pub btn_border: &'static str,
}

/// One palette per band, in band order.
static TONES: [Tone; 5] = [
    Tone {
        hue: Hue::Green,
        text: "text-green-800 dark:text-green-300",
        track: "#86efac",
        thumb_border: "#22c55e",
        bg_from: "from-green-100 dark:from-green-950",
        bg_to: "to-emerald-100 dark:to-emerald-950",
        pill_bg: "bg-green-100/80 dark:bg-green-900/40",
        pill_text: "text-green-800 dark:text-green-200",
        pill_border: "border-green-300/70 dark:border-green-700/60",
        btn_bg: "bg-green-600",
        btn_text: "text-white",
        btn_border: "border-green-700",
    },
    Tone {
        hue: Hue::Lime,
        text: "text-lime-800 dark:text-lime-300",
        track: "#bef264",
        thumb_border: "#84cc16",
        bg_from: "from-lime-100 dark:from-lime-950",
        bg_to: "to-amber-100 dark:to-amber-950",
        pill_bg: "bg-lime-100/80 dark:bg-lime-900/40",
        pill_text: "text-lime-800 dark:text-lime-200",
        pill_border: "border-lime-300/70 dark:border-lime-700/60",
        btn_bg: "bg-lime-600",
        btn_text: "text-white",
        btn_border: "border-lime-700",
    },
    Tone {
        hue: Hue::Amber,
        text: "text-amber-800 dark:text-amber-300",
        track: "#fcd34d",
        thumb_border: "#f59e0b",
        bg_from: "from-amber-100 dark:from-amber-950",
        bg_to: "to-orange-100 dark:to-orange-950",
        pill_bg: "bg-amber-100/80 dark:bg-amber-900/40",
        pill_text: "text-amber-800 dark:text-amber-200",
        pill_border: "border-amber-300/70 dark:border-amber-700/60",
        btn_bg: "bg-amber-600",
        btn_text: "text-white",
        btn_border: "border-amber-700",
    },
    Tone {
        hue: Hue::Orange,
        text: "text-orange-800 dark:text-orange-300",
        track: "#fdba74",
        thumb_border: "#f97316",
        bg_from: "from-orange-100 dark:from-orange-950",
        bg_to: "to-red-100 dark:to-red-950",
        pill_bg: "bg-orange-100/80 dark:bg-orange-900/40",
        pill_text: "text-orange-800 dark:text-orange-200",
        pill_border: "border-orange-300/70 dark:border-orange-700/60",
        btn_bg: "bg-orange-600",
        btn_text: "text-white",
        btn_border: "border-orange-700",
    },
    Tone {
        hue: Hue::Red,
        text: "text-red-800 dark:text-red-300",
        track: "#fca5a5",
        thumb_border: "#ef4444",
        bg_from: "from-rose-100 dark:from-rose-950",
        bg_to: "to-red-100 dark:to-red-950",
        pill_bg: "bg-red-100/80 dark:bg-red-900/40",
        pill_text: "text-red-800 dark:text-red-200",
        pill_border: "border-red-300/70 dark:border-red-700/60",
        btn_bg: "bg-red-600",
        btn_text: "text-white",
        btn_border: "border-red-700",
    },
];

/// Face emoji for a level.
pub fn face_for(level: i32) -> &'static str {
    MoodBand::of(level).face()
}

/// Mood word for a level.
pub fn label_for(level: i32) -> &'static str {
    MoodBand::of(level).label()
}

/// Title + subtitle mood text for a level.
pub fn descriptor_for(level: i32) -> Descriptor {
    MoodBand::of(level).descriptor()
}

/// Presentation palette for a level.
pub fn tone_for(level: i32) -> &'static Tone {
    MoodBand::of(level).tone()
}

const ZERO_CUP_NOTE: &str = " (Note: zero cups detected—espresso diplomacy advised.)";
const SATURATION_NOTE: &str = " (Caution: caffeine saturation; avoid rapid-fire questions.)";

/// Advisory text for a level, annotated by cup count.
///
/// The zero-cup check runs before the saturation check; with cups capped at
/// 4 by hosts the two can never both hold, but if the cup domain ever
/// widens, the first check wins.
pub fn recommendation_for(level: i32, cups: u32) -> String {
    let mut text = MoodBand::of(level).base_recommendation().to_string();
    if cups == 0 {
        text.push_str(ZERO_CUP_NOTE);
    } else if cups >= 3 {
        text.push_str(SATURATION_NOTE);
    }
    text
}

/// Resolve a display name, falling back to [`FALLBACK_NAME`] when the given
/// name is empty or whitespace-only.
pub fn display_name(name: &str) -> &str {
    if name.trim().is_empty() {
        FALLBACK_NAME
    } else {
        name
    }
}

/// "1 cup" / "n cups" phrasing used in message templates.
pub fn cup_text(cups: u32) -> String {
    format!("{} cup{}", cups, if cups == 1 { "" } else { "s" })
}

/// Inputs for building the share message templates.
///
/// `url` is consumed as an opaque string: no validation or escaping happens
/// here. Hosts are responsible for any encoding needed at their transport
/// boundary (e.g. percent-encoding an `sms:` body).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageContext {
    pub level: i32,
    pub cups: u32,
    pub name: String,
    pub url: String,
}

/// The three pre-written share/SMS text variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageTemplates {
    pub playful: String,
    pub straight: String,
    pub emoji: String,
}

impl MessageTemplates {
    /// The template text for a given style.
    pub fn get(&self, style: MessageStyle) -> &str {
        match style {
            MessageStyle::Playful => &self.playful,
            MessageStyle::Straight => &self.straight,
            MessageStyle::Emoji => &self.emoji,
        }
    }
}

/// Build the three message templates for a check-in.
pub fn build_messages(context: &MessageContext) -> MessageTemplates {
    let who = display_name(&context.name);
    let label = label_for(context.level);
    let cup_text = cup_text(context.cups);
    MessageTemplates {
        playful: format!(
            "Morning {}! Quick *grump check*: are we at {}? I logged {} ☕ so far. Slide to report in: {}",
            who, label, cup_text, context.url
        ),
        straight: format!(
            "Hey {}, where’s your grump factor today (0–100)? Slide and tell me: {}",
            who, context.url
        ),
        emoji: format!("Grump factor today? 👉 😄–🙂–😐–😠–😡  Slide: {}", context.url),
    }
}

/// Headline text handed to a native share sheet alongside the link.
pub fn share_headline(name: &str, url: &str) -> String {
    format!(
        "Where’s your grump factor today, {}? Slide to rate: {}",
        display_name(name),
        url
    )
}

/// Which message template a host sends by default for a given level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageStyle {
    Playful,
    Straight,
    Emoji,
}

impl MessageStyle {
    /// Auto-select a style for a level.
    ///
    /// A coarser 3-way split (≤40, ≤80, above) than the five mood bands;
    /// 40 and 80 are the only edges the two partitions share.
    pub fn for_level(level: i32) -> Self {
        if level <= 40 {
            MessageStyle::Playful
        } else if level <= 80 {
            MessageStyle::Straight
        } else {
            MessageStyle::Emoji
        }
    }

    /// Lowercase style name.
    pub fn name(self) -> &'static str {
        match self {
            MessageStyle::Playful => "playful",
            MessageStyle::Straight => "straight",
            MessageStyle::Emoji => "emoji",
        }
    }
}

impl fmt::Display for MessageStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MessageStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "playful" => Ok(MessageStyle::Playful),
            "straight" => Ok(MessageStyle::Straight),
            "emoji" => Ok(MessageStyle::Emoji),
            other => Err(ParseStyleError {
                given: other.to_string(),
            }),
        }
    }
}

/// Error for an unrecognized message style name.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseStyleError {
    pub given: String,
}

impl fmt::Display for ParseStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown message style '{}' (expected playful, straight, or emoji)",
            self.given
        )
    }
}

impl std::error::Error for ParseStyleError {}

/// Everything a host re-renders after a state change, derived in one call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedMood {
    pub band: MoodBand,
    pub face: &'static str,
    pub label: &'static str,
    pub descriptor: Descriptor,
    pub recommendation: String,
    pub tone: &'static Tone,
}

/// Recompute all derived content for a level and cup count.
///
/// Cheap and idempotent; hosts call this on every state transition instead
/// of caching pieces of it.
pub fn derive_mood(level: i32, cups: u32) -> DerivedMood {
    let band = MoodBand::of(level);
    DerivedMood {
        band,
        face: band.face(),
        label: band.label(),
        descriptor: band.descriptor(),
        recommendation: recommendation_for(level, cups),
        tone: band.tone(),
    }
}
