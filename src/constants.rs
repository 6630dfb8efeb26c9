/// Page wiring constants: element ids, configuration attributes and copy.
///
/// Everything the page reads from its host document is named here so the
/// assembler and player never carry string literals of their own.
// Host element that receives the page; `<body>` is used when it is missing.
pub const HOST_ELEMENT_ID: &str = "app";
pub const STYLE_ELEMENT_ID: &str = "dream-page-style";

// Optional overrides read from the host element
pub const ATTR_TRACK_SRC: &str = "data-track-src";
pub const ATTR_TRACK_TITLE: &str = "data-track-title";
pub const ATTR_TRACK_ARTIST: &str = "data-track-artist";
pub const ATTR_BACKGROUND: &str = "data-background";

pub const DEFAULT_BACKGROUND_SRC: &str = "assets/calm-background.jpg";

// Copy
pub const HEADLINE_LEAD: &str = "Find Your";
pub const HEADLINE_ACCENT: &str = "Dream";
pub const TAGLINE: &str = "Breathe. Listen. Be present.";
pub const BREATHE_LABEL: &str = "BREATHE";
pub const FOOTER_TEXT: &str = "A moment of peace";

// Breathing rings: (class, animation delay in seconds)
pub const BREATHING_RINGS: [(&str, f32); 3] = [
    ("ring ring-outer", 0.0),
    ("ring ring-middle", 0.2),
    ("ring ring-core", 0.4),
];

// Staggered entrance delays (seconds)
pub const INTRO_DELAY_TAGLINE: f32 = 0.2;
pub const INTRO_DELAY_BREATHING: f32 = 0.4;
pub const INTRO_DELAY_PLAYER: f32 = 0.6;
