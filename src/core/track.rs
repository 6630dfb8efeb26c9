pub const DEFAULT_TRACK_SRC: &str = "assets/dreamer-by-ava.mp3";
pub const DEFAULT_TITLE: &str = "Dreamer";
pub const DEFAULT_ARTIST: &str = "Ava";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackInfo {
    pub src: String,
    pub title: String,
    pub artist: String,
}

impl Default for TrackInfo {
    fn default() -> Self {
        Self::new(DEFAULT_TRACK_SRC)
    }
}

impl TrackInfo {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            title: DEFAULT_TITLE.to_string(),
            artist: DEFAULT_ARTIST.to_string(),
        }
    }

    /// Apply optional overrides; `None` keeps the current value.
    pub fn with_overrides(
        mut self,
        src: Option<String>,
        title: Option<String>,
        artist: Option<String>,
    ) -> Self {
        if let Some(s) = src {
            self.src = s;
        }
        if let Some(t) = title {
            self.title = t;
        }
        if let Some(a) = artist {
            self.artist = a;
        }
        self
    }

    /// Suggested filename for the download affordance.
    pub fn download_filename(&self) -> String {
        format!("{} - {}.mp3", self.title, self.artist)
    }
}
