use std::cell::Cell;

/// Minimal surface of a playable media element.
pub trait MediaResource {
    fn play(&self);
    fn pause(&self);
    fn set_muted(&self, muted: bool);
    fn set_current_time(&self, secs: f64);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MediaEvent {
    /// Playback offset advanced.
    TimeUpdate { current_secs: f64 },
    /// Duration became known.
    LoadedMetadata { duration_secs: f64 },
    /// Playback reached the end of the track.
    Ended,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub is_muted: bool,
    /// Fraction of the track played, 0..=1.
    pub progress: f64,
    /// 0 until metadata arrives.
    pub duration_secs: f64,
}

impl PlaybackState {
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.progress * self.duration_secs
    }

    #[inline]
    pub fn progress_percent(&self) -> f64 {
        self.progress * 100.0
    }
}

/// Last rendered play/mute flags, so controls are only redrawn on change.
#[derive(Debug, Default)]
pub struct ControlsMemo {
    last: Cell<Option<(bool, bool)>>,
}

impl ControlsMemo {
    /// Record `state`; true when its play/mute flags differ from the last
    /// recorded ones (or nothing was recorded yet).
    pub fn update(&self, state: &PlaybackState) -> bool {
        let flags = Some((state.is_playing, state.is_muted));
        self.last.replace(flags) != flags
    }
}

pub struct AudioController<M: MediaResource> {
    media: Option<M>,
    state: PlaybackState,
}

impl<M: MediaResource> AudioController<M> {
    pub fn new() -> Self {
        Self {
            media: None,
            state: PlaybackState::default(),
        }
    }

    pub fn with_media(media: M) -> Self {
        let mut c = Self::new();
        c.attach(media);
        c
    }

    pub fn attach(&mut self, media: M) {
        self.media = Some(media);
    }

    /// Drop the resource reference; later intents become no-ops.
    pub fn detach(&mut self) -> Option<M> {
        self.media.take()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Play state is set optimistically; a rejected play request is not
    /// reflected here.
    pub fn toggle_play(&mut self) {
        let Some(media) = &self.media else {
            return;
        };
        if self.state.is_playing {
            media.pause();
        } else {
            media.play();
        }
        self.state.is_playing = !self.state.is_playing;
    }

    pub fn toggle_mute(&mut self) {
        let Some(media) = &self.media else {
            return;
        };
        self.state.is_muted = !self.state.is_muted;
        media.set_muted(self.state.is_muted);
    }

    /// Seek to a fraction of the track. Out-of-range fractions are clamped;
    /// nothing happens while the duration is unknown.
    pub fn seek(&mut self, fraction: f64) {
        let Some(media) = &self.media else {
            return;
        };
        if !fraction.is_finite() || self.state.duration_secs <= 0.0 {
            return;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        media.set_current_time(fraction * self.state.duration_secs);
    }

    pub fn handle_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate { current_secs } => {
                let duration = self.state.duration_secs;
                if duration > 0.0 {
                    let p = current_secs / duration;
                    if p.is_finite() {
                        self.state.progress = p.clamp(0.0, 1.0);
                    }
                }
            }
            MediaEvent::LoadedMetadata { duration_secs } => {
                self.state.duration_secs = if duration_secs.is_finite() && duration_secs > 0.0 {
                    duration_secs
                } else {
                    0.0
                };
            }
            MediaEvent::Ended => {
                self.state.is_playing = false;
                self.state.progress = 0.0;
            }
        }
    }
}
