use crate::core::{MediaEvent, MediaResource};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `<audio>` element driven by the player controller.
#[derive(Clone)]
pub struct AudioElement(web::HtmlAudioElement);

impl AudioElement {
    /// Looping element for `src`; only metadata is preloaded.
    pub fn new(src: &str) -> anyhow::Result<Self> {
        let el = web::HtmlAudioElement::new_with_src(src)
            .map_err(|e| anyhow::anyhow!("HtmlAudioElement error: {:?}", e))?;
        el.set_loop(true);
        el.set_preload("metadata");
        Ok(Self(el))
    }

    pub fn element(&self) -> &web::HtmlAudioElement {
        &self.0
    }

    /// Translate a DOM media event into a controller event.
    pub fn read_event(&self, event_type: &str) -> Option<MediaEvent> {
        match event_type {
            "timeupdate" => Some(MediaEvent::TimeUpdate {
                current_secs: self.0.current_time(),
            }),
            "loadedmetadata" => Some(MediaEvent::LoadedMetadata {
                duration_secs: self.0.duration(),
            }),
            "ended" => Some(MediaEvent::Ended),
            _ => None,
        }
    }
}

impl MediaResource for AudioElement {
    fn play(&self) {
        match self.0.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[player] play request rejected: {:?}", e);
                }
            }),
            Err(e) => log::warn!("[player] play error: {:?}", e),
        }
    }

    fn pause(&self) {
        if let Err(e) = self.0.pause() {
            log::warn!("[player] pause error: {:?}", e);
        }
    }

    fn set_muted(&self, muted: bool) {
        self.0.set_muted(muted);
    }

    fn set_current_time(&self, secs: f64) {
        self.0.set_current_time(secs);
    }
}

/// Media events the player subscribes to.
pub const MEDIA_EVENTS: [&str; 3] = ["timeupdate", "loadedmetadata", "ended"];
