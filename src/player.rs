use crate::audio::{AudioElement, MEDIA_EVENTS};
use crate::core::{
    format_time, AudioController, ControlsMemo, MediaResource, PlaybackState, TrackInfo,
};
use crate::dom::{self, EventSubscription};
use crate::input;
use crate::theme;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

type Controller = Rc<RefCell<AudioController<AudioElement>>>;

/// Elements that mirror `PlaybackState`.
struct PlayerView {
    fill: web::HtmlElement,
    elapsed: web::HtmlElement,
    total: web::HtmlElement,
    play: web::HtmlElement,
    mute: web::HtmlElement,
    controls: ControlsMemo,
}

impl PlayerView {
    fn refresh(&self, state: PlaybackState) {
        self.refresh_progress(state);
        if self.controls.update(&state) {
            self.refresh_controls(state);
        }
    }

    fn refresh_progress(&self, state: PlaybackState) {
        _ = self
            .fill
            .style()
            .set_property("width", &format!("{:.2}%", state.progress_percent()));
        self.elapsed
            .set_text_content(Some(&format_time(state.elapsed_secs())));
        self.total
            .set_text_content(Some(&format_time(state.duration_secs)));
    }

    // Swapping icons under the pointer can swallow a click; only called on change.
    fn refresh_controls(&self, state: PlaybackState) {
        let cl = self.play.class_list();
        if state.is_playing {
            _ = cl.add_1("playing");
            self.play.set_inner_html(theme::ICON_PAUSE);
            _ = self.play.set_attribute("aria-label", "Pause");
        } else {
            _ = cl.remove_1("playing");
            self.play.set_inner_html(theme::ICON_PLAY);
            _ = self.play.set_attribute("aria-label", "Play");
        }
        if state.is_muted {
            self.mute.set_inner_html(theme::ICON_MUTED);
            _ = self.mute.set_attribute("aria-label", "Unmute");
        } else {
            self.mute.set_inner_html(theme::ICON_VOLUME);
            _ = self.mute.set_attribute("aria-label", "Mute");
        }
    }
}

/// Player widget: track info, seekable progress bar, time readout and
/// play/mute/download controls for one looping track.
pub struct Player {
    root: web::HtmlElement,
    controller: Controller,
    subscriptions: Vec<EventSubscription>,
}

impl Player {
    pub fn mount(
        document: &web::Document,
        parent: &web::Node,
        track: &TrackInfo,
        intro_style: &str,
    ) -> anyhow::Result<Self> {
        let root = dom::append(document, parent, "div", "player fade-in-up")?;
        dom::set_style(&root, intro_style);

        let media = AudioElement::new(&track.src)?;
        root.append_child(media.element())
            .map_err(|e| anyhow::anyhow!("append <audio>: {:?}", e))?;

        let info = dom::append(document, &root, "div", "track-info")?;
        dom::append(document, &info, "h3", "track-title")?.set_text_content(Some(&track.title));
        dom::append(document, &info, "p", "track-artist")?.set_text_content(Some(&track.artist));

        let progress = dom::append(document, &root, "div", "progress")?;
        let fill = dom::append(document, &progress, "div", "progress-fill")?;

        let times = dom::append(document, &root, "div", "times")?;
        let elapsed = dom::append(document, &times, "span", "")?;
        let total = dom::append(document, &times, "span", "")?;

        let controls = dom::append(document, &root, "div", "controls")?;
        let mute = dom::append(document, &controls, "button", "control control-mute")?;
        let play = dom::append(document, &controls, "button", "control control-play")?;
        let download = dom::append(document, &controls, "a", "control control-download")?;
        if let Some(a) = download.dyn_ref::<web::HtmlAnchorElement>() {
            a.set_href(&track.src);
            a.set_download(&track.download_filename());
        }
        download.set_inner_html(theme::ICON_DOWNLOAD);
        _ = download.set_attribute("aria-label", "Download");

        let view = Rc::new(PlayerView {
            fill,
            elapsed,
            total,
            play: play.clone(),
            mute: mute.clone(),
            controls: ControlsMemo::default(),
        });
        let controller: Controller =
            Rc::new(RefCell::new(AudioController::with_media(media.clone())));
        view.refresh(controller.borrow().state());

        let mut subscriptions = Vec::with_capacity(3 + MEDIA_EVENTS.len());

        {
            let controller = controller.clone();
            let view = view.clone();
            subscriptions.push(EventSubscription::listen(&play, "click", move |_| {
                let state = {
                    let mut c = controller.borrow_mut();
                    c.toggle_play();
                    c.state()
                };
                log::info!("[player] playing={}", state.is_playing);
                view.refresh(state);
            })?);
        }
        {
            let controller = controller.clone();
            let view = view.clone();
            subscriptions.push(EventSubscription::listen(&mute, "click", move |_| {
                let state = {
                    let mut c = controller.borrow_mut();
                    c.toggle_mute();
                    c.state()
                };
                log::info!("[player] muted={}", state.is_muted);
                view.refresh(state);
            })?);
        }
        {
            let controller = controller.clone();
            let track_el = progress.clone();
            subscriptions.push(EventSubscription::listen(&progress, "click", move |ev| {
                let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
                    return;
                };
                if let Some(fraction) = input::click_fraction_x(mouse, &track_el) {
                    controller.borrow_mut().seek(fraction);
                }
            })?);
        }
        for event in MEDIA_EVENTS {
            let controller = controller.clone();
            let view = view.clone();
            let source = media.clone();
            subscriptions.push(EventSubscription::listen(media.element(), event, move |ev| {
                let Some(media_event) = source.read_event(&ev.type_()) else {
                    return;
                };
                let state = {
                    let mut c = controller.borrow_mut();
                    c.handle_event(media_event);
                    c.state()
                };
                view.refresh(state);
            })?);
        }

        log::info!("[player] mounted \"{}\" by {} ({})", track.title, track.artist, track.src);
        Ok(Self {
            root,
            controller,
            subscriptions,
        })
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        // Listeners go first so nothing fires against a detached element.
        self.subscriptions.clear();
        if let Some(media) = self.controller.borrow_mut().detach() {
            media.pause();
        }
        self.root.remove();
        log::info!("[player] unmounted");
    }
}
