//! Page assembler: background layers, particle overlay, headline, breathing
//! circle, player and footer. The particle overlay and the player never
//! exchange data; the page only owns both for teardown.

use crate::constants::*;
use crate::core::{ParticleField, TrackInfo};
use crate::player::Player;
use crate::{dom, render, theme};
use web_sys as web;

pub struct Page {
    root: web::HtmlElement,
    // Held for the session; the overlay is static after mount.
    field: ParticleField,
    player: Option<Player>,
}

/// Track settings from the host element's data attributes.
pub fn track_from_host(host: &web::Element) -> TrackInfo {
    TrackInfo::default().with_overrides(
        dom::data_attr(host, ATTR_TRACK_SRC),
        dom::data_attr(host, ATTR_TRACK_TITLE),
        dom::data_attr(host, ATTR_TRACK_ARTIST),
    )
}

fn host_element(document: &web::Document) -> anyhow::Result<web::Element> {
    if let Some(el) = document.get_element_by_id(HOST_ELEMENT_ID) {
        return Ok(el);
    }
    log::warn!("[page] #{} not found, mounting on <body>", HOST_ELEMENT_ID);
    document
        .body()
        .map(Into::into)
        .ok_or_else(|| anyhow::anyhow!("no body"))
}

impl Page {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        theme::install(document)?;
        let host = host_element(document)?;
        let track = track_from_host(&host);
        let background = dom::data_attr(&host, ATTR_BACKGROUND)
            .unwrap_or_else(|| DEFAULT_BACKGROUND_SRC.to_string());

        let root = dom::append(document, &host, "div", "page")?;

        let bg = dom::append(document, &root, "div", "layer background")?;
        dom::set_style(&bg, &format!("background-image:url(\"{}\");", background));
        dom::append(document, &root, "div", "layer shade-up")?;
        dom::append(document, &root, "div", "layer shade-down")?;
        dom::append(document, &root, "div", "layer vignette")?;

        let field = ParticleField::generate_from_entropy();
        render::mount_particles(document, &root, &field)?;

        let content = dom::append(document, &root, "div", "content")?;
        mount_intro(document, &content)?;
        mount_breathing(document, &content)?;
        let intro_style = theme::intro_delay(INTRO_DELAY_PLAYER);
        let player = Player::mount(document, &content, &track, &intro_style)?;
        dom::append(document, &content, "div", "footer")?.set_text_content(Some(FOOTER_TEXT));

        log::info!("[page] mounted");
        Ok(Self {
            root,
            field,
            player: Some(player),
        })
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}

fn mount_intro(document: &web::Document, parent: &web::Node) -> anyhow::Result<()> {
    let intro = dom::append(document, parent, "div", "intro fade-in-up")?;
    let headline = dom::append(document, &intro, "h1", "headline")?;
    headline.set_text_content(Some(HEADLINE_LEAD));
    let accent = dom::append(document, &headline, "span", "headline-accent")?;
    accent.set_text_content(Some(HEADLINE_ACCENT));
    let tagline = dom::append(document, &intro, "p", "tagline fade-in-up")?;
    tagline.set_text_content(Some(TAGLINE));
    dom::set_style(&tagline, &theme::intro_delay(INTRO_DELAY_TAGLINE));
    Ok(())
}

fn mount_breathing(document: &web::Document, parent: &web::Node) -> anyhow::Result<()> {
    let wrap = dom::append(document, parent, "div", "breathing fade-in-up")?;
    dom::set_style(&wrap, &theme::intro_delay(INTRO_DELAY_BREATHING));
    for (class, delay) in BREATHING_RINGS {
        let ring = dom::append(document, &wrap, "div", class)?;
        dom::set_style(&ring, &theme::intro_delay(delay));
    }
    dom::append(document, &wrap, "span", "breathe-label")?.set_text_content(Some(BREATHE_LABEL));
    Ok(())
}

impl Drop for Page {
    fn drop(&mut self) {
        // Player first: its listeners must be gone before the nodes are.
        drop(self.player.take());
        self.root.remove();
        log::info!("[page] unmounted");
    }
}
