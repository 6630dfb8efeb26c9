use crate::core::field::ParticleKind;
use crate::core::{overlay_glyphs, Glyph, ParticleField};
use crate::dom;
use web_sys as web;

fn mount_glyph(document: &web::Document, parent: &web::Node, glyph: &Glyph) -> anyhow::Result<()> {
    let el = dom::append(document, parent, "div", glyph.class)?;
    dom::set_style(&el, &glyph.style_text());
    for child in &glyph.children {
        mount_glyph(document, &el, child)?;
    }
    Ok(())
}

/// Build the full-viewport, non-interactive particle overlay under `parent`.
pub fn mount_particles(
    document: &web::Document,
    parent: &web::Node,
    field: &ParticleField,
) -> anyhow::Result<web::HtmlElement> {
    let overlay = dom::append(document, parent, "div", "particles")?;
    _ = overlay.set_attribute("aria-hidden", "true");
    let glyphs = overlay_glyphs(field);
    for glyph in &glyphs {
        mount_glyph(document, &overlay, glyph)?;
    }
    log::info!(
        "[page] dust={} stars={} sparkles={} fog={} glyphs={}",
        field.of_kind(ParticleKind::Dust).count(),
        field.of_kind(ParticleKind::Star).count(),
        field.of_kind(ParticleKind::Sparkle).count(),
        field.fog_layers().len(),
        glyphs.len()
    );
    Ok(overlay)
}
