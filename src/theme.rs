use crate::constants::STYLE_ELEMENT_ID;
use crate::dom;
use web_sys as web;

// Animations are driven by the browser; the page only sets durations/delays.
pub static STYLESHEET: &str = r#"
:root {
  --calm-deep: 222 47% 8%;
  --calm-mist: 210 40% 85%;
  --calm-ocean: 199 70% 55%;
  --calm-glow: 188 90% 75%;
  --calm-twilight: 262 55% 65%;
  --foreground: 210 40% 96%;
  --muted: 217 30% 25%;
  --muted-foreground: 215 20% 70%;
  --primary: 192 80% 60%;
}
.page { position: relative; min-height: 100vh; overflow: hidden; background: hsl(var(--calm-deep)); color: hsl(var(--foreground)); font-family: system-ui, sans-serif; }
.layer { position: absolute; inset: 0; }
.background { background-size: cover; background-position: center; background-repeat: no-repeat; }
.shade-up { background: linear-gradient(to top, hsl(var(--calm-deep)), transparent, hsl(var(--calm-deep) / 0.6)); }
.shade-down { background: linear-gradient(to bottom, transparent, hsl(var(--calm-deep) / 0.2), hsl(var(--calm-deep) / 0.8)); }
.vignette { background: radial-gradient(ellipse at center, transparent 0%, hsl(var(--calm-deep) / 0.4) 70%, hsl(var(--calm-deep) / 0.8) 100%); }
.particles { position: fixed; inset: 0; pointer-events: none; overflow: hidden; z-index: 10; }
.particle, .fog, .wisp { position: absolute; }
.fog { height: 12rem; animation: drift linear infinite alternate; }
.wisp { left: 0; right: 0; }
.drift-slow { animation: drift 40s ease-in-out infinite alternate; }
.drift-reverse { animation: drift 50s ease-in-out infinite alternate-reverse; }
.star { animation: twinkle ease-in-out infinite; }
.star-body { position: relative; }
.star-core { position: absolute; inset: 0; border-radius: 9999px; background: hsl(var(--foreground)); }
.star-ray { position: absolute; background: hsl(var(--foreground) / 0.5); }
.sparkle { border-radius: 9999px; animation: sparkle ease-in-out infinite; }
.dust { border-radius: 9999px; background: hsl(var(--calm-mist)); animation: float-drift ease-in-out infinite; }
.content { position: relative; z-index: 20; min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 3rem 1.5rem; }
.intro { text-align: center; margin-bottom: 3rem; }
.headline { font-size: 4rem; font-weight: 300; letter-spacing: 0.05em; margin: 0 0 1rem; }
.headline-accent { display: block; margin-top: 0.5rem; background: linear-gradient(to right, hsl(var(--calm-ocean)), hsl(var(--calm-glow)), hsl(var(--calm-twilight))); -webkit-background-clip: text; background-clip: text; color: transparent; }
.tagline { color: hsl(var(--muted-foreground)); font-size: 1.2rem; font-weight: 300; }
.breathing { position: relative; width: 10rem; height: 10rem; margin-bottom: 3rem; }
.ring { position: absolute; border-radius: 9999px; animation: breathe 8s ease-in-out infinite; }
.ring-outer { inset: 0; border: 1px solid hsl(var(--calm-glow) / 0.3); }
.ring-middle { inset: 1rem; border: 1px solid hsl(var(--calm-ocean) / 0.4); }
.ring-core { inset: 2rem; background: linear-gradient(135deg, hsl(var(--calm-ocean) / 0.2), hsl(var(--calm-twilight) / 0.2)); }
.breathe-label { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; font-size: 0.8rem; letter-spacing: 0.3em; color: hsl(var(--muted-foreground)); animation: pulse-soft 4s ease-in-out infinite; }
.player { position: relative; backdrop-filter: blur(24px); background: hsl(var(--muted) / 0.3); border: 1px solid hsl(var(--muted) / 0.3); border-radius: 1rem; padding: 1.5rem; max-width: 28rem; width: 100%; }
.track-info { text-align: center; margin-bottom: 1.5rem; }
.track-title { font-size: 1.5rem; margin: 0; }
.track-artist { color: hsl(var(--muted-foreground)); font-size: 0.875rem; margin: 0.25rem 0 0; }
.progress { height: 4px; background: hsl(var(--muted)); border-radius: 9999px; cursor: pointer; margin-bottom: 1rem; overflow: hidden; }
.progress-fill { height: 100%; width: 0%; border-radius: 9999px; background: linear-gradient(to right, hsl(var(--calm-ocean)), hsl(var(--calm-glow))); transition: width 0.1s; }
.times { display: flex; justify-content: space-between; font-size: 0.75rem; color: hsl(var(--muted-foreground)); margin-bottom: 1rem; }
.controls { display: flex; align-items: center; justify-content: center; gap: 1.5rem; }
.control { border: 0; border-radius: 9999px; padding: 0.75rem; background: hsl(var(--muted) / 0.5); color: hsl(var(--foreground) / 0.7); cursor: pointer; display: inline-flex; }
.control-play { padding: 1.25rem; background: hsl(var(--primary)); color: hsl(var(--calm-deep)); animation: breathe 8s ease-in-out infinite; animation-play-state: paused; }
.control-play.playing { background: hsl(var(--primary) / 0.2); color: hsl(var(--primary)); box-shadow: 0 0 30px hsl(var(--primary) / 0.3); animation-play-state: running; }
.footer { position: absolute; bottom: 2rem; left: 0; right: 0; text-align: center; font-size: 0.75rem; letter-spacing: 0.3em; text-transform: uppercase; color: hsl(var(--muted-foreground) / 0.5); }
.fade-in-up { opacity: 0; animation: fade-in-up 1.2s ease-out forwards; }
@keyframes twinkle { 0%, 100% { opacity: 0.3; transform: scale(0.8); } 50% { opacity: 1; transform: scale(1.2); } }
@keyframes sparkle { 0%, 100% { opacity: 0; transform: scale(0.5); } 50% { opacity: 1; transform: scale(1); } }
@keyframes float-drift { 0% { transform: translate(0, 0); } 50% { transform: translate(20px, -30px); } 100% { transform: translate(0, 0); } }
@keyframes drift { from { transform: translateX(-5%); } to { transform: translateX(5%); } }
@keyframes breathe { 0%, 100% { transform: scale(1); opacity: 0.8; } 50% { transform: scale(1.08); opacity: 1; } }
@keyframes pulse-soft { 0%, 100% { opacity: 0.6; } 50% { opacity: 1; } }
@keyframes fade-in-up { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }
"#;

pub static ICON_PLAY: &str = r#"<svg width="28" height="28" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><polygon points="6 3 20 12 6 21 6 3"/></svg>"#;
pub static ICON_PAUSE: &str = r#"<svg width="28" height="28" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><rect x="14" y="4" width="4" height="16" rx="1"/><rect x="6" y="4" width="4" height="16" rx="1"/></svg>"#;
pub static ICON_VOLUME: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><polygon points="11 5 6 9 2 9 2 15 6 15 11 19 11 5"/><path d="M15.5 8.5a5 5 0 0 1 0 7"/><path d="M19 5a10 10 0 0 1 0 14"/></svg>"#;
pub static ICON_MUTED: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><polygon points="11 5 6 9 2 9 2 15 6 15 11 19 11 5"/><line x1="22" x2="16" y1="9" y2="15"/><line x1="16" x2="22" y1="9" y2="15"/></svg>"#;
pub static ICON_DOWNLOAD: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="7 10 12 15 17 10"/><line x1="12" x2="12" y1="15" y2="3"/></svg>"#;

/// Inject the stylesheet once per document.
pub fn install(document: &web::Document) -> anyhow::Result<()> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("document has no <head>"))?;
    let style = dom::append(document, &head, "style", "")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(STYLESHEET));
    Ok(())
}

/// Inline style for a staggered entrance.
#[inline]
pub fn intro_delay(delay_secs: f32) -> String {
    format!("animation-delay:{:.1}s;", delay_secs)
}
