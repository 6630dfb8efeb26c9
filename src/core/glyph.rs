use super::field::{FogLayer, Particle, ParticleField, ParticleKind};

#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub class: &'static str,
    pub style: Vec<(&'static str, String)>,
    pub children: Vec<Glyph>,
}

impl Glyph {
    fn new(class: &'static str) -> Self {
        Self {
            class,
            style: Vec::new(),
            children: Vec::new(),
        }
    }

    fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.style.push((property, value.into()));
        self
    }

    fn child(mut self, glyph: Glyph) -> Self {
        self.children.push(glyph);
        self
    }

    fn animated(self, duration_secs: f32, delay_secs: f32) -> Self {
        self.with("animation-duration", secs(duration_secs))
            .with("animation-delay", secs(delay_secs))
    }

    #[allow(dead_code)] // host tests inspect single declarations
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Inline `style` attribute text.
    pub fn style_text(&self) -> String {
        self.style
            .iter()
            .map(|(p, v)| format!("{}:{};", p, v))
            .collect()
    }
}

#[inline]
pub fn px(v: f32) -> String {
    format!("{:.2}px", v)
}

#[inline]
pub fn pct(v: f32) -> String {
    format!("{:.2}%", v)
}

#[inline]
pub fn secs(v: f32) -> String {
    format!("{:.2}s", v)
}

#[inline]
fn opacity(v: f32) -> String {
    format!("{:.3}", v)
}

pub fn glyph_for_particle(p: &Particle) -> Glyph {
    match p.kind {
        ParticleKind::Star => star(p),
        ParticleKind::Sparkle => sparkle(p),
        ParticleKind::Dust => dust(p),
    }
}

// Center dot plus two perpendicular hairlines twice the star size.
fn star(p: &Particle) -> Glyph {
    let hairline_opacity = opacity(p.opacity * 0.5);
    let vertical = Glyph::new("star-ray")
        .with("left", "50%")
        .with("top", "-50%")
        .with("width", "1px")
        .with("height", px(p.size * 2.0))
        .with("transform", "translateX(-50%)")
        .with("opacity", hairline_opacity.clone());
    let horizontal = Glyph::new("star-ray")
        .with("top", "50%")
        .with("left", "-50%")
        .with("height", "1px")
        .with("width", px(p.size * 2.0))
        .with("transform", "translateY(-50%)")
        .with("opacity", hairline_opacity);
    let core = Glyph::new("star-core").with("opacity", opacity(p.opacity));
    let body = Glyph::new("star-body")
        .with("width", px(p.size))
        .with("height", px(p.size))
        .child(core)
        .child(vertical)
        .child(horizontal);
    Glyph::new("particle star")
        .with("left", pct(p.position.x))
        .with("top", pct(p.position.y))
        .animated(p.duration_secs, p.delay_secs)
        .child(body)
}

fn sparkle(p: &Particle) -> Glyph {
    Glyph::new("particle sparkle")
        .with("left", pct(p.position.x))
        .with("top", pct(p.position.y))
        .with("width", px(p.size))
        .with("height", px(p.size))
        .with("opacity", opacity(p.opacity))
        .with(
            "background",
            "radial-gradient(circle, hsl(var(--calm-glow)) 0%, transparent 70%)",
        )
        .with(
            "box-shadow",
            format!("0 0 {} hsl(var(--calm-glow) / 0.6)", px(p.size * 3.0)),
        )
        .animated(p.duration_secs, p.delay_secs)
}

fn dust(p: &Particle) -> Glyph {
    Glyph::new("particle dust")
        .with("left", pct(p.position.x))
        .with("top", pct(p.position.y))
        .with("width", px(p.size))
        .with("height", px(p.size))
        .with("opacity", opacity(p.opacity))
        .with(
            "box-shadow",
            format!("0 0 {} hsl(var(--calm-mist) / 0.3)", px(p.size * 2.0)),
        )
        .animated(p.duration_secs, p.delay_secs)
}

pub fn glyph_for_fog(f: &FogLayer) -> Glyph {
    Glyph::new("fog")
        .with("top", pct(f.y))
        .with("left", "-20%")
        .with("right", "-20%")
        .with("opacity", opacity(f.opacity))
        .with(
            "background",
            "linear-gradient(90deg, transparent 0%, hsl(var(--calm-mist) / 0.3) 20%, \
             hsl(var(--calm-mist) / 0.5) 50%, hsl(var(--calm-mist) / 0.3) 80%, transparent 100%)",
        )
        .with("filter", "blur(40px)")
        .animated(f.duration_secs, f.delay_secs)
}

/// Two static wisps layered over the fog bands.
pub fn fog_wisps() -> [Glyph; 2] {
    [
        Glyph::new("wisp drift-slow")
            .with("top", "50%")
            .with("height", "16rem")
            .with("opacity", "0.2")
            .with(
                "background",
                "radial-gradient(ellipse 80% 50% at 30% 50%, hsl(var(--calm-ocean) / 0.3), transparent)",
            )
            .with("filter", "blur(60px)"),
        Glyph::new("wisp drift-reverse")
            .with("top", "33.33%")
            .with("height", "12rem")
            .with("opacity", "0.15")
            .with(
                "background",
                "radial-gradient(ellipse 60% 40% at 70% 50%, hsl(var(--calm-twilight) / 0.2), transparent)",
            )
            .with("filter", "blur(50px)"),
    ]
}

/// Whole overlay in paint order: fog, wisps, then particles.
pub fn overlay_glyphs(field: &ParticleField) -> Vec<Glyph> {
    let mut out = Vec::with_capacity(field.fog_layers().len() + 2 + field.particles().len());
    out.extend(field.fog_layers().iter().map(glyph_for_fog));
    out.extend(fog_wisps());
    out.extend(field.particles().iter().map(glyph_for_particle));
    out
}
