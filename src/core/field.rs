use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Dust,
    Star,
    Sparkle,
}

impl ParticleKind {
    pub const ALL: [ParticleKind; 3] = [
        ParticleKind::Dust,
        ParticleKind::Star,
        ParticleKind::Sparkle,
    ];

    pub fn spec(self) -> &'static ParticleSpec {
        match self {
            ParticleKind::Dust => &DUST,
            ParticleKind::Star => &STAR,
            ParticleKind::Sparkle => &SPARKLE,
        }
    }
}

/// Closed interval used for uniform sampling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Count, id block and attribute ranges for one particle kind.
#[derive(Clone, Debug)]
pub struct ParticleSpec {
    pub kind: ParticleKind,
    pub count: usize,
    pub id_base: u32,
    pub x: Span,
    pub y: Span,
    pub size: Span,        // px
    pub duration: Span,    // seconds
    pub delay: Span,       // seconds
    pub opacity: Span,
}

#[derive(Clone, Debug)]
pub struct FogSpec {
    pub count: usize,
    pub y: Span,
    pub duration: Span,
    pub delay: Span,
    pub opacity: Span,
}

pub static DUST: ParticleSpec = ParticleSpec {
    kind: ParticleKind::Dust,
    count: 40,
    id_base: 0,
    x: Span::new(0.0, 100.0),
    y: Span::new(0.0, 100.0),
    size: Span::new(1.0, 4.0),
    duration: Span::new(10.0, 25.0),
    delay: Span::new(0.0, 8.0),
    opacity: Span::new(0.1, 0.5),
};

// Stars stay in the upper 60% of the viewport ("sky").
pub static STAR: ParticleSpec = ParticleSpec {
    kind: ParticleKind::Star,
    count: 30,
    id_base: 100,
    x: Span::new(0.0, 100.0),
    y: Span::new(0.0, 60.0),
    size: Span::new(1.0, 3.0),
    duration: Span::new(2.0, 6.0),
    delay: Span::new(0.0, 3.0),
    opacity: Span::new(0.2, 1.0),
};

pub static SPARKLE: ParticleSpec = ParticleSpec {
    kind: ParticleKind::Sparkle,
    count: 15,
    id_base: 200,
    x: Span::new(0.0, 100.0),
    y: Span::new(0.0, 100.0),
    size: Span::new(2.0, 6.0),
    duration: Span::new(4.0, 10.0),
    delay: Span::new(0.0, 5.0),
    opacity: Span::new(0.2, 0.8),
};

// Fog sits in the middle-lower band.
pub static FOG: FogSpec = FogSpec {
    count: 5,
    y: Span::new(40.0, 80.0),
    duration: Span::new(20.0, 50.0),
    delay: Span::new(0.0, 10.0),
    opacity: Span::new(0.05, 0.2),
};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: u32,
    /// Percent of the viewport, 0..=100 on both axes.
    pub position: Vec2,
    pub size: f32,
    pub duration_secs: f32,
    pub delay_secs: f32,
    pub opacity: f32,
    pub kind: ParticleKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FogLayer {
    pub id: u32,
    /// Percent of the viewport height.
    pub y: f32,
    pub duration_secs: f32,
    pub delay_secs: f32,
    pub opacity: f32,
}

#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    fog: Vec<FogLayer>,
}

impl ParticleField {
    /// Build a complete field from the given random source.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let total = ParticleKind::ALL.iter().map(|k| k.spec().count).sum();
        let mut particles = Vec::with_capacity(total);
        for kind in ParticleKind::ALL {
            let spec = kind.spec();
            particles.extend((0..spec.count).map(|i| sample_particle(spec, i, rng)));
        }
        let fog = (0..FOG.count)
            .map(|i| FogLayer {
                id: i as u32,
                y: FOG.y.sample(rng),
                duration_secs: FOG.duration.sample(rng),
                delay_secs: FOG.delay.sample(rng),
                opacity: FOG.opacity.sample(rng),
            })
            .collect();
        Self { particles, fog }
    }

    /// Build a field from the platform entropy source.
    pub fn generate_from_entropy() -> Self {
        Self::generate(&mut rand::thread_rng())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn fog_layers(&self) -> &[FogLayer] {
        &self.fog
    }

    pub fn of_kind(&self, kind: ParticleKind) -> impl Iterator<Item = &Particle> + '_ {
        self.particles.iter().filter(move |p| p.kind == kind)
    }
}

fn sample_particle<R: Rng + ?Sized>(spec: &ParticleSpec, index: usize, rng: &mut R) -> Particle {
    Particle {
        id: spec.id_base + index as u32,
        position: Vec2::new(spec.x.sample(rng), spec.y.sample(rng)),
        size: spec.size.sample(rng),
        duration_secs: spec.duration.sample(rng),
        delay_secs: spec.delay.sample(rng),
        opacity: spec.opacity.sample(rng),
        kind: spec.kind,
    }
}
