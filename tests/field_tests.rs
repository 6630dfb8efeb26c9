// Host-side tests for the particle field generator and its glyph mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod field {
        include!("../src/core/field.rs");
    }
    pub mod glyph {
        include!("../src/core/glyph.rs");
    }
}

use crate::core::field::*;
use crate::core::glyph::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn seeded_fields() -> impl Iterator<Item = ParticleField> {
    (0..64u64).map(|seed| ParticleField::generate(&mut StdRng::seed_from_u64(seed)))
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn generate_produces_fixed_counts() {
    for field in seeded_fields() {
        assert_eq!(field.of_kind(ParticleKind::Dust).count(), 40);
        assert_eq!(field.of_kind(ParticleKind::Star).count(), 30);
        assert_eq!(field.of_kind(ParticleKind::Sparkle).count(), 15);
        assert_eq!(field.particles().len(), 85);
        assert_eq!(field.fog_layers().len(), 5);
    }
}

#[test]
fn ids_are_unique_within_each_kind_and_across_the_field() {
    for field in seeded_fields() {
        for kind in ParticleKind::ALL {
            let ids: HashSet<u32> = field.of_kind(kind).map(|p| p.id).collect();
            assert_eq!(ids.len(), kind.spec().count, "duplicate ids for {kind:?}");
        }
        let all: HashSet<u32> = field.particles().iter().map(|p| p.id).collect();
        assert_eq!(all.len(), field.particles().len());
        let fog: HashSet<u32> = field.fog_layers().iter().map(|f| f.id).collect();
        assert_eq!(fog.len(), 5);
    }
}

#[test]
fn star_attributes_stay_in_bounds() {
    for field in seeded_fields() {
        for p in field.of_kind(ParticleKind::Star) {
            assert!((0.0..=100.0).contains(&p.position.x));
            assert!((0.0..=60.0).contains(&p.position.y), "star y={}", p.position.y);
            assert!((1.0..=3.0).contains(&p.size));
            assert!((2.0..=6.0).contains(&p.duration_secs));
            assert!((0.0..=3.0).contains(&p.delay_secs));
            assert!((0.2..=1.0).contains(&p.opacity));
        }
    }
}

#[test]
fn dust_attributes_stay_in_bounds() {
    for field in seeded_fields() {
        for p in field.of_kind(ParticleKind::Dust) {
            assert!((0.0..=100.0).contains(&p.position.x));
            assert!((0.0..=100.0).contains(&p.position.y));
            assert!((1.0..=4.0).contains(&p.size));
            assert!((10.0..=25.0).contains(&p.duration_secs));
            assert!((0.0..=8.0).contains(&p.delay_secs));
            assert!((0.1..=0.5).contains(&p.opacity));
        }
    }
}

#[test]
fn sparkle_attributes_stay_in_bounds() {
    for field in seeded_fields() {
        for p in field.of_kind(ParticleKind::Sparkle) {
            assert!((0.0..=100.0).contains(&p.position.x));
            assert!((0.0..=100.0).contains(&p.position.y));
            assert!((2.0..=6.0).contains(&p.size));
            assert!((4.0..=10.0).contains(&p.duration_secs));
            assert!((0.0..=5.0).contains(&p.delay_secs));
            assert!((0.2..=0.8).contains(&p.opacity));
        }
    }
}

#[test]
fn fog_layers_stay_in_bounds() {
    for field in seeded_fields() {
        for f in field.fog_layers() {
            assert!((40.0..=80.0).contains(&f.y));
            assert!((20.0..=50.0).contains(&f.duration_secs));
            assert!((0.0..=10.0).contains(&f.delay_secs));
            assert!((0.05..=0.2).contains(&f.opacity));
        }
    }
}

#[test]
fn same_seed_gives_same_field() {
    let a = ParticleField::generate(&mut StdRng::seed_from_u64(7));
    let b = ParticleField::generate(&mut StdRng::seed_from_u64(7));
    assert_eq!(a.particles(), b.particles());
    assert_eq!(a.fog_layers(), b.fog_layers());
}

#[test]
fn entropy_field_has_the_same_shape() {
    let field = ParticleField::generate_from_entropy();
    assert_eq!(field.particles().len(), 85);
    assert_eq!(field.fog_layers().len(), 5);
}

#[test]
fn degenerate_span_samples_its_single_value() {
    let s = Span::new(0.05, 0.05);
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..16 {
        assert_eq!(s.sample(&mut rng), 0.05);
    }
}

fn sample(kind: ParticleKind) -> Particle {
    Particle {
        id: 1,
        position: glam::Vec2::new(12.5, 40.0),
        size: 2.0,
        duration_secs: 3.5,
        delay_secs: 1.25,
        opacity: 0.6,
        kind,
    }
}

#[test]
fn star_glyph_is_a_dot_with_two_hairlines() {
    let g = glyph_for_particle(&sample(ParticleKind::Star));
    assert_eq!(g.style_value("left"), Some("12.50%"));
    assert_eq!(g.style_value("top"), Some("40.00%"));
    assert_eq!(g.style_value("animation-duration"), Some("3.50s"));
    assert_eq!(g.style_value("animation-delay"), Some("1.25s"));

    let body = &g.children[0];
    assert_eq!(body.style_value("width"), Some("2.00px"));
    assert_eq!(body.children.len(), 3);
    assert_eq!(body.children[0].style_value("opacity"), Some("0.600"));

    let rays: Vec<_> = body.children.iter().filter(|c| c.class == "star-ray").collect();
    assert_eq!(rays.len(), 2);
    assert_eq!(rays[0].style_value("height"), Some("4.00px"));
    assert_eq!(rays[0].style_value("width"), Some("1px"));
    assert_eq!(rays[1].style_value("width"), Some("4.00px"));
    assert_eq!(rays[1].style_value("height"), Some("1px"));
    for r in rays {
        assert_eq!(r.style_value("opacity"), Some("0.300"));
    }
}

#[test]
fn sparkle_glyph_glows_three_times_its_size() {
    let g = glyph_for_particle(&sample(ParticleKind::Sparkle));
    assert!(g.class.contains("sparkle"));
    assert!(g.children.is_empty());
    let shadow = g.style_value("box-shadow").unwrap();
    assert!(shadow.starts_with("0 0 6.00px"), "{shadow}");
    assert!(g.style_value("background").unwrap().starts_with("radial-gradient"));
}

#[test]
fn dust_glyph_is_a_soft_dot() {
    let g = glyph_for_particle(&sample(ParticleKind::Dust));
    assert!(g.class.contains("dust"));
    assert!(g.style_value("box-shadow").unwrap().starts_with("0 0 4.00px"));
    assert_eq!(g.style_value("opacity"), Some("0.600"));
    assert_eq!(g.style_value("animation-delay"), Some("1.25s"));
}

#[test]
fn fog_glyph_spans_past_the_viewport() {
    let f = FogLayer {
        id: 0,
        y: 55.0,
        duration_secs: 30.0,
        delay_secs: 2.0,
        opacity: 0.1,
    };
    let g = glyph_for_fog(&f);
    assert_eq!(g.style_value("top"), Some("55.00%"));
    assert_eq!(g.style_value("left"), Some("-20%"));
    assert_eq!(g.style_value("right"), Some("-20%"));
    assert_eq!(g.style_value("filter"), Some("blur(40px)"));
    assert_eq!(g.style_value("animation-duration"), Some("30.00s"));
}

#[test]
fn overlay_orders_fog_then_wisps_then_particles() {
    let field = ParticleField::generate(&mut StdRng::seed_from_u64(3));
    let glyphs = overlay_glyphs(&field);
    assert_eq!(glyphs.len(), 5 + 2 + 85);
    assert!(glyphs[..5].iter().all(|g| g.class == "fog"));
    assert!(glyphs[5..7].iter().all(|g| g.class.starts_with("wisp")));
    assert!(glyphs[7..].iter().all(|g| g.class.starts_with("particle")));
}

#[test]
fn style_text_joins_declarations() {
    let g = glyph_for_fog(&FogLayer {
        id: 1,
        y: 40.0,
        duration_secs: 20.0,
        delay_secs: 0.0,
        opacity: 0.05,
    });
    let text = g.style_text();
    assert!(text.starts_with("top:40.00%;left:-20%;"));
    assert!(text.ends_with("animation-delay:0.00s;"));
    let opacity: f32 = g.style_value("opacity").unwrap().parse().unwrap();
    assert!(close(opacity, 0.05));
}
