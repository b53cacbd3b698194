//! Integration tests: field generation → long advance → wrap invariants.

use bd_core::{FieldConfig, ParticleField, Size, particle_count};
use pretty_assertions::assert_eq;

const CFG: FieldConfig = FieldConfig {
    density: 0.02,
    min_count: 40,
    wrap_margin: 20.0,
    radius_min: 0.6,
    radius_spread: 2.6,
    drift_span: 0.25,
    alpha_min: 0.05,
    alpha_spread: 0.12,
};

// ─── Count formula ───────────────────────────────────────────────────────

#[test]
fn count_formula_matches_width() {
    assert_eq!(particle_count(200.0, &CFG), 40);
    assert_eq!(particle_count(1999.0, &CFG), 40);
    assert_eq!(particle_count(2000.0, &CFG), 40);
    assert_eq!(particle_count(2050.0, &CFG), 41);
    assert_eq!(particle_count(5000.0, &CFG), 100);
}

#[test]
fn generated_field_len_equals_formula() {
    let mut rng = fastrand::Rng::with_seed(42);
    for width in [320.0, 800.0, 1600.0, 3840.0] {
        let field = ParticleField::generate(&CFG, Size::new(width, 600.0), &mut rng);
        assert_eq!(
            field.len(),
            particle_count(width, &CFG),
            "count mismatch at width {width}"
        );
    }
}

// ─── Toroidal wrap ───────────────────────────────────────────────────────

#[test]
fn positions_stay_inside_extended_bounds_after_every_advance() {
    let bounds = Size::new(640.0, 480.0);
    let mut rng = fastrand::Rng::with_seed(9);
    let mut field = ParticleField::generate(&CFG, bounds, &mut rng);

    let mut t = 0.0;
    for _ in 0..2000 {
        field.advance(t);
        for (i, p) in field.iter().enumerate() {
            assert!(
                (-20.0..=660.0).contains(&p.x),
                "particle {i} escaped on x at t={t}: {}",
                p.x
            );
            assert!(
                (-20.0..=500.0).contains(&p.y),
                "particle {i} escaped on y at t={t}: {}",
                p.y
            );
        }
        t += 16.0;
    }
}

#[test]
fn wrap_reappears_at_opposite_edge() {
    // Tiny bounds force wraps quickly; a wrapped particle lands exactly on
    // the opposite padded edge, never clamped inside.
    let bounds = Size::new(30.0, 30.0);
    let mut rng = fastrand::Rng::with_seed(3);
    let mut field = ParticleField::generate(&CFG, bounds, &mut rng);

    let mut wrapped = 0;
    let mut t = 0.0;
    for _ in 0..50_000 {
        let before: Vec<(f64, f64)> = field.iter().map(|p| (p.x, p.y)).collect();
        field.advance(t);
        for (prev, p) in before.iter().zip(field.iter()) {
            // A jump larger than any per-frame step means a wrap happened.
            if (p.x - prev.0).abs() > 1.0 {
                wrapped += 1;
                assert!(
                    p.x == 50.0 || p.x == -20.0,
                    "wrap should land on a padded edge, got {}",
                    p.x
                );
            }
        }
        t += 16.0;
    }
    assert!(wrapped > 0, "expected at least one wrap in 50k frames");
}

// ─── Regeneration ────────────────────────────────────────────────────────

#[test]
fn regenerate_discards_every_old_particle() {
    let mut rng = fastrand::Rng::with_seed(11);
    let mut field = ParticleField::generate(&CFG, Size::new(800.0, 600.0), &mut rng);
    let old: Vec<_> = field.iter().copied().collect();

    field.regenerate(&CFG, Size::new(1600.0, 600.0), &mut rng);

    assert_eq!(field.len(), 40, "floor(1600·0.02)=32 clamps up to 40");
    assert_eq!(field.bounds(), Size::new(1600.0, 600.0));
    for p in field.iter() {
        assert!(
            !old.contains(p),
            "a pre-resize particle survived regeneration"
        );
    }
}

#[test]
fn same_seed_reproduces_the_field() {
    let bounds = Size::new(1200.0, 700.0);
    let mut a = fastrand::Rng::with_seed(77);
    let mut b = fastrand::Rng::with_seed(77);
    let fa = ParticleField::generate(&CFG, bounds, &mut a);
    let fb = ParticleField::generate(&CFG, bounds, &mut b);
    assert_eq!(fa, fb);
}
