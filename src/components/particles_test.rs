use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

#[test]
fn random_particles_stay_in_range() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..500 {
        let p = ParticleDescriptor::random(&mut rng);
        assert!((0.0..100.0).contains(&p.left_pct));
        assert!((0.0..100.0).contains(&p.top_pct));
        assert!((1.0..5.0).contains(&p.size_px));
        assert!((0.0..6.0).contains(&p.delay_s));
        assert!((3.0..6.0).contains(&p.duration_s));
    }
}

#[test]
fn same_seed_same_field() {
    let a = ParticleDescriptor::random(&mut SmallRng::seed_from_u64(42));
    let b = ParticleDescriptor::random(&mut SmallRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn style_sets_square_size_and_timing() {
    let p = ParticleDescriptor { left_pct: 10.0, top_pct: 20.5, size_px: 3.0, delay_s: 1.5, duration_s: 4.0 };
    assert_eq!(
        p.style(),
        "left: 10%; top: 20.5%; width: 3px; height: 3px; animation-delay: 1.5s; animation-duration: 4s;"
    );
}

#[test]
fn narrow_viewports_get_fewer_particles() {
    let config = FxConfig::default();
    assert_eq!(particle_count(375.0, &config), 25);
    assert_eq!(particle_count(767.9, &config), 25);
    assert_eq!(particle_count(768.0, &config), 50);
    assert_eq!(particle_count(1440.0, &config), 50);
}

#[test]
fn hidden_document_pauses_animations() {
    assert_eq!(PlayState::for_hidden(true).as_css(), "paused");
    assert_eq!(PlayState::for_hidden(false).as_css(), "running");
}
