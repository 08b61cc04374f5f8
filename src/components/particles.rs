//! Decorative particle field in the hero section.
//!
//! Particles are generated once with random placement, size and animation
//! timing; after that only their `animation-play-state` changes, paused while
//! the tab is hidden.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use rand::Rng;

use crate::config::FxConfig;

pub const CONTAINER_SELECTOR: &str = ".particles";
pub const PARTICLE_CLASS: &str = "particle";
pub const PARTICLE_SELECTOR: &str = ".particle";

/// Randomized look of one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleDescriptor {
    pub left_pct: f64,
    pub top_pct: f64,
    /// Width and height; particles are square.
    pub size_px: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl ParticleDescriptor {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
            size_px: rng.random_range(1.0..5.0),
            delay_s: rng.random_range(0.0..6.0),
            duration_s: rng.random_range(3.0..6.0),
        }
    }

    /// Inline `style` attribute value.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; width: {}px; height: {}px; animation-delay: {}s; animation-duration: {}s;",
            self.left_pct, self.top_pct, self.size_px, self.size_px, self.delay_s, self.duration_s
        )
    }
}

/// Fewer particles on narrow screens.
#[must_use]
pub fn particle_count(viewport_width: f64, config: &FxConfig) -> usize {
    if viewport_width < config.particle_breakpoint_px {
        config.particle_count_narrow
    } else {
        config.particle_count_wide
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Running,
    Paused,
}

impl PlayState {
    /// Animations pause while the document is hidden.
    #[must_use]
    pub fn for_hidden(hidden: bool) -> Self {
        if hidden { Self::Paused } else { Self::Running }
    }

    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Paused => "paused",
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{apply_play_state, init};

#[cfg(feature = "hydrate")]
mod browser {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use web_sys::Document;

    use super::{CONTAINER_SELECTOR, PARTICLE_CLASS, PARTICLE_SELECTOR, ParticleDescriptor, PlayState, particle_count};
    use crate::error::FxError;
    use crate::util::dom::{self, Page};

    pub fn init(page: &Page) -> Result<(), FxError> {
        let Some(container) = page.query(CONTAINER_SELECTOR)? else {
            log::debug!("no {CONTAINER_SELECTOR}; particle field disabled");
            return Ok(());
        };

        let count = particle_count(page.inner_width()?, &page.config);
        let mut rng = SmallRng::seed_from_u64(js_sys::Math::random().to_bits());
        for _ in 0..count {
            let particle = page.document.create_element("div")?;
            particle.set_class_name(PARTICLE_CLASS);
            particle.set_attribute("style", &ParticleDescriptor::random(&mut rng).style())?;
            container.append_child(&particle)?;
        }
        log::debug!("spawned {count} particles");
        Ok(())
    }

    /// Pause or resume every particle animation.
    pub fn apply_play_state(document: &Document, state: PlayState) -> Result<(), FxError> {
        for particle in dom::elements(&document.query_selector_all(PARTICLE_SELECTOR)?) {
            if let Some(html) = dom::as_html(&particle) {
                dom::set_style(&html, "animation-play-state", state.as_css())?;
            }
        }
        Ok(())
    }
}
