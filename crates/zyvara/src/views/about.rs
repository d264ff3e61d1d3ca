#![forbid(unsafe_code)]

//! View model for the about page: testimonial carousel and events counter.

use web_time::Duration;
use zyvara_core::{CountUp, PolicyConfig, Rotator};

use crate::catalog::{Catalog, Review};

/// State behind the about page.
#[derive(Debug, Clone)]
pub struct AboutPage<'a> {
    testimonials: &'a [Review],
    rotator: Rotator,
    counter: CountUp,
}

impl<'a> AboutPage<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_policy(catalog, &PolicyConfig::default())
    }

    #[must_use]
    pub fn with_policy(catalog: &'a Catalog, policy: &PolicyConfig) -> Self {
        let testimonials = catalog.testimonials();
        Self {
            testimonials,
            rotator: Rotator::new(testimonials.len()),
            counter: CountUp::new(policy.to_count_up_config()),
        }
    }

    /// Testimonial on screen, if there are any.
    #[must_use]
    pub fn testimonial(&self) -> Option<&'a Review> {
        self.testimonials.get(self.rotator.index())
    }

    #[must_use]
    pub fn testimonial_index(&self) -> usize {
        self.rotator.index()
    }

    pub fn next_testimonial(&mut self) -> Option<&'a Review> {
        self.rotator.next();
        self.testimonial()
    }

    pub fn previous_testimonial(&mut self) -> Option<&'a Review> {
        self.rotator.previous();
        self.testimonial()
    }

    /// Advance the events counter by elapsed time since the last frame.
    pub fn tick(&mut self, elapsed: Duration) -> u32 {
        self.counter.tick(elapsed)
    }

    /// Counter text, e.g. `"500+"` once finished.
    #[must_use]
    pub fn events_label(&self) -> String {
        format!("{}+", self.counter.value())
    }

    #[must_use]
    pub fn counter_finished(&self) -> bool {
        self.counter.is_finished()
    }
}
