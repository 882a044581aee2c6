//! Mirror selection policies.

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Picks which configured mirror serves the next request.
pub trait MirrorSelector: Send + Sync {
    /// Returns an index in `0..mirror_count`. `mirror_count` is never zero.
    fn select(&self, mirror_count: usize) -> usize;
}

/// Uniform random choice using the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSelector;

impl MirrorSelector for RandomSelector {
    fn select(&self, mirror_count: usize) -> usize {
        rand::thread_rng().gen_range(0..mirror_count)
    }
}

/// Cycles through the mirrors in configuration order.
#[derive(Debug, Default)]
pub struct RoundRobinSelector {
    next: AtomicUsize,
}

impl RoundRobinSelector {
    pub const fn new() -> Self {
        Self {
            next: AtomicUsize::new(0),
        }
    }
}

impl MirrorSelector for RoundRobinSelector {
    fn select(&self, mirror_count: usize) -> usize {
        self.next.fetch_add(1, Ordering::Relaxed) % mirror_count
    }
}

/// Selection policy as named on the command line and in config.toml.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Selection {
    #[default]
    Random,
    RoundRobin,
}

impl Selection {
    pub fn selector(self) -> Box<dyn MirrorSelector> {
        match self {
            Self::Random => Box::new(RandomSelector),
            Self::RoundRobin => Box::new(RoundRobinSelector::new()),
        }
    }
}
