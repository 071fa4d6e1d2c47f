//! # Sample Data
//!
//! Random records for demos and tests, kept behind the
//! [`Seeder`](crate::store::Seeder) interface so stores never depend on it.
//!
//! ## Reproducibility
//!
//! A [`Sampler`] built with a seed draws everything from one `StdRng`,
//! identifiers included, so two samplers with the same seed produce the same
//! names, ids, counts and colors. Timestamps are offsets from the current
//! time and therefore differ between runs.
//!
//! ## Shapes
//!
//! | Field | Range |
//! |-------|-------|
//! | `Source::n_fragments` | `0..=100` |
//! | `Source::n_pages` | `n_fragments..=323` (new sources: `10..=323`) |
//! | `Source::tags` | `0..=5` hacker nouns |
//! | `created_at` | within the past 3 years |
//! | `updated_at` | within the past day, never before `created_at` |

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::model::{completion, Label, NewSource, NewTag, Source, Tag};
use crate::store::Seeder;

pub const MAX_FRAGMENTS: u32 = 100;
pub const MAX_PAGES: u32 = 323;
pub const MIN_NEW_SOURCE_PAGES: u32 = 10;
pub const MAX_SOURCE_TAGS: usize = 5;

const SURNAMES: &[&str] = &[
    "Abbott", "Bauch", "Bergstrom", "Carter", "Dach", "Emard", "Fadel", "Gislason", "Hahn",
    "Hermiston", "Jacobs", "Kuhn", "Lind", "Mayer", "Nolan", "O'Keefe", "Pacocha", "Quitzon",
    "Reilly", "Schmitt", "Torp", "Upton", "Veum", "Walker", "Yost", "Zieme",
];

const COMPANY_SUFFIXES: &[&str] = &["and Sons", "Group", "Inc", "LLC", "Ltd"];

const HACKER_NOUNS: &[&str] = &[
    "alarm", "application", "array", "bandwidth", "bus", "capacitor", "card", "circuit", "driver",
    "feed", "firewall", "hard drive", "interface", "matrix", "microchip", "monitor", "panel",
    "pixel", "port", "program", "protocol", "sensor", "system", "transmitter",
];

/// Label names the consume client starts with.
pub const DEFAULT_LABELS: &[&str] = &["Tag 1", "Tag 2", "Tag 3"];

/// Source of random sample values.
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Seeded samplers are reproducible; `None` draws from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// A random (v4) UUID drawn from this sampler's rng.
    pub fn uuid(&mut self) -> Uuid {
        uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid()
    }

    /// Hex color, e.g. `#0d7f26`.
    pub fn color(&mut self) -> String {
        let [r, g, b]: [u8; 3] = self.rng.gen();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub fn company_name(&mut self) -> String {
        let mut surname = || *SURNAMES.choose(&mut self.rng).unwrap_or(&"Acme");
        let (a, b, c) = (surname(), surname(), surname());
        match self.rng.gen_range(0..3) {
            0 => {
                let suffix = COMPANY_SUFFIXES.choose(&mut self.rng).unwrap_or(&"Inc");
                format!("{} {}", a, suffix)
            }
            1 => format!("{} - {}", a, b),
            _ => format!("{}, {} and {}", a, b, c),
        }
    }

    pub fn hacker_noun(&mut self) -> String {
        HACKER_NOUNS
            .choose(&mut self.rng)
            .unwrap_or(&"protocol")
            .to_string()
    }

    /// Page count for a freshly added source.
    pub fn new_source_pages(&mut self) -> u32 {
        self.rng.gen_range(MIN_NEW_SOURCE_PAGES..=MAX_PAGES)
    }

    /// `(created_at, updated_at)` relative to `now`.
    fn timestamps(&mut self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let three_years = 3 * 365 * 24 * 60 * 60;
        let created = now - Duration::seconds(self.rng.gen_range(0..=three_years));
        let updated = now - Duration::seconds(self.rng.gen_range(0..=24 * 60 * 60));
        (created, updated.max(created))
    }

    pub fn tag(&mut self, now: DateTime<Utc>) -> Tag {
        let id = self.uuid();
        let name = self.company_name();
        let color = self.color();
        let (created_at, updated_at) = self.timestamps(now);
        Tag {
            id,
            name,
            color,
            created_at,
            updated_at,
        }
    }

    pub fn source(&mut self, now: DateTime<Utc>) -> Source {
        let id = self.uuid();
        let name = self.company_name();
        let n_fragments = self.rng.gen_range(0..=MAX_FRAGMENTS);
        let n_pages = self.rng.gen_range(n_fragments..=MAX_PAGES);
        let tag_count = self.rng.gen_range(0..=MAX_SOURCE_TAGS);
        let tags = (0..tag_count).map(|_| self.hacker_noun()).collect();
        let (created_at, updated_at) = self.timestamps(now);
        Source {
            id,
            name,
            n_fragments,
            n_pages,
            completion: completion(n_fragments, n_pages),
            tags,
            created_at,
            updated_at,
        }
    }

    /// Expands a creation payload into a full tag.
    pub fn build_tag(&mut self, new: NewTag, now: DateTime<Utc>) -> Tag {
        Tag {
            id: self.uuid(),
            name: new.name,
            color: self.color(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Expands a creation payload into a full, untouched source.
    pub fn build_source(&mut self, new: NewSource, now: DateTime<Utc>) -> Source {
        Source {
            id: self.uuid(),
            name: new.name,
            n_fragments: 0,
            n_pages: self.new_source_pages(),
            completion: 0.0,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// A seeder producing `count` random records.
    pub fn records(&mut self, count: usize) -> SampleSeed<'_> {
        SampleSeed {
            sampler: self,
            count,
        }
    }
}

impl std::fmt::Debug for Sampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sampler").finish_non_exhaustive()
    }
}

/// Seeder backed by a [`Sampler`].
pub struct SampleSeed<'a> {
    sampler: &'a mut Sampler,
    count: usize,
}

impl Seeder<Tag> for SampleSeed<'_> {
    fn seed(&mut self) -> Vec<Tag> {
        let now = Utc::now();
        (0..self.count).map(|_| self.sampler.tag(now)).collect()
    }
}

impl Seeder<Source> for SampleSeed<'_> {
    fn seed(&mut self) -> Vec<Source> {
        let now = Utc::now();
        (0..self.count).map(|_| self.sampler.source(now)).collect()
    }
}

/// Labels are not random: the consume client starts from fixed names.
pub fn default_labels() -> Vec<Label> {
    DEFAULT_LABELS.iter().map(|name| Label::new(*name)).collect()
}
