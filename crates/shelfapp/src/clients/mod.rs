//! # Client Stores
//!
//! Each reading client owns its own stores; they share nothing but the
//! generic [`Store`](crate::store::Store).
//!
//! - [`consume`]: a name-only [`LabelStore`](consume::LabelStore).
//! - [`flashcard`]: [`TagStore`](flashcard::TagStore) and
//!   [`SourceStore`](flashcard::SourceStore), both keyed by generated UUIDs.
//!
//! The wrappers only add the entity-specific `add`, which expands a creation
//! payload into a full record. Everything else (`subscribe`, `edit`,
//! `remove`, `get`, `snapshot`) is the underlying store's, reached through
//! `Deref`.

pub mod consume;
pub mod flashcard;
