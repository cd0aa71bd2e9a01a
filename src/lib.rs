//! `keyset` is an in-memory store that maps string keys to independent, unordered sets of unique
//! elements, together with a small algebra (union, difference, intersection) over those sets.
//! The command surface follows the familiar `S*` family of a well-known key-value server:
//! `sadd`, `srem`, `sismember`, `spop`, `srandmember`, `smove`, `sunion`/`sunionstore`,
//! `sdiff`/`sdiffstore`, `sinter`/`sinterstore` and friends.
//!
//! ```
//! use keyset::Registry;
//!
//! let mut store = Registry::new();
//! store.sadd("fruits", "apple".to_string());
//! store.sadd("fruits", "pear".to_string());
//! store.sadd("red", "apple".to_string());
//!
//! assert_eq!(store.scard("fruits"), 2);
//! assert_eq!(store.sinter(&["fruits", "red"]), vec!["apple".to_string()]);
//! assert_eq!(store.sdiffstore("green", &["fruits", "red"]), 1);
//! assert!(store.sismember("green", &"pear".to_string()));
//! ```
//!
//! Every operation is total. A missing key behaves like an empty set and answers `false`, `0` or
//! an empty list; multi-key operations silently skip keys that do not exist.
//!
//! The set container is exposed through the [`set::MemberSet`] and [`set::MergeSet`] traits, so the
//! free functions in [`algebra`] work on any implementation:
//! ```
//! use keyset::algebra::{difference, intersection, union};
//! use keyset::set::{HashMemberSet, MemberSet};
//!
//! let a: HashMemberSet<u32> = [1, 2, 3].into_iter().collect();
//! let b: HashMemberSet<u32> = [3, 4].into_iter().collect();
//! let c: HashMemberSet<u32> = [3, 5].into_iter().collect();
//!
//! assert_eq!(union::<u32, _>(&a, &b, &[&c]).len(), 5);
//! assert_eq!(difference::<u32, _>(&a, &b, &[&c]).len(), 2);
//! assert!(intersection::<u32, _>(&a, &b, &[&c]).has(&[3]));
//! ```
//!
//! Sampling (`spop`, `srandmember`) draws from a seedable generator; see [`RegistryConfig`] to make
//! it reproducible. A [`Registry`] is not synchronized.
pub use crate::config::RegistryConfig;
pub use crate::registry::Registry;

/// Set algebra over two or more sets. Inputs are never mutated.
pub mod algebra;
/// Registry construction options.
pub mod config;
/// The keyed command surface.
pub mod registry;
/// Set container interfaces.
pub mod set;
