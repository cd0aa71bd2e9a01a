use std::collections::HashMap;
use std::hash::Hash;
use std::slice;

use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::algebra;
use crate::config::RegistryConfig;
use crate::set::{HashMemberSet, MemberSet};

type Combine<T> =
    fn(&HashMemberSet<T>, &HashMemberSet<T>, &[&HashMemberSet<T>]) -> HashMemberSet<T>;

/// A mapping from string keys to independently owned sets.
///
/// Keys come into existence on the first write (`sadd`, `smove` into them, or a store variant
/// producing at least one element) and only leave through [`Registry::sclear`]. Removing the
/// last member of a set keeps its key around, mapped to an empty set.
///
/// Nothing here fails: a missing key reads as an empty set, and every operation resolves to
/// `false`, `0` or an empty list in that case.
///
/// The registry holds no locks. Share it across threads behind an external mutex.
#[derive(Debug)]
pub struct Registry<T: Eq + Hash = String> {
    records: HashMap<String, HashMemberSet<T>>,
    rng: StdRng,
}

impl<T: Eq + Hash + Clone> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> Registry<T> {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            records: HashMap::with_capacity(config.capacity),
            rng,
        }
    }

    /// Number of keys, empty sets included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn exists(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    fn field_exists(&self, key: &str, member: &T) -> bool {
        self.records
            .get(key)
            .map(|set| set.has(slice::from_ref(member)))
            .unwrap_or(false)
    }

    fn entry(&mut self, key: &str) -> &mut HashMemberSet<T> {
        self.records.entry(key.to_owned()).or_insert_with(|| {
            debug!(key = %key, "created set");
            HashMemberSet::new()
        })
    }

    /// Adds `member` to `key`, creating the set if needed. Returns the new cardinality.
    pub fn sadd(&mut self, key: &str, member: T) -> usize {
        let set = self.entry(key);
        set.insert(member);
        set.len()
    }

    /// Removes and returns up to `count` arbitrary members of `key`.
    pub fn spop(&mut self, key: &str, count: i64) -> Vec<T> {
        if count <= 0 {
            return Vec::new();
        }
        let Some(set) = self.records.get_mut(key) else {
            return Vec::new();
        };
        let members = set.list();
        let amount = usize::try_from(count)
            .unwrap_or(usize::MAX)
            .min(members.len());
        let popped: Vec<T> = index::sample(&mut self.rng, members.len(), amount)
            .into_iter()
            .map(|i| members[i].clone())
            .collect();
        set.remove_all(&popped);
        trace!(key = %key, popped = popped.len(), left = set.len(), "spop");
        popped
    }

    pub fn sismember(&self, key: &str, member: &T) -> bool {
        self.field_exists(key, member)
    }

    /// Membership flag for each of `members`, in order.
    pub fn smismember(&self, key: &str, members: &[T]) -> Vec<bool> {
        members
            .iter()
            .map(|m| self.field_exists(key, m))
            .collect()
    }

    /// Samples `key` without removing anything.
    ///
    /// A positive `count` yields at most `count` distinct members. A negative `count` yields
    /// exactly `|count|` members drawn with replacement, so repeats are possible; an existing
    /// but empty set still yields nothing.
    pub fn srandmember(&mut self, key: &str, count: i64) -> Vec<T> {
        if count == 0 {
            return Vec::new();
        }
        let Some(set) = self.records.get(key) else {
            return Vec::new();
        };
        let members = set.list();
        let sampled: Vec<T> = if count > 0 {
            let amount = usize::try_from(count)
                .unwrap_or(usize::MAX)
                .min(members.len());
            index::sample(&mut self.rng, members.len(), amount)
                .into_iter()
                .map(|i| members[i].clone())
                .collect()
        } else if members.is_empty() {
            Vec::new()
        } else {
            let draws = count.unsigned_abs();
            let mut sampled = Vec::new();
            for _ in 0..draws {
                if let Some(x) = members.choose(&mut self.rng) {
                    sampled.push(x.clone());
                }
            }
            sampled
        };
        trace!(key = %key, count, sampled = sampled.len(), "srandmember");
        sampled
    }

    /// Returns whether `member` was present and has been removed. The key stays even when
    /// its set becomes empty.
    pub fn srem(&mut self, key: &str, member: &T) -> bool {
        self.records
            .get_mut(key)
            .map(|set| set.remove(member))
            .unwrap_or(false)
    }

    /// Moves `member` from `src` to `dst`, creating `dst` if needed. Nothing changes unless
    /// `member` is in `src`.
    pub fn smove(&mut self, src: &str, dst: &str, member: &T) -> bool {
        if !self.field_exists(src, member) {
            return false;
        }
        if let Some(set) = self.records.get_mut(src) {
            set.remove(member);
        }
        self.entry(dst).insert(member.clone());
        true
    }

    pub fn scard(&self, key: &str) -> usize {
        self.records.get(key).map(|set| set.len()).unwrap_or(0)
    }

    pub fn smembers(&self, key: &str) -> Vec<T> {
        self.records
            .get(key)
            .map(|set| set.list())
            .unwrap_or_default()
    }

    /// Existing sets among `keys`, in order. Missing keys are skipped.
    fn operands(&self, keys: &[&str]) -> Vec<&HashMemberSet<T>> {
        keys.iter().filter_map(|k| self.records.get(*k)).collect()
    }

    fn combine(&self, keys: &[&str], op: Combine<T>) -> Vec<T> {
        match keys {
            [] => Vec::new(),
            [key] => self.smembers(key),
            _ => match self.operands(keys).as_slice() {
                [] => Vec::new(),
                [only] => only.list(),
                [a, b, rest @ ..] => op(a, b, rest).list(),
            },
        }
    }

    fn store(&mut self, dest: &str, members: Vec<T>) -> usize {
        let stored = members.len();
        if stored > 0 {
            self.entry(dest).add(members);
        }
        trace!(dest = %dest, stored, "stored combination");
        stored
    }

    /// Members of any of `keys`. Missing keys contribute nothing.
    pub fn sunion(&self, keys: &[&str]) -> Vec<T> {
        self.combine(keys, algebra::union::<T, HashMemberSet<T>>)
    }

    /// Adds [`Registry::sunion`] of `keys` into `dest` and returns the size of the union, not
    /// of `dest`.
    pub fn sunionstore(&mut self, dest: &str, keys: &[&str]) -> usize {
        let members = self.sunion(keys);
        self.store(dest, members)
    }

    /// Members of the first key that are in none of the others. A missing first key gives an
    /// empty result; other missing keys subtract nothing.
    pub fn sdiff(&self, keys: &[&str]) -> Vec<T> {
        match keys.first() {
            Some(base) if self.exists(base) => {
                self.combine(keys, algebra::difference::<T, HashMemberSet<T>>)
            }
            _ => Vec::new(),
        }
    }

    pub fn sdiffstore(&mut self, dest: &str, keys: &[&str]) -> usize {
        let members = self.sdiff(keys);
        self.store(dest, members)
    }

    /// Members common to every existing key among `keys`. Missing keys are skipped rather
    /// than emptying the result.
    pub fn sinter(&self, keys: &[&str]) -> Vec<T> {
        self.combine(keys, algebra::intersection::<T, HashMemberSet<T>>)
    }

    /// Like [`Registry::sunionstore`] over [`Registry::sinter`], except that a single key
    /// short-circuits: its cardinality is returned and nothing is written to `dest`.
    pub fn sinterstore(&mut self, dest: &str, keys: &[&str]) -> usize {
        match keys {
            [] => 0,
            [key] => self.scard(key),
            _ => {
                let members = self.sinter(keys);
                self.store(dest, members)
            }
        }
    }

    /// Whether `key` is present, regardless of its cardinality.
    pub fn skey_exists(&self, key: &str) -> bool {
        self.exists(key)
    }

    pub fn sclear(&mut self, key: &str) {
        if self.records.remove(key).is_some() {
            debug!(key = %key, "cleared set");
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }
}
