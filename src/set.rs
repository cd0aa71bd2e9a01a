use std::collections::hash_set::Iter;
use std::collections::HashSet;
use std::hash::Hash;
use std::ops::ControlFlow;

/// Membership set. This is the container behind every key of a [`crate::Registry`].
pub trait MemberSet<T> {
    type MemberIter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;
    /// Check if the set contains a target.
    fn contains(&self, target: &T) -> bool;

    /// Iterate all members. No ordering is guaranteed, not even between two calls.
    fn iter<'a>(&'a self) -> Self::MemberIter<'a>;

    /// Insert a new element to the set. The data structure is expected to maintain the
    /// uniqueness of its member on itself.
    fn insert(&mut self, target: T);

    /// Delete an element. Returns whether it was present.
    fn remove(&mut self, target: &T) -> bool;

    /// Cardinality.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert every element of `items`. Elements already present are left alone.
    fn add<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.insert(item);
        }
    }

    /// Delete every element of `items`, ignoring the ones that are absent.
    fn remove_all<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        for item in items {
            self.remove(item);
        }
    }

    /// Returns `true` only if **all** of `items` are members. An empty `items` gives `false`.
    fn has(&self, items: &[T]) -> bool {
        !items.is_empty() && items.iter().all(|x| self.contains(x))
    }

    /// Visit the members until the visitor breaks.
    fn each<F>(&self, mut visit: F)
    where
        F: FnMut(&T) -> ControlFlow<()>,
    {
        for item in self.iter() {
            if visit(item).is_break() {
                break;
            }
        }
    }

    /// A freshly allocated list of all members.
    fn list(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut list = Vec::with_capacity(self.len());
        list.extend(self.iter().cloned());
        list
    }
}

/// Similar to [`MemberSet`] but also provides merge operations.
/// [`Clone`] must produce an independent copy.
pub trait MergeSet<T>: MemberSet<T> + Clone {
    /// Check subset relation.
    fn subset(&self, other: &Self) -> bool {
        self.iter().all(|x| other.contains(x))
    }
    /// Collect all elements from the other set into current set.
    fn merge(&mut self, other: &Self);
    /// Drop from the current set every element of the other set.
    /// Not the inverse of [`MergeSet::merge`].
    fn separate(&mut self, other: &Self);
}

/// [`HashSet`] backed set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashMemberSet<T: Eq + Hash>(HashSet<T>);

impl<T: Eq + Hash> HashMemberSet<T> {
    pub fn new() -> Self {
        Self(HashSet::new())
    }

    /// A deep copy; mutating either side never affects the other.
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        self.clone()
    }
}

impl<T: Eq + Hash> Default for HashMemberSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for HashMemberSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Eq + Hash> MemberSet<T> for HashMemberSet<T> {
    type MemberIter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn contains(&self, target: &T) -> bool {
        self.0.contains(target)
    }

    fn iter<'a>(&'a self) -> Self::MemberIter<'a> {
        self.0.iter()
    }

    fn insert(&mut self, target: T) {
        self.0.insert(target);
    }

    fn remove(&mut self, target: &T) -> bool {
        self.0.remove(target)
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T: Eq + Hash + Clone> MergeSet<T> for HashMemberSet<T> {
    fn merge(&mut self, other: &Self) {
        self.0.extend(other.0.iter().cloned());
    }

    fn separate(&mut self, other: &Self) {
        // walk the smaller side
        if other.len() < self.len() {
            for x in other.iter() {
                self.0.remove(x);
            }
        } else {
            self.0.retain(|x| !other.contains(x));
        }
    }
}
