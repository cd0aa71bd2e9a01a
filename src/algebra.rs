use std::ops::ControlFlow;

use crate::set::{MemberSet, MergeSet};

/// All elements present in any of `a`, `b` and `rest`.
pub fn union<T, S: MergeSet<T>>(a: &S, b: &S, rest: &[&S]) -> S {
    let mut result = a.clone();
    result.merge(b);
    for s in rest {
        result.merge(s);
    }
    result
}

/// Elements of `a` that are in neither `b` nor any of `rest`.
pub fn difference<T, S: MergeSet<T>>(a: &S, b: &S, rest: &[&S]) -> S {
    let mut result = a.clone();
    result.separate(b);
    for s in rest {
        result.separate(s);
    }
    result
}

/// Elements present in every operand. Operand order does not matter.
pub fn intersection<T, S: MergeSet<T>>(a: &S, b: &S, rest: &[&S]) -> S {
    let candidates = union::<T, S>(a, b, rest);
    let mut result = candidates.clone();
    candidates.each(|x| {
        let everywhere = a.contains(x) && b.contains(x) && rest.iter().all(|s| s.contains(x));
        if !everywhere {
            result.remove(x);
        }
        ControlFlow::Continue(())
    });
    result
}
