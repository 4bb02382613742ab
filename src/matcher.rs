//! Value matching traits.
//!
//! A matcher answers whether a requested value is covered by a granted one.
//! Notation sections, permissions and roles all implement it, so the
//! authorizer can scan a set of grants the same way regardless of kind.

/// Basic matcher trait. Represents a class of values
/// for which inclusion can be tested.
pub trait Matcher {
    /// Type of value that can be matched.
    type Target: ?Sized;

    /// Determine if a concrete target matches
    fn test(&self, target: &Self::Target) -> bool;
}

/// Determine if any matcher in `grants` matches `target`. Stops at the first
/// match.
pub fn any_match<'a, M, I>(grants: I, target: &M::Target) -> bool
where
    M: Matcher + 'a,
    I: IntoIterator<Item = &'a M>,
{
    grants.into_iter().any(|m| m.test(target))
}

#[cfg(test)]
mod tests {

    use super::*;

    struct Exact(&'static str);

    impl Matcher for Exact {
        type Target = str;

        fn test(&self, target: &str) -> bool {
            self.0 == target
        }
    }

    #[test]
    fn any_match_hit() {
        let grants = [Exact("foo"), Exact("bar")];
        assert!(any_match(&grants, "bar"));
    }

    #[test]
    fn any_match_miss() {
        let grants = [Exact("foo"), Exact("bar")];
        assert!(!any_match(&grants, "baz"));
    }

    #[test]
    fn any_match_empty() {
        let grants: [Exact; 0] = [];
        assert!(!any_match(&grants, "foo"));
    }
}
