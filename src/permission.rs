//! Permission notation and implication.
//!
//! A notation is a `:` divided list of sections. Each section is either the
//! wildcard `*` or a `,` separated set of word tokens (`[A-Za-z0-9_]+`):
//!
//! ```text
//! notation   := section (':' section)*
//! section    := '*' | token (',' token)*
//! token      := [A-Za-z0-9_]+
//! ```
//!
//! Sections are compared positionally, leftmost first. Within a section the
//! token order is irrelevant.

use std::any::Any;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::matcher::Matcher;

/// Token matching everything in a section.
pub const WILDCARD: &str = "*";

/// Character dividing notation sections.
pub const DIVIDER: char = ':';

/// Character separating tokens in a section.
pub const SEPARATOR: char = ',';

/// One divider delimited segment of a notation.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Section {
    /// Matches any token.
    Wildcard,
    /// Matches any of the contained tokens.
    Tokens(BTreeSet<String>),
}

impl Section {
    fn parse(raw: &str) -> Option<Section> {
        if raw == WILDCARD {
            return Some(Section::Wildcard);
        }

        raw.split(SEPARATOR)
            .map(|token| is_token(token).then(|| token.to_string()))
            .collect::<Option<BTreeSet<_>>>()
            .map(Section::Tokens)
    }

    /// True if this is the wildcard section.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Section::Wildcard)
    }

    /// Tokens of a non-wildcard section.
    pub fn tokens(&self) -> Option<&BTreeSet<String>> {
        match self {
            Section::Wildcard => None,
            Section::Tokens(tokens) => Some(tokens),
        }
    }
}

/// A granted section matches a requested one if it is the wildcard or the two
/// share at least one token. A requested wildcard is only matched by a granted
/// wildcard.
impl Matcher for Section {
    type Target = Section;

    fn test(&self, target: &Self::Target) -> bool {
        use Section::*;
        match (self, target) {
            (Wildcard, _) => true,
            (Tokens(_), Wildcard) => false,
            (Tokens(granted), Tokens(requested)) => !granted.is_disjoint(requested),
        }
    }
}

fn is_token(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Immutable permission parsed from a notation string.
///
/// # Example
///
/// ```
/// use authorization_realms::Permission;
///
/// let granted = Permission::new("blog:post:*").unwrap();
/// let requested = Permission::new("blog:post:write").unwrap();
///
/// assert!(granted.implies(&requested));
/// assert!(!requested.implies(&granted));
/// assert!(Permission::new("blog::post").is_err());
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Permission {
    notation: String,
    sections: Vec<Section>,
}

impl Permission {
    /// Parse and validate `notation`. Fails with [`Error::InvalidNotation`] if
    /// it does not match the grammar.
    pub fn new<S>(notation: S) -> Result<Self>
    where
        S: Into<String>,
    {
        let notation = notation.into();
        let sections = notation
            .split(DIVIDER)
            .map(Section::parse)
            .collect::<Option<Vec<_>>>();

        match sections {
            Some(sections) => Ok(Permission { notation, sections }),
            None => Err(Error::invalid_notation(notation)),
        }
    }

    /// The notation this permission was parsed from.
    pub fn notation(&self) -> &str {
        &self.notation
    }

    /// Parsed sections, most significant first.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Determine if this (granted) permission satisfies `other` (requested).
    ///
    /// Sections are compared by position over `other`. If this permission runs
    /// out of sections first, the remaining requested sections are satisfied
    /// without further checks, so `foo:bar` implies `foo:bar:baz`. Sections of
    /// this permission beyond the length of `other` must all be wildcards.
    pub fn implies(&self, other: &Permission) -> bool {
        for (index, requested) in other.sections.iter().enumerate() {
            match self.sections.get(index) {
                None => return true,
                Some(granted) if !granted.test(requested) => return false,
                Some(_) => {}
            }
        }

        self.sections
            .iter()
            .skip(other.sections.len())
            .all(Section::is_wildcard)
    }

    /// Like [`Permission::implies`] for a value of unknown type. Anything that
    /// is not a `Permission` is never implied.
    pub fn implies_value(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Permission>()
            .map_or(false, |other| self.implies(other))
    }
}

impl Matcher for Permission {
    type Target = Permission;

    fn test(&self, target: &Self::Target) -> bool {
        self.implies(target)
    }
}

impl FromStr for Permission {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Permission::new(s)
    }
}

impl TryFrom<String> for Permission {
    type Error = Error;

    fn try_from(notation: String) -> Result<Self> {
        Permission::new(notation)
    }
}

impl TryFrom<&str> for Permission {
    type Error = Error;

    fn try_from(notation: &str) -> Result<Self> {
        Permission::new(notation)
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.notation
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use proptest::prelude::*;

    fn perm(notation: &str) -> Permission {
        Permission::new(notation).unwrap()
    }

    fn check(granted: &str, requested: &str, expected: bool) {
        assert_eq!(
            perm(granted).implies(&perm(requested)),
            expected,
            "{granted} implies {requested}"
        );
    }

    #[test]
    fn test_parse_sections() {
        let p = perm("blog:read,write,read:*");

        let tokens: BTreeSet<String> = ["read", "write"].iter().map(|s| s.to_string()).collect();
        assert_eq!(
            p.sections(),
            &[
                Section::Tokens(["blog".to_string()].into_iter().collect()),
                Section::Tokens(tokens),
                Section::Wildcard,
            ]
        );
        assert_eq!(p.notation(), "blog:read,write,read:*");
        assert_eq!(p.to_string(), "blog:read,write,read:*");
    }

    #[test]
    fn test_valid_notations() {
        for notation in ["*", "foo", "foo_bar", "Foo9:*", "a,b,c:d:*", "*:*", "_:0"] {
            assert!(Permission::new(notation).is_ok(), "{notation}");
        }
    }

    #[test]
    fn test_invalid_notations() {
        for notation in [
            "", ":", "foo:", ":foo", "foo::bar", "foo:!bad", "foo,", ",foo", "foo,,bar", "*,foo",
            "foo:*bar", "**", "foo bar", "foo-bar", "föö", "foo:bar\n",
        ] {
            match Permission::new(notation) {
                Err(Error::InvalidNotation { notation: n }) => assert_eq!(n, notation),
                other => panic!("{notation:?} gave {other:?}"),
            }
        }
    }

    #[test]
    fn test_section_matcher() {
        let foo = Section::parse("foo").unwrap();
        let foo_bar = Section::parse("bar,foo").unwrap();
        let baz = Section::parse("baz").unwrap();

        assert!(Section::Wildcard.test(&foo));
        assert!(Section::Wildcard.test(&Section::Wildcard));
        assert!(!foo.test(&Section::Wildcard));
        assert!(foo.test(&foo_bar));
        assert!(foo_bar.test(&foo));
        assert!(!foo.test(&baz));
    }

    #[test]
    fn test_implies() {
        check("foo", "foo", true);
        check("foo", "bar", false);
        check("foo:*", "foo:bar", true);
        check("foo:*", "foo:bar,baz", true);
        check("foo:bar", "foo:*", false);
        check("foo:bar,baz", "foo:baz", true);
        check("foo:baz", "foo:bar,baz", true);
        check("foo:bar", "foo:baz", false);
        check("*", "foo:bar:baz", true);
        check("*:bar", "foo:bar", true);
        check("*:bar", "foo:baz", false);
    }

    #[test]
    fn test_implies_shorter_grant() {
        check("foo", "foo:bar", true);
        check("foo:bar", "foo:bar:baz", true);
        check("foo:bar", "foo:qux:baz", false);
    }

    #[test]
    fn test_implies_trailing_sections() {
        check("foo:bar:read", "foo:bar", false);
        check("foo:bar:*", "foo:bar", true);
        check("foo:*:*", "foo", true);
        check("foo:*:read", "foo", false);
        check("*:*", "foo", true);
    }

    #[test]
    fn test_implies_case_sensitive() {
        check("Foo", "foo", false);
        check("foo:BAR", "foo:bar", false);
    }

    #[test]
    fn test_implies_value_other_kind() {
        let p = perm("*");

        assert!(p.implies_value(&perm("foo")));
        assert!(!p.implies_value(&"foo"));
        assert!(!p.implies_value(&"foo".to_string()));
        assert!(!p.implies_value(&crate::role::Role::new("foo")));
    }

    #[test]
    fn test_matcher_is_implies() {
        let granted = perm("foo:*");
        assert!(granted.test(&perm("foo:bar")));
        assert!(!granted.test(&perm("bar")));
    }

    #[test]
    fn test_serde_string_form() {
        #[derive(Debug, Serialize, Deserialize)]
        struct Holder {
            permission: Permission,
        }

        let holder: Holder = toml::from_str(r#"permission = "foo:bar,baz""#).unwrap();
        assert_eq!(holder.permission, perm("foo:bar,baz"));

        let text = toml::to_string(&holder).unwrap();
        assert_eq!(text.trim(), r#"permission = "foo:bar,baz""#);

        assert!(toml::from_str::<Holder>(r#"permission = "foo::bar""#).is_err());
    }

    fn arb_section() -> impl Strategy<Value = String> {
        prop_oneof![
            1 => Just(WILDCARD.to_string()),
            4 => prop::collection::vec("[A-Za-z0-9_]{1,6}", 1..4).prop_map(|t| t.join(",")),
        ]
    }

    fn arb_notation() -> impl Strategy<Value = String> {
        prop::collection::vec(arb_section(), 1..6).prop_map(|s| s.join(":"))
    }

    proptest! {
        #[test]
        fn implies_reflexive(notation in arb_notation()) {
            let p = perm(&notation);
            prop_assert!(p.implies(&p));
        }

        #[test]
        fn wildcard_implies_everything(notation in arb_notation()) {
            prop_assert!(perm(WILDCARD).implies(&perm(&notation)));
        }

        #[test]
        fn trailing_wildcard_implies_prefix(notation in arb_notation()) {
            let granted = perm(&format!("{notation}:*"));
            prop_assert!(granted.implies(&perm(&notation)));
        }

        #[test]
        fn parse_keeps_notation(notation in arb_notation()) {
            let p = perm(&notation);
            prop_assert_eq!(p.notation(), notation.as_str());
            prop_assert_eq!(p.sections().len(), notation.split(DIVIDER).count());
        }

        #[test]
        fn empty_section_rejected(left in arb_notation(), right in arb_notation()) {
            let notation = format!("{left}::{right}");
            prop_assert!(Permission::new(notation).is_err());
        }
    }
}
