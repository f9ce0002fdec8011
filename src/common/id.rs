use std::{
    borrow::Cow,
    fmt,
    fmt::{
        Debug,
        Display,
    },
    hash,
    hash::Hash,
    str::FromStr,
};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{
    Deserialize,
    Serialize,
    de::Visitor,
};

/// A string that may or may not be owned.
///
/// An optimization that allows the [`Id`] type to directly store string references that are known
/// to already be valid IDs, such as the keys of the species tables compiled into this crate.
#[derive(Clone)]
enum MaybeOwnedString {
    Owned(String),
    Unowned(&'static str),
}

impl AsRef<str> for MaybeOwnedString {
    fn as_ref(&self) -> &str {
        match self {
            Self::Owned(str) => str.as_ref(),
            Self::Unowned(str) => str,
        }
    }
}

impl PartialEq for MaybeOwnedString {
    fn eq(&self, other: &Self) -> bool {
        PartialEq::eq(self.as_ref(), other.as_ref())
    }
}

impl Eq for MaybeOwnedString {}

impl Hash for MaybeOwnedString {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_ref(), state)
    }
}

impl Display for MaybeOwnedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl Debug for MaybeOwnedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// An ID for a resource, such as a species, an ability, or an item.
///
/// Resources of the same type should have a unique ID.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Id(MaybeOwnedString);

impl Id {
    /// Wraps a string that is already a valid, normalized ID.
    ///
    /// Used by the species tables compiled into this crate, whose keys are known to be normalized
    /// at the source level.
    pub(crate) fn from_known(value: &'static str) -> Self {
        Self(MaybeOwnedString::Unowned(value))
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        normalize_id(&value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        normalize_id(value)
    }
}

impl FromStr for Id {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Id::from(s))
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_ref())
    }
}

struct IdVisitor;

impl<'de> Visitor<'de> for IdVisitor {
    type Value = Id;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v))
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(IdVisitor)
    }
}

/// Normalizes the given ID.
///
/// IDs must have lowercase alphanumeric characters. Non-alphanumeric characters are removed.
fn normalize_id(id: &str) -> Id {
    static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]").unwrap());
    match PATTERN.replace_all(&id.to_ascii_lowercase(), "") {
        Cow::Borrowed(str) => Id(MaybeOwnedString::Owned(str.to_owned())),
        Cow::Owned(str) => Id(MaybeOwnedString::Owned(str)),
    }
}

#[cfg(test)]
mod id_test {
    use crate::{
        Id,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    fn assert_normalize_id(input: &str, output: &str) {
        assert_eq!(Id::from(input), Id::from(output));
    }

    #[test]
    fn removes_non_alphanumeric_characters() {
        assert_normalize_id("Venusaur", "venusaur");
        assert_normalize_id("Venusaur-Mega", "venusaurmega");
        assert_normalize_id("Nidoran-F", "nidoranf");
        assert_normalize_id("Sirfetch'd", "sirfetchd");
        assert_normalize_id("Type: Null", "typenull");
        assert_normalize_id("Oricorio-Pa'u", "oricoriopau");
    }

    #[test]
    fn serializes_to_string() {
        test_string_serialization(Id::from("Tapu Koko"), "tapukoko");
        test_string_deserialization("Mr. Mime", Id::from_known("mrmime"));
    }
}
