// image-feed-core-client/image-feed-utils
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Declares a `String` newtype that is used as an opaque identifier, e.g. a photo id or an
/// OAuth authorization code.
#[macro_export]
macro_rules! id_string {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Eq, PartialEq, Hash, Clone, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            #[allow(dead_code)]
            pub fn into_inner(self) -> String {
                self.0
            }

            #[allow(dead_code)]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<T> From<T> for $t
        where
            T: Into<String>,
        {
            fn from(s: T) -> $t {
                $t(s.into())
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $t {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($t(s.to_string()))
            }
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    crate::id_string!(
        /// Used only by the tests below.
        SampleId
    );

    #[test]
    fn test_serializes_transparently() {
        let id = SampleId::from("LBI7cgq3pbM");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""LBI7cgq3pbM""#);

        let decoded: SampleId = serde_json::from_str(r#""LBI7cgq3pbM""#).unwrap();
        assert_eq!(decoded, id);
    }

    #[test]
    fn test_can_be_looked_up_by_str() {
        let ids = HashSet::from([SampleId::from("a"), SampleId::from("b")]);
        assert!(ids.contains("a"));
        assert!(!ids.contains("c"));
    }
}
