/// Declares a closed set of controller strings as an enum.
///
/// Parsing an unlisted string fails with `RecordError::UnrecognizedValue` carrying the
/// accepted strings; serde goes through the same table.
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ACCEPTED: &'static [&'static str] = &[$($wire),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::record::RecordError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(crate::record::RecordError::UnrecognizedValue {
                        value: value.to_owned(),
                        accepted: Self::ACCEPTED,
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <String as serde::Deserialize>::deserialize(deserializer)?;
                value
                    .parse()
                    .map_err(|_| serde::de::Error::unknown_variant(&value, Self::ACCEPTED))
            }
        }

        impl crate::record::RenderField for $name {
            fn render(&self) -> String {
                self.as_str().to_owned()
            }
        }
    };
}

pub(crate) use wire_enum;
