/// Defines a newtype index wrapper around an unsigned scalar (typically `usize`)
/// and generates:
/// - derives (Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)
/// - `Display` and `FromStr`
/// - `From<$inner> for $name` and `From<$name> for $inner`
///
/// Usage:
///   define_index_type!(usize, DeviceSetIndex);
#[macro_export]
macro_rules! define_index_type {
    ($inner:ty, $name:ident) => {
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(pub $inner);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}", self.0)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::num::ParseIntError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                s.parse::<$inner>().map($name)
            }
        }

        impl ::std::convert::From<$inner> for $name {
            fn from(v: $inner) -> Self {
                $name(v)
            }
        }

        impl ::std::convert::From<$name> for $inner {
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl $name {
            pub fn new(value: $inner) -> Self {
                $name(value)
            }

            pub fn value(&self) -> $inner {
                self.0
            }
        }
    };
}

/// Declares a settings/report payload shape.
///
/// Every field becomes `Option<T>` with a camelCase wire name, is omitted from
/// the output when unset and is left unset when absent from the input. Unknown
/// input fields are ignored. Field attributes (for example an explicit
/// `#[serde(rename = "...")]`) are passed through.
///
/// Usage:
///   payload_struct! {
///       pub struct RtlSdrSettings {
///           center_frequency: i64,
///           #[serde(rename = "useReverseAPI")]
///           use_reverse_api: i32,
///       }
///   }
#[macro_export]
macro_rules! payload_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }
    };
}

/// Declares a closed union of payload variants selected by a string
/// discriminator and a direction, and implements
/// [`Variant`](crate::mapping::Variant) for it.
///
/// Each arm names the variant, its payload type and the
/// `(discriminator, direction, key)` triple: the discriminator value, the
/// direction the variant is registered for and the JSON key holding the
/// payload sub-object.
///
/// Usage:
///   variant_union! {
///       pub enum DeviceSettingsVariant: "deviceHwType" {
///           RtlSdr(RtlSdrSettings) = ("RTLSDR", Rx, "rtlSdrSettings"),
///       }
///   }
#[macro_export]
macro_rules! variant_union {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $field:literal {
            $(
                $variant:ident ( $payload:ty ) = ( $disc:literal, $dir:ident, $key:literal )
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $( $variant($payload), )*
        }

        impl $crate::mapping::Variant for $name {
            const DISCRIMINATOR_FIELD: &'static str = $field;

            fn entries() -> ::std::vec::Vec<$crate::mapping::VariantEntry<Self>> {
                ::std::vec![
                    $(
                        $crate::mapping::VariantEntry {
                            discriminator: $disc,
                            direction: $crate::models::Direction::$dir,
                            key: $key,
                            decode: |value: ::serde_json::Value| {
                                $crate::mapping::decode_payload::<$payload>(value).map($name::$variant)
                            },
                        },
                    )*
                ]
            }

            fn discriminator(&self) -> &'static str {
                match self {
                    $( $name::$variant(_) => $disc, )*
                }
            }

            fn direction(&self) -> $crate::models::Direction {
                match self {
                    $( $name::$variant(_) => $crate::models::Direction::$dir, )*
                }
            }

            fn key(&self) -> &'static str {
                match self {
                    $( $name::$variant(_) => $key, )*
                }
            }

            fn decode_key(
                key: &str,
                value: ::serde_json::Value,
            ) -> ::std::option::Option<
                ::std::result::Result<Self, $crate::mapping::PayloadError>,
            > {
                match key {
                    $( $key => ::std::option::Option::Some(
                        $crate::mapping::decode_payload::<$payload>(value).map($name::$variant),
                    ), )*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                match self {
                    $( $name::$variant(payload) => ::serde::Serialize::serialize(payload, serializer), )*
                }
            }
        }

        $(
            impl ::std::convert::From<$payload> for $name {
                fn from(payload: $payload) -> Self {
                    $name::$variant(payload)
                }
            }
        )*
    };
}
