use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Declares a closed enumeration with a stable lowercase key per variant.
///
/// The key is what config files, environment variables and form values carry; the
/// generated `FromStr` rejects anything outside the set.
macro_rules! keyed_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $error:ident {
            $($variant:ident => $key:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let key = raw.trim().to_ascii_lowercase();
                match key.as_str() {
                    $($key => Ok($name::$variant),)+
                    _ => Err(DomainError::$error(raw.to_string())),
                }
            }
        }
    };
}

keyed_enum! {
    /// Top-level section of the site.
    View, UnknownView {
        Home => "home",
        Services => "services",
        Compliance => "compliance",
        Contact => "contact",
    }
}

keyed_enum! {
    ServiceId, UnknownService {
        Inspection => "inspection",
        Documentation => "documentation",
        Cinematography => "cinematography",
    }
}

keyed_enum! {
    /// How long the customer expects the job on site to take.
    DurationCategory, UnknownDuration {
        HalfDay => "halfday",
        FullDay => "fullday",
        MultiDay => "multi",
    }
}

impl Default for View {
    fn default() -> Self {
        View::Home
    }
}

impl View {
    pub fn nav_label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Services => "Services",
            View::Compliance => "Compliance",
            View::Contact => "Request Proposal",
        }
    }
}

impl Default for ServiceId {
    fn default() -> Self {
        ServiceId::Inspection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_case_insensitively_with_whitespace() {
        assert_eq!(" Contact ".parse::<View>().expect("view"), View::Contact);
        assert_eq!(
            "CINEMATOGRAPHY".parse::<ServiceId>().expect("service"),
            ServiceId::Cinematography
        );
        assert_eq!(
            "multi".parse::<DurationCategory>().expect("duration"),
            DurationCategory::MultiDay
        );
    }

    #[test]
    fn rejects_keys_outside_the_closed_set() {
        let err = "pricing".parse::<View>().expect_err("unknown view");
        assert_eq!(err, DomainError::UnknownView("pricing".to_string()));

        let err = "half-day".parse::<DurationCategory>().expect_err("unknown duration");
        assert_eq!(err, DomainError::UnknownDuration("half-day".to_string()));
    }

    #[test]
    fn display_matches_key_for_every_variant() {
        for view in View::ALL {
            assert_eq!(view.to_string(), view.key());
            assert_eq!(view.key().parse::<View>().expect("round trip"), *view);
        }
        for service in ServiceId::ALL {
            assert_eq!(service.key().parse::<ServiceId>().expect("round trip"), *service);
        }
    }

    #[test]
    fn serializes_with_wire_keys() {
        assert_eq!(
            serde_json::to_string(&DurationCategory::HalfDay).expect("json"),
            "\"halfday\""
        );
        let view: View = serde_json::from_str("\"compliance\"").expect("view");
        assert_eq!(view, View::Compliance);
    }

    #[test]
    fn defaults_to_home_and_first_service() {
        assert_eq!(View::default(), View::Home);
        assert_eq!(ServiceId::default(), ServiceId::Inspection);
    }
}
