//! Macros for ergonomic state definitions.

/// Generate a `State` implementation for a simple enum.
///
/// Each variant's name is its identifier. The enum also derives `Clone`,
/// `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug` and serde's `Serialize` and
/// `Deserialize`.
///
/// # Example
///
/// ```
/// use waypoint::core::State;
/// use waypoint::state_enum;
///
/// state_enum! {
///     pub enum Turnstile {
///         Locked,
///         Unlocked,
///     }
/// }
///
/// assert_eq!(Turnstile::Locked.name(), "Locked");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestState {
            Locked,
            Unlocked,
            Broken,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Locked.name(), "Locked");
        assert_eq!(TestState::Unlocked.name(), "Unlocked");
        assert_eq!(TestState::Broken.name(), "Broken");
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            /// Public states
            pub enum PublicState {
                A,
                B,
            }
        }

        assert_ne!(PublicState::A, PublicState::B);
    }

    #[test]
    fn state_enum_serializes_by_variant_name() {
        let json = serde_json::to_string(&TestState::Broken).unwrap();

        assert_eq!(json, "\"Broken\"");
    }
}
