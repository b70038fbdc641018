//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{State, Transition};

/// Builder for constructing transitions with a fluent API.
///
/// # Example
///
/// ```rust
/// use waypoint::builder::TransitionBuilder;
///
/// let coin = TransitionBuilder::new("coin")
///     .from("locked")
///     .from("unlocked")
///     .to("unlocked")
///     .build()
///     .unwrap();
///
/// assert_eq!(coin.from, vec!["locked", "unlocked"]);
/// ```
#[derive(Debug)]
pub struct TransitionBuilder<S: State> {
    name: String,
    from: Vec<S>,
    to: Option<S>,
}

impl<S: State> TransitionBuilder<S> {
    /// Create a new builder for the transition called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            from: Vec::new(),
            to: None,
        }
    }

    /// Add an origin state (at least one required).
    pub fn from(mut self, state: S) -> Self {
        if !self.from.contains(&state) {
            self.from.push(state);
        }
        self
    }

    /// Add several origin states.
    pub fn from_any<I>(self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        states.into_iter().fold(self, Self::from)
    }

    /// Set the destination state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S>, BuildError> {
        if self.name.is_empty() {
            return Err(BuildError::EmptyName);
        }
        if self.from.is_empty() {
            return Err(BuildError::MissingOrigin { name: self.name });
        }
        let Some(to) = self.to else {
            return Err(BuildError::MissingDestination { name: self.name });
        };

        Ok(Transition {
            name: self.name,
            from: self.from,
            to,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_missing_origin() {
        let result = TransitionBuilder::new("coin").to("unlocked").build();

        assert_eq!(
            result,
            Err(BuildError::MissingOrigin {
                name: "coin".to_string()
            })
        );
    }

    #[test]
    fn builder_validates_missing_destination() {
        let result = TransitionBuilder::new("coin").from("locked").build();

        assert!(matches!(result, Err(BuildError::MissingDestination { .. })));
    }

    #[test]
    fn builder_rejects_empty_name() {
        let result = TransitionBuilder::new("").from("a").to("b").build();

        assert_eq!(result, Err(BuildError::EmptyName));
    }

    #[test]
    fn duplicate_origins_are_collapsed() {
        let transition = TransitionBuilder::new("push")
            .from_any(["locked", "unlocked", "locked"])
            .to("locked")
            .build()
            .unwrap();

        assert_eq!(transition.from, vec!["locked", "unlocked"]);
    }

    #[test]
    fn fluent_api_builds_transition() {
        let transition = TransitionBuilder::new("coin")
            .from(String::from("locked"))
            .to(String::from("unlocked"))
            .build()
            .unwrap();

        assert_eq!(transition.name, "coin");
        assert!(transition.is_valid_from(&String::from("locked")));
        assert!(transition.leads_to(&String::from("unlocked")));
    }
}
