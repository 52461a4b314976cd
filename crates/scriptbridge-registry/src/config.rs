//! Registry configuration.

/// What a lookup does when no constructor is registered for a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnregisteredPolicy {
    /// Fall back to the null constructor, so conversion yields the none value.
    #[default]
    NullFallback,
    /// Fail the lookup with [`DispatchError::Unregistered`](crate::DispatchError::Unregistered).
    Reject,
}

/// Options for a [`ConstructorRegistry`](crate::ConstructorRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegistryConfig {
    /// Behaviour for lookups of unregistered types.
    pub unregistered: UnregisteredPolicy,
    /// Let a registration replace an existing constructor instead of failing.
    pub allow_replace: bool,
}

impl RegistryConfig {
    /// Default configuration: null fallback, no replacement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy for unregistered types.
    pub fn with_unregistered(mut self, policy: UnregisteredPolicy) -> Self {
        self.unregistered = policy;
        self
    }

    /// Allow or forbid replacing registered constructors.
    pub fn with_allow_replace(mut self, allow: bool) -> Self {
        self.allow_replace = allow;
        self
    }
}
