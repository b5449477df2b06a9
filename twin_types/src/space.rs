//! Space kinds

use std::fmt;

/// Which side of the twin pair a piece of code is running on
///
/// Exactly one kind is active per process: the design space originates
/// objects and commands, the run space mirrors and executes them. Dispatch
/// decisions branch on this value rather than on any global flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpaceKind {
    /// Authoritative, originating side
    Design,
    /// Mirrored, executing side
    Run,
}

impl SpaceKind {
    /// Checks if this is the design side
    pub fn is_design(&self) -> bool {
        matches!(self, SpaceKind::Design)
    }

    /// Checks if this is the run side
    pub fn is_run(&self) -> bool {
        matches!(self, SpaceKind::Run)
    }
}

impl fmt::Display for SpaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpaceKind::Design => write!(f, "design"),
            SpaceKind::Run => write!(f, "run"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_kind_predicates() {
        assert!(SpaceKind::Design.is_design());
        assert!(!SpaceKind::Design.is_run());
        assert!(SpaceKind::Run.is_run());
        assert!(!SpaceKind::Run.is_design());
    }

    #[test]
    fn test_space_kind_display() {
        assert_eq!(SpaceKind::Design.to_string(), "design");
        assert_eq!(SpaceKind::Run.to_string(), "run");
    }
}
