//! Descriptor construction errors and their diagnostics.

use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error while building a package descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackageError {
    #[error("could not resolve upstream package `{package}` required by `{required_by}`")]
    UnresolvableDependency {
        package: String,
        required_by: String,
        available: Vec<String>,
    },

    #[error("cycle detected between packages: {}", .cycle.join(" -> "))]
    DependencyCycle { cycle: Vec<String> },

    #[error("invalid package name `{name}`: {reason}")]
    InvalidName { name: String, reason: String },
}

impl PackageError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            PackageError::UnresolvableDependency {
                package,
                required_by,
                available,
            } => {
                let mut diag =
                    Diagnostic::error(format!("could not resolve upstream package `{}`", package))
                        .with_context(format!("required by `{}`", required_by));

                if !available.is_empty() {
                    diag = diag.with_context(format!("known packages: {}", available.join(", ")));
                }

                diag.with_suggestion(suggestions::DECLARE_UPSTREAM)
                    .with_suggestion(suggestions::CHECK_BASE)
            }

            PackageError::DependencyCycle { cycle } => {
                Diagnostic::error("cycle detected between upstream packages")
                    .with_context(format!("cycle: {}", cycle.join(" -> ")))
                    .with_suggestion(suggestions::BREAK_CYCLE)
            }

            PackageError::InvalidName { name, reason } => {
                Diagnostic::error(format!("invalid package name `{}`", name))
                    .with_context(reason.clone())
                    .with_suggestion(suggestions::RENAME)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolvable_diagnostic() {
        let err = PackageError::UnresolvableDependency {
            package: "cfoo".to_string(),
            required_by: "ctext".to_string(),
            available: vec!["cbase".to_string(), "cunittest".to_string()],
        };

        assert_eq!(
            err.to_string(),
            "could not resolve upstream package `cfoo` required by `ctext`"
        );

        let output = err.to_diagnostic().format(false);
        assert!(output.contains("`cfoo`"));
        assert!(output.contains("required by `ctext`"));
        assert!(output.contains("known packages: cbase, cunittest"));
    }

    #[test]
    fn test_cycle_diagnostic() {
        let err = PackageError::DependencyCycle {
            cycle: vec!["a".into(), "b".into(), "a".into()],
        };
        assert!(err.to_string().contains("a -> b -> a"));
        assert!(err.to_diagnostic().format(false).contains("cycle: a -> b -> a"));
    }
}
