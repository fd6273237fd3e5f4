//! Fixture parameters: resolution from CLI positionals and validation

use crate::errors::{GeneratorError, GeneratorResult};

pub const DEFAULT_NUM_VARS: u32 = 10;
pub const DEFAULT_DEPTH: u32 = 5;

/// Validated generator parameters.
///
/// `num_vars` is the length of the init chain (one boolean variable per
/// chain edge), `depth` the depth of the complete binary tree hanging off
/// the chain's last node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub num_vars: u32,
    pub depth: u32,
}

impl Params {
    pub fn new(num_vars: u32, depth: u32) -> GeneratorResult<Self> {
        if num_vars < 1 {
            return Err(GeneratorError::InvalidParameter {
                name: "NUM_VARS",
                value: num_vars,
            });
        }
        if depth < 1 {
            return Err(GeneratorError::InvalidParameter {
                name: "DEPTH",
                value: depth,
            });
        }
        Ok(Self { num_vars, depth })
    }

    /// Resolve the positional pair: both given, or neither (compiled-in
    /// defaults). A lone value is rejected instead of silently defaulting;
    /// clap already enforces this at parse time, this is the library-level
    /// guarantee for non-CLI callers.
    pub fn resolve(num_vars: Option<u32>, depth: Option<u32>) -> GeneratorResult<Self> {
        match (num_vars, depth) {
            (Some(n), Some(d)) => Self::new(n, d),
            (None, None) => Self::new(DEFAULT_NUM_VARS, DEFAULT_DEPTH),
            _ => Err(GeneratorError::IncompleteParameters),
        }
    }

    /// Conventional output file name: `big_v{NUM_VARS}_d{DEPTH}.csv`
    pub fn default_output_name(&self) -> String {
        format!("big_v{}_d{}.csv", self.num_vars, self.depth)
    }

    /// Total rows the generator will emit: chain + bridge + tree edges.
    pub fn total_rows(&self) -> u64 {
        u64::from(self.num_vars) + 1 + self.tree_rows()
    }

    /// Tree edge count: 2^(DEPTH+1) - 2
    pub fn tree_rows(&self) -> u64 {
        (1u64 << (self.depth + 1)) - 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_num_vars() {
        let err = Params::new(0, 5).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::InvalidParameter {
                name: "NUM_VARS",
                value: 0
            }
        ));
    }

    #[test]
    fn test_new_rejects_zero_depth() {
        let err = Params::new(10, 0).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::InvalidParameter {
                name: "DEPTH",
                value: 0
            }
        ));
    }

    #[test]
    fn test_resolve_defaults_when_neither_given() {
        let params = Params::resolve(None, None).unwrap();
        assert_eq!(params.num_vars, DEFAULT_NUM_VARS);
        assert_eq!(params.depth, DEFAULT_DEPTH);
    }

    #[test]
    fn test_resolve_rejects_lone_value() {
        assert!(matches!(
            Params::resolve(Some(3), None),
            Err(GeneratorError::IncompleteParameters)
        ));
    }

    #[test]
    fn test_output_name_pattern() {
        let params = Params::new(2, 1).unwrap();
        assert_eq!(params.default_output_name(), "big_v2_d1.csv");
    }

    #[test]
    fn test_row_counts() {
        let params = Params::new(1, 1).unwrap();
        assert_eq!(params.tree_rows(), 2);
        assert_eq!(params.total_rows(), 4);

        let params = Params::new(10, 5).unwrap();
        assert_eq!(params.tree_rows(), 62);
        assert_eq!(params.total_rows(), 73);
    }
}
