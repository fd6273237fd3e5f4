//! Chain, bridge and tree emitters for the transition-system fixture
//!
//! The emitted graph: a linear chain `init_0 -> ... -> init_{NUM_VARS}`
//! whose edges set one boolean variable each, a bridge edge into `btree_`,
//! and a complete binary tree of depth DEPTH below `btree_`. Starting in
//! `init_0` with any assignment, every node is reachable, which makes the
//! fixture a useful stress case for reachability checkers.

use std::fmt;
use std::io::Write;

use tracing::debug;

use crate::errors::GeneratorResult;
use crate::params::Params;
use crate::writer::RowWriter;

/// State update attached to an edge: set `var` to the value of `formula`
/// when the transition fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub var: String,
    pub formula: String,
}

/// One edge row: `src,dst,guard[,action_var,action_formula]`.
/// Rows are variable-width; fields are emitted verbatim, unquoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub src: String,
    pub dst: String,
    pub guard: String,
    pub action: Option<Action>,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.src, self.dst, self.guard)?;
        if let Some(action) = &self.action {
            write!(f, ",{},{}", action.var, action.formula)?;
        }
        Ok(())
    }
}

/// Guard asserting that all of `var_0..var_{num_vars-1}` hold.
///
/// Reproduces the historical string construction exactly: `num_vars - 1`
/// leading `(&) ` tokens followed by the space-joined variable list.
/// Downstream parsers consume this literal text, so it must not be
/// normalized into a conventional nested AND expression.
pub fn all_true_guard(num_vars: u32) -> String {
    let vars = (0..num_vars)
        .map(|i| format!("var_{}", i))
        .collect::<Vec<_>>()
        .join(" ");
    let ops = "(&) ".repeat((num_vars as usize).saturating_sub(1));
    format!("{}{}", ops, vars)
}

/// Emits the fixture's edge rows in a fixed, deterministic order:
/// chain edges first (index order), then the bridge, then the tree in
/// pre-order with branch 0 before branch 1.
#[derive(Debug)]
pub struct FixtureGenerator {
    params: Params,
    all_true: String,
}

impl FixtureGenerator {
    pub fn new(params: Params) -> Self {
        let all_true = all_true_guard(params.num_vars);
        Self { params, all_true }
    }

    pub fn run<W: Write>(&self, out: &mut RowWriter<W>) -> GeneratorResult<()> {
        self.emit_chain(out)?;
        self.emit_bridge(out)?;
        self.emit_tree(out, "", self.params.depth)?;
        debug!("emitted {} rows", out.rows_written());
        Ok(())
    }

    /// Chain edges `(init_i, init_{i+1})`, each setting `var_i` to true.
    fn emit_chain<W: Write>(&self, out: &mut RowWriter<W>) -> GeneratorResult<()> {
        for i in 0..self.params.num_vars {
            let edge = Edge {
                src: format!("init_{}", i),
                dst: format!("init_{}", i + 1),
                guard: "(true)".to_string(),
                action: Some(Action {
                    var: format!("var_{}", i),
                    formula: "(true)".to_string(),
                }),
            };
            out.write_row(&edge.to_string())?;
        }
        debug!("chain: {} edges", self.params.num_vars);
        Ok(())
    }

    /// The single edge from the chain's last node into the tree root,
    /// guarded on all variables being true, with no action.
    fn emit_bridge<W: Write>(&self, out: &mut RowWriter<W>) -> GeneratorResult<()> {
        let edge = Edge {
            src: format!("init_{}", self.params.num_vars),
            dst: "btree_".to_string(),
            guard: self.all_true.clone(),
            action: None,
        };
        out.write_row(&edge.to_string())?;
        Ok(())
    }

    /// Pre-order recursive descent. `prefix` is the binary path from the
    /// root; recursion stops (without emitting) at depth 0.
    fn emit_tree<W: Write>(
        &self,
        out: &mut RowWriter<W>,
        prefix: &str,
        depth_remaining: u32,
    ) -> GeneratorResult<()> {
        if depth_remaining == 0 {
            return Ok(());
        }
        for branch in 0..=1 {
            let child = format!("{}{}", prefix, branch);
            let edge = Edge {
                src: format!("btree_{}", prefix),
                dst: format!("btree_{}", child),
                guard: self.all_true.clone(),
                action: None,
            };
            out.write_row(&edge.to_string())?;
            self.emit_tree(out, &child, depth_remaining - 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(num_vars: u32, depth: u32) -> String {
        let params = Params::new(num_vars, depth).unwrap();
        let mut buf = Vec::new();
        let mut out = RowWriter::new(&mut buf);
        FixtureGenerator::new(params).run(&mut out).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_all_true_guard_single_var_has_no_operator() {
        assert_eq!(all_true_guard(1), "var_0");
    }

    #[test]
    fn test_all_true_guard_prepends_operator_tokens() {
        assert_eq!(all_true_guard(3), "(&) (&) var_0 var_1 var_2");
    }

    #[test]
    fn test_edge_row_with_action_has_five_fields() {
        let edge = Edge {
            src: "init_0".into(),
            dst: "init_1".into(),
            guard: "(true)".into(),
            action: Some(Action {
                var: "var_0".into(),
                formula: "(true)".into(),
            }),
        };
        assert_eq!(edge.to_string(), "init_0,init_1,(true),var_0,(true)");
    }

    #[test]
    fn test_golden_output_v2_d1() {
        let expected = "\
init_0,init_1,(true),var_0,(true)
init_1,init_2,(true),var_1,(true)
init_2,btree_,(&) var_0 var_1
btree_,btree_0,(&) var_0 var_1
btree_,btree_1,(&) var_0 var_1";
        assert_eq!(render(2, 1), expected);
    }

    #[test]
    fn test_tree_traversal_is_preorder_branch_zero_first() {
        let output = render(1, 2);
        let dsts: Vec<&str> = output
            .lines()
            .skip(2) // chain + bridge
            .map(|line| line.split(',').nth(1).unwrap())
            .collect();
        assert_eq!(
            dsts,
            vec!["btree_0", "btree_00", "btree_01", "btree_1", "btree_10", "btree_11"]
        );
    }

    #[test]
    fn test_minimal_fixture_has_four_rows() {
        assert_eq!(render(1, 1).lines().count(), 4);
    }
}
