use strata_core::{ParameterStore, ParameterStoreExt, StrataError};
use strata_store::ParamTree;

/// Declare a small two-level schema used by several tests:
/// top-level `verbose`, section `Solver` with `iterations`/`tolerance`,
/// nested `Solver/Preconditioner` with `kind`.
fn declared_tree() -> ParamTree {
    let mut tree = ParamTree::new();
    tree.declare("verbose", "false", "Print progress output").unwrap();
    tree.enter_subsection("Solver");
    tree.declare("iterations", "100", "Maximum solver iterations").unwrap();
    tree.declare("tolerance", "1e-8", "Convergence tolerance").unwrap();
    tree.enter_subsection("Preconditioner");
    tree.declare("kind", "identity", "Preconditioner type").unwrap();
    tree.leave_subsection().unwrap();
    tree.leave_subsection().unwrap();
    tree
}

// ── Nesting ────────────────────────────────────────────────────

#[test]
fn enter_creates_and_leave_pops() {
    let mut tree = ParamTree::new();
    assert_eq!(tree.depth(), 0);
    tree.enter_subsection("A");
    tree.enter_subsection("B");
    assert_eq!(tree.depth(), 2);
    tree.leave_subsection().unwrap();
    tree.leave_subsection().unwrap();
    assert_eq!(tree.depth(), 0);
}

#[test]
fn leave_at_root_is_unbalanced() {
    let mut tree = ParamTree::new();
    let err = tree.leave_subsection().unwrap_err();
    assert!(matches!(err, StrataError::UnbalancedSection));
}

#[test]
fn reentering_a_section_finds_existing_parameters() {
    let mut tree = declared_tree();
    tree.enter_subsection("Solver");
    assert_eq!(tree.get("iterations").unwrap(), "100");
    tree.leave_subsection().unwrap();
}

#[test]
fn same_name_in_different_sections_is_distinct() {
    let mut tree = ParamTree::new();
    tree.enter_subsection("A");
    tree.declare("n", "1", "").unwrap();
    tree.leave_subsection().unwrap();
    tree.enter_subsection("B");
    tree.declare("n", "2", "").unwrap();
    assert_eq!(tree.get("n").unwrap(), "2");
    tree.leave_subsection().unwrap();
    tree.enter_subsection("A");
    assert_eq!(tree.get("n").unwrap(), "1");
    tree.leave_subsection().unwrap();
}

// ── Declare / set / get ────────────────────────────────────────

#[test]
fn declared_parameter_starts_at_its_default() {
    let tree = declared_tree();
    assert_eq!(tree.get("verbose").unwrap(), "false");
    let entry = tree.entry("verbose").unwrap();
    assert_eq!(entry.default, "false");
    assert_eq!(entry.description, "Print progress output");
}

#[test]
fn set_overwrites_value_but_not_default() {
    let mut tree = declared_tree();
    tree.set("verbose", "true").unwrap();
    assert_eq!(tree.get("verbose").unwrap(), "true");
    assert_eq!(tree.entry("verbose").unwrap().default, "false");
}

#[test]
fn undeclared_access_names_the_scope() {
    let mut tree = declared_tree();
    tree.enter_subsection("Solver");
    tree.enter_subsection("Preconditioner");
    let err = tree.set("missing", "1").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("missing"));
    assert!(msg.contains("Solver/Preconditioner"));
}

#[test]
fn typed_reads_via_extension_trait() {
    let mut tree = declared_tree();
    tree.enter_subsection("Solver");
    let iterations: u32 = tree.get_parsed("iterations").unwrap();
    let tolerance: f64 = tree.get_parsed("tolerance").unwrap();
    assert_eq!(iterations, 100);
    assert!((tolerance - 1e-8).abs() < 1e-15);
    tree.leave_subsection().unwrap();
}

#[test]
fn clear_resets_everything() {
    let mut tree = declared_tree();
    tree.enter_subsection("Solver");
    tree.clear();
    assert_eq!(tree.depth(), 0);
    assert!(tree.get("verbose").is_err());
}

// ── TOML input ─────────────────────────────────────────────────

#[test]
fn toml_load_sets_declared_values() {
    let mut tree = declared_tree();
    tree.load_toml_str(
        r#"
verbose = true

[Solver]
iterations = 500
tolerance = "1e-10"

[Solver.Preconditioner]
kind = "jacobi"
"#,
    )
    .unwrap();

    assert_eq!(tree.get("verbose").unwrap(), "true");
    tree.enter_subsection("Solver");
    assert_eq!(tree.get("iterations").unwrap(), "500");
    assert_eq!(tree.get("tolerance").unwrap(), "1e-10");
    tree.enter_subsection("Preconditioner");
    assert_eq!(tree.get("kind").unwrap(), "jacobi");
    tree.leave_subsection().unwrap();
    tree.leave_subsection().unwrap();
}

#[test]
fn toml_partial_input_keeps_defaults() {
    let mut tree = declared_tree();
    tree.load_toml_str("[Solver]\niterations = 7\n").unwrap();
    assert_eq!(tree.get("verbose").unwrap(), "false");
    tree.enter_subsection("Solver");
    assert_eq!(tree.get("iterations").unwrap(), "7");
    assert_eq!(tree.get("tolerance").unwrap(), "1e-8");
    tree.leave_subsection().unwrap();
}

#[test]
fn toml_unknown_key_is_an_error() {
    let mut tree = declared_tree();
    let err = tree
        .load_toml_str("[Solver]\nunknown_knob = 1\n")
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("unknown_knob"));
    assert!(msg.contains("Solver"));
}

#[test]
fn toml_unknown_section_is_an_error() {
    let mut tree = declared_tree();
    let err = tree.load_toml_str("[Nowhere]\nx = 1\n").unwrap_err();
    assert!(err.to_string().contains("Nowhere"));
}

#[test]
fn toml_syntax_error_propagates() {
    let mut tree = declared_tree();
    assert!(tree.load_toml_str("not [ valid toml").is_err());
}

// ── JSON input ─────────────────────────────────────────────────

#[test]
fn json_load_sets_declared_values() {
    let mut tree = declared_tree();
    tree.load_json_str(
        r#"{"verbose": true, "Solver": {"iterations": 250, "Preconditioner": {"kind": "ilu"}}}"#,
    )
    .unwrap();

    assert_eq!(tree.get("verbose").unwrap(), "true");
    tree.enter_subsection("Solver");
    assert_eq!(tree.get("iterations").unwrap(), "250");
    tree.enter_subsection("Preconditioner");
    assert_eq!(tree.get("kind").unwrap(), "ilu");
    tree.leave_subsection().unwrap();
    tree.leave_subsection().unwrap();
}

#[test]
fn json_top_level_must_be_an_object() {
    let mut tree = declared_tree();
    let err = tree.load_json_str("[1, 2, 3]").unwrap_err();
    assert!(err.to_string().contains("object"));
}

// ── Output ─────────────────────────────────────────────────────

#[test]
fn toml_output_contains_current_values() {
    let mut tree = declared_tree();
    tree.set("verbose", "true").unwrap();
    let out = tree.to_toml_string().unwrap();
    assert!(out.contains("verbose = \"true\""));
    assert!(out.contains("[Solver]"));
    assert!(out.contains("iterations = \"100\""));
    assert!(out.contains("[Solver.Preconditioner]"));
}

#[test]
fn toml_output_round_trips_through_load() {
    let mut tree = declared_tree();
    tree.set("verbose", "true").unwrap();
    let out = tree.to_toml_string().unwrap();

    let mut fresh = declared_tree();
    fresh.load_toml_str(&out).unwrap();
    assert_eq!(fresh.get("verbose").unwrap(), "true");
}

#[test]
fn json_output_contains_current_values() {
    let tree = declared_tree();
    let out = tree.to_json_string().unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["verbose"], "false");
    assert_eq!(value["Solver"]["iterations"], "100");
    assert_eq!(value["Solver"]["Preconditioner"]["kind"], "identity");
}

#[test]
fn default_toml_carries_descriptions_as_comments() {
    let tree = declared_tree();
    let out = tree.to_default_toml_string();
    assert!(out.contains("# Print progress output"));
    assert!(out.contains("verbose = \"false\""));
    assert!(out.contains("[Solver]"));
    assert!(out.contains("# Maximum solver iterations"));
    assert!(out.contains("[Solver.Preconditioner]"));
    assert!(out.contains("kind = \"identity\""));
}
