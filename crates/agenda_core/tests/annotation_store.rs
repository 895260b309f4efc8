use agenda_core::{
    add_child_at_path, annotation_payload, count_nodes, load_annotations, migrate_persisted,
    parse_annotations, reconcile, set_annotation, AgendaForest, AgendaNode,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn sample_forest() -> AgendaForest {
    vec![
        AgendaNode::with_children(
            "Opening",
            vec![
                AgendaNode::leaf("Welcome"),
                AgendaNode::with_children(
                    "Agenda",
                    vec![AgendaNode::leaf("Approve"), AgendaNode::leaf("Amend")],
                ),
            ],
        ),
        AgendaNode::leaf("Reports"),
    ]
}

/// Root with one child holding two grandchildren: 4 nodes, 2 leaves.
fn two_leaf_top() -> AgendaNode {
    AgendaNode::with_children(
        "Elections",
        vec![AgendaNode::with_children(
            "Board",
            vec![AgendaNode::leaf("Chair"), AgendaNode::leaf("Deputy")],
        )],
    )
}

fn assert_shaped(forest: &[AgendaNode], matrix: &[Vec<String>]) {
    assert_eq!(matrix.len(), forest.len());
    for (top, list) in forest.iter().zip(matrix) {
        assert_eq!(list.len(), count_nodes(top));
    }
}

#[test]
fn reconcile_keeps_lists_that_already_match() {
    let forest = sample_forest();
    let previous = vec![strings(&["a", "b", "c", "d", "e"]), strings(&["r"])];

    assert_eq!(reconcile(&previous, &forest), previous);
}

#[test]
fn reconcile_pads_after_appending_a_child() {
    let forest = sample_forest();
    let previous = vec![strings(&["a", "b", "c", "d", "e"]), strings(&["r"])];

    let next_forest = add_child_at_path(&forest, &[0]);
    let next = reconcile(&previous, &next_forest);

    assert_eq!(next[0], strings(&["a", "b", "c", "d", "e", ""]));
    assert_eq!(next[1], strings(&["r"]));
    assert_shaped(&next_forest, &next);
}

#[test]
fn reconcile_follows_top_count() {
    let forest = sample_forest();

    let grown = reconcile(&[strings(&["a", "b", "c", "d", "e"])], &forest);
    assert_eq!(grown[1], strings(&[""]));

    let shrunk = reconcile(
        &[strings(&["a", "b", "c", "d", "e"]), strings(&["r"]), strings(&["gone"])],
        &forest,
    );
    assert_eq!(shrunk.len(), 2);
    assert_shaped(&forest, &shrunk);
}

#[test]
fn migrate_redistributes_legacy_leaf_layout() {
    let forest = vec![two_leaf_top()];
    let migrated = migrate_persisted(&[strings(&["chair notes", "deputy notes"])], &forest);

    assert_eq!(
        migrated,
        vec![strings(&["", "", "chair notes", "deputy notes"])]
    );
}

#[test]
fn migrate_keeps_current_layout() {
    let forest = vec![two_leaf_top()];
    let stored = vec![strings(&["root", "board", "chair", "deputy"])];

    assert_eq!(migrate_persisted(&stored, &forest), stored);
}

#[test]
fn migrate_falls_back_to_positional_remap() {
    let forest = vec![two_leaf_top()];

    let padded = migrate_persisted(&[strings(&["a", "b", "c"])], &forest);
    assert_eq!(padded, vec![strings(&["a", "b", "c", ""])]);

    let truncated = migrate_persisted(&[strings(&["a", "b", "c", "d", "e", "f"])], &forest);
    assert_eq!(truncated, vec![strings(&["a", "b", "c", "d"])]);

    let missing = migrate_persisted(&[], &forest);
    assert_eq!(missing, vec![strings(&["", "", "", ""])]);
}

#[test]
fn migrate_treats_childless_top_as_either_layout() {
    let forest = vec![AgendaNode::leaf("Misc")];
    let stored = vec![strings(&["note"])];

    assert_eq!(migrate_persisted(&stored, &forest), stored);
}

#[test]
fn load_without_persisted_data_is_blank_and_never_empty() {
    let forest = sample_forest();
    let loaded = load_annotations(&forest, None);
    assert_eq!(loaded, vec![vec![String::new(); 5], vec![String::new()]]);

    assert_eq!(load_annotations(&[], None), vec![strings(&[""])]);
}

#[test]
fn load_uses_migration_for_persisted_data() {
    let forest = vec![two_leaf_top(), AgendaNode::leaf("Misc")];
    let stored = vec![strings(&["x", "y"])];

    let loaded = load_annotations(&forest, Some(stored.as_slice()));
    assert_eq!(loaded, vec![strings(&["", "", "x", "y"]), strings(&[""])]);
}

#[test]
fn set_annotation_grows_matrix_and_list() {
    let next = set_annotation(&[], 1, 2, "minutes");
    assert_eq!(next, vec![Vec::<String>::new(), strings(&["", "", "minutes"])]);

    let replaced = set_annotation(&next, 1, 0, "first");
    assert_eq!(replaced[1], strings(&["first", "", "minutes"]));
}

#[test]
fn payload_has_one_list_per_top() {
    let forest = sample_forest();
    let payload = annotation_payload(&forest, &[strings(&["a", "b", "c", "d", "e"])]);

    assert_eq!(payload.len(), 2);
    assert_eq!(payload[1], strings(&[""]));
}

#[test]
fn parse_annotations_rejects_only_invalid_json() {
    assert!(parse_annotations("not json").is_err());
    assert_eq!(parse_annotations("null").unwrap(), None);
    assert_eq!(
        parse_annotations(r#"[["a"], "b"]"#).unwrap(),
        Some(vec![strings(&["a"]), strings(&["b"])])
    );
}
