use agenda_core::{
    count_leaves, count_nodes, enumerate_forest, enumerate_in_order, AgendaNode,
};

fn opening() -> AgendaNode {
    AgendaNode::with_children(
        "Opening",
        vec![
            AgendaNode::leaf("Welcome"),
            AgendaNode::with_children(
                "Agenda",
                vec![AgendaNode::leaf("Approve"), AgendaNode::leaf("Amend")],
            ),
        ],
    )
}

fn labels(node: &AgendaNode, prefix: &str) -> Vec<String> {
    enumerate_in_order(node, prefix)
        .into_iter()
        .map(|descriptor| descriptor.path_label)
        .collect()
}

#[test]
fn enumerate_is_preorder_with_one_based_labels() {
    let descriptors = enumerate_in_order(&opening(), "1");

    let labels: Vec<&str> = descriptors.iter().map(|d| d.path_label.as_str()).collect();
    assert_eq!(labels, vec!["1", "1.1", "1.2", "1.2.1", "1.2.2"]);

    let titles: Vec<&str> = descriptors.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["Opening", "Welcome", "Agenda", "Approve", "Amend"]);

    let leaves: Vec<bool> = descriptors.iter().map(|d| d.is_leaf).collect();
    assert_eq!(leaves, vec![false, true, false, true, true]);
}

#[test]
fn empty_prefix_labels_children_from_one() {
    assert_eq!(labels(&opening(), ""), vec!["", "1", "2", "2.1", "2.2"]);
}

#[test]
fn counts_match_enumeration_for_any_prefix() {
    let nodes = vec![
        AgendaNode::default(),
        opening(),
        AgendaNode::with_children(
            "chain",
            vec![AgendaNode::with_children(
                "mid",
                vec![AgendaNode::with_children("low", vec![AgendaNode::leaf("end")])],
            )],
        ),
    ];

    for node in &nodes {
        for prefix in ["", "3", "2.4"] {
            let descriptors = enumerate_in_order(node, prefix);
            assert_eq!(count_nodes(node), descriptors.len());
            assert_eq!(
                count_leaves(node),
                descriptors.iter().filter(|d| d.is_leaf).count()
            );
        }
    }
}

#[test]
fn counts_for_known_shapes() {
    assert_eq!(count_nodes(&AgendaNode::default()), 1);
    assert_eq!(count_leaves(&AgendaNode::default()), 1);
    assert_eq!(count_nodes(&opening()), 5);
    assert_eq!(count_leaves(&opening()), 3);
}

#[test]
fn enumerate_forest_numbers_tops() {
    let forest = vec![opening(), AgendaNode::with_children("Reports", vec![AgendaNode::leaf("Board")])];
    let lists = enumerate_forest(&forest);

    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0][0].path_label, "1");
    let second: Vec<&str> = lists[1].iter().map(|d| d.path_label.as_str()).collect();
    assert_eq!(second, vec!["2", "2.1"]);
}
