//! Walk a small game inventory end to end and check the grouped report.

use instree::prelude::*;
use instree::report::ErrorReport;

type D = Descriptor<SceneTree>;

fn inventory_descriptor() -> D {
    D::object([
        ObjectField::required("Owner", D::attribute(variant::string())),
        ObjectField::required(
            "Items",
            D::array(D::object([
                ObjectField::required("Name", D::property(variant::string())),
                ObjectField::required("Damage", D::attribute(variant::number())),
                ObjectField::optional("Enchanted", D::attribute(variant::boolean())),
            ])),
        ),
    ])
}

fn inventory(damages: &[(&str, Option<f64>)]) -> SceneTree {
    let mut tree = SceneTree::new("Inventory", "Folder");
    tree.set_attribute(tree.root(), "Owner", "ada");
    let items = tree.add_child(tree.root(), "Items", "Folder");
    for (name, damage) in damages {
        let item = tree.add_child(items, *name, "Tool");
        if let Some(damage) = damage {
            tree.set_attribute(item, "Damage", *damage);
        }
    }
    tree
}

#[test]
fn test_well_formed_inventory() {
    let tree = inventory(&[("Sword", Some(10.0)), ("Bow", Some(4.0))]);
    let outcome = parse_instance_tree(&tree, tree.root(), &inventory_descriptor())
        .expect("walk should not abort");

    assert!(outcome.is_success());
    let value = outcome.value().unwrap();
    assert_eq!(
        value.field("Owner").and_then(Parsed::as_value),
        Some(&Variant::from("ada"))
    );

    let items = value.field("Items").and_then(Parsed::as_array).unwrap();
    assert_eq!(items.len(), 2);
    let sword = items[0].as_ref().unwrap();
    assert_eq!(
        sword.field("Name").and_then(Parsed::as_value),
        Some(&Variant::from("Sword"))
    );
    assert_eq!(
        sword.field("Damage").and_then(Parsed::as_value),
        Some(&Variant::Number(10.0))
    );
    assert!(sword.field("Enchanted").is_none());
}

#[test]
fn test_broken_items_group_under_one_path() {
    let tree = inventory(&[
        ("Sword", None),
        ("Bow", None),
        ("Axe", None),
        ("Spear", None),
        ("Dagger", Some(2.0)),
    ]);
    let outcome = parse_instance_tree(&tree, tree.root(), &inventory_descriptor())
        .expect("walk should not abort");

    assert!(!outcome.is_success());
    assert_eq!(outcome.errors().len(), 4);

    let report = ErrorReport::new(outcome.errors());
    assert_eq!(report.groups().len(), 1);

    let lines = report.lines(&tree);
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        "Error parsing <ROOT>.Items.<ARRAY ELEMENT>.Damage:"
    );
    assert_eq!(
        lines[1],
        "\t\tFor Inventory.Items.Sword: Attribute 'Damage' does not exist on instance."
    );
    assert!(lines[4].starts_with("\t\t+1 more errors, [Inventory.Items.Sword: "));
    assert!(lines[4].contains("Inventory.Items.Spear: "));
}

#[test]
fn test_errors_at_different_paths_form_separate_groups() {
    let mut tree = inventory(&[("Sword", Some(1.0))]);
    tree.remove_attribute(tree.root(), "Owner");
    let items = tree.named_child(tree.root(), "Items").unwrap();
    let sword = tree.named_child(items, "Sword").unwrap();
    tree.set_attribute(sword, "Enchanted", "yes");

    let outcome = parse_instance_tree(&tree, tree.root(), &inventory_descriptor())
        .expect("walk should not abort");
    let report = ErrorReport::new(outcome.errors());

    let paths: Vec<_> = report.groups().iter().map(|g| g.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["<ROOT>.Owner", "<ROOT>.Items.<ARRAY ELEMENT>.Enchanted"]
    );
    assert_eq!(
        report.render(&tree),
        [
            "Error parsing <ROOT>.Owner:",
            "\t\tFor Inventory: Attribute 'Owner' does not exist on instance.",
            "Error parsing <ROOT>.Items.<ARRAY ELEMENT>.Enchanted:",
            "\t\tFor Inventory.Items.Sword: Attribute 'Enchanted' on instance does not match the provided type.",
        ]
        .join("\n")
    );
}

#[test]
fn test_repeated_walks_do_not_duplicate_report_lines() {
    let tree = inventory(&[("Sword", None)]);
    let descriptor = inventory_descriptor();

    let first = parse_instance_tree(&tree, tree.root(), &descriptor).unwrap();
    let second = parse_instance_tree(&tree, tree.root(), &descriptor).unwrap();

    let mut errors = first.errors().to_vec();
    errors.extend_from_slice(second.errors());
    let lines = ErrorReport::new(&errors).lines(&tree);
    assert_eq!(lines.len(), 2);
}

#[test]
fn test_report_options_limit() {
    let tree = inventory(&[("A", None), ("B", None)]);
    let outcome = parse_instance_tree(&tree, tree.root(), &inventory_descriptor()).unwrap();
    let options = ReportOptions::default().with_max_errors_per_path(0);
    let lines = ErrorReport::with_options(outcome.errors(), options).lines(&tree);

    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("\t\t+2 more errors, "));
}
