use contracts::domain::a002_ml_category::MlCategory;

/// True when the search term is empty, the node's name or marketplace id
/// contains it case-insensitively, or any descendant matches.
///
/// Tree depth is marketplace-controlled, so the walk uses an explicit
/// stack instead of recursion.
pub fn matches(node: &MlCategory, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if current.name.to_lowercase().contains(&needle)
            || current.ml_id.to_lowercase().contains(&needle)
        {
            return true;
        }
        stack.extend(current.children.iter());
    }
    false
}

/// Locate a node by marketplace id anywhere in the forest
pub fn find_by_ml_id<'a>(forest: &'a [MlCategory], ml_id: &str) -> Option<&'a MlCategory> {
    let mut stack: Vec<&MlCategory> = forest.iter().collect();
    while let Some(current) = stack.pop() {
        if current.ml_id == ml_id {
            return Some(current);
        }
        stack.extend(current.children.iter());
    }
    None
}

/// Ids of the ancestors above a node, outermost first. Used to expand
/// the branch leading to a previously linked node on reopen.
pub fn path_to(forest: &[MlCategory], ml_id: &str) -> Option<Vec<String>> {
    let mut stack: Vec<(&MlCategory, Vec<String>)> =
        forest.iter().map(|node| (node, Vec::new())).collect();
    while let Some((current, path)) = stack.pop() {
        if current.ml_id == ml_id {
            return Some(path);
        }
        for child in &current.children {
            let mut child_path = path.clone();
            child_path.push(current.ml_id.clone());
            stack.push((child, child_path));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(ml_id: &str, name: &str) -> MlCategory {
        MlCategory {
            ml_id: ml_id.to_string(),
            name: name.to_string(),
            parent_ml_id: None,
            children: Vec::new(),
        }
    }

    fn node(ml_id: &str, name: &str, children: Vec<MlCategory>) -> MlCategory {
        MlCategory {
            ml_id: ml_id.to_string(),
            name: name.to_string(),
            parent_ml_id: None,
            children,
        }
    }

    #[test]
    fn empty_term_matches_every_node() {
        assert!(matches(&leaf("MLB1", "Celulares"), ""));
        assert!(matches(&node("MLB2", "Root", vec![leaf("MLB3", "X")]), ""));
    }

    #[test]
    fn matches_name_case_insensitively() {
        let n = leaf("MLB1055", "Smartphones");
        assert!(matches(&n, "SMART"));
        assert!(matches(&n, "phone"));
        assert!(!matches(&n, "tablet"));
    }

    #[test]
    fn matches_marketplace_id() {
        let n = leaf("MLB1055", "Smartphones");
        assert!(matches(&n, "mlb105"));
        assert!(matches(&n, "1055"));
    }

    #[test]
    fn matches_through_descendants() {
        let root = node("A", "Root", vec![leaf("B", "Child")]);
        assert!(matches(&root, "child"));
        assert!(matches(&root, "b"));
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        let mut current = leaf("L0", "needle");
        for depth in 1..10_000 {
            current = node(&format!("L{}", depth), "branch", vec![current]);
        }
        assert!(matches(&current, "needle"));
        assert!(!matches(&current, "missing"));
    }

    #[test]
    fn find_locates_nested_node() {
        let forest = vec![
            node("MLB1051", "Celulares", vec![leaf("MLB1055", "Smartphones")]),
            leaf("MLB1196", "Livros"),
        ];
        assert_eq!(
            find_by_ml_id(&forest, "MLB1055").map(|n| n.name.as_str()),
            Some("Smartphones")
        );
        assert_eq!(
            find_by_ml_id(&forest, "MLB1196").map(|n| n.name.as_str()),
            Some("Livros")
        );
        assert!(find_by_ml_id(&forest, "MLB9999").is_none());
    }

    #[test]
    fn path_lists_ancestors_outermost_first() {
        let forest = vec![node(
            "MLB1051",
            "Celulares",
            vec![node(
                "MLB1052",
                "Acessorios",
                vec![leaf("MLB1055", "Smartphones")],
            )],
        )];
        assert_eq!(
            path_to(&forest, "MLB1055"),
            Some(vec!["MLB1051".to_string(), "MLB1052".to_string()])
        );
        assert_eq!(path_to(&forest, "MLB1052"), Some(vec!["MLB1051".to_string()]));
    }

    #[test]
    fn path_to_root_is_empty() {
        let forest = vec![node("MLB1051", "Celulares", vec![leaf("MLB1055", "X")])];
        assert_eq!(path_to(&forest, "MLB1051"), Some(Vec::new()));
        assert_eq!(path_to(&forest, "MLB9999"), None);
    }
}
