use std::collections::HashMap;

use contracts::domain::a001_category::Category;

// ============================================================================
// CategoryIndex
// ============================================================================

/// The flat category list indexed for level-by-level navigation.
///
/// The backend returns categories flat with `parent_id` back-references;
/// the index derives hierarchy views on demand instead of keeping a
/// second nested representation in sync. Rebuilt wholesale on refresh.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    items: Vec<Category>,
    by_parent: HashMap<Option<i32>, Vec<usize>>,
    by_id: HashMap<i32, usize>,
}

impl CategoryIndex {
    pub fn new(items: Vec<Category>) -> Self {
        let mut by_parent: HashMap<Option<i32>, Vec<usize>> = HashMap::new();
        let mut by_id = HashMap::new();
        for (idx, category) in items.iter().enumerate() {
            by_parent.entry(category.parent_id).or_default().push(idx);
            by_id.insert(category.id, idx);
        }
        Self {
            items,
            by_parent,
            by_id,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: i32) -> Option<&Category> {
        self.by_id.get(&id).map(|&idx| &self.items[idx])
    }

    /// Categories of one level, in the order the backend returned them.
    /// An unknown parent yields an empty level, not an error.
    pub fn children_of(&self, parent_id: Option<i32>) -> Vec<&Category> {
        match self.by_parent.get(&parent_id) {
            Some(indices) => indices.iter().map(|&idx| &self.items[idx]).collect(),
            None => Vec::new(),
        }
    }

    /// Direct child count, used to badge intermediate categories
    pub fn count_children(&self, id: i32) -> usize {
        self.by_parent
            .get(&Some(id))
            .map(|indices| indices.len())
            .unwrap_or(0)
    }

    /// Candidate parents for the details form: every intermediate
    /// category except the one being edited
    pub fn parent_options(&self, exclude_id: i32) -> Vec<&Category> {
        self.items
            .iter()
            .filter(|c| c.id != exclude_id && !c.is_final)
            .collect()
    }

    pub fn final_count(&self) -> usize {
        self.items.iter().filter(|c| c.is_final).count()
    }

    pub fn intermediate_count(&self) -> usize {
        self.items.iter().filter(|c| !c.is_final).count()
    }
}

/// Case-insensitive substring filter on category names, applied to one
/// level after `children_of`. Navigation state is never touched by search.
pub fn filter_by_name<'a>(rows: Vec<&'a Category>, term: &str) -> Vec<&'a Category> {
    if term.is_empty() {
        return rows;
    }
    let needle = term.to_lowercase();
    rows.into_iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .collect()
}

// ============================================================================
// NavigationState
// ============================================================================

/// One entry of the breadcrumb trail
#[derive(Debug, Clone, PartialEq)]
pub struct Crumb {
    pub id: i32,
    pub name: String,
}

/// Current position inside the category tree.
///
/// An empty stack means the root level is shown. All operations are
/// synchronous and never call the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    stack: Vec<Crumb>,
}

impl NavigationState {
    pub fn root() -> Self {
        Self::default()
    }

    /// Parent id of the level currently shown; `None` at root
    pub fn current_parent_id(&self) -> Option<i32> {
        self.stack.last().map(|crumb| crumb.id)
    }

    pub fn crumbs(&self) -> &[Crumb] {
        &self.stack
    }

    pub fn is_root(&self) -> bool {
        self.stack.is_empty()
    }

    /// Descend into a category. Final categories have no level below
    /// them, so entering one is a no-op.
    pub fn enter(&mut self, category: &Category) {
        if category.is_final {
            return;
        }
        self.stack.push(Crumb {
            id: category.id,
            name: category.name.clone(),
        });
    }

    /// Go up one level. No-op at root.
    pub fn back(&mut self) {
        self.stack.pop();
    }

    /// Jump to a breadcrumb by position, keeping the trail up to and
    /// including it. `-1` jumps to the root level.
    pub fn jump(&mut self, position: isize) {
        if position < 0 {
            self.stack.clear();
            return;
        }
        self.stack.truncate(position as usize + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i32, name: &str, parent_id: Option<i32>, is_final: bool) -> Category {
        Category {
            id,
            name: name.to_string(),
            parent_id,
            is_final,
            created_at: None,
            updated_at: None,
        }
    }

    fn sample() -> CategoryIndex {
        CategoryIndex::new(vec![
            category(1, "Eletrônicos", None, false),
            category(2, "Celulares", Some(1), false),
            category(3, "Smartphones", Some(2), true),
            category(4, "Acessórios", Some(1), true),
            category(5, "Livros", None, true),
        ])
    }

    fn ids(rows: Vec<&Category>) -> Vec<i32> {
        rows.into_iter().map(|c| c.id).collect()
    }

    #[test]
    fn children_of_root_in_insertion_order() {
        let index = sample();
        assert_eq!(ids(index.children_of(None)), vec![1, 5]);
    }

    #[test]
    fn children_of_returns_exact_subset() {
        let index = sample();
        assert_eq!(ids(index.children_of(Some(1))), vec![2, 4]);
        assert_eq!(ids(index.children_of(Some(2))), vec![3]);
    }

    #[test]
    fn unknown_parent_yields_empty_level() {
        let index = sample();
        assert!(index.children_of(Some(999)).is_empty());
    }

    #[test]
    fn final_categories_have_no_children() {
        let index = sample();
        assert!(index.children_of(Some(3)).is_empty());
        assert!(index.children_of(Some(5)).is_empty());
        assert_eq!(index.count_children(3), 0);
    }

    #[test]
    fn count_children_matches_level_size() {
        let index = sample();
        assert_eq!(index.count_children(1), 2);
        assert_eq!(index.count_children(2), 1);
    }

    #[test]
    fn insertion_order_survives_interleaved_parents() {
        let index = CategoryIndex::new(vec![
            category(10, "B", Some(1), true),
            category(11, "A", None, false),
            category(12, "C", Some(1), true),
        ]);
        // No implicit sort by name or id
        assert_eq!(ids(index.children_of(Some(1))), vec![10, 12]);
    }

    #[test]
    fn refreshed_index_shows_new_member() {
        let mut items = vec![
            category(1, "Eletrônicos", None, false),
            category(2, "Celulares", Some(1), false),
        ];
        items.push(category(9, "Tablets", Some(1), true));
        let index = CategoryIndex::new(items);
        assert!(ids(index.children_of(Some(1))).contains(&9));
    }

    #[test]
    fn parent_options_exclude_self_and_finals() {
        let index = sample();
        assert_eq!(ids(index.parent_options(2)), vec![1]);
        assert_eq!(ids(index.parent_options(0)), vec![1, 2]);
    }

    #[test]
    fn counts_split_by_kind() {
        let index = sample();
        assert_eq!(index.final_count(), 3);
        assert_eq!(index.intermediate_count(), 2);
        assert_eq!(index.len(), 5);
    }

    #[test]
    fn filter_by_name_is_case_insensitive_substring() {
        let index = sample();
        let level = index.children_of(Some(1));
        assert_eq!(ids(filter_by_name(level.clone(), "CELU")), vec![2]);
        assert_eq!(ids(filter_by_name(level.clone(), "ó")), vec![4]);
        assert!(filter_by_name(level.clone(), "xyz").is_empty());
    }

    #[test]
    fn empty_term_keeps_all_rows() {
        let index = sample();
        let level = index.children_of(None);
        assert_eq!(filter_by_name(level.clone(), "").len(), level.len());
    }

    #[test]
    fn enter_pushes_crumb_and_changes_level() {
        let index = sample();
        let mut nav = NavigationState::root();
        let root = index.get(1).unwrap().clone();
        nav.enter(&root);
        assert_eq!(nav.current_parent_id(), Some(1));
        assert_eq!(nav.crumbs().len(), 1);
        assert_eq!(nav.crumbs()[0].name, "Eletrônicos");
    }

    #[test]
    fn enter_final_is_a_no_op() {
        let index = sample();
        let mut nav = NavigationState::root();
        let before = nav.clone();
        nav.enter(index.get(5).unwrap());
        assert_eq!(nav, before);
        assert_eq!(nav.current_parent_id(), None);
    }

    #[test]
    fn back_pops_one_level_and_stops_at_root() {
        let index = sample();
        let mut nav = NavigationState::root();
        nav.enter(index.get(1).unwrap());
        nav.enter(index.get(2).unwrap());
        nav.back();
        assert_eq!(nav.current_parent_id(), Some(1));
        nav.back();
        assert!(nav.is_root());
        nav.back();
        assert!(nav.is_root());
    }

    #[test]
    fn jump_minus_one_always_returns_to_root() {
        let index = sample();
        let mut nav = NavigationState::root();
        nav.enter(index.get(1).unwrap());
        nav.enter(index.get(2).unwrap());
        nav.jump(-1);
        assert!(nav.is_root());
        assert_eq!(nav.current_parent_id(), None);
    }

    #[test]
    fn jump_truncates_to_clicked_crumb() {
        let index = sample();
        let mut nav = NavigationState::root();
        nav.enter(index.get(1).unwrap());
        nav.enter(index.get(2).unwrap());
        nav.jump(0);
        assert_eq!(nav.crumbs().len(), 1);
        assert_eq!(nav.current_parent_id(), Some(1));
    }

    #[test]
    fn jump_past_end_keeps_trail() {
        let index = sample();
        let mut nav = NavigationState::root();
        nav.enter(index.get(1).unwrap());
        nav.jump(5);
        assert_eq!(nav.crumbs().len(), 1);
    }

    #[test]
    fn two_level_walkthrough() {
        let index = CategoryIndex::new(vec![
            category(1, "Root", None, false),
            category(2, "Leaf", Some(1), true),
        ]);
        assert_eq!(ids(index.children_of(None)), vec![1]);
        assert_eq!(ids(index.children_of(Some(1))), vec![2]);

        let mut nav = NavigationState::root();
        nav.enter(index.get(1).unwrap());
        assert_eq!(nav.crumbs(), &[Crumb { id: 1, name: "Root".to_string() }]);
        assert_eq!(nav.current_parent_id(), Some(1));
    }
}
