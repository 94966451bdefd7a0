use contracts::domain::a001_category::Category;
use contracts::domain::a003_category_channel::SaveCategoryChannelRequest;
use contracts::enums::channel::Channel;

use crate::domain::a003_category_channel::link::validate_linkable;

/// Stages of one linking session.
///
/// `Failed` keeps the tree browser open so the user can retry or pick a
/// different node; `Linked` is terminal and the caller closes the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkFlowStage {
    Idle,
    SelectingMarketplace,
    BrowsingTree,
    NodeSelected,
    Confirming,
    Linked,
    Failed,
}

/// The category a session was started for
#[derive(Debug, Clone, PartialEq)]
pub struct LinkTarget {
    pub category_id: i32,
    pub category_name: String,
}

/// The external node currently highlighted in the tree browser
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedNode {
    pub ml_id: String,
    pub name: String,
}

/// State machine of the category-linking workflow.
///
/// Pure state; all I/O (tree load, save, toasts) lives in the view
/// driving it. At most one modal is visible per stage: the marketplace
/// picker only in `SelectingMarketplace`, the tree browser from
/// `BrowsingTree` onward.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkFlow {
    stage: LinkFlowStage,
    target: Option<LinkTarget>,
    channel: Option<Channel>,
    selected: Option<SelectedNode>,
    error: Option<String>,
}

impl Default for LinkFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkFlow {
    pub fn new() -> Self {
        Self {
            stage: LinkFlowStage::Idle,
            target: None,
            channel: None,
            selected: None,
            error: None,
        }
    }

    pub fn stage(&self) -> LinkFlowStage {
        self.stage
    }

    pub fn target(&self) -> Option<&LinkTarget> {
        self.target.as_ref()
    }

    pub fn channel(&self) -> Option<Channel> {
        self.channel
    }

    pub fn selected(&self) -> Option<&SelectedNode> {
        self.selected.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn picker_open(&self) -> bool {
        self.stage == LinkFlowStage::SelectingMarketplace
    }

    pub fn tree_open(&self) -> bool {
        matches!(
            self.stage,
            LinkFlowStage::BrowsingTree
                | LinkFlowStage::NodeSelected
                | LinkFlowStage::Confirming
                | LinkFlowStage::Failed
        )
    }

    pub fn is_saving(&self) -> bool {
        self.stage == LinkFlowStage::Confirming
    }

    /// The save in flight must not be abandoned; everything else may be
    pub fn can_cancel(&self) -> bool {
        self.stage != LinkFlowStage::Confirming
    }

    /// Start a session for a category. Rejects intermediates without
    /// opening anything; the caller surfaces the message.
    pub fn start(&mut self, category: &Category) -> Result<(), String> {
        validate_linkable(category)?;
        *self = Self::new();
        self.stage = LinkFlowStage::SelectingMarketplace;
        self.target = Some(LinkTarget {
            category_id: category.id,
            category_name: category.name.clone(),
        });
        Ok(())
    }

    /// Pick the marketplace; closes the picker and opens the tree browser
    pub fn choose_channel(&mut self, channel: Channel) {
        if self.stage != LinkFlowStage::SelectingMarketplace {
            return;
        }
        self.channel = Some(channel);
        self.stage = LinkFlowStage::BrowsingTree;
    }

    /// Highlight a leaf in the tree browser. Re-selection is allowed
    /// until the save goes out, including after a failed attempt.
    pub fn select_node(&mut self, ml_id: String, name: String) {
        if !matches!(
            self.stage,
            LinkFlowStage::BrowsingTree | LinkFlowStage::NodeSelected | LinkFlowStage::Failed
        ) {
            return;
        }
        self.selected = Some(SelectedNode { ml_id, name });
        self.error = None;
        self.stage = LinkFlowStage::NodeSelected;
    }

    /// Drop the highlight and go back to plain browsing
    pub fn clear_selection(&mut self) {
        if self.stage != LinkFlowStage::NodeSelected {
            return;
        }
        self.selected = None;
        self.stage = LinkFlowStage::BrowsingTree;
    }

    /// Move to `Confirming` and hand the caller the request to send.
    /// Permitted from `NodeSelected` and, for retries, from `Failed`.
    pub fn begin_confirm(&mut self) -> Option<SaveCategoryChannelRequest> {
        if !matches!(
            self.stage,
            LinkFlowStage::NodeSelected | LinkFlowStage::Failed
        ) {
            return None;
        }
        let (target, channel, selected) = match (&self.target, self.channel, &self.selected) {
            (Some(target), Some(channel), Some(selected)) => (target, channel, selected),
            _ => return None,
        };
        let request = SaveCategoryChannelRequest::new(
            selected.ml_id.clone(),
            target.category_id,
            channel.id(),
        );
        self.error = None;
        self.stage = LinkFlowStage::Confirming;
        Some(request)
    }

    pub fn confirm_succeeded(&mut self) {
        if self.stage != LinkFlowStage::Confirming {
            return;
        }
        self.stage = LinkFlowStage::Linked;
    }

    /// Keep the tree browser open with the selection intact so the user
    /// can retry or pick another node.
    pub fn confirm_failed(&mut self, message: String) {
        if self.stage != LinkFlowStage::Confirming {
            return;
        }
        self.error = Some(message);
        self.stage = LinkFlowStage::Failed;
    }

    /// Close a successfully linked session
    pub fn finish(&mut self) {
        if self.stage != LinkFlowStage::Linked {
            return;
        }
        *self = Self::new();
    }

    /// Abandon the session. Returns false (and changes nothing) while a
    /// save is in flight.
    pub fn cancel(&mut self) -> bool {
        if !self.can_cancel() {
            return false;
        }
        *self = Self::new();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn final_category(id: i32, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            parent_id: Some(1),
            is_final: true,
            created_at: None,
            updated_at: None,
        }
    }

    fn intermediate_category(id: i32, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            parent_id: None,
            is_final: false,
            created_at: None,
            updated_at: None,
        }
    }

    fn assert_single_modal(flow: &LinkFlow) {
        assert!(
            !(flow.picker_open() && flow.tree_open()),
            "picker and tree browser visible at once in {:?}",
            flow.stage()
        );
    }

    #[test]
    fn start_rejects_intermediate_without_opening_anything() {
        let mut flow = LinkFlow::new();
        let result = flow.start(&intermediate_category(1, "Eletrônicos"));
        assert!(result.is_err());
        assert_eq!(flow.stage(), LinkFlowStage::Idle);
        assert!(!flow.picker_open());
        assert!(!flow.tree_open());
    }

    #[test]
    fn happy_path_walks_all_stages() {
        let mut flow = LinkFlow::new();

        flow.start(&final_category(2, "Smartphones")).unwrap();
        assert_eq!(flow.stage(), LinkFlowStage::SelectingMarketplace);
        assert!(flow.picker_open());
        assert_single_modal(&flow);

        flow.choose_channel(Channel::MercadoLivre);
        assert_eq!(flow.stage(), LinkFlowStage::BrowsingTree);
        assert!(flow.tree_open());
        assert_single_modal(&flow);

        flow.select_node("MLB1055".to_string(), "Smartphones".to_string());
        assert_eq!(flow.stage(), LinkFlowStage::NodeSelected);
        assert_single_modal(&flow);

        let request = flow.begin_confirm().unwrap();
        assert_eq!(flow.stage(), LinkFlowStage::Confirming);
        assert_eq!(request.category_channel_id, "MLB1055");
        assert_eq!(request.category_id, 2);
        assert_eq!(request.channel_id, 1);
        assert!(flow.is_saving());
        assert_single_modal(&flow);

        flow.confirm_succeeded();
        assert_eq!(flow.stage(), LinkFlowStage::Linked);

        flow.finish();
        assert_eq!(flow.stage(), LinkFlowStage::Idle);
        assert!(flow.target().is_none());
        assert!(flow.selected().is_none());
    }

    #[test]
    fn failure_keeps_selection_and_permits_retry() {
        let mut flow = LinkFlow::new();
        flow.start(&final_category(2, "Smartphones")).unwrap();
        flow.choose_channel(Channel::MercadoLivre);
        flow.select_node("MLB1055".to_string(), "Smartphones".to_string());
        flow.begin_confirm().unwrap();

        flow.confirm_failed("500 from backend".to_string());
        assert_eq!(flow.stage(), LinkFlowStage::Failed);
        assert!(flow.tree_open());
        assert_eq!(flow.error(), Some("500 from backend"));
        assert_eq!(flow.selected().map(|s| s.ml_id.as_str()), Some("MLB1055"));

        // Retry with the retained selection
        let request = flow.begin_confirm().unwrap();
        assert_eq!(request.category_channel_id, "MLB1055");
        assert!(flow.error().is_none());
        flow.confirm_succeeded();
        assert_eq!(flow.stage(), LinkFlowStage::Linked);
    }

    #[test]
    fn reselection_after_failure_clears_error() {
        let mut flow = LinkFlow::new();
        flow.start(&final_category(2, "Smartphones")).unwrap();
        flow.choose_channel(Channel::MercadoLivre);
        flow.select_node("MLB1055".to_string(), "Smartphones".to_string());
        flow.begin_confirm().unwrap();
        flow.confirm_failed("timeout".to_string());

        flow.select_node("MLB1056".to_string(), "Feature Phones".to_string());
        assert_eq!(flow.stage(), LinkFlowStage::NodeSelected);
        assert!(flow.error().is_none());
        assert_eq!(flow.selected().map(|s| s.ml_id.as_str()), Some("MLB1056"));
    }

    #[test]
    fn clearing_selection_returns_to_browsing() {
        let mut flow = LinkFlow::new();
        flow.start(&final_category(2, "Smartphones")).unwrap();
        flow.choose_channel(Channel::MercadoLivre);
        flow.select_node("MLB1055".to_string(), "Smartphones".to_string());

        flow.clear_selection();
        assert_eq!(flow.stage(), LinkFlowStage::BrowsingTree);
        assert!(flow.selected().is_none());
        assert!(flow.tree_open());
    }

    #[test]
    fn confirm_requires_a_selection() {
        let mut flow = LinkFlow::new();
        flow.start(&final_category(2, "Smartphones")).unwrap();
        flow.choose_channel(Channel::MercadoLivre);

        assert!(flow.begin_confirm().is_none());
        assert_eq!(flow.stage(), LinkFlowStage::BrowsingTree);
    }

    #[test]
    fn cancel_blocked_only_while_saving() {
        let mut flow = LinkFlow::new();
        flow.start(&final_category(2, "Smartphones")).unwrap();
        assert!(flow.can_cancel());

        flow.choose_channel(Channel::MercadoLivre);
        assert!(flow.can_cancel());

        flow.select_node("MLB1055".to_string(), "Smartphones".to_string());
        assert!(flow.can_cancel());

        flow.begin_confirm().unwrap();
        assert!(!flow.can_cancel());
        assert!(!flow.cancel());
        assert_eq!(flow.stage(), LinkFlowStage::Confirming);

        flow.confirm_failed("boom".to_string());
        assert!(flow.can_cancel());
        assert!(flow.cancel());
        assert_eq!(flow.stage(), LinkFlowStage::Idle);
    }

    #[test]
    fn stray_transitions_are_ignored() {
        let mut flow = LinkFlow::new();

        flow.choose_channel(Channel::MercadoLivre);
        assert_eq!(flow.stage(), LinkFlowStage::Idle);

        flow.select_node("MLB1".to_string(), "X".to_string());
        assert_eq!(flow.stage(), LinkFlowStage::Idle);
        assert!(flow.selected().is_none());

        flow.confirm_succeeded();
        assert_eq!(flow.stage(), LinkFlowStage::Idle);

        flow.finish();
        assert_eq!(flow.stage(), LinkFlowStage::Idle);
    }

    #[test]
    fn restart_resets_previous_session_state() {
        let mut flow = LinkFlow::new();
        flow.start(&final_category(2, "Smartphones")).unwrap();
        flow.choose_channel(Channel::MercadoLivre);
        flow.select_node("MLB1055".to_string(), "Smartphones".to_string());
        flow.cancel();

        flow.start(&final_category(7, "Notebooks")).unwrap();
        assert_eq!(flow.stage(), LinkFlowStage::SelectingMarketplace);
        assert_eq!(flow.target().map(|t| t.category_id), Some(7));
        assert!(flow.selected().is_none());
        assert!(flow.channel().is_none());
    }
}
