use super::flow::LinkFlow;
use crate::domain::a002_ml_category::api as ml_api;
use crate::domain::a002_ml_category::tree::find_by_ml_id;
use crate::domain::a002_ml_category::ui::MlCategoryTreeBrowser;
use crate::domain::a003_category_channel::api as channel_api;
use crate::domain::a003_category_channel::link::link_for_display;
use crate::shared::api_client::use_api;
use crate::shared::icons::icon;
use crate::shared::notify::NotifyService;
use contracts::domain::a002_ml_category::MlCategory;
use contracts::enums::channel::Channel;
use leptos::prelude::*;
use std::rc::Rc;

/// Modal chrome for the category linking walkthrough.
///
/// The owning page starts the flow by writing to the shared signal; this
/// component renders whichever modal the current stage calls for and
/// drives the channel tree fetch, the save call and the notifications.
#[component]
pub fn LinkMlCategoryFlow(flow: RwSignal<LinkFlow>, on_linked: Rc<dyn Fn(i32)>) -> impl IntoView {
    let api = StoredValue::new(use_api());
    let on_linked = StoredValue::new_local(on_linked);
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");

    let forest = RwSignal::new(Vec::<MlCategory>::new());
    let (tree_loading, set_tree_loading) = signal(false);
    let (tree_error, set_tree_error) = signal::<Option<String>>(None);

    // Memoized so selection and error updates inside a stage do not
    // remount the modal and wipe the tree expansion state.
    let picker_open = Memo::new(move |_| flow.with(|f| f.picker_open()));
    let tree_open = Memo::new(move |_| flow.with(|f| f.tree_open()));

    let choose_channel = move |channel: Channel| {
        flow.update(|f| f.choose_channel(channel));
        let api = api.get_value();
        set_tree_loading.set(true);
        set_tree_error.set(None);
        forest.set(Vec::new());
        wasm_bindgen_futures::spawn_local(async move {
            match ml_api::fetch_category_tree(&api).await {
                Ok(nodes) => {
                    log::info!("Loaded {} top-level marketplace categories", nodes.len());
                    // Bring back the stored link as the initial selection
                    let target_id = flow.with_untracked(|f| f.target().map(|t| t.category_id));
                    if let Some(category_id) = target_id {
                        let result = channel_api::fetch_link(&api, category_id, channel.id()).await;
                        if let Some(link) = link_for_display(result, category_id) {
                            if let Some(node) = find_by_ml_id(&nodes, &link.category_channel_id) {
                                let ml_id = node.ml_id.clone();
                                let name = node.name.clone();
                                flow.update(|f| f.select_node(ml_id, name));
                            }
                        }
                    }
                    forest.set(nodes);
                }
                Err(e) => set_tree_error.set(Some(e)),
            }
            set_tree_loading.set(false);
        });
    };

    let cancel = move |_| {
        flow.update(|f| {
            f.cancel();
        });
    };

    let confirm = {
        move |_| {
            let Some(request) = flow.try_update(|f| f.begin_confirm()).flatten() else {
                return;
            };
            let api = api.get_value();
            let on_linked = on_linked.get_value();
            wasm_bindgen_futures::spawn_local(async move {
                let category_id = request.category_id;
                let category_name = flow.with_untracked(|f| {
                    f.target()
                        .map(|t| t.category_name.clone())
                        .unwrap_or_default()
                });
                let node_name = flow
                    .with_untracked(|f| f.selected().map(|s| s.name.clone()).unwrap_or_default());
                match channel_api::save_link(&api, &request).await {
                    Ok(()) => {
                        flow.update(|f| f.confirm_succeeded());
                        notify.success(
                            "Category linked",
                            &format!("\"{}\" now points at \"{}\"", category_name, node_name),
                        );
                        flow.update(|f| f.finish());
                        (on_linked)(category_id);
                    }
                    Err(e) => {
                        notify.error("Link failed", &e);
                        flow.update(|f| f.confirm_failed(e));
                    }
                }
            });
        }
    };

    view! {
        {move || if picker_open.get() {
            view! {
                <div class="modal-overlay">
                    <div class="modal-content modal-content--picker">
                        <div class="picker-container">
                            <div class="picker-header">
                                <h3>{"Choose a channel"}</h3>
                            </div>
                            <div class="picker-content">
                                <div class="picker-list">
                                    {Channel::all().into_iter().map(|channel| {
                                        view! {
                                            <div
                                                class="picker-item"
                                                on:click=move |_| choose_channel(channel)
                                            >
                                                <div class="picker-item-icon">{icon("link")}</div>
                                                <div class="picker-item-description">
                                                    {channel.display_name()}
                                                </div>
                                                <div class="picker-item-caption">
                                                    {channel.description()}
                                                </div>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            </div>
                            <div class="picker-actions">
                                <button class="btn btn-secondary" on:click=cancel>
                                    {"Cancel"}
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            }.into_any()
        } else {
            view! { <></> }.into_any()
        }}

        {
            let confirm = confirm.clone();
            move || if tree_open.get() {
                let confirm = confirm.clone();
                view! {
                    <div class="modal-overlay">
                        <div class="modal-content modal-content--tree">
                            <div class="modal-header">
                                <h3>
                                    {move || flow.with(|f| {
                                        f.target()
                                            .map(|t| format!("Link \"{}\"", t.category_name))
                                            .unwrap_or_else(|| "Link category".to_string())
                                    })}
                                </h3>
                                <button
                                    class="button button--icon"
                                    title="Close"
                                    disabled={move || flow.with(|f| !f.can_cancel())}
                                    on:click=cancel
                                >
                                    {icon("close")}
                                </button>
                            </div>

                            {move || flow.with(|f| f.error().map(|e| e.to_string()))
                                .map(|e| view! { <div class="error">{e}</div> })}

                            {move || if tree_loading.get() {
                                view! {
                                    <div class="tree-loading">{"Loading category tree..."}</div>
                                }.into_any()
                            } else if let Some(e) = tree_error.get() {
                                view! { <div class="error">{e}</div> }.into_any()
                            } else {
                                view! {
                                    <MlCategoryTreeBrowser
                                        forest=Signal::derive(move || forest.get())
                                        selected_ml_id=Signal::derive(move || {
                                            flow.with(|f| f.selected().map(|s| s.ml_id.clone()))
                                        })
                                        on_select=Rc::new(move |ml_id: String, name: String| {
                                            flow.update(|f| f.select_node(ml_id, name));
                                        })
                                    />
                                }.into_any()
                            }}

                            {move || flow.with(|f| f.selected().cloned()).map(|node| view! {
                                <div class="link-selected">
                                    <span class="link-selected__label">{"Selected:"}</span>
                                    <span class="link-selected__name">{node.name}</span>
                                    <span class="link-selected__id">{node.ml_id}</span>
                                    <button
                                        class="button button--icon"
                                        title="Clear selection"
                                        disabled={move || flow.with(|f| f.is_saving())}
                                        on:click=move |_| flow.update(|f| f.clear_selection())
                                    >
                                        {icon("close")}
                                    </button>
                                </div>
                            })}

                            <div class="modal-footer">
                                <button
                                    class="btn btn-primary"
                                    on:click=confirm
                                    disabled={move || flow.with(|f| {
                                        f.is_saving() || f.selected().is_none()
                                    })}
                                >
                                    {icon("check")}
                                    {move || if flow.with(|f| f.is_saving()) {
                                        "Saving..."
                                    } else {
                                        "Confirm link"
                                    }}
                                </button>
                                <button
                                    class="btn btn-secondary"
                                    on:click=cancel
                                    disabled={move || flow.with(|f| !f.can_cancel())}
                                >
                                    {"Cancel"}
                                </button>
                            </div>
                        </div>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }
        }
    }
}
