use crate::domain::a002_ml_category::tree::{matches, path_to};
use crate::shared::icons::icon;
use contracts::domain::a002_ml_category::MlCategory;
use leptos::prelude::*;
use std::collections::HashSet;
use std::rc::Rc;

/// Explorable view of the Mercado Livre category tree.
///
/// Children render only while their parent is expanded, so the browser
/// never materializes the whole tree at once. Searching matches name and
/// id anywhere in a branch and force-expands the branches it keeps.
/// Only leaves offer a select action.
#[component]
pub fn MlCategoryTreeBrowser(
    forest: Signal<Vec<MlCategory>>,
    selected_ml_id: Signal<Option<String>>,
    on_select: Rc<dyn Fn(String, String)>,
) -> impl IntoView {
    let on_select = StoredValue::new_local(on_select);
    let (search, set_search) = signal(String::new());
    let (expanded, set_expanded) = signal::<HashSet<String>>(HashSet::new());

    // Open the branch leading to an already linked node so the selection
    // is visible when the browser comes up.
    Effect::new(move |_| {
        let Some(target) = selected_ml_id.get() else {
            return;
        };
        let forest_value = forest.get();
        let Some(path) = path_to(&forest_value, &target) else {
            return;
        };
        if path.is_empty() {
            return;
        }
        set_expanded.update(|s| {
            for ancestor in path {
                s.insert(ancestor);
            }
        });
    });

    let rows = move || {
        let term = search.get();
        let selected = selected_ml_id.get();
        let expanded_ids = expanded.get();
        let searching = !term.trim().is_empty();

        let mut rows: Vec<AnyView> = Vec::new();
        let mut work: Vec<(MlCategory, usize)> = forest
            .get()
            .into_iter()
            .filter(|n| matches(n, &term))
            .rev()
            .map(|n| (n, 0))
            .collect();

        while let Some((node, level)) = work.pop() {
            let ml_id = node.ml_id.clone();
            let name = node.name.clone();
            let leaf = node.is_leaf();
            let is_selected = selected.as_deref() == Some(ml_id.as_str());
            let is_expanded = !leaf && (searching || expanded_ids.contains(&ml_id));

            let toggle: AnyView = if !leaf {
                let id_for_toggle = ml_id.clone();
                let chevron = if is_expanded {
                    icon("chevron-down")
                } else {
                    icon("chevron-right")
                };
                view! {
                    <button
                        class="tree-toggle"
                        on:click=move |_| set_expanded.update(|s| {
                            if !s.remove(&id_for_toggle) {
                                s.insert(id_for_toggle.clone());
                            }
                        })
                    >
                        {chevron}
                    </button>
                }
                .into_any()
            } else {
                view! { <span class="tree-toggle tree-toggle--spacer">{""}</span> }.into_any()
            };

            let select_action: AnyView = if leaf {
                if is_selected {
                    view! { <span class="tree-row__selected-mark">{icon("check")}</span> }
                        .into_any()
                } else {
                    let on_select = on_select.get_value();
                    let id_for_select = ml_id.clone();
                    let name_for_select = name.clone();
                    view! {
                        <button
                            class="btn btn-small"
                            on:click=move |_| {
                                (on_select)(id_for_select.clone(), name_for_select.clone())
                            }
                        >
                            {"Select"}
                        </button>
                    }
                    .into_any()
                }
            } else {
                view! { <></> }.into_any()
            };

            let node_icon = if leaf { icon("file") } else { icon("folder") };

            rows.push(
                view! {
                    <div
                        class="tree-row"
                        class:tree-row--selected={is_selected}
                        style={format!("padding-left: {}px;", level * 16)}
                    >
                        {toggle}
                        <span class="tree-row__icon">{node_icon}</span>
                        <span class="tree-row__name">{name.clone()}</span>
                        <span class="tree-row__id">{ml_id.clone()}</span>
                        {select_action}
                    </div>
                }
                .into_any(),
            );

            if is_expanded {
                let children: Vec<MlCategory> = node
                    .children
                    .iter()
                    .filter(|c| matches(c, &term))
                    .cloned()
                    .collect();
                for child in children.into_iter().rev() {
                    work.push((child, level + 1));
                }
            }
        }
        rows
    };

    view! {
        <div class="tree-browser">
            <div class="search-box">
                {icon("search")}
                <input
                    type="text"
                    class="search-box__input"
                    placeholder="Search by name or id"
                    prop:value={move || search.get()}
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <Show when=move || !search.get().is_empty()>
                    <button
                        class="search-box__clear"
                        on:click=move |_| set_search.set(String::new())
                    >
                        {icon("close")}
                    </button>
                </Show>
            </div>
            <div class="tree-container">
                {move || {
                    let built = rows();
                    if built.is_empty() {
                        let message = if search.get().trim().is_empty() {
                            "No categories to show"
                        } else {
                            "No categories match the search"
                        };
                        view! { <div class="tree-empty">{message}</div> }.into_any()
                    } else {
                        view! { <>{built}</> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
