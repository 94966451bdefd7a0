use crate::domain::a001_category::api as category_api;
use crate::domain::a001_category::hierarchy::{filter_by_name, CategoryIndex, NavigationState};
use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::domain::a003_category_channel::api as channel_api;
use crate::domain::a003_category_channel::link::link_for_display;
use crate::shared::api_client::use_api;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::notify::NotifyService;
use crate::usecases::u101_link_ml_category::flow::LinkFlow;
use crate::usecases::u101_link_ml_category::LinkMlCategoryFlow;
use contracts::domain::a003_category_channel::CategoryChannelLink;
use contracts::enums::channel::Channel;
use leptos::prelude::*;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct CategoryRow {
    pub id: i32,
    pub name: String,
    pub is_final: bool,
    pub child_count: usize,
    pub created_at: String,
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryBrowser() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");

    let index = RwSignal::new(CategoryIndex::new(Vec::new()));
    let nav = RwSignal::new(NavigationState::root());
    let (search, set_search) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);
    // Link state per final category id. A key that is present but `None`
    // has been checked and is known to be unlinked.
    let links = RwSignal::new(HashMap::<i32, Option<CategoryChannelLink>>::new());
    let (show_details, set_show_details) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<i32>>(None);
    let (confirm_delete, set_confirm_delete) = signal::<Option<(i32, String)>>(None);
    let link_flow = RwSignal::new(LinkFlow::new());

    let link_channel = Channel::MercadoLivre;

    let load = move || {
        let api = api.get_value();
        set_is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match category_api::fetch_categories(&api).await {
                Ok(items) => {
                    index.set(CategoryIndex::new(items));
                    links.set(HashMap::new());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    // Rows of the level the navigator points at, filtered by the search box
    let level_rows = move || {
        let idx = index.get();
        let parent = nav.get().current_parent_id();
        let term = search.get();
        filter_by_name(idx.children_of(parent), &term)
            .into_iter()
            .map(|c| CategoryRow {
                id: c.id,
                name: c.name.clone(),
                is_final: c.is_final,
                child_count: idx.count_children(c.id),
                created_at: format_date_opt(c.created_at),
            })
            .collect::<Vec<_>>()
    };

    // Fetch link state for final categories that come into view
    Effect::new(move |_| {
        let missing: Vec<i32> = level_rows()
            .into_iter()
            .filter(|r| r.is_final)
            .map(|r| r.id)
            .filter(|id| !links.with_untracked(|m| m.contains_key(id)))
            .collect();
        if missing.is_empty() {
            return;
        }
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            for id in missing {
                let result = channel_api::fetch_link(&api, id, link_channel.id()).await;
                let entry = link_for_display(result, id);
                links.update(|m| {
                    m.insert(id, entry);
                });
            }
        });
    });

    let start_link = move |id: i32| {
        let Some(category) = index.with(|idx| idx.get(id).cloned()) else {
            return;
        };
        if let Some(Err(msg)) = link_flow.try_update(|f| f.start(&category)) {
            notify.error("Cannot link", &msg);
        }
    };

    load();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Categories"}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| {
                        set_editing_id.set(None);
                        set_show_details.set(true);
                    }>
                        {icon("plus")}
                        {"New category"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| load()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="toolbar">
                <nav class="breadcrumbs">
                    <Show when=move || !nav.get().is_root()>
                        <button
                            class="button button--icon"
                            title="Back"
                            on:click=move |_| nav.update(|n| n.back())
                        >
                            {icon("chevron-left")}
                        </button>
                    </Show>
                    <button
                        class="breadcrumbs__item"
                        class:breadcrumbs__item--current={move || nav.get().is_root()}
                        on:click=move |_| nav.update(|n| n.jump(-1))
                    >
                        {"Root"}
                    </button>
                    {move || {
                        let state = nav.get();
                        let count = state.crumbs().len();
                        state.crumbs().iter().enumerate().map(|(i, crumb)| {
                            let position = i as isize;
                            let is_current = i + 1 == count;
                            view! {
                                <span class="breadcrumbs__separator">{icon("chevron-right")}</span>
                                <button
                                    class="breadcrumbs__item"
                                    class:breadcrumbs__item--current={move || is_current}
                                    on:click=move |_| nav.update(|n| n.jump(position))
                                >
                                    {crumb.name.clone()}
                                </button>
                            }
                        }).collect_view()
                    }}
                </nav>
                <div class="search-box">
                    {icon("search")}
                    <input
                        type="text"
                        class="search-box__input"
                        placeholder="Filter this level by name"
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
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Type"}</th>
                            <th class="table__header-cell">{"Children"}</th>
                            <th class="table__header-cell">{"Mercado Livre"}</th>
                            <th class="table__header-cell">{"Created"}</th>
                            <th class="table__header-cell table__header-cell--actions">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = level_rows();
                            if rows.is_empty() {
                                let message = if is_loading.get() {
                                    "Loading..."
                                } else if !search.get().is_empty() {
                                    "No categories match the filter"
                                } else {
                                    "No categories at this level"
                                };
                                return view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--empty" colspan="6">{message}</td>
                                    </tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|row| {
                                let row_id = row.id;
                                let is_final = row.is_final;
                                let name_for_delete = row.name.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--name">
                                            {if is_final {
                                                view! {
                                                    <span class="category-name">
                                                        {icon("file")}
                                                        <span>{row.name.clone()}</span>
                                                    </span>
                                                }.into_any()
                                            } else {
                                                view! {
                                                    <button
                                                        class="category-name category-name--openable"
                                                        title="Open"
                                                        on:click=move |_| {
                                                            let Some(category) = index.with(|idx| idx.get(row_id).cloned()) else {
                                                                return;
                                                            };
                                                            nav.update(|n| n.enter(&category));
                                                        }
                                                    >
                                                        {icon("folder")}
                                                        <span>{row.name.clone()}</span>
                                                    </button>
                                                }.into_any()
                                            }}
                                        </td>
                                        <td class="table__cell">
                                            {if is_final {
                                                view! { <span class="badge badge--final">{"Final"}</span> }.into_any()
                                            } else {
                                                view! { <span class="badge badge--intermediate">{"Intermediate"}</span> }.into_any()
                                            }}
                                        </td>
                                        <td class="table__cell">
                                            {if is_final { "-".to_string() } else { row.child_count.to_string() }}
                                        </td>
                                        <td class="table__cell">
                                            {move || {
                                                if !is_final {
                                                    return view! { <span class="table__muted">{"-"}</span> }.into_any();
                                                }
                                                match links.with(|m| m.get(&row_id).cloned()) {
                                                    Some(Some(link)) => view! {
                                                        <span class="badge badge--linked" title="Linked to Mercado Livre">
                                                            {icon("link")}
                                                            {link.category_channel_id.clone()}
                                                        </span>
                                                    }.into_any(),
                                                    Some(None) => view! {
                                                        <span class="badge badge--unlinked">{"Not linked"}</span>
                                                    }.into_any(),
                                                    None => view! { <span class="table__muted">{""}</span> }.into_any(),
                                                }
                                            }}
                                        </td>
                                        <td class="table__cell">{row.created_at.clone()}</td>
                                        <td class="table__cell table__cell--actions">
                                            {if is_final {
                                                view! {
                                                    <button
                                                        class="button button--icon"
                                                        title="Link to Mercado Livre"
                                                        on:click=move |_| start_link(row_id)
                                                    >
                                                        {icon("link")}
                                                    </button>
                                                }.into_any()
                                            } else {
                                                view! { <></> }.into_any()
                                            }}
                                            <button
                                                class="button button--icon"
                                                title="Edit"
                                                on:click=move |_| {
                                                    set_editing_id.set(Some(row_id));
                                                    set_show_details.set(true);
                                                }
                                            >
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="button button--icon"
                                                title="Delete"
                                                on:click={
                                                    let name = name_for_delete.clone();
                                                    move |_| set_confirm_delete.set(Some((row_id, name.clone())))
                                                }
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <div class="summary-bar">
                {move || {
                    let idx = index.get();
                    format!(
                        "Showing {} of {} categories • {} final • {} intermediate",
                        level_rows().len(),
                        idx.len(),
                        idx.final_count(),
                        idx.intermediate_count()
                    )
                }}
            </div>

            {move || if show_details.get() {
                view! {
                    <div class="modal-overlay">
                        <div class="modal-content">
                            <CategoryDetails
                                id=editing_id.get()
                                on_saved=Rc::new(move |_| {
                                    set_show_details.set(false);
                                    set_editing_id.set(None);
                                    notify.success("Category saved", "The category list has been refreshed");
                                    load();
                                })
                                on_cancel=Rc::new(move |_| {
                                    set_show_details.set(false);
                                    set_editing_id.set(None);
                                })
                            />
                        </div>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}

            {move || confirm_delete.get().map(|(id, name)| {
                let delete_name = name.clone();
                view! {
                    <div class="modal-overlay">
                        <div class="modal-content modal-content--dialog">
                            <div class="details-header">
                                <h3>{"Delete category"}</h3>
                            </div>
                            <p class="dialog-text">
                                {format!("Delete \"{}\"? This cannot be undone.", name)}
                            </p>
                            <div class="details-actions">
                                <button
                                    class="btn btn-danger"
                                    on:click=move |_| {
                                        let api = api.get_value();
                                        let name = delete_name.clone();
                                        set_confirm_delete.set(None);
                                        wasm_bindgen_futures::spawn_local(async move {
                                            match category_api::delete_category(&api, id).await {
                                                Ok(()) => {
                                                    notify.success(
                                                        "Category deleted",
                                                        &format!("\"{}\" was removed", name),
                                                    );
                                                    load();
                                                }
                                                Err(e) => notify.error("Delete failed", &e),
                                            }
                                        });
                                    }
                                >
                                    {icon("delete")}
                                    {"Delete"}
                                </button>
                                <button
                                    class="btn btn-secondary"
                                    on:click=move |_| set_confirm_delete.set(None)
                                >
                                    {"Cancel"}
                                </button>
                            </div>
                        </div>
                    </div>
                }
            })}

            <LinkMlCategoryFlow
                flow=link_flow
                on_linked=Rc::new(move |_category_id: i32| {
                    load();
                })
            />
        </div>
    }
}
