use super::view_model::CategoryDetailsViewModel;
use crate::shared::api_client::use_api;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn CategoryDetails(
    id: Option<i32>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = CategoryDetailsViewModel::new(use_api());
    vm.load(id);

    // Clone vm for multiple closures
    let vm_clone = vm.clone();

    view! {
        <div class="details-container category-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit category" } else { "New category" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input
                        type="text"
                        id="name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.name = event_target_value(&ev));
                            }
                        }
                        placeholder="Category name"
                    />
                </div>

                <div class="form-group">
                    <label for="parent">{"Parent category"}</label>
                    <select
                        id="parent"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || {
                                vm.form
                                    .get()
                                    .parent_id
                                    .map(|p| p.to_string())
                                    .unwrap_or_default()
                            }
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.parent_id = if value.is_empty() {
                                        None
                                    } else {
                                        value.parse().ok()
                                    };
                                });
                            }
                        }
                    >
                        <option value="">{"Root (no parent)"}</option>
                        {
                            let vm = vm_clone.clone();
                            move || vm.parent_options().into_iter().map(|c| {
                                view! {
                                    <option value={c.id.to_string()}>{c.name}</option>
                                }
                            }).collect_view()
                        }
                    </select>
                </div>

                <div class="form-group">
                    <label>{"Type"}</label>
                    <div class="type-options">
                        <div
                            class="type-option"
                            class:selected={
                                let vm = vm_clone.clone();
                                move || vm.form.get().is_intermediate()
                            }
                            on:click={
                                let vm = vm_clone.clone();
                                move |_| vm.form.update(|f| f.is_final = false)
                            }
                        >
                            <div class="type-option__title">
                                {icon("folder")}
                                {"Intermediate"}
                            </div>
                            <div class="type-option__caption">{"Groups other categories"}</div>
                        </div>
                        <div
                            class="type-option"
                            class:selected={
                                let vm = vm_clone.clone();
                                move || vm.form.get().is_final
                            }
                            on:click={
                                let vm = vm_clone.clone();
                                move |_| vm.form.update(|f| f.is_final = true)
                            }
                        >
                            <div class="type-option__title">
                                {icon("file")}
                                {"Final"}
                            </div>
                            <div class="type-option__caption">{"Holds products and marketplace links"}</div>
                        </div>
                    </div>
                </div>

                <div class="form-group">
                    <label>{"Position"}</label>
                    <div class="hierarchy-preview">
                        {
                            let vm = vm_clone.clone();
                            move || vm.hierarchy_preview()
                        }
                    </div>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || vm.saving.get() || !vm.is_form_valid()()
                    }
                >
                    {icon("save")}
                    {
                        let vm = vm_clone.clone();
                        move || {
                            if vm.saving.get() {
                                "Saving..."
                            } else if vm.is_edit_mode()() {
                                "Save"
                            } else {
                                "Create"
                            }
                        }
                    }
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| (on_cancel)(())
                >
                    {icon("cancel")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
