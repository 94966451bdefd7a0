use crate::domain::a001_category::api;
use crate::domain::a001_category::hierarchy::CategoryIndex;
use crate::shared::api_client::ApiClient;
use contracts::domain::a001_category::Category;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the category details form
#[derive(Clone)]
pub struct CategoryDetailsViewModel {
    api: ApiClient,
    pub form: RwSignal<Category>,
    pub index: RwSignal<CategoryIndex>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl CategoryDetailsViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            form: RwSignal::new(Category::default()),
            index: RwSignal::new(CategoryIndex::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().is_persisted()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().validate().is_ok()
    }

    /// Intermediate categories that can serve as the parent, excluding the
    /// category being edited.
    pub fn parent_options(&self) -> Vec<Category> {
        let own_id = self.form.get().id;
        self.index.with(|index| {
            index
                .parent_options(own_id)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    /// Where the category will sit in the hierarchy, rendered as a path
    /// from the root.
    pub fn hierarchy_preview(&self) -> String {
        let form = self.form.get();
        let name = form.name.trim();
        let mut parts = vec![if name.is_empty() {
            "(unnamed)".to_string()
        } else {
            name.to_string()
        }];

        self.index.with(|index| {
            // Guard against malformed parent chains
            let mut next = form.parent_id;
            let mut depth = 0;
            while let Some(parent_id) = next {
                depth += 1;
                if depth > 32 {
                    break;
                }
                match index.get(parent_id) {
                    Some(parent) => {
                        parts.push(parent.name.clone());
                        next = parent.parent_id;
                    }
                    None => break,
                }
            }
        });

        parts.push("Root".to_string());
        parts.reverse();
        parts.join(" / ")
    }

    /// Fetch the full category list for the parent selector; when editing,
    /// also fetch the category itself.
    pub fn load(&self, id: Option<i32>) {
        let api = self.api.clone();
        let form = self.form;
        let index = self.index;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_categories(&api).await {
                Ok(items) => index.set(CategoryIndex::new(items)),
                Err(e) => {
                    error.set(Some(format!("Failed to load categories: {}", e)));
                    return;
                }
            }

            let Some(existing_id) = id else {
                return;
            };
            match api::fetch_category(&api, existing_id).await {
                Ok(category) => form.set(category),
                Err(e) => error.set(Some(format!("Failed to load category: {}", e))),
            }
        });
    }

    /// Save form data to server
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get();

        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }

        let api = self.api.clone();
        let on_saved_cb = on_saved.clone();
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::save_category(&api, &current).await {
                Ok(_) => (on_saved_cb)(()),
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    }
}
