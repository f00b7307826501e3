//! Creation form: one URL input, a submit button, and the created link.
//!
//! SYSTEM CONTEXT
//! ==============
//! Form state is local to the component; submission and copying go through
//! `LinkActions`, which also reloads the link list after a create.

#[cfg(test)]
#[path = "url_form_test.rs"]
mod url_form_test;

use leptos::prelude::*;

use crate::state::form::FormState;
use crate::util::link_actions::LinkActions;

const PLACEHOLDER: &str = "https://example.com/property-listing";

/// How long the copy button shows its check mark.
#[cfg(any(test, feature = "hydrate"))]
const COPIED_RESET_MS: u64 = 2_000;

fn copy_icon(copied: bool) -> &'static str {
    if copied { "✓" } else { "⧉" }
}

/// Link creation card.
#[component]
pub fn UrlForm() -> impl IntoView {
    let actions = expect_context::<LinkActions>();
    let form = RwSignal::new(FormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        actions.create(form);
    };

    let on_copied = Callback::new(move |()| {
        form.update(|f| f.copied = true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(COPIED_RESET_MS)).await;
                let _ = form.try_update(|f| f.copied = false);
            });
        }
    });

    let on_copy = move |_| {
        if let Some(url) = form.with_untracked(|f| f.created_url.clone()) {
            actions.copy(url, Some(on_copied));
        }
    };

    view! {
        <div class="card url-form">
            <h2 class="card__title">"New Short Link"</h2>
            <form class="url-form__form" on:submit=on_submit>
                <label class="field-label" for="destination-url">"Destination URL"</label>
                <div class="url-form__input-wrap">
                    <span class="url-form__input-icon" aria-hidden="true">"🔗"</span>
                    <input
                        id="destination-url"
                        class="input url-form__input"
                        type="url"
                        placeholder=PLACEHOLDER
                        required
                        prop:value=move || form.get().input
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.input = value);
                        }
                    />
                </div>
                <button
                    type="submit"
                    class="btn btn--primary url-form__submit"
                    disabled=move || form.get().pending
                >
                    <Show when=move || form.get().pending>
                        <span class="spinner" aria-hidden="true"></span>
                    </Show>
                    "Create Link"
                </button>
            </form>

            <Show when=move || form.get().created_url.is_some()>
                <div class="url-form__result">
                    <div class="url-form__result-text">
                        <p class="field-label">"Success! Your link is ready"</p>
                        <p class="url-form__created mono">
                            {move || form.get().created_url.unwrap_or_default()}
                        </p>
                    </div>
                    <button class="btn btn--ghost btn--icon" type="button" title="Copy link" on:click=on_copy>
                        {move || copy_icon(form.get().copied)}
                    </button>
                </div>
            </Show>
        </div>
    }
}
