use std::rc::Rc;

use common::{ProfileAction, ProfileEditorState, ProfileField, UserProfile};
use common::editor::SAVE_FAILED_FALLBACK;
use common::report::PLACEHOLDER;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api_client::profile::{get_my_profile, update_my_profile};
use crate::common::error::ErrorDisplay;
use crate::common::loading::LoadingSpinner;
use crate::common::toast::ToastContext;

/// Yew store around the shared editor state machine.
#[derive(Default, PartialEq)]
struct EditorStore(ProfileEditorState);

impl Reducible for EditorStore {
    type Action = ProfileAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(EditorStore(self.0.clone().apply(action)))
    }
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let store = use_reducer(EditorStore::default);
    let toast_ctx = use_context::<ToastContext>();
    let picture_ref = use_node_ref();
    let state = &store.0;

    // Initial load, then again after every successful save.
    {
        let dispatcher = store.dispatcher();
        use_effect_with(state.refresh, move |refresh| {
            log::debug!("Loading profile (refresh #{})", refresh);
            dispatcher.dispatch(ProfileAction::FetchStarted);
            wasm_bindgen_futures::spawn_local(async move {
                match get_my_profile().await {
                    Ok(profile) => dispatcher.dispatch(ProfileAction::FetchSucceeded(profile)),
                    Err(e) => dispatcher.dispatch(ProfileAction::FetchFailed(e)),
                }
            });
            || ()
        });
    }

    {
        let dispatcher = store.dispatcher();
        let toast_ctx = toast_ctx.clone();
        use_effect_with(state.notice.clone(), move |notice| {
            if let Some(message) = notice {
                if let Some(ctx) = &toast_ctx {
                    ctx.show_success(message.clone());
                }
                dispatcher.dispatch(ProfileAction::DismissNotice);
            }
            || ()
        });
    }

    let on_toggle_edit = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: MouseEvent| {
            log::debug!("Toggling profile edit mode");
            dispatcher.dispatch(ProfileAction::ToggleEdit);
        })
    };

    let on_save = {
        let dispatcher = store.dispatcher();
        let submission = state.submission();
        let saving = state.saving;
        let picture_ref = picture_ref.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if saving {
                return;
            }
            let Some(submission) = submission.clone() else {
                log::warn!("Save requested before the profile was loaded");
                return;
            };
            let picture = picture_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));

            let dispatcher = dispatcher.clone();
            let toast_ctx = toast_ctx.clone();
            dispatcher.dispatch(ProfileAction::SaveStarted);

            wasm_bindgen_futures::spawn_local(async move {
                match update_my_profile(&submission, picture).await {
                    Ok(_) => dispatcher.dispatch(ProfileAction::SaveSucceeded),
                    Err(e) => {
                        if let Some(ctx) = &toast_ctx {
                            ctx.show_error(e.user_message(SAVE_FAILED_FALLBACK));
                        }
                        dispatcher.dispatch(ProfileAction::SaveFailed(e));
                    }
                }
            });
        })
    };

    let Some(profile) = state.profile.as_ref() else {
        return match &state.load_error {
            Some(error) => html! { <ErrorDisplay message={error.clone()} /> },
            None => html! { <LoadingSpinner /> },
        };
    };

    let (kin_fields, fields): (Vec<ProfileField>, Vec<ProfileField>) =
        state.visible_fields().into_iter().partition(|field| field.is_next_of_kin());

    html! {
        <div class="space-y-6">
            {if let Some(error) = &state.load_error {
                html! { <ErrorDisplay message={error.clone()} /> }
            } else {
                html! {}
            }}

            <div class="card bg-base-100 shadow">
                <div class="card-body flex-row items-center gap-6">
                    <div class="avatar">
                        <div class="w-24 rounded-full">
                            <img src={profile.avatar_url()} alt={profile.name.clone()} />
                        </div>
                    </div>
                    <div class="flex-1">
                        <h2 class="text-2xl font-bold">{&profile.name}</h2>
                        <p class="text-gray-500">{&profile.email}</p>
                        <span class="badge badge-primary mt-2">{profile.role.to_string()}</span>
                    </div>
                    {if state.refreshing() {
                        html! { <span class="loading loading-spinner loading-md" title="Refreshing profile"></span> }
                    } else {
                        html! {}
                    }}
                    <button class="btn btn-primary btn-sm" onclick={on_toggle_edit} disabled={state.saving}>
                        <i class={if state.editing { "fas fa-times" } else { "fas fa-edit" }}></i>
                        {format!(" {}", state.toggle_label())}
                    </button>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title text-lg">{"Profile Details"}</h3>
                    {if state.editing {
                        html! {
                            <form onsubmit={on_save} class="space-y-4 mt-4">
                                {if let Some(error) = &state.save_error {
                                    html! {
                                        <div class="alert alert-error">
                                            <span>{error}</span>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }}
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                    { for fields.iter().map(|field| edit_field(&store, *field)) }
                                    <div class="form-control">
                                        <label class="label"><span class="label-text">{"Profile Picture"}</span></label>
                                        <input
                                            ref={picture_ref.clone()}
                                            type="file"
                                            accept="image/*"
                                            class="file-input file-input-bordered w-full"
                                        />
                                    </div>
                                </div>
                                { kin_heading(&kin_fields) }
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                    { for kin_fields.iter().map(|field| edit_field(&store, *field)) }
                                </div>
                                <div class="flex justify-end">
                                    <button type="submit" class="btn btn-primary" disabled={state.saving}>
                                        {if state.saving {
                                            html! { <><span class="loading loading-spinner loading-sm"></span>{" Saving..."}</> }
                                        } else {
                                            html! { "Save Changes" }
                                        }}
                                    </button>
                                </div>
                            </form>
                        }
                    } else {
                        html! {
                            <>
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mt-4">
                                    { for fields.iter().map(|field| read_only_field(profile, *field)) }
                                </div>
                                { kin_heading(&kin_fields) }
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                    { for kin_fields.iter().map(|field| read_only_field(profile, *field)) }
                                </div>
                            </>
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

fn kin_heading(kin_fields: &[ProfileField]) -> Html {
    if kin_fields.is_empty() {
        return html! {};
    }
    html! {
        <h4 class="font-semibold text-base mt-6 mb-2 border-t pt-4">{"Next of Kin Information"}</h4>
    }
}

fn read_only_field(profile: &UserProfile, field: ProfileField) -> Html {
    let value = profile
        .value(field)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    html! {
        <div key={field.key()}>
            <div class="text-sm text-gray-500">{field.label()}</div>
            <div class="font-semibold">{value}</div>
        </div>
    }
}

fn edit_field(store: &UseReducerHandle<EditorStore>, field: ProfileField) -> Html {
    let oninput = {
        let dispatcher = store.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(ProfileAction::FieldChanged(field, input.value()));
        })
    };

    html! {
        <div class="form-control" key={field.key()}>
            <label class="label"><span class="label-text">{field.label()}</span></label>
            <input
                type={field.input_type()}
                name={field.key()}
                class="input input-bordered w-full"
                value={store.0.draft.get(field).to_string()}
                {oninput}
            />
        </div>
    }
}
