use common::LoginRequest;
use common::auth::LOGIN_FAILED_MESSAGE;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::api_client::auth::login;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let navigator = use_navigator();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *is_submitting {
                return;
            }

            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let request = LoginRequest::new(value(&email_ref), value(&password_ref));

            if let Some(message) = request.validation_message() {
                log::debug!("Login form rejected: {}", message);
                error_message.set(Some(message));
                return;
            }

            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let navigator = navigator.clone();

            is_submitting.set(true);
            error_message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match login(&request).await {
                    Ok(user) => {
                        log::info!("Signed in as {}, opening profile", user.name);
                        is_submitting.set(false);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Profile);
                        }
                    }
                    Err(e) => {
                        log::warn!("Sign-in failed: {}", e);
                        error_message.set(Some(LOGIN_FAILED_MESSAGE.to_string()));
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="flex justify-center items-center py-12">
            <div class="card bg-base-100 shadow w-full max-w-md">
                <div class="card-body">
                    <h2 class="card-title text-2xl">{"Sign In"}</h2>

                    {if let Some(error) = (*error_message).as_ref() {
                        html! {
                            <div class="alert alert-error mt-2">
                                <span>{error}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }}

                    <form onsubmit={on_submit} class="space-y-4 mt-2">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Email"}</span></label>
                            <input ref={email_ref} type="email" name="email" class="input input-bordered w-full" required=true />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Password"}</span></label>
                            <input ref={password_ref} type="password" name="password" class="input input-bordered w-full" required=true />
                        </div>
                        <button type="submit" class="btn btn-primary w-full" disabled={*is_submitting}>
                            {if *is_submitting {
                                html! { <><span class="loading loading-spinner loading-sm"></span>{" Signing in..."}</> }
                            } else {
                                html! { "Login" }
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
