use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::settings;

#[function_component(Home)]
pub fn home() -> Html {
    let app_name = settings::get_settings().app_name;
    let navigator = use_navigator();

    let on_login = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    });

    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-5xl font-bold mb-6">{format!("Welcome to {}", app_name)}</h1>
                    <img src="/favicon.png" alt="App Logo" class="w-24 mx-auto mb-6" />
                    <button class="btn btn-primary" onclick={on_login}>{"Login"}</button>
                </div>
            </div>
        </div>
    }
}
