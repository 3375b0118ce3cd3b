use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::settings;

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let app_name = settings::get_settings().app_name;

    html! {
        <div class="drawer-side z-50 print:hidden">
            <label aria-label="close sidebar" class="drawer-overlay" for="app-drawer"></label>
            <ul class="menu p-4 w-80 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <li class="mb-4">
                    <div class="flex items-center gap-3 px-2">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content font-bold text-2xl">
                            <i class="fas fa-school"></i>
                        </div>
                        <span class="text-lg font-bold tracking-tight">{app_name}</span>
                    </div>
                </li>

                <li><Link<Route> to={Route::Home} classes="nav-link"><i class="fas fa-home w-5"></i> {"Home"}</Link<Route>></li>
                <li><Link<Route> to={Route::Profile} classes="nav-link"><i class="fas fa-user w-5"></i> {"My Profile"}</Link<Route>></li>
                <li><Link<Route> to={Route::Reports} classes="nav-link"><i class="fas fa-file-alt w-5"></i> {"Report Cards"}</Link<Route>></li>

                <div class="divider"></div>

                <li><Link<Route> to={Route::Login} classes="nav-link"><i class="fas fa-sign-in-alt w-5"></i> {"Login"}</Link<Route>></li>
            </ul>
        </div>
    }
}
