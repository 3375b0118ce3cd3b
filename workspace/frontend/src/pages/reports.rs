use common::{ReportDocument, ReportRecord};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api_client::report::get_report_cards;
use crate::common::fetch_render::FetchRender;
use crate::common::toast::ToastContext;
use crate::components::report_card::ReportCardDocument;
use crate::hooks::FetchState;

const REPORTS_FAILED_MESSAGE: &str = "Could not load report cards. Please try again.";

#[function_component(ReportsPage)]
pub fn reports_page() -> Html {
    let class_id = use_state(String::new);
    let session_id = use_state(String::new);
    let fetch_state = use_state(FetchState::<Vec<ReportRecord>>::default);
    let toast_ctx = use_context::<ToastContext>();

    let on_class_input = {
        let class_id = class_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            class_id.set(input.value());
        })
    };

    let on_session_input = {
        let session_id = session_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            session_id.set(input.value());
        })
    };

    let generate = {
        let class_id = class_id.clone();
        let session_id = session_id.clone();
        let fetch_state = fetch_state.clone();
        Callback::from(move |_: ()| {
            let class_id = class_id.trim().to_string();
            let session_id = session_id.trim().to_string();
            if class_id.is_empty() || session_id.is_empty() {
                log::warn!("Class and session must both be given");
                return;
            }

            let fetch_state = fetch_state.clone();
            let toast_ctx = toast_ctx.clone();
            fetch_state.set(FetchState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                let result = get_report_cards(&class_id, &session_id).await;
                let state = FetchState::settle(result, REPORTS_FAILED_MESSAGE);
                if let (Some(ctx), Some(message)) = (&toast_ctx, state.error()) {
                    ctx.show_error(message.clone());
                }
                fetch_state.set(state);
            });
        })
    };

    let on_print = Callback::from(|_: MouseEvent| {
        log::debug!("Printing report cards");
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.print() {
                log::error!("Print failed: {:?}", e);
            }
        }
    });

    let render = {
        let on_print = on_print.clone();
        Callback::from(move |records: Vec<ReportRecord>| {
            if records.is_empty() {
                return html! {
                    <div class="alert alert-info">
                        <i class="fas fa-info-circle"></i>
                        <span>{"No report cards for this class and session."}</span>
                    </div>
                };
            }
            let document = ReportDocument::layout(&records);
            html! {
                <>
                    <div class="flex justify-between items-center mb-4 print:hidden">
                        <span class="text-sm text-gray-500">{format!("{} report card(s)", document.pages.len())}</span>
                        <button class="btn btn-secondary btn-sm" onclick={on_print.clone()}>
                            <i class="fas fa-print"></i> {" Print"}
                        </button>
                    </div>
                    <ReportCardDocument {document} />
                </>
            }
        })
    };

    let disabled = class_id.trim().is_empty() || session_id.trim().is_empty() || fetch_state.is_loading();
    let on_generate = {
        let generate = generate.clone();
        Callback::from(move |_: MouseEvent| generate.emit(()))
    };

    html! {
        <div class="space-y-6">
            <div class="card bg-base-100 shadow print:hidden">
                <div class="card-body">
                    <h3 class="card-title">{"Generate Report Cards"}</h3>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4 items-end">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Class ID"}</span></label>
                            <input class="input input-bordered w-full" value={(*class_id).clone()} oninput={on_class_input} />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Session ID"}</span></label>
                            <input class="input input-bordered w-full" value={(*session_id).clone()} oninput={on_session_input} />
                        </div>
                        <button class="btn btn-primary" onclick={on_generate} {disabled}>
                            <i class="fas fa-file-alt"></i> {" Generate Preview"}
                        </button>
                    </div>
                </div>
            </div>

            <FetchRender<Vec<ReportRecord>>
                state={(*fetch_state).clone()}
                {render}
                on_retry={Some(generate)}
                loading_text="Please wait..."
                idle_text="Enter a class and session, then generate a preview."
            />
        </div>
    }
}
