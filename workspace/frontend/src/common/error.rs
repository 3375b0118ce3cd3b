use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Inline, non-fatal error banner. The page around it stays usable.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Showing error banner: {}", props.message);

    let retry = props.on_retry.clone().map(|on_retry| {
        let onclick = Callback::from(move |_: MouseEvent| {
            log::debug!("Retry requested from error banner");
            on_retry.emit(());
        });
        html! {
            <button class="btn btn-sm" {onclick}>
                <i class="fas fa-redo"></i>{" Try Again"}
            </button>
        }
    });

    html! {
        <div class="alert alert-error">
            <i class="fas fa-exclamation-circle"></i>
            <span>{&props.message}</span>
            { retry.unwrap_or_default() }
        </div>
    }
}
