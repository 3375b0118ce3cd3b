use yew::prelude::*;
use crate::hooks::FetchState;
use super::loading::LoadingSpinner;
use super::error::ErrorDisplay;

#[derive(Properties)]
pub struct FetchRenderProps<T: Clone + PartialEq + 'static> {
    pub state: FetchState<T>,
    pub render: Callback<T, Html>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or_default]
    pub loading_text: Option<AttrValue>,
    /// Shown before the first request is made
    #[prop_or_default]
    pub idle_text: Option<AttrValue>,
}

impl<T: Clone + PartialEq + 'static> PartialEq for FetchRenderProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && self.loading_text == other.loading_text
            && self.idle_text == other.idle_text
    }
}

/// Renders a [`FetchState`]: spinner while loading, an error banner on
/// failure, and `render` once data is in.
#[function_component(FetchRender)]
pub fn fetch_render<T>(props: &FetchRenderProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    match &props.state {
        FetchState::NotStarted => match &props.idle_text {
            Some(text) => html! { <p class="text-sm text-gray-500 text-center py-8">{text}</p> },
            None => html! {},
        },
        FetchState::Loading => html! { <LoadingSpinner text={props.loading_text.clone()} /> },
        FetchState::Error(err) => html! {
            <ErrorDisplay message={err.clone()} on_retry={props.on_retry.clone()} />
        },
        FetchState::Success(data) => props.render.emit(data.clone()),
    }
}
