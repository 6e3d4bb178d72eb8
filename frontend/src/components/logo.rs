use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_else(|| classes!("logo"))]
    pub class: Classes,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <svg class={props.class.clone()} viewBox="0 0 64 64" role="img" aria-label="Ederox logo">
            <rect x="10" y="12" width="44" height="8" rx="4" fill="#22d3ee" />
            <rect x="10" y="28" width="30" height="8" rx="4" fill="#67e8f9" />
            <path d="M10 44h44v8H10z" fill="#a5f3fc" />
            <path d="M42 24l12 12" stroke="#22d3ee" stroke-opacity="0.6" stroke-width="6" stroke-linecap="round" />
        </svg>
    }
}
