use yew::prelude::*;

use crate::components::disclosure::DisclosurePanel;
use crate::config::SiteConfig;
use crate::content::SOLUTION_GROUPS;

#[derive(Properties, PartialEq)]
pub struct SolutionsProps {
    pub site: &'static SiteConfig,
}

#[function_component(Solutions)]
pub fn solutions(props: &SolutionsProps) -> Html {
    let booking_url = props.site.booking_url;

    html! {
        <section id="solutions" class="section">
            <div class="container">
                <div class="section-head">
                    <h2>{"Solutions"}</h2>
                    <p class="muted">{"Four categories. Click to explore the automations inside."}</p>
                </div>

                <div class="grid grid-2 solution-grid">
                    {
                        for SOLUTION_GROUPS.iter().enumerate().map(|(i, group)| {
                            let summary = html! {
                                <>
                                    <h3 class="solution-title">{ group.title }</h3>
                                    <p class="solution-desc">{ group.description }</p>
                                </>
                            };
                            html! {
                                <DisclosurePanel key={group.title} id={format!("solution-{}", i)} class="card" {summary}>
                                    <ul class="solution-items">
                                        { for group.items.iter().map(|item| html! { <li>{ *item }</li> }) }
                                    </ul>
                                    <a href={booking_url} target="_blank" rel="noreferrer" class="btn btn-ghost">
                                        { format!("Book a call about {}", group.title) }
                                    </a>
                                </DisclosurePanel>
                            }
                        })
                    }
                </div>
            </div>
            <style>
                {r#"
                .solution-grid { align-items: start; }
                .solution-title { font-size: 1.125rem; margin: 0; }
                .solution-desc { font-size: 0.875rem; color: rgba(255, 255, 255, 0.8); margin: 0.25rem 0 0; }
                .solution-items { margin: 1rem 0; padding-left: 1.25rem; font-size: 0.875rem; line-height: 1.9; color: rgba(255, 255, 255, 0.8); }
                .solution-items li::marker { color: #22d3ee; }
                "#}
            </style>
        </section>
    }
}
