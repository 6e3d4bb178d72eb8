use log::error;
use serde::Serialize;
use yew::prelude::*;

use crate::components::disclosure::DisclosurePanel;
use crate::content::FaqEntry;

#[derive(Serialize)]
struct Answer<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    text: &'a str,
}

#[derive(Serialize)]
struct Question<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    #[serde(rename = "acceptedAnswer")]
    accepted_answer: Answer<'a>,
}

#[derive(Serialize)]
struct FaqPage<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "mainEntity")]
    main_entity: Vec<Question<'a>>,
}

/// schema.org `FAQPage` document for the given entries, in order.
pub fn faq_structured_data(entries: &[FaqEntry]) -> Result<String, serde_json::Error> {
    let page = FaqPage {
        context: "https://schema.org",
        kind: "FAQPage",
        main_entity: entries
            .iter()
            .map(|entry| Question {
                kind: "Question",
                name: entry.question,
                accepted_answer: Answer {
                    kind: "Answer",
                    text: entry.answer,
                },
            })
            .collect(),
    };
    serde_json::to_string(&page)
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: &'static [FaqEntry],
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let json_ld = match faq_structured_data(props.entries) {
        Ok(json) => html! { <script type="application/ld+json">{ json }</script> },
        Err(err) => {
            error!("failed to serialize faq structured data: {}", err);
            html! {}
        }
    };

    html! {
        <section id="faq" class="section">
            <div class="container">
                <div class="section-head">
                    <h2>{"FAQ"}</h2>
                    <p class="muted">{"Short answers. Ask for more details on a call."}</p>
                </div>
                <div class="faq-list">
                    {
                        for props.entries.iter().enumerate().map(|(i, entry)| html! {
                            <DisclosurePanel
                                key={entry.question}
                                id={format!("faq-{}", i)}
                                class="faq-item"
                                summary={html! { <span class="faq-question">{ entry.question }</span> }}
                            >
                                <p class="faq-answer">{ entry.answer }</p>
                            </DisclosurePanel>
                        })
                    }
                </div>
                { json_ld }
            </div>
            <style>
                {r#"
                .faq-list {
                    max-width: 48rem;
                    margin: 2.5rem auto 0;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                }
                .faq-item { padding: 1.25rem; }
                .faq-item + .faq-item { border-top: 1px solid rgba(255, 255, 255, 0.1); }
                .faq-question { font-weight: 500; }
                .faq-answer { margin: 0.75rem 0 0; font-size: 0.875rem; color: rgba(255, 255, 255, 0.8); }
                "#}
            </style>
        </section>
    }
}
