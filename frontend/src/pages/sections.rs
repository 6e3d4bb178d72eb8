use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::config::{NavLink, SiteConfig};
use crate::content::{
    CONTACT_FORM, DEMOS, PLAN_FORM, PROCESS_STEPS, STATS, TESTIMONIALS, TRUST_SECTORS,
    WORK_WITH_US_POINTS,
};

#[derive(Properties, PartialEq)]
pub struct SiteProps {
    pub site: &'static SiteConfig,
}

#[function_component(Hero)]
pub fn hero(props: &SiteProps) -> Html {
    let site = props.site;
    html! {
        <section class="section hero">
            <div class="container section-head">
                <span class="chip">{"Sales • Operations • Support"}</span>
                <h1 class="hero-title">{ site.tagline }</h1>
                <p class="muted hero-sub">{ site.sub }</p>
                <div class="hero-cta-group">
                    <a href={site.booking_url} target="_blank" rel="noreferrer" class="btn btn-primary">
                        {"Book on Calendly →"}
                    </a>
                    <a href="#solutions" class="btn btn-ghost">{"Explore solutions"}</a>
                </div>
            </div>
            <style>
                {r#"
                .hero { background: radial-gradient(ellipse at top, rgba(34, 211, 238, 0.15), transparent 60%); }
                .hero-title { font-size: 3.25rem; line-height: 1.1; margin: 1.5rem 0 0; }
                .hero-sub { font-size: 1.125rem; line-height: 1.6; margin-top: 1rem; }
                .hero-cta-group { display: flex; gap: 0.75rem; justify-content: center; flex-wrap: wrap; margin-top: 2rem; }
                @media (max-width: 768px) {
                    .hero-title { font-size: 2.25rem; }
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(Trust)]
pub fn trust() -> Html {
    html! {
        <section aria-label="Trusted by" class="section trust">
            <div class="container">
                <div class="card trust-strip">
                    <p class="muted">{"Trusted by teams across industries (anonymized)"}</p>
                    <div class="trust-grid">
                        {
                            for TRUST_SECTORS.iter().map(|name| html! {
                                <div class="trust-cell" aria-label={format!("{} (anonymized)", name)}>{ *name }</div>
                            })
                        }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .trust { padding-top: 0; }
                .trust-strip { text-align: center; }
                .trust-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(120px, 1fr)); gap: 1rem; margin-top: 1rem; }
                .trust-cell {
                    display: flex;
                    height: 2.5rem;
                    align-items: center;
                    justify-content: center;
                    border: 1px dashed rgba(255, 255, 255, 0.1);
                    border-radius: 0.5rem;
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(Demos)]
pub fn demos() -> Html {
    html! {
        <section id="demos" class="section">
            <div class="container">
                <div class="section-head">
                    <h2>{"Demos"}</h2>
                    <p class="muted">{"Short clips that show real flows. (Placeholders for now)"}</p>
                </div>
                <div class="grid grid-3">
                    {
                        for DEMOS.iter().map(|demo| html! {
                            <a href={demo.href} class="card demo-card">
                                <div class="demo-thumb" aria-hidden="true">{"▶"}</div>
                                <h3>{ demo.title }</h3>
                                <p class="muted">{"Coming soon"}</p>
                            </a>
                        })
                    }
                </div>
            </div>
            <style>
                {r#"
                .demo-card { text-decoration: none; }
                .demo-thumb {
                    display: grid;
                    place-items: center;
                    aspect-ratio: 16 / 9;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    font-size: 2rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(Stats)]
pub fn stats() -> Html {
    html! {
        <section class="section">
            <div class="container grid grid-3">
                {
                    for STATS.iter().map(|stat| html! {
                        <div class="card stat">
                            <div class="stat-value">{ stat.value }</div>
                            <div class="muted">{ stat.label }</div>
                        </div>
                    })
                }
            </div>
            <style>
                {r#"
                .stat { text-align: center; }
                .stat-value { font-size: 1.875rem; font-weight: 800; }
                "#}
            </style>
        </section>
    }
}

#[function_component(WorkWithUs)]
pub fn work_with_us(props: &SiteProps) -> Html {
    let site = props.site;
    html! {
        <section id="work-with-us" class="section">
            <div class="container">
                <div class="section-head">
                    <h2>{ format!("Work with {}", site.brand) }</h2>
                    <p class="muted">{"Every business is different, and so is your automation plan."}</p>
                </div>
                <div class="grid grid-2">
                    <div class="card">
                        <ul class="check-list">
                            { for WORK_WITH_US_POINTS.iter().map(|point| html! { <li>{ *point }</li> }) }
                        </ul>
                        <a href={site.booking_url} target="_blank" rel="noreferrer" class="btn btn-primary">
                            {"Book a call"}
                        </a>
                        <p class="muted">
                            {"Prefer a written plan? Share a few details and we’ll tailor one for you."}
                        </p>
                    </div>
                    <LeadForm form_spec={&PLAN_FORM} site={site} />
                </div>
            </div>
        </section>
    }
}

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section id="process" class="section">
            <div class="container">
                <div class="section-head">
                    <h2>{"How we work"}</h2>
                    <p class="muted">{"A crisp path from brief to business value."}</p>
                </div>
                <ol class="grid grid-3 process-steps">
                    {
                        for PROCESS_STEPS.iter().enumerate().map(|(i, step)| html! {
                            <li class="card">
                                <div class="chip">{ format!("Step {}", i + 1) }</div>
                                <h3>{ step.title }</h3>
                                <p class="muted">{ step.description }</p>
                            </li>
                        })
                    }
                </ol>
            </div>
            <style>
                {r#"
                .process-steps { list-style: none; padding: 0; }
                "#}
            </style>
        </section>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="section">
            <div class="container">
                <div class="section-head">
                    <h2>{"What clients say"}</h2>
                    <p class="muted">{"Real outcomes, anonymized for privacy."}</p>
                </div>
                <div class="grid grid-2">
                    {
                        for TESTIMONIALS.iter().map(|t| html! {
                            <figure class="card">
                                <blockquote class="quote">{ format!("“{}”", t.quote) }</blockquote>
                                <figcaption class="muted">{ format!("— {}", t.name) }</figcaption>
                            </figure>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact(props: &SiteProps) -> Html {
    html! {
        <section id="contact" class="section">
            <div class="container">
                <div class="section-head">
                    <h2>{"Let’s talk"}</h2>
                    <p class="muted">{"Book a quick call or send a note. We respond within 1 business day."}</p>
                </div>
                <div class="contact-form">
                    <LeadForm form_spec={&CONTACT_FORM} site={props.site} />
                </div>
            </div>
            <style>
                {r#"
                .contact-form { max-width: 36rem; margin: 2.5rem auto 0; }
                .check-list { padding-left: 1.25rem; line-height: 1.8; }
                .quote { font-size: 1.125rem; line-height: 1.6; margin: 0; }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub site: &'static SiteConfig,
    pub links: Vec<NavLink>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Local::now().year();
    html! {
        <footer class="site-footer">
            <div class="container footer-content">
                <p class="muted">{ format!("© {} {}. All rights reserved.", year, props.site.brand) }</p>
                <nav class="footer-nav">
                    { for props.links.iter().map(|link| html! { <a href={link.href}>{ link.label }</a> }) }
                </nav>
            </div>
            <style>
                {r#"
                .site-footer { border-top: 1px solid rgba(255, 255, 255, 0.1); padding: 2.5rem 0; }
                .footer-content { display: flex; flex-wrap: wrap; gap: 1.5rem; align-items: center; justify-content: space-between; }
                .footer-nav { display: flex; gap: 1rem; font-size: 0.875rem; }
                "#}
            </style>
        </footer>
    }
}
