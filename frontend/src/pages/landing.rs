use std::collections::HashSet;
use std::str::FromStr;

use log::{error, info, warn};
use web_sys::{window, UrlSearchParams};
use yew::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::components::nav::Nav;
use crate::config::{NavLink, SITE};
use crate::content::FAQ_ENTRIES;
use crate::error::LayoutError;
use crate::pages::faq::Faq;
use crate::pages::sections::{
    Contact, Demos, Footer, Hero, Process, Stats, Testimonials, Trust, WorkWithUs,
};
use crate::pages::solutions::Solutions;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Header,
    Hero,
    Trust,
    Solutions,
    Demos,
    Stats,
    WorkWithUs,
    Process,
    Testimonials,
    Faq,
    Contact,
    Footer,
}

impl Section {
    /// In-page anchor the section is reachable under, if any.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Section::Solutions => Some("solutions"),
            Section::Demos => Some("demos"),
            Section::WorkWithUs => Some("work-with-us"),
            Section::Process => Some("process"),
            Section::Faq => Some("faq"),
            Section::Contact => Some("contact"),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutVariant {
    #[default]
    Full,
    Core,
}

const FULL_SECTIONS: &[Section] = &[
    Section::Header,
    Section::Hero,
    Section::Trust,
    Section::Solutions,
    Section::Demos,
    Section::Stats,
    Section::WorkWithUs,
    Section::Process,
    Section::Testimonials,
    Section::Faq,
    Section::Contact,
    Section::Footer,
];

const CORE_SECTIONS: &[Section] = &[
    Section::Header,
    Section::Hero,
    Section::Solutions,
    Section::Process,
    Section::Faq,
    Section::Contact,
    Section::Footer,
];

impl LayoutVariant {
    pub fn sections(self) -> &'static [Section] {
        match self {
            LayoutVariant::Full => FULL_SECTIONS,
            LayoutVariant::Core => CORE_SECTIONS,
        }
    }
}

impl FromStr for LayoutVariant {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "full" => Ok(LayoutVariant::Full),
            "core" => Ok(LayoutVariant::Core),
            other => Err(LayoutError::UnknownVariant(other.to_string())),
        }
    }
}

/// Ordered section list for one page variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLayout {
    sections: Vec<Section>,
}

impl PageLayout {
    pub fn new(sections: Vec<Section>) -> Result<Self, LayoutError> {
        match sections.first() {
            None => return Err(LayoutError::MissingHeader),
            Some(Section::Header) => {}
            Some(_) if sections.contains(&Section::Header) => return Err(LayoutError::HeaderNotFirst),
            Some(_) => return Err(LayoutError::MissingHeader),
        }
        match sections.last() {
            Some(Section::Footer) => {}
            Some(_) if sections.contains(&Section::Footer) => return Err(LayoutError::FooterNotLast),
            _ => return Err(LayoutError::MissingFooter),
        }

        let mut seen = HashSet::new();
        if let Some(dup) = sections.iter().find(|s| !seen.insert(**s)) {
            return Err(LayoutError::Duplicate(*dup));
        }
        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Drops links to anchors this layout does not render.
    pub fn visible_nav(&self, links: &[NavLink]) -> Vec<NavLink> {
        links
            .iter()
            .filter(|link| match link.anchor() {
                Some(anchor) => self.sections.iter().any(|s| s.anchor() == Some(anchor)),
                None => true,
            })
            .copied()
            .collect()
    }
}

impl TryFrom<LayoutVariant> for PageLayout {
    type Error = LayoutError;

    fn try_from(variant: LayoutVariant) -> Result<Self, Self::Error> {
        Self::new(variant.sections().to_vec())
    }
}

fn requested_variant() -> LayoutVariant {
    let requested = window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("layout"));

    match requested {
        Some(value) => value.parse().unwrap_or_else(|err: LayoutError| {
            warn!("{}, falling back to full layout", err);
            LayoutVariant::Full
        }),
        None => LayoutVariant::default(),
    }
}

fn requested_layout() -> Option<PageLayout> {
    let variant = requested_variant();
    match PageLayout::try_from(variant) {
        Ok(layout) => Some(layout),
        Err(err) => {
            error!("{:?} layout is invalid: {}", variant, err);
            None
        }
    }
}

fn render_section(section: Section, layout: &PageLayout) -> Html {
    match section {
        Section::Header => html! { <Nav site={&SITE} links={layout.visible_nav(SITE.nav)} /> },
        Section::Hero => html! { <Hero site={&SITE} /> },
        Section::Trust => html! { <Trust /> },
        Section::Solutions => html! { <Solutions site={&SITE} /> },
        Section::Demos => html! { <Demos /> },
        Section::Stats => html! { <Stats /> },
        Section::WorkWithUs => html! { <WorkWithUs site={&SITE} /> },
        Section::Process => html! { <Process /> },
        Section::Testimonials => html! { <Testimonials /> },
        Section::Faq => html! { <Faq entries={FAQ_ENTRIES} /> },
        Section::Contact => html! { <Contact site={&SITE} /> },
        Section::Footer => html! { <Footer site={&SITE} links={layout.visible_nav(SITE.footer_nav)} /> },
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let layout = use_memo(|_| requested_layout(), ());

    {
        let sections = (*layout).as_ref().map_or(0, |l| l.sections().len());
        use_effect_with_deps(
            move |_| {
                info!("composed landing page with {} sections", sections);
                || ()
            },
            (),
        );
    }

    let body = match &*layout {
        Some(layout) => html! {
            <>{ for layout.sections().iter().map(|section| render_section(*section, layout)) }</>
        },
        None => html! {},
    };

    html! {
        <div class="landing-page">
            { body }
            <ChatWidget />
            <style>{ STYLES }</style>
        </div>
    }
}

const STYLES: &str = r#"
:root {
    --base-950: #05070d;
    --brand-400: #22d3ee;
    --muted: rgba(255, 255, 255, 0.65);
}
body {
    margin: 0;
    background: var(--base-950);
    color: #fff;
    font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
}
a { color: inherit; }
.container { max-width: 1120px; margin: 0 auto; padding: 0 1.5rem; }
.section { padding: 5rem 0; }
.section-head { max-width: 48rem; margin: 0 auto; text-align: center; }
.section-head h2 { font-size: 2.25rem; margin: 0; }
.muted { color: var(--muted); }
.card {
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(255, 255, 255, 0.05);
    border-radius: 1rem;
    padding: 1.5rem;
}
.grid { display: grid; gap: 1.5rem; margin-top: 2.5rem; }
.grid-2 { grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); }
.grid-3 { grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }
.chip {
    display: inline-block;
    border: 1px solid rgba(255, 255, 255, 0.15);
    border-radius: 999px;
    padding: 0.25rem 0.75rem;
    font-size: 0.75rem;
}
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    border-radius: 0.75rem;
    padding: 0.6rem 1.1rem;
    font-weight: 600;
    text-decoration: none;
    cursor: pointer;
    border: 1px solid transparent;
}
.btn-primary { background: #fff; color: var(--base-950); }
.btn-ghost { background: transparent; color: #fff; border-color: rgba(255, 255, 255, 0.2); }

.top-nav {
    position: sticky;
    top: 0;
    z-index: 40;
    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(5, 7, 13, 0.7);
    backdrop-filter: blur(8px);
}
.nav-content { display: flex; height: 4rem; align-items: center; justify-content: space-between; }
.nav-logo { display: flex; align-items: center; gap: 0.75rem; text-decoration: none; font-weight: 600; }
.logo { width: 2rem; height: 2rem; }
.nav-desktop { display: flex; align-items: center; gap: 1.5rem; font-size: 0.9rem; }
.nav-link[aria-current] { color: var(--brand-400); }
.nav-mobile { display: none; position: relative; }
.mobile-menu {
    position: absolute;
    right: 0;
    margin-top: 0.5rem;
    width: 16rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 0.75rem;
    background: var(--base-950);
    padding: 0.5rem;
}
.mobile-link { display: block; padding: 0.5rem 0.75rem; border-radius: 0.5rem; text-decoration: none; }
.mobile-link:hover, .mobile-link[aria-current] { background: rgba(255, 255, 255, 0.1); }
.mobile-cta {
    display: block;
    margin-top: 0.25rem;
    padding: 0.5rem 0.75rem;
    border-radius: 0.5rem;
    text-align: center;
    background: #fff;
    color: var(--base-950);
    font-weight: 600;
    text-decoration: none;
}

.disclosure-summary {
    display: flex;
    width: 100%;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    background: none;
    border: none;
    color: inherit;
    font: inherit;
    text-align: left;
    cursor: pointer;
    padding: 0;
}
.disclosure-chevron { width: 1.25rem; height: 1.25rem; flex-shrink: 0; transition: transform 0.2s ease; }
.disclosure.open .disclosure-chevron { transform: rotate(180deg); }
.disclosure-body { display: none; }
.disclosure.open .disclosure-body { display: block; }

.field-row { display: grid; gap: 1rem; margin-bottom: 1rem; }
.field-row-split { grid-template-columns: 1fr 1fr; }
.field-label { display: block; font-size: 0.875rem; font-weight: 500; }
.field-input {
    display: block;
    width: 100%;
    box-sizing: border-box;
    margin-top: 0.5rem;
    border-radius: 0.75rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(255, 255, 255, 0.05);
    color: #fff;
    padding: 0.6rem 0.8rem;
    font: inherit;
}
.form-actions { display: flex; gap: 0.75rem; flex-wrap: wrap; align-items: center; }
.notice { margin: 1rem 0 0; border-radius: 0.75rem; padding: 0.75rem; font-size: 0.875rem; }
.notice-success { border: 1px solid rgba(255, 255, 255, 0.1); background: rgba(255, 255, 255, 0.05); }
.notice-error { border: 1px solid rgba(248, 113, 113, 0.4); background: rgba(248, 113, 113, 0.1); }

@media (max-width: 768px) {
    .nav-desktop { display: none; }
    .nav-mobile { display: block; }
    .field-row-split { grid-template-columns: 1fr; }
    .section { padding: 3.5rem 0; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_variants_are_valid_layouts() {
        for variant in [LayoutVariant::Full, LayoutVariant::Core] {
            let layout = PageLayout::try_from(variant).unwrap();
            assert_eq!(layout.sections(), variant.sections());
        }
    }

    #[test]
    fn core_variant_keeps_the_fixed_order() {
        assert_eq!(
            LayoutVariant::Core.sections(),
            &[
                Section::Header,
                Section::Hero,
                Section::Solutions,
                Section::Process,
                Section::Faq,
                Section::Contact,
                Section::Footer,
            ]
        );
    }

    #[test]
    fn full_variant_adds_optional_sections() {
        let full = LayoutVariant::Full.sections();
        for optional in [Section::Demos, Section::Stats, Section::Testimonials] {
            assert!(full.contains(&optional));
            assert!(!LayoutVariant::Core.sections().contains(&optional));
        }
    }

    #[test]
    fn variant_parsing() {
        assert_eq!("core".parse::<LayoutVariant>(), Ok(LayoutVariant::Core));
        assert_eq!(" Full ".parse::<LayoutVariant>(), Ok(LayoutVariant::Full));
        assert_eq!("".parse::<LayoutVariant>(), Ok(LayoutVariant::Full));
        assert_eq!(
            "minimal".parse::<LayoutVariant>(),
            Err(LayoutError::UnknownVariant("minimal".into()))
        );
    }

    #[test]
    fn invalid_layouts_are_rejected() {
        let (header, hero, faq, footer) = (Section::Header, Section::Hero, Section::Faq, Section::Footer);
        assert_eq!(PageLayout::new(vec![]), Err(LayoutError::MissingHeader));
        assert_eq!(PageLayout::new(vec![hero, footer]), Err(LayoutError::MissingHeader));
        assert_eq!(
            PageLayout::new(vec![hero, header, footer]),
            Err(LayoutError::HeaderNotFirst)
        );
        assert_eq!(PageLayout::new(vec![header, hero]), Err(LayoutError::MissingFooter));
        assert_eq!(
            PageLayout::new(vec![header, footer, hero]),
            Err(LayoutError::FooterNotLast)
        );
        assert_eq!(
            PageLayout::new(vec![header, faq, hero, faq, footer]),
            Err(LayoutError::Duplicate(Section::Faq))
        );
    }

    #[test]
    fn nav_hides_links_to_missing_sections() {
        let core = PageLayout::try_from(LayoutVariant::Core).unwrap();
        let labels: Vec<&str> = core.visible_nav(SITE.nav).iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Solutions", "Process", "FAQ", "Contact"]);

        let full = PageLayout::try_from(LayoutVariant::Full).unwrap();
        assert_eq!(full.visible_nav(SITE.nav).len(), SITE.nav.len());
    }

    #[test]
    fn external_links_always_survive() {
        let layout = PageLayout::try_from(LayoutVariant::Core).unwrap();
        let links = [
            NavLink { href: "https://example.com", label: "Elsewhere" },
            NavLink { href: "#demos", label: "Demos" },
        ];
        let visible = layout.visible_nav(&links);
        assert_eq!(visible, vec![links[0]]);
    }
}
