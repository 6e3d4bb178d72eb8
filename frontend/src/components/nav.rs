use std::rc::Rc;

use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::disclosure::Disclosure;
use crate::components::logo::Logo;
use crate::config::{NavLink, SiteConfig};

/// Mobile menu state. Following a link marks it as the current location
/// but leaves the menu as it was; only the menu button opens or closes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    disclosure: Disclosure,
    active: Option<&'static str>,
}

pub enum NavAction {
    Toggle,
    Follow(&'static str),
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.disclosure.is_open()
    }

    pub fn active(&self) -> Option<&'static str> {
        self.active
    }

    pub fn apply(mut self, action: NavAction) -> Self {
        match action {
            NavAction::Toggle => self.disclosure.toggle(),
            NavAction::Follow(href) => self.active = Some(href),
        }
        self
    }
}

impl Reducible for NavMenu {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).apply(action))
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub site: &'static SiteConfig,
    pub links: Vec<NavLink>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu = use_reducer(NavMenu::default);

    let toggle_menu = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(NavAction::Toggle);
        })
    };

    let link = |link: &NavLink, class: &'static str| {
        let href = link.href;
        let onclick = {
            let dispatcher = menu.dispatcher();
            Callback::from(move |_: MouseEvent| {
                debug!("nav link followed: {}", href);
                dispatcher.dispatch(NavAction::Follow(href));
            })
        };
        let current = (menu.active() == Some(href)).then_some("location");
        html! {
            <a href={href} class={class} aria-current={current} {onclick}>{ link.label }</a>
        }
    };

    html! {
        <header class="top-nav">
            <div class="container nav-content">
                <a href="#" class="nav-logo">
                    <Logo class="logo" />
                    <span class="brand">{ props.site.brand }</span>
                </a>

                <nav aria-label="Main" class="nav-desktop">
                    { for props.links.iter().map(|l| link(l, "nav-link")) }
                    <a href={props.site.booking_url} target="_blank" rel="noreferrer" class="btn btn-primary">
                        { props.site.cta_label }
                    </a>
                </nav>

                <div class={classes!("nav-mobile", menu.is_open().then_some("mobile-menu-open"))}>
                    <button
                        type="button"
                        class="btn btn-ghost burger-menu"
                        aria-expanded={if menu.is_open() { "true" } else { "false" }}
                        aria-controls="mobile-menu"
                        onclick={toggle_menu}
                    >
                        {"Menu"}
                    </button>
                    {
                        if menu.is_open() {
                            html! {
                                <div id="mobile-menu" class="mobile-menu">
                                    { for props.links.iter().map(|l| link(l, "mobile-link")) }
                                    <a href={props.site.booking_url} target="_blank" rel="noreferrer" class="mobile-cta">
                                        { props.site.cta_label }
                                    </a>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_starts_closed_without_active_link() {
        let menu = NavMenu::default();
        assert!(!menu.is_open());
        assert_eq!(menu.active(), None);
    }

    #[test]
    fn following_a_link_leaves_menu_open() {
        let menu = NavMenu::default()
            .apply(NavAction::Toggle)
            .apply(NavAction::Follow("#faq"));
        assert!(menu.is_open());
        assert_eq!(menu.active(), Some("#faq"));

        let menu = menu.apply(NavAction::Follow("#contact"));
        assert!(menu.is_open());
        assert_eq!(menu.active(), Some("#contact"));
    }

    #[test]
    fn only_the_toggle_closes_the_menu() {
        let menu = NavMenu::default()
            .apply(NavAction::Toggle)
            .apply(NavAction::Follow("#solutions"))
            .apply(NavAction::Toggle);
        assert!(!menu.is_open());
        assert_eq!(menu.active(), Some("#solutions"));
    }

    #[test]
    fn following_while_closed_does_not_open() {
        let menu = NavMenu::default().apply(NavAction::Follow("#process"));
        assert!(!menu.is_open());
    }
}
