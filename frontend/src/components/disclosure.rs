use std::rc::Rc;

use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

/// Open/closed flag of one expandable block. Every instance owns its own
/// flag; nothing is shared between panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

pub enum DisclosureAction {
    Toggle,
}

impl Reducible for Disclosure {
    type Action = DisclosureAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            DisclosureAction::Toggle => next.toggle(),
        }
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct UseDisclosureHandle {
    state: UseReducerHandle<Disclosure>,
    pub ontoggle: Callback<MouseEvent>,
}

impl UseDisclosureHandle {
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn aria_expanded(&self) -> &'static str {
        self.state.aria_expanded()
    }
}

#[hook]
pub fn use_disclosure() -> UseDisclosureHandle {
    let state = use_reducer(Disclosure::default);

    let ontoggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(DisclosureAction::Toggle);
        })
    };

    UseDisclosureHandle { state, ontoggle }
}

#[derive(Properties, PartialEq)]
pub struct DisclosurePanelProps {
    pub id: AttrValue,
    pub summary: Html,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DisclosurePanel)]
pub fn disclosure_panel(props: &DisclosurePanelProps) -> Html {
    let panel = use_disclosure();
    let body_id = format!("{}-body", props.id);

    {
        let id = props.id.clone();
        let open = panel.is_open();
        use_effect_with_deps(
            move |open| {
                debug!("disclosure {} open={}", id, open);
                || ()
            },
            open,
        );
    }

    html! {
        <div id={props.id.clone()} class={classes!("disclosure", props.class.clone(), panel.is_open().then_some("open"))}>
            <button
                type="button"
                class="disclosure-summary"
                aria-expanded={panel.aria_expanded()}
                aria-controls={body_id.clone()}
                onclick={panel.ontoggle.clone()}
            >
                <div class="disclosure-summary-text">{ props.summary.clone() }</div>
                <svg class="disclosure-chevron" viewBox="0 0 24 24" fill="none" aria-hidden="true">
                    <path d="M6 9l6 6 6-6" stroke="currentColor" stroke-width="2" stroke-linecap="round" />
                </svg>
            </button>
            <div id={body_id} class="disclosure-body">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(state: Disclosure, action: DisclosureAction) -> Disclosure {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn starts_closed() {
        let panel = Disclosure::default();
        assert!(!panel.is_open());
        assert_eq!(panel.aria_expanded(), "false");
    }

    #[test]
    fn toggling_twice_restores_state() {
        for start_open in [false, true] {
            let mut panel = Disclosure::default();
            if start_open {
                panel.toggle();
            }
            let before = panel;
            panel.toggle();
            assert_ne!(panel, before);
            panel.toggle();
            assert_eq!(panel, before);
        }
    }

    #[test]
    fn reducer_toggle_flips_flag() {
        let opened = dispatch(Disclosure::default(), DisclosureAction::Toggle);
        assert!(opened.is_open());
        assert_eq!(opened.aria_expanded(), "true");
        let closed = dispatch(opened, DisclosureAction::Toggle);
        assert!(!closed.is_open());
    }

    #[test]
    fn panels_do_not_affect_each_other() {
        let mut panels = vec![Disclosure::default(); 4];

        panels[0].toggle();
        panels[1].toggle();

        assert!(panels[0].is_open());
        assert!(panels[1].is_open());
        assert!(!panels[2].is_open());
        assert!(!panels[3].is_open());

        panels[0].toggle();
        assert!(!panels[0].is_open());
        assert!(panels[1].is_open());
    }
}
