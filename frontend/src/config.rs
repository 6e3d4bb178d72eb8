use log::Level;

/// Delay before a submission acknowledgement hides itself again.
pub const NOTICE_DELAY_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

impl NavLink {
    /// Fragment without the leading `#`, if the link points inside the page.
    pub fn anchor(&self) -> Option<&'static str> {
        self.href.strip_prefix('#')
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub sub: &'static str,
    pub booking_url: &'static str,
    pub cta_label: &'static str,
    pub nav: &'static [NavLink],
    pub footer_nav: &'static [NavLink],
}

pub static SITE: SiteConfig = SiteConfig {
    brand: "Ederox",
    tagline: "AI automation for every business.",
    sub: "We design, build, and operate assistants, agents, and end-to-end automations across sales, operations, support, and digital presence.",
    booking_url: "https://calendly.com/PLACEHOLDER/intro",
    cta_label: "Book a consult",
    nav: &[
        NavLink { href: "#solutions", label: "Solutions" },
        NavLink { href: "#work-with-us", label: "Work with us" },
        NavLink { href: "#process", label: "Process" },
        NavLink { href: "#faq", label: "FAQ" },
        NavLink { href: "#contact", label: "Contact" },
    ],
    footer_nav: &[
        NavLink { href: "#work-with-us", label: "Work with us" },
        NavLink { href: "#process", label: "Process" },
        NavLink { href: "#contact", label: "Contact" },
    ],
};

/// Chat widget settings, read once when the loader runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub project_id: &'static str,
    pub runtime_url: &'static str,
    pub version_id: &'static str,
    pub voice_url: &'static str,
    pub bundle_url: &'static str,
}

const PROJECT_ID: &str = "PLACEHOLDER_PROJECT_ID";
const RUNTIME_URL: &str = "https://general-runtime.voiceflow.com";
const VOICE_URL: &str = "https://runtime-api.voiceflow.com";
const BUNDLE_URL: &str = "https://cdn.voiceflow.com/widget-next/bundle.mjs";

#[cfg(debug_assertions)]
pub fn widget_config() -> WidgetConfig {
    WidgetConfig {
        project_id: PROJECT_ID,
        runtime_url: RUNTIME_URL,
        version_id: "development",
        voice_url: VOICE_URL,
        bundle_url: BUNDLE_URL,
    }
}

#[cfg(not(debug_assertions))]
pub fn widget_config() -> WidgetConfig {
    WidgetConfig {
        project_id: PROJECT_ID,
        runtime_url: RUNTIME_URL,
        version_id: "production",
        voice_url: VOICE_URL,
        bundle_url: BUNDLE_URL,
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
