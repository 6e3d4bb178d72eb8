use std::sync::atomic::{AtomicU8, Ordering};

use log::{debug, error, info, warn};
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, HtmlScriptElement};
use yew::prelude::*;
use yew_hooks::use_mount;

use crate::config::{widget_config, WidgetConfig};
use crate::error::WidgetLoadError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed,
}

const IDLE: u8 = 0;
const LOADING: u8 = 1;
const READY: u8 = 2;
const FAILED: u8 = 3;

/// Page-lifetime "widget requested" flag. Claimed before the script is
/// requested, never after, and never released: a failed load is not retried.
pub struct LoadGuard(AtomicU8);

impl LoadGuard {
    pub const fn new() -> Self {
        Self(AtomicU8::new(IDLE))
    }

    pub fn state(&self) -> LoadState {
        match self.0.load(Ordering::Acquire) {
            IDLE => LoadState::Idle,
            LOADING => LoadState::Loading,
            READY => LoadState::Ready,
            _ => LoadState::Failed,
        }
    }

    fn try_claim(&self) -> bool {
        self.0
            .compare_exchange(IDLE, LOADING, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    fn settle(&self, ok: bool) {
        self.0.store(if ok { READY } else { FAILED }, Ordering::Release);
    }
}

impl Default for LoadGuard {
    fn default() -> Self {
        Self::new()
    }
}

pub static CHAT_WIDGET: LoadGuard = LoadGuard::new();

#[derive(Debug, Serialize)]
struct Verify<'a> {
    #[serde(rename = "projectID")]
    project_id: &'a str,
}

#[derive(Debug, Serialize)]
struct Voice<'a> {
    url: &'a str,
}

/// Argument of the vendor's `chat.load` entry point.
#[derive(Debug, Serialize)]
pub struct ChatLoadConfig<'a> {
    verify: Verify<'a>,
    url: &'a str,
    #[serde(rename = "versionID")]
    version_id: &'a str,
    voice: Voice<'a>,
}

impl<'a> From<&'a WidgetConfig> for ChatLoadConfig<'a> {
    fn from(config: &'a WidgetConfig) -> Self {
        Self {
            verify: Verify {
                project_id: config.project_id,
            },
            url: config.runtime_url,
            version_id: config.version_id,
            voice: Voice {
                url: config.voice_url,
            },
        }
    }
}

/// The document side of the loader.
pub trait ScriptHost: Clone + 'static {
    fn has_script(&self, src: &str) -> Result<bool, WidgetLoadError>;

    fn inject(
        &self,
        src: &str,
        on_load: Box<dyn FnOnce()>,
        on_error: Box<dyn FnOnce()>,
    ) -> Result<(), WidgetLoadError>;

    fn boot(&self, config: &ChatLoadConfig<'_>) -> Result<(), WidgetLoadError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Injected,
    AlreadyRequested(LoadState),
    AlreadyPresent,
}

pub fn load_chat_widget<H: ScriptHost>(
    host: &H,
    guard: &'static LoadGuard,
    config: WidgetConfig,
) -> Result<LoadOutcome, WidgetLoadError> {
    if !guard.try_claim() {
        return Ok(LoadOutcome::AlreadyRequested(guard.state()));
    }

    match host.has_script(config.bundle_url) {
        Ok(true) => return Ok(LoadOutcome::AlreadyPresent),
        Ok(false) => {}
        Err(err) => {
            guard.settle(false);
            return Err(err);
        }
    }

    let on_load = {
        let host = host.clone();
        Box::new(move || match host.boot(&ChatLoadConfig::from(&config)) {
            Ok(()) => {
                guard.settle(true);
                info!("chat widget started ({})", config.version_id);
            }
            Err(err) => {
                guard.settle(false);
                error!("chat widget failed to start: {}", err);
            }
        })
    };
    let on_error = Box::new(move || {
        guard.settle(false);
        warn!(
            "{}",
            WidgetLoadError::Fetch {
                src: config.bundle_url.to_string()
            }
        );
    });

    if let Err(err) = host.inject(config.bundle_url, on_load, on_error) {
        guard.settle(false);
        return Err(err);
    }
    info!("requested chat widget bundle {}", config.bundle_url);
    Ok(LoadOutcome::Injected)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentHost;

fn document() -> Result<Document, WidgetLoadError> {
    window()
        .ok_or(WidgetLoadError::NoWindow)?
        .document()
        .ok_or(WidgetLoadError::NoDocument)
}

fn property(target: &JsValue, key: &str) -> Result<JsValue, WidgetLoadError> {
    let value = js_sys::Reflect::get(target, &JsValue::from_str(key))?;
    if value.is_undefined() || value.is_null() {
        return Err(WidgetLoadError::EntryPointMissing);
    }
    Ok(value)
}

impl ScriptHost for DocumentHost {
    fn has_script(&self, src: &str) -> Result<bool, WidgetLoadError> {
        let selector = format!("script[src=\"{}\"]", src);
        Ok(document()?.query_selector(&selector)?.is_some())
    }

    fn inject(
        &self,
        src: &str,
        on_load: Box<dyn FnOnce()>,
        on_error: Box<dyn FnOnce()>,
    ) -> Result<(), WidgetLoadError> {
        let document = document()?;
        let script: HtmlScriptElement = document
            .create_element("script")?
            .dyn_into()
            .map_err(|_| WidgetLoadError::Dom("created element is not a script".into()))?;
        script.set_type("text/javascript");
        script.set_async(true);
        script.set_src(src);

        let on_load = Closure::once(move || on_load());
        let on_error = Closure::once(move || on_error());
        script.set_onload(Some(on_load.as_ref().unchecked_ref()));
        script.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        // Both fire at most once for the lifetime of the page.
        on_load.forget();
        on_error.forget();

        let body = document
            .body()
            .ok_or_else(|| WidgetLoadError::Dom("document has no body".into()))?;
        body.append_child(&script)?;
        Ok(())
    }

    fn boot(&self, config: &ChatLoadConfig<'_>) -> Result<(), WidgetLoadError> {
        let window: JsValue = window().ok_or(WidgetLoadError::NoWindow)?.into();
        let chat = property(&property(&window, "voiceflow")?, "chat")?;
        let load: js_sys::Function = property(&chat, "load")?
            .dyn_into()
            .map_err(|_| WidgetLoadError::EntryPointMissing)?;
        let payload = serde_wasm_bindgen::to_value(config)
            .map_err(|e| WidgetLoadError::Config(e.to_string()))?;
        load.call1(&chat, &payload)?;
        Ok(())
    }
}

/// Renders nothing; requests the chat bundle once the page has mounted.
#[function_component(ChatWidget)]
pub fn chat_widget() -> Html {
    use_mount(|| match load_chat_widget(&DocumentHost, &CHAT_WIDGET, widget_config()) {
        Ok(outcome) => debug!("chat widget loader: {:?}", outcome),
        Err(err) => error!("chat widget unavailable: {}", err),
    });

    html! {}
}
