//! Application root: creation, single mount, and the session-gated outlet.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::cell::Cell;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::Router;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::AppConfig;
use crate::error::BootError;
use crate::pages::{chat::ChatPage, login::LoginPage};
use crate::plugins::{self, Capabilities, Capability};
use crate::router::{NavigationController, NavigationIntent, RouteTable, Settled, ViewId};
use crate::state::session::SessionState;

/// Controller bound to the live session signal.
pub type AppController = NavigationController<RwSignal<SessionState>>;

thread_local! {
    static INSTANCE_LIVE: Cell<bool> = const { Cell::new(false) };
}

/// Marks the one live application instance; released on drop.
struct InstanceSlot(());

impl InstanceSlot {
    fn claim() -> Result<Self, BootError> {
        INSTANCE_LIVE.with(|live| {
            if live.get() {
                return Err(BootError::AlreadyCreated);
            }
            live.set(true);
            Ok(Self(()))
        })
    }

    /// Keep the slot claimed for the rest of the page lifetime.
    #[cfg(feature = "csr")]
    fn persist(self) {
        std::mem::forget(self);
    }
}

impl Drop for InstanceSlot {
    fn drop(&mut self) {
        INSTANCE_LIVE.with(|live| live.set(false));
    }
}

pub struct ApplicationRoot;

impl ApplicationRoot {
    /// Assemble the route table and navigation controller.
    ///
    /// # Errors
    ///
    /// - [`BootError::Config`] when a capability needed by the root or one of
    ///   the routed views is missing from `capabilities`.
    /// - [`BootError::AlreadyCreated`] while another instance is alive.
    pub fn create(config: AppConfig, capabilities: Capabilities) -> Result<ApplicationInstance, BootError> {
        capabilities.require_all(&[Capability::Router], "application root")?;
        let table = RouteTable::standard()?;
        for route in table.routes() {
            capabilities.require_all(route.view.required_capabilities(), route.view.name())?;
        }
        let slot = InstanceSlot::claim()?;

        let session = RwSignal::new(SessionState::Unauthenticated);
        log::info!(
            "application created with {} routes; capabilities: {}",
            table.routes().len(),
            capability_list(&capabilities)
        );
        let controller = NavigationController::new(table, session);
        Ok(ApplicationInstance { config, session, controller, _slot: slot })
    }
}

/// Registered capabilities as `http, widgets, router`.
fn capability_list(capabilities: &Capabilities) -> String {
    capabilities.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", ")
}

pub struct ApplicationInstance {
    config: AppConfig,
    session: RwSignal<SessionState>,
    controller: AppController,
    _slot: InstanceSlot,
}

impl ApplicationInstance {
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> RwSignal<SessionState> {
        self.session
    }

    pub fn controller(&self) -> &AppController {
        &self.controller
    }

    /// Render into the element matching `selector`. Consumes the instance, so
    /// it can be mounted only once.
    ///
    /// # Errors
    ///
    /// Returns [`BootError::MountTargetMissing`] when no element matches.
    pub fn mount(self, selector: &str) -> Result<(), BootError> {
        let missing = || BootError::MountTargetMissing { selector: selector.to_owned() };
        if selector.trim().is_empty() {
            return Err(missing());
        }

        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let host = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(selector).ok().flatten())
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
                .ok_or_else(missing)?;

            let Self { config, session, controller, _slot: slot } = self;
            let handle = leptos::mount::mount_to(host, move || {
                let controller = StoredValue::new(controller);
                view! { <App config=config session=session controller=controller/> }
            });
            handle.forget();
            slot.persist();
            log::info!("application mounted into {selector}");
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            // No host document outside the browser.
            drop(self);
            Err(missing())
        }
    }
}

/// Run the startup sequence: logging, plugins, create, mount.
///
/// # Errors
///
/// Any [`BootError`]; all of them are fatal.
pub fn boot(config: AppConfig) -> Result<(), BootError> {
    crate::logging::init(config.level_filter()?);
    let capabilities = plugins::standard()?;
    let selector = config.mount_selector.clone();
    ApplicationRoot::create(config, capabilities)?.mount(&selector)
}

/// Root application component.
///
/// Provides the session and configuration contexts and wires browser
/// location into the navigation controller.
#[component]
pub fn App(config: AppConfig, session: RwSignal<SessionState>, controller: StoredValue<AppController>) -> impl IntoView {
    provide_meta_context();
    provide_context(session);
    let title = config.title.clone();
    provide_context(config);

    view! {
        <Title text=title/>
        <Router>
            <GatedOutlet session=session controller=controller/>
        </Router>
    }
}

fn settle_path(controller: StoredValue<AppController>, path: &str) -> Option<Settled> {
    controller.try_update_value(|c| c.settle(&NavigationIntent::new(path)))
}

fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Renders exactly the view the controller settled on for the current location.
#[component]
fn GatedOutlet(session: RwSignal<SessionState>, controller: StoredValue<AppController>) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    let initial = settle_path(controller, &location.pathname.get_untracked()).map_or(ViewId::Entry, |s| s.view);
    let rendered = RwSignal::new(initial);
    let show = move |view: ViewId| {
        if rendered.get_untracked() != view {
            rendered.set(view);
        }
    };

    // Location changes: initial load, link activation, back/forward, redirects.
    let navigate_location = navigate.clone();
    Effect::new(move || {
        let path = location.pathname.get();
        let Some(settled) = settle_path(controller, &path) else {
            return;
        };
        if settled.was_redirected() {
            navigate_location(&settled.path, replace_options());
        }
        show(settled.view);
    });

    // Login/logout notifications flip the gate and move the location.
    Effect::new(move || {
        session.track();
        if let Some(settled) = controller.try_update_value(AppController::session_changed).flatten() {
            navigate(&settled.path, replace_options());
            show(settled.view);
        }
    });

    move || match rendered.get() {
        ViewId::Entry => view! { <LoginPage/> }.into_any(),
        ViewId::Interactive => view! { <ChatPage/> }.into_any(),
    }
}
