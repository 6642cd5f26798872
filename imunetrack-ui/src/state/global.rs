//! Global Application State
//!
//! Reactive state shared by every page, on top of the library's
//! [`AppContext`].

use std::sync::Arc;

use imunetrack::models::SessionUser;
use imunetrack::route::{Redirect, Route};
use imunetrack::session::Preferences;
use imunetrack::{AppContext, AppError};
use leptos::*;

use super::notice::Notice;
use crate::storage::{load_config, LocalStorage};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Session, client and repositories
    pub ctx: AppContext,
    /// Logged-in user, mirrored from the session
    pub user: RwSignal<Option<SessionUser>>,
    /// Theme and font size
    pub preferences: RwSignal<Preferences>,
    /// Pending navigation, performed by the router
    pub redirect: RwSignal<Option<Route>>,
    /// Settings modal visibility
    pub settings_open: RwSignal<bool>,
    /// Toast currently shown
    pub notice: RwSignal<Option<Notice>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState::new(AppContext::new(load_config(), Arc::new(LocalStorage)));
    apply_preferences(state.preferences.get_untracked());
    provide_context(state);
}

/// Classes for the document root: theme first, then font size
pub fn root_class(preferences: Preferences, prefers_dark: bool) -> String {
    let theme = if preferences.theme.is_dark(prefers_dark) {
        "theme-dark"
    } else {
        "theme-light"
    };
    format!("{} {}", theme, preferences.font_size.css_class())
}

/// Set the theme and font classes on the document root
pub fn apply_preferences(preferences: Preferences) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);

    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        root.set_class_name(&root_class(preferences, prefers_dark));
    }
}

impl GlobalState {
    /// Signals seeded from what `ctx` has stored
    pub fn new(ctx: AppContext) -> Self {
        let user = match ctx.session().current_user() {
            Ok(user) => user,
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to read session: {}", e).into());
                None
            }
        };
        let preferences = ctx.preferences();

        Self {
            ctx,
            user: create_rw_signal(user),
            preferences: create_rw_signal(preferences),
            redirect: create_rw_signal(None),
            settings_open: create_rw_signal(false),
            notice: create_rw_signal(None),
        }
    }

    /// Navigate now or after the redirect's delay
    pub fn navigate(&self, redirect: Redirect) {
        let target = self.redirect;
        if redirect.delay.is_zero() {
            target.set(Some(redirect.route));
        } else {
            let route = redirect.route;
            gloo_timers::callback::Timeout::new(redirect.delay.as_millis() as u32, move || {
                target.set(Some(route));
            })
            .forget();
        }
    }

    /// Reload the user from the session after it changed
    pub fn sync_user(&self) {
        self.user.set(self.ctx.session().current_user().ok().flatten());
    }

    /// Show an error; errors that need a new login also send the user there
    pub fn report(&self, err: &AppError) {
        web_sys::console::error_1(&err.to_string().into());
        self.notify(Notice::from_error(err));
        if let Some(redirect) = err.redirect() {
            self.sync_user();
            self.navigate(redirect);
        }
    }

    /// Show `notice` until its lifetime ends or another notice replaces it
    pub fn notify(&self, notice: Notice) {
        let id = notice.id;
        let lifetime = notice.kind.lifetime();
        let signal = self.notice;
        signal.set(Some(notice));

        gloo_timers::callback::Timeout::new(lifetime.as_millis() as u32, move || {
            if signal.with_untracked(|n| n.as_ref().map(|n| n.id)) == Some(id) {
                signal.set(None);
            }
        })
        .forget();
    }

    pub fn show_success(&self, message: &str) {
        self.notify(Notice::success(message));
    }

    pub fn dismiss(&self) {
        self.notice.set(None);
    }

    pub fn logout(&self) {
        if let Err(e) = self.ctx.logout() {
            self.report(&e);
        }
        self.user.set(None);
        self.settings_open.set(false);
        self.navigate(Redirect::now(Route::Home));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imunetrack::session::{FontSize, Theme};

    #[test]
    fn test_root_class() {
        let prefs = Preferences {
            theme: Theme::Dark,
            font_size: FontSize::Lg,
        };
        let class = root_class(prefs, false);
        assert!(class.starts_with("theme-dark "));
        assert!(class.ends_with(&FontSize::Lg.css_class()));

        let auto = Preferences {
            theme: Theme::Auto,
            ..Default::default()
        };
        assert!(root_class(auto, true).starts_with("theme-dark"));
        assert!(root_class(auto, false).starts_with("theme-light"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::time::Duration;

    use imunetrack::models::SessionUser;
    use imunetrack::session::{FontSize, Theme};
    use imunetrack::{ApiError, Config, MemoryStorage};
    use wasm_bindgen_test::*;

    use super::*;
    use crate::state::notice::NoticeKind;

    wasm_bindgen_test_configure!(run_in_browser);

    fn memory_state(user: Option<SessionUser>) -> GlobalState {
        let ctx = AppContext::new(Config::default(), Arc::new(MemoryStorage::new()));
        if let Some(user) = user {
            ctx.session().save_user(&user).unwrap();
        }
        GlobalState::new(ctx)
    }

    fn ana() -> SessionUser {
        SessionUser {
            id: 1,
            name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            is_admin: false,
            token: Some("token-1".to_string()),
        }
    }

    #[wasm_bindgen_test]
    fn expired_session_sends_user_to_login() {
        let runtime = create_runtime();
        let state = memory_state(Some(ana()));
        assert!(state.user.get_untracked().is_some());

        state.ctx.session().clear().unwrap();
        state.report(&AppError::from(ApiError::SessionExpired));

        assert_eq!(state.redirect.get_untracked(), Some(Route::Login));
        assert_eq!(state.user.get_untracked(), None);
        assert_eq!(
            state.notice.get_untracked().map(|n| n.kind),
            Some(NoticeKind::SessionExpired)
        );
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn ordinary_errors_stay_on_the_page() {
        let runtime = create_runtime();
        let state = memory_state(Some(ana()));

        state.report(&AppError::Forbidden);

        assert_eq!(state.redirect.get_untracked(), None);
        assert!(state.user.get_untracked().is_some());
        assert_eq!(state.notice.get_untracked().map(|n| n.kind), Some(NoticeKind::Error));
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn navigate_waits_for_the_delay() {
        let runtime = create_runtime();
        let state = memory_state(None);

        state.navigate(Redirect::after(Route::Dashboard, Duration::from_secs(1)));
        assert_eq!(state.redirect.get_untracked(), None);

        state.navigate(Redirect::now(Route::Home));
        assert_eq!(state.redirect.get_untracked(), Some(Route::Home));
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn newer_notice_replaces_older() {
        let runtime = create_runtime();
        let state = memory_state(None);

        state.show_success("Profile saved");
        state.notify(Notice::warning("Dose scheduled, but the dashboard could not be refreshed"));

        let shown = state.notice.get_untracked().unwrap();
        assert_eq!(shown.kind, NoticeKind::Warning);
        state.dismiss();
        assert_eq!(state.notice.get_untracked(), None);
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn preferences_applied_to_document_root() {
        let prefs = Preferences {
            theme: Theme::Dark,
            font_size: FontSize::Sm,
        };
        apply_preferences(prefs);

        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .unwrap();
        assert_eq!(root.class_name(), root_class(prefs, false));
    }
}
