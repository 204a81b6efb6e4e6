use leptos::prelude::*;
use leptos_use::use_preferred_dark;
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The saved choice if there is one, otherwise whatever the system prefers.
    pub fn resolve(saved: Option<Theme>, prefers_dark: bool) -> Self {
        saved.unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
    }
}

/// Colour scheme shared by every component below [`super::App`].
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: Signal<Theme>,
    set_saved: WriteSignal<Option<Theme>>,
}

impl ThemeContext {
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    /// Class for the root element; tailwind's `dark:` variants key off it.
    pub fn class(&self) -> &'static str {
        match self.get() {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    /// Flips the theme and remembers the choice.
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_saved.set(Some(next));
    }
}

pub fn provide_theme() -> ThemeContext {
    #[cfg(feature = "hydrate")]
    let (saved, set_saved, _) = use_local_storage::<Option<Theme>, JsonSerdeWasmCodec>("theme");
    #[cfg(not(feature = "hydrate"))]
    let (saved, set_saved) = signal(None::<Theme>);

    let prefers_dark = use_preferred_dark();
    let ctx = ThemeContext {
        theme: Signal::derive(move || Theme::resolve(saved.get(), prefers_dark.get())),
        set_saved,
    };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
