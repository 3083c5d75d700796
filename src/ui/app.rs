/// Main page: extract links from a paste, open them, and manage the quick-open link

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use patternfly_yew::prelude::*;
use crate::browser::{open_in_new_tab, BrowserClient, LocalStorage};
use crate::config::AppConfig;
use crate::error::OpenerError;
use crate::fetch::{extract_from_input, resolve_quick_link};
use crate::links::unique_links;
use crate::storage::QuickLinkStore;
use crate::ui::components::{LinkList, SettingsPanel};

#[derive(Clone, PartialEq)]
enum AppState {
    Idle,
    Loading(String),
    Error(String),
}

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = use_state(|| AppState::Idle);
    let input = use_state(String::new);
    let links = use_state(Vec::<String>::new);
    let duplicates = use_state(|| 0usize);
    let notice = use_state(|| None::<String>);
    let saved_url = use_state(|| None::<String>);
    let settings_open = use_state(|| false);
    let settings_input = use_state(String::new);
    let settings_error = use_state(|| None::<String>);

    // Load the quick-open URL on mount
    {
        let saved_url = saved_url.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            match quick_link_store(&config).and_then(|store| store.load()) {
                Ok(url) => saved_url.set(url),
                Err(e) => log::warn!("Could not read quick-open URL: {}", e),
            }
            || ()
        });
    }

    let is_busy = matches!(*state, AppState::Loading(_));

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(el) = e.target_dyn_into::<HtmlInputElement>() {
                input.set(el.value());
            }
        })
    };

    // Submit handler: fetch, extract, show
    let on_submit = {
        let state = state.clone();
        let input = input.clone();
        let links = links.clone();
        let duplicates = duplicates.clone();
        let notice = notice.clone();
        let config = props.config.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if matches!(*state, AppState::Loading(_)) {
                return;
            }

            let state = state.clone();
            let links = links.clone();
            let duplicates = duplicates.clone();
            let config = config.clone();
            let target = (*input).clone();

            links.set(Vec::new());
            notice.set(None);
            state.set(AppState::Loading("Fetching...".to_string()));

            spawn_local(async move {
                match extract_from_input(&BrowserClient, &config, &target).await {
                    Ok(found) => {
                        let (unique, dropped) = unique_links(&found);
                        links.set(unique);
                        duplicates.set(dropped);
                        state.set(AppState::Idle);
                    }
                    Err(e) => {
                        log::error!("Extract failed for {:?}: {}", target, e);
                        state.set(AppState::Error(e.to_string()));
                    }
                }
            });
        })
    };

    let on_open_link = {
        let state = state.clone();
        Callback::from(move |link: String| {
            if let Err(e) = open_in_new_tab(&link) {
                state.set(AppState::Error(e.to_string()));
            }
        })
    };

    let on_open_all = {
        let state = state.clone();
        let links = links.clone();
        Callback::from(move |_| {
            if let Err(e) = links.iter().try_for_each(|link| open_in_new_tab(link)) {
                state.set(AppState::Error(e.to_string()));
            }
        })
    };

    // Quick open: fetch the saved paste and open its first link
    let on_quick_open = {
        let state = state.clone();
        let notice = notice.clone();
        let saved_url = saved_url.clone();
        let config = props.config.clone();

        Callback::from(move |_| {
            let Some(saved) = (*saved_url).clone() else {
                return;
            };
            if matches!(*state, AppState::Loading(_)) {
                return;
            }

            let state = state.clone();
            let notice = notice.clone();
            let config = config.clone();

            notice.set(None);
            state.set(AppState::Loading("Opening quick link...".to_string()));

            spawn_local(async move {
                let opened = resolve_quick_link(&BrowserClient, &config, &saved)
                    .await
                    .and_then(|link| open_in_new_tab(&link).map(|_| link));
                match opened {
                    Ok(link) => {
                        notice.set(Some(format!("Opened {}", link)));
                        state.set(AppState::Idle);
                    }
                    Err(e) => {
                        log::error!("Quick open failed for {}: {}", saved, e);
                        state.set(AppState::Error(e.to_string()));
                    }
                }
            });
        })
    };

    let on_open_settings = {
        let settings_open = settings_open.clone();
        let settings_input = settings_input.clone();
        let settings_error = settings_error.clone();
        let saved_url = saved_url.clone();
        Callback::from(move |_| {
            settings_input.set((*saved_url).clone().unwrap_or_default());
            settings_error.set(None);
            settings_open.set(true);
        })
    };

    let on_settings_input = {
        let settings_input = settings_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(el) = e.target_dyn_into::<HtmlInputElement>() {
                settings_input.set(el.value());
            }
        })
    };

    let on_settings_save = {
        let settings_open = settings_open.clone();
        let settings_input = settings_input.clone();
        let settings_error = settings_error.clone();
        let saved_url = saved_url.clone();
        let notice = notice.clone();
        let config = props.config.clone();

        Callback::from(move |_| {
            match quick_link_store(&config).and_then(|store| store.save(&settings_input)) {
                Ok(url) => {
                    saved_url.set(Some(url));
                    settings_error.set(None);
                    settings_open.set(false);
                    notice.set(Some("Quick link saved".to_string()));
                }
                Err(e) => {
                    log::warn!("Rejected quick-open URL {:?}: {}", *settings_input, e);
                    settings_error.set(Some(e.to_string()));
                }
            }
        })
    };

    let on_settings_cancel = {
        let settings_open = settings_open.clone();
        let settings_error = settings_error.clone();
        Callback::from(move |_| {
            settings_error.set(None);
            settings_open.set(false);
        })
    };

    let on_settings_clear = {
        let settings_open = settings_open.clone();
        let settings_error = settings_error.clone();
        let saved_url = saved_url.clone();
        let notice = notice.clone();
        let config = props.config.clone();

        Callback::from(move |_| {
            match quick_link_store(&config).and_then(|store| store.clear()) {
                Ok(()) => {
                    saved_url.set(None);
                    settings_error.set(None);
                    settings_open.set(false);
                    notice.set(Some("Quick link cleared".to_string()));
                }
                Err(e) => settings_error.set(Some(e.to_string())),
            }
        })
    };

    html! {
        <div class="container">
            <div class="header">
                <h1 class="main-title">{"Pastebin Web Opener"}</h1>
                <p class="subtitle">{"Extract and open links from pastebin URLs"}</p>
            </div>

            <form onsubmit={on_submit} class="extract-form">
                <label class="form-label">{"Pastebin URL"}</label>
                <input
                    id="paste-url"
                    type="url"
                    placeholder="https://pastebin.com/..."
                    value={(*input).clone()}
                    oninput={on_input}
                    disabled={is_busy}
                    class="url-input"
                />
                <button
                    type="submit"
                    class="pf-v5-c-button pf-m-primary pf-m-block"
                    disabled={is_busy}
                >
                    {if is_busy { "Fetching..." } else { "Extract Links" }}
                </button>
            </form>

            <div class="quick-actions">
                <Button
                    onclick={on_quick_open}
                    disabled={is_busy || saved_url.is_none()}
                    variant={ButtonVariant::Secondary}
                >
                    {"⚡ Quick Open"}
                </Button>
                <Button onclick={on_open_settings} variant={ButtonVariant::Plain}>
                    {"⚙ Settings"}
                </Button>
            </div>
            if let Some(url) = (*saved_url).clone() {
                <p class="quick-hint">{format!("Quick link: {}", url)}</p>
            }

            if *settings_open {
                <SettingsPanel
                    value={(*settings_input).clone()}
                    error={(*settings_error).clone()}
                    has_saved={saved_url.is_some()}
                    on_input={on_settings_input}
                    on_save={on_settings_save}
                    on_cancel={on_settings_cancel}
                    on_clear={on_settings_clear}
                />
            }

            // Status display
            {match &*state {
                AppState::Loading(msg) => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{msg}</p>
                    </div>
                },
                AppState::Error(err) => html! {
                    <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                        {err.clone()}
                    </Alert>
                },
                AppState::Idle => html! {}
            }}

            if let Some(msg) = (*notice).clone() {
                <Alert r#type={AlertType::Success} title={msg} inline={true}>
                </Alert>
            }

            if !links.is_empty() {
                <LinkList
                    links={(*links).clone()}
                    duplicates={*duplicates}
                    on_open={on_open_link}
                    on_open_all={on_open_all}
                />
            }

            <p class="footer">
                {"Note: This tool only works with public pastebin content"}
            </p>
        </div>
    }
}

// Helper functions

fn quick_link_store(config: &AppConfig) -> Result<QuickLinkStore<LocalStorage>, OpenerError> {
    Ok(QuickLinkStore::new(LocalStorage::open()?, config.storage_key.clone()))
}
