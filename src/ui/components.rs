/// Reusable UI components

use patternfly_yew::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LinkListProps {
    pub links: Vec<String>,
    #[prop_or(0)]
    pub duplicates: usize,
    pub on_open: Callback<String>,
    pub on_open_all: Callback<()>,
}

#[function_component(LinkList)]
pub fn link_list(props: &LinkListProps) -> Html {
    html! {
        <div class="links-container">
            <div class="links-header">
                <h3 class="links-title">{format!("Extracted Links ({})", props.links.len())}</h3>
                if props.links.len() > 1 {
                    <Button
                        onclick={props.on_open_all.reform(|_| ())}
                        variant={ButtonVariant::Link}
                    >
                        {"Open all"}
                    </Button>
                }
            </div>
            if props.duplicates > 0 {
                <p class="links-hint">{format!("{} duplicate links hidden", props.duplicates)}</p>
            }
            <div class="links-list">
                {for props.links.iter().map(|link| {
                    let target = link.clone();
                    html! {
                        <div key={link.clone()} class="link-item">
                            <div class="link-url" title={link.clone()}>{link}</div>
                            <Button
                                onclick={props.on_open.reform(move |_| target.clone())}
                                variant={ButtonVariant::Secondary}
                            >
                                {"↗ Open"}
                            </Button>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SettingsPanelProps {
    pub value: String,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or(false)]
    pub has_saved: bool,
    pub on_input: Callback<InputEvent>,
    pub on_save: Callback<()>,
    pub on_cancel: Callback<()>,
    pub on_clear: Callback<()>,
}

#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    html! {
        <div class="settings-panel">
            <h3 class="settings-title">{"Quick open settings"}</h3>
            <label class="settings-label">{"Saved pastebin URL"}</label>
            <input
                id="quick-url"
                type="url"
                placeholder="https://pastebin.com/..."
                value={props.value.clone()}
                oninput={props.on_input.clone()}
                class="settings-input"
            />
            if let Some(error) = &props.error {
                <Alert r#type={AlertType::Danger} title={"Cannot save"} inline={true}>
                    {error.clone()}
                </Alert>
            }
            <div class="settings-actions">
                <Button
                    onclick={props.on_save.reform(|_| ())}
                    variant={ButtonVariant::Primary}
                >
                    {"Save"}
                </Button>
                <Button
                    onclick={props.on_cancel.reform(|_| ())}
                    variant={ButtonVariant::Secondary}
                >
                    {"Cancel"}
                </Button>
                if props.has_saved {
                    <Button
                        onclick={props.on_clear.reform(|_| ())}
                        variant={ButtonVariant::Danger}
                    >
                        {"Clear"}
                    </Button>
                }
            </div>
        </div>
    }
}
