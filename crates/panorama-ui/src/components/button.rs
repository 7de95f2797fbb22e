//! Button Components
//!
//! Button styles used across the site:
//! - Primary: filled lilac pill for main actions
//! - Ghost: outlined, for secondary actions
//! - Nav: section tabs on the research page, with an active state
//! - Threshold: the large door / mirror props

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    /// Section tab; pair with `active`
    Nav,
    Threshold,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Nav => "nav-btn",
            ButtonVariant::Threshold => "btn-threshold",
        }
    }
}

/// Full class string for a variant plus optional state and extra classes.
pub fn button_class(variant: ButtonVariant, active: bool, extra: Option<&str>) -> String {
    let mut class = variant.class().to_string();
    if active {
        class.push_str(" active");
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Highlighted state (used by `Nav` tabs)
    #[props(default = false)]
    pub active: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Nav,
///         active: section == ResearchSection::Topics,
///         onclick: move |_| show(ResearchSection::Topics),
///         "Topics"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.active, props.class.as_deref());
    let onclick = props.onclick;

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                if let Some(handler) = onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "close-btn",
            "aria-label": "Close",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                onclick.call(());
            },
            "\u{00D7}"
        }
    }
}
