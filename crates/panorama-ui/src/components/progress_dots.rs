//! Progress indicator dots.
//!
//! Used both for the showcase panels and the intro stages. Clicking a dot
//! jumps directly to its position.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ProgressDotsProps {
    pub count: usize,
    /// Zero-based active position
    pub current: usize,
    pub onselect: EventHandler<usize>,
    /// Optional labels for screen readers and tooltips
    #[props(default)]
    pub labels: Vec<String>,
}

pub fn dot_class(index: usize, current: usize) -> &'static str {
    if index == current {
        "progress-dot active"
    } else {
        "progress-dot"
    }
}

#[component]
pub fn ProgressDots(props: ProgressDotsProps) -> Element {
    let onselect = props.onselect;

    rsx! {
        nav { class: "progress-dots",
            for index in 0..props.count {
                button {
                    key: "{index}",
                    class: dot_class(index, props.current),
                    title: props.labels.get(index).cloned().unwrap_or_default(),
                    "aria-label": "Go to {index + 1}",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        tracing::debug!(index, "Progress dot selected");
                        onselect.call(index);
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_current_dot_is_active() {
        assert_eq!(dot_class(2, 2), "progress-dot active");
        assert_eq!(dot_class(1, 2), "progress-dot");
    }
}
