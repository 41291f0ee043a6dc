//! # Input Components
//!
//! Form inputs used by the search & filter bar.
//!
//! - **SearchInput**: Free-text input reporting every keystroke
//! - **Select**: Dropdown selection with an optional "any" entry
//!

use dioxus::prelude::*;

/// CSS classes of the text input
const INPUT_CLASS: &str = "input";

/// CSS classes of a select; selects share the text input styling
const SELECT_CLASS: &str = "input select";

// ============================================================================
// Search Input Component
// ============================================================================

/// Properties for SearchInput component
#[derive(Props, Clone, PartialEq)]
pub struct SearchInputProps {
    /// Input value
    pub value: String,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Shows a spinner at the end of the input
    #[props(default = false)]
    pub busy: bool,

    /// Called on every keystroke
    #[props(default)]
    pub on_input: EventHandler<String>,

    /// Enter key handler
    #[props(default)]
    pub on_enter: EventHandler<String>,
}

/// Single-line search input
#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    let placeholder = props.placeholder.clone().unwrap_or_default();

    rsx! {
        div {
            class: "field",

            div {
                class: "field-control",

                span { class: "field-prefix", "🔍" }

                input {
                    class: INPUT_CLASS,
                    r#type: "search",
                    value: "{props.value}",
                    placeholder: "{placeholder}",
                    oninput: move |e| props.on_input.call(e.value()),
                    onkeydown: {
                        let value = props.value.clone();
                        move |e: KeyboardEvent| {
                            if e.key() == Key::Enter {
                                props.on_enter.call(value.clone());
                            }
                        }
                    },
                }

                if props.busy {
                    span {
                        class: "field-suffix spinner",
                        role: "status",
                        aria_label: "Searching",
                    }
                }
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// Option for Select component
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value; empty selects the "any" entry
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    /// Label of the leading empty-value entry, e.g. "Any status"
    #[props(default)]
    pub any_label: Option<String>,

    /// Change handler, receives the selected value
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        div {
            class: "field",

            select {
                class: SELECT_CLASS,
                onchange: move |e| props.on_change.call(e.value()),

                if let Some(any_label) = &props.any_label {
                    option {
                        value: "",
                        selected: props.value.is_empty(),
                        "{any_label}"
                    }
                }

                for opt in props.options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == props.value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_shares_input_styling() {
        assert!(SELECT_CLASS.starts_with(INPUT_CLASS));
        assert!(SELECT_CLASS.ends_with("select"));
    }

    #[test]
    fn test_select_option_new() {
        let opt = SelectOption::new("alive", "Alive");
        assert_eq!(opt.value, "alive");
        assert_eq!(opt.label, "Alive");
    }
}
