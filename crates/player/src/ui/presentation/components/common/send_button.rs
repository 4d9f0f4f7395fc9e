use dioxus::prelude::*;

/// Round send control used by every input row
#[component]
pub fn SendButton(disabled: bool, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: if disabled { "send-button disabled" } else { "send-button" },
            disabled,
            title: "Send",
            onclick: move |evt| onclick.call(evt),
            "➤"
        }
    }
}
