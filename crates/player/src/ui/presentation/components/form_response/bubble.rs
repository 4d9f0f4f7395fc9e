//! Display-only bubble: text, image or video next to the avatar

use dioxus::prelude::*;

use chatform_domain::{BubbleContent, VIDEO_MIME_TYPE};

#[component]
pub fn Bubble(content: BubbleContent) -> Element {
    rsx! {
        div {
            class: "media-container",
            div { class: "avatar", "💬" }
            div {
                match content {
                    BubbleContent::Image { url } => rsx! {
                        img { src: "{url}", alt: "Media content", style: "max-width: 100%;" }
                    },
                    BubbleContent::Video { url } => rsx! {
                        video {
                            width: "320",
                            height: "240",
                            controls: true,
                            source { src: "{url}", r#type: VIDEO_MIME_TYPE }
                            "Your browser does not support the video tag."
                        }
                    },
                    BubbleContent::Text { text } => rsx! {
                        h3 { class: "bubble-heading", "{text}" }
                    },
                }
            }
        }
    }
}
