use dioxus::prelude::*;
use store::Insight;

/// The normalized family insight. Renders nothing for an empty insight.
#[component]
pub fn InsightPanel(insight: Insight) -> Element {
    if insight.is_empty() {
        return rsx! {};
    }

    rsx! {
        section {
            class: "insight",
            h3 { "Family insight" }
            InsightSection { title: "Common themes", items: insight.common_themes.clone() }
            InsightSection { title: "Generation differences", items: insight.generation_differences.clone() }
            InsightSection { title: "Conversation starters", items: insight.conversation_suggestions.clone() }
        }
    }
}

#[component]
fn InsightSection(title: String, items: Vec<String>) -> Element {
    if items.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "insight__section",
            h4 { "{title}" }
            ul {
                for item in items {
                    li { "{item}" }
                }
            }
        }
    }
}
