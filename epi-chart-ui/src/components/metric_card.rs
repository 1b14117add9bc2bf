//! A single headline number.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MetricCardProps {
    /// DOM id of the value element
    pub id: String,
    pub label: String,
    pub value: String,
}

#[component]
pub fn MetricCard(props: MetricCardProps) -> Element {
    rsx! {
        div {
            class: "metric-card",
            style: "flex: 1; min-width: 140px; padding: 12px 16px; background: rgba(16, 42, 78, 0.6); border: 1px solid #1e4a7a; border-radius: 6px; text-align: center;",
            div {
                style: "font-size: 13px; color: #8892b0; margin-bottom: 6px;",
                "{props.label}"
            }
            div {
                id: "{props.id}",
                style: "font-size: 26px; font-weight: bold; color: #64ffda;",
                "{props.value}"
            }
        }
    }
}
