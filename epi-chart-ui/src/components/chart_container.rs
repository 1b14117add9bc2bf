//! Titled panel hosting one chart mount point.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id ECharts initializes on
    pub id: String,
    pub title: String,
    /// Whether the first snapshot is still on its way
    #[props(default = false)]
    pub loading: bool,
    #[props(default = 320)]
    pub min_height: u32,
}

/// A panel with a heading and a sized div for an ECharts instance.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            class: "chart-panel",
            style: "background: rgba(16, 42, 78, 0.6); border: 1px solid #1e4a7a; border-radius: 6px; padding: 12px;",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 15px; color: #64ffda;",
                "{props.title}"
            }
            div {
                style: "{style}",
                if props.loading {
                    div {
                        style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #8892b0;",
                        "加载中..."
                    }
                }
                div {
                    id: "{props.id}",
                    style: "width: 100%; height: 100%;",
                }
            }
        }
    }
}
