//! Loading indicator.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 8px; color: #8892b0; font-size: 13px;",
            "正在获取最新数据..."
        }
    }
}
