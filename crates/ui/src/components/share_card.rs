use std::time::Duration;

use dioxus::core::Task;
use dioxus::document::eval;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::map_share_qr;

/// How long the "copied" indicator stays up after a successful copy.
const COPIED_REVERT: Duration = Duration::from_secs(2);

/// Share card: QR code for the course URL plus a copy-to-clipboard button.
///
/// The clipboard write is async; a denied permission is logged and leaves
/// the UI untouched apart from the indicator not appearing.
#[component]
pub fn ShareCard() -> Element {
    let ctx = use_context::<AppContext>();
    let url = ctx.share_link().to_string();

    let url_for_qr = url.clone();
    let qr = use_memo(move || map_share_qr(&url_for_qr));
    let qr = qr();

    let mut copied = use_signal(|| false);
    let mut copy_task = use_signal(|| None::<Task>);

    let url_for_copy = url.clone();
    let on_copy = move |_| {
        let url = url_for_copy.clone();
        // A fresh copy restarts the indicator window.
        if let Some(task) = copy_task.take() {
            task.cancel();
        }
        let task = spawn(async move {
            let script = format!(
                "try {{ await navigator.clipboard.writeText({url:?}); return true; }} catch (err) {{ return false; }}"
            );
            match eval(&script).await {
                Ok(value) if value.as_bool() == Some(true) => {
                    copied.set(true);
                    tokio::time::sleep(COPIED_REVERT).await;
                    copied.set(false);
                }
                Ok(_) => log::warn!("clipboard write was rejected"),
                Err(err) => log::warn!("clipboard write failed: {err:?}"),
            }
        });
        copy_task.set(Some(task));
    };

    rsx! {
        div { class: "card share-card",
            header { class: "share-card-header",
                h3 { "🔗 Access for the Class" }
                p { "Scan the QR code or copy the link to open the course" }
            }

            div { class: "qr-frame",
                div {
                    class: "qr-grid",
                    style: "grid-template-columns: repeat({qr.size}, 1fr);",
                    for (y, row) in qr.rows.iter().enumerate() {
                        for (x, filled) in row.iter().enumerate() {
                            div {
                                key: "{x}-{y}",
                                class: if *filled { "qr-cell qr-cell--ink" } else { "qr-cell" },
                            }
                        }
                    }
                }
            }
            if !qr.scannable {
                p { class: "share-fallback-note",
                    "Decorative pattern only – use the link below instead."
                }
            }

            div { class: "share-url-row",
                code { class: "share-url", "{url}" }
                button {
                    class: "btn btn-secondary share-copy",
                    r#type: "button",
                    onclick: on_copy,
                    if copied() { "✓ Copied" } else { "Copy" }
                }
            }

            div { class: "share-hints",
                p { "📱 Scan it with your phone camera" }
                p { "💻 Or paste the link into a browser" }
            }
        }
    }
}
