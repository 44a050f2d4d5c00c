use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;

use content::ambiguity::{DANGLING_ELSE_CODE, dangling_else_interpretations};

/// Pause between trace lines during playback.
const STEP_DELAY: Duration = Duration::from_millis(1000);

/// Step-through demo of the dangling-else ambiguity: the same statement,
/// two bindings for the `else`, two different outcomes.
///
/// Playback is a chain of timed steps owned by a single task; switching
/// interpretation or resetting cancels it, and unmounting the component
/// cancels it implicitly, so no step ever lands on torn-down state.
#[component]
pub fn DanglingElseDemo() -> Element {
    let interpretations = dangling_else_interpretations();
    let mut selected = use_signal(|| 0_usize);
    let mut current_step = use_signal(|| 0_usize);
    let mut executing = use_signal(|| false);
    let mut run_task = use_signal(|| None::<Task>);

    let stop = use_callback(move |()| {
        if let Some(task) = run_task.take() {
            task.cancel();
        }
        current_step.set(0);
        executing.set(false);
    });

    let run = use_callback(move |()| {
        if executing() {
            return;
        }
        executing.set(true);
        current_step.set(0);
        let total = dangling_else_interpretations()[selected()].execution.len();
        let task = spawn(async move {
            for step in 1..=total {
                tokio::time::sleep(STEP_DELAY).await;
                current_step.set(step);
            }
            executing.set(false);
        });
        run_task.set(Some(task));
    });

    let interpretation = interpretations[selected()];
    let total = interpretation.execution.len();
    let finished = current_step() == total;
    let trace_rows: Vec<(usize, &'static str, &'static str)> = interpretation
        .execution
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let class = if index < current_step() {
                "dangling-step dangling-step--done"
            } else if index == current_step() && executing() {
                "dangling-step dangling-step--active"
            } else {
                "dangling-step"
            };
            (index, class, *step)
        })
        .collect();

    rsx! {
        div { class: "dangling-else",
            header { class: "dangling-header",
                h3 { "🚫 The \"Dangling Else\" Problem" }
                p {
                    "One of the most famous examples of syntactic ambiguity: the "
                    code { "else" }
                    " could attach to either "
                    code { "if" }
                    "!"
                }
            }

            div { class: "card dangling-code-card",
                h4 { "🔥 Ambiguous code:" }
                p { class: "mono dangling-code", "{DANGLING_ELSE_CODE}" }
                div { class: "dangling-question",
                    p {
                        strong { "Question: " }
                        "which "
                        code { "if" }
                        " owns the "
                        code { "else" }
                        "? With x = 1 and y = -1, what happens?"
                    }
                }
            }

            div { class: "dangling-selector",
                for (index, option) in interpretations.iter().enumerate() {
                    button {
                        key: "{option.title}",
                        class: if selected() == index { "btn btn-primary" } else { "btn btn-secondary" },
                        r#type: "button",
                        onclick: move |_| {
                            stop.call(());
                            selected.set(index);
                        },
                        "Reading {index + 1}"
                    }
                }
            }

            div { class: "dangling-grid",
                div { class: "card dangling-reading",
                    h4 { "{interpretation.title}" }
                    p { class: "dangling-description", "{interpretation.description}" }
                    pre { class: "mono dangling-pre", "{interpretation.code}" }
                    p { class: "dangling-inputs",
                        strong { "Test values: " }
                        "x = 1, y = -1"
                    }
                }

                div { class: "card dangling-trace",
                    div { class: "dangling-trace-header",
                        h4 { "🔍 Step-by-step execution" }
                        div { class: "dangling-trace-buttons",
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: executing(),
                                onclick: move |_| run.call(()),
                                if executing() { "⏳ Running..." } else { "▶️ Run" }
                            }
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| stop.call(()),
                                "🔄 Reset"
                            }
                        }
                    }

                    ol { class: "dangling-steps",
                        for (index, class, step) in trace_rows.iter() {
                            li { key: "{index}", class: "{class}", "{step}" }
                        }
                    }

                    if finished {
                        div { class: "dangling-result",
                            h5 { "🎯 Final result:" }
                            p { class: "mono dangling-result-value", "{interpretation.result}" }
                        }
                    }
                }
            }

            div { class: "card dangling-comparison",
                h4 { "📊 Comparing the outcomes" }
                table { class: "dangling-table",
                    thead {
                        tr {
                            th { "Reading" }
                            th { "else bound to" }
                            th { "Result (x=1, y=-1)" }
                            th { "Behavior" }
                        }
                    }
                    tbody {
                        for (index, option) in interpretations.iter().enumerate() {
                            tr { key: "{index}",
                                td { "Reading {index + 1}" }
                                td { if index == 0 { "inner if (y > 0)" } else { "outer if (x > 0)" } }
                                td { class: "mono", "{option.result}" }
                                td { if index == 0 { "Takes the else" } else { "Skips the else" } }
                            }
                        }
                    }
                }
                p { class: "dangling-warning",
                    strong { "⚠️ Problem: " }
                    "the same input produces different results, which makes the program unpredictable."
                }
            }

            div { class: "card dangling-solution",
                h4 { "✅ Solution: a precedence rule" }
                p {
                    "Most languages settle it with the rule: "
                    strong { "\"an else always binds to the nearest if\"" }
                    ", which is Reading 1. To force Reading 2, braces have to be explicit."
                }
                pre { class: "mono dangling-pre",
                    "if (x > 0) {{\n    if (y > 0)\n        print('A')\n}} else {{\n    print('B')\n}}"
                }
            }
        }
    }
}
