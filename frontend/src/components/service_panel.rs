use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::panels::{PanelList, PanelView, ServiceEntry};

#[derive(Properties, PartialEq)]
pub struct ServicePanelsProps {
    pub entries: Vec<ServiceEntry>,
}

#[function_component(ServicePanels)]
pub fn service_panels(props: &ServicePanelsProps) -> Html {
    let panels = {
        let entries = props.entries.clone();
        use_state(move || PanelList::new(entries))
    };

    let on_toggle = {
        let panels = panels.clone();
        Callback::from(move |index: usize| {
            let mut next = (*panels).clone();
            if next.toggle(index) {
                debug!("Service panel {} open: {}", index, next.is_open(index));
                panels.set(next);
            }
        })
    };

    html! {
        <div class="service-panels">
            { for panels.panels().map(|view| service_panel(view, &on_toggle)) }
            <style>
                {r#"
                .service-panels {
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                }
                .service-panel {
                    position: relative;
                    border: 1px solid #1e293b;
                    border-radius: 1rem;
                    overflow: hidden;
                    background: linear-gradient(to bottom, var(--panel-tint, rgba(34, 211, 238, 0.1)), transparent);
                }
                .service-panel.tint-indigo { --panel-tint: rgba(99, 102, 241, 0.1); }
                .service-panel.tint-emerald { --panel-tint: rgba(16, 185, 129, 0.1); }
                .service-panel.tint-blue { --panel-tint: rgba(59, 130, 246, 0.1); }
                .service-panel.tint-purple { --panel-tint: rgba(168, 85, 247, 0.1); }
                .service-panel.tint-orange { --panel-tint: rgba(249, 115, 22, 0.1); }
                .service-panel.tint-sky { --panel-tint: rgba(14, 165, 233, 0.1); }
                .service-panel.tint-rose { --panel-tint: rgba(244, 63, 94, 0.1); }
                .service-panel.tint-teal { --panel-tint: rgba(20, 184, 166, 0.1); }
                .service-panel-header {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.5rem 2rem;
                    background: none;
                    border: none;
                    color: inherit;
                    text-align: left;
                    cursor: pointer;
                }
                .service-kicker {
                    color: #67e8f9;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    margin: 0;
                }
                .service-panel-header h3 {
                    font-size: 1.5rem;
                    margin: 0.25rem 0 0;
                }
                .chevron {
                    color: #67e8f9;
                    font-size: 1.5rem;
                    transition: transform 0.3s ease;
                }
                .chevron.open {
                    transform: rotate(180deg);
                }
                .service-panel-detail {
                    padding: 0 1.5rem 1.5rem;
                }
                .service-panel-detail > p {
                    color: #cbd5e1;
                    margin-bottom: 1.5rem;
                }
                .service-card-grid {
                    display: grid;
                    gap: 1.5rem;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                }
                .service-card {
                    border: 1px solid #1e293b;
                    border-radius: 1rem;
                    background: rgba(15, 23, 42, 0.5);
                    padding: 1.5rem;
                    transition: transform 0.2s ease, background 0.2s ease;
                }
                .service-card:hover {
                    transform: translateY(-4px);
                    background: rgba(15, 23, 42, 0.7);
                }
                .service-card h4 {
                    color: #67e8f9;
                    margin: 0 0 0.5rem;
                }
                .service-card p {
                    color: #94a3b8;
                    font-size: 0.875rem;
                    margin: 0;
                }
                "#}
            </style>
        </div>
    }
}

fn service_panel(view: PanelView<'_>, on_toggle: &Callback<usize>) -> Html {
    let index = view.index;
    let entry = view.entry;
    let onclick = on_toggle.reform(move |e: MouseEvent| {
        e.prevent_default();
        index
    });

    html! {
        <div
            class={classes!(
                "service-panel",
                entry.tint.as_ref().map(|t| format!("tint-{}", t)),
                view.is_open.then(|| "open")
            )}
        >
            <button
                type="button"
                class="service-panel-header"
                aria-expanded={view.is_open.to_string()}
                {onclick}
            >
                <div>
                    <p class="service-kicker">{&entry.kicker}</p>
                    <h3>{&entry.title}</h3>
                </div>
                <span class={view.chevron_class()}>{"▼"}</span>
            </button>
            if view.is_open {
                <div class="service-panel-detail">
                    <p>{&entry.body}</p>
                    <div class="service-card-grid">
                        { for view.cards().iter().map(|card| html! {
                            <div class="service-card">
                                <h4>{&card.title}</h4>
                                <p>{&card.desc}</p>
                            </div>
                        }) }
                    </div>
                </div>
            }
        </div>
    }
}
