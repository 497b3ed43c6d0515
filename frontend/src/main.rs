use std::rc::Rc;

use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod hotkey;
mod panels;
mod components {
    pub mod contact_cta;
    pub mod service_panel;
}
mod pages {
    pub mod home;
}

use config::{site_config, SiteConfig};
use pages::home::{use_site_config, Home, NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let brand = use_site_config().brand.clone();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = window().map(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 40.0);
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // anchor links still scroll, only the menu closes
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {brand}
                </Link<Route>>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#services" class="nav-link" onclick={close_menu.clone()}>
                        {"Services"}
                    </a>
                    <a href="#contact" class="nav-link" onclick={close_menu}>
                        {"Contact"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                body {
                    margin: 0;
                    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
                    background: #020617;
                }
                html {
                    scroll-behavior: smooth;
                }
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(2, 6, 23, 0.8);
                    backdrop-filter: blur(16px);
                    border-bottom: 1px solid #1e293b;
                    transition: box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.4);
                }
                .nav-content {
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-size: 1.875rem;
                    font-weight: 800;
                    color: #67e8f9;
                    letter-spacing: 0.025em;
                    text-decoration: none;
                    text-shadow: 0 0 10px rgba(34, 211, 238, 0.7);
                }
                .nav-right {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    color: #cbd5e1;
                    font-size: 1.125rem;
                    text-decoration: none;
                }
                .nav-link:hover {
                    color: #67e8f9;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #cbd5e1;
                }
                @media (max-width: 640px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        right: 0;
                        left: 0;
                        padding: 1rem 1.5rem;
                        background: #020617;
                        border-bottom: 1px solid #1e293b;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let config = use_state(|| Rc::new(site_config()));

    html! {
        <ContextProvider<Rc<SiteConfig>> context={(*config).clone()}>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteConfig>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
