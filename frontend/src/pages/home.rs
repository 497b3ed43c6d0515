use std::rc::Rc;

use chrono::Datelike;
use web_sys::MouseEvent;
use yew::functional::hook;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::contact_cta::{open_contact_modal, ContactCta};
use crate::components::service_panel::ServicePanels;
use crate::config::SiteConfig;
use crate::Route;

#[hook]
pub fn use_site_config() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>().unwrap_or_else(|| Rc::new(SiteConfig::fallback()))
}

fn book_consult() -> Callback<MouseEvent> {
    Callback::from(|e: MouseEvent| {
        e.prevent_default();
        open_contact_modal();
    })
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    config: Rc<SiteConfig>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let config = &props.config;

    html! {
        <section class="hero">
            <div class="hero-glow hero-glow-left"></div>
            <div class="hero-glow hero-glow-right"></div>
            if let Some(logo) = &config.logo {
                <img class="hero-logo" src={logo.clone()} alt={format!("{} logo", config.brand)} />
            }
            <h1 class="hero-headline">{&config.headline}</h1>
            <p class="hero-tagline">{&config.tagline}</p>
            <div class="hero-badges">
                { for config.badges.iter().map(|badge| html! {
                    <span class="badge">{badge}</span>
                }) }
            </div>
            <div class="hero-cta-group">
                <a href="#services" class="hero-cta">{"Explore Services"}</a>
                <button class="hero-secondary" onclick={book_consult()}>
                    {"Book a consult"}
                </button>
            </div>
        </section>
    }
}

#[function_component(FloatingDock)]
fn floating_dock() -> Html {
    html! {
        <div class="floating-dock">
            <span>{"Need help choosing?"}</span>
            <a href="#services" class="dock-browse">{"Browse"}</a>
            <button class="dock-consult" onclick={book_consult()}>{"Book a consult"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    brand: String,
}

#[function_component(Footer)]
fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <p>{format!("© {} {}. All rights reserved.", year, props.brand)}</p>
                <div class="footer-links">
                    <a href="#services">{"Services"}</a>
                    <a href="#contact">{"Contact"}</a>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_site_config();

    html! {
        <main class="home-page">
            <Hero config={config.clone()} />
            <section id="services" class="services-section">
                <h2>{"Our Services"}</h2>
                <ServicePanels entries={config.services.clone()} />
            </section>
            <FloatingDock />
            <ContactCta config={(*config).clone()} />
            <Footer brand={config.brand.clone()} />
            <style>
                {r#"
                .home-page {
                    background: #020617;
                    color: #f1f5f9;
                    min-height: 100vh;
                }
                .hero {
                    position: relative;
                    min-height: 88vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    padding: 8rem 1.5rem 0;
                    text-align: center;
                }
                .hero-glow {
                    position: absolute;
                    border-radius: 9999px;
                    filter: blur(64px);
                    pointer-events: none;
                }
                .hero-glow-left {
                    width: 36rem;
                    height: 36rem;
                    left: -8rem;
                    top: -6rem;
                    background: rgba(34, 211, 238, 0.2);
                }
                .hero-glow-right {
                    width: 44rem;
                    height: 44rem;
                    right: -10rem;
                    bottom: -6rem;
                    background: rgba(99, 102, 241, 0.1);
                }
                .hero-logo {
                    width: 14rem;
                    margin-bottom: 1.5rem;
                }
                .hero-headline {
                    font-size: clamp(2.5rem, 6vw, 6rem);
                    font-weight: 800;
                    max-width: 64rem;
                    background: linear-gradient(to right, #67e8f9, #bae6fd, #a5b4fc);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                    margin: 0;
                }
                .hero-tagline {
                    color: #cbd5e1;
                    font-size: 1.25rem;
                    max-width: 56rem;
                    margin-top: 1.25rem;
                }
                .hero-badges {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }
                .badge {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #cbd5e1;
                    border: 1px solid #1e293b;
                    border-radius: 9999px;
                    padding: 0.25rem 0.75rem;
                    background: rgba(15, 23, 42, 0.6);
                }
                .hero-cta-group {
                    margin-top: 2rem;
                    display: flex;
                    gap: 1rem;
                }
                .hero-cta {
                    padding: 0.75rem 1.25rem;
                    border-radius: 1rem;
                    font-weight: 600;
                    background: #67e8f9;
                    color: #0f172a;
                    text-decoration: none;
                }
                .hero-secondary {
                    padding: 0.75rem 1.25rem;
                    border-radius: 1rem;
                    border: 1px solid #334155;
                    background: none;
                    color: inherit;
                    cursor: pointer;
                }
                .services-section {
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                    border-top: 1px solid #1e293b;
                }
                .services-section h2 {
                    font-size: 2.25rem;
                    text-align: center;
                    margin-bottom: 2.5rem;
                }
                .floating-dock {
                    position: fixed;
                    bottom: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 40;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    border: 1px solid #1e293b;
                    border-radius: 1rem;
                    background: rgba(15, 23, 42, 0.8);
                    backdrop-filter: blur(8px);
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                }
                .dock-browse {
                    padding: 0.375rem 0.75rem;
                    border-radius: 0.75rem;
                    background: #1e293b;
                    color: inherit;
                    text-decoration: none;
                }
                .dock-consult {
                    padding: 0.375rem 0.75rem;
                    border-radius: 0.75rem;
                    border: none;
                    background: #67e8f9;
                    color: #0f172a;
                    font-weight: 600;
                    cursor: pointer;
                }
                .site-footer {
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .footer-content {
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 2.5rem 1.5rem 5rem;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: center;
                    font-size: 0.875rem;
                    color: #94a3b8;
                }
                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                }
                .footer-links a {
                    color: inherit;
                    text-decoration: none;
                }
                .footer-links a:hover {
                    color: #67e8f9;
                }
                "#}
            </style>
        </main>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home}>{"Back to the home page"}</Link<Route>>
        </main>
    }
}
