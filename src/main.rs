use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod config;
mod contact;
mod content;
mod hooks;
mod motion {
    pub mod marquee;
    pub mod reveal;
    pub mod scroll;
    pub mod typewriter;
}
mod components {
    pub mod animated_in_view;
    pub mod marquee;
    pub mod typewriter;
}
mod sections {
    pub mod ai_specialization;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod services;
    pub mod showcase;
    pub mod testimonials;
}
mod pages {
    pub mod home;
}

use content::{section_anchor, BRAND, COMPANY, NAV_ITEMS};
use hooks::use_scrolled;
use pages::home::Home;


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
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled(config::HEADER_SCROLL_THRESHOLD);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor navigation still has to happen, so no prevent_default here
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <header class={classes!("site-header", is_scrolled.then(|| "scrolled"))}>
            <div class="container nav-content">
                <a href="#" class="nav-logo">{ COMPANY }</a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle navigation">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={menu_class}>
                    {
                        for NAV_ITEMS.iter().map(|item| html! {
                            <a
                                href={format!("#{}", section_anchor(item))}
                                class="nav-link"
                                onclick={close_menu.clone()}
                            >
                                { *item }
                            </a>
                        })
                    }
                    <a href="#contact" class="btn nav-cta" style={BRAND.gradient(90)} onclick={close_menu.clone()}>
                        {"Get a Quote"}
                    </a>
                </nav>
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    border-bottom: 1px solid transparent;
                    transition: all 0.5s;
                }
                .site-header.scrolled {
                    background: rgba(31, 41, 55, 0.95);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    border-bottom-color: #4b5563;
                }
                .nav-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding-top: 1rem;
                    padding-bottom: 1rem;
                }
                .nav-logo {
                    color: #fff;
                    font-size: 1.5rem;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                    text-decoration: none;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    color: #d1d5db;
                    text-decoration: none;
                    transition: color 0.3s;
                }
                .nav-link:hover {
                    color: #60a5fa;
                }
                .nav-cta {
                    padding: 0.5rem 1.5rem;
                    font-size: 1rem;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 1.5rem;
                        padding: 1.5rem;
                        background: rgba(31, 41, 55, 0.98);
                        border-bottom: 1px solid #4b5563;
                    }
                    .nav-links.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>
                { GLOBAL_STYLES }
                { components::animated_in_view::stylesheet() }
            </style>
            <div class="site">
                <Header />
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

const GLOBAL_STYLES: &str = r#"
    html {
        scroll-behavior: smooth;
    }
    body {
        margin: 0;
        background: #1f2937;
        color: #fff;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        -webkit-font-smoothing: antialiased;
    }
    .container {
        max-width: 80rem;
        margin: 0 auto;
        padding-left: 1.5rem;
        padding-right: 1.5rem;
    }
    .section {
        position: relative;
        padding: 5rem 0;
        overflow: hidden;
    }
    .section--light {
        background: #374151;
    }
    .section--dark {
        background: #1f2937;
    }
    .section-heading {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-title {
        font-size: clamp(2.25rem, 5vw, 3rem);
        font-weight: 700;
        color: #fff;
        margin: 1rem 0;
    }
    .section-lead {
        color: #d1d5db;
        font-size: 1.125rem;
        max-width: 42rem;
        margin: 0 auto;
    }
    .section-glow {
        position: absolute;
        border-radius: 50%;
        filter: blur(64px);
        width: 22rem;
        height: 22rem;
        background: linear-gradient(90deg, rgba(59, 130, 246, 0.1), rgba(168, 85, 247, 0.1));
    }
    .section-glow--top-left { top: 5rem; left: 2.5rem; }
    .section-glow--top-right { top: 5rem; right: 2.5rem; }
    .section-glow--bottom-left { bottom: 5rem; left: 2.5rem; }
    .section-glow--bottom-right { bottom: 5rem; right: 2.5rem; }
    .badge {
        display: inline-block;
        padding: 0.5rem 1rem;
        border-radius: 9999px;
        font-weight: 600;
    }
    .badge--blue { color: #93c5fd; background: rgba(59, 130, 246, 0.2); border: 1px solid rgba(96, 165, 250, 0.3); }
    .badge--purple { color: #d8b4fe; background: rgba(168, 85, 247, 0.2); border: 1px solid rgba(192, 132, 252, 0.3); }
    .badge--cyan { color: #67e8f9; background: rgba(6, 182, 212, 0.2); border: 1px solid rgba(34, 211, 238, 0.3); }
    .badge--green { color: #86efac; background: rgba(34, 197, 94, 0.2); border: 1px solid rgba(74, 222, 128, 0.3); }
    .badge--orange { color: #fdba74; background: rgba(249, 115, 22, 0.2); border: 1px solid rgba(251, 146, 60, 0.3); }
    .gradient-text {
        background: linear-gradient(90deg, #60a5fa, #22d3ee, #c084fc);
        -webkit-background-clip: text;
        background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .btn {
        display: inline-block;
        border: none;
        border-radius: 0.5rem;
        color: #fff;
        font-weight: 500;
        text-decoration: none;
        cursor: pointer;
        transition: transform 0.3s, background 0.3s, border-color 0.3s;
    }
    .btn:hover {
        transform: scale(1.05);
    }
    .btn-primary {
        background: linear-gradient(90deg, #3b82f6, #9333ea);
        box-shadow: 0 20px 25px rgba(59, 130, 246, 0.25);
    }
    .btn-ghost {
        color: #e5e7eb;
        background: rgba(55, 65, 81, 0.8);
        border: 2px solid #6b7280;
    }
    .btn-ghost:hover {
        border-color: #60a5fa;
        background: #4b5563;
    }
    .btn-large {
        padding: 1rem 2rem;
        border-radius: 0.75rem;
        font-size: 1.125rem;
        font-weight: 600;
    }
    .btn-block {
        width: 100%;
    }
    .pulse {
        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
    }
    .ping {
        animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
    }
    @keyframes pulse {
        50% { opacity: 0.5; }
    }
    @keyframes ping {
        75%, 100% { transform: scale(2); opacity: 0; }
    }
"#;


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
