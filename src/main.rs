use log::{info, Level};
use web_sys::{Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

mod config;
mod nav {
    pub mod controller;
    pub mod keyboard;
    pub mod registry;
    pub mod scroll;
    pub mod throttle;
    pub mod transition;
}
mod effects {
    pub mod cards;
    pub mod loading;
    pub mod motion;
    pub mod parallax;
    pub mod scroll_top;
}
mod pages {
    pub mod about;
    pub mod features;
    pub mod home;
    pub mod pricing;
}
mod auth {
    pub mod login;
}

use auth::login::Login;
use nav::throttle::{PerformanceClock, Throttle};
use pages::{about::About, features::Features, home::Home, pricing::Pricing};

/// onclick handler that routes a view switch through the controller.
fn switch_page_onclick(target: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        nav::controller::with(|controller| controller.switch_to_page(target));
    })
}

#[function_component(Nav)]
fn nav_bar() -> Html {
    let toggle_menu = Callback::from(|event: MouseEvent| {
        event.prevent_default();
        nav::controller::with(|controller| controller.toggle_menu());
    });

    html! {
        <nav id="navbar" class="navbar">
            <div class="nav-container">
                <a id="logo" class="logo" href="#" onclick={switch_page_onclick("home")}>
                    {"Nimbus"}
                </a>
                <button id="mobileMenu" class="mobile-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul id="navLinks" class="nav-links">
                    <li>
                        <a class="nav-link active" data-page="home" href="#"
                            onclick={switch_page_onclick("home")}>{"Home"}</a>
                    </li>
                    <li>
                        <a class="nav-link" data-page="features" href="#"
                            onclick={switch_page_onclick("features")}>{"Features"}</a>
                    </li>
                    <li>
                        <a class="nav-link" data-page="pricing" href="#"
                            onclick={switch_page_onclick("pricing")}>{"Pricing"}</a>
                    </li>
                    <li>
                        <a class="nav-link" data-page="about" href="#"
                            onclick={switch_page_onclick("about")}>{"About"}</a>
                    </li>
                    <li>
                        <a class="nav-link nav-login" data-page="login" href="#"
                            onclick={switch_page_onclick("login")}>{"Login"}</a>
                    </li>
                </ul>
            </div>
            <div id="scrollIndicator" class="scroll-indicator"></div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    // Bind the controller and effects once the first render has committed.
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            nav::controller::init(&window, &document);
            effects::loading::fade_in(&document);
            effects::motion::install(&window);
            effects::cards::observe(&document);
            effects::scroll_top::install(&window, &document);
            effects::parallax::install(&window, &document);

            || ()
        },
        (),
    );

    // Crossing back to desktop width force-closes the hamburger.
    let resize_throttle =
        use_mut_ref(|| Throttle::new(config::RESIZE_THROTTLE_MS, PerformanceClock));
    use_event_with_window("resize", move |_: Event| {
        if resize_throttle.borrow().try_fire() {
            nav::controller::with(|controller| controller.on_resize());
        }
    });

    html! {
        <>
            <style>{GLOBAL_CSS}</style>
            <Nav />
            <main>
                <Home />
                <Features />
                <Pricing />
                <About />
                <Login />
            </main>
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Nimbus site");
    yew::Renderer::<App>::new().render();
}

const GLOBAL_CSS: &str = r#"
    * {
        margin: 0;
        padding: 0;
        box-sizing: border-box;
    }

    body {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto,
            Helvetica, Arial, sans-serif;
        color: #2d3748;
        background: #fafbff;
        line-height: 1.6;
    }

    .navbar {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        z-index: 100;
        background: transparent;
        transition: background 0.3s ease, box-shadow 0.3s ease;
    }

    .navbar.scrolled {
        background: rgba(255, 255, 255, 0.95);
        backdrop-filter: blur(10px);
        box-shadow: 0 2px 20px rgba(0, 0, 0, 0.08);
    }

    .nav-container {
        max-width: 1100px;
        margin: 0 auto;
        padding: 1rem 2rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }

    .logo {
        font-size: 1.5rem;
        font-weight: 700;
        color: #fff;
        text-decoration: none;
        transition: color 0.3s ease;
    }

    .logo.force-dark {
        color: #2d3748;
    }

    .nav-links {
        display: flex;
        gap: 0.5rem;
        list-style: none;
        align-items: center;
    }

    .nav-link {
        display: inline-block;
        padding: 0.5rem 1rem;
        border-radius: 8px;
        color: rgba(255, 255, 255, 0.9);
        text-decoration: none;
        transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
    }

    .nav-link.force-dark {
        color: #2d3748;
    }

    .nav-link:hover {
        transform: translateY(-3px) scale(1.05);
        box-shadow: 0 8px 25px rgba(102, 126, 234, 0.3);
    }

    .nav-link:active {
        transform: translateY(-1px) scale(1.02);
    }

    .nav-link:focus-visible {
        outline: 2px solid #667eea;
        outline-offset: 2px;
    }

    .nav-link.active {
        background: rgba(102, 126, 234, 0.18);
        color: #fff;
    }

    .nav-link.active.force-dark {
        color: #4c51bf;
    }

    .nav-login {
        border: 1px solid rgba(255, 255, 255, 0.5);
    }

    .scroll-indicator {
        height: 3px;
        width: 0%;
        background: linear-gradient(90deg, #667eea, #764ba2);
    }

    .mobile-menu {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
        padding: 6px;
    }

    .mobile-menu span {
        display: block;
        width: 24px;
        height: 2px;
        background: currentColor;
        color: #fff;
        transition: transform 0.3s ease, opacity 0.3s ease;
    }

    .navbar.scrolled .mobile-menu span {
        color: #2d3748;
    }

    .page {
        display: none;
        min-height: 100vh;
        padding-top: 72px;
        transition: opacity 0.4s ease, transform 0.4s ease;
    }

    .page.active {
        display: block;
    }

    .hero {
        padding: 7rem 2rem 5rem;
        text-align: center;
        color: #fff;
        background: linear-gradient(135deg, #667eea, #764ba2);
    }

    .hero h1 {
        font-size: 3rem;
        margin-bottom: 1rem;
    }

    .hero-tagline {
        max-width: 560px;
        margin: 0 auto 2rem;
        font-size: 1.15rem;
        color: rgba(255, 255, 255, 0.9);
    }

    .card-grid {
        max-width: 1100px;
        margin: 0 auto;
        padding: 4rem 2rem;
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
        gap: 2rem;
    }

    .card {
        background: #fff;
        border-radius: 16px;
        padding: 2rem;
        box-shadow: 0 4px 24px rgba(45, 55, 72, 0.08);
    }

    .card h3 {
        margin-bottom: 0.75rem;
        color: #4c51bf;
    }

    .pricing-card ul {
        list-style: none;
        margin: 1rem 0 1.5rem;
    }

    .pricing-card li {
        padding: 0.3rem 0;
        color: #4a5568;
    }

    .pricing-card.featured {
        border: 2px solid #667eea;
    }

    .price {
        font-size: 2.25rem;
        font-weight: 700;
    }

    .price-period {
        font-size: 1rem;
        font-weight: 400;
        color: #718096;
    }

    .about-story {
        max-width: 680px;
        margin: 0 auto;
        padding: 3rem 2rem 0;
    }

    .about-story p {
        margin-bottom: 1.25rem;
        color: #4a5568;
    }

    .btn {
        display: inline-block;
        padding: 0.75rem 1.75rem;
        border: 1px solid #cbd5e0;
        border-radius: 10px;
        background: #fff;
        color: #2d3748;
        font-size: 1rem;
        cursor: pointer;
        transition: all 0.3s ease;
    }

    .btn:hover {
        transform: translateY(-2px);
        box-shadow: 0 8px 25px rgba(102, 126, 234, 0.25);
    }

    .btn-primary {
        background: linear-gradient(135deg, #667eea, #764ba2);
        border: none;
        color: #fff;
    }

    .login-container {
        max-width: 440px;
        margin: 6rem auto;
        padding: 3rem;
        background: #fff;
        border-radius: 16px;
        box-shadow: 0 8px 32px rgba(45, 55, 72, 0.12);
    }

    .login-container h1 {
        margin-bottom: 0.5rem;
    }

    .login-blurb {
        color: #718096;
        margin-bottom: 2rem;
    }

    .form-group {
        margin-bottom: 1.25rem;
    }

    .form-group label {
        display: block;
        margin-bottom: 0.4rem;
        font-weight: 600;
    }

    .form-group input {
        width: 100%;
        padding: 0.7rem 0.9rem;
        border: 1px solid #cbd5e0;
        border-radius: 8px;
        font-size: 1rem;
    }

    .form-group input:focus {
        outline: 2px solid #667eea;
        border-color: transparent;
    }

    .login-btn {
        width: 100%;
    }

    .success-message {
        margin-top: 1.25rem;
        padding: 0.75rem 1rem;
        border-radius: 8px;
        background: rgba(72, 187, 120, 0.12);
        color: #276749;
    }

    @media (max-width: 768px) {
        .mobile-menu {
            display: flex;
        }

        .nav-links {
            position: absolute;
            top: 100%;
            right: 0;
            left: 0;
            flex-direction: column;
            align-items: stretch;
            padding: 1rem 2rem;
            background: rgba(255, 255, 255, 0.98);
            box-shadow: 0 12px 24px rgba(0, 0, 0, 0.1);
            display: none;
        }

        .nav-links.active {
            display: flex;
        }

        .nav-links .nav-link {
            color: #2d3748;
        }

        .hero h1 {
            font-size: 2.1rem;
        }
    }
"#;
