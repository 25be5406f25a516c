use yew::prelude::*;

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <section id="pricing" class="page">
            <div class="hero">
                <h1>{"Plans that stay out of the way"}</h1>
                <p class="hero-tagline">
                    {"Start free, upgrade when your team does. No per-feature \
                      nickel-and-diming."}
                </p>
            </div>

            <div class="card-grid">
                <div class="card pricing-card">
                    <h3>{"Personal"}</h3>
                    <p class="price">{"Free"}</p>
                    <ul>
                        <li>{"Unlimited notes"}</li>
                        <li>{"3 devices"}</li>
                        <li>{"30-day version history"}</li>
                    </ul>
                    <button class="btn" onclick={crate::switch_page_onclick("login")}>
                        {"Get started"}
                    </button>
                </div>
                <div class="card pricing-card featured">
                    <h3>{"Pro"}</h3>
                    <p class="price">{"$8"}<span class="price-period">{"/month"}</span></p>
                    <ul>
                        <li>{"Everything in Personal"}</li>
                        <li>{"Unlimited devices"}</li>
                        <li>{"Unlimited history"}</li>
                        <li>{"Shared spaces for 10 guests"}</li>
                    </ul>
                    <button class="btn btn-primary" onclick={crate::switch_page_onclick("login")}>
                        {"Start a free trial"}
                    </button>
                </div>
                <div class="card pricing-card">
                    <h3>{"Team"}</h3>
                    <p class="price">{"$14"}<span class="price-period">{"/seat"}</span></p>
                    <ul>
                        <li>{"Everything in Pro"}</li>
                        <li>{"SSO and admin controls"}</li>
                        <li>{"Audit log"}</li>
                        <li>{"Priority support"}</li>
                    </ul>
                    <button class="btn" onclick={crate::switch_page_onclick("login")}>
                        {"Talk to us"}
                    </button>
                </div>
            </div>
        </section>
    }
}
