use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="page">
            <div class="hero">
                <h1>{"Small team, stubborn opinions"}</h1>
                <p class="hero-tagline">
                    {"Nimbus started as a weekend fix for our own scattered notes \
                      and never stopped."}
                </p>
            </div>

            <div class="about-story">
                <p>
                    {"We were four engineers with four laptops, three phones and one \
                      shared complaint: the tool where an idea landed was never the \
                      tool where it was needed. So we built the sync engine we wished \
                      existed and wrapped the thinnest possible product around it."}
                </p>
                <p>
                    {"That bias still shapes everything here. Features earn their \
                      place by disappearing into the background; anything that makes \
                      you think about the tool instead of your work gets cut."}
                </p>
            </div>

            <div class="card-grid">
                <div class="card">
                    <h3>{"2019"}</h3>
                    <p>{"First prototype syncs a markdown folder between two laptops over a weekend."}</p>
                </div>
                <div class="card">
                    <h3>{"2022"}</h3>
                    <p>{"Shared spaces ship and Nimbus quietly crosses 100k daily writers."}</p>
                </div>
                <div class="card">
                    <h3>{"Today"}</h3>
                    <p>{"A team of twenty, fully remote, dogfooding every release inside Nimbus itself."}</p>
                </div>
            </div>
        </section>
    }
}
