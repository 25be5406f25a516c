use yew::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <section id="home" class="page active">
            <div class="hero">
                <h1>{"Your work, everywhere at once"}</h1>
                <p class="hero-tagline">
                    {"Nimbus keeps your notes, files and tasks in step across every \
                      device you own. Close the laptop mid-sentence, pick the \
                      sentence up on your phone."}
                </p>
                <button class="btn btn-primary" onclick={crate::switch_page_onclick("features")}>
                    {"See what it does"}
                </button>
            </div>

            <div class="card-grid">
                <div class="card">
                    <h3>{"Instant sync"}</h3>
                    <p>{"Edits land on your other devices before you can reach for them. No sync button, no conflicts to untangle."}</p>
                </div>
                <div class="card">
                    <h3>{"Works offline"}</h3>
                    <p>{"Planes, tunnels, dead zones. Keep working; Nimbus reconciles the moment you're back."}</p>
                </div>
                <div class="card">
                    <h3>{"Private by default"}</h3>
                    <p>{"End-to-end encryption on everything you write. We couldn't read your notes if we wanted to."}</p>
                </div>
            </div>
        </section>
    }
}
