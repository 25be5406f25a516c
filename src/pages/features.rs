use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    title: String,
    children: Children,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="card">
            <h3>{&props.title}</h3>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="page">
            <div class="hero">
                <h1>{"Everything in its place"}</h1>
                <p class="hero-tagline">
                    {"One workspace for the things you write, collect and plan — \
                      organized the way you think, not the way a filesystem does."}
                </p>
            </div>

            <div class="card-grid">
                <FeatureCard title="Linked notes">
                    <p>{"Reference any note from any other. Nimbus keeps backlinks current, so context is always one hop away."}</p>
                </FeatureCard>
                <FeatureCard title="Shared spaces">
                    <p>{"Invite your team into a space and everyone sees the same page at the same moment, cursors and all."}</p>
                </FeatureCard>
                <FeatureCard title="Task views">
                    <p>{"Turn a checklist into a board or a timeline with one click. It's the same data underneath, so nothing drifts."}</p>
                </FeatureCard>
                <FeatureCard title="Full-text search">
                    <p>{"Search across notes, files and archived spaces in milliseconds, including what's inside your PDFs."}</p>
                </FeatureCard>
                <FeatureCard title="Version history">
                    <p>{"Every page remembers what it used to say. Scroll back a week and restore a paragraph without losing today's work."}</p>
                </FeatureCard>
                <FeatureCard title="Integrations">
                    <p>{"Pull in calendars, pull requests and support tickets. Nimbus is happiest as the middle of your tool chain."}</p>
                </FeatureCard>
            </div>
        </section>
    }
}
