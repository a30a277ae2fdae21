use yew::prelude::*;
use log::debug;

use crate::sections::{
    ai_specialization::AiSpecialization,
    contact::Contact,
    footer::Footer,
    hero::Hero,
    services::Services,
    showcase::Showcase,
    testimonials::Testimonials,
};

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount, unless a section anchor was requested
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                let hash = window.location().hash().unwrap_or_default();
                if hash.is_empty() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                } else {
                    debug!("Opening page at {}", hash);
                }
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <main>
                <Hero />
                <Services />
                <AiSpecialization />
                <Showcase />
                <Testimonials />
                <Contact />
            </main>
            <Footer />
        </>
    }
}
