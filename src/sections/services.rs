use yew::prelude::*;

use crate::components::animated_in_view::AnimatedInView;
use crate::content::SERVICES;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="section section--light">
            <div class="container">
                <AnimatedInView class="section-heading">
                    <span class="badge badge--blue">{"Our Expertise"}</span>
                    <h2 class="section-title">{"Our Core Services"}</h2>
                    <p class="section-lead">
                        {"From concept to deployment, we provide end-to-end solutions that drive growth and efficiency."}
                    </p>
                </AnimatedInView>

                <AnimatedInView class="services-grid">
                    {
                        for SERVICES.iter().map(|service| html! {
                            <div class="service-card">
                                <div class="service-icon" style={service.accent.gradient(90)}>
                                    { service.icon }
                                </div>
                                <h3>{ service.title }</h3>
                                <p>{ service.description }</p>
                            </div>
                        })
                    }
                </AnimatedInView>
            </div>

            <style>
                {r#"
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr));
                    gap: 2rem;
                }
                .service-card {
                    height: 100%;
                    box-sizing: border-box;
                    padding: 2rem;
                    border-radius: 1rem;
                    background: rgba(31, 41, 55, 0.8);
                    border: 1px solid #4b5563;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1), border-color 0.5s;
                }
                .service-card:hover {
                    transform: translateY(-16px) scale(1.03);
                    border-color: rgba(59, 130, 246, 0.5);
                }
                .service-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                    margin-bottom: 1.5rem;
                    transition: transform 0.3s;
                }
                .service-card:hover .service-icon {
                    transform: scale(1.1);
                }
                .service-card h3 {
                    color: #fff;
                    font-size: 1.25rem;
                    margin: 0 0 1rem;
                }
                .service-card p {
                    color: #9ca3af;
                    line-height: 1.6;
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}
