use yew::prelude::*;

use crate::components::animated_in_view::AnimatedInView;
use crate::components::marquee::Marquee;
use crate::content::TESTIMONIALS;
use crate::motion::reveal::RevealOptions;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="section section--dark testimonials">
            <div class="container">
                <AnimatedInView options={RevealOptions::once(0.5)} class="section-heading">
                    <span class="badge badge--green">{"Testimonials"}</span>
                    <h2 class="section-title">{"What Our Clients Say"}</h2>
                </AnimatedInView>
            </div>

            <Marquee>
                {
                    for TESTIMONIALS.iter().map(|testimonial| html! {
                        <figure class="testimonial-card">
                            <div class="testimonial-mark">{"❝"}</div>
                            <blockquote>{ format!("\"{}\"", testimonial.quote) }</blockquote>
                            <figcaption class="testimonial-author">
                                <div class="testimonial-avatar">{ testimonial.avatar }</div>
                                <div>
                                    <p class="testimonial-name">{ testimonial.name }</p>
                                    <p class="testimonial-role">{ testimonial.title }</p>
                                </div>
                            </figcaption>
                        </figure>
                    })
                }
            </Marquee>

            <style>
                {r#"
                .testimonials {
                    overflow: hidden;
                }
                .testimonial-card {
                    height: 100%;
                    box-sizing: border-box;
                    margin: 0;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    border-radius: 1.5rem;
                    border: 1px solid #4b5563;
                    background: rgba(55, 65, 81, 0.8);
                    transition: transform 0.3s, border-color 0.3s, box-shadow 0.3s;
                }
                .testimonial-card:hover {
                    transform: scale(1.05);
                    border-color: rgba(59, 130, 246, 0.5);
                    box-shadow: 0 20px 25px rgba(59, 130, 246, 0.1);
                }
                .testimonial-mark {
                    font-size: 3rem;
                    line-height: 1;
                    color: #60a5fa;
                    margin-bottom: 1.5rem;
                }
                .testimonial-card blockquote {
                    margin: 0 0 2rem;
                    color: #d1d5db;
                    font-size: 1.125rem;
                    font-style: italic;
                    line-height: 1.7;
                }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    margin-top: auto;
                }
                .testimonial-avatar {
                    width: 3rem;
                    height: 3rem;
                    flex-shrink: 0;
                    margin-right: 1rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-weight: 600;
                    background: linear-gradient(90deg, #3b82f6, #a855f7);
                }
                .testimonial-name {
                    margin: 0;
                    color: #fff;
                    font-weight: 700;
                }
                .testimonial-role {
                    margin: 0;
                    color: #9ca3af;
                }
                "#}
            </style>
        </section>
    }
}
