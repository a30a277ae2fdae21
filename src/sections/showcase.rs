use yew::prelude::*;

use crate::components::animated_in_view::AnimatedInView;
use crate::content::{Project, PROJECTS};

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    html! {
        <div class="project-card">
            <div class="project-art" style={project.accent.gradient(135)}>
                <div class="project-orb pulse"></div>
                <div class="project-orb project-orb--small ping"></div>
            </div>
            <div class="project-shade"></div>
            <div class="project-caption">
                <span class="project-category">{ project.category }</span>
                <h3>{ project.title }</h3>
            </div>
            <div class="project-arrow">{"↗"}</div>
        </div>
    }
}

#[function_component(Showcase)]
pub fn showcase() -> Html {
    html! {
        <section id="showcase" class="section section--light">
            <div class="container">
                <AnimatedInView class="section-heading">
                    <span class="badge badge--cyan">{"Portfolio"}</span>
                    <h2 class="section-title">{"Our Showcase"}</h2>
                    <p class="section-lead">
                        {"We've partnered with forward-thinking companies to build exceptional digital products."}
                    </p>
                </AnimatedInView>

                <AnimatedInView class="projects-grid">
                    { for PROJECTS.iter().map(|project| html! { <ProjectCard project={*project} /> }) }
                </AnimatedInView>
            </div>

            <style>
                {r#"
                .projects-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                    gap: 2rem;
                }
                .project-card {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    border: 1px solid #4b5563;
                    background: #1f2937;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1), border-color 0.5s;
                }
                .project-card:hover {
                    transform: translateY(-8px);
                    border-color: rgba(59, 130, 246, 0.5);
                }
                .project-art {
                    position: relative;
                    height: 20rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .project-orb {
                    width: 8rem;
                    height: 8rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.1);
                }
                .project-orb--small {
                    position: absolute;
                    width: 5rem;
                    height: 5rem;
                    background: rgba(255, 255, 255, 0.2);
                }
                .project-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.2), transparent);
                }
                .project-caption {
                    position: absolute;
                    left: 0;
                    bottom: 0;
                    padding: 2rem;
                }
                .project-caption h3 {
                    color: #fff;
                    font-size: 1.5rem;
                    margin: 0;
                }
                .project-category {
                    display: inline-block;
                    margin-bottom: 0.5rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    color: #fff;
                    background: rgba(255, 255, 255, 0.2);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                }
                .project-arrow {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    padding: 0.5rem 0.85rem;
                    border-radius: 50%;
                    color: #fff;
                    background: rgba(255, 255, 255, 0.2);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    opacity: 0;
                    transform: scale(0.8);
                    transition: opacity 0.3s, transform 0.3s;
                }
                .project-card:hover .project-arrow {
                    opacity: 1;
                    transform: scale(1);
                }
                "#}
            </style>
        </section>
    }
}
