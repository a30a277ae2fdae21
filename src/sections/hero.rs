use yew::prelude::*;
use web_sys::js_sys::Math;

use crate::components::animated_in_view::AnimatedInView;
use crate::components::typewriter::TypewriterText;
use crate::content::HERO_PHRASES;
use crate::motion::reveal::RevealOptions;

const PARTICLE_COUNT: usize = 15;

#[derive(Clone, PartialEq)]
struct Particle {
    cx: f64,
    cy: f64,
    r: f64,
    delay: f64,
    duration: f64,
}

impl Particle {
    fn random() -> Self {
        Self {
            cx: Math::random() * 1000.0,
            cy: Math::random() * 800.0,
            r: Math::random() * 4.0 + 2.0,
            delay: Math::random() * 3.0,
            duration: 3.0 + Math::random() * 2.0,
        }
    }
}

#[function_component(FloatingParticles)]
fn floating_particles() -> Html {
    // Positions are rolled once per mount so re-renders don't shuffle them.
    let particles = use_state(|| (0..PARTICLE_COUNT).map(|_| Particle::random()).collect::<Vec<_>>());

    html! {
        <svg class="hero-particles" viewBox="0 0 1000 800" preserveAspectRatio="xMidYMid slice">
            {
                for particles.iter().map(|p| html! {
                    <circle
                        cx={format!("{:.1}", p.cx)}
                        cy={format!("{:.1}", p.cy)}
                        r={format!("{:.1}", p.r)}
                        class="pulse"
                        style={format!("animation-delay: {:.2}s; animation-duration: {:.2}s;", p.delay, p.duration)}
                    />
                })
            }
        </svg>
    }
}

#[function_component(GeometricPattern)]
fn geometric_pattern() -> Html {
    html! {
        <svg class="hero-geometry" viewBox="0 0 200 240">
            <polygon points="100,20 120,60 80,60" class="pulse" />
            <polygon points="160,100 180,140 140,140" class="pulse" style="animation-delay: 0.5s;" />
            <polygon points="40,100 60,140 20,140" class="pulse" style="animation-delay: 1s;" />
            <polygon points="100,180 120,220 80,220" class="pulse" style="animation-delay: 1.5s;" />
        </svg>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-glow hero-glow--left"></div>
            <div class="hero-glow hero-glow--right"></div>
            <FloatingParticles />
            <GeometricPattern />
            <div class="hero-grid"></div>

            <div class="container hero-content">
                <AnimatedInView options={RevealOptions::once(0.0)} class="hero-stack">
                    <span class="badge badge--blue">{"✨ AI-Powered Innovation"}</span>
                    <h1 class="hero-title">
                        {"Engineering Digital Excellence with "}
                        <TypewriterText phrases={HERO_PHRASES} class="gradient-text" />
                    </h1>
                    <p class="hero-subtitle">
                        {"AVD Inovex is your strategic partner in crafting bespoke websites, powerful web applications, and cutting-edge AI-driven platforms that redefine industries."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#showcase" class="btn btn-primary btn-large">{"Explore Our Work"}</a>
                        <a href="#contact" class="btn btn-ghost btn-large">{"Contact Us →"}</a>
                    </div>
                </AnimatedInView>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    background: #1f2937;
                    overflow: hidden;
                }
                .hero-glow {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                    animation: pulse 4s ease-in-out infinite;
                }
                .hero-glow--left {
                    top: 5rem;
                    left: 2.5rem;
                    width: 20rem;
                    height: 20rem;
                    background: linear-gradient(90deg, rgba(59, 130, 246, 0.2), rgba(168, 85, 247, 0.2));
                }
                .hero-glow--right {
                    bottom: 8rem;
                    right: 5rem;
                    width: 24rem;
                    height: 24rem;
                    background: linear-gradient(90deg, rgba(6, 182, 212, 0.2), rgba(59, 130, 246, 0.2));
                    animation-delay: 1s;
                }
                .hero-particles {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    opacity: 0.2;
                }
                .hero-particles circle {
                    fill: #06b6d4;
                    filter: drop-shadow(0 0 3px #3b82f6);
                }
                .hero-geometry {
                    position: absolute;
                    top: 10%;
                    right: 5%;
                    width: 12rem;
                    opacity: 0.2;
                    fill: #8b5cf6;
                }
                .hero-grid {
                    position: absolute;
                    inset: 0;
                    opacity: 0.05;
                    background-image:
                        linear-gradient(rgba(59, 130, 246, 0.3) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(59, 130, 246, 0.3) 1px, transparent 1px);
                    background-size: 50px 50px;
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                }
                .hero-stack {
                    max-width: 64rem;
                    margin: 0 auto;
                }
                .hero-title {
                    font-size: clamp(3rem, 7vw, 4.5rem);
                    font-weight: 800;
                    line-height: 1.1;
                    letter-spacing: -0.02em;
                    color: #fff;
                    margin: 1.5rem 0;
                }
                .hero-subtitle {
                    font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                    color: #d1d5db;
                    max-width: 48rem;
                    margin: 0 auto 2.5rem;
                    line-height: 1.6;
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }
                "#}
            </style>
        </section>
    }
}
