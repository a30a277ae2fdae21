use yew::prelude::*;

use crate::components::animated_in_view::AnimatedInView;
use crate::content::CAPABILITIES;
use crate::motion::reveal::Reveal;

#[function_component(CodePanel)]
fn code_panel() -> Html {
    html! {
        <div class="code-panel">
            <svg class="code-panel-circuit" viewBox="0 0 400 300" preserveAspectRatio="xMidYMid meet">
                <path d="M50,50 L150,50 L150,100 L250,100 L250,150 L350,150" class="pulse" />
                <path d="M50,250 L100,250 L100,200 L200,200 L200,100 L300,100" class="pulse" style="animation-delay: 0.5s;" />
                <path d="M350,50 L300,50 L300,150 L200,150 L200,250 L100,250" class="pulse" style="animation-delay: 1s;" />
            </svg>
            <div class="code-window">
                <div class="code-comment"><span class="status-dot"></span>{"// AI Innovation Engine"}</div>
                <div><span class="kw">{"const"}</span>{" "}<span class="ident">{"solution"}</span>{" = "}<span class="call">{"createAI"}</span>{"({"}</div>
                <div class="indent">{"problem: "}<span class="str">{"'your_challenge'"}</span>{","}</div>
                <div class="indent">{"model: "}<span class="str">{"'Custom-GPT'"}</span>{","}</div>
                <div class="indent">{"impact: "}<span class="str">{"'Exponential Growth'"}</span></div>
                <div>{"});"}</div>
            </div>
        </div>
    }
}

#[function_component(AiSpecialization)]
pub fn ai_specialization() -> Html {
    html! {
        <section id="ai-specialization" class="section section--dark">
            <div class="section-glow section-glow--top-right"></div>
            <div class="section-glow section-glow--bottom-left"></div>
            <div class="container ai-layout">
                <AnimatedInView>
                    <span class="badge badge--purple">{"Our Edge"}</span>
                    <h2 class="section-title">
                        {"Specialization in "}
                        <span class="gradient-text">{"Artificial Intelligence"}</span>
                    </h2>
                    <p class="ai-lead">
                        {"We don't just use AI; we innovate with it. Our dedicated AI/ML team pioneers solutions in natural language processing, computer vision, and predictive analytics to solve real-world challenges."}
                    </p>
                    <AnimatedInView class="capability-list">
                        {
                            for CAPABILITIES.iter().map(|capability| html! {
                                <div class="capability">
                                    <span class="capability-icon">{ capability.icon }</span>
                                    <span>{ capability.text }</span>
                                </div>
                            })
                        }
                    </AnimatedInView>
                </AnimatedInView>
                <AnimatedInView reveal={Reveal::FadeInUp}>
                    <CodePanel />
                </AnimatedInView>
            </div>

            <style>
                {r#"
                .ai-layout {
                    position: relative;
                    z-index: 10;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                    gap: 3rem;
                    align-items: center;
                }
                .ai-lead {
                    color: #d1d5db;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }
                .capability-list .reveal + .reveal {
                    margin-top: 1rem;
                }
                .capability {
                    display: flex;
                    align-items: center;
                    color: #d1d5db;
                    font-weight: 500;
                }
                .capability-icon {
                    padding: 0.5rem;
                    margin-right: 1rem;
                    border-radius: 0.5rem;
                    background: linear-gradient(90deg, #3b82f6, #a855f7);
                    transition: transform 0.3s;
                }
                .capability:hover .capability-icon {
                    transform: scale(1.1);
                }
                .code-panel {
                    position: relative;
                    overflow: hidden;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid #4b5563;
                    background: rgba(17, 24, 39, 0.5);
                }
                .code-panel-circuit {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    opacity: 0.3;
                    fill: none;
                    stroke: #06b6d4;
                    stroke-width: 2;
                }
                .code-window {
                    position: relative;
                    z-index: 10;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid #4b5563;
                    background: rgba(31, 41, 55, 0.8);
                    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
                    font-size: 0.875rem;
                    color: #d1d5db;
                    line-height: 1.9;
                }
                .code-comment { color: #22d3ee; display: flex; align-items: center; margin-bottom: 0.5rem; }
                .status-dot { width: 0.75rem; height: 0.75rem; border-radius: 50%; background: #4ade80; margin-right: 0.5rem; }
                .code-window .indent { margin-left: 1rem; }
                .code-window .kw { color: #c084fc; }
                .code-window .ident { color: #67e8f9; }
                .code-window .call { color: #facc15; }
                .code-window .str { color: #4ade80; }
                "#}
            </style>
        </section>
    }
}
