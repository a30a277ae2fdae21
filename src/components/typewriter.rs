use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::motion::typewriter::Typewriter;

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub phrases: &'static [&'static str],
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterProps) -> Html {
    let writer = use_state(|| Typewriter::new(props.phrases));

    {
        let current = (*writer).clone();
        let writer = writer.clone();
        use_effect_with_deps(
            move |current: &Typewriter| {
                let timeout = current.delay().map(|delay| {
                    let mut next = current.clone();
                    Timeout::new(delay, move || {
                        next.step();
                        writer.set(next);
                    })
                });

                move || drop(timeout)
            },
            current,
        );
    }

    html! {
        <span class={classes!("typewriter", props.class.clone())}>
            { writer.text() }
            <span class="typewriter-caret">{"|"}</span>
            <style>
                {r#"
                .typewriter-caret {
                    display: inline-block;
                    margin-left: 2px;
                    color: #22d3ee;
                    -webkit-text-fill-color: #22d3ee;
                    animation: caretBlink 1s steps(1) infinite;
                }
                @keyframes caretBlink {
                    50% { opacity: 0; }
                }
                "#}
            </style>
        </span>
    }
}
