use yew::prelude::*;

use crate::config;
use crate::hooks::use_in_view;
use crate::motion::reveal::{stagger_delay, transition_style, Reveal, RevealOptions, Visibility};

#[derive(Properties, PartialEq)]
pub struct AnimatedInViewProps {
    #[prop_or(Reveal::Stagger)]
    pub reveal: Reveal,
    #[prop_or_default]
    pub options: RevealOptions,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Plays an entrance animation once its container scrolls into view.
///
/// `Reveal::FadeInUp` moves the whole container, `Reveal::Stagger` wraps
/// every child and delays each one a little more than the previous.
#[function_component]
pub fn AnimatedInView(props: &AnimatedInViewProps) -> Html {
    let node = use_node_ref();
    let visibility = if use_in_view(node.clone(), props.options) {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };

    match props.reveal {
        Reveal::FadeInUp => html! {
            <div
                ref={node}
                class={classes!("reveal", visibility.class(), props.class.clone())}
                style={transition_style(0.0)}
            >
                { for props.children.iter() }
            </div>
        },
        Reveal::Stagger => html! {
            <div ref={node} class={classes!("reveal-group", props.class.clone())}>
                {
                    for props.children.iter().enumerate().map(|(index, child)| html! {
                        <div
                            class={classes!("reveal", visibility.class())}
                            style={transition_style(stagger_delay(index))}
                        >
                            { child }
                        </div>
                    })
                }
            </div>
        },
    }
}

/// Shared rules for the hidden and visible reveal states.
pub fn stylesheet() -> String {
    format!(
        r#"
        .reveal {{
            will-change: opacity, transform;
        }}
        .reveal.is-hidden {{
            opacity: 0;
            transform: translateY({offset}px);
        }}
        .reveal.is-visible {{
            opacity: 1;
            transform: translateY(0);
        }}
        @media (prefers-reduced-motion: reduce) {{
            .reveal {{
                transition: none !important;
            }}
        }}
        "#,
        offset = config::REVEAL_OFFSET_PX,
    )
}
