use web_sys::js_sys::Date;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::motion::marquee::{looped, tick_interval, FrameTimer, MarqueeAction, MarqueeClock};

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Endless horizontal row of cards. The cards are rendered twice and the row
/// slides left by one copy per loop; hovering freezes it in place.
#[function_component]
pub fn Marquee(props: &MarqueeProps) -> Html {
    let clock = use_reducer(|| MarqueeClock::new(config::MARQUEE_LOOP_MS));
    let timer = use_mut_ref(FrameTimer::default);
    let cards: Vec<Html> = props.children.iter().collect();

    {
        let clock = clock.clone();
        use_interval(
            move || {
                let elapsed = timer.borrow_mut().lap(Date::now());
                clock.dispatch(MarqueeAction::Tick(elapsed));
            },
            tick_interval(cards.len(), config::MARQUEE_FRAME_MS),
        );
    }

    if cards.is_empty() {
        return html! {};
    }

    let onmouseenter = {
        let clock = clock.clone();
        Callback::from(move |_: MouseEvent| clock.dispatch(MarqueeAction::Pause))
    };
    let onmouseleave = {
        let clock = clock.clone();
        Callback::from(move |_: MouseEvent| clock.dispatch(MarqueeAction::Resume))
    };

    html! {
        <div class={classes!("marquee", props.class.clone())} {onmouseenter} {onmouseleave}>
            <style>
                {r#"
                .marquee {
                    width: 100%;
                    overflow: hidden;
                    -webkit-mask-image: linear-gradient(to right, transparent, white 10%, white 90%, transparent);
                    mask-image: linear-gradient(to right, transparent, white 10%, white 90%, transparent);
                }
                .marquee-track {
                    display: flex;
                    flex-wrap: nowrap;
                    width: max-content;
                    will-change: transform;
                }
                .marquee-item {
                    flex-shrink: 0;
                    width: clamp(20rem, 35vw, 28rem);
                    margin: 0 1rem;
                }
                "#}
            </style>
            <div class="marquee-track" style={clock.transform()}>
                {
                    for looped(&cards).into_iter().map(|card| html! {
                        <div class="marquee-item">{ card }</div>
                    })
                }
            </div>
        </div>
    }
}
