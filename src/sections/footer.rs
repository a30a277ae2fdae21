use chrono::Datelike;
use yew::prelude::*;

use crate::content::{COMPANY, SOCIAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <h3>{ COMPANY }</h3>
                    <p>{ format!("© {} All Rights Reserved.", year) }</p>
                </div>
                <div class="footer-social">
                    {
                        for SOCIAL_LINKS.iter().map(|social| html! {
                            <a href={social.href} class="footer-social-link" aria-label={social.label}>
                                { social.icon }
                            </a>
                        })
                    }
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #111827;
                    border-top: 1px solid #374151;
                }
                .footer-inner {
                    padding-top: 3rem;
                    padding-bottom: 3rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 2rem;
                    justify-content: space-between;
                    align-items: center;
                }
                .footer-brand h3 {
                    margin: 0 0 0.5rem;
                    color: #fff;
                    font-size: 1.5rem;
                }
                .footer-brand p {
                    margin: 0;
                    color: #9ca3af;
                }
                .footer-social {
                    display: flex;
                    gap: 1.5rem;
                }
                .footer-social-link {
                    min-width: 1.5rem;
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                    text-align: center;
                    text-decoration: none;
                    font-weight: 700;
                    color: #9ca3af;
                    background: #1f2937;
                    transition: all 0.3s;
                }
                .footer-social-link:hover {
                    color: #fff;
                    background: linear-gradient(90deg, #3b82f6, #9333ea);
                    transform: scale(1.1);
                }
                "#}
            </style>
        </footer>
    }
}
