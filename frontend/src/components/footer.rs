use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::config;
use crate::models::Section;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="footer-logo">
                        <Icon kind={IconKind::Shield} />
                        <span>{config::BRAND_NAME}</span>
                    </div>
                    <p>
                        {"India's trusted platform for document verification. Eliminate fraud with AI-powered authenticity checks."}
                    </p>
                </div>

                <div>
                    <h4>{"Product"}</h4>
                    <ul>
                        { for Section::ALL.into_iter().map(|section| {
                            let on_navigate = props.on_navigate.clone();
                            html! {
                                <li
                                    key={section.anchor()}
                                    class="footer-link"
                                    onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(section))}
                                >
                                    {section.label()}
                                </li>
                            }
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Company"}</h4>
                    <ul>
                        <li class="footer-link">{"About Us"}</li>
                        <li class="footer-link">{"Careers"}</li>
                        <li class="footer-link">{"Blog"}</li>
                        <li class="footer-link">{"Contact"}</li>
                    </ul>
                </div>

                <div>
                    <h4>{"Contact Us"}</h4>
                    <ul class="contact-list">
                        <li><Icon kind={IconKind::Mail} size={16} />{config::CONTACT_EMAIL}</li>
                        <li><span class="contact-glyph">{"📞"}</span>{config::CONTACT_PHONE}</li>
                        <li><span class="contact-glyph">{"📍"}</span>{config::CONTACT_LOCATION}</li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", config::COPYRIGHT_YEAR, config::BRAND_NAME)}</p>
                <div class="legal-links">
                    <a href="#">{"Privacy Policy"}</a>
                    <a href="#">{"Terms of Service"}</a>
                    <a href="#">{"Security"}</a>
                </div>
            </div>
        </footer>
    }
}
