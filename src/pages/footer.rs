use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::config;
use crate::content::FOOTER_LINKS;
use crate::nav::sections::SectionId;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<SectionId>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #1e3a8a;
                        padding: 3rem 1rem;
                        color: #dbeafe;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .footer-grid h3 {
                        color: #93c5fd;
                        font-size: 1.25rem;
                        margin-bottom: 1.5rem;
                    }
                    .footer-grid ul {
                        list-style: none;
                        padding: 0;
                    }
                    .footer-grid li {
                        margin-bottom: 0.75rem;
                    }
                    .footer-link {
                        background: none;
                        border: none;
                        color: inherit;
                        font-size: 1rem;
                        padding: 0;
                        cursor: pointer;
                        transition: color 0.3s ease;
                    }
                    .footer-link:hover {
                        color: #93c5fd;
                    }
                    .copyright {
                        border-top: 1px solid #1e40af;
                        margin-top: 3rem;
                        padding-top: 2rem;
                        text-align: center;
                    }
                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <div class="brand">
                            <Icon kind={IconKind::Code} size={32} class={classes!("accent")} />
                            <h2>{config::BRAND}</h2>
                        </div>
                        <p>{"Профессиональная разработка веб-сайтов под ваши потребности и бюджет."}</p>
                    </div>
                    <div>
                        <h3>{"Услуги"}</h3>
                        <ul>
                            { for FOOTER_LINKS.iter().map(|link| {
                                let on_navigate = props.on_navigate.clone();
                                let target = link.target;
                                html! {
                                    <li key={link.label}>
                                        <button
                                            class="footer-link"
                                            onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(target))}
                                        >
                                            {link.label}
                                        </button>
                                    </li>
                                }
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h3>{"Контакты"}</h3>
                        <ul>
                            <li>{config::whatsapp_label()}</li>
                            <li>{format!("Адрес: {}", config::CITY)}</li>
                        </ul>
                    </div>
                </div>
                <div class="copyright">
                    <p>{format!("© {} {}. Все права защищены.", config::COPYRIGHT_YEAR, config::BRAND)}</p>
                </div>
            </div>
        </footer>
    }
}
