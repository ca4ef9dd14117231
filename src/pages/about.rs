use yew::prelude::*;

use crate::components::feature_list::FeatureList;
use crate::components::icons::{Icon, IconKind};
use crate::components::section_heading::SectionHeading;
use crate::components::whatsapp::WhatsAppLink;
use crate::content::{ABOUT_PRINCIPLES, PROFILE_FACTS};
use crate::nav::sections::SectionId;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={SectionId::About.anchor()} class="page-section">
            <style>
                {r#"
                    .avatar {
                        width: 8rem;
                        height: 8rem;
                        margin: 0 auto 1.5rem;
                        border-radius: 9999px;
                        background: rgba(29, 78, 216, 0.5);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .profile-card h3,
                    .profile-card > p {
                        text-align: center;
                    }
                    .profile-fact {
                        background: rgba(30, 64, 175, 0.5);
                        padding: 1rem;
                        border-radius: 0.5rem;
                        margin-top: 1rem;
                    }
                    .profile-fact h4 {
                        color: #93c5fd;
                        font-weight: 600;
                        margin: 0 0 0.5rem;
                    }
                    @media (max-width: 768px) {
                        .about-text {
                            order: 2;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <SectionHeading
                    title="Обо мне"
                    subtitle="Профессиональный веб-разработчик с опытом создания сайтов под заказ"
                />
                <div class="split">
                    <div class="about-text fade-in-left">
                        <h3>{"Мой подход к работе"}</h3>
                        <p>
                            {"Я специализируюсь на создании сайтов под заказ для клиентов с различными потребностями и бюджетами. "}
                            {"Моя цель — разработать для вас сайт, который не только выглядит привлекательно, "}
                            {"но и эффективно решает ваши бизнес-задачи."}
                        </p>
                        <p>{"В своей работе я придерживаюсь следующих принципов:"}</p>
                        <FeatureList items={&ABOUT_PRINCIPLES[..]} />
                        <WhatsAppLink class={classes!("pill-button")} />
                    </div>
                    <div class="card profile-card fade-in-right">
                        <div class="avatar">
                            <Icon kind={IconKind::User} size={64} class={classes!("accent")} />
                        </div>
                        <h3>{"Веб-разработчик"}</h3>
                        <p>{"Создаю современные, адаптивные и функциональные веб-сайты для клиентов из разных сфер бизнеса."}</p>
                        { for PROFILE_FACTS.iter().map(|(heading, value)| html! {
                            <div key={*heading} class="profile-fact">
                                <h4>{*heading}</h4>
                                <p>{*value}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
