use yew::prelude::*;

use crate::nav::sections::SectionId;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<SectionId>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let go_to = |section: SectionId| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(section))
    };

    html! {
        <section id={SectionId::Home.anchor()} class="hero">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 5rem 1rem;
                        text-align: center;
                    }
                    .hero h1 {
                        font-size: 3.75rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .hero-subtitle {
                        font-size: 1.5rem;
                        color: #dbeafe;
                        max-width: 48rem;
                        margin: 0 auto 2rem;
                    }
                    .hero-actions {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .hero-outline {
                        background: transparent;
                        border: 2px solid #93c5fd;
                    }
                    .hero-outline:hover {
                        border-color: #60a5fa;
                    }
                    @media (max-width: 768px) {
                        .hero h1 {
                            font-size: 2.25rem;
                        }
                        .hero-subtitle {
                            font-size: 1.25rem;
                        }
                        .hero-actions {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
            <div class="container fade-in-up">
                <h1 class="gradient-text">{"Создание сайтов под ваши интересы"}</h1>
                <p class="hero-subtitle">
                    {"Разработаю уникальный сайт, который идеально подойдет под ваши потребности и мои возможности"}
                </p>
                <div class="hero-actions">
                    <button class="pill-button" onclick={go_to(SectionId::Services)}>
                        {"Узнать больше"}
                    </button>
                    <button class="pill-button hero-outline" onclick={go_to(SectionId::Pricing)}>
                        {"Посмотреть цены"}
                    </button>
                </div>
            </div>
        </section>
    }
}
