use yew::prelude::*;

use crate::components::feature_list::FeatureList;
use crate::components::section_heading::SectionHeading;
use crate::content::{DOMAIN_HELP, DOMAIN_ZONES};
use crate::nav::sections::SectionId;

#[function_component(Domain)]
pub fn domain() -> Html {
    html! {
        <section id={SectionId::Domain.anchor()} class="page-section tinted">
            <style>
                {r#"
                    .zone-row {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1rem;
                        margin-bottom: 1rem;
                        background: rgba(30, 64, 175, 0.5);
                        border-radius: 0.5rem;
                    }
                    .zone-name {
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #ffffff;
                    }
                    .zone-region {
                        color: #93c5fd;
                    }
                "#}
            </style>
            <div class="container">
                <SectionHeading
                    title="Доменные имена"
                    subtitle="Помогу выбрать и зарегистрировать идеальное доменное имя для вашего проекта"
                />
                <div class="split">
                    <div class="fade-in-left">
                        <h3>{"Что такое домен?"}</h3>
                        <p>
                            {"Доменное имя — это уникальный адрес вашего сайта в интернете, например, названиесайта.kz. "}
                            {"Хороший домен легко запоминается и отражает суть вашего бизнеса или проекта."}
                        </p>
                        <p>{"Я помогу вам:"}</p>
                        <FeatureList items={&DOMAIN_HELP[..]} />
                    </div>
                    <div class="card fade-in-right">
                        <h3>{"Популярные доменные зоны"}</h3>
                        { for DOMAIN_ZONES.iter().map(|(zone, region)| html! {
                            <div key={*zone} class="zone-row">
                                <span class="zone-name">{*zone}</span>
                                <span class="zone-region">{*region}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
