use yew::prelude::*;

use crate::components::icons::Icon;
use crate::components::section_heading::SectionHeading;
use crate::content::SERVICE_CARDS;
use crate::nav::sections::SectionId;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={SectionId::Services.anchor()} class="page-section tinted">
            <div class="container">
                <SectionHeading
                    title="Мои услуги"
                    subtitle="Я предлагаю полный спектр услуг по созданию и поддержке веб-сайтов"
                />
                <div class="card-grid three">
                    { for SERVICE_CARDS.iter().map(|card| html! {
                        <div key={card.title} class="card">
                            <div class="icon-badge">
                                <Icon kind={card.icon} size={32} class={classes!("accent")} />
                            </div>
                            <h3>{card.title}</h3>
                            <p>{card.text}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
