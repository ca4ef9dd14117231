use yew::prelude::*;

use crate::components::feature_list::FeatureList;
use crate::components::section_heading::SectionHeading;
use crate::components::whatsapp::WhatsAppLink;
use crate::content::{Plan, PlanAccent, PLANS};
use crate::nav::sections::SectionId;

fn plan_card(plan: &'static Plan) -> Html {
    let (card_class, button_class) = match plan.accent {
        PlanAccent::Blue => ("card", "pill-button wide"),
        PlanAccent::Purple => ("card featured", "pill-button wide purple"),
    };

    html! {
        <div key={plan.title} class={card_class}>
            <div class="plan-header">
                <div>
                    <h3>{plan.title}</h3>
                    <p>{plan.subtitle}</p>
                </div>
                <div class="plan-price">{plan.price}</div>
            </div>
            <FeatureList items={&plan.features[..]} />
            <WhatsAppLink class={classes!(button_class)} />
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <section id={SectionId::Pricing.anchor()} class="page-section">
            <style>
                {r#"
                    .plan-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                        margin-bottom: 1.5rem;
                    }
                    .plan-header p {
                        margin-top: 0.5rem;
                    }
                    .plan-price {
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: #ffffff;
                    }
                    .card.featured {
                        background: linear-gradient(135deg, rgba(30, 64, 175, 0.7), rgba(107, 33, 168, 0.7));
                    }
                "#}
            </style>
            <div class="container">
                <SectionHeading title="Цены на услуги" subtitle="Прозрачные цены без скрытых платежей" />
                <div class="card-grid two narrow">
                    { for PLANS.iter().map(plan_card) }
                </div>
            </div>
        </section>
    }
}
