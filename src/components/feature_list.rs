use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};

#[derive(Properties, PartialEq)]
pub struct FeatureListProps {
    pub items: &'static [&'static str],
}

#[function_component(FeatureList)]
pub fn feature_list(props: &FeatureListProps) -> Html {
    html! {
        <ul class="feature-list">
            { for props.items.iter().map(|item| html! {
                <li key={*item}>
                    <Icon kind={IconKind::ChevronDown} size={18} class={classes!("accent", "bullet")} />
                    <span>{*item}</span>
                </li>
            }) }
        </ul>
    }
}
