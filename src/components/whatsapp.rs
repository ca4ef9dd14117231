use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct WhatsAppLinkProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(WhatsAppLink)]
pub fn whatsapp_link(props: &WhatsAppLinkProps) -> Html {
    html! {
        <a
            href={config::whatsapp_url()}
            target="_blank"
            rel="noopener noreferrer"
            class={classes!("whatsapp-link", props.class.clone())}
        >
            {config::whatsapp_label()}
        </a>
    }
}
