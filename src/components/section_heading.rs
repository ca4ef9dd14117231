use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <h2 class="gradient-text">{props.title.clone()}</h2>
            <p>{props.subtitle.clone()}</p>
        </div>
    }
}
