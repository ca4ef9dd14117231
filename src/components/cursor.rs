use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::nav::state::PointerPosition;

#[derive(Properties, PartialEq)]
pub struct CursorProps {
    pub pointer: PointerPosition,
}

pub fn cursor_style(pointer: PointerPosition) -> String {
    format!("left: {}px; top: {}px;", pointer.x, pointer.y)
}

#[function_component(Cursor)]
pub fn cursor(props: &CursorProps) -> Html {
    html! {
        <div class="custom-cursor" style={cursor_style(props.pointer)}>
            <style>
                {r#"
                    .custom-cursor {
                        position: fixed;
                        pointer-events: none;
                        z-index: 9999;
                        color: #ffffff;
                        transform: translate(-2px, -2px);
                        transition: transform 0.1s ease-out;
                    }
                    @media (max-width: 768px) {
                        .custom-cursor {
                            display: none;
                        }
                    }
                "#}
            </style>
            <Icon kind={IconKind::MousePointer} size={24} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_sits_at_pointer() {
        let style = cursor_style(PointerPosition { x: 120.0, y: 48.5 });
        assert_eq!(style, "left: 120px; top: 48.5px;");
    }
}
