use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::config;
use crate::nav::sections::{SectionId, SECTIONS};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active: SectionId,
    pub menu_open: bool,
    pub on_navigate: Callback<SectionId>,
    pub on_toggle_menu: Callback<()>,
}

fn nav_click(on_navigate: &Callback<SectionId>, section: SectionId) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_navigate.emit(section);
    })
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { active, menu_open, on_navigate, on_toggle_menu } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    html! {
        <header class="site-header">
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        width: 100%;
                        top: 0;
                        z-index: 50;
                        background: rgba(30, 58, 138, 0.8);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                        transition: all 0.3s ease;
                    }
                    .header-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        animation: fadeIn 0.6s ease-out;
                    }
                    .brand h1 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin: 0;
                    }
                    .desktop-nav {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-item {
                        position: relative;
                        background: none;
                        border: none;
                        color: #ffffff;
                        font-size: 1rem;
                        padding: 0.25rem 0.5rem;
                        cursor: pointer;
                        transition: color 0.3s ease;
                    }
                    .nav-item:hover,
                    .nav-item.active {
                        color: #93c5fd;
                    }
                    .nav-underline {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        width: 100%;
                        height: 2px;
                        background: #93c5fd;
                        animation: expandWidth 0.3s ease-out;
                    }
                    .burger-button {
                        display: none;
                        background: none;
                        border: none;
                        color: #ffffff;
                        cursor: pointer;
                    }
                    .mobile-nav {
                        display: none;
                        background: #1e40af;
                        animation: slideDown 0.3s ease-out;
                    }
                    .mobile-nav-items {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem;
                    }
                    .mobile-nav-item {
                        background: none;
                        border: none;
                        border-radius: 0.25rem;
                        color: #ffffff;
                        text-align: left;
                        font-size: 1rem;
                        padding: 0.5rem 1rem;
                        transition: background 0.3s ease;
                    }
                    .mobile-nav-item:hover,
                    .mobile-nav-item.active {
                        background: #1d4ed8;
                    }
                    .mobile-nav-item.active {
                        color: #93c5fd;
                    }
                    @media (max-width: 768px) {
                        .desktop-nav {
                            display: none;
                        }
                        .burger-button,
                        .mobile-nav {
                            display: block;
                        }
                    }
                "#}
            </style>
            <div class="header-content">
                <div class="brand">
                    <Icon kind={IconKind::Code} size={32} class={classes!("accent")} />
                    <h1>{config::BRAND}</h1>
                </div>

                <nav class="desktop-nav">
                    {
                        SECTIONS.iter().map(|section| {
                            let is_active = *section == *active;
                            html! {
                                <button
                                    key={section.anchor()}
                                    class={classes!("nav-item", is_active.then(|| "active"))}
                                    onclick={nav_click(on_navigate, *section)}
                                >
                                    {section.label()}
                                    if is_active {
                                        <span class="nav-underline"></span>
                                    }
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </nav>

                <button class="burger-button" onclick={toggle_menu}>
                    if *menu_open {
                        <Icon kind={IconKind::Close} size={24} />
                    } else {
                        <Icon kind={IconKind::Menu} size={24} />
                    }
                </button>
            </div>

            if *menu_open {
                <div class="mobile-nav">
                    <div class="mobile-nav-items">
                        {
                            SECTIONS.iter().map(|section| html! {
                                <button
                                    key={section.anchor()}
                                    class={classes!("mobile-nav-item", (*section == *active).then(|| "active"))}
                                    onclick={nav_click(on_navigate, *section)}
                                >
                                    {section.label()}
                                </button>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            }
        </header>
    }
}
