use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::config;
use crate::models::Section;
use crate::scroll;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_open: bool,
    pub on_toggle: Callback<()>,
    pub on_navigate: Callback<Section>,
}

fn section_links(on_navigate: &Callback<Section>, class: &'static str) -> Html {
    html! {
        <>
        { for Section::ALL.into_iter().map(|section| {
            let on_navigate = on_navigate.clone();
            html! {
                <button
                    key={section.anchor()}
                    type="button"
                    class={class}
                    onclick={Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_navigate.emit(section);
                    })}
                >
                    {section.label()}
                </button>
            }
        }) }
        </>
    }
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { menu_open, on_toggle, on_navigate } = props;

    let toggle_menu = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    let to_top = Callback::from(|_: MouseEvent| scroll::scroll_to_top());

    html! {
        <nav class="top-nav">
            <style>
                {r#"
.top-nav {
    position: sticky;
    top: 0;
    z-index: 50;
    background: rgba(255, 255, 255, 0.95);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid #f1f5f9;
    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
}

.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
    height: 80px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    cursor: pointer;
    color: #2563eb;
    font-size: 1.5rem;
    font-weight: 700;
    letter-spacing: -0.02em;
    background: none;
    border: none;
}

.nav-logo .icon {
    fill: #2563eb;
}

.nav-links,
.nav-auth {
    display: flex;
    align-items: center;
    gap: 2rem;
}

.nav-link {
    background: none;
    border: none;
    cursor: pointer;
    font-size: 0.875rem;
    font-weight: 500;
    color: #475569;
    transition: color 0.2s ease;
}

.nav-link:hover,
.nav-signin:hover {
    color: #2563eb;
}

.nav-signin {
    background: none;
    border: none;
    cursor: pointer;
    font-size: 0.875rem;
    font-weight: 600;
    color: #334155;
}

.nav-cta {
    background: #fbbf24;
    color: #ffffff;
    font-size: 0.875rem;
    font-weight: 700;
    padding: 0.625rem 1.5rem;
    border: none;
    border-radius: 9999px;
    cursor: pointer;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    transition: all 0.2s ease;
}

.nav-cta:hover {
    background: #f59e0b;
    transform: translateY(-2px);
}

.burger-menu {
    display: none;
    background: none;
    border: none;
    padding: 0.5rem;
    color: #475569;
    cursor: pointer;
}

.mobile-menu {
    position: absolute;
    width: 100%;
    background: #ffffff;
    border-top: 1px solid #f1f5f9;
}

.mobile-menu-inner {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    padding: 1rem;
}

.mobile-link {
    text-align: left;
    background: none;
    border: none;
    font-weight: 500;
    color: #475569;
    cursor: pointer;
}

.mobile-cta {
    width: 100%;
    background: #fbbf24;
    color: #ffffff;
    font-weight: 700;
    padding: 0.5rem 1rem;
    border: none;
    border-radius: 8px;
}

@media (max-width: 768px) {
    .nav-links,
    .nav-auth {
        display: none;
    }

    .burger-menu {
        display: block;
    }
}

@media (min-width: 769px) {
    .mobile-menu {
        display: none;
    }
}
                "#}
            </style>
            <div class="nav-content">
                <button type="button" class="nav-logo" onclick={to_top}>
                    <Icon kind={IconKind::Shield} size={32} />
                    <span>{config::BRAND_NAME}</span>
                </button>

                <div class="nav-links">
                    { section_links(on_navigate, "nav-link") }
                </div>

                <div class="nav-auth">
                    <button type="button" class="nav-signin">{"Sign In"}</button>
                    <button type="button" class="nav-cta">{"Get Started"}</button>
                </div>

                <button type="button" class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <Icon kind={if *menu_open { IconKind::Close } else { IconKind::Menu }} />
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            <div class="mobile-menu-inner">
                                { section_links(on_navigate, "mobile-link") }
                                <hr />
                                <button type="button" class="mobile-link">{"Sign In"}</button>
                                <button type="button" class="mobile-cta">{"Get Started"}</button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render_nav(menu_open: bool) -> String {
        yew::ServerRenderer::<Nav>::with_props(move || NavProps {
            menu_open,
            on_toggle: Callback::from(|_: ()| ()),
            on_navigate: Callback::from(|_: Section| ()),
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn mobile_panel_only_exists_while_open() {
        let closed = render_nav(false).await;
        assert!(!closed.contains("class=\"mobile-menu\""));
        assert_eq!(closed.matches("class=\"mobile-link\"").count(), 0);

        let open = render_nav(true).await;
        assert!(open.contains("class=\"mobile-menu\""));
        // four section links plus "Sign In"
        assert_eq!(open.matches("class=\"mobile-link\"").count(), 5);
    }

    #[tokio::test]
    async fn desktop_links_cover_every_section() {
        let html = render_nav(false).await;
        assert_eq!(html.matches("class=\"nav-link\"").count(), Section::ALL.len());
        for section in Section::ALL {
            assert!(html.contains(section.label()));
        }
    }
}
