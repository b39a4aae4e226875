use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::components::icon::{Icon, IconKind};
use crate::models::ToolMode;

fn tab_icon(mode: ToolMode) -> IconKind {
    match mode {
        ToolMode::Upload => IconKind::UploadCloud,
        ToolMode::Scan => IconKind::QrCode,
        ToolMode::ManualId => IconKind::Keyboard,
    }
}

pub fn tab_classes(mode: ToolMode, active: ToolMode) -> Classes {
    classes!("tool-tab", (mode == active).then_some("active"))
}

#[function_component(UploadPanel)]
fn upload_panel() -> Html {
    html! {
        <div class="tool-panel upload-panel" data-tool={ToolMode::Upload.key()}>
            <div class="panel-icon">
                <Icon kind={IconKind::UploadCloud} size={32} />
            </div>
            <h4>{"Drop your document here"}</h4>
            <p class="panel-hint">{"Supports PDF, JPG, PNG (Max 10MB)"}</p>
            <button type="button" class="outline-button">{"Browse Files"}</button>
        </div>
    }
}

#[function_component(ScanPanel)]
fn scan_panel() -> Html {
    html! {
        <div class="tool-panel scan-panel" data-tool={ToolMode::Scan.key()}>
            <div class="qr-frame">
                <Icon kind={IconKind::QrCode} size={48} />
            </div>
            <p>{"Allow camera access to scan verification QR codes"}</p>
            <button type="button" class="solid-button">{"Enable Camera"}</button>
        </div>
    }
}

#[function_component(ManualIdPanel)]
fn manual_id_panel() -> Html {
    // Local to this panel; switching tabs unmounts it and drops the text.
    let document_id = use_state(String::new);

    let oninput = {
        let document_id = document_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            document_id.set(input.value());
        })
    };

    html! {
        <div class="tool-panel id-panel" data-tool={ToolMode::ManualId.key()}>
            <h4>{"Enter Unique Document ID"}</h4>
            <div class="id-row">
                <input
                    type="text"
                    placeholder="e.g. 8X92-K291-00Z"
                    value={(*document_id).clone()}
                    {oninput}
                />
                <button type="button" class="solid-button">{"Verify"}</button>
            </div>
            <p class="panel-hint">{"The ID is usually located at the bottom of the certificate."}</p>
        </div>
    }
}

/// Exactly one panel per mode; the others are not mounted at all.
fn tool_panel(mode: ToolMode) -> Html {
    match mode {
        ToolMode::Upload => html! { <UploadPanel /> },
        ToolMode::Scan => html! { <ScanPanel /> },
        ToolMode::ManualId => html! { <ManualIdPanel /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct VerifyToolProps {
    pub active: ToolMode,
    pub on_select: Callback<ToolMode>,
}

#[function_component(VerifyTool)]
pub fn verify_tool(props: &VerifyToolProps) -> Html {
    let active = props.active;

    html! {
        <div class="verify-tool">
            <style>
                {r#"
.verify-tool {
    max-width: 48rem;
    margin: 0 auto;
    background: #ffffff;
    border: 1px solid #f1f5f9;
    border-radius: 12px;
    box-shadow: 0 20px 25px -5px rgba(15, 23, 42, 0.1);
    overflow: hidden;
}

.tool-tabs {
    display: flex;
    border-bottom: 1px solid #f1f5f9;
}

.tool-tab {
    flex: 1;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 1rem 0;
    font-size: 0.875rem;
    font-weight: 600;
    border: none;
    cursor: pointer;
    background: #f8fafc;
    color: #475569;
    transition: background 0.2s ease;
}

.tool-tab:hover {
    background: #f1f5f9;
}

.tool-tab.active {
    background: #2563eb;
    color: #ffffff;
}

.tool-body {
    padding: 2rem;
}

.tool-panel {
    height: 16rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
}

.upload-panel {
    border: 2px dashed #93c5fd;
    border-radius: 12px;
    background: rgba(239, 246, 255, 0.3);
    padding: 1.5rem;
}

.panel-icon {
    width: 4rem;
    height: 4rem;
    border-radius: 50%;
    background: #ffffff;
    color: #94a3b8;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 1rem;
}

.tool-panel h4 {
    font-size: 1.125rem;
    font-weight: 600;
    color: #334155;
    margin: 0 0 0.25rem;
}

.panel-hint {
    font-size: 0.75rem;
    color: #94a3b8;
    margin: 0.5rem 0 1.5rem;
}

.qr-frame {
    width: 8rem;
    height: 8rem;
    background: #f1f5f9;
    border: 2px solid #e2e8f0;
    border-radius: 8px;
    color: #94a3b8;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 1rem;
}

.id-row {
    display: flex;
    gap: 0.5rem;
    width: 100%;
    max-width: 28rem;
    margin-top: 0.75rem;
}

.id-row input {
    flex: 1;
    border: 1px solid #cbd5e1;
    border-radius: 8px;
    padding: 0.75rem 1rem;
}

.id-row input:focus {
    outline: none;
    box-shadow: 0 0 0 2px #3b82f6;
}

.outline-button {
    background: #ffffff;
    border: 1px solid #2563eb;
    color: #2563eb;
    font-weight: 600;
    padding: 0.5rem 1.5rem;
    border-radius: 8px;
    cursor: pointer;
}

.solid-button {
    background: #2563eb;
    color: #ffffff;
    font-weight: 600;
    padding: 0.5rem 1.5rem;
    border: none;
    border-radius: 8px;
    cursor: pointer;
}

.solid-button:hover {
    background: #1d4ed8;
}

.fee-note {
    background: #f8fafc;
    border-top: 1px solid #f1f5f9;
    padding: 1rem;
    text-align: center;
}

.fee-note .fee {
    font-size: 0.875rem;
    font-weight: 700;
    color: #334155;
    margin: 0;
}

.fee-note .fee-sub {
    font-size: 0.75rem;
    color: #64748b;
    margin: 0.25rem 0 0;
}

.fee-action {
    padding: 1rem;
}

.fee-action button {
    width: 100%;
    background: #fde68a;
    color: #92400e;
    font-weight: 700;
    padding: 1rem 0;
    border: none;
    border-radius: 8px;
    cursor: pointer;
}

.fee-action button:hover {
    background: #fcd34d;
}
                "#}
            </style>
            <div class="tool-tabs" role="tablist">
                { for ToolMode::ALL.into_iter().map(|mode| {
                    let on_select = props.on_select.clone();
                    html! {
                        <button
                            key={mode.key()}
                            type="button"
                            role="tab"
                            aria-selected={(mode == active).to_string()}
                            class={tab_classes(mode, active)}
                            onclick={Callback::from(move |_: MouseEvent| on_select.emit(mode))}
                        >
                            <Icon kind={tab_icon(mode)} size={16} />
                            {mode.label()}
                        </button>
                    }
                }) }
            </div>

            <div class="tool-body">
                { tool_panel(active) }
            </div>

            <div class="fee-note">
                <p class="fee">{"One-time verification fee: ₹1"}</p>
                <p class="fee-sub">{"Instant results • 100% secure • No data stored"}</p>
            </div>

            <div class="fee-action">
                <button type="button">{"Verify Document (₹1)"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_tab_is_active() {
        for active in ToolMode::ALL {
            let lit: Vec<ToolMode> = ToolMode::ALL
                .into_iter()
                .filter(|mode| tab_classes(*mode, active).contains("active"))
                .collect();
            assert_eq!(lit, vec![active]);
        }
    }

    async fn render_tool(mode: ToolMode) -> String {
        yew::ServerRenderer::<VerifyTool>::with_props(move || VerifyToolProps {
            active: mode,
            on_select: Callback::from(|_: ToolMode| ()),
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn renders_only_the_active_panel() {
        for mode in ToolMode::ALL {
            let html = render_tool(mode).await;
            assert_eq!(html.matches("data-tool=").count(), 1, "{:?}: {}", mode, html);
            assert!(html.contains(&format!("data-tool=\"{}\"", mode.key())));
        }
    }

    #[tokio::test]
    async fn scan_tab_shows_camera_prompt_only() {
        let html = render_tool(ToolMode::Scan).await;
        assert!(html.contains("Enable Camera"));
        assert!(!html.contains("Browse Files"));
        assert!(!html.contains("8X92-K291-00Z"));
    }

    #[tokio::test]
    async fn upload_and_id_panels_carry_their_own_controls() {
        let upload = render_tool(ToolMode::Upload).await;
        assert!(upload.contains("Browse Files"));
        assert!(!upload.contains("Enable Camera"));

        let manual = render_tool(ToolMode::ManualId).await;
        assert!(manual.contains("8X92-K291-00Z"));
        assert!(!manual.contains("Browse Files"));
        assert!(!manual.contains("Enable Camera"));
    }

    #[test]
    fn scan_tab_uses_qr_icon() {
        assert_eq!(tab_icon(ToolMode::Scan), IconKind::QrCode);
        assert_eq!(tab_icon(ToolMode::Upload), IconKind::UploadCloud);
        assert_eq!(tab_icon(ToolMode::ManualId), IconKind::Keyboard);
    }
}
