use log::info;
use yew::prelude::*;

use crate::components::cards::{FeatureCard, PricingCard, StepCard};
use crate::components::footer::Footer;
use crate::components::icon::{Icon, IconKind};
use crate::components::nav::Nav;
use crate::components::verify_tool::VerifyTool;
use crate::config;
use crate::models::{Plan, Section, ToolMode};
use crate::pages::content::{self, FEATURES, STEPS};
use crate::pages::landing_state::{LandingAction, LandingState};
use crate::scroll;

#[derive(Properties, PartialEq)]
struct HeroProps {
    on_navigate: Callback<Section>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let verify_now = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::Verify))
    };

    html! {
        <header class="hero">
            <div class="hero-dots"></div>
            <div class="container hero-content">
                <div class="hero-copy">
                    <div class="hero-badge">
                        <Icon kind={IconKind::Shield} size={12} />
                        {" India's Trusted Verification Platform"}
                    </div>
                    <h1>
                        {"Stop Certificate Fraud."}<br />
                        <span class="gradient-text">{"Verify Instantly."}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Issue tamper-proof offer letters, certificates, and documents with unique verification codes. Build trust with instant authenticity checks."}
                    </p>
                    <div class="hero-cta-group">
                        <button type="button" class="hero-cta">{"Start Free Trial"}</button>
                        <button type="button" class="hero-secondary" onclick={verify_now}>
                            {"Verify a Document"}
                        </button>
                    </div>
                    <div class="hero-ticks">
                        { for ["AI Powered Detection", "Unique QR Codes", "Bank-Grade Security"].into_iter().map(|tick| html! {
                            <span key={tick}><Icon kind={IconKind::Check} size={16} />{tick}</span>
                        }) }
                    </div>
                </div>

                <div class="hero-visual">
                    <div class="mock-frame">
                        <div class="mock-card">
                            <div class="mock-head">
                                <div class="mock-doc">
                                    <div class="line"></div>
                                    <div class="line"></div>
                                    <div class="line short"></div>
                                    <div class="seal"><Icon kind={IconKind::Check} size={16} /></div>
                                </div>
                                <div class="mock-title">
                                    <div class="bar wide"></div>
                                    <div class="bar"></div>
                                </div>
                                <Icon kind={IconKind::Shield} size={48} class={classes!("mock-shield")} />
                            </div>
                            <div class="mock-row">
                                <span>{"Document ID"}</span>
                                <span class="mono">{"#8X92-K291"}</span>
                            </div>
                            <div class="mock-row">
                                <span>{"Status"}</span>
                                <span class="verified-pill">{"VERIFIED"}</span>
                            </div>
                        </div>
                    </div>
                    <div class="speed-chip">
                        <div class="chip-icon"><Icon kind={IconKind::Shield} size={20} /></div>
                        <div>
                            <p class="chip-label">{"Verification Speed"}</p>
                            <p class="chip-value">{"< 1 Second"}</p>
                        </div>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct PricingSectionProps {
    selected: Plan,
    on_select: Callback<Plan>,
}

#[function_component(PricingSection)]
fn pricing_section(props: &PricingSectionProps) -> Html {
    html! {
        <section id={Section::Pricing.anchor()} class="section muted">
            <div class="container centered">
                <h2>{"Simple, Transparent "}<span class="teal">{"Pricing"}</span></h2>
                <p class="section-lead">{"Choose the plan that fits your needs."}</p>

                <div class="pricing-grid">
                    { for Plan::ALL.into_iter().map(|plan| html! {
                        <PricingCard
                            key={plan.label()}
                            offer={content::offer(plan)}
                            selected={plan == props.selected}
                            on_select={props.on_select.clone()}
                        />
                    }) }
                </div>

                <div class="individual-card">
                    <div class="individual-stripe"></div>
                    <h3>{"Individual Verification"}</h3>
                    <p class="individual-lead">{"For students, employees, or anyone who needs to verify a document"}</p>
                    <div class="individual-price">
                        <span class="amount">{"₹1"}</span>
                        <span class="period">{"per document"}</span>
                    </div>
                    <p class="individual-copy">
                        {"Upload any certificate, offer letter, or official document and verify its authenticity instantly."}
                    </p>
                    <button type="button" class="teal-button">{"Verify a Document Now"}</button>
                </div>
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let state = use_reducer(LandingState::default);

    // Deep links like /#pricing land on their section, everything else at the top.
    use_effect_with_deps(
        move |_| {
            scroll::restore_anchor();
            || ()
        },
        (),
    );

    let on_toggle_menu = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(LandingAction::ToggleMenu))
    };

    let on_navigate = {
        let state = state.clone();
        Callback::from(move |section: Section| {
            info!("Navigating to {}", section.label());
            state.dispatch(LandingAction::Navigate(section));
            scroll::scroll_to_section(section);
        })
    };

    let on_select_plan = {
        let state = state.clone();
        Callback::from(move |plan: Plan| {
            info!("Plan selected: {}", plan);
            state.dispatch(LandingAction::SelectPlan(plan));
        })
    };

    let on_select_tool = {
        let state = state.clone();
        Callback::from(move |mode: ToolMode| state.dispatch(LandingAction::SelectTool(mode)))
    };

    html! {
        <div class="landing-page">
            <style>
                {LANDING_CSS}
            </style>

            <Nav
                menu_open={state.menu_open}
                on_toggle={on_toggle_menu}
                on_navigate={on_navigate.clone()}
            />

            <Hero on_navigate={on_navigate.clone()} />

            <section id={Section::Features.anchor()} class="section muted">
                <div class="container centered">
                    <h2>{"Everything You Need to "}<span class="teal">{"Eliminate Fraud"}</span></h2>
                    <p class="section-lead">
                        {"Powerful features designed to protect your organization and build trust with every document you issue."}
                    </p>
                    <div class="features-grid">
                        { for FEATURES.iter().map(|f| html! {
                            <FeatureCard key={f.title} icon={f.icon} title={f.title} desc={f.desc} />
                        }) }
                    </div>
                </div>
            </section>

            <section id={Section::HowItWorks.anchor()} class="section">
                <div class="container">
                    <div class="centered">
                        <h2>{"How "}<span class="blue">{config::BRAND_NAME}</span>{" Works"}</h2>
                        <p class="section-lead">{"Four simple steps to eliminate document fraud and build trust."}</p>
                    </div>
                    <div class="steps-row">
                        <div class="steps-line"></div>
                        { for STEPS.iter().map(|s| html! {
                            <StepCard key={s.number} number={s.number} icon={s.icon} title={s.title} desc={s.desc} />
                        }) }
                    </div>
                </div>
            </section>

            <PricingSection selected={state.selected_plan} on_select={on_select_plan} />

            <section id={Section::Verify.anchor()} class="section roomy">
                <div class="container">
                    <div class="centered">
                        <h2>{"Verify a Document "}<span class="teal">{"Instantly"}</span></h2>
                        <p class="section-lead">{"Check if any certificate or offer letter is authentic. Results in seconds."}</p>
                    </div>
                    <VerifyTool active={state.active_tool} on_select={on_select_tool} />
                    <div class="trust-row">
                        { for ["Bank-Grade Encryption", "No Data Stored", "Instant Results"].into_iter().map(|label| html! {
                            <span key={label}><span class="dot"></span>{label}</span>
                        }) }
                    </div>
                </div>
            </section>

            <Footer {on_navigate} />
        </div>
    }
}

const LANDING_CSS: &str = r#"
.landing-page {
    font-family: 'Inter', system-ui, -apple-system, sans-serif;
    color: #1e293b;
    background: #f8fafc;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    overflow-x: hidden;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.centered {
    text-align: center;
}

.section {
    padding: 5rem 0;
    background: #ffffff;
}

.section.muted {
    background: #f8fafc;
}

.section.roomy {
    padding: 6rem 0;
}

.section h2 {
    font-size: 2.25rem;
    font-weight: 700;
    color: #0f172a;
    margin: 0 0 1rem;
}

.section-lead {
    color: #475569;
    max-width: 42rem;
    margin: 0 auto 4rem;
}

.teal {
    color: #14b8a6;
}

.blue {
    color: #2563eb;
}

/* Hero */
.hero {
    position: relative;
    padding: 6rem 0 8rem;
    background: #ffffff;
    overflow: hidden;
}

.hero-dots {
    position: absolute;
    inset: 0;
    opacity: 0.03;
    background-image: radial-gradient(#444 1px, transparent 1px);
    background-size: 24px 24px;
}

.hero-content {
    position: relative;
    z-index: 10;
    display: flex;
    align-items: center;
    gap: 5rem;
}

.hero-copy,
.hero-visual {
    flex: 1;
}

.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    background: #eff6ff;
    border: 1px solid #dbeafe;
    color: #2563eb;
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}

.hero h1 {
    font-size: 3.75rem;
    font-weight: 800;
    line-height: 1.15;
    color: #0f172a;
    margin: 2rem 0;
}

.gradient-text {
    background: linear-gradient(to right, #2563eb, #2dd4bf);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-subtitle {
    font-size: 1.125rem;
    line-height: 1.6;
    color: #475569;
    max-width: 42rem;
}

.hero-cta-group {
    display: flex;
    gap: 1rem;
    margin-top: 2rem;
}

.hero-cta {
    background: #fbbf24;
    color: #ffffff;
    font-weight: 700;
    padding: 0.875rem 2rem;
    border: none;
    border-radius: 8px;
    cursor: pointer;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    transition: all 0.2s ease;
}

.hero-cta:hover {
    background: #f59e0b;
    transform: translateY(-4px);
}

.hero-secondary {
    background: #ffffff;
    color: #1e293b;
    font-weight: 700;
    padding: 0.75rem 2rem;
    border: 2px solid #1e293b;
    border-radius: 8px;
    cursor: pointer;
}

.hero-secondary:hover {
    background: #f8fafc;
}

.hero-ticks {
    display: flex;
    gap: 1.5rem;
    padding-top: 1.5rem;
    font-size: 0.75rem;
    font-weight: 600;
    color: #64748b;
}

.hero-ticks span {
    display: flex;
    align-items: center;
    gap: 0.375rem;
}

.hero-ticks .icon {
    color: #22c55e;
}

.hero-visual {
    position: relative;
}

.mock-frame {
    position: relative;
    height: 400px;
    border-radius: 16px;
    padding: 3rem;
    background: linear-gradient(to bottom right, #2dd4bf, #10b981);
    box-shadow: 0 25px 50px -12px #bfdbfe;
    display: flex;
    align-items: center;
    justify-content: center;
}

.mock-card {
    width: 100%;
    max-width: 28rem;
    background: rgba(255, 255, 255, 0.1);
    backdrop-filter: blur(4px);
    border: 1px solid rgba(255, 255, 255, 0.2);
    border-radius: 12px;
    padding: 1.5rem;
}

.mock-head {
    display: flex;
    align-items: flex-start;
    gap: 1rem;
    margin-bottom: 1.5rem;
}

.mock-doc {
    width: 4rem;
    height: 5rem;
    background: #ffffff;
    border-radius: 8px;
    padding: 0.5rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
}

.mock-doc .line {
    width: 100%;
    height: 4px;
    background: #e2e8f0;
    margin-bottom: 4px;
}

.mock-doc .line.short {
    width: 66%;
}

.mock-doc .seal {
    margin-top: 0.5rem;
    width: 2rem;
    height: 2rem;
    border: 2px solid #22c55e;
    border-radius: 50%;
    color: #22c55e;
    display: flex;
    align-items: center;
    justify-content: center;
}

.mock-title {
    flex: 1;
}

.mock-title .bar {
    height: 0.75rem;
    width: 50%;
    background: rgba(255, 255, 255, 0.5);
    border-radius: 4px;
    margin-bottom: 0.5rem;
}

.mock-title .bar.wide {
    height: 1rem;
    width: 75%;
    background: rgba(255, 255, 255, 0.8);
}

.mock-shield {
    color: #fcd34d;
}

.mock-row {
    display: flex;
    justify-content: space-between;
    align-items: center;
    background: rgba(255, 255, 255, 0.2);
    border-radius: 4px;
    padding: 0.75rem;
    margin-top: 0.75rem;
    color: #ffffff;
    font-size: 0.875rem;
    font-weight: 500;
}

.mono {
    font-family: ui-monospace, monospace;
}

.verified-pill {
    background: #22c55e;
    font-size: 0.75rem;
    font-weight: 700;
    padding: 0.25rem 0.5rem;
    border-radius: 4px;
}

.speed-chip {
    position: absolute;
    bottom: -1.5rem;
    left: -1.5rem;
    background: #ffffff;
    padding: 1rem;
    border-radius: 8px;
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
    display: flex;
    align-items: center;
    gap: 0.75rem;
    animation: bounce 3s infinite;
}

.chip-icon {
    background: #dbeafe;
    color: #2563eb;
    padding: 0.5rem;
    border-radius: 50%;
}

.chip-label {
    font-size: 0.75rem;
    color: #64748b;
    margin: 0;
}

.chip-value {
    font-size: 0.875rem;
    font-weight: 700;
    margin: 0;
}

@keyframes bounce {
    0%, 100% { transform: translateY(-15%); }
    50% { transform: translateY(0); }
}

/* Feature cards */
.features-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}

.feature-card {
    background: #ffffff;
    padding: 2rem;
    border-radius: 12px;
    border: 1px solid #f1f5f9;
    text-align: left;
    transition: box-shadow 0.3s ease;
}

.feature-card:hover {
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

.feature-icon {
    width: 3rem;
    height: 3rem;
    background: #eff6ff;
    color: #2563eb;
    border-radius: 8px;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 1.5rem;
    transition: all 0.3s ease;
}

.feature-card:hover .feature-icon {
    background: #2563eb;
    color: #ffffff;
}

.feature-card h3,
.step-card h3 {
    font-size: 1.125rem;
    font-weight: 700;
    color: #1e293b;
    margin: 0 0 0.75rem;
}

.feature-card p,
.step-card p {
    font-size: 0.875rem;
    line-height: 1.6;
    color: #64748b;
}

/* Steps */
.steps-row {
    position: relative;
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    gap: 2rem;
    max-width: 64rem;
    margin: 0 auto;
}

.steps-line {
    position: absolute;
    top: 2rem;
    left: 3rem;
    right: 3rem;
    height: 2px;
    background: #dbeafe;
}

.step-card {
    position: relative;
    z-index: 10;
    flex: 1;
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
}

.step-card p {
    max-width: 20rem;
}

.step-badge {
    position: relative;
    width: 4rem;
    height: 4rem;
    background: #2563eb;
    color: #ffffff;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 1.5rem;
    box-shadow: 0 0 0 4px #ffffff, 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    transition: transform 0.2s ease;
}

.step-card:hover .step-badge {
    transform: scale(1.1);
}

.step-number {
    position: absolute;
    top: -0.5rem;
    right: -0.5rem;
    width: 1.5rem;
    height: 1.5rem;
    background: #fbbf24;
    border: 2px solid #ffffff;
    border-radius: 50%;
    font-size: 0.75rem;
    font-weight: 700;
    display: flex;
    align-items: center;
    justify-content: center;
}

/* Pricing */
.pricing-grid {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 2rem;
    max-width: 72rem;
    margin: 0 auto;
    padding: 2.5rem 1rem;
}

.plan-slot {
    position: relative;
    width: 100%;
    max-width: 24rem;
    cursor: pointer;
    border-radius: 16px;
    transition: all 0.3s ease-in-out;
}

.plan-slot.idle {
    transform: scale(1);
    opacity: 0.9;
}

.plan-slot.idle:hover {
    transform: scale(1.02);
    opacity: 1;
}

.plan-slot.selected {
    transform: scale(1.05);
    z-index: 20;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    outline: 2px solid #bfdbfe;
}

.plan-slot.popular.idle {
    transform: translateY(-1rem);
    z-index: 10;
}

.plan-slot.popular.selected {
    transform: translateY(-1.5rem) scale(1.05);
    z-index: 30;
    outline: none;
}

.popular-tag {
    position: absolute;
    top: -1rem;
    left: 0;
    right: 0;
    display: flex;
    justify-content: center;
    z-index: 40;
}

.popular-tag span {
    background: #fbbf24;
    color: #ffffff;
    font-size: 0.75rem;
    font-weight: 700;
    padding: 0.25rem 1rem;
    border-radius: 9999px;
    animation: pulse 2s infinite;
}

@keyframes pulse {
    50% { opacity: 0.6; }
}

.pricing-card {
    background: #ffffff;
    border-radius: 16px;
    padding: 2rem;
    display: flex;
    flex-direction: column;
    height: 100%;
    border: 1px solid #f1f5f9;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.pricing-card.popular {
    border-color: #e2e8f0;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.card-header {
    display: flex;
    flex-direction: column;
    align-items: center;
    margin-bottom: 2rem;
}

.plan-icon {
    background: #f8fafc;
    color: #3b82f6;
    padding: 0.75rem;
    border-radius: 12px;
    margin-bottom: 1rem;
}

.card-header h3 {
    font-size: 1.25rem;
    font-weight: 700;
    margin: 0 0 0.5rem;
}

.plan-desc {
    font-size: 0.75rem;
    color: #64748b;
    height: 2rem;
}

.price {
    margin-top: 1.5rem;
    display: flex;
    align-items: flex-end;
    gap: 0.25rem;
}

.price .amount {
    font-size: 2.25rem;
    font-weight: 700;
}

.price .period {
    font-size: 0.875rem;
    color: #94a3b8;
    margin-bottom: 0.25rem;
}

.plan-features {
    flex: 1;
    list-style: none;
    padding: 0;
    margin: 0 0 2rem;
    text-align: left;
}

.plan-features li {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    font-size: 0.875rem;
    color: #475569;
    margin-bottom: 0.75rem;
}

.plan-features .tick {
    color: #14b8a6;
    flex-shrink: 0;
    margin-top: 2px;
}

.plan-button {
    width: 100%;
    padding: 0.75rem 0;
    border-radius: 8px;
    font-weight: 700;
    cursor: pointer;
    transition: background 0.2s ease;
}

.plan-button.accent {
    background: #fbbf24;
    color: #ffffff;
    border: none;
}

.plan-button.accent:hover {
    background: #f59e0b;
}

.plan-button.solid {
    background: #2563eb;
    color: #ffffff;
    border: none;
}

.plan-button.outline {
    background: #ffffff;
    color: #2563eb;
    border: 1px solid #bfdbfe;
}

.individual-card {
    position: relative;
    max-width: 48rem;
    margin: 4rem auto 0;
    background: #ffffff;
    border: 1px solid #ccfbf1;
    border-radius: 16px;
    padding: 2rem;
    overflow: hidden;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.individual-stripe {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 4px;
    background: #2dd4bf;
}

.individual-card h3 {
    font-size: 1.5rem;
    font-weight: 700;
    margin: 0 0 0.5rem;
}

.individual-lead {
    color: #64748b;
    margin-bottom: 1.5rem;
}

.individual-price {
    display: flex;
    align-items: flex-end;
    justify-content: center;
    gap: 0.25rem;
    margin-bottom: 1.5rem;
}

.individual-price .amount {
    font-size: 3rem;
    font-weight: 700;
    color: #14b8a6;
}

.individual-price .period {
    font-size: 1.125rem;
    color: #94a3b8;
    margin-bottom: 0.5rem;
}

.individual-copy {
    font-size: 0.875rem;
    color: #475569;
    max-width: 32rem;
    margin: 0 auto 2rem;
}

.teal-button {
    background: #2dd4bf;
    color: #ffffff;
    font-weight: 700;
    padding: 0.75rem 2rem;
    border: none;
    border-radius: 8px;
    cursor: pointer;
}

.teal-button:hover {
    background: #14b8a6;
}

.trust-row {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 2rem;
    margin-top: 2rem;
    font-size: 0.75rem;
    font-weight: 500;
    color: #64748b;
}

.trust-row > span {
    display: flex;
    align-items: center;
    gap: 0.375rem;
}

.trust-row .dot {
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 50%;
    background: #2dd4bf;
}

/* Footer */
.site-footer {
    background: #f1f5f9;
    padding: 4rem 1.5rem 2rem;
    border-top: 1px solid #e2e8f0;
}

.footer-grid {
    max-width: 1200px;
    margin: 0 auto 3rem;
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 3rem;
}

.footer-logo {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 1rem;
    font-size: 1.25rem;
    font-weight: 700;
}

.footer-logo .icon {
    color: #1d4ed8;
    fill: #1d4ed8;
}

.footer-brand p {
    font-size: 0.875rem;
    line-height: 1.6;
    color: #64748b;
}

.site-footer h4 {
    font-weight: 700;
    color: #1e293b;
    margin: 0 0 1rem;
}

.site-footer ul {
    list-style: none;
    padding: 0;
    margin: 0;
    font-size: 0.875rem;
    color: #64748b;
}

.site-footer li {
    margin-bottom: 0.5rem;
}

.footer-link {
    cursor: pointer;
}

.footer-link:hover {
    color: #2563eb;
}

.contact-list li {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.contact-glyph {
    width: 1rem;
    display: flex;
    justify-content: center;
}

.footer-bottom {
    max-width: 1200px;
    margin: 0 auto;
    border-top: 1px solid #e2e8f0;
    padding-top: 2rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
    font-size: 0.75rem;
    color: #64748b;
}

.legal-links {
    display: flex;
    gap: 1.5rem;
}

.legal-links a {
    color: inherit;
    text-decoration: none;
}

.legal-links a:hover {
    color: #1e293b;
}

@media (max-width: 1024px) {
    .hero-content,
    .pricing-grid {
        flex-direction: column;
    }

    .hero-copy {
        text-align: center;
    }

    .hero-cta-group,
    .hero-ticks {
        justify-content: center;
    }

    .features-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .plan-slot.popular.idle {
        transform: none;
    }

    .plan-slot.popular.selected {
        transform: scale(1.05);
    }
}

@media (max-width: 768px) {
    .hero h1 {
        font-size: 2.25rem;
    }

    .hero-cta-group,
    .steps-row,
    .footer-bottom {
        flex-direction: column;
    }

    .features-grid,
    .footer-grid {
        grid-template-columns: 1fr;
    }

    .steps-line {
        display: none;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn media_block(query: &str) -> &'static str {
        let start = LANDING_CSS.find(query).expect("media query present");
        let rest = &LANDING_CSS[start..];
        let end = rest.find("\n}\n").expect("media query closed");
        &rest[..end]
    }

    #[test]
    fn selected_popular_slot_still_scales_on_narrow_screens() {
        for query in ["@media (max-width: 1024px)", "@media (max-width: 768px)"] {
            let block = media_block(query);
            assert!(!block.contains("scale(1);"), "{} resets plan emphasis", query);
        }
        let tablet = media_block("@media (max-width: 1024px)");
        assert!(tablet.contains(".plan-slot.popular.selected {\n        transform: scale(1.05);"));
    }
}
