use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::models::Plan;
use crate::pages::content::PlanOffer;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: IconKind,
    pub title: AttrValue,
    pub desc: AttrValue,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card">
            <div class="feature-icon">
                <Icon kind={props.icon} />
            </div>
            <h3>{&props.title}</h3>
            <p>{&props.desc}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StepCardProps {
    pub number: AttrValue,
    pub icon: IconKind,
    pub title: AttrValue,
    pub desc: AttrValue,
}

#[function_component(StepCard)]
pub fn step_card(props: &StepCardProps) -> Html {
    html! {
        <div class="step-card">
            <div class="step-badge">
                <Icon kind={props.icon} size={28} />
                <span class="step-number">{&props.number}</span>
            </div>
            <h3>{&props.title}</h3>
            <p>{&props.desc}</p>
        </div>
    }
}

/// Classes of the clickable slot around a pricing card. Emphasis depends only
/// on whether this slot's plan is the selected one.
pub fn plan_slot_classes(plan: Plan, selected: bool) -> Classes {
    classes!(
        "plan-slot",
        plan.is_popular().then_some("popular"),
        if selected { "selected" } else { "idle" }
    )
}

/// The popular plan keeps its accent button; the others go solid when picked.
pub fn plan_button_class(plan: Plan, selected: bool) -> &'static str {
    if plan.is_popular() {
        "plan-button accent"
    } else if selected {
        "plan-button solid"
    } else {
        "plan-button outline"
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub offer: &'static PlanOffer,
    pub selected: bool,
    pub on_select: Callback<Plan>,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let offer = props.offer;
    let plan = offer.plan;

    let onclick = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(plan))
    };

    html! {
        <div class={plan_slot_classes(plan, props.selected)} {onclick}>
            {
                if plan.is_popular() {
                    html! { <div class="popular-tag"><span>{"Most Popular"}</span></div> }
                } else {
                    html! {}
                }
            }
            <div class={classes!("pricing-card", plan.is_popular().then_some("popular"))}>
                <div class="card-header">
                    <div class="plan-icon">
                        <Icon kind={offer.icon} />
                    </div>
                    <h3>{plan.label()}</h3>
                    <p class="plan-desc">{offer.desc}</p>
                    <div class="price">
                        <span class="amount">{offer.price}</span>
                        <span class="period">{offer.period}</span>
                    </div>
                </div>
                <ul class="plan-features">
                    { for offer.features.iter().map(|feat| html! {
                        <li key={*feat}>
                            <Icon kind={IconKind::Check} size={16} class={classes!("tick")} />
                            <span>{*feat}</span>
                        </li>
                    }) }
                </ul>
                <button type="button" class={plan_button_class(plan, props.selected)}>
                    {offer.button_text}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_selected_slot_is_emphasised() {
        for selected in Plan::ALL {
            for plan in Plan::ALL {
                let classes = plan_slot_classes(plan, plan == selected);
                assert_eq!(classes.contains("selected"), plan == selected);
                assert_eq!(classes.contains("idle"), plan != selected);
            }
        }
    }

    #[test]
    fn enterprise_selected_scenario() {
        let selected = Plan::Enterprise;
        assert!(plan_slot_classes(Plan::Enterprise, true).contains("selected"));
        assert!(!plan_slot_classes(Plan::Basic, Plan::Basic == selected).contains("selected"));
        assert!(!plan_slot_classes(Plan::Professional, Plan::Professional == selected).contains("selected"));
        assert_eq!(plan_button_class(Plan::Enterprise, true), "plan-button solid");
        assert_eq!(plan_button_class(Plan::Basic, false), "plan-button outline");
    }

    #[tokio::test]
    async fn rendered_enterprise_selection_emphasises_only_enterprise() {
        let selected = Plan::Enterprise;
        for plan in Plan::ALL {
            let html = yew::ServerRenderer::<PricingCard>::with_props(move || PricingCardProps {
                offer: crate::pages::content::offer(plan),
                selected: plan == selected,
                on_select: Callback::from(|_: Plan| ()),
            })
            .render()
            .await;
            assert_eq!(html.contains(" selected\""), plan == selected, "{}: {}", plan, html);
            assert!(html.contains(plan.label()));
        }
    }

    #[test]
    fn popular_slot_keeps_its_tag_and_accent() {
        assert!(plan_slot_classes(Plan::Professional, false).contains("popular"));
        assert!(!plan_slot_classes(Plan::Basic, true).contains("popular"));
        assert_eq!(plan_button_class(Plan::Professional, true), "plan-button accent");
        assert_eq!(plan_button_class(Plan::Professional, false), "plan-button accent");
    }
}
