use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::models::{Plan, Section, ToolMode};

/// Everything the landing page remembers between clicks. Lives only for the
/// page session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LandingState {
    pub menu_open: bool,
    pub selected_plan: Plan,
    pub active_tool: ToolMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandingAction {
    ToggleMenu,
    /// A section link was followed; the mobile menu never stays open past it.
    Navigate(Section),
    SelectPlan(Plan),
    SelectTool(ToolMode),
}

impl Reducible for LandingState {
    type Action = LandingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        debug!("Landing action: {:?}", action);
        let next = match action {
            LandingAction::ToggleMenu => LandingState {
                menu_open: !self.menu_open,
                ..(*self).clone()
            },
            LandingAction::Navigate(_) => LandingState {
                menu_open: false,
                ..(*self).clone()
            },
            LandingAction::SelectPlan(plan) => LandingState {
                selected_plan: plan,
                ..(*self).clone()
            },
            LandingAction::SelectTool(mode) => LandingState {
                active_tool: mode,
                ..(*self).clone()
            },
        };

        // Keep the old Rc when nothing changed so the page doesn't re-render.
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: Rc<LandingState>, actions: &[LandingAction]) -> Rc<LandingState> {
        actions.iter().fold(state, |s, a| s.reduce(*a))
    }

    #[test]
    fn initial_state() {
        let state = LandingState::default();
        assert!(!state.menu_open);
        assert_eq!(state.selected_plan, Plan::Professional);
        assert_eq!(state.active_tool, ToolMode::Upload);
    }

    #[test]
    fn toggling_menu_twice_restores_visibility() {
        let start = Rc::new(LandingState::default());
        let opened = start.clone().reduce(LandingAction::ToggleMenu);
        assert!(opened.menu_open);
        let closed = opened.clone().reduce(LandingAction::ToggleMenu);
        assert!(!closed.menu_open);
        let reopened = closed.reduce(LandingAction::ToggleMenu);
        assert_eq!(*reopened, *opened);
    }

    #[test]
    fn following_any_section_link_closes_an_open_menu() {
        for section in Section::ALL {
            let state = apply(
                Rc::new(LandingState::default()),
                &[LandingAction::ToggleMenu, LandingAction::Navigate(section)],
            );
            assert!(!state.menu_open, "menu left open after {:?}", section);
        }
    }

    #[test]
    fn navigating_with_closed_menu_keeps_state() {
        let start = Rc::new(LandingState::default());
        let after = start.clone().reduce(LandingAction::Navigate(Section::Verify));
        assert!(Rc::ptr_eq(&start, &after));
    }

    #[test]
    fn navigating_leaves_plan_and_tool_alone() {
        let state = apply(
            Rc::new(LandingState::default()),
            &[
                LandingAction::SelectPlan(Plan::Basic),
                LandingAction::SelectTool(ToolMode::ManualId),
                LandingAction::ToggleMenu,
                LandingAction::Navigate(Section::Pricing),
            ],
        );
        assert_eq!(state.selected_plan, Plan::Basic);
        assert_eq!(state.active_tool, ToolMode::ManualId);
        assert!(!state.menu_open);
    }

    #[test]
    fn selecting_each_plan_makes_only_it_selected() {
        for plan in Plan::ALL {
            let state = Rc::new(LandingState::default()).reduce(LandingAction::SelectPlan(plan));
            assert_eq!(state.selected_plan, plan);
            let selected = Plan::ALL
                .into_iter()
                .filter(|p| *p == state.selected_plan)
                .count();
            assert_eq!(selected, 1);
        }
    }

    #[test]
    fn reselecting_plan_is_idempotent() {
        let start = Rc::new(LandingState::default()).reduce(LandingAction::SelectPlan(Plan::Enterprise));
        let again = start.clone().reduce(LandingAction::SelectPlan(Plan::Enterprise));
        assert!(Rc::ptr_eq(&start, &again));
    }

    #[test]
    fn selecting_each_tool_switches_mode() {
        for mode in ToolMode::ALL {
            let state = Rc::new(LandingState::default()).reduce(LandingAction::SelectTool(mode));
            assert_eq!(state.active_tool, mode);
        }
    }

    #[test]
    fn selecting_active_tool_is_a_no_op() {
        let start = Rc::new(LandingState::default());
        let after = start.clone().reduce(LandingAction::SelectTool(ToolMode::Upload));
        assert!(Rc::ptr_eq(&start, &after));
    }

    #[test]
    fn actions_only_touch_their_own_field() {
        let state = apply(
            Rc::new(LandingState::default()),
            &[
                LandingAction::ToggleMenu,
                LandingAction::SelectTool(ToolMode::Scan),
                LandingAction::SelectPlan(Plan::Basic),
            ],
        );
        assert_eq!(
            *state,
            LandingState {
                menu_open: true,
                selected_plan: Plan::Basic,
                active_tool: ToolMode::Scan,
            }
        );
    }
}
