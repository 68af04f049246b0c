use crate::shared::details::DetailsViewModel;
use contracts::domain::a002_pricing_plan::aggregate::PricingPlan;

/// ViewModel for the pricing plan editor
pub type PlanDetailsViewModel = DetailsViewModel<PricingPlan>;

pub fn plan_title(snapshot: Option<&PricingPlan>) -> String {
    match snapshot {
        Some(plan) => format!("Edit plan: {}", plan.name),
        None => "New pricing plan".to_string(),
    }
}
