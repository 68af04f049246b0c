use crate::shared::config::ApiConfig;
use crate::shared::remote::HttpCollection;
use contracts::domain::a002_pricing_plan::aggregate::PricingPlan;

pub const DELETE_QUESTION: &str = "Delete this pricing plan?";

/// Client for the pricing plan resource
pub fn client(api: &ApiConfig) -> HttpCollection<PricingPlan> {
    HttpCollection::new(api.pricing_plans_url())
}

/// Original price is shown struck through only when a different sale price exists
pub fn shows_discount(plan: &PricingPlan) -> bool {
    let sale = plan.sale_price.trim();
    !sale.is_empty() && sale != plan.price.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(price: &str, sale_price: &str) -> PricingPlan {
        PricingPlan {
            id: "1".to_string(),
            name: "Premium".to_string(),
            price: price.to_string(),
            sale_price: sale_price.to_string(),
            benefits: vec![],
        }
    }

    #[test]
    fn test_shows_discount() {
        assert!(shows_discount(&plan("4.990.000đ", "2.990.000đ")));
        assert!(!shows_discount(&plan("4.990.000đ", "")));
        assert!(!shows_discount(&plan("100", " 100 ")));
    }
}
