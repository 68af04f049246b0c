use crate::domain::common::catalog_record::take;
use crate::domain::common::serde_helpers::{lenient_string_list, lenient_text, string_or_number};
use crate::domain::common::{CatalogRecord, FieldValues};
use crate::shared::metadata::{FieldMetadata, Requirement};
use serde::{Deserialize, Serialize};

/// A pricing plan as returned by the `pricing_plans` resource
///
/// Prices are display strings ("2.990.000đ"), not numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlan {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub price: String,
    #[serde(rename = "salePrice", default, deserialize_with = "lenient_text")]
    pub sale_price: String,
    /// Ordered benefit lines; the resource stores them under `descript`
    #[serde(rename = "descript", default, deserialize_with = "lenient_string_list")]
    pub benefits: Vec<String>,
}

/// Request body for creating or replacing a plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlanDto {
    pub name: String,
    pub price: String,
    #[serde(rename = "salePrice")]
    pub sale_price: String,
    #[serde(rename = "descript")]
    pub benefits: Vec<String>,
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("name", "Plan name", Requirement::Always).with_placeholder("e.g. Premium"),
    FieldMetadata::new("price", "Original price", Requirement::Always)
        .with_placeholder("e.g. 4.990.000đ"),
    FieldMetadata::new("salePrice", "Sale price", Requirement::OnCreate)
        .with_placeholder("e.g. 2.990.000đ"),
];

impl CatalogRecord for PricingPlan {
    type Draft = PricingPlanDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "price" => Some(&self.price),
            "salePrice" => Some(&self.sale_price),
            _ => None,
        }
    }

    fn sub_items(&self) -> &[String] {
        &self.benefits
    }

    fn element_name() -> &'static str {
        "Plan"
    }

    fn list_name() -> &'static str {
        "Pricing plans"
    }

    fn sub_items_label() -> &'static str {
        "Benefits"
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn build_draft(fields: &FieldValues, sub_items: Vec<String>) -> Self::Draft {
        PricingPlanDto {
            name: take(fields, "name"),
            price: take(fields, "price"),
            sale_price: take(fields, "salePrice"),
            benefits: sub_items,
        }
    }

    fn from_draft(id: String, draft: Self::Draft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            sale_price: draft.sale_price,
            benefits: draft.benefits,
        }
    }
}
