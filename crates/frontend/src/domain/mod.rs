pub mod a001_curriculum;
pub mod a002_pricing_plan;
