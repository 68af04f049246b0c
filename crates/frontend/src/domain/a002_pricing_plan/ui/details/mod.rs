mod view;
mod view_model;

pub use view::PlanDetails;
pub use view_model::{plan_title, PlanDetailsViewModel};
